use crate::cli::Cli;
use crate::error::{CliError, Result};
use proseq::engine::config::{
    CodeFormat, ExtractionConfig, ExtractionConfigBuilder, FormatConfigBuilder, OutputStyle,
};
use proseq::engine::error::EngineError;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    format: Option<String>,
    #[serde(rename = "output-style")]
    output_style: Option<String>,
}

/// Options read from a TOML configuration file. Every field is optional; command-line
/// flags take precedence over anything set here.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    output: Option<PartialOutputConfig>,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!(
                "Cannot read configuration file '{}': {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_with_cli(self, cli: &Cli) -> Result<ExtractionConfig> {
        let output = self.output.unwrap_or_default();

        let code_format = match cli.format {
            Some(arg) => CodeFormat::from(arg),
            None => output
                .format
                .as_deref()
                .map(str::parse::<CodeFormat>)
                .transpose()
                .map_err(EngineError::from)?
                .unwrap_or_default(),
        };
        let output_style = match cli.output_style {
            Some(arg) => OutputStyle::from(arg),
            None => output
                .output_style
                .as_deref()
                .map(str::parse::<OutputStyle>)
                .transpose()
                .map_err(EngineError::from)?
                .unwrap_or_default(),
        };

        let format = FormatConfigBuilder::new()
            .code_format(code_format)
            .output_style(output_style)
            .build();

        ExtractionConfigBuilder::new()
            .source_path(cli.source.clone())
            .target_path(cli.target.clone())
            .format(format)
            .build()
            .map_err(|e| CliError::Proseq(e.into()))
    }
}
