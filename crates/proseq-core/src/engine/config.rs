use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Unknown code format '{0}'. Expected 'one-letter' or 'three-letter'.")]
    UnknownCodeFormat(String),
    #[error("Unknown output style '{0}'. Expected 'single-line' or 'multi-line'.")]
    UnknownOutputStyle(String),
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// How each residue is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodeFormat {
    #[default]
    OneLetter,
    ThreeLetter,
}

impl CodeFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeFormat::OneLetter => "one-letter",
            CodeFormat::ThreeLetter => "three-letter",
        }
    }
}

impl FromStr for CodeFormat {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one-letter" => Ok(CodeFormat::OneLetter),
            "three-letter" => Ok(CodeFormat::ThreeLetter),
            _ => Err(ConfigError::UnknownCodeFormat(s.to_string())),
        }
    }
}

impl fmt::Display for CodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How residue codes are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputStyle {
    #[default]
    SingleLine,
    MultiLine,
}

impl OutputStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputStyle::SingleLine => "single-line",
            OutputStyle::MultiLine => "multi-line",
        }
    }
}

impl FromStr for OutputStyle {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single-line" => Ok(OutputStyle::SingleLine),
            "multi-line" => Ok(OutputStyle::MultiLine),
            _ => Err(ConfigError::UnknownOutputStyle(s.to_string())),
        }
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatConfig {
    pub code_format: CodeFormat,
    pub output_style: OutputStyle,
}

impl FormatConfig {
    /// Separator placed between residue tokens.
    pub fn separator(&self) -> &'static str {
        match (self.output_style, self.code_format) {
            (OutputStyle::MultiLine, _) => "\n",
            (OutputStyle::SingleLine, CodeFormat::OneLetter) => "",
            (OutputStyle::SingleLine, CodeFormat::ThreeLetter) => " ",
        }
    }
}

#[derive(Default)]
pub struct FormatConfigBuilder {
    code_format: Option<CodeFormat>,
    output_style: Option<OutputStyle>,
}

impl FormatConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code_format(mut self, format: CodeFormat) -> Self {
        self.code_format = Some(format);
        self
    }
    pub fn output_style(mut self, style: OutputStyle) -> Self {
        self.output_style = Some(style);
        self
    }

    pub fn build(self) -> FormatConfig {
        FormatConfig {
            code_format: self.code_format.unwrap_or_default(),
            output_style: self.output_style.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    pub source_path: PathBuf,
    pub target_path: PathBuf,
    pub format: FormatConfig,
}

#[derive(Default)]
pub struct ExtractionConfigBuilder {
    source_path: Option<PathBuf>,
    target_path: Option<PathBuf>,
    format: Option<FormatConfig>,
}

impl ExtractionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_path(mut self, path: PathBuf) -> Self {
        self.source_path = Some(path);
        self
    }
    pub fn target_path(mut self, path: PathBuf) -> Self {
        self.target_path = Some(path);
        self
    }
    pub fn format(mut self, format: FormatConfig) -> Self {
        self.format = Some(format);
        self
    }

    pub fn build(self) -> Result<ExtractionConfig, ConfigError> {
        Ok(ExtractionConfig {
            source_path: self
                .source_path
                .ok_or(ConfigError::MissingParameter("source_path"))?,
            target_path: self
                .target_path
                .ok_or(ConfigError::MissingParameter("target_path"))?,
            format: self.format.unwrap_or_default(),
        })
    }
}
