use clap::{Parser, ValueEnum};
use proseq::engine::config::{CodeFormat, OutputStyle};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Proseq - Extract the protein sequence from a PDB file and write it to a target file.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the PDB source file.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Path to the target file for the sequence. Created or overwritten.
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Output format of the amino acid codes [default: one-letter]
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<CodeFormatArg>,

    /// Output style: all codes on one line, or one code per line [default: single-line]
    #[arg(long = "output-style", value_enum, value_name = "STYLE")]
    pub output_style: Option<OutputStyleArg>,

    /// Path to a configuration file in TOML format providing default options.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeFormatArg {
    OneLetter,
    ThreeLetter,
}

impl From<CodeFormatArg> for CodeFormat {
    fn from(arg: CodeFormatArg) -> Self {
        match arg {
            CodeFormatArg::OneLetter => CodeFormat::OneLetter,
            CodeFormatArg::ThreeLetter => CodeFormat::ThreeLetter,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyleArg {
    SingleLine,
    MultiLine,
}

impl From<OutputStyleArg> for OutputStyle {
    fn from(arg: OutputStyleArg) -> Self {
        match arg {
            OutputStyleArg::SingleLine => OutputStyle::SingleLine,
            OutputStyleArg::MultiLine => OutputStyle::MultiLine,
        }
    }
}
