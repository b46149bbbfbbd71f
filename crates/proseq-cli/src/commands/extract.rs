use crate::cli::Cli;
use crate::config::PartialConfig;
use crate::error::Result;
use proseq::engine::progress::{Progress, ProgressCallback, ProgressReporter};
use proseq::workflows;
use tracing::{debug, info};

pub fn run(cli: &Cli) -> Result<()> {
    let partial_config = match &cli.config {
        Some(path) => PartialConfig::from_file(path)?,
        None => PartialConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(cli)?;

    println!("Processing PDB file: {}", config.source_path.display());
    println!(
        "Output format: {}, Output style: {}",
        config.format.code_format, config.format.output_style
    );

    let reporter = ProgressReporter::with_callback(progress_callback());
    info!("Invoking the extraction workflow...");
    let summary = workflows::extract::run(&config, &reporter)?;

    info!(
        "Workflow finished: {} residue(s) from {} chain(s), {} line(s) skipped.",
        summary.residue_count, summary.chain_count, summary.skipped_lines
    );
    println!(
        "✓ Sequence written successfully to '{}'",
        summary.target_path.display()
    );

    Ok(())
}

fn progress_callback() -> ProgressCallback<'static> {
    Box::new(|progress: Progress| {
        if let Some(line) = render_progress(&progress) {
            println!("{}", line);
        }
    })
}

/// Text shown on stdout for a progress event, if any.
fn render_progress(progress: &Progress) -> Option<String> {
    match progress {
        Progress::PhaseStart { name } => {
            debug!("Phase '{}' started.", name);
            None
        }
        Progress::PhaseFinish => None,
        Progress::Message(msg) => Some(format!("  {}", msg)),
    }
}
