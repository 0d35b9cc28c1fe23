// kpreport-cli/src/commands/report.rs
//
// Contains the logic for the 'report' subcommand.

use crate::cli::ReportArgs;
use crate::error::CliResult;

use console::style;
use kpreport_core::utils::format_timecode;
use kpreport_core::{
    BatchSummary, ConsoleProgressSink, CoreConfig, CoreConfigBuilder, FfprobeDurationProbe,
    KinopoiskClient, generate_report,
};
use log::{debug, info};
use std::path::Path;
use std::time::{Duration, Instant};

/// Turns the parsed arguments into a core configuration.
pub fn build_config(args: &ReportArgs) -> CoreConfig {
    let mut builder = CoreConfigBuilder::new()
        .input_list(&args.input_list)
        .output_path(&args.output)
        .duration_buckets(args.durations.clone());

    if let Some(url) = &args.api_url {
        builder = builder.api_url(url);
    }
    if let Some(client_id) = &args.client_id {
        builder = builder.client_id(client_id);
    }
    if let Some(secs) = args.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Runs the report for one invocation and prints the run summary.
pub fn run_report(args: ReportArgs, color: bool) -> CliResult<BatchSummary> {
    let total_start_time = Instant::now();

    let config = build_config(&args);
    config.validate()?;
    debug!(
        "Input list: {}, output: {}, buckets: {:?}",
        config.input_list.display(),
        config.output_path.display(),
        config.duration_buckets
    );

    let catalog = KinopoiskClient::new(&config.catalog)?;
    let mut console = ConsoleProgressSink::new(color);
    let summary = generate_report(&config, catalog, FfprobeDurationProbe::new(), &mut console)?;

    info!(
        "Report finished: {} record(s) in {:.2?}",
        summary.processed, summary.elapsed
    );
    print_summary(&summary, &config.output_path, total_start_time.elapsed());

    Ok(summary)
}

fn summary_line(summary: &BatchSummary, output: &Path) -> String {
    format!(
        "Wrote {} record(s) to {}",
        summary.processed,
        output.display()
    )
}

fn print_summary(summary: &BatchSummary, output: &Path, elapsed: Duration) {
    println!("{}", style(summary_line(summary, output)).green());
    println!(
        "{} {}",
        style("Total execution time:").bold(),
        format_timecode(elapsed.as_secs_f64())
    );
}
