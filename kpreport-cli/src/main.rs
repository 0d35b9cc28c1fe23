// kpreport-cli/src/main.rs
//
// Entry point for the kpreport binary.
//
// Responsibilities:
// - Parsing command-line arguments.
// - Deciding whether console output is colored.
// - Setting up logging to stderr and the optional log file.
// - Dispatching to the command implementation.
// - Printing fatal errors and managing the exit code.

use clap::Parser;
use kpreport_cli::{Cli, Commands, init_logging, run_report};
use kpreport_core::terminal_output::{print_fatal, print_warning, should_use_color};
use std::process;

fn main() {
    let cli = Cli::parse();

    let color = !cli.no_color && should_use_color();
    if !color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    if let Err(e) = init_logging(cli.verbose, cli.log_file.as_deref(), color) {
        print_fatal(&format!("Error: {e}"));
        process::exit(1);
    }

    let command = cli.command.unwrap_or_else(Commands::default_report);
    let result = match command {
        Commands::Report(args) => run_report(args, color),
    };

    if let Err(e) = result {
        log::debug!("Run aborted: {e:?}");
        if e.is_incomplete_lookup() {
            print_warning(&format!("Error: {e}"));
        } else {
            print_fatal(&format!("Error: {e}"));
        }
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_report_defaults() {
        let cli = Cli::parse_from(["kpreport", "report"]);

        assert!(!cli.verbose);
        assert!(!cli.no_color);
        assert!(cli.log_file.is_none());
        match cli.command {
            Some(Commands::Report(args)) => {
                assert_eq!(args.input_list, PathBuf::from("fileList.txt"));
                assert_eq!(args.output, PathBuf::from("report.txt"));
                assert_eq!(args.durations, vec![90, 60, 30, 10, 5]);
                assert!(args.timeout.is_none());
            }
            None => panic!("Expected Report command"),
        }
    }

    #[test]
    fn test_parse_report_with_args() {
        let cli = Cli::parse_from([
            "kpreport",
            "report",
            "-i",
            "list.txt",
            "-o",
            "out.txt",
            "--durations",
            "120,45",
            "--timeout",
            "10",
            "--verbose",
            "--log-file",
            "run.log",
            "--no-color",
        ]);

        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.log_file, Some(PathBuf::from("run.log")));
        match cli.command {
            Some(Commands::Report(args)) => {
                assert_eq!(args.input_list, PathBuf::from("list.txt"));
                assert_eq!(args.output, PathBuf::from("out.txt"));
                assert_eq!(args.durations, vec![120, 45]);
                assert_eq!(args.timeout, Some(10));
            }
            None => panic!("Expected Report command"),
        }
    }

    #[test]
    fn test_parse_without_subcommand() {
        let cli = Cli::parse_from(["kpreport", "-v"]);
        assert!(cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_rejects_non_numeric_duration() {
        let result = Cli::try_parse_from(["kpreport", "report", "--durations", "90,abc"]);
        assert!(result.is_err());
    }
}
