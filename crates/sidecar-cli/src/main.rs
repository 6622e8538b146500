//! nth-of-type CLI.

use clap::Parser;
use sidecar_cli::cli::{Cli, OutputFormatArg};
use sidecar_cli::commands::run_nth_of_type;
use sidecar_cli::logging::init_logging;
use sidecar_cli::report::render_json;
use sidecar_cli::summary::print_summary;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config();
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run_nth_of_type(&cli) {
        Ok(result) => match cli.format {
            OutputFormatArg::Table => {
                print_summary(&result);
                0
            }
            OutputFormatArg::Json => match render_json(&result) {
                Ok(json) => {
                    println!("{json}");
                    0
                }
                Err(error) => {
                    eprintln!("error: failed to render report: {error}");
                    1
                }
            },
        },
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}
