mod translate;

use std::process::ExitCode;

use clap::Command;
use clap::error::ErrorKind;
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "protrans";
    pub const BIN_NAME: &str = "protrans";
}

fn build_parser() -> Command {
    let command = Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Translate a DNA or RNA sequence into its protein string, stopping at the first stop codon.");
    translate::cli::add_translate_args(command)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

///
/// Fold a clap usage error into one line, dropping the usage block and hints.
///
fn usage_error_line(e: &clap::Error) -> String {
    let rendered = e.render().to_string();
    let message = rendered
        .lines()
        .map(str::trim)
        .take_while(|line| !line.starts_with("Usage:"))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    message
        .strip_prefix("error: ")
        .unwrap_or(&message)
        .to_string()
}

///
/// Join an error and its causes on one line, keeping the first line of each.
///
fn error_line(e: &anyhow::Error) -> String {
    e.chain()
        .filter_map(|cause| {
            let text = cause.to_string();
            text.lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .map(String::from)
        })
        .collect::<Vec<_>>()
        .join(": ")
}

fn main() -> ExitCode {
    let matches = match build_parser().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = e.print();
                    ExitCode::SUCCESS
                }
                _ => {
                    eprintln!("{}: error: {}", consts::PKG_NAME, usage_error_line(&e));
                    ExitCode::FAILURE
                }
            };
        }
    };

    init_logging(matches.get_flag(translate::cli::VERBOSE_ARG));

    match translate::handlers::run_translate(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: error: {}", consts::PKG_NAME, error_line(&e));
            ExitCode::FAILURE
        }
    }
}
