use clap::{Arg, ArgAction, Command, value_parser};

use protrans_core::UnknownCodonPolicy;

pub const INPUT_ARG: &str = "input";
pub const OUTPUT_ARG: &str = "output";
pub const TABLE_ARG: &str = "table";
pub const UNKNOWN_ARG: &str = "unknown";
pub const CONFIG_ARG: &str = "config";
pub const VERBOSE_ARG: &str = "verbose";

pub fn add_translate_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(INPUT_ARG)
                .required(true)
                .index(1)
                .help("Nucleotide sequence to translate (.gz allowed, '-' for stdin)"),
        )
        .arg(
            Arg::new(OUTPUT_ARG)
                .required(true)
                .index(2)
                .help("Where to write the protein string (.gz allowed, '-' for stdout)"),
        )
        .arg(
            Arg::new(TABLE_ARG)
                .long("table")
                .short('t')
                .required(false)
                .value_parser(value_parser!(u8))
                .help("NCBI genetic code id: 1, 2, 3, 4, 5, 6 or 11 [default: 1]"),
        )
        .arg(
            Arg::new(UNKNOWN_ARG)
                .long("unknown")
                .required(false)
                .value_parser(|s: &str| s.parse::<UnknownCodonPolicy>())
                .help("What to do with an unrecognized codon: stop, error or mark [default: stop]"),
        )
        .arg(
            Arg::new(CONFIG_ARG)
                .long("config")
                .short('c')
                .required(false)
                .help("TOML file with table, unknown and [rules] settings; flags take precedence"),
        )
        .arg(
            Arg::new(VERBOSE_ARG)
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Log progress to stderr"),
        )
}
