use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use protrans_core::{TranslateConfig, TranslationPipeline, UnknownCodonPolicy};
use protrans_io::{FileSink, FileSource};

use super::cli::{CONFIG_ARG, INPUT_ARG, OUTPUT_ARG, TABLE_ARG, UNKNOWN_ARG};

///
/// Build the run configuration: the config file if given, then flag overrides.
///
pub fn resolve_config(matches: &ArgMatches) -> Result<TranslateConfig> {
    let mut config = match matches.get_one::<String>(CONFIG_ARG) {
        Some(path) => TranslateConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load config file {}", path))?,
        None => TranslateConfig::default(),
    };

    if let Some(table) = matches.get_one::<u8>(TABLE_ARG) {
        config.table = *table;
    }
    if let Some(policy) = matches.get_one::<UnknownCodonPolicy>(UNKNOWN_ARG) {
        config.unknown = *policy;
    }

    Ok(config)
}

pub fn run_translate(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>(INPUT_ARG)
        .expect("input is required");
    let output = matches
        .get_one::<String>(OUTPUT_ARG)
        .expect("output is required");

    let config = resolve_config(matches)?;
    let code = config.genetic_code()?;

    info!(
        "Translating {} with the {} genetic code, unknown codons: {}",
        input, code, config.unknown
    );

    let protein = TranslationPipeline::new(&code)
        .with_policy(config.unknown)
        .with_rules(config.rules)
        .run(&FileSource, input, &FileSink, output)?;

    info!(
        "Wrote {} residues to {} ({})",
        protein.len(),
        output,
        protein.stop_reason()
    );

    Ok(())
}
