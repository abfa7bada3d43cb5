//! Resolution of command-line flags and config files into generator options
//!
//! Precedence, lowest to highest: embedded defaults, `--config` file, flags.

use clap::ArgMatches;
use execctx_config::{GeneratorConfig, Loader};
use execctx_header::{Banner, GenerateError, GenerateOptions};
use std::path::PathBuf;

/// Build generator options from parsed arguments
pub fn resolve(matches: &ArgMatches) -> Result<GenerateOptions, GenerateError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }

    let config = loader
        .set_override_option(
            "pointers.destination_type",
            matches.get_one::<String>("pointer-type").cloned(),
        )
        .and_then(|l| {
            l.set_override_option(
                "banner.year",
                matches.get_one::<i32>("year").map(|year| i64::from(*year)),
            )
        })
        .and_then(Loader::build)
        .map_err(|err| GenerateError::Config(err.to_string()))?;

    // Paths bypass the config layer so non-UTF-8 names reach the filesystem intact
    let mut options = into_options(config);
    if let Some(input) = matches.get_one::<PathBuf>("input") {
        options.input = input.clone();
    }
    if let Some(output) = matches.get_one::<PathBuf>("output") {
        options.output = output.clone();
    }
    Ok(options)
}

fn into_options(config: GeneratorConfig) -> GenerateOptions {
    GenerateOptions {
        input: config.paths.input,
        output: config.paths.output,
        pointer_type: config.pointers.destination_type,
        banner: Banner {
            holder: config.banner.holder,
            first_year: config.banner.first_year,
            license: config.banner.license,
            year: config.banner.year,
        },
    }
}
