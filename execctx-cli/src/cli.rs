// Shared with build.rs, which includes this file to generate completions.

use clap::{value_parser, Arg, ArgAction, Command, ValueHint};

/// Argument definition for `execctx-gen`
pub fn build_cli() -> Command {
    Command::new("execctx-gen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate the 32-bit pointer variant of the AICExecContext header")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("Header containing `typedef struct AICExecContext_ { ... } AICExecContext;` (default: ../../AICMetadataExecCtx.h)")
                .value_parser(value_parser!(std::path::PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Header to write (default: ../deps-generated/execContextGenerated_32bitPointers.h)")
                .value_parser(value_parser!(std::path::PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("pointer-type")
                .long("pointer-type")
                .short('t')
                .help("Scalar type written in place of every pointer field (default: uint32_t)"),
        )
        .arg(
            Arg::new("year")
                .long("year")
                .help("End year of the copyright range (default: current year)")
                .value_parser(value_parser!(i32)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults")
                .value_parser(value_parser!(std::path::PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence")
                .action(ArgAction::Count),
        )
}
