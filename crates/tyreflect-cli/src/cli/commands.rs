//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! Commands that run the transform accept the same set of config flags.

use clap::Command;

use super::args::*;

/// Add the transform config flags.
fn with_config_args(cmd: Command) -> Command {
    cmd.arg(config_file_arg())
        .arg(entry_point_arg())
        .arg(register_reducer_arg())
        .arg(register_type_arg())
        .arg(namespace_arg())
        .arg(runtime_module_arg())
        .arg(placeholder_module_arg())
        .arg(no_untyped_warnings_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("tyreflect")
        .about("Carry TypeScript parameter types into runtime type registrations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(transform_command())
        .subcommand(check_command())
        .subcommand(scalars_command())
        .subcommand(langs_command())
}

/// Rewrite one file.
pub fn transform_command() -> Command {
    let cmd = Command::new("transform")
        .about("Rewrite a source file and print the result")
        .override_usage(
            "\
  tyreflect transform <FILE>
  tyreflect transform <FILE> -o <OUT> [--source-map]",
        )
        .after_help(
            r#"EXAMPLES:
  tyreflect transform src/index.ts                        # print to stdout
  tyreflect transform src/index.ts -o dist/index.ts       # write to file
  tyreflect transform src/index.ts -o out.ts --source-map # also write out.ts.map
  tyreflect transform src/index.ts --config tyreflect.json"#,
        )
        .arg(file_arg())
        .arg(output_file_arg())
        .arg(source_map_arg())
        .arg(no_sources_content_arg())
        .arg(color_arg());

    with_config_args(cmd)
}

/// Report what the transform would do.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Report which files would be rewritten, without writing anything")
        .override_usage("  tyreflect check <FILE>... [--strict]")
        .after_help(
            r#"EXAMPLES:
  tyreflect check src/index.ts             # one file
  tyreflect check src/*.ts                 # many files
  tyreflect check src/*.ts --strict        # fail on warnings"#,
        )
        .arg(files_arg())
        .arg(strict_arg())
        .arg(color_arg());

    with_config_args(cmd)
}

/// List scalar placeholder types.
pub fn scalars_command() -> Command {
    Command::new("scalars")
        .about("List scalar placeholder types and their runtime descriptions")
        .after_help(
            r#"EXAMPLES:
  tyreflect scalars                 # runtime namespace `type`
  tyreflect scalars --namespace t   # custom namespace"#,
        )
        .arg(namespace_arg())
}

/// List supported languages.
pub fn langs_command() -> Command {
    Command::new("langs").about("List supported languages")
}
