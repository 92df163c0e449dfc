//! Command-line interface for weave
//! Parses class descriptions and renders them as DSL, GDScript or JSON, and exports whole projects.
//!
//! Usage:
//!   weave parse `<path>` [--format `<format>`]      - Render one class (DSL text, or a JSON record)
//!   weave validate `<path>`                       - Report parse errors and dropped data
//!   weave compress `<path>`                       - Strip insignificant whitespace
//!   weave expand `<path>`                         - Spread a description over several lines
//!   weave export `<out-dir>` `<paths>`... [--name `<name>`] - Write scripts and the manifest
//!   weave list-formats                          - List all available output formats
//!
//! Global options: --config `<file>` layers a TOML file over the defaults, --log-level
//! overrides `logging.level`.

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};
use tracing::warn;
use weave::config::{Loader, WeaveConfig};
use weave::dsl::formats::FormatRegistry;
use weave::dsl::{validate_project, ClassRecord, DslParser, ExportPlan, Validation};
use weave::logging::init_logging;

const LOCAL_CONFIG: &str = "weave.toml";

fn main() {
    let matches = Command::new("weave")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and rendering weave class descriptions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Configuration file layered over the built-in defaults (default: ./weave.toml if present)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Log filter, e.g. 'debug' or 'weave=trace' (RUST_LOG wins)"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a class and render it")
                .arg(
                    Arg::new("path")
                        .help("DSL file, or a .json record")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'gdscript', 'dsl', 'json')")
                        .default_value("gdscript"),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Validate a DSL file")
                .arg(
                    Arg::new("path")
                        .help("Path to the DSL file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("compress")
                .about("Remove insignificant whitespace from a DSL file")
                .arg(
                    Arg::new("path")
                        .help("Path to the DSL file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("expand")
                .about("Lay a DSL file out one section per line")
                .arg(
                    Arg::new("path")
                        .help("Path to the DSL file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export classes as a project tree")
                .arg(
                    Arg::new("out-dir")
                        .help("Directory to write into")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .index(1),
                )
                .arg(
                    Arg::new("paths")
                        .help("DSL files or .json records, one class each")
                        .required(true)
                        .action(ArgAction::Append)
                        .index(2),
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .short('n')
                        .help("Project name written to the manifest")
                        .default_value("weave_project"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    let config = load_config(&matches);
    init_logging(&config.logging);

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = required(parse_matches, "path");
            let format = required(parse_matches, "format");
            handle_parse_command(&config, path, format);
        }
        Some(("validate", validate_matches)) => {
            handle_validate_command(required(validate_matches, "path"));
        }
        Some(("compress", compress_matches)) => {
            let source = read_source(required(compress_matches, "path"));
            println!("{}", weave::dsl::compress(&source));
        }
        Some(("expand", expand_matches)) => {
            let source = read_source(required(expand_matches, "path"));
            println!("{}", weave::dsl::expand(&source));
        }
        Some(("export", export_matches)) => {
            let Some(out_dir) = export_matches.get_one::<PathBuf>("out-dir") else {
                fail("missing output directory");
            };
            let paths: Vec<&str> = export_matches
                .get_many::<String>("paths")
                .map(|values| values.map(String::as_str).collect())
                .unwrap_or_default();
            let name = required(export_matches, "name");
            handle_export_command(&config, out_dir, &paths, name);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command(&config);
        }
        _ => unreachable!(),
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    match matches.get_one::<String>(id) {
        Some(value) => value,
        None => fail(format!("missing argument '{}'", id)),
    }
}

/// Defaults, then `--config` (or `./weave.toml` when present), then flags
fn load_config(matches: &ArgMatches) -> WeaveConfig {
    let mut loader = match matches.get_one::<PathBuf>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(LOCAL_CONFIG),
    };
    if let Some(level) = matches.get_one::<String>("log-level") {
        loader = loader
            .set_override("logging.level", level.as_str())
            .unwrap_or_else(|e| fail(format!("Invalid log level: {}", e)));
    }
    loader
        .build()
        .unwrap_or_else(|e| fail(format!("Error loading configuration: {}", e)))
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("Error reading file {}: {}", path, e)))
}

/// A `.json` file holds a serialized record; anything else is DSL text
fn load_record(path: &str) -> ClassRecord {
    let source = read_source(path);
    if Path::new(path).extension().is_some_and(|ext| ext == "json") {
        return serde_json::from_str(&source)
            .unwrap_or_else(|e| fail(format!("Invalid record in {}: {}", path, e)));
    }

    let parsed = DslParser::new()
        .parse_with_diagnostics(source.trim_end())
        .unwrap_or_else(|e| fail(format!("Parse error in {}: {}", path, e)));
    for diagnostic in &parsed.diagnostics {
        warn!(file = path, "{diagnostic}");
    }
    parsed.record
}

fn handle_parse_command(config: &WeaveConfig, path: &str, format: &str) {
    let registry = FormatRegistry::configured(&config.emit);
    let record = load_record(path);
    let output = registry
        .serialize(&record, format)
        .unwrap_or_else(|e| fail(e));
    print!("{}", output);
}

fn handle_validate_command(path: &str) {
    let source = read_source(path);
    let validation = Validation::with_parser(&DslParser::new(), source.trim_end());

    for error in &validation.errors {
        println!("error: {}", error);
    }
    for warning in &validation.warnings {
        println!("warning: {}", warning);
    }
    if !validation.valid {
        std::process::exit(1);
    }
    println!("{}: valid", path);
}

fn handle_export_command(config: &WeaveConfig, out_dir: &Path, paths: &[&str], name: &str) {
    let records: Vec<ClassRecord> = paths.iter().map(|path| load_record(path)).collect();

    let report = validate_project(&records);
    for warning in &report.warnings {
        eprintln!("warning: {}", warning);
    }
    if !report.is_ok() {
        fail(report.errors.join("; "));
    }

    let plan = ExportPlan::build(name, &records, &config.export, &config.emit.indent)
        .unwrap_or_else(|e| fail(e));
    plan.write_to(out_dir)
        .unwrap_or_else(|e| fail(format!("Error writing {}: {}", out_dir.display(), e)));

    println!("Exported {} files to {}", plan.len(), out_dir.display());
}

fn handle_list_formats_command(config: &WeaveConfig) {
    let registry = FormatRegistry::configured(&config.emit);
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        println!("  {}", name);
        if let Some(formatter) = registry.get(&name) {
            println!("    {}", formatter.description());
        }
    }
}
