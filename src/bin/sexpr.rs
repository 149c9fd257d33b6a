//! Command-line interface for sexpr
//! Parses or tokenizes s-expression files and prints the result in a chosen format.
//!
//! Usage:
//!   sexpr parse `<path|->` [--format `<format>`] [--parser `<parser>`] [--max-depth `<n>`]
//!   sexpr tokenize `<path|->` [--patterns `<file>`] [--skip `<kind>`]... [--format simple|json]
//!   sexpr formats
//!
//! Set `RUST_LOG` (or pass `--verbose`) to see why a parse failed.

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use sexpr::sexpr::formats::{tokens_to_json, tokens_to_simple};
use sexpr::sexpr::lexing::{load_table, PatternKind, SexprPattern, TokenStream};
use sexpr::sexpr::parsing::{ParseOptions, Parser};
use sexpr::sexpr::processor::{describe_formats, process, ProcessingSpec};

fn main() {
    let matches = Command::new("sexpr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for tokenizing and parsing s-expressions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a file and print the value")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'ast-canonical', 'ast-treeviz')")
                        .default_value("ast-canonical"),
                )
                .arg(
                    Arg::new("parser")
                        .long("parser")
                        .short('p')
                        .help("Parser implementation")
                        .value_parser(["descent", "combinator"])
                        .default_value("descent"),
                )
                .arg(
                    Arg::new("max-depth")
                        .long("max-depth")
                        .help("Reject s-expressions nested deeper than this")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("tokenize")
                .about("Tokenize a file and print the tokens")
                .arg(path_arg())
                .arg(
                    Arg::new("patterns")
                        .long("patterns")
                        .help("Pattern table file (YAML, or JSON with a .json extension)"),
                )
                .arg(
                    Arg::new("skip")
                        .long("skip")
                        .action(ArgAction::Append)
                        .help("Drop tokens of this kind (repeatable)"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_parser(["simple", "json"])
                        .default_value("simple"),
                ),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    let result = match matches.subcommand() {
        Some(("parse", parse_matches)) => handle_parse_command(parse_matches),
        Some(("tokenize", tokenize_matches)) => handle_tokenize_command(tokenize_matches),
        Some(("formats", _)) => {
            handle_formats_command();
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the input file, or - for stdin")
        .required(true)
        .index(1)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn read_source(path: &str) -> Result<String, std::io::Error> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches) -> CliResult {
    let path = required(matches, "path")?;
    let spec = ProcessingSpec::from_string(required(matches, "format")?)?;
    let parser: Parser = required(matches, "parser")?.parse()?;
    let options = ParseOptions {
        max_depth: matches.get_one::<usize>("max-depth").copied(),
    };

    let source = read_source(path)?;
    let output = process(&source, &spec, parser, &options)?;
    println!("{}", output.trim_end());
    Ok(())
}

/// Handle the tokenize command
fn handle_tokenize_command(matches: &ArgMatches) -> CliResult {
    let path = required(matches, "path")?;
    let skip: Vec<String> = matches
        .get_many::<String>("skip")
        .map(|names| names.cloned().collect())
        .unwrap_or_default();
    let json = required(matches, "format")? == "json";

    let source = read_source(path)?;
    let output = match matches.get_one::<String>("patterns") {
        Some(table_path) => {
            let table = load_table(Path::new(table_path))?;
            render_tokens(&table.tokenize(&source), &skip, json)?
        }
        None => render_tokens(&SexprPattern::table().tokenize(&source), &skip, json)?,
    };
    print!("{}", output);
    Ok(())
}

fn render_tokens<K: PatternKind>(
    tokens: &TokenStream<'_, K>,
    skip: &[String],
    json: bool,
) -> Result<String, serde_json::Error> {
    let kept = tokens.filter(|token| !skip.iter().any(|name| name == token.kind.name()));
    if json {
        tokens_to_json(&kept).map(|s| s + "\n")
    } else {
        Ok(tokens_to_simple(&kept))
    }
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Available formats:\n");
    for (format, description) in describe_formats() {
        println!("  {:<15} {}", format, description);
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, String> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| format!("missing argument '{}'", name))
}
