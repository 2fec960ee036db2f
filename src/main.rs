use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use env_logger::Env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use yamlflat::config::Config;
use yamlflat::file::loader::{load_yaml_file, load_yaml_from_stdin};
use yamlflat::file::output::OutputSink;
use yamlflat::flatten::{Depth, Flattener, Separator};
use yamlflat::select_entry;
use yamlflat::yamlpath::IndexPolicy;

/// yamlflat - Flatten nested objects of a YAML document
#[derive(Parser)]
#[command(name = "yamlflat")]
#[command(version)]
#[command(about = "Flatten nested objects of the YAML", long_about = None)]
struct Cli {
    /// YAML file to read (.gz accepted); reads stdin when omitted and piped
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Entrypoint of an object, e.g. spec.containers[0]
    #[arg(short, long)]
    entry: Option<String>,

    /// Write into a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Depth of walking (negative for unlimited)
    #[arg(short, long, allow_negative_numbers = true)]
    depth: Option<i64>,

    /// Include empty values
    #[arg(short = 'A', long = "all")]
    include_empty: bool,

    /// Key - Value separator symbol (": " or "=")
    #[arg(short = 's', long = "symbol")]
    separator: Option<Separator>,

    /// Fail on malformed [N] index segments instead of using index 0
    #[arg(long)]
    strict_index: bool,

    /// Document to flatten in a multi-document stream
    #[arg(long, default_value_t = 0)]
    document: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    // CLI flags override config values
    let mut options = config.flatten_options();
    if let Some(depth) = cli.depth {
        options.depth = Depth::from_budget(depth);
    }
    if let Some(separator) = cli.separator {
        options.separator = separator;
    }
    options.include_empty |= cli.include_empty;
    let policy = if cli.strict_index {
        IndexPolicy::Strict
    } else {
        config.index_policy()
    };

    let root = match &cli.file {
        Some(path) => load_yaml_file(path, cli.document)?,
        None if !io::stdin().is_terminal() => load_yaml_from_stdin(cli.document)?,
        None => {
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    log::debug!("flatten options: {:?}, index policy: {:?}", options, policy);

    // Resolve before touching the output so a bad path never truncates a file
    let (node, prefix) = select_entry(&root, cli.entry.as_deref(), policy)?;
    log::debug!("flattening from [{}]", prefix.join("."));

    let mut sink = OutputSink::open(cli.output.as_deref())?;
    Flattener::new(options)
        .flatten(node, &prefix, &mut sink)
        .context("Failed to write output")?;
    sink.finish()
}
