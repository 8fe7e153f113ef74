//! Ohana Trie - command line driver.
//!
//! Loads configuration, sets up logging, and exercises the trie: a fixed
//! demo, autocomplete over a word list file, and config file helpers.

use clap::{Parser, Subcommand};
use ohana_trie_lib::config::{self, ConfigLoader, LogConfig, OhanaConfig};
use ohana_trie_lib::data_structures::{Limit, OhanaTrie, OhanaTrieConfig};
use ohana_trie_lib::error::{
    report_error, set_error_reporter, ErrorContext, OhanaError, OhanaResult, TracingErrorReporter,
};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "Ohana Trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Insert a few keys and show lookup and autocomplete
    Demo,

    /// Autocomplete a prefix against a word list file (one key per line)
    Complete {
        /// Word list to load
        #[clap(short, long, value_parser)]
        words: PathBuf,

        /// Prefix to complete
        #[clap(short, long, default_value = "")]
        prefix: String,

        /// Maximum number of results, negative for all (defaults to the configured limit)
        #[clap(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,

        /// Print results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> OhanaResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| OhanaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Inserts the sample keys and prints a lookup and an autocomplete.
fn run_demo(config: &OhanaConfig) {
    let mut trie = OhanaTrie::with_config(OhanaTrieConfig::from(&config.trie));
    trie.insert("cat", 1);
    trie.insert("car", 2);
    trie.insert("dog", 3);

    if let Some(value) = trie.get("car") {
        println!("car = {value}");
    }

    let completions: Vec<String> = trie.suggest("ca").iter().map(|v| v.to_string()).collect();
    println!("Autocomplete ca -> {}", completions.join(" "));
}

/// Loads `words` and prints the keys completing `prefix`, each with its
/// position in the list (blank lines not counted).
fn run_complete(
    config: &OhanaConfig,
    words: &Path,
    prefix: &str,
    limit: Option<i64>,
    json: bool,
) -> OhanaResult<()> {
    let mut trie = OhanaTrie::with_config(OhanaTrieConfig::from(&config.trie));
    let reader = BufReader::new(File::open(words)?);

    let mut position = 0usize;
    let loaded = trie.load_word_list(reader, |_| {
        position += 1;
        position
    })?;
    info!(loaded, path = ?words, "Word list loaded");

    let limit = limit.map(Limit::from).unwrap_or_else(|| config.trie.limit());
    let matches = trie.entries_with_prefix(prefix, limit);
    info!(prefix, %limit, found = matches.len(), "Autocomplete finished");

    if json {
        let items: Vec<serde_json::Value> = matches
            .iter()
            .map(|(key, position)| serde_json::json!({ "key": key, "position": position }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for (key, position) in matches {
            println!("{key}\t{position}");
        }
    }
    Ok(())
}

/// Writes the default configuration as TOML.
fn run_gen_config(output: &Path) -> OhanaResult<()> {
    let default_config = OhanaConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| OhanaError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Main entry point for the application.
fn main() -> OhanaResult<()> {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let loaded = loader.load();

    // Logging comes up before config errors are reported so they get logged
    let log_config = loaded.as_ref().map(|c| c.log.clone()).unwrap_or_default();
    init_logging(&log_config)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    let command = args.command.unwrap_or(Command::Demo);
    if let Command::GenConfig { output } = &command {
        return run_gen_config(output);
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            report_error(
                ErrorContext::new(e.into(), "config")
                    .with_details(format!("config file: {:?}", args.config)),
            );
            process::exit(1);
        }
    };
    config::init_global_config(config.clone());

    match command {
        Command::Demo => {
            run_demo(&config);
            Ok(())
        }
        Command::Complete {
            words,
            prefix,
            limit,
            json,
        } => run_complete(&config, &words, &prefix, limit, json).map_err(|e| {
            tracing::error!("Autocomplete failed: {}", e);
            e
        }),
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { .. } => Ok(()),
    }
}
