//! CLI for pwgen: randomized passwords from a configurable pool of symbols.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches, Parser};
use pwgen_core::{Catalog, DEFAULT_COUNT, DEFAULT_LENGTH, GeneratorConfig, SeedSource};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nLicense GPL-3.0-or-later <http://gnu.org/licenses/gpl.html>",
    "\nThis is free software: you are free to change and redistribute it.",
    "\nThere is NO WARRANTY, to the extent permitted by law.",
    "\n\nWritten by Juho Rosqvist",
);

#[derive(Parser, Debug)]
#[command(name = "pwgen")]
#[command(about = "Generate random strings from a pool of symbols")]
#[command(
    long_about = "Generate random strings from a pool of symbols.\n\n\
All characters from non-option arguments are combined into a pool of symbols \
from which the random strings are formed. Each symbol has an equal probability \
of being picked (counting multiplicity). Predefined symbol sets can be included \
with -S. If no symbols are specified, the program runs as if `-S asciipns` was given."
)]
#[command(version = pwgen_core::VERSION, long_version = LONG_VERSION)]
#[command(override_usage = "pwgen [OPTIONS] [--] [SYMBOLS]...")]
struct Cli {
    /// Append a predefined symbol set to the pool. Repeatable.
    /// `help` lists the predefined sets and exits.
    #[arg(short = 'S', long = "symbols", value_name = "SET")]
    symbols: Vec<String>,

    /// Number of strings to generate
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Characters in each string
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Read the random seed from FILE instead of the operating system
    /// (e.g. /dev/urandom)
    #[arg(short = 'r', long = "random-seed", value_name = "FILE")]
    random_seed: Option<PathBuf>,

    /// Literal characters to add to the pool
    #[arg(value_name = "SYMBOLS")]
    literals: Vec<String>,
}

impl Cli {
    /// Parse the process arguments, listing the predefined sets in `--help`.
    fn parse_with_catalog(catalog: &Catalog) -> Self {
        let command = Cli::command().after_help(format!(
            "Predefined symbol sets:\n{}",
            commands::symbols::listing(catalog)
        ));
        let matches = command.get_matches();
        Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    /// Whether `-S help` was given. Set names before the first `help` must
    /// still resolve.
    fn lists_symbol_sets(&self, catalog: &Catalog) -> pwgen_core::Result<bool> {
        for name in &self.symbols {
            if name == "help" {
                return Ok(true);
            }
            catalog.resolve(name)?;
        }
        Ok(false)
    }

    fn into_config(self) -> GeneratorConfig {
        GeneratorConfig {
            count: self.count,
            length: self.length,
            symbol_sets: self.symbols,
            literals: self.literals,
            seed_source: self
                .random_seed
                .map(SeedSource::File)
                .unwrap_or_default(),
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let catalog = Catalog::predefined();
    let cli = Cli::parse_with_catalog(&catalog);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    match cli.lists_symbol_sets(&catalog) {
        Ok(true) => {
            let result = commands::symbols::run(&catalog, &mut out).map_err(Into::into);
            return commands::exit_code(result, &mut err);
        }
        Ok(false) => {}
        Err(e) => return commands::exit_code(Err(e), &mut err),
    }

    let config = cli.into_config();
    let result = commands::generate::run(&config, &catalog, &mut out, &mut err);
    commands::exit_code(result, &mut err)
}
