//! Seqtag preprocessing tool
//!
//! Converts tagged corpora to BIO, builds word/label alphabets and encodes
//! sentences into id sequences.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use seqtag_core::TagSchema;
use seqtag_core::alphabet::{AlphabetConfig, LookupPolicy, SymbolTable, TableKind};
use seqtag_corpus::{
    Corpus, FieldAlphabets, InvalidPolicy, LoaderConfig, load_data, prepare_folder, save_all,
};
use tracing::{info, level_filters::LevelFilter};

/// CLI arguments
#[derive(Parser)]
#[command(name = "seqtag-prep")]
#[command(about = "Normalize tagged corpora to BIO and build symbol tables")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a corpus to BIO and write it back out
    Convert {
        /// Input corpus
        input: PathBuf,
        /// Output corpus
        #[arg(short, long)]
        output: PathBuf,
        #[command(flatten)]
        load: LoadArgs,
    },
    /// Build and save word and label alphabets
    Alphabet {
        /// Input corpora
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Directory receiving words.json and labels.json
        #[arg(short = 'd', long, env = "SEQTAG_ALPHABET_DIR")]
        dir: PathBuf,
        #[command(flatten)]
        load: LoadArgs,
    },
    /// Encode a corpus into JSON lines of ids using saved alphabets
    Encode {
        /// Input corpus
        input: PathBuf,
        /// Directory holding words.json and labels.json
        #[arg(short = 'd', long, env = "SEQTAG_ALPHABET_DIR")]
        dir: PathBuf,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        load: LoadArgs,
    },
    /// Print the entries of a saved alphabet
    Inspect {
        /// Directory holding the alphabet
        #[arg(short = 'd', long, env = "SEQTAG_ALPHABET_DIR")]
        dir: PathBuf,
        /// Alphabet name (file stem)
        #[arg(short, long, default_value = FieldAlphabets::WORDS)]
        name: String,
        /// The alphabet is a label table (no unknown slot)
        #[arg(long)]
        label: bool,
        /// First id to list
        #[arg(long, default_value_t = 1, conflicts_with = "id")]
        start: usize,
        /// Print only the symbol with this id
        #[arg(long)]
        id: Option<usize>,
        /// Answer out-of-range ids with the first symbol instead of failing
        #[arg(long, requires = "id")]
        tolerant: bool,
    },
}

/// Corpus loading options
#[derive(Args)]
struct LoadArgs {
    /// Tag schema of the input
    #[arg(short, long, default_value_t = TagSchema::Bio)]
    schema: TagSchema,
    /// Keep labels as they are: no conversion, no BIO validation
    #[arg(long, conflicts_with = "schema")]
    no_normalize: bool,
    /// Shortest sentence kept
    #[arg(long, default_value_t = 1)]
    min_len: usize,
    /// Longest sentence kept
    #[arg(long, default_value_t = usize::MAX)]
    max_len: usize,
    /// Drop sentences with malformed labels instead of failing
    #[arg(long)]
    skip_invalid: bool,
}

impl LoadArgs {
    fn config(&self) -> LoaderConfig {
        let policy = if self.skip_invalid {
            InvalidPolicy::Skip
        } else {
            InvalidPolicy::Abort
        };
        LoaderConfig::new()
            .with_schema((!self.no_normalize).then_some(self.schema))
            .with_length_range(self.min_len, self.max_len)
            .with_invalid_policy(policy)
    }

    fn load(&self, path: &Path) -> Result<Corpus> {
        load_data(path, &self.config())
            .with_context(|| format!("Failed to load corpus {}", path.display()))
    }
}

fn log_level(cli: &Cli) -> LevelFilter {
    if cli.quiet {
        return LevelFilter::ERROR;
    }
    match cli.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn convert(input: &Path, output: &Path, load: &LoadArgs) -> Result<()> {
    let corpus = load.load(input)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        prepare_folder(parent)?;
    }
    save_all(output, &corpus.sentences)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(sentences = corpus.len(), output = %output.display(), "converted corpus to bio");
    Ok(())
}

fn build_alphabets(inputs: &[PathBuf], dir: &Path, load: &LoadArgs) -> Result<()> {
    let mut alphabets = FieldAlphabets::new();
    for input in inputs {
        let corpus = load.load(input)?;
        alphabets.fit(&corpus)?;
    }
    alphabets.close();

    prepare_folder(dir)?;
    if !alphabets.save(dir) {
        anyhow::bail!("Alphabets were not fully saved to {}", dir.display());
    }
    info!(
        words = alphabets.words.size(),
        labels = alphabets.labels.size(),
        dir = %dir.display(),
        "saved alphabets"
    );
    Ok(())
}

fn encode(input: &Path, dir: &Path, output: Option<&Path>, load: &LoadArgs) -> Result<()> {
    let mut alphabets = FieldAlphabets::load(dir, AlphabetConfig::default())
        .with_context(|| format!("Failed to load alphabets from {}", dir.display()))?;
    alphabets.close();

    let corpus = load.load(input)?;
    let mut out: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    for (idx, sentence) in corpus.iter().enumerate() {
        let encoded = alphabets
            .encode(sentence)
            .with_context(|| format!("Failed to encode sentence {idx}"))?;
        writeln!(out, "{}", serde_json::to_string(&encoded)?)?;
    }
    out.flush()?;
    info!(sentences = corpus.len(), "encoded corpus");
    Ok(())
}

fn inspect(
    dir: &Path,
    name: &str,
    label: bool,
    start: usize,
    id: Option<usize>,
    tolerant: bool,
) -> Result<()> {
    let kind = if label {
        TableKind::Label
    } else {
        TableKind::Input
    };
    let policy = if tolerant {
        LookupPolicy::Tolerant
    } else {
        LookupPolicy::Strict
    };
    let config = AlphabetConfig::new().with_reverse_lookup(policy);
    let mut table = SymbolTable::with_config(name, kind, config)?;
    table
        .load(dir, None)
        .with_context(|| format!("Failed to load alphabet {name:?} from {}", dir.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match id {
        Some(id) => {
            let symbol = table.symbol_of(id)?;
            writeln!(out, "{id}\t{}", symbol.unwrap_or(""))?;
        }
        None => {
            for (id, symbol) in table.enumerate_from(start)? {
                writeln!(out, "{id}\t{symbol}")?;
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(&cli))
        .with_writer(io::stderr)
        .init();

    match &cli.command {
        Commands::Convert {
            input,
            output,
            load,
        } => convert(input, output, load),
        Commands::Alphabet { inputs, dir, load } => build_alphabets(inputs, dir, load),
        Commands::Encode {
            input,
            dir,
            output,
            load,
        } => encode(input, dir, output.as_deref(), load),
        Commands::Inspect {
            dir,
            name,
            label,
            start,
            id,
            tolerant,
        } => inspect(dir, name, *label, *start, *id, *tolerant),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_load_args_config() {
        let cli = Cli::parse_from([
            "seqtag-prep",
            "convert",
            "in.tsv",
            "-o",
            "out.tsv",
            "--schema",
            "iobes",
            "--min-len",
            "2",
            "--skip-invalid",
        ]);
        let Commands::Convert { load, .. } = cli.command else {
            panic!("expected convert");
        };
        let config = load.config();
        assert_eq!(config.schema, Some(TagSchema::Iobes));
        assert_eq!(config.min_len, 2);
        assert_eq!(config.max_len, usize::MAX);
        assert_eq!(config.on_invalid, InvalidPolicy::Skip);
    }

    #[test]
    fn test_no_normalize() {
        let cli = Cli::parse_from([
            "seqtag-prep",
            "alphabet",
            "in.tsv",
            "-d",
            "out",
            "--no-normalize",
        ]);
        let Commands::Alphabet { load, .. } = cli.command else {
            panic!("expected alphabet");
        };
        assert_eq!(load.config().schema, None);

        let conflict = Cli::try_parse_from([
            "seqtag-prep",
            "alphabet",
            "in.tsv",
            "-d",
            "out",
            "--no-normalize",
            "--schema",
            "iob",
        ]);
        assert!(conflict.is_err());
    }

    #[test]
    fn test_log_level() {
        let cli = Cli::parse_from(["seqtag-prep", "-vv", "inspect", "-d", "x"]);
        assert_eq!(log_level(&cli), LevelFilter::TRACE);
        let cli = Cli::parse_from(["seqtag-prep", "--quiet", "inspect", "-d", "x"]);
        assert_eq!(log_level(&cli), LevelFilter::ERROR);
    }
}
