//! A command line tool for working with protein interaction tables.
//!
//! ```shell
//! cargo run --release --bin=pcomplex --features=binaries -- tracks interactions.tsv
//! ```
//!
//! Two subcommands are provided:
//!
//! * `tracks` reads an interaction table (from a file, a gzipped file, a URL,
//!   or standard input) and writes out the track of every protein.
//! * `generate` writes a random, well-formed interaction table, which is
//!   useful for exercising the pipeline on large inputs.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use clap_verbosity_flag::Verbosity;
use flate2::read::GzDecoder;
use pcomplex::track::Track;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use tabled::Tabled;
use tracing::info;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

////////////////////////////////////////////////////////////////////////////////////////
// Sources
////////////////////////////////////////////////////////////////////////////////////////

/// Where an interaction table is read from.
#[derive(Clone, Debug, Eq, PartialEq)]
enum Source {
    /// Standard input.
    Stdin,

    /// A file on disk. Files ending in `.gz` are decompressed.
    File(PathBuf),

    /// A file served over HTTP(S).
    Url(String),
}

impl Source {
    /// Resolves a command line argument into a [`Source`].
    fn new(value: Option<&str>) -> Self {
        match value {
            None | Some("-") => Source::Stdin,
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                Source::Url(url.to_string())
            }
            Some(path) => Source::File(PathBuf::from(path)),
        }
    }

    /// Opens the source for reading.
    fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Source::Stdin => Ok(Box::new(io::stdin().lock())),
            Source::File(path) if is_gzipped(path) => {
                let file = File::open(path)
                    .with_context(|| format!("opening {}", path.display()))?;
                Ok(Box::new(BufReader::new(GzDecoder::new(file))))
            }
            Source::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("opening {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
            Source::Url(url) => {
                info!("interaction table: downloading {url}");

                let response = reqwest::blocking::get(url)
                    .and_then(|response| response.error_for_status())
                    .with_context(|| format!("downloading {url}"))?;

                Ok(Box::new(BufReader::new(response)))
            }
        }
    }
}

/// Whether a path names a gzip-compressed file.
fn is_gzipped(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Stdin => write!(f, "<stdin>"),
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Url(url) => write!(f, "{url}"),
        }
    }
}


////////////////////////////////////////////////////////////////////////////////////////
// Output
////////////////////////////////////////////////////////////////////////////////////////

/// The format tracks are written in.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Format {
    /// One `entity<TAB>partner<TAB>time` line per interaction.
    #[default]
    Tsv,

    /// A summary table with one row per track.
    Table,

    /// A JSON array of tracks.
    Json,
}

/// A summary row for a single track.
#[derive(Tabled)]
struct TrackRow {
    /// The entity.
    #[tabled(rename = "Protein")]
    entity: String,

    /// The number of interactions.
    #[tabled(rename = "Interactions")]
    length: usize,

    /// The partners and times, in table order.
    #[tabled(rename = "Partners")]
    partners: String,
}

impl From<&Track> for TrackRow {
    fn from(track: &Track) -> Self {
        let partners = track
            .partners()
            .iter()
            .map(|p| format!("{}@{}", p.partner(), p.time()))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            entity: track.entity().to_string(),
            length: track.len(),
            partners,
        }
    }
}

/// Writes the tracks in the requested format.
fn write_tracks(mut writer: impl Write, tracks: &[Track], format: Format) -> Result<()> {
    match format {
        Format::Tsv => {
            for track in tracks {
                for partner in track.partners() {
                    writeln!(
                        writer,
                        "{}\t{}\t{}",
                        track.entity(),
                        partner.partner(),
                        partner.time()
                    )?;
                }
            }
        }
        Format::Table => {
            let rows = tracks.iter().map(TrackRow::from).collect::<Vec<_>>();
            writeln!(writer, "{}", tabled::Table::new(rows))?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut writer, tracks).context("serializing tracks")?;
            writeln!(writer)?;
        }
    }

    writer.flush().context("flushing output")
}

#[cfg(test)]
mod output_tests {
    use super::*;

    fn tracks() -> Vec<Track> {
        pcomplex::parse("Order\tProtein A\tProtein B\n1\tNEK9\tCDK1\n2\tCDK1\tINCENP\n")
            .unwrap()
            .tracks()
    }

    #[test]
    fn tsv() {
        let mut buffer = Vec::new();
        write_tracks(&mut buffer, &tracks(), Format::Tsv).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "NEK9\tCDK1\t1\nCDK1\tNEK9\t1\nCDK1\tINCENP\t2\nINCENP\tCDK1\t2\n"
        );
    }

    #[test]
    fn json() {
        let mut buffer = Vec::new();
        write_tracks(&mut buffer, &tracks(), Format::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[1]["entity"], "CDK1");
        assert_eq!(value[1]["length"], 2);
        assert_eq!(value[1]["partners"][1]["partner"], "INCENP");
        assert_eq!(value[1]["partners"][1]["time"], 2.0);
    }

    #[test]
    fn table() {
        let row = TrackRow::from(&tracks()[1]);

        assert_eq!(row.entity, "CDK1");
        assert_eq!(row.length, 2);
        assert_eq!(row.partners, "NEK9@1, INCENP@2");
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Generation
////////////////////////////////////////////////////////////////////////////////////////

/// Writes a random interaction table.
fn generate_table(
    mut writer: impl Write,
    rng: &mut impl Rng,
    records: usize,
    entities: usize,
) -> Result<()> {
    writeln!(writer, "ID\tOrder\tProtein A\tProtein B")?;

    let mut order = 0usize;

    for i in 0..records {
        // Several interactions may share a time index.
        if i == 0 || rng.gen_bool(0.5) {
            order += 1;
        }

        let a = rng.gen_range(0..entities);
        let b = rng.gen_range(0..entities);

        writeln!(writer, "E{}\t{order}\tP{a:05}\tP{b:05}", i + 1)?;
    }

    writer.flush().context("flushing output")
}

#[cfg(test)]
mod generation_tests {
    use super::*;

    #[test]
    fn generated_tables_parse() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut buffer = Vec::new();
        generate_table(&mut buffer, &mut rng, 100, 10).unwrap();

        let table = pcomplex::parse(&String::from_utf8(buffer).unwrap()).unwrap();
        assert_eq!(table.records().len(), 100);
        assert!(table.entities().len() <= 10);
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Main
////////////////////////////////////////////////////////////////////////////////////////

/// Works with tables of timed protein-protein interactions.
#[derive(Parser)]
struct Args {
    /// The subcommand to run.
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbose: Verbosity,
}

/// A subcommand.
#[derive(Subcommand)]
enum Command {
    /// Builds the track of every protein in an interaction table.
    Tracks {
        /// The interaction table: a path (optionally `.gz`), an http(s) URL,
        /// or `-` for standard input.
        source: Option<String>,

        /// The output format.
        #[arg(short, long, value_enum, default_value_t = Format::Tsv)]
        format: Format,
    },

    /// Writes a random interaction table to standard output.
    Generate {
        /// The number of records to generate.
        #[arg(short, default_value_t = 1_000)]
        n: usize,

        /// The number of distinct proteins to draw from.
        #[arg(short, long, default_value_t = 50)]
        entities: usize,

        /// The seed for the random number generator.
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Reads the interaction table and writes out its tracks.
fn tracks(source: Option<&str>, format: Format) -> Result<()> {
    let source = Source::new(source);
    info!("interaction table: reading {source}");

    let table = pcomplex::Reader::new(source.open()?)
        .read_table()
        .with_context(|| format!("reading interaction table from {source}"))?;

    info!(
        "interaction table: {} records, {} proteins",
        table.records().len(),
        table.entities().len()
    );

    let tracks = table.tracks();
    write_tracks(BufWriter::new(io::stdout().lock()), &tracks, format)
}

/// Writes a random interaction table to standard output.
fn generate(n: usize, entities: usize, seed: Option<u64>) -> Result<()> {
    anyhow::ensure!(entities > 0, "`entities` must be greater than 0!");

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!("generating {n} records across {entities} proteins");
    generate_table(BufWriter::new(io::stdout().lock()), &mut rng, n, entities)
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .with_writer(io::stderr)
            .init(),
    };

    match args.command {
        Command::Tracks { source, format } => tracks(source.as_deref(), format),
        Command::Generate { n, entities, seed } => generate(n, entities, seed),
    }
}
