use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use csitems_core::config::{GeneratorConfig, LanguageEncoding};
use csitems_core::file_utils::write_json;
use csitems_core::pipeline::load_keyvalues;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "csitems",
    version = "0.1.0",
    about = "Generate the CS item catalog from game definition files",
    long_about = None
)]
struct Cli {
    /// Path to log file
    #[arg(long, global = true, default_value = "/tmp/csitems.log")]
    log_file: PathBuf,

    /// Verbosity level (repeat for more verbose output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Encoding {
    Utf8,
    Utf16le,
}

impl From<Encoding> for LanguageEncoding {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::Utf8 => LanguageEncoding::Utf8,
            Encoding::Utf16le => LanguageEncoding::Utf16le,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Extract items, paints, music kits and stickers and write all artifacts
    Generate {
        /// TOML file with input and output paths
        #[arg(long)]
        config: Option<PathBuf>,
        /// Localization language (default: english)
        #[arg(long)]
        language: Option<String>,
        /// Path to items_game.txt
        #[arg(long, env = "CSITEMS_ITEMS_GAME")]
        items_game: Option<PathBuf>,
        /// Localization file pattern, `{language}` is replaced by the language
        #[arg(long, env = "CSITEMS_LANGUAGE_FILE")]
        language_file: Option<String>,
        /// Encoding of the localization file
        #[arg(long, value_enum)]
        language_encoding: Option<Encoding>,
        /// Directory holding the inventory PNG images
        #[arg(long, env = "CSITEMS_IMAGES_DIR")]
        images_dir: Option<PathBuf>,
        /// Directory receiving the JSON artifacts
        #[arg(long, env = "CSITEMS_DIST_DIR")]
        dist_dir: Option<PathBuf>,
        /// Identifier registry file (default: <dist_dir>/ids.json)
        #[arg(long)]
        ids_file: Option<PathBuf>,
        /// Source module receiving the item literals
        #[arg(long, env = "CSITEMS_SOURCE_FILE")]
        source_file: Option<PathBuf>,
    },

    /// Convert a key-value document to JSON
    Parse {
        /// Key-value file to read
        #[arg(long)]
        input: PathBuf,
        /// JSON file to write
        #[arg(long)]
        output: PathBuf,
        /// Encoding of the input file
        #[arg(long, value_enum, default_value = "utf8")]
        encoding: Encoding,
    },
}

fn setup_logging(
    verbose: u8,
    log_file: &std::path::Path,
) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let filter_level = match verbose {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let filter = EnvFilter::from_default_env().add_directive(filter_level.into());

    let file_appender = tracing_appender::rolling::never(
        log_file.parent().unwrap_or(std::path::Path::new(".")),
        log_file.file_name().unwrap_or(std::ffi::OsStr::new("csitems.log")),
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::Layer::new().with_writer(std::io::stderr).with_ansi(true))
        .with(fmt::Layer::new().with_writer(non_blocking).with_ansi(false));

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard = setup_logging(cli.verbose, &cli.log_file)?;

    info!("Starting csitems CLI");

    match cli.command {
        Commands::Generate {
            config,
            language,
            items_game,
            language_file,
            language_encoding,
            images_dir,
            dist_dir,
            ids_file,
            source_file,
        } => {
            let file_config = match config {
                Some(path) => {
                    if !path.exists() {
                        anyhow::bail!("Config file not found: {:?}", path);
                    }
                    GeneratorConfig::from_file(&path)
                        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?
                }
                None => GeneratorConfig::default(),
            };
            let overrides = GeneratorConfig {
                items_game,
                language_file,
                language_encoding: language_encoding.map(Into::into),
                images_dir,
                dist_dir,
                ids_file,
                source_file,
                cdn_host: None,
                language,
            };
            let config = file_config.merge(overrides).resolve()?;

            if !config.items_game.exists() {
                anyhow::bail!("items_game not found at {:?}", config.items_game);
            }
            if !config.language_file.exists() {
                anyhow::bail!("Language file not found at {:?}", config.language_file);
            }
            if !config.images_dir.is_dir() {
                anyhow::bail!("Images directory not found at {:?}", config.images_dir);
            }

            let summary = csitems_core::run(&config)?;

            info!("--- Summary ---");
            info!("Items: {}", summary.items);
            info!("Item definitions: {}", summary.item_definitions);
            info!(
                "Identifiers: {} ({} new)",
                summary.identifiers, summary.new_identifiers
            );
        }
        Commands::Parse { input, output, encoding } => {
            if !input.exists() {
                anyhow::bail!("Input file not found: {:?}", input);
            }
            info!("Parsing {:?}", input);
            let tree = load_keyvalues(&input, encoding.into())?;
            write_json(&output, &tree)?;
            info!("Wrote {:?}", output);
        }
    }

    info!("csitems CLI finished");
    Ok(())
}
