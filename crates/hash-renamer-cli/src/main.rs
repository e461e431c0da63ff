use clap::{Parser, Subcommand};
use hash_renamer_core::{Config, HashAlgorithm, HashRenamer, LogLevel};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hash-renamer")]
#[command(about = "Append content hashes to filenames for cache-busting")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename files in a directory to include a hash of their contents
    Rename {
        /// Directory to scan
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Hash algorithm (md5, sha1, sha224, sha256, sha384, sha512, blake3)
        #[arg(long)]
        algorithm: Option<String>,

        /// Number of hash characters to append
        #[arg(short, long)]
        length: Option<usize>,

        /// Separator between the name and the hash
        #[arg(long)]
        sep: Option<String>,

        /// Show what would be renamed without changing anything
        #[arg(long)]
        dry_run: bool,

        /// Verbosity level
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write logs to a rotating file in this directory instead of stderr
        #[arg(long)]
        log_dir: Option<PathBuf>,
    },

    /// Generate default configuration file
    GenerateConfig {
        /// Path to save configuration file
        #[arg(default_value = "hash-renamer.json")]
        path: PathBuf,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rename {
            dir,
            recursive,
            algorithm,
            length,
            sep,
            dry_run,
            verbose,
            config,
            log_dir,
        } => {
            let mut config = if let Some(config_path) = config {
                Config::from_file(&config_path)?
            } else {
                Config::default()
            };

            // Command line arguments override the file
            config.recursive |= recursive;
            config.dry_run |= dry_run;
            if let Some(name) = algorithm {
                config.algorithm = name.parse::<HashAlgorithm>()?;
            }
            if let Some(length) = length {
                config.length = length;
            }
            if let Some(sep) = sep {
                config.separator = sep;
            }
            config.log_level = match verbose {
                0 => config.log_level,
                1 => LogLevel::Debug,
                _ => LogLevel::Trace,
            };

            init_logging(log_dir.as_deref(), config.log_level)?;

            let renamer = HashRenamer::new(config)?;

            info!(
                "Starting hash rename in {} (algorithm {}, length {})",
                dir.display(),
                renamer.config().algorithm,
                renamer.config().length
            );
            let summary = renamer.run_with(&dir, |outcome| println!("{}", outcome))?;
            println!("{}", summary);

            Ok(())
        }

        Commands::GenerateConfig { path } => {
            let config = Config::default();
            config.save_to_file(&path)?;
            println!("Configuration file generated at: {}", path.display());
            Ok(())
        }
    }
}

/// Log to stderr through env_logger, or to a rotating file when a directory is given
fn init_logging(log_dir: Option<&std::path::Path>, level: LogLevel) -> anyhow::Result<()> {
    match log_dir {
        Some(dir) => {
            hash_renamer_core::logging::init_logger(dir, level.to_level_filter())
                .map_err(|e| anyhow::anyhow!("Could not initialize logger: {}", e))?;
        }
        None => {
            env_logger::Builder::new()
                .filter_level(level.to_level_filter())
                .parse_default_env()
                .init();
        }
    }
    Ok(())
}
