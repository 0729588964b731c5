use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use sshnorm::{keyword, loader, logging};

#[derive(Parser)]
#[command(name = "sshnorm")]
#[command(about = "SSH-style configuration keyword normalizer")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical spelling of each key
    Normalize {
        /// Raw configuration keys (snake_case or already canonical)
        keys: Vec<String>,
    },
    /// Parse a config file and report its normalized contents
    Check {
        /// Path to the configuration file
        file: PathBuf,
        /// Emit the loaded configuration as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { keys } => {
            for key in &keys {
                println!("{} -> {}", key, keyword::sanitize(key));
            }
        }
        Commands::Check { file, json } => {
            info!("Checking {}", file.display());

            let config = match loader::load_path(&file) {
                Ok(config) => config,
                Err(e) => {
                    error!("Failed to load {}: {}", file.display(), e);
                    println!("❌ {}: {}", file.display(), e);
                    std::process::exit(1);
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("✅ Loaded {}", file.display());
                println!("   Global settings: {}", config.global.len());
                println!("   Host blocks: {}", config.hosts.len());
                for block in &config.hosts {
                    println!(
                        "   - Host {} ({} setting(s))",
                        block.patterns.join(" "),
                        block.settings.len()
                    );
                }
            }
        }
    }

    Ok(())
}
