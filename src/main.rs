//! vagrantgen - declarative Vagrantfile generation
//!
//! Loads a YAML cluster config and writes the matching Vagrantfile.
//! An optional positional argument switches the stored provider first.

use clap::Parser;
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use vagrantgen::{GeneratorError, Provider, config::loader};

#[derive(Parser)]
#[command(name = "vagrantgen")]
#[command(author, version, about = "Renders a cluster config into a Vagrantfile", long_about = None)]
struct Cli {
    /// Provider to switch the stored config to before generating
    /// (virtualbox or vmware_workstation)
    provider: Option<String>,

    /// Path to the cluster configuration file
    #[arg(short, long, default_value = "config.yml")]
    config: PathBuf,

    /// Path of the Vagrantfile to write
    #[arg(short, long, default_value = "Vagrantfile")]
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

#[tokio::main]
async fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(token) = &cli.provider {
        match token.parse::<Provider>() {
            Ok(provider) => {
                info!("Switching stored provider to {}", provider);
                loader::set_provider(&cli.config, provider).await?;
                println!("Updated {} to use {}", cli.config.display(), provider);
            }
            Err(err) => {
                // No generation and no config rewrite on a bad token
                println!("{}", err);
                std::process::exit(1);
            }
        }
    }

    let provider = vagrantgen::generate(&cli.config, &cli.output).await?;
    println!("Generated Vagrantfile for {}", provider);

    Ok(())
}
