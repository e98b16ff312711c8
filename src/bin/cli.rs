//! Blog Generator CLI
//!
//! Local execution entry point. For AWS Lambda, use `blog-generator-lambda`.

use std::path::PathBuf;
use std::sync::Arc;

use blog_generator::{
    error::{AppError, Result},
    models::{Config, InboundEvent},
    pipeline::BlogPipeline,
    storage::{BlogStorage, LocalStorage},
};
use clap::{Parser, Subcommand};

/// Blog Generator - topic in, blog post out
#[derive(Parser, Debug)]
#[command(
    name = "blog-generator",
    version,
    about = "Generate short blog posts with Amazon Bedrock"
)]
struct Cli {
    /// Optional TOML config file; environment variables override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate and store a post for a topic
    Generate {
        /// Topic of the post
        #[arg(short, long)]
        topic: String,

        /// Store under this directory instead of S3
        #[arg(long)]
        local: Option<PathBuf>,
    },

    /// Run a saved API Gateway event through the Lambda handler path
    Invoke {
        /// Path to the event JSON file
        #[arg(short, long)]
        event: PathBuf,

        /// Store under this directory instead of S3
        #[arg(long)]
        local: Option<PathBuf>,
    },

    /// Validate configuration and print effective values
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Base config from file (if given), then environment overrides.
fn load_config(path: Option<&PathBuf>) -> Config {
    let mut config = match path {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    };
    config.apply_env(|key| std::env::var(key).ok());
    config
}

async fn build_pipeline(config: &Config, local: Option<PathBuf>) -> BlogPipeline {
    match local {
        Some(dir) => {
            log::info!("Storing posts under {}", dir.display());
            let storage: Arc<dyn BlogStorage> = Arc::new(LocalStorage::new(dir));
            BlogPipeline::with_storage(config, storage).await
        }
        None => BlogPipeline::from_config(config).await,
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_ref());

    match cli.command {
        Command::Generate { topic, local } => {
            config.validate()?;
            let topic = topic.trim();
            if topic.is_empty() {
                return Err(AppError::invalid_request("Topic must not be blank"));
            }

            let pipeline = build_pipeline(&config, local).await;
            let summary = pipeline.generate_and_store(topic).await?;

            log::info!("Saved {}/{}", summary.s3_bucket, summary.s3_key);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }

        Command::Invoke { event, local } => {
            config.validate()?;
            let content = std::fs::read_to_string(&event)?;
            let event = InboundEvent::from_value(serde_json::from_str(&content)?);

            let pipeline = build_pipeline(&config, local).await;
            let response = pipeline.handle(&event).await;

            println!("{}", serde_json::to_string_pretty(&response)?);
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }

            log::info!("Region:       {}", config.generation.region);
            log::info!("Model:        {}", config.generation.model_id);
            log::info!("Read timeout: {}s", config.generation.read_timeout_secs);
            log::info!("Max attempts: {}", config.generation.max_attempts);
            log::info!("Bucket:       {}", config.storage.bucket);
            log::info!("Key prefix:   {}", config.storage.key_prefix);
            log::info!("✓ Config OK");
        }
    }

    Ok(())
}
