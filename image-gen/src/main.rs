use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use visionworks_imagegen::config::{DEFAULT_API_BASE, DEFAULT_DELAY_MS, DEFAULT_MODEL, DEFAULT_OUT_DIR};
use visionworks_imagegen::{BUILTIN_JOBS, Config, GeminiClient, run_batch};

#[derive(Parser)]
#[command(name = "generate-images", version, about = "Generate the site's images with Gemini")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Directory the PNGs are written to
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Pause between jobs, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    delay_ms: u64,

    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    #[arg(long, global = true, default_value = DEFAULT_API_BASE)]
    api_base: String,
}

#[derive(Subcommand)]
enum Command {
    /// Print the models available to this API key
    ListModels,
}

async fn list_models(client: &GeminiClient) {
    match client.list_models().await {
        Ok(models) => {
            log::info!("Available Models:");
            for model in models {
                let display = model.display_name.as_deref().unwrap_or("-");
                log::info!("- {} ({display})", model.name);
                if !model.supported_generation_methods.is_empty() {
                    log::info!("  Methods: {}", model.supported_generation_methods.join(", "));
                }
            }
        }
        Err(err) => log::error!("Error listing models: {err}"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    config.model = cli.model;
    config.api_base = cli.api_base;
    config.out_dir = cli.out_dir;
    config.delay = Duration::from_millis(cli.delay_ms);
    let client = GeminiClient::new(&config);

    if let Some(Command::ListModels) = cli.command {
        list_models(&client).await;
        return Ok(());
    }

    tokio::fs::create_dir_all(&config.out_dir)
        .await
        .with_context(|| format!("creating {}", config.out_dir.display()))?;
    log::info!("Starting image generation with {}...", config.model);
    run_batch(&client, BUILTIN_JOBS, &config.out_dir, config.delay).await;
    Ok(())
}
