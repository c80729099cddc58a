//! Genloom Server - HTTP API for the generation suite

use clap::Parser;
use std::path::PathBuf;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod error;
mod state;

use genloom_core::{GenerationService, ServerConfig, SuiteConfig};
use state::AppState;

/// Command line arguments; every flag can also come from the environment.
#[derive(Debug, Parser)]
#[command(name = "genloom-server", version, about = "HTTP API for the genloom generation suite")]
struct Args {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "GENLOOM_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "GENLOOM_PORT")]
    port: u16,

    /// JSON file with backend settings
    #[arg(short, long, env = "GENLOOM_CONFIG")]
    config: Option<PathBuf>,

    /// Maximum concurrent generation requests
    #[arg(long, default_value = "100", env = "GENLOOM_MAX_CONCURRENT")]
    max_concurrent: usize,

    /// Request timeout in seconds
    #[arg(long, default_value = "300", env = "GENLOOM_TIMEOUT")]
    timeout: u64,

    /// Ollama base URL
    #[arg(long, env = "GENLOOM_OLLAMA_URL")]
    ollama_url: Option<String>,

    /// Whisper server base URL
    #[arg(long, env = "GENLOOM_WHISPER_URL")]
    whisper_url: Option<String>,

    /// Coqui TTS server base URL
    #[arg(long, env = "GENLOOM_TTS_URL")]
    tts_url: Option<String>,

    /// Diffusion server base URL
    #[arg(long, env = "GENLOOM_DIFFUSION_URL")]
    diffusion_url: Option<String>,
}

impl Args {
    fn suite_config(&self) -> anyhow::Result<SuiteConfig> {
        let mut config = match &self.config {
            Some(path) => SuiteConfig::from_file(path)?,
            None => SuiteConfig::from_env(),
        };
        if let Some(url) = &self.ollama_url {
            config.ollama_url = url.clone();
        }
        if self.whisper_url.is_some() {
            config.whisper_url = self.whisper_url.clone();
        }
        if self.tts_url.is_some() {
            config.tts_url = self.tts_url.clone();
        }
        if self.diffusion_url.is_some() {
            config.diffusion_url = self.diffusion_url.clone();
        }
        Ok(config)
    }

    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            max_concurrent: self.max_concurrent,
            request_timeout_secs: self.timeout,
            ..ServerConfig::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "genloom_server=debug,genloom_core=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    info!("Starting Genloom Server");

    let suite_config = args.suite_config()?;
    let server_config = args.server_config();
    info!("Ollama endpoint: {}", suite_config.ollama_url);

    let service = GenerationService::new(suite_config)?;
    let state = AppState::new(service, &server_config);
    info!("Generation service initialized");

    let app = api::create_router(state, &server_config);

    let addr = format!("{}:{}", server_config.host, server_config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        },
    }
}
