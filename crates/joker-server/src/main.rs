#![forbid(unsafe_code)]

use joker_dataset::{BundledCorpus, Joker};
use joker_server::{build_router, load_config, validate_startup_config, AppConfig, AppState};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("JOKER_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let config_path =
        PathBuf::from(env::var("JOKER_CONFIG").unwrap_or_else(|_| "config.toml".to_string()));
    let mut config = if config_path.exists() {
        load_config(&config_path).map_err(|e| e.to_string())?
    } else {
        warn!(path = %config_path.display(), "config file missing, using defaults");
        AppConfig::default()
    };
    if let Ok(bind) = env::var("JOKER_BIND") {
        config.bind = bind;
    }
    validate_startup_config(&config)?;

    let registry = config.registry().map_err(|e| e.to_string())?;
    let mut joker = Joker::new();
    // An empty load is reported but not fatal: the server comes up,
    // readiness stays 503, and queries answer with the not-initialized
    // error until a restart with usable configuration.
    match joker.init_dataset(&registry, &BundledCorpus::new()) {
        Ok(()) => info!(
            jokes = joker.joke_count(),
            languages = registry.len(),
            "dataset loaded"
        ),
        Err(e) => error!("dataset initialization failed: {e}"),
    }

    let state = AppState::new(Arc::new(joker), config.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .map_err(|e| format!("bind {} failed: {e}", config.bind))?;
    info!(addr = %config.bind, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| format!("server error: {e}"))
}
