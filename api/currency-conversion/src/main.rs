use currency_conversion::app::{AppState, build_router};
use currency_conversion::config::environment::AppConfig;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    init_logging();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "config error");
            std::process::exit(1);
        }
    };

    let bind_addr = format!("{}:{}", config.api_host, config.api_port);
    let listener = match TcpListener::bind(&bind_addr).await {
        Ok(l) => l,
        Err(e) => {
            error!(error = %e, bind_addr = %bind_addr, "server bind error");
            std::process::exit(1);
        }
    };

    info!(
        env = %config.rust_env,
        host = %config.api_host,
        port = config.api_port,
        rates_source_url = %config.rates_source_url,
        require_bearer_prefix = config.auth_policy.require_bearer_prefix,
        require_identity_fields = config.auth_policy.require_identity_fields,
        "currency-conversion started"
    );

    let state = match AppState::new(config) {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "state init error");
            std::process::exit(1);
        }
    };
    let app = build_router(state);
    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server runtime error");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
