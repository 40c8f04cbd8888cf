use anyhow::Context;
use clap::Parser;
use techforge_server::core::catalog;
use techforge_server::http::{self, ENDPOINTS};
use techforge_server::utils::error::{ErrorSeverity, IntakeError};
use techforge_server::utils::{logger, validation::Validate};
use techforge_server::{AppState, CliArgs, ServerConfig};
use tokio::net::TcpListener;

fn exit_with(e: &IntakeError) -> ! {
    tracing::error!(
        "❌ Start-up failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());

    let exit_code = match e.severity() {
        ErrorSeverity::Critical => 3,
        _ => 1,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real environment variables win
    let dotenv = dotenvy::dotenv();
    let args = CliArgs::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    if let Ok(path) = &dotenv {
        tracing::info!("Loaded environment from {}", path.display());
    }

    let config = ServerConfig::load(&args).unwrap_or_else(|e| exit_with(&e));
    if let Err(e) = config.validate() {
        exit_with(&e);
    }
    tracing::debug!("Server config: {:?}", config);

    let state = AppState::from_config(&config)
        .await
        .unwrap_or_else(|e| exit_with(&e));

    if let Some(notifier) = state.notifier.clone() {
        tokio::spawn(async move {
            match notifier.verify().await {
                Ok(()) => tracing::info!("✅ Email server is ready to send messages"),
                Err(e) => {
                    tracing::warn!("❌ Email configuration error: {}", e);
                    tracing::warn!("💡 Please check EMAIL_USER and EMAIL_PASS");
                }
            }
        });
    }

    let router = http::build_router(state, &config.dist_dir);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    tracing::info!("🚀 TechForge server running on port {}", config.port);
    tracing::info!("📧 Notifications go to: {}", config.notify_to);
    tracing::info!("📁 Data directory: {}", config.data_dir);
    tracing::info!("🌐 Serving frontend from: {}", config.dist_dir);
    tracing::info!("📚 Catalog categories: {}", catalog::categories().join(", "));
    match (&config.email_user, config.email_configured()) {
        (Some(user), true) => tracing::info!("✅ Email configured with: {}", user),
        _ => tracing::warn!("⚠️ Email not configured. Set EMAIL_USER and EMAIL_PASS"),
    }
    tracing::info!("🔗 API endpoints:");
    for endpoint in ENDPOINTS {
        tracing::info!("   - {}", endpoint);
    }

    http::serve(listener, router).await.context("server error")?;

    tracing::info!("Server shut down");
    Ok(())
}
