//! The scribe who carries messages from Telegram into Notion.
//!
//! Users pick a Notion page with `/change_page`, after which every text or
//! photo they send becomes a new page beneath it. See [relay] for the flows
//! and [config] for the environment it expects.

use config::Config;
use dotenvy::dotenv;
use notion::NotionClient;
use relay::{DestinationStore, Dispatcher};
use router::Deps;
use std::{net::SocketAddr, process::ExitCode, sync::Arc};
use telegram::TelegramClient;
use tokio::sync::oneshot;
use tracing::{error, info, warn};

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

mod config;
mod de;
mod notion;
mod relay;
mod router;
mod telegram;

/// Application entrypoint. Initialises tracing, reads configuration from the
/// environment, starts receiving updates, binds to 0.0.0.0, and starts the
/// server.
#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    let has_dotenv = dotenv().is_ok();
    if !has_dotenv {
        warn!("No .env found");
    }

    let config = match Config::from_env() {
        Ok(x) => x,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let http = reqwest::Client::builder()
        .timeout(config.remote_timeout)
        .build()
        .expect("Could not build HTTP client");

    let telegram_client = TelegramClient::new(
        http.clone(),
        telegram::api::API_BASE.into(),
        config.telegram_token.clone(),
    );
    let notion_client =
        NotionClient::new(http, notion::API_BASE.into(), config.notion_token.clone());

    let dispatcher = Arc::new(Dispatcher::new(
        Arc::new(notion_client),
        Arc::new(telegram_client.clone()),
        Arc::new(DestinationStore::new()),
    ));

    match &config.webhook {
        Some(hook) => {
            if let Err(e) = telegram_client.set_webhook(&hook.url, &hook.secret).await {
                error!("Failed to register webhook: {}", e);
                return ExitCode::FAILURE;
            }
            info!("Receiving updates at {}", hook.url);
        }
        None => {
            if let Err(e) = telegram_client.delete_webhook().await {
                error!("Failed to remove webhook: {}", e);
                return ExitCode::FAILURE;
            }
            tokio::spawn(telegram::poll::run(
                telegram_client,
                dispatcher.clone(),
                config.remote_timeout,
            ));
        }
    }

    let deps = Deps {
        dispatcher,
        webhook_secret: config.webhook.map(|x| x.secret),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    match server_(addr, deps).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            ExitCode::FAILURE
        }
    }
}

/// Initialise a server without graceful shutdown.
async fn server_(addr: SocketAddr, deps: Deps) -> std::io::Result<()> {
    // Giving a receiver that will never resolve.
    server(addr, deps, oneshot::channel::<()>().1).await
}

/// Initialise a server with graceful shutdown via `rx`. Fails only if `addr`
/// can't be bound.
async fn server(
    addr: SocketAddr,
    deps: Deps,
    rx: oneshot::Receiver<()>,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Listening on {}", addr.to_string());

    axum::serve(listener, router::new(deps))
        .with_graceful_shutdown(async {
            rx.await.ok();
        })
        .await
        .expect("Failed to start server");

    Ok(())
}
