//! Web画面（アップロード・照合・ダウンロード）

mod handlers;
pub mod page;

use crate::config::Config;
use crate::error::ClientMatchError;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// ハンドラ間で共有する状態（設定は起動後に変更しない）
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// ルーティングを構築する
pub fn router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(handlers::index))
        .route("/compare", post(handlers::compare))
        .route("/download", post(handlers::download))
        .route("/health", get(|| async { "OK" }))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// サーバーを起動し、終了シグナルまで待ち受ける
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let address = config.bind_address();
    let debug_mode = config.debug;
    let app = router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, debug = debug_mode, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutdown complete");
    Ok(())
}

impl IntoResponse for ClientMatchError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            warn!(error = %self, "request rejected");
            StatusCode::BAD_REQUEST
        } else {
            error!(error = %self, "request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = if status.is_server_error() {
            page::render_error("サーバー内部エラー")
        } else {
            page::render_error(&self.to_string())
        };

        (status, axum::response::Html(body)).into_response()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
