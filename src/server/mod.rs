//! Web server for the conference agenda page.
//!
//! Renders one page: the hand-authored schedule table plus one table per
//! sheet of the conference spreadsheet, with download links for the PDF
//! and spreadsheet copies.

mod assets;
mod handlers;
mod routes;
mod template_structs;

pub use routes::create_router;
pub use template_structs::IndexTemplate;

pub(crate) use assets::CSS as STYLESHEET;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            settings: Arc::new(settings.clone()),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
