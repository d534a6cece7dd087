//! Agenda page handler.

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use super::super::template_structs::IndexTemplate;
use super::super::AppState;
use crate::workbook::{self, SheetData};

/// Render the agenda page.
///
/// A workbook that fails to load or decode is logged and the page renders
/// with zero sheet sections; the static schedule and both download links
/// are unaffected.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let sheets = load_sheets(&state).await;

    let template = IndexTemplate::build(&state.settings, sheets);
    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Failed to render agenda page: {}", e);
        String::new()
    }))
}

/// Decode the spreadsheet asset fresh for this request, off the async
/// runtime. Any failure yields an empty sheet list.
async fn load_sheets(state: &AppState) -> Vec<SheetData> {
    let path = state.settings.workbook_path();

    match tokio::task::spawn_blocking(move || workbook::load_workbook(&path)).await {
        Ok(Ok(sheets)) => sheets,
        Ok(Err(e)) => {
            tracing::error!("Failed to load workbook: {:#}", e);
            Vec::new()
        }
        Err(e) => {
            tracing::error!("Workbook load task failed: {}", e);
            Vec::new()
        }
    }
}
