use crate::analytics::build_snapshot;
use crate::charts::select_chart_data;
use crate::errors::AppError;
use crate::models::{
    AnalyticsResponse, Granularity, RefreshResponse, TimelineQuery, TimelineResponse,
};
use crate::state::AppState;
use crate::timeline::format_timeline;
use crate::ui::INDEX_HTML;
use axum::{
    Json,
    extract::{Query, State},
    response::Html,
};
use tracing::{error, info};

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Fetch the note collection from the backend and replace the one on
/// display. Replacement, not merge: whatever arrives last wins, and on a
/// failed fetch the current collection is left untouched.
pub async fn refresh(State(state): State<AppState>) -> Result<Json<RefreshResponse>, AppError> {
    let fetched = state.api.fetch_notes().await.map_err(|err| {
        error!("note fetch failed: {err}");
        AppError::from(err)
    })?;

    let note_count = fetched.len();
    *state.notes.lock().await = fetched;
    info!("note collection refreshed, {note_count} notes");

    Ok(Json(RefreshResponse { note_count }))
}

/// Aggregate the current collection. Recomputed on every call; the snapshot
/// is never cached across refreshes.
pub async fn get_analytics(State(state): State<AppState>) -> Json<AnalyticsResponse> {
    let notes = state.notes.lock().await;
    let snapshot = build_snapshot(&notes);
    let charts = select_chart_data(&snapshot);
    Json(AnalyticsResponse { snapshot, charts })
}

pub async fn get_admin_timeline(
    State(state): State<AppState>,
    Query(query): Query<TimelineQuery>,
) -> Result<Json<TimelineResponse>, AppError> {
    let range = match query.range.as_deref() {
        None => Granularity::Weekly,
        Some(raw) => raw.parse().map_err(|_| {
            AppError::bad_request("range must be 'weekly', 'monthly' or 'yearly'")
        })?,
    };

    let analytics = state.api.fetch_admin_analytics().await.map_err(|err| {
        error!("admin analytics fetch failed: {err}");
        AppError::from(err)
    })?;

    Ok(Json(TimelineResponse {
        range,
        notes: format_timeline(analytics.notes_timeline.series(range), range),
        users: format_timeline(analytics.users_timeline.series(range), range),
    }))
}
