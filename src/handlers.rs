use crate::advisor::generate_action_plan;
use crate::errors::AppError;
use crate::models::{
    ActionPlanResponse, ClearRequest, ClearResponse, EntriesResponse, EntryView, FeedbackEntry,
    StatsResponse, SubmitRequest,
};
use crate::state::AppState;
use crate::stats::{aggregate, mood_label};
use crate::storage::{persist_entries, remove_entries};
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use chrono::Utc;
use uuid::Uuid;

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn list_entries(
    State(state): State<AppState>,
) -> Result<Json<EntriesResponse>, AppError> {
    let log = state.log.lock().await;
    let entries = log.entries.iter().map(to_view).collect();
    Ok(Json(EntriesResponse { entries }))
}

pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> Result<Json<EntryView>, AppError> {
    if !(1..=5).contains(&payload.mood) {
        return Err(AppError::bad_request("mood must be between 1 and 5"));
    }

    let entry = FeedbackEntry {
        id: Uuid::new_v4(),
        mood: payload.mood,
        comment: payload.comment,
        timestamp: Utc::now().timestamp_millis(),
    };

    let mut log = state.log.lock().await;
    log.entries.insert(0, entry.clone());
    persist_entries(&state.data_path, &log).await?;

    Ok(Json(to_view(&entry)))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let log = state.log.lock().await;
    let stats = aggregate(&log.entries);
    Ok(Json(StatsResponse {
        label: mood_label(stats.average).to_string(),
        average: stats.average,
        count: stats.count,
        histogram: stats.histogram,
    }))
}

pub async fn action_plan(
    State(state): State<AppState>,
) -> Result<Json<ActionPlanResponse>, AppError> {
    let Some(_guard) = state.try_begin_plan() else {
        return Err(AppError::conflict("an action plan request is already in flight"));
    };

    // Snapshot the log so submissions stay responsive during the remote call.
    let entries = {
        let log = state.log.lock().await;
        log.entries.clone()
    };

    let points = generate_action_plan(state.advisor.as_ref(), &entries).await;
    Ok(Json(ActionPlanResponse { points }))
}

pub async fn clear(
    State(state): State<AppState>,
    Json(payload): Json<ClearRequest>,
) -> Result<Json<ClearResponse>, AppError> {
    let mut log = state.log.lock().await;
    if !payload.confirm {
        return Ok(Json(ClearResponse {
            cleared: false,
            count: log.entries.len(),
        }));
    }

    log.entries.clear();
    remove_entries(&state.data_path).await?;

    Ok(Json(ClearResponse {
        cleared: true,
        count: 0,
    }))
}

fn to_view(entry: &FeedbackEntry) -> EntryView {
    EntryView {
        id: entry.id,
        mood: entry.mood,
        comment: entry.comment.clone(),
        timestamp: entry.timestamp,
        label: mood_label(f64::from(entry.mood)).to_string(),
    }
}
