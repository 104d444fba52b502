use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single anonymous submission. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    pub id: Uuid,
    pub mood: u8,
    pub comment: String,
    /// Milliseconds since the Unix epoch, set at submission time.
    pub timestamp: i64,
}

/// The persisted collection, newest entry first.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FeedbackLog {
    pub entries: Vec<FeedbackEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub mood: u8,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Deserialize)]
pub struct ClearRequest {
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub cleared: bool,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct EntryView {
    pub id: Uuid,
    pub mood: u8,
    pub comment: String,
    pub timestamp: i64,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub entries: Vec<EntryView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodStats {
    pub average: f64,
    pub count: usize,
    pub histogram: [u64; 5],
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub average: f64,
    pub count: usize,
    pub histogram: [u64; 5],
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct ActionPlanResponse {
    pub points: Vec<String>,
}
