use crate::models::FeedbackEntry;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::{env, time::Duration};
use tracing::error;

/// Returned without contacting the service when no feedback exists yet.
pub const EMPTY_LOG_PLACEHOLDER: &str = "No feedback available yet to generate a plan.";

/// Canned plan when the service answers but hands back an empty list.
pub const DEFAULT_PLAN: [&str; 3] = [
    "Focus on communication",
    "Increase recognition",
    "Improve work-life balance",
];

/// Canned plan substituted on any request failure.
pub const FALLBACK_PLAN: [&str; 3] = [
    "Ensure open channels for feedback",
    "Acknowledge team efforts weekly",
    "Monitor workload distribution",
];

const PLAN_POINTS: usize = 3;

const SYSTEM_INSTRUCTION: &str = "You are a senior HR consultant specializing in workplace \
culture. Provide exactly 3 concise, high-impact action items. Output only the 3 points as a \
JSON array of strings.";

#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            api_key: String::new(),
            timeout_secs: 30,
        }
    }
}

impl AdvisorConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            endpoint: env::var("PULSE_AI_ENDPOINT").unwrap_or(defaults.endpoint),
            model: env::var("PULSE_AI_MODEL").unwrap_or(defaults.model),
            api_key: env::var("PULSE_AI_KEY").unwrap_or_default(),
            timeout_secs: env::var("PULSE_AI_TIMEOUT_SECS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdvisorError {
    #[error("request failed: {0}")]
    Http(String),

    #[error("HTTP {0} from the generation API")]
    Status(u16),

    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("the model returned no candidates")]
    Empty,
}

/// The remote text-generation service, narrowed to one call so tests can
/// substitute a scripted backend.
#[async_trait]
pub trait PlanBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Vec<String>, AdvisorError>;
}

/// Gemini `generateContent` backend with a structured-output schema.
pub struct GeminiBackend {
    config: AdvisorConfig,
    client: Client,
}

impl GeminiBackend {
    pub fn new(mut config: AdvisorConfig) -> Result<Self, reqwest::Error> {
        config.endpoint = config.endpoint.trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct PlanPoints {
    points: Vec<String>,
}

#[async_trait]
impl PlanBackend for GeminiBackend {
    async fn generate(&self, prompt: &str) -> Result<Vec<String>, AdvisorError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint, self.config.model
        );
        let body = json!({
            "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "points": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "The 3-point action plan."
                        }
                    },
                    "required": ["points"]
                }
            }
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    AdvisorError::Timeout(self.config.timeout_secs)
                } else {
                    AdvisorError::Http(err.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdvisorError::Status(status.as_u16()));
        }

        let payload: GenerateResponse = response
            .json()
            .await
            .map_err(|err| AdvisorError::Malformed(err.to_string()))?;

        let text = payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or(AdvisorError::Empty)?;

        let plan: PlanPoints =
            serde_json::from_str(&text).map_err(|err| AdvisorError::Malformed(err.to_string()))?;
        Ok(plan.points)
    }
}

/// One-shot action-plan request. Never fails: an empty log short-circuits
/// to a placeholder and every backend failure degrades to a canned plan.
pub async fn generate_action_plan(
    backend: &dyn PlanBackend,
    entries: &[FeedbackEntry],
) -> Vec<String> {
    if entries.is_empty() {
        return vec![EMPTY_LOG_PLACEHOLDER.to_string()];
    }

    let prompt = build_prompt(entries);
    match backend.generate(&prompt).await {
        Ok(points) if points.is_empty() => {
            DEFAULT_PLAN.iter().map(|point| point.to_string()).collect()
        }
        Ok(mut points) => {
            points.truncate(PLAN_POINTS);
            points
        }
        Err(err) => {
            error!("action plan generation failed: {err}");
            FALLBACK_PLAN
                .iter()
                .map(|point| point.to_string())
                .collect()
        }
    }
}

fn build_prompt(entries: &[FeedbackEntry]) -> String {
    let feedback = entries
        .iter()
        .map(|entry| format!("[Mood: {}/5] Comment: {}", entry.mood, entry.comment))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Based on the following employee feedback and mood ratings, generate a 3-point action \
plan for management to improve team culture.\nEach point should be clear, actionable, and \
address the common themes found in the feedback.\n\nFeedback:\n{feedback}"
    )
}
