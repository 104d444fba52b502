use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct EntryView {
    id: String,
    mood: u8,
    comment: String,
    timestamp: i64,
    label: String,
}

#[derive(Debug, Deserialize)]
struct EntriesResponse {
    entries: Vec<EntryView>,
}

#[derive(Debug, Deserialize)]
struct StatsResponse {
    average: f64,
    count: usize,
    histogram: [u64; 5],
    label: String,
}

#[derive(Debug, Deserialize)]
struct ClearResponse {
    cleared: bool,
    count: usize,
}

#[derive(Debug, Deserialize)]
struct ActionPlanResponse {
    points: Vec<String>,
}

struct TestServer {
    base_url: String,
    data_path: PathBuf,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "culture_pulse_http_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/stats")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_culture_pulse"))
        .env("PORT", port.to_string())
        .env("PULSE_DATA_PATH", &data_path)
        // Dead endpoint: plan requests fail fast and exercise the fallback.
        .env("PULSE_AI_ENDPOINT", "http://127.0.0.1:1")
        .env("PULSE_AI_TIMEOUT_SECS", "2")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer {
        base_url,
        data_path,
        child,
    }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn clear_all(client: &Client, base_url: &str) {
    let response = client
        .post(format!("{base_url}/api/clear"))
        .json(&serde_json::json!({ "confirm": true }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
}

async fn submit(client: &Client, base_url: &str, mood: u8, comment: &str) -> EntryView {
    let response = client
        .post(format!("{base_url}/api/feedback"))
        .json(&serde_json::json!({ "mood": mood, "comment": comment }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

async fn entries(client: &Client, base_url: &str) -> Vec<EntryView> {
    let response: EntriesResponse = client
        .get(format!("{base_url}/api/entries"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    response.entries
}

#[tokio::test]
async fn http_submit_round_trips_at_head() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    clear_all(&client, &server.base_url).await;

    let first = submit(&client, &server.base_url, 4, "ship it").await;
    assert_eq!(first.mood, 4);
    assert_eq!(first.comment, "ship it");
    assert_eq!(first.label, "positive");
    assert!(first.timestamp > 0);

    let second = submit(&client, &server.base_url, 2, "slow builds").await;

    let listed = entries(&client, &server.base_url).await;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
    assert_eq!(listed[1].mood, 4);
    assert_eq!(listed[1].comment, "ship it");
    assert_eq!(listed[1].timestamp, first.timestamp);
}

#[tokio::test]
async fn http_submissions_are_written_through_to_disk() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    clear_all(&client, &server.base_url).await;

    let created = submit(&client, &server.base_url, 5, "great offsite").await;

    let raw = std::fs::read(&server.data_path).expect("record file missing after submit");
    let record: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    let stored = record["entries"].as_array().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["id"].as_str().unwrap(), created.id);
    assert_eq!(stored[0]["mood"].as_u64().unwrap(), 5);
    assert_eq!(stored[0]["comment"].as_str().unwrap(), "great offsite");
}

#[tokio::test]
async fn http_rejects_out_of_range_mood() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    clear_all(&client, &server.base_url).await;

    for mood in [0u8, 6] {
        let response = client
            .post(format!("{}/api/feedback", server.base_url))
            .json(&serde_json::json!({ "mood": mood, "comment": "" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    }

    assert!(entries(&client, &server.base_url).await.is_empty());
}

#[tokio::test]
async fn http_stats_reflect_submissions() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    clear_all(&client, &server.base_url).await;

    submit(&client, &server.base_url, 5, "").await;
    submit(&client, &server.base_url, 1, "").await;

    let stats: StatsResponse = client
        .get(format!("{}/api/stats", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(stats.count, 2);
    assert_eq!(stats.average, 3.0);
    assert_eq!(stats.histogram, [1, 0, 0, 0, 1]);
    assert_eq!(stats.label, "neutral");
}

#[tokio::test]
async fn http_clear_requires_confirmation() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    clear_all(&client, &server.base_url).await;

    submit(&client, &server.base_url, 3, "fine").await;

    let declined: ClearResponse = client
        .post(format!("{}/api/clear", server.base_url))
        .json(&serde_json::json!({ "confirm": false }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!declined.cleared);
    assert_eq!(declined.count, 1);
    assert_eq!(entries(&client, &server.base_url).await.len(), 1);

    let confirmed: ClearResponse = client
        .post(format!("{}/api/clear", server.base_url))
        .json(&serde_json::json!({ "confirm": true }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(confirmed.cleared);
    assert_eq!(confirmed.count, 0);
    assert!(entries(&client, &server.base_url).await.is_empty());
    assert!(
        std::fs::metadata(&server.data_path).is_err(),
        "record file should be removed on clear"
    );
}

#[tokio::test]
async fn http_action_plan_placeholder_for_empty_log() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    clear_all(&client, &server.base_url).await;

    let plan: ActionPlanResponse = client
        .post(format!("{}/api/action-plan", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        plan.points,
        vec!["No feedback available yet to generate a plan.".to_string()]
    );
}

#[tokio::test]
async fn http_action_plan_falls_back_when_service_unreachable() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    clear_all(&client, &server.base_url).await;

    submit(&client, &server.base_url, 2, "too many meetings").await;

    let plan: ActionPlanResponse = client
        .post(format!("{}/api/action-plan", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        plan.points,
        vec![
            "Ensure open channels for feedback".to_string(),
            "Acknowledge team efforts weekly".to_string(),
            "Monitor workload distribution".to_string(),
        ]
    );
}
