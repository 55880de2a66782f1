use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct DayResponse {
    date: String,
    entry: Option<EntryRecord>,
}

#[derive(Debug, Deserialize)]
struct EntryRecord {
    mood: String,
    note: Option<String>,
    tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct CalendarResponse {
    cells: Vec<CalendarCell>,
}

#[derive(Debug, Deserialize)]
struct CalendarCell {
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WeatherReport {
    temp: f64,
    name: String,
    #[serde(default)]
    demo: bool,
}

#[derive(Debug, Deserialize)]
struct WorkItem {
    id: u64,
    title: String,
    x: f64,
    y: f64,
}

struct TestServer {
    base_url: String,
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

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("mood_journal_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

fn today() -> String {
    chrono::Local::now().date_naive().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/analytics")).send().await {
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
    let child = Command::new(env!("CARGO_BIN_EXE_mood_journal"))
        .env("PORT", port.to_string())
        .env("MOOD_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .env_remove("OPENWEATHER_API_KEY")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
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

#[tokio::test]
async fn http_upsert_then_get_day() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let date = today();

    let response = client
        .put(format!("{}/api/entries/{date}", server.base_url))
        .json(&serde_json::json!({
            "mood": "good",
            "note": "sunny ride",
            "tags": ["sport", "nature"]
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let day: DayResponse = client
        .get(format!("{}/api/entries/{date}", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(day.date, date);
    let entry = day.entry.expect("entry");
    assert_eq!(entry.mood, "good");
    assert_eq!(entry.note.as_deref(), Some("sunny ride"));
    assert_eq!(
        entry.tags,
        Some(vec!["sport".to_string(), "nature".to_string()])
    );
}

#[tokio::test]
async fn http_second_upsert_replaces_not_merges() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let date = today();

    for body in [
        serde_json::json!({ "mood": "amazing", "note": "first", "tags": ["music"] }),
        serde_json::json!({ "mood": "okay" }),
    ] {
        let response = client
            .put(format!("{}/api/entries/{date}", server.base_url))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
    }

    let day: DayResponse = client
        .get(format!("{}/api/entries/{date}", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let entry = day.entry.expect("entry");
    assert_eq!(entry.mood, "okay");
    assert!(entry.note.is_none());
    assert!(entry.tags.is_none());
}

#[tokio::test]
async fn http_rejects_future_dates_and_unknown_tags() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .put(format!("{}/api/entries/2999-01-01", server.base_url))
        .json(&serde_json::json!({ "mood": "good" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let response = client
        .put(format!("{}/api/entries/{}", server.base_url, today()))
        .json(&serde_json::json!({ "mood": "good", "tags": ["skydiving"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let response = client
        .put(format!("{}/api/entries/not-a-date", server.base_url))
        .json(&serde_json::json!({ "mood": "good" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn http_week_view_has_seven_cells() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let week: CalendarResponse = client
        .get(format!("{}/api/calendar/week", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(week.cells.len(), 7);
    assert!(week.cells.iter().all(|cell| cell.date.is_some()));
}

#[tokio::test]
async fn http_month_view_pads_to_first_weekday() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    // September 2024 starts on a Sunday.
    let month: CalendarResponse = client
        .get(format!(
            "{}/api/calendar/month?year=2024&month=9",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(month.cells.len(), 36);
    assert!(month.cells[..6].iter().all(|cell| cell.date.is_none()));
    assert_eq!(month.cells[6].date.as_deref(), Some("2024-09-01"));
}

#[tokio::test]
async fn http_weather_without_key_serves_demo_payload() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let report: WeatherReport = client
        .get(format!("{}/api/weather?city=Lyon", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(report.demo);
    assert_eq!(report.temp, 22.0);
    assert_eq!(report.name, "Lyon");

    let response = client
        .get(format!("{}/api/weather", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn http_work_items_crud_with_clamping() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let created: WorkItem = client
        .post(format!("{}/api/work/items", server.base_url))
        .json(&serde_json::json!({ "title": "ship the report", "description": "by friday" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created.title, "ship the report");

    let moved: WorkItem = client
        .put(format!("{}/api/work/items/{}", server.base_url, created.id))
        .json(&serde_json::json!({ "x": -500.0, "y": 99999.0 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    // Clamped into the 960x540 board, card size 256x150.
    assert_eq!(moved.x, 0.0);
    assert_eq!(moved.y, 390.0);

    let response = client
        .delete(format!("{}/api/work/items/{}", server.base_url, created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let response = client
        .delete(format!("{}/api/work/items/{}", server.base_url, created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}
