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
struct Marker {
    position: u32,
    active: bool,
    emphasized: bool,
}

#[derive(Debug, Deserialize)]
struct Tone {
    frequency_hz: u32,
    duration_ms: u32,
}

#[derive(Debug, Deserialize)]
struct TasbihResponse {
    tally: u32,
    cycle_len: u32,
    formula_index: usize,
    markers: Vec<Marker>,
    tone: Option<Tone>,
}

#[derive(Debug, Deserialize)]
struct VerseResponse {
    index: usize,
    arabic: String,
    translation: String,
    reference: String,
    topic: String,
    reflection: String,
}

#[derive(Debug, Deserialize)]
struct ShareOutcome {
    kind: String,
    confirmation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ShareResponse {
    text: String,
    outcome: ShareOutcome,
}

#[derive(Debug, Deserialize)]
struct NameView {
    latin: String,
    category: String,
    visible: bool,
}

#[derive(Debug, Deserialize)]
struct NamesResponse {
    selected: String,
    categories: Vec<String>,
    entries: Vec<NameView>,
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
    use std::sync::Once;
    use std::sync::atomic::{AtomicI32, Ordering};

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

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/tasbih")).send().await {
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
    let child = Command::new(env!("CARGO_BIN_EXE_misbah_app"))
        .env("PORT", port.to_string())
        .env("RUST_LOG", "info")
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

async fn get_tasbih(client: &Client, base_url: &str) -> TasbihResponse {
    client
        .get(format!("{base_url}/api/tasbih"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn post_tasbih(client: &Client, base_url: &str, action: &str) -> TasbihResponse {
    client
        .post(format!("{base_url}/api/tasbih/{action}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_increment_updates_tally() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = get_tasbih(&client, &server.base_url).await;
    let after = post_tasbih(&client, &server.base_url, "increment").await;

    let expected = if before.tally >= 99 { 0 } else { before.tally + 1 };
    assert_eq!(after.tally, expected);

    let tone = after.tone.expect("increment carries a tone");
    assert_eq!(tone.frequency_hz, 800);
    assert_eq!(tone.duration_ms, 100);
}

#[tokio::test]
async fn http_reset_returns_to_empty() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    post_tasbih(&client, &server.base_url, "increment").await;
    post_tasbih(&client, &server.base_url, "increment").await;
    let after = post_tasbih(&client, &server.base_url, "reset").await;

    assert_eq!(after.tally, 0);
    assert_eq!(after.formula_index, 0);
    assert!(after.markers.iter().all(|m| !m.active));

    let tone = after.tone.expect("reset carries a tone");
    assert_eq!(tone.frequency_hz, 400);
    assert_eq!(tone.duration_ms, 300);
}

#[tokio::test]
async fn http_marker_jump_sets_tally() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/tasbih/set", server.base_url))
        .json(&serde_json::json!({ "position": 12 }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let state: TasbihResponse = response.json().await.unwrap();
    assert_eq!(state.tally, 12);
    assert_eq!(state.markers.iter().filter(|m| m.active).count(), 12);
    assert!(state.markers.iter().all(|m| m.active == (m.position <= 12)));
    assert!(state.markers[11].emphasized);
    assert!(state.tone.is_none());
}

#[tokio::test]
async fn http_marker_jump_to_cycle_boundary_advances_formula() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    post_tasbih(&client, &server.base_url, "reset").await;

    let state: TasbihResponse = client
        .post(format!("{}/api/tasbih/set", server.base_url))
        .json(&serde_json::json!({ "position": 33 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(state.tally, 33);
    assert_eq!(state.formula_index, 1);
}

#[tokio::test]
async fn http_set_rejects_out_of_range_position() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    for position in [0, 34] {
        let response = client
            .post(format!("{}/api/tasbih/set", server.base_url))
            .json(&serde_json::json!({ "position": position }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
    }
}

#[tokio::test]
async fn http_full_cycle_advances_formula() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    post_tasbih(&client, &server.base_url, "reset").await;
    let mut last = None;
    for _ in 0..33 {
        last = Some(post_tasbih(&client, &server.base_url, "increment").await);
    }

    let state = last.unwrap();
    assert_eq!(state.tally, 33);
    assert_eq!(state.formula_index, 1);
    assert_eq!(state.cycle_len, 33);
    assert!(state.markers.iter().all(|m| m.active));
}

#[tokio::test]
async fn http_formula_can_be_selected_directly() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let state: TasbihResponse = client
        .post(format!("{}/api/tasbih/formula", server.base_url))
        .json(&serde_json::json!({ "index": 2 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(state.formula_index, 2);

    let response = client
        .post(format!("{}/api/tasbih/formula", server.base_url))
        .json(&serde_json::json!({ "index": 9 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn http_verse_random_serves_catalog_entries() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    for _ in 0..5 {
        let verse: VerseResponse = client
            .post(format!("{}/api/verse/random", server.base_url))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert!(verse.index < 3);
        assert!(!verse.arabic.is_empty());
        assert!(!verse.translation.is_empty());
        assert!(verse.reference.starts_with("Corán"));
        assert!(!verse.topic.is_empty());
        assert!(!verse.reflection.is_empty());
    }
}

#[tokio::test]
async fn http_share_copies_when_native_share_is_missing() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let displayed: VerseResponse = client
        .get(format!("{}/api/verse", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let share: ShareResponse = client
        .post(format!("{}/api/verse/share", server.base_url))
        .json(&serde_json::json!({ "native_share": false, "clipboard": true }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(share.outcome.kind, "copied");
    assert_eq!(
        share.outcome.confirmation.as_deref(),
        Some("¡Verso copiado al portapapeles!")
    );
    assert!(share.text.starts_with("📖 Verso del Corán del Día:"));
    assert!(share.text.contains(&displayed.arabic));
    assert!(share.text.ends_with("Compartido desde Al-Misbah"));
}

#[tokio::test]
async fn http_share_prefers_native_and_degrades_silently() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let native: ShareResponse = client
        .post(format!("{}/api/verse/share", server.base_url))
        .json(&serde_json::json!({ "native_share": true, "clipboard": true }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(native.outcome.kind, "shared");
    assert!(native.outcome.confirmation.is_none());

    let none: ShareResponse = client
        .post(format!("{}/api/verse/share", server.base_url))
        .json(&serde_json::json!({ "native_share": false, "clipboard": false }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(none.outcome.kind, "unavailable");
    assert!(none.outcome.confirmation.is_none());
}

async fn select_category(client: &Client, base_url: &str, tag: &str) -> NamesResponse {
    client
        .post(format!("{base_url}/api/names/select"))
        .json(&serde_json::json!({ "category": tag }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_names_filter_by_category() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let amor = select_category(&client, &server.base_url, "amor").await;
    assert_eq!(amor.selected, "amor");
    let visible: Vec<_> = amor.entries.iter().filter(|e| e.visible).collect();
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|e| e.category == "amor"));
    assert!(visible.iter().any(|e| e.latin == "Al-Wadud"));
    assert!(visible.iter().any(|e| e.latin == "Al-Latif"));

    let all = select_category(&client, &server.base_url, "all").await;
    assert!(all.entries.iter().all(|e| e.visible));
    assert!(all.categories.contains(&"amor".to_string()));

    let unknown = select_category(&client, &server.base_url, "desconocida").await;
    assert!(unknown.entries.iter().all(|e| !e.visible));
}
