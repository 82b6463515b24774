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
struct TaskView {
    id: u64,
    text: String,
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct DayView {
    day: u32,
    tasks: Vec<TaskView>,
    active_tasks: usize,
    completed_tasks: usize,
    total_tasks: usize,
    completion_ratio: f64,
    study_minutes: u32,
    motivation: String,
}

#[derive(Debug, Deserialize)]
struct TimerView {
    phase: String,
    running: bool,
    remaining_seconds: u32,
    study_minutes: u32,
    break_minutes: u32,
}

#[derive(Debug, Deserialize)]
struct ProfileView {
    logged_in: bool,
    username: String,
    student_id: String,
    avatar: String,
}

#[derive(Debug, Deserialize)]
struct HistoryView {
    records: Vec<serde_json::Value>,
    motivation: String,
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
    path.push(format!("studyfocus_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

fn unique_tag(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{prefix}-{nanos}")
}

// Day numbers high enough that tests never collide with the default day or
// with each other.
fn unique_day() -> u32 {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    1_000 + (nanos % 1_000_000) as u32
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/day")).send().await {
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
    let child = Command::new(env!("CARGO_BIN_EXE_studyfocus"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
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

async fn get_day(client: &Client, base_url: &str) -> DayView {
    client
        .get(format!("{base_url}/api/day"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn get_timer(client: &Client, base_url: &str) -> TimerView {
    client
        .get(format!("{base_url}/api/timer"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_index_serves_the_app_shell() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client.get(&server.base_url).send().await.unwrap();
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("StudyFocus"));
    assert!(!body.contains("{{DAY}}"));

    let sw = client
        .get(format!("{}/sw.js", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(sw.status().is_success());
    let content_type = sw
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.contains("javascript"));
}

#[tokio::test]
async fn http_add_task_appends_to_the_day() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = get_day(&client, &server.base_url).await;
    let text = unique_tag("read chapter");

    let response = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({ "text": text }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let after: DayView = response.json().await.unwrap();

    assert_eq!(after.total_tasks, before.total_tasks + 1);
    assert_eq!(after.active_tasks, before.active_tasks + 1);
    assert!(after.tasks.iter().any(|task| task.text == text && !task.completed));
    assert!(!after.motivation.is_empty());
}

#[tokio::test]
async fn http_blank_task_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = get_day(&client, &server.base_url).await;

    let response = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({ "text": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let after = get_day(&client, &server.base_url).await;
    assert_eq!(after.total_tasks, before.total_tasks);
}

#[tokio::test]
async fn http_complete_task_marks_it_done_once() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let text = unique_tag("finish worksheet");
    let with_task: DayView = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({ "text": text }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let task_id = with_task
        .tasks
        .iter()
        .find(|task| task.text == text)
        .map(|task| task.id)
        .unwrap();

    let done: DayView = client
        .post(format!("{}/api/tasks/{task_id}/complete", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let completed_task = done.tasks.iter().find(|task| task.id == task_id).unwrap();
    assert!(completed_task.completed);
    assert_eq!(done.completed_tasks, with_task.completed_tasks + 1);
    assert!(done.completion_ratio > 0.0);

    // Completing again changes nothing.
    let again: DayView = client
        .post(format!("{}/api/tasks/{task_id}/complete", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(again.completed_tasks, done.completed_tasks);
}

#[tokio::test]
async fn http_day_switch_round_trips_tasks() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let first_day = unique_day();
    let second_day = first_day + 1;

    let switched: DayView = client
        .post(format!("{}/api/day", server.base_url))
        .json(&serde_json::json!({ "day": first_day }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(switched.day, first_day);
    assert_eq!(switched.total_tasks, 0);
    assert_eq!(switched.study_minutes, 0);

    let text = unique_tag("day-bound task");
    client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({ "text": text }))
        .send()
        .await
        .unwrap();

    let elsewhere: DayView = client
        .post(format!("{}/api/day", server.base_url))
        .json(&serde_json::json!({ "day": second_day }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(elsewhere.day, second_day);
    assert_eq!(elsewhere.total_tasks, 0);

    // Switching a day resets the countdown to a paused study phase.
    let timer = get_timer(&client, &server.base_url).await;
    assert_eq!(timer.phase, "study");
    assert!(!timer.running);

    let back: DayView = client
        .post(format!("{}/api/day", server.base_url))
        .json(&serde_json::json!({ "day": first_day }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(back.day, first_day);
    assert_eq!(back.total_tasks, 1);
    assert!(back.tasks.iter().any(|task| task.text == text));
}

#[tokio::test]
async fn http_day_switch_during_completion_drops_the_mark() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let first_day = unique_day();
    let second_day = first_day + 1;

    // Fresh days hand out ids from 1, so the two tasks share an id.
    client
        .post(format!("{}/api/day", server.base_url))
        .json(&serde_json::json!({ "day": first_day }))
        .send()
        .await
        .unwrap();
    let on_first: DayView = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({ "text": "revise notes" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let task_id = on_first.tasks[0].id;

    client
        .post(format!("{}/api/day", server.base_url))
        .json(&serde_json::json!({ "day": second_day }))
        .send()
        .await
        .unwrap();
    let on_second: DayView = client
        .post(format!("{}/api/tasks", server.base_url))
        .json(&serde_json::json!({ "text": "skim lecture slides" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(on_second.tasks[0].id, task_id);

    client
        .post(format!("{}/api/day", server.base_url))
        .json(&serde_json::json!({ "day": first_day }))
        .send()
        .await
        .unwrap();

    let racer = client.clone();
    let base_url = server.base_url.clone();
    let completion = tokio::spawn(async move {
        racer
            .post(format!("{base_url}/api/tasks/{task_id}/complete"))
            .send()
            .await
            .unwrap()
            .json::<DayView>()
            .await
            .unwrap()
    });

    // Land the switch inside the completion delay.
    sleep(Duration::from_millis(150)).await;
    let switched: DayView = client
        .post(format!("{}/api/day", server.base_url))
        .json(&serde_json::json!({ "day": second_day }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(switched.day, second_day);

    // The completion started on the first day, so it must not touch the
    // second day's identically-numbered task.
    let raced = completion.await.unwrap();
    assert_eq!(raced.day, second_day);
    assert_eq!(raced.completed_tasks, 0);

    let here = get_day(&client, &server.base_url).await;
    assert_eq!(here.completed_tasks, 0);

    let back: DayView = client
        .post(format!("{}/api/day", server.base_url))
        .json(&serde_json::json!({ "day": first_day }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(back.tasks.iter().all(|task| !task.completed));
}

#[tokio::test]
async fn http_day_zero_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/day", server.base_url))
        .json(&serde_json::json!({ "day": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn http_timer_start_pause_reset_cycle() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    // Long durations so nothing completes mid-test.
    let configured: TimerView = client
        .post(format!("{}/api/timer/durations", server.base_url))
        .json(&serde_json::json!({ "study_minutes": 60, "break_minutes": 30 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(configured.study_minutes, 60);
    assert_eq!(configured.break_minutes, 30);

    let reset: TimerView = client
        .post(format!("{}/api/timer/reset", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!reset.running);
    assert_eq!(reset.remaining_seconds, reset.study_minutes * 60);

    let started: TimerView = client
        .post(format!("{}/api/timer/start", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(started.running);

    // Starting again is a no-op, not an error.
    let started_again: TimerView = client
        .post(format!("{}/api/timer/start", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(started_again.running);

    let paused: TimerView = client
        .post(format!("{}/api/timer/pause", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!paused.running);
    assert!(paused.remaining_seconds <= paused.study_minutes * 60);

    // A paused countdown holds still.
    sleep(Duration::from_millis(1300)).await;
    let still_paused = get_timer(&client, &server.base_url).await;
    assert_eq!(still_paused.remaining_seconds, paused.remaining_seconds);
    assert!(!still_paused.running);

    let reset_after: TimerView = client
        .post(format!("{}/api/timer/reset", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!reset_after.running);
    assert_eq!(reset_after.remaining_seconds, reset_after.study_minutes * 60);
}

#[tokio::test]
async fn http_paused_study_duration_change_rebases_the_countdown() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    client
        .post(format!("{}/api/timer/pause", server.base_url))
        .send()
        .await
        .unwrap();
    client
        .post(format!("{}/api/timer/reset", server.base_url))
        .send()
        .await
        .unwrap();

    let updated: TimerView = client
        .post(format!("{}/api/timer/durations", server.base_url))
        .json(&serde_json::json!({ "study_minutes": 45 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated.study_minutes, 45);
    if updated.phase == "study" {
        assert_eq!(updated.remaining_seconds, 45 * 60);
    }
}

#[tokio::test]
async fn http_zero_duration_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/timer/durations", server.base_url))
        .json(&serde_json::json!({ "study_minutes": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn http_empty_history_serves_prompt_and_best_day_404() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    // No test runs a countdown to completion, so history stays empty.
    let history: HistoryView = client
        .get(format!("{}/api/history", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(history.records.is_empty());
    assert_eq!(
        history.motivation,
        "Complete study sessions to see your progress history!"
    );

    let best = client
        .get(format!("{}/api/history/best", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(best.status().as_u16(), 404);
}

#[tokio::test]
async fn http_login_logout_round_trip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let blank = client
        .post(format!("{}/api/login", server.base_url))
        .json(&serde_json::json!({ "username": "  ", "student_id": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(blank.status().as_u16(), 400);

    let profile: ProfileView = client
        .post(format!("{}/api/login", server.base_url))
        .json(&serde_json::json!({ "username": "Nomin", "student_id": "S240815" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(profile.logged_in);
    assert_eq!(profile.username, "Nomin");
    assert_eq!(profile.student_id, "S240815");

    // A countdown left running does not survive a logout.
    let started: TimerView = client
        .post(format!("{}/api/timer/start", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(started.running);

    let with_avatar: ProfileView = client
        .post(format!("{}/api/profile/avatar", server.base_url))
        .json(&serde_json::json!({ "avatar": "data:image/png;base64,aGk=" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(with_avatar.avatar, "data:image/png;base64,aGk=");

    let logged_out: ProfileView = client
        .post(format!("{}/api/logout", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!logged_out.logged_in);
    assert!(logged_out.username.is_empty());
    assert!(logged_out.student_id.is_empty());
    // The photo survives a logout.
    assert_eq!(logged_out.avatar, "data:image/png;base64,aGk=");

    let timer = get_timer(&client, &server.base_url).await;
    assert!(!timer.running);

    let fetched: ProfileView = client
        .get(format!("{}/api/profile", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!fetched.logged_in);
}
