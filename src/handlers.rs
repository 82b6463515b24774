use crate::errors::AppError;
use crate::history;
use crate::models::{
    AddTaskRequest, AvatarRequest, BestDayResponse, DayResponse, DurationsRequest, HistoryPoint,
    HistoryResponse, LoginRequest, Profile, StudyRecord, SwitchDayRequest, TimerResponse,
};
use crate::session;
use crate::state::{spawn_ticker, AppState, Tracker};
use crate::timer::Timer;
use crate::ui::{render_index, SW_JS};
use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use chrono::Local;
use std::time::Duration;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let tracker = state.tracker.lock().await;
    Html(render_index(tracker.session.day, &today_string()))
}

pub async fn service_worker() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        SW_JS,
    )
}

pub async fn get_profile(State(state): State<AppState>) -> Json<Profile> {
    let tracker = state.tracker.lock().await;
    Json(tracker.store.read_profile())
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Profile>, AppError> {
    let username = payload.username.trim();
    let student_id = payload.student_id.trim();
    if username.is_empty() || student_id.is_empty() {
        return Err(AppError::bad_request(
            "username and student ID must not be empty",
        ));
    }

    let mut tracker = state.tracker.lock().await;
    tracker.store.write_login(username, student_id).await?;
    Ok(Json(tracker.store.read_profile()))
}

pub async fn logout(State(state): State<AppState>) -> Result<Json<Profile>, AppError> {
    let mut tracker = state.tracker.lock().await;
    tracker.halt_timer();
    tracker.store.clear_login().await?;
    Ok(Json(tracker.store.read_profile()))
}

pub async fn set_avatar(
    State(state): State<AppState>,
    Json(payload): Json<AvatarRequest>,
) -> Result<Json<Profile>, AppError> {
    let mut tracker = state.tracker.lock().await;
    tracker.store.write_avatar(payload.avatar).await?;
    Ok(Json(tracker.store.read_profile()))
}

pub async fn get_day(State(state): State<AppState>) -> Json<DayResponse> {
    let tracker = state.tracker.lock().await;
    Json(day_view(&tracker))
}

pub async fn switch_day(
    State(state): State<AppState>,
    Json(payload): Json<SwitchDayRequest>,
) -> Result<Json<DayResponse>, AppError> {
    if payload.day == 0 {
        return Err(AppError::bad_request("day must be at least 1"));
    }

    let mut guard = state.tracker.lock().await;
    let tracker = &mut *guard;
    if payload.day != tracker.session.day {
        // Outgoing day first, pointer last: a crash in between leaves both
        // days readable and the pointer still naming a stored one.
        tracker.store.write_day(&tracker.session).await?;

        tracker.session = tracker.store.read_day(payload.day);
        tracker.timer.reset_to_study();
        tracker.ticker.invalidate();
        tracker.store.write_current_day(payload.day).await?;
    }

    Ok(Json(day_view(tracker)))
}

pub async fn add_task(
    State(state): State<AppState>,
    Json(payload): Json<AddTaskRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let mut guard = state.tracker.lock().await;
    let tracker = &mut *guard;
    if session::add_task(&mut tracker.session, &payload.text).is_none() {
        return Err(AppError::bad_request("task text must not be empty"));
    }

    tracker.store.write_day(&tracker.session).await?;
    Ok(Json(day_view(tracker)))
}

pub async fn complete_task(
    State(state): State<AppState>,
    Path(task_id): Path<u64>,
) -> Result<Json<DayResponse>, AppError> {
    let day = state.tracker.lock().await.session.day;

    // Matches the strike-through animation window in the page script.
    tokio::time::sleep(Duration::from_millis(300)).await;

    let mut guard = state.tracker.lock().await;
    let tracker = &mut *guard;
    // Task ids restart each day, so a completion that crossed a day switch
    // is dropped instead of landing on the new day's task.
    if tracker.session.day == day && session::complete_task(&mut tracker.session, task_id) {
        tracker.store.write_day(&tracker.session).await?;
    }

    Ok(Json(day_view(tracker)))
}

pub async fn get_timer(State(state): State<AppState>) -> Json<TimerResponse> {
    let tracker = state.tracker.lock().await;
    Json(timer_view(&tracker.timer))
}

pub async fn timer_start(State(state): State<AppState>) -> Json<TimerResponse> {
    let mut tracker = state.tracker.lock().await;
    if tracker.timer.start() {
        let epoch = tracker.ticker.arm();
        let handle = spawn_ticker(state.clone(), epoch);
        tracker.ticker.install(handle);
    }
    Json(timer_view(&tracker.timer))
}

pub async fn timer_pause(State(state): State<AppState>) -> Json<TimerResponse> {
    let mut tracker = state.tracker.lock().await;
    tracker.halt_timer();
    Json(timer_view(&tracker.timer))
}

pub async fn timer_reset(State(state): State<AppState>) -> Json<TimerResponse> {
    let mut tracker = state.tracker.lock().await;
    tracker.timer.reset();
    tracker.ticker.invalidate();
    Json(timer_view(&tracker.timer))
}

pub async fn set_durations(
    State(state): State<AppState>,
    Json(payload): Json<DurationsRequest>,
) -> Result<Json<TimerResponse>, AppError> {
    if payload.study_minutes == Some(0) || payload.break_minutes == Some(0) {
        return Err(AppError::bad_request("durations must be at least one minute"));
    }

    let mut tracker = state.tracker.lock().await;
    if let Some(minutes) = payload.study_minutes {
        tracker.timer.set_study_minutes(minutes);
    }
    if let Some(minutes) = payload.break_minutes {
        tracker.timer.set_break_minutes(minutes);
    }
    Ok(Json(timer_view(&tracker.timer)))
}

pub async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let tracker = state.tracker.lock().await;
    Json(history_view(&tracker.records))
}

pub async fn get_best_day(
    State(state): State<AppState>,
) -> Result<Json<BestDayResponse>, AppError> {
    let tracker = state.tracker.lock().await;
    let best = history::best_day(&tracker.records)
        .map_err(|err| AppError::not_found(err.to_string()))?;

    Ok(Json(BestDayResponse {
        day: best.day,
        completed_tasks: best.completed_tasks,
        total_tasks: best.total_tasks,
        completion_ratio: history::completion_ratio(best),
        message: history::best_day_message(best),
    }))
}

fn day_view(tracker: &Tracker) -> DayResponse {
    let session = &tracker.session;
    DayResponse {
        day: session.day,
        tasks: session.tasks.clone(),
        active_tasks: session::active_count(session),
        completed_tasks: session::completed_count(session),
        total_tasks: session.tasks.len(),
        completion_ratio: session::completion_ratio(session),
        study_minutes: session.current_study_time,
        motivation: session::daily_motivation(session).to_string(),
    }
}

fn timer_view(timer: &Timer) -> TimerResponse {
    TimerResponse {
        phase: timer.phase,
        running: timer.running,
        remaining_seconds: timer.remaining_seconds,
        study_minutes: timer.study_minutes,
        break_minutes: timer.break_minutes,
    }
}

fn history_view(records: &[StudyRecord]) -> HistoryResponse {
    HistoryResponse {
        records: records.iter().map(history_point).collect(),
        motivation: history::history_motivation(records),
    }
}

fn history_point(record: &StudyRecord) -> HistoryPoint {
    HistoryPoint {
        day: record.day,
        study_minutes: record.study_time,
        completed_tasks: record.completed_tasks,
        total_tasks: record.total_tasks,
        completion_ratio: history::completion_ratio(record),
    }
}

fn today_string() -> String {
    Local::now().format("%A, %B %-d, %Y").to_string()
}
