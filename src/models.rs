use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

// Persisted under `day_<n>`; field names follow the stored schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DaySession {
    pub day: u32,
    pub tasks: Vec<Task>,
    pub next_task_id: u64,
    pub current_study_time: u32,
}

impl Default for DaySession {
    fn default() -> Self {
        Self::new(1)
    }
}

impl DaySession {
    pub fn new(day: u32) -> Self {
        Self {
            day,
            tasks: Vec::new(),
            next_task_id: 1,
            current_study_time: 0,
        }
    }
}

// Persisted under `studyRecords`; `study_time` is cumulative minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyRecord {
    pub day: u32,
    pub study_time: u32,
    pub completed_tasks: u32,
    pub total_tasks: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Study,
    Break,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Profile {
    pub logged_in: bool,
    pub username: String,
    pub student_id: String,
    pub avatar: String,
}

#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SwitchDayRequest {
    pub day: u32,
}

#[derive(Debug, Deserialize)]
pub struct DurationsRequest {
    pub study_minutes: Option<u32>,
    pub break_minutes: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub student_id: String,
}

#[derive(Debug, Deserialize)]
pub struct AvatarRequest {
    pub avatar: String,
}

#[derive(Debug, Serialize)]
pub struct DayResponse {
    pub day: u32,
    pub tasks: Vec<Task>,
    pub active_tasks: usize,
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub completion_ratio: f64,
    pub study_minutes: u32,
    pub motivation: String,
}

#[derive(Debug, Serialize)]
pub struct TimerResponse {
    pub phase: Phase,
    pub running: bool,
    pub remaining_seconds: u32,
    pub study_minutes: u32,
    pub break_minutes: u32,
}

#[derive(Debug, Serialize)]
pub struct HistoryPoint {
    pub day: u32,
    pub study_minutes: u32,
    pub completed_tasks: u32,
    pub total_tasks: u32,
    pub completion_ratio: f64,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub records: Vec<HistoryPoint>,
    pub motivation: String,
}

#[derive(Debug, Serialize)]
pub struct BestDayResponse {
    pub day: u32,
    pub completed_tasks: u32,
    pub total_tasks: u32,
    pub completion_ratio: f64,
    pub message: String,
}
