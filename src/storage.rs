use crate::errors::AppError;
use crate::models::{DaySession, Profile, StudyRecord};
use std::collections::BTreeMap;
use std::{env, path::PathBuf};
use tokio::fs;
use tracing::error;

/// The rendered key strings are the on-disk schema and must not change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKey {
    Day(u32),
    StudyRecords,
    CurrentDay,
    Username,
    StudentId,
    ProfilePic,
    LoggedIn,
}

impl StoreKey {
    fn render(&self) -> String {
        match self {
            StoreKey::Day(day) => format!("day_{day}"),
            StoreKey::StudyRecords => "studyRecords".to_string(),
            StoreKey::CurrentDay => "currentDay".to_string(),
            StoreKey::Username => "username".to_string(),
            StoreKey::StudentId => "studentId".to_string(),
            StoreKey::ProfilePic => "profilePic".to_string(),
            StoreKey::LoggedIn => "isLoggedIn".to_string(),
        }
    }
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/studyfocus.json"))
}

/// Every `set` and `remove` writes through to the JSON file; there is no
/// cross-key transaction, so callers order their writes for crash recovery.
pub struct Store {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl Store {
    pub async fn load(path: PathBuf) -> Store {
        let entries = match fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(entries) => entries,
                Err(err) => {
                    error!("failed to parse data file: {err}");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                error!("failed to read data file: {err}");
                BTreeMap::new()
            }
        };

        Store { path, entries }
    }

    pub fn get(&self, key: &StoreKey) -> Option<&str> {
        self.entries.get(&key.render()).map(String::as_str)
    }

    pub async fn set(&mut self, key: &StoreKey, value: String) -> Result<(), AppError> {
        self.entries.insert(key.render(), value);
        self.flush().await
    }

    pub async fn remove(&mut self, key: &StoreKey) -> Result<(), AppError> {
        self.entries.remove(&key.render());
        self.flush().await
    }

    async fn flush(&self) -> Result<(), AppError> {
        let payload = serde_json::to_vec_pretty(&self.entries).map_err(AppError::internal)?;
        fs::write(&self.path, payload).await.map_err(AppError::internal)?;
        Ok(())
    }

    pub fn read_day(&self, day: u32) -> DaySession {
        match self.get(&StoreKey::Day(day)) {
            Some(raw) => match serde_json::from_str::<DaySession>(raw) {
                Ok(mut session) => {
                    // The key is authoritative for the day number.
                    session.day = day;
                    session
                }
                Err(err) => {
                    error!("failed to parse stored day {day}: {err}");
                    DaySession::new(day)
                }
            },
            None => DaySession::new(day),
        }
    }

    pub async fn write_day(&mut self, session: &DaySession) -> Result<(), AppError> {
        let raw = serde_json::to_string(session).map_err(AppError::internal)?;
        self.set(&StoreKey::Day(session.day), raw).await
    }

    pub fn read_records(&self) -> Vec<StudyRecord> {
        match self.get(&StoreKey::StudyRecords) {
            Some(raw) => match serde_json::from_str(raw) {
                Ok(records) => records,
                Err(err) => {
                    error!("failed to parse study records: {err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        }
    }

    pub async fn write_records(&mut self, records: &[StudyRecord]) -> Result<(), AppError> {
        let raw = serde_json::to_string(records).map_err(AppError::internal)?;
        self.set(&StoreKey::StudyRecords, raw).await
    }

    /// An absent or unparseable pointer reads as day 1.
    pub fn read_current_day(&self) -> u32 {
        match self.get(&StoreKey::CurrentDay) {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(day) if day >= 1 => day,
                _ => {
                    error!("invalid currentDay value {raw:?}, falling back to day 1");
                    1
                }
            },
            None => 1,
        }
    }

    pub async fn write_current_day(&mut self, day: u32) -> Result<(), AppError> {
        self.set(&StoreKey::CurrentDay, day.to_string()).await
    }

    pub fn read_profile(&self) -> Profile {
        Profile {
            logged_in: self.get(&StoreKey::LoggedIn).is_some(),
            username: self.get(&StoreKey::Username).unwrap_or_default().to_string(),
            student_id: self.get(&StoreKey::StudentId).unwrap_or_default().to_string(),
            avatar: self.get(&StoreKey::ProfilePic).unwrap_or_default().to_string(),
        }
    }

    pub async fn write_login(&mut self, username: &str, student_id: &str) -> Result<(), AppError> {
        self.set(&StoreKey::LoggedIn, "true".to_string()).await?;
        self.set(&StoreKey::Username, username.to_string()).await?;
        self.set(&StoreKey::StudentId, student_id.to_string()).await
    }

    pub async fn clear_login(&mut self) -> Result<(), AppError> {
        self.remove(&StoreKey::LoggedIn).await?;
        self.remove(&StoreKey::Username).await?;
        self.remove(&StoreKey::StudentId).await
    }

    pub async fn write_avatar(&mut self, avatar: String) -> Result<(), AppError> {
        self.set(&StoreKey::ProfilePic, avatar).await
    }
}
