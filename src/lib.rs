pub mod app;
pub mod errors;
pub mod handlers;
pub mod history;
pub mod models;
pub mod session;
pub mod storage;
pub mod timer;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::AppState;
pub use storage::{resolve_data_path, Store};
