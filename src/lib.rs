pub mod app;
pub mod errors;
pub mod fallback;
pub mod handlers;
pub mod like;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
