pub mod app;
pub mod capabilities;
pub mod content;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod state;
pub mod tasbih;
pub mod ui;
pub mod verses;

pub use app::router;
pub use state::AppState;
