pub mod analytics;
pub mod api;
pub mod app;
pub mod charts;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod timeline;
pub mod ui;

pub use analytics::build_snapshot;
pub use app::router;
pub use charts::select_chart_data;
pub use state::AppState;
pub use timeline::format_timeline_label;
