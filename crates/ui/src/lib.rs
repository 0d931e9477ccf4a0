pub mod app;
pub mod components;
pub mod context;
pub mod export;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
pub use export::{render_body, render_static_html};
