mod app;
mod host;
mod viewport;
mod widgets;

pub use app::TuiApp;
pub use host::TuiMapHost;
