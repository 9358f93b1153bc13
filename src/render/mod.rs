mod banner;
mod popup;
mod renderer;

pub use banner::show_generated_at;
pub use popup::{html_escape, PopupMode};
pub use renderer::{RenderContext, StationRenderer};
