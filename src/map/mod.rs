mod html;
mod ready;
mod registry;
mod types;

pub use html::HtmlMapHost;
pub use ready::{ready_channel, ReadyNotifier, ReadySignal};
pub use registry::{MarkerRegistry, SharedRegistry};
pub use types::{Control, LngLat, Marker, Popup};

use crate::app::MapConfig;

/// A map widget that markers can be attached to.
///
/// Hosts attach their navigation control when constructed and keep every
/// marker they are given for their whole lifetime. There is no dedup:
/// adding the same marker twice shows it twice.
pub trait MapHost {
    /// Viewport and style the host was built with
    fn config(&self) -> &MapConfig;

    fn add_control(&mut self, control: Control);

    fn has_control(&self, control: Control) -> bool;

    /// Write the text of the fixed banner region
    fn set_banner(&mut self, text: &str);

    fn banner(&self) -> Option<String>;

    /// Attach a marker together with its popup
    fn add_marker(&mut self, marker: Marker);

    fn marker_count(&self) -> usize;

    /// Remove every marker
    fn clear(&mut self);
}
