use crate::map::Popup;
use crate::station::Station;

/// Pixels between the popup tip and the marker anchor
pub const POPUP_OFFSET: u32 = 25;

/// How station text is put into popup markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupMode {
    /// Escape text before interpolation
    #[default]
    Escaped,
    /// Interpolate as-is; the provider is trusted to send clean markup
    Trusted,
}

/// Build the popup for a station
pub fn build_popup(station: &Station, mode: PopupMode) -> Popup {
    let (name, description) = match mode {
        PopupMode::Escaped => (html_escape(&station.name), html_escape(&station.description)),
        PopupMode::Trusted => (station.name.clone(), station.description.clone()),
    };

    Popup {
        title: station.name.clone(),
        body: station.description.clone(),
        updated_at: station.updated_at.clone(),
        html: format!("<h4>{}</h4><p>{}</p>", name, description),
        offset: POPUP_OFFSET,
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
