use tracing::{debug, info, instrument, trace};

use super::popup::{build_popup, PopupMode};
use crate::error::RenderError;
use crate::map::{LngLat, MapHost, Marker, ReadySignal};
use crate::severity::SeverityPolicy;
use crate::station::{Dataset, Station};

/// Everything one render pass needs, passed in explicitly
pub struct RenderContext<H> {
    pub dataset: Dataset,
    pub host: H,
    pub ready: ReadySignal,
}

impl<H: MapHost> RenderContext<H> {
    pub fn new(dataset: Dataset, host: H, ready: ReadySignal) -> Self {
        Self {
            dataset,
            host,
            ready,
        }
    }
}

/// Turns stations into markers on a map host
#[derive(Debug, Clone, Default)]
pub struct StationRenderer {
    policy: SeverityPolicy,
    popup_mode: PopupMode,
}

impl StationRenderer {
    pub fn new(policy: SeverityPolicy, popup_mode: PopupMode) -> Self {
        Self { policy, popup_mode }
    }

    pub fn policy(&self) -> &SeverityPolicy {
        &self.policy
    }

    /// Wait for the host to load, then attach one marker per station.
    /// Hands the host back once every marker is attached.
    pub async fn render<H: MapHost>(&self, ctx: RenderContext<H>) -> Result<H, RenderError> {
        let RenderContext {
            dataset,
            mut host,
            ready,
        } = ctx;

        debug!(style = %host.config().style, "Waiting for map to load");
        ready.await?;

        let added = self.render_pass(&dataset.stations, &mut host);
        info!(markers = added, total = host.marker_count(), "Render pass complete");
        Ok(host)
    }

    /// Attach markers for `stations` in order. Returns how many were added.
    ///
    /// Nothing already on the host is removed, so calling this twice
    /// without [`MapHost::clear`] shows every station twice.
    #[instrument(skip_all, fields(stations = stations.len(), policy = self.policy.name()))]
    pub fn render_pass<H: MapHost + ?Sized>(&self, stations: &[Station], host: &mut H) -> usize {
        for station in stations {
            let marker = build_marker(station, &self.policy, self.popup_mode);
            trace!(
                name = %station.name,
                value = station.value,
                color = marker.background.css(),
                "Adding marker"
            );
            host.add_marker(marker);
        }
        stations.len()
    }
}

/// Build the marker and popup for one station
pub fn build_marker(station: &Station, policy: &SeverityPolicy, mode: PopupMode) -> Marker {
    let band = policy.classify(station.value);

    Marker {
        position: LngLat::new(station.longitude, station.latitude),
        label: band.label_for(station.value),
        background: band.background,
        foreground: band.foreground,
        popup: build_popup(station, mode),
    }
}
