use tracing::debug;

use crate::map::MapHost;
use crate::station::Dataset;

/// Write the dataset generation time into the host's banner, verbatim
pub fn show_generated_at<H: MapHost + ?Sized>(dataset: &Dataset, host: &mut H) {
    debug!(generated_at = %dataset.generated_at, "Updating banner");
    host.set_banner(&dataset.generated_at);
}
