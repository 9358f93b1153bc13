mod loader;
mod types;

pub use loader::{load_dataset, parse_dataset};
pub use types::{Dataset, Station};
