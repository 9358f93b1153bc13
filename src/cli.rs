use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::app::{DEFAULT_CENTER, DEFAULT_STYLE, DEFAULT_ZOOM};
use crate::render::PopupMode;
use crate::severity::SeverityPolicy;

/// Threshold table used to color markers
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Sentinel band for negative readings, hazardous band above 150
    #[default]
    FiveBand,
    /// Green up to 30, red above 55
    FourBand,
}

impl Preset {
    pub fn policy(self) -> SeverityPolicy {
        match self {
            Preset::FiveBand => SeverityPolicy::five_band(),
            Preset::FourBand => SeverityPolicy::four_band(),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "airmap")]
#[command(about = "Map air-quality monitoring stations by PM2.5 severity")]
#[command(version)]
pub struct Args {
    /// Station dataset (JSON, or a `var data = {...};` script)
    pub data: PathBuf,

    // Output
    /// Write a web map page here instead of opening the terminal view
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write the dataset as a `data.js` script
    #[arg(long)]
    pub data_js: Option<PathBuf>,

    // Rendering
    /// Severity threshold table
    #[arg(long, value_enum, default_value_t = Preset::FiveBand)]
    pub preset: Preset,

    /// Put station text into popups without escaping it
    #[arg(long)]
    pub trusted_html: bool,

    /// Reject datasets with missing readings or impossible coordinates
    #[arg(long)]
    pub strict: bool,

    // Map widget
    /// Basemap access token
    #[arg(long, env = "MAPBOX_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// Basemap style reference
    #[arg(long, default_value = DEFAULT_STYLE)]
    pub style: String,

    /// Initial center longitude
    #[arg(long, default_value_t = DEFAULT_CENTER.lng, allow_negative_numbers = true)]
    pub center_lng: f64,

    /// Initial center latitude
    #[arg(long, default_value_t = DEFAULT_CENTER.lat, allow_negative_numbers = true)]
    pub center_lat: f64,

    /// Initial zoom level
    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: f64,

    // Debug
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn popup_mode(&self) -> PopupMode {
        if self.trusted_html {
            PopupMode::Trusted
        } else {
            PopupMode::Escaped
        }
    }

    /// Terminal view is used unless a page is requested
    pub fn is_tui(&self) -> bool {
        self.output.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["airmap", "pm25.json"]);

        assert_eq!(args.data, PathBuf::from("pm25.json"));
        assert_eq!(args.preset, Preset::FiveBand);
        assert_eq!(args.popup_mode(), PopupMode::Escaped);
        assert!(args.is_tui());
        assert!(!args.strict);
    }

    #[test]
    fn test_page_output_and_preset() {
        let args = Args::parse_from([
            "airmap",
            "data.js",
            "--output",
            "index.html",
            "--preset",
            "four-band",
            "--trusted-html",
        ]);

        assert!(!args.is_tui());
        assert_eq!(args.preset.policy(), SeverityPolicy::four_band());
        assert_eq!(args.popup_mode(), PopupMode::Trusted);
    }

    #[test]
    fn test_negative_center() {
        let args = Args::parse_from(["airmap", "d.json", "--center-lng", "-74.08"]);
        assert_eq!(args.center_lng, -74.08);
    }
}
