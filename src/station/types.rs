use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// A monitoring station and its latest PM2.5 reading
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Station {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub value: f64,
    /// Time the station itself last reported, as sent by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Station {
    /// Check that the reading and coordinates are usable
    pub fn check(&self) -> Result<(), String> {
        if !self.value.is_finite() {
            return Err(format!("value {} is not a finite number", self.value));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(format!("latitude {} is out of range", self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(format!("longitude {} is out of range", self.longitude));
        }
        Ok(())
    }
}

/// The full payload rendered in one pass
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Dataset {
    pub generated_at: String,
    #[serde(default)]
    pub stations: Vec<Station>,
}

impl Dataset {
    /// Strict validation, only applied when requested.
    /// Rendering itself accepts whatever the payload contains.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.stations.is_empty() {
            return Err(DatasetError::Empty);
        }

        for (index, station) in self.stations.iter().enumerate() {
            station
                .check()
                .map_err(|reason| DatasetError::InvalidStation { index, reason })?;
        }

        Ok(())
    }

    /// Serialize as the `var data = {...};` script the map page can include
    pub fn to_data_js(&self) -> Result<String, DatasetError> {
        let json = serde_json::to_string(self)?;
        Ok(format!("var data = {};", json))
    }
}
