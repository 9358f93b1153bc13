use std::path::Path;

use tracing::{debug, info, instrument};

use super::types::Dataset;
use crate::error::DatasetError;

/// Prefix of the script form published next to the map page
const SCRIPT_PREFIX: &str = "var data =";

/// Load a dataset from a JSON file or a `data.js` script
#[instrument]
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    let raw = std::fs::read_to_string(path)?;
    debug!(bytes = raw.len(), "Read dataset file");

    let dataset = parse_dataset(&raw)?;
    info!(
        stations = dataset.stations.len(),
        generated_at = %dataset.generated_at,
        "Loaded dataset"
    );
    Ok(dataset)
}

/// Parse a dataset, accepting both plain JSON and the script wrapper
pub fn parse_dataset(raw: &str) -> Result<Dataset, DatasetError> {
    let json = strip_script_wrapper(raw);
    Ok(serde_json::from_str(json)?)
}

/// Strip `var data = ` and the trailing `;` if present
fn strip_script_wrapper(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.strip_prefix(SCRIPT_PREFIX) {
        Some(rest) => {
            let rest = rest.trim();
            rest.strip_suffix(';').unwrap_or(rest).trim_end()
        }
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "generated_at": "Mar 10 08:15:00",
        "stations": [
            {"name": "Museo de Antioquia", "description": "Moderada", "latitude": 6.252,
             "longitude": -75.569, "value": 27, "updated_at": "2019-03-10 08:00:00"},
            {"name": "Girardota", "description": "Sin dato", "latitude": 6.379,
             "longitude": -75.451, "value": -9999}
        ]
    }"#;

    #[test]
    fn test_parse_plain_json() {
        let dataset = parse_dataset(JSON).unwrap();

        assert_eq!(dataset.generated_at, "Mar 10 08:15:00");
        assert_eq!(dataset.stations.len(), 2);
        assert_eq!(dataset.stations[0].value, 27.0);
        assert_eq!(
            dataset.stations[0].updated_at.as_deref(),
            Some("2019-03-10 08:00:00")
        );
        assert_eq!(dataset.stations[1].updated_at, None);
    }

    #[test]
    fn test_parse_script_wrapper_matches_json() {
        let script = format!("var data = {};\n", JSON);

        assert_eq!(parse_dataset(&script).unwrap(), parse_dataset(JSON).unwrap());
    }

    #[test]
    fn test_data_js_output_parses_back() {
        let dataset = parse_dataset(JSON).unwrap();
        let script = dataset.to_data_js().unwrap();

        assert_eq!(parse_dataset(&script).unwrap(), dataset);
    }

    #[test]
    fn test_missing_text_fields_default_to_empty() {
        let dataset = parse_dataset(
            r#"{"generated_at": "x", "stations": [{"latitude": 1, "longitude": 2, "value": 3}]}"#,
        )
        .unwrap();

        assert_eq!(dataset.stations[0].name, "");
        assert_eq!(dataset.stations[0].description, "");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            parse_dataset("var data = {not json};"),
            Err(DatasetError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_dataset(Path::new("/nonexistent/airmap/data.json"));
        assert!(matches!(result, Err(DatasetError::Io(_))));
    }
}
