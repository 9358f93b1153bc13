//! Severity bands for PM2.5 readings.
//!
//! A [`SeverityPolicy`] is an ordered list of bands. A reading belongs to the
//! first band whose upper bound admits it; the last band is always
//! unbounded, so every reading (NaN included) lands somewhere.

mod color;

pub use color::{Color, BLACK, GREEN, ORANGE, PURPLE, RED, WHITE, YELLOW};

/// Upper edge of a band
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpperBound {
    /// value < bound
    Below(f64),
    /// value <= bound
    AtMost(f64),
    /// Catches everything left over
    Unbounded,
}

impl UpperBound {
    pub fn admits(&self, value: f64) -> bool {
        match *self {
            UpperBound::Below(bound) => value < bound,
            UpperBound::AtMost(bound) => value <= bound,
            UpperBound::Unbounded => true,
        }
    }

    /// Short range text for legends, given the bound of the band before
    pub fn describe(&self, previous: Option<&UpperBound>) -> String {
        match (self, previous) {
            (UpperBound::Below(b), _) => format!("< {}", b),
            (UpperBound::AtMost(b), _) => format!("<= {}", b),
            (UpperBound::Unbounded, Some(UpperBound::Below(b))) => format!(">= {}", b),
            (UpperBound::Unbounded, Some(UpperBound::AtMost(b))) => format!("> {}", b),
            (UpperBound::Unbounded, _) => "any".to_string(),
        }
    }
}

/// How the marker label is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRule {
    /// Show the reading itself
    Value,
    /// Show a fixed text instead of the reading
    Literal(&'static str),
}

/// One severity band
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub name: &'static str,
    pub upper: UpperBound,
    pub background: Color,
    /// Text color override; the page default applies when unset
    pub foreground: Option<Color>,
    pub label: LabelRule,
}

impl Band {
    const fn new(name: &'static str, upper: UpperBound, background: Color) -> Self {
        Self {
            name,
            upper,
            background,
            foreground: None,
            label: LabelRule::Value,
        }
    }

    fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    fn with_label(mut self, label: &'static str) -> Self {
        self.label = LabelRule::Literal(label);
        self
    }

    /// Marker label for a reading in this band
    pub fn label_for(&self, value: f64) -> String {
        match self.label {
            LabelRule::Literal(text) => text.to_string(),
            LabelRule::Value => format_value(value),
        }
    }
}

/// Render a reading the way a browser would print the number
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    value.to_string()
}

/// Ordered threshold table
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityPolicy {
    name: &'static str,
    bands: Vec<Band>,
}

impl SeverityPolicy {
    /// Build a policy; a catch-all band is appended if the last one is bounded.
    pub fn new(name: &'static str, mut bands: Vec<Band>) -> Self {
        let needs_catch_all = bands
            .last()
            .map_or(true, |band| band.upper != UpperBound::Unbounded);
        if needs_catch_all {
            let background = bands.last().map_or(BLACK, |band| band.background);
            bands.push(Band::new("unclassified", UpperBound::Unbounded, background));
        }
        Self { name, bands }
    }

    /// Six bands with a sentinel for negative (missing) readings
    pub fn five_band() -> Self {
        Self::new(
            "five-band",
            vec![
                Band::new("invalid", UpperBound::Below(0.0), BLACK)
                    .with_foreground(WHITE)
                    .with_label("X"),
                Band::new("good", UpperBound::AtMost(12.0), GREEN),
                Band::new("moderate", UpperBound::AtMost(37.0), YELLOW),
                Band::new("unhealthy-sensitive", UpperBound::AtMost(55.0), ORANGE),
                Band::new("unhealthy", UpperBound::AtMost(150.0), RED),
                Band::new("hazardous", UpperBound::Unbounded, PURPLE).with_foreground(WHITE),
            ],
        )
    }

    /// Four bands, no sentinel and no text overrides
    pub fn four_band() -> Self {
        Self::new(
            "four-band",
            vec![
                Band::new("good", UpperBound::AtMost(30.0), GREEN),
                Band::new("moderate", UpperBound::AtMost(37.0), YELLOW),
                Band::new("unhealthy-sensitive", UpperBound::AtMost(55.0), ORANGE),
                Band::new("unhealthy", UpperBound::Unbounded, RED),
            ],
        )
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Find the band for a reading. First match wins.
    pub fn classify(&self, value: f64) -> &Band {
        self.bands
            .iter()
            .find(|band| band.upper.admits(value))
            .unwrap_or_else(|| &self.bands[self.bands.len() - 1])
    }

    /// Background color for a reading
    pub fn color(&self, value: f64) -> Color {
        self.classify(value).background
    }

    /// (range text, band) pairs for legends
    pub fn legend(&self) -> Vec<(String, &Band)> {
        let mut previous = None;
        self.bands
            .iter()
            .map(|band| {
                let text = band.upper.describe(previous);
                previous = Some(&band.upper);
                (text, band)
            })
            .collect()
    }
}

impl Default for SeverityPolicy {
    fn default() -> Self {
        Self::five_band()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_band_boundaries() {
        let policy = SeverityPolicy::five_band();

        assert_eq!(policy.color(-1.0), BLACK);
        assert_eq!(policy.color(0.0), GREEN);
        assert_eq!(policy.color(12.0), GREEN);
        assert_eq!(policy.color(13.0), YELLOW);
        assert_eq!(policy.color(37.0), YELLOW);
        assert_eq!(policy.color(38.0), ORANGE);
        assert_eq!(policy.color(55.0), ORANGE);
        assert_eq!(policy.color(56.0), RED);
        assert_eq!(policy.color(150.0), RED);
        assert_eq!(policy.color(151.0), PURPLE);
    }

    #[test]
    fn test_five_band_fractional_readings() {
        let policy = SeverityPolicy::five_band();

        // Bands are closed on the upper edge, so 12.5 is already moderate
        assert_eq!(policy.color(12.5), YELLOW);
        assert_eq!(policy.color(-0.1), BLACK);
        assert_eq!(policy.color(150.01), PURPLE);
    }

    #[test]
    fn test_four_band_boundaries() {
        let policy = SeverityPolicy::four_band();

        assert_eq!(policy.color(-50.0), GREEN);
        assert_eq!(policy.color(30.0), GREEN);
        assert_eq!(policy.color(31.0), YELLOW);
        assert_eq!(policy.color(37.0), YELLOW);
        assert_eq!(policy.color(38.0), ORANGE);
        assert_eq!(policy.color(55.0), ORANGE);
        assert_eq!(policy.color(56.0), RED);
        assert_eq!(policy.color(10_000.0), RED);
    }

    #[test]
    fn test_partition_is_total() {
        let values = [
            f64::NEG_INFINITY,
            -1e9,
            -0.0,
            7.3,
            36.99,
            1e12,
            f64::INFINITY,
            f64::NAN,
        ];

        for policy in [SeverityPolicy::five_band(), SeverityPolicy::four_band()] {
            for value in values {
                let band = policy.classify(value);
                assert!(
                    policy.bands().contains(band),
                    "{} has no band for {}",
                    policy.name(),
                    value
                );
            }
        }
    }

    #[test]
    fn test_nan_falls_into_last_band() {
        assert_eq!(SeverityPolicy::five_band().color(f64::NAN), PURPLE);
        assert_eq!(SeverityPolicy::four_band().color(f64::NAN), RED);
    }

    #[test]
    fn test_five_band_labels_and_foreground() {
        let policy = SeverityPolicy::five_band();

        let invalid = policy.classify(-5.0);
        assert_eq!(invalid.label_for(-5.0), "X");
        assert_eq!(invalid.foreground, Some(WHITE));

        let hazardous = policy.classify(200.0);
        assert_eq!(hazardous.label_for(200.0), "200");
        assert_eq!(hazardous.foreground, Some(WHITE));

        let good = policy.classify(10.0);
        assert_eq!(good.label_for(10.0), "10");
        assert_eq!(good.foreground, None);
    }

    #[test]
    fn test_four_band_has_no_overrides() {
        let policy = SeverityPolicy::four_band();

        for band in policy.bands() {
            assert_eq!(band.foreground, None);
            assert_eq!(band.label, LabelRule::Value);
        }
        assert_eq!(policy.classify(-5.0).label_for(-5.0), "-5");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(10.0), "10");
        assert_eq!(format_value(12.5), "12.5");
        assert_eq!(format_value(-0.0), "0");
    }

    #[test]
    fn test_bounded_policy_gets_catch_all() {
        let policy = SeverityPolicy::new(
            "custom",
            vec![Band::new("low", UpperBound::AtMost(10.0), GREEN)],
        );

        assert_eq!(policy.bands().len(), 2);
        assert_eq!(policy.classify(11.0).name, "unclassified");
        assert_eq!(policy.color(11.0), GREEN);
    }

    #[test]
    fn test_legend_ranges() {
        let policy = SeverityPolicy::five_band();
        let ranges: Vec<String> = policy.legend().into_iter().map(|(text, _)| text).collect();

        assert_eq!(
            ranges,
            vec!["< 0", "<= 12", "<= 37", "<= 55", "<= 150", "> 150"]
        );
    }
}
