use crate::app::MapConfig;
use crate::map::{Control, MapHost, Marker, SharedRegistry};

/// Map host drawn by the terminal UI.
///
/// The render task writes into the shared registry while the draw loop
/// reads from it.
#[derive(Clone)]
pub struct TuiMapHost {
    config: MapConfig,
    registry: SharedRegistry,
}

impl TuiMapHost {
    /// Create a host with its navigation control attached
    pub fn new(config: MapConfig, registry: SharedRegistry) -> Self {
        let mut host = Self { config, registry };
        host.add_control(Control::Navigation);
        host
    }
}

impl MapHost for TuiMapHost {
    fn config(&self) -> &MapConfig {
        &self.config
    }

    fn add_control(&mut self, control: Control) {
        self.registry.write().add_control(control);
    }

    fn has_control(&self, control: Control) -> bool {
        self.registry.read().controls().contains(&control)
    }

    fn set_banner(&mut self, text: &str) {
        self.registry.write().set_banner(text);
    }

    fn banner(&self) -> Option<String> {
        self.registry.read().banner().map(str::to_string)
    }

    fn add_marker(&mut self, marker: Marker) {
        self.registry.write().push(marker);
    }

    fn marker_count(&self) -> usize {
        self.registry.read().markers().len()
    }

    fn clear(&mut self) {
        self.registry.write().clear_markers();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{ready_channel, MarkerRegistry};
    use crate::render::{show_generated_at, PopupMode, RenderContext, StationRenderer};
    use crate::severity::SeverityPolicy;
    use crate::station::{Dataset, Station};

    #[tokio::test]
    async fn test_render_task_fills_shared_registry() {
        let registry = MarkerRegistry::shared();
        let mut host = TuiMapHost::new(MapConfig::default(), registry.clone());
        let dataset = Dataset {
            generated_at: "Mar 10 08:15:00".to_string(),
            stations: vec![Station {
                name: "Copacabana".to_string(),
                description: "Buena".to_string(),
                latitude: 6.35,
                longitude: -75.5,
                value: 9.0,
                updated_at: Some("2019-03-10 08:00:00".to_string()),
            }],
        };
        show_generated_at(&dataset, &mut host);

        let (notifier, ready) = ready_channel();
        let renderer = StationRenderer::new(SeverityPolicy::five_band(), PopupMode::Escaped);
        let task = tokio::spawn(async move {
            renderer
                .render(RenderContext::new(dataset, host, ready))
                .await
                .map(|host| host.marker_count())
        });

        assert_eq!(registry.read().markers().len(), 0);
        assert_eq!(registry.read().banner(), Some("Mar 10 08:15:00"));

        notifier.notify();
        assert_eq!(task.await.unwrap(), Ok(1));

        let registry = registry.read();
        assert_eq!(registry.markers()[0].label, "9");
        assert_eq!(
            registry.markers()[0].popup.updated_at.as_deref(),
            Some("2019-03-10 08:00:00")
        );
        assert_eq!(registry.controls(), &[Control::Navigation]);
    }
}
