use std::path::Path;

use anyhow::{anyhow, Result};
use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas extent in local units, centered on the local origin.
    pub canvas_size: Vec2,
    /// Footprint shared by every node.
    pub node_size: Vec2,
    /// Max seconds between a selecting click and the next click for a double-click.
    pub double_click_window: f64,
    /// Width of the clickable band around an edge.
    pub edge_thickness: f32,
    /// Screen distance a pressed pointer must travel before it counts as a drag.
    pub drag_threshold: f32,
    /// Half period of the selected-node color pulse.
    pub highlight_period: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            canvas_size: Vec2::new(800.0, 600.0),
            node_size: Vec2::new(40.0, 40.0),
            double_click_window: 0.5,
            edge_thickness: 4.0,
            drag_threshold: 0.0,
            highlight_period: 0.3,
        }
    }
}

impl CanvasConfig {
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!(
                    "Using default canvas config, failed to load {}: {err:#}",
                    path.display()
                );
                Self::default()
            }
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config: CanvasConfig = common::serde::deserialize_from_file(path)?;
        config.validate()?;

        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.validate()?;
        common::serde::serialize_to_file(self, path)
    }

    pub fn validate(&self) -> Result<()> {
        let sizes = [self.canvas_size, self.node_size];
        if sizes
            .iter()
            .any(|size| !size.is_finite() || size.x <= 0.0 || size.y <= 0.0)
        {
            return Err(anyhow!("canvas and node sizes must be finite and positive"));
        }
        if self.node_size.x > self.canvas_size.x || self.node_size.y > self.canvas_size.y {
            return Err(anyhow!("node footprint must fit inside the canvas"));
        }
        if !self.double_click_window.is_finite() || self.double_click_window < 0.0 {
            return Err(anyhow!("double click window must be finite and non-negative"));
        }
        if !self.edge_thickness.is_finite() || self.edge_thickness < 0.0 {
            return Err(anyhow!("edge thickness must be finite and non-negative"));
        }
        if !self.drag_threshold.is_finite() || self.drag_threshold < 0.0 {
            return Err(anyhow!("drag threshold must be finite and non-negative"));
        }
        if !self.highlight_period.is_finite() || self.highlight_period < 0.0 {
            return Err(anyhow!("highlight period must be finite and non-negative"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use common::FileFormat;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(CanvasConfig::default().validate().is_ok());
    }

    #[test]
    fn missing_fields_use_defaults() -> anyhow::Result<()> {
        let config: CanvasConfig = common::serde::deserialize(
            "canvas_size: [1024.0, 768.0]\ndouble_click_window: 0.25\n",
            FileFormat::Yaml,
        )?;

        assert_eq!(config.canvas_size, Vec2::new(1024.0, 768.0));
        assert_eq!(config.double_click_window, 0.25);
        assert_eq!(config.node_size, Vec2::new(40.0, 40.0));
        assert_eq!(config.highlight_period, 0.3);

        Ok(())
    }

    #[test]
    fn rejects_footprint_larger_than_canvas() {
        let config = CanvasConfig {
            canvas_size: Vec2::new(30.0, 600.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CanvasConfig {
            node_size: Vec2::new(0.0, 40.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn saved_config_loads_back() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join(format!("graph_canvas_{}.yaml", uuid::Uuid::new_v4()));
        let config = CanvasConfig {
            canvas_size: Vec2::new(640.0, 480.0),
            drag_threshold: 3.0,
            ..Default::default()
        };

        config.save(&path)?;
        let loaded = CanvasConfig::load(&path);
        std::fs::remove_file(&path)?;

        assert_eq!(loaded?, config);

        Ok(())
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let config = CanvasConfig::load_or_default("does_not_exist/canvas.yaml");
        assert_eq!(config, CanvasConfig::default());
    }
}
