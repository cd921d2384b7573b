use std::path::Path;

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};

use crate::bezier::MIN_STEP;
use crate::spring::SpringConfig;
use crate::surface::Stroke;

/// Everything about the scene that doesn't change while it runs.
///
/// Every field has a default, so a JSON file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub spring: SpringConfig,
    /// Horizontal distance from the pointer to each interior control point's target.
    pub pointer_offset: f64,
    /// Distance from the left and right edges of the surface to the anchors.
    pub anchor_inset: f64,
    pub curve_step: f64,
    pub curve_stroke: Stroke,
    pub tangent_step: f64,
    pub tangent_length: f64,
    pub tangent_stroke: Stroke,
    pub marker_radius: f64,
    /// Fill colors for P0, P1, P2, P3.
    pub marker_colors: [String; 4],
    /// Surface dimensions below this are raised to it before anchors are placed.
    pub min_dimension: f64,
    /// Move the anchors when the surface changes size.
    pub reanchor_on_resize: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            spring: SpringConfig::REFERENCE,
            pointer_offset: 100.,
            anchor_inset: 150.,
            curve_step: 0.01,
            curve_stroke: Stroke::new("#d426c6", 3.),
            tangent_step: 0.1,
            tangent_length: 30.,
            tangent_stroke: Stroke::new("#c9193f", 2.),
            marker_radius: 6.,
            marker_colors: [
                "#f91616".into(),
                "#1da853".into(),
                "#198d3c".into(),
                "#f9163c".into(),
            ],
            min_dimension: 1.,
            reanchor_on_resize: false,
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("Invalid scene configuration.")?;
        config.validate()?;
        Ok(config)
    }

    /// Sampling steps must be finite and no finer than `MIN_STEP`.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, step) in [
            ("curve_step", self.curve_step),
            ("tangent_step", self.tangent_step),
        ] {
            ensure!(
                step.is_finite() && step >= MIN_STEP,
                "`{name}` must be a finite number of at least {MIN_STEP}, got {step}."
            );
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read `{}`.", path.display()))?;
        Self::from_json(&json).with_context(|| format!("In `{}`.", path.display()))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("A scene configuration is always serializable.")
    }
}
