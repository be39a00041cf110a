use log::Level;
use serde::Deserialize;
use thiserror::Error;

/// Id of the inline JSON block in `index.html` that overrides the defaults.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

/// Upper bound on either grid side; every cell is two DOM nodes per layer.
pub const MAX_GRID_SIDE: usize = 512;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct LandingConfig {
    pub ripple: RippleConfig,
}

/// Visual knobs of the ripple grid background.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RippleConfig {
    pub rows: usize,
    pub cols: usize,
    pub cell_size_px: u32,
    /// Cell size from `md_breakpoint_px` upwards.
    pub cell_size_md_px: u32,
    pub md_breakpoint_px: u32,
    pub mask_diameter: f64,
    pub base_ripple_color: String,
    pub highlight_ripple_color: String,
    pub base_border_color: String,
    pub highlight_border_color: String,
    pub base_layer_opacity: f64,
    /// Peak opacity lost per unit of distance from the clicked cell.
    pub pulse_falloff: f64,
    /// Seconds of pulse duration per unit of distance.
    pub pulse_duration_per_unit: f64,
    pub pulse_min_duration: f64,
    pub hover_duration: f64,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            rows: 47,
            cols: 30,
            cell_size_px: 48,
            cell_size_md_px: 64,
            md_breakpoint_px: 768,
            mask_diameter: 400.0,
            base_ripple_color: "rgba(0, 209, 255, 0.2)".to_string(),
            highlight_ripple_color: "rgba(0, 255, 136, 0.4)".to_string(),
            base_border_color: "rgba(255, 255, 255, 0.1)".to_string(),
            highlight_border_color: "rgba(0, 255, 136, 0.4)".to_string(),
            base_layer_opacity: 0.6,
            pulse_falloff: 0.1,
            pulse_duration_per_unit: 0.15,
            pulse_min_duration: 0.2,
            hover_duration: 0.5,
        }
    }
}

impl RippleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Invalid(format!(
                "grid must have at least one cell, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.rows > MAX_GRID_SIDE || self.cols > MAX_GRID_SIDE {
            return Err(ConfigError::Invalid(format!(
                "grid sides are capped at {}, got {}x{}",
                MAX_GRID_SIDE, self.rows, self.cols
            )));
        }
        if self.cell_size_px == 0 || self.cell_size_md_px == 0 {
            return Err(ConfigError::Invalid("cell sizes must be positive".to_string()));
        }
        let positive = [
            ("mask_diameter", self.mask_diameter),
            ("pulse_min_duration", self.pulse_min_duration),
            ("hover_duration", self.hover_duration),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, value)));
            }
        }
        if !(self.pulse_falloff >= 0.0 && self.pulse_duration_per_unit >= 0.0) {
            return Err(ConfigError::Invalid("pulse constants must not be negative".to_string()));
        }
        if !(0.0..=1.0).contains(&self.base_layer_opacity) {
            return Err(ConfigError::Invalid(format!(
                "base_layer_opacity must be within [0, 1], got {}",
                self.base_layer_opacity
            )));
        }
        Ok(())
    }
}

pub fn parse_config(raw: &str) -> Result<LandingConfig, ConfigError> {
    let config: LandingConfig = serde_json::from_str(raw)?;
    config.ripple.validate()?;
    Ok(config)
}

/// Reads the inline config block, falling back to defaults when it is absent or broken.
pub fn load_config() -> LandingConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => match parse_config(&raw) {
            Ok(config) => config,
            Err(e) => {
                gloo_console::warn!("Ignoring landing config:", e.to_string());
                log::warn!("Falling back to default landing config: {}", e);
                LandingConfig::default()
            }
        },
        _ => LandingConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config, LandingConfig::default());
        assert_eq!(config.ripple.rows, 47);
        assert_eq!(config.ripple.cols, 30);
        assert_eq!(config.ripple.mask_diameter, 400.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = parse_config(r#"{"ripple": {"mask_diameter": 300, "cols": 12}}"#).unwrap();
        assert_eq!(config.ripple.mask_diameter, 300.0);
        assert_eq!(config.ripple.cols, 12);
        assert_eq!(config.ripple.rows, 47);
        assert_eq!(config.ripple.highlight_ripple_color, "rgba(0, 255, 136, 0.4)");
    }

    #[test]
    fn broken_json_is_a_json_error() {
        assert!(matches!(parse_config("{ripple"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        let err = parse_config(r#"{"ripple": {"rows": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let err = parse_config(r#"{"ripple": {"rows": 470000}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(parse_config(r#"{"ripple": {"cols": 513}}"#).is_err());

        let config = parse_config(r#"{"ripple": {"rows": 512, "cols": 512}}"#).unwrap();
        assert_eq!(config.ripple.rows, MAX_GRID_SIDE);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        for raw in [
            r#"{"ripple": {"mask_diameter": 0}}"#,
            r#"{"ripple": {"hover_duration": -1}}"#,
            r#"{"ripple": {"base_layer_opacity": 1.5}}"#,
            r#"{"ripple": {"pulse_falloff": -0.1}}"#,
            r#"{"ripple": {"cell_size_px": 0}}"#,
        ] {
            assert!(parse_config(raw).is_err(), "{} should be rejected", raw);
        }
    }
}
