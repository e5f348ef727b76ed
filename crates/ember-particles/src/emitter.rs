//! Burst presets, loadable from TOML component tables

use ember_core::Color;

use crate::system::{DEFAULT_LIFE, DEFAULT_SPEED};

/// Parameters for one particle burst.
///
/// Game modules keep these in data files per theme/effect and pass them to
/// [`ParticleSystem::emit_config`](crate::ParticleSystem::emit_config).
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    pub count: u32,
    pub color: Color,
    /// Upper bound of the emission speed; each particle samples
    /// [0.5 * speed, speed]
    pub speed: f32,
    /// Lifetime in seconds of every particle in the burst
    pub life: f32,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            count: 10,
            color: Color::WHITE,
            speed: DEFAULT_SPEED,
            life: DEFAULT_LIFE,
        }
    }
}

impl EmitterConfig {
    /// Parse an EmitterConfig from a TOML component table
    pub fn from_toml(table: &toml::value::Table) -> Self {
        let mut config = Self::default();

        if let Some(v) = table.get("count") {
            config.count = v.as_integer().unwrap_or(config.count as i64).max(0) as u32;
        }
        if let Some(v) = table.get("color") {
            config.color = toml_color(v, config.color);
        }
        if let Some(v) = table.get("speed") {
            config.speed = toml_f32(v, config.speed);
        }
        if let Some(v) = table.get("life") {
            config.life = toml_f32(v, config.life);
        }

        config
    }
}

// ── TOML helpers (handle integer/float coercion) ──

fn toml_f32(v: &toml::Value, default: f32) -> f32 {
    v.as_float()
        .map(|f| f as f32)
        .or_else(|| v.as_integer().map(|i| i as f32))
        .unwrap_or(default)
}

fn toml_color(v: &toml::Value, default: Color) -> Color {
    if let Some(arr) = v.as_array() {
        if arr.len() >= 4 {
            return Color::new(
                toml_f32(&arr[0], default.r),
                toml_f32(&arr[1], default.g),
                toml_f32(&arr[2], default.b),
                toml_f32(&arr[3], default.a),
            );
        }
    }
    default
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let config = EmitterConfig::default();
        assert!(config.count > 0);
        assert!(config.speed > 0.0);
        assert!(config.life > 0.0);
    }

    #[test]
    fn parse_from_toml() {
        let toml_str = r#"
count = 24
color = [1.0, 0.5, 0.0, 1.0]
speed = 120.0
life = 0.4
"#;
        let table: toml::value::Table = toml::from_str(toml_str).unwrap();
        let config = EmitterConfig::from_toml(&table);
        assert_eq!(config.count, 24);
        assert!((config.color.g - 0.5).abs() < 0.01);
        assert!((config.speed - 120.0).abs() < 0.01);
        assert!((config.life - 0.4).abs() < 0.01);
    }

    #[test]
    fn toml_integer_float_coercion() {
        // TOML `speed = 90` gives an integer, `color = [1, 0, 0, 1]` too
        let toml_str = "speed = 90\ncolor = [1, 0, 0, 1]";
        let table: toml::value::Table = toml::from_str(toml_str).unwrap();
        let config = EmitterConfig::from_toml(&table);
        assert!((config.speed - 90.0).abs() < 0.01);
        assert!((config.color.r - 1.0).abs() < 0.01);
        assert!((config.color.g).abs() < 0.01);
    }

    #[test]
    fn negative_count_parses_as_zero() {
        let table: toml::value::Table = toml::from_str("count = -3").unwrap();
        let config = EmitterConfig::from_toml(&table);
        assert_eq!(config.count, 0);
    }
}
