use serde::Deserialize;

use crate::config::ConfigError;

/// 24-bit color, kept independent of the terminal palette so the core never
/// touches the renderer's types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn darken(self, amount: u8) -> Rgb {
        Rgb(
            self.0.saturating_sub(amount),
            self.1.saturating_sub(amount),
            self.2.saturating_sub(amount),
        )
    }
}

/// Static tunables. Every field has a default so a config file may override
/// any subset of them.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BaseSettings {
    pub screen_width: i32,
    pub screen_height: i32,
    pub bg_color: Rgb,

    pub ship_width: i32,
    pub ship_height: i32,
    pub ship_speed: f32,
    pub ship_limit: u32,

    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: Rgb,
    pub bullet_speed: f32,
    pub bullets_allowed: usize,

    pub alien_width: i32,
    pub alien_height: i32,
    pub alien_speed: f32,
    pub fleet_drop_speed: i32,
    pub alien_points: u32,

    /// Speed multiplier applied on every level-up.
    pub speedup_scale: f32,
    /// Point multiplier applied on every level-up.
    pub score_scale: f32,
    /// Upper bound on any speed, as a multiple of its base value.
    pub max_speedup: f32,

    pub hit_pause_ms: u64,
    pub frames_per_second: u32,
    pub key_first_hold_frames: u64,
    pub key_hold_frames: u64,
    pub backdrop_seed: u64,
    pub backdrop_density: usize,
}

impl Default for BaseSettings {
    fn default() -> Self {
        Self {
            screen_width: 1200,
            screen_height: 800,
            bg_color: Rgb(230, 230, 230),

            ship_width: 60,
            ship_height: 48,
            ship_speed: 1.5,
            ship_limit: 3,

            bullet_width: 3,
            bullet_height: 15,
            bullet_color: Rgb(60, 60, 60),
            bullet_speed: 3.0,
            bullets_allowed: 3,

            alien_width: 60,
            alien_height: 58,
            alien_speed: 1.0,
            fleet_drop_speed: 10,
            alien_points: 50,

            speedup_scale: 1.1,
            score_scale: 1.5,
            max_speedup: 20.0,

            hit_pause_ms: 500,
            frames_per_second: 60,
            key_first_hold_frames: 45,
            key_hold_frames: 20,
            backdrop_seed: 7,
            backdrop_density: 90,
        }
    }
}

impl BaseSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("screen", self.screen_width, self.screen_height),
            ("ship", self.ship_width, self.ship_height),
            ("bullet", self.bullet_width, self.bullet_height),
            ("alien", self.alien_width, self.alien_height),
        ];
        for (what, w, h) in dims {
            if w <= 0 || h <= 0 {
                return Err(ConfigError::Invalid(format!(
                    "{what} dimensions must be positive, got {w}x{h}"
                )));
            }
        }

        let speeds = [
            ("ship_speed", self.ship_speed),
            ("bullet_speed", self.bullet_speed),
            ("alien_speed", self.alien_speed),
        ];
        for (name, v) in speeds {
            if !v.is_finite() || v < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a finite non-negative number, got {v}"
                )));
            }
        }

        let scales = [
            ("speedup_scale", self.speedup_scale),
            ("score_scale", self.score_scale),
            ("max_speedup", self.max_speedup),
        ];
        for (name, v) in scales {
            if !v.is_finite() || v < 1.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be at least 1.0, got {v}"
                )));
            }
        }

        if self.frames_per_second == 0 {
            return Err(ConfigError::Invalid(
                "frames_per_second must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Base values plus the values that change while a game is running.
#[derive(Clone, Debug)]
pub struct Settings {
    pub base: BaseSettings,
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    pub alien_points: u32,
    /// Number of level-ups applied since the last reset.
    pub speedups: u32,
}

impl Settings {
    pub fn new(base: BaseSettings) -> Self {
        let mut settings = Self {
            ship_speed: base.ship_speed,
            bullet_speed: base.bullet_speed,
            alien_speed: base.alien_speed,
            alien_points: base.alien_points,
            speedups: 0,
            base,
        };
        settings.initialize_dynamic_settings();
        settings
    }

    pub fn initialize_dynamic_settings(&mut self) {
        self.ship_speed = self.base.ship_speed;
        self.bullet_speed = self.base.bullet_speed;
        self.alien_speed = self.base.alien_speed;
        self.alien_points = self.base.alien_points;
        self.speedups = 0;
    }

    /// Scale speeds and points for the next level. Speeds stop growing at
    /// `base * max_speedup`.
    pub fn increase_speed(&mut self) {
        let scale = self.base.speedup_scale;
        let cap = self.base.max_speedup;
        self.ship_speed = scaled(self.ship_speed, scale, self.base.ship_speed * cap);
        self.bullet_speed = scaled(self.bullet_speed, scale, self.base.bullet_speed * cap);
        self.alien_speed = scaled(self.alien_speed, scale, self.base.alien_speed * cap);

        let points = (self.alien_points as f64 * self.base.score_scale as f64).trunc();
        self.alien_points = if points >= u32::MAX as f64 {
            u32::MAX
        } else {
            (points as u32).max(self.alien_points)
        };
        self.speedups = self.speedups.saturating_add(1);
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new(BaseSettings::default())
    }
}

fn scaled(current: f32, scale: f32, cap: f32) -> f32 {
    (current * scale).min(cap).max(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_settings_start_at_base_values() {
        let s = Settings::default();
        assert_relative_eq!(s.ship_speed, 1.5);
        assert_relative_eq!(s.bullet_speed, 3.0);
        assert_relative_eq!(s.alien_speed, 1.0);
        assert_eq!(s.alien_points, 50);
    }

    #[test]
    fn increase_speed_scales_geometrically() {
        let mut s = Settings::default();
        s.increase_speed();
        assert_relative_eq!(s.ship_speed, 1.65, epsilon = 1e-5);
        assert_relative_eq!(s.bullet_speed, 3.3, epsilon = 1e-5);
        assert_relative_eq!(s.alien_speed, 1.1, epsilon = 1e-5);
        assert_eq!(s.alien_points, 75);
        s.increase_speed();
        assert_relative_eq!(s.alien_speed, 1.21, epsilon = 1e-5);
        assert_eq!(s.alien_points, 112);
    }

    #[test]
    fn speedup_is_capped() {
        let mut s = Settings::default();
        for _ in 0..500 {
            s.increase_speed();
        }
        assert_relative_eq!(s.alien_speed, 20.0, epsilon = 1e-4);
        assert_relative_eq!(s.ship_speed, 30.0, epsilon = 1e-4);
        assert_eq!(s.alien_points, u32::MAX);
        let before = s.bullet_speed;
        s.increase_speed();
        assert_relative_eq!(s.bullet_speed, before);
    }

    #[test]
    fn initialize_resets_dynamic_values() {
        let mut s = Settings::default();
        s.increase_speed();
        s.increase_speed();
        s.initialize_dynamic_settings();
        assert_relative_eq!(s.bullet_speed, 3.0);
        assert_eq!(s.alien_points, 50);
        assert_eq!(s.speedups, 0);
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(BaseSettings::default().validate().is_ok());

        let zero_alien = BaseSettings { alien_width: 0, ..BaseSettings::default() };
        assert!(zero_alien.validate().is_err());

        let shrinking = BaseSettings { speedup_scale: 0.9, ..BaseSettings::default() };
        assert!(shrinking.validate().is_err());

        let nan_speed = BaseSettings { ship_speed: f32::NAN, ..BaseSettings::default() };
        assert!(nan_speed.validate().is_err());

        let no_fps = BaseSettings { frames_per_second: 0, ..BaseSettings::default() };
        assert!(no_fps.validate().is_err());
    }
}
