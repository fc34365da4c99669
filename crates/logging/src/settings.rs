//! crates/logging/src/settings.rs
//! Threshold and color settings read from the environment.

use event::LevelFilter;
use logging_sink::ColorMode;

use crate::error::SettingsError;

/// Variable holding the threshold name, for example `info` or `none`.
pub const LEVEL_ENV: &str = "MARKLOG_LEVEL";

/// Variable holding the color mode: `auto`, `always` or `never`.
pub const COLOR_ENV: &str = "MARKLOG_COLOR";

/// Variable that disables color whenever it holds a non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// User-facing logging settings.
///
/// Settings are plain data; [`LoggingConfig::from_settings`](crate::LoggingConfig::from_settings)
/// turns them into a live configuration.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggingSettings {
    /// Minimum level that is emitted.
    pub level: LevelFilter,
    /// Color mode of the default console sink.
    pub color: ColorMode,
}

impl LoggingSettings {
    /// Reads [`LEVEL_ENV`], [`COLOR_ENV`] and [`NO_COLOR_ENV`] from the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when a variable holds an unknown name.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// value. Unset and empty variables keep the defaults.
    ///
    /// ```
    /// use logging::{ColorMode, LevelFilter, LoggingSettings};
    ///
    /// let settings = LoggingSettings::from_lookup(|name| match name {
    ///     "MARKLOG_LEVEL" => Some("warn".to_owned()),
    ///     "NO_COLOR" => Some("1".to_owned()),
    ///     _ => None,
    /// })?;
    /// assert_eq!(settings.level, LevelFilter::Warn);
    /// assert_eq!(settings.color, ColorMode::Never);
    /// # Ok::<(), logging::SettingsError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when a variable holds an unknown name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut settings = Self::default();

        if let Some(raw) = value(LEVEL_ENV) {
            settings.level = raw.parse().map_err(|source| SettingsError::Level {
                var: LEVEL_ENV,
                source,
            })?;
        }
        if let Some(raw) = value(COLOR_ENV) {
            settings.color = raw.parse().map_err(|source| SettingsError::Color {
                var: COLOR_ENV,
                source,
            })?;
        }
        if value(NO_COLOR_ENV).is_some() {
            settings.color = ColorMode::Never;
        }
        Ok(settings)
    }

    /// Returns a copy with the threshold replaced.
    #[must_use]
    pub const fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Returns a copy with the color mode replaced.
    #[must_use]
    pub const fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }
}
