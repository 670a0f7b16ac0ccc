use std::{str::FromStr, time::Duration};

use serde::Deserialize;
use shared::error::ConfigError;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    /// POST to the form's action, or open a `mailto:` link when it has none.
    #[default]
    Remote,
    /// Validate in place and acknowledge locally without a network call.
    Inline,
}

impl FromStr for FormMode {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "remote" | "mailto" => Ok(FormMode::Remote),
            "inline" | "validate" => Ok(FormMode::Inline),
            other => Err(ConfigError::UnknownFormMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FadeSchedule {
    Delay { ms: u64 },
    NextFrame,
}

impl Default for FadeSchedule {
    fn default() -> Self {
        FadeSchedule::Delay { ms: 100 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub breakpoint_px: f64,
    pub swipe_threshold_px: f64,
    pub edge_zone_px: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 768.0,
            swipe_threshold_px: 100.0,
            edge_zone_px: 50.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub elevate_after_px: f64,
    /// Fraction of the viewport height a section's range is shifted up by.
    pub active_offset_ratio: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            elevate_after_px: 100.0,
            active_offset_ratio: 1.0 / 3.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub mode: FormMode,
    pub thank_you: String,
    pub generic_error: String,
    pub network_error: String,
    pub submit_label: String,
    pub sending_label: String,
    pub inline_delay_ms: u64,
    pub message_dismiss_ms: u64,
    pub message_fade_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            mode: FormMode::default(),
            thank_you: "Thank you for your message! I'll get back to you soon.".into(),
            generic_error: "Something went wrong. Please try again later.".into(),
            network_error: "Network error. Please try again later.".into(),
            submit_label: "Send Message".into(),
            sending_label: "Sending...".into(),
            inline_delay_ms: 1500,
            message_dismiss_ms: 5000,
            message_fade_ms: 300,
        }
    }
}

impl FormConfig {
    pub fn inline_delay(&self) -> Duration {
        Duration::from_millis(self.inline_delay_ms)
    }

    pub fn message_dismiss(&self) -> Duration {
        Duration::from_millis(self.message_dismiss_ms)
    }

    pub fn message_fade(&self) -> Duration {
        Duration::from_millis(self.message_fade_ms)
    }

    /// Applies the form's `data-mode` attribute on top of the configured mode.
    pub fn apply_mode_override(&mut self, raw: &str) -> Result<(), ConfigError> {
        self.mode = raw.parse()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub stagger_children: bool,
    pub stagger_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".into(),
            stagger_children: true,
            stagger_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub typing_speed_ms: u64,
    pub typing_cursor: bool,
    pub cursor_hold_ms: u64,
    pub touch_reset_ms: u64,
    pub fade: FadeSchedule,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            typing_speed_ms: 150,
            typing_cursor: true,
            cursor_hold_ms: 3000,
            touch_reset_ms: 150,
            fade: FadeSchedule::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub navigation: NavigationConfig,
    pub scroll: ScrollConfig,
    pub form: FormConfig,
    pub animation: AnimationConfig,
    pub effects: EffectsConfig,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            navigation: NavigationConfig::default(),
            scroll: ScrollConfig::default(),
            form: FormConfig::default(),
            animation: AnimationConfig::default(),
            effects: EffectsConfig::default(),
            log_level: "info".into(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Layers the page's embedded JSON block over the defaults.
///
/// Missing or blank input yields the defaults; malformed input is logged and
/// also yields the defaults, so a broken config block never disables the page.
pub fn load_config(raw: Option<&str>) -> SiteConfig {
    let (config, err) = parse_config(raw);
    if let Some(err) = err {
        warn!(error = %err, "ignoring embedded site config");
    }
    config
}

/// Like [`load_config`], but hands the parse failure back instead of logging
/// it, for hosts that need the config before their subscriber is installed.
pub fn parse_config(raw: Option<&str>) -> (SiteConfig, Option<ConfigError>) {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        debug!("no embedded site config; using defaults");
        return (SiteConfig::default(), None);
    };

    match SiteConfig::from_json(raw) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
