use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::progress::IndicatorType;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log files live here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Options of a single carousel instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Number of slides visible at once (fractions below 1 size a slide as a share of the track)
    #[serde(default = "default_slides_to_show")]
    pub slides_to_show: f64,
    /// Scroll to a slide when it is selected
    #[serde(default)]
    pub slide_on_select: bool,
    /// Free scrolling: next/prev stop at the ends instead of wrapping
    #[serde(default)]
    pub use_free_scroll: bool,
    /// Offset subtracted from every programmatic scroll target
    #[serde(default)]
    pub scroll_offset: f64,
    /// Advance slides automatically
    #[serde(default)]
    pub auto_play: bool,
    /// Autoplay period in milliseconds
    #[serde(default = "default_autoplay_speed")]
    pub autoplay_speed_ms: u64,
    /// Pause autoplay while the pointer hovers the track or its controls
    #[serde(default = "default_true")]
    pub pause_on_hover: bool,
    /// External pause override; when set it wins over hover
    #[serde(default)]
    pub pause: Option<bool>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slides_to_show: default_slides_to_show(),
            slide_on_select: false,
            use_free_scroll: false,
            scroll_offset: 0.0,
            auto_play: false,
            autoplay_speed_ms: default_autoplay_speed(),
            pause_on_hover: default_true(),
            pause: None,
        }
    }
}

impl CarouselConfig {
    /// Reject option values the engine cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        if !self.slides_to_show.is_finite() || self.slides_to_show <= 0.0 {
            return Err(crate::Error::InvalidOption {
                option: "slides_to_show",
                reason: format!("must be a positive number, got {}", self.slides_to_show),
            });
        }
        if self.autoplay_speed_ms == 0 {
            return Err(crate::Error::InvalidOption {
                option: "autoplay_speed_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if !self.scroll_offset.is_finite() {
            return Err(crate::Error::InvalidOption {
                option: "scroll_offset",
                reason: format!("must be finite, got {}", self.scroll_offset),
            });
        }
        Ok(())
    }

    /// Autoplay period as Duration
    pub fn autoplay_period(&self) -> Duration {
        Duration::from_millis(self.autoplay_speed_ms)
    }
}

/// Easing curve used by smooth scrolling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// No animation: jump straight to the target
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseInOut,
}

/// Smooth scrolling configuration for front ends that animate the track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate programmatic scrolls instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Frames per second while animating; also the frame rate of ratio sampling
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

impl ScrollConfig {
    /// Duration of one rendering frame, never shorter than 1ms
    pub fn frame_interval(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis((1000 / self.animation_fps as u64).max(1))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Number of demo slides mounted by the terminal front end
    #[serde(default = "default_demo_slides")]
    pub demo_slides: usize,
    /// Progress indicator style
    #[serde(default)]
    pub indicator_type: IndicatorType,
    /// Show the dots navigation row
    #[serde(default = "default_true")]
    pub show_dots: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            demo_slides: default_demo_slides(),
            indicator_type: IndicatorType::default(),
            show_dots: default_true(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("carousel")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_slides_to_show() -> f64 {
    3.0
}

fn default_autoplay_speed() -> u64 {
    2000
}

fn default_animation_duration() -> u64 {
    250
}

fn default_animation_fps() -> u32 {
    60
}

fn default_tick_rate() -> u64 {
    100
}

fn default_demo_slides() -> usize {
    8
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.carousel.validate()?;
        Ok(config)
    }

    /// Render as a TOML document
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/carousel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("carousel")
            .join("config.toml")
    }

    /// Get the log file path used by the terminal front end
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("carousel.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}
