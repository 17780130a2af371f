//! L4 Atomic Layer: Configuration types for smooth scrolling

use std::time::Duration;

pub use carousel_core::{EasingType, ScrollConfig};

/// Extension trait for ScrollConfig with animation helpers
pub trait ScrollConfigExt {
    /// Animation duration as Duration
    fn animation_duration(&self) -> Duration;

    /// Whether programmatic scrolls are actually animated
    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled
            && self.animation_duration_ms > 0
            && self.easing != EasingType::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScrollConfig::default();
        assert!(config.smooth_enabled);
        assert_eq!(config.animation_duration_ms, 250);
        assert_eq!(config.easing, EasingType::Cubic);
        assert_eq!(config.animation_duration(), Duration::from_millis(250));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = ScrollConfig::default();
        assert!(config.is_smooth());

        config.smooth_enabled = false;
        assert!(!config.is_smooth());

        config.smooth_enabled = true;
        config.animation_duration_ms = 0;
        assert!(!config.is_smooth());

        config.animation_duration_ms = 250;
        config.easing = EasingType::None;
        assert!(!config.is_smooth());
    }
}
