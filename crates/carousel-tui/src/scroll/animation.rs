//! L3 Molecular Layer: Scroll animation controller
//!
//! Eases the horizontal track offset (in terminal columns) toward a target.

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Scroll animation controller
///
/// `request_scroll_to` records a target; the next `update` starts easing
/// toward it from wherever the track currently is. A new request while an
/// animation runs retargets from the current position.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    current: f64,
    pending_target: Option<f64>,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current: 0.0,
            pending_target: None,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether `update` still has work to do
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_target.is_some()
    }

    /// Final offset once pending work completes
    pub fn target(&self) -> f64 {
        self.pending_target
            .or_else(|| self.animation.as_ref().map(|a| a.to))
            .unwrap_or(self.current)
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Jump to `left` immediately, dropping any animation
    pub fn set_position(&mut self, left: f64) {
        self.animation = None;
        self.pending_target = None;
        self.current = left;
    }

    pub fn request_scroll_to(&mut self, target: f64) {
        self.pending_target = Some(target);
    }

    /// Advance to `now` and return the current offset, clamped to `[0, max_scroll]`
    pub fn update(&mut self, max_scroll: f64, now: Instant) -> f64 {
        let max_scroll = max_scroll.max(0.0);

        if let Some(target) = self.pending_target.take() {
            let target = target.clamp(0.0, max_scroll);
            if !self.config.is_smooth() || target == self.current {
                self.current = target;
                self.animation = None;
            } else {
                self.animation = Some(ActiveAnimation {
                    start: now,
                    from: self.current,
                    to: target,
                    duration: self.config.animation_duration(),
                    easing: self.config.easing,
                });
            }
        }

        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration, now) {
                self.current = anim.to;
                self.animation = None;
            } else {
                let t = anim.easing.apply(progress(anim.start, anim.duration, now));
                self.current = lerp(anim.from, anim.to, t);
            }
        }

        self.current = self.current.clamp(0.0, max_scroll);
        self.current
    }

    /// Stop where the track currently is
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth(duration_ms: u64) -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: duration_ms,
            easing: EasingType::Linear,
            ..Default::default()
        }
    }

    #[test]
    fn test_instant_jump_when_disabled() {
        let config = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut animator = ScrollAnimator::new(config);

        animator.request_scroll_to(40.0);
        assert_eq!(animator.update(100.0, Instant::now()), 40.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut animator = ScrollAnimator::new(smooth(200));
        let start = Instant::now();

        animator.request_scroll_to(80.0);
        assert_eq!(animator.target(), 80.0);
        assert_eq!(animator.update(100.0, start), 0.0);
        assert!(animator.is_animating());

        let midway = animator.update(100.0, start + Duration::from_millis(100));
        assert!((midway - 40.0).abs() < 1e-9);

        assert_eq!(animator.update(100.0, start + Duration::from_millis(200)), 80.0);
        assert!(!animator.needs_update());
    }

    #[test]
    fn test_retarget_starts_from_current() {
        let mut animator = ScrollAnimator::new(smooth(100));
        let start = Instant::now();

        animator.request_scroll_to(100.0);
        animator.update(100.0, start);
        let at = start + Duration::from_millis(50);
        let reached = animator.update(100.0, at);

        animator.request_scroll_to(0.0);
        assert_eq!(animator.update(100.0, at), reached);
        assert_eq!(animator.update(100.0, at + Duration::from_millis(100)), 0.0);
    }

    #[test]
    fn test_target_clamped_to_range() {
        let mut animator = ScrollAnimator::new(smooth(100));
        let start = Instant::now();

        animator.request_scroll_to(500.0);
        animator.update(60.0, start);
        assert_eq!(animator.update(60.0, start + Duration::from_secs(1)), 60.0);

        animator.request_scroll_to(-10.0);
        animator.update(60.0, start);
        assert_eq!(animator.update(60.0, start + Duration::from_secs(2)), 0.0);
    }

    #[test]
    fn test_set_position_cancels() {
        let mut animator = ScrollAnimator::new(smooth(100));
        animator.request_scroll_to(50.0);
        animator.set_position(10.0);
        assert!(!animator.needs_update());
        assert_eq!(animator.update(100.0, Instant::now()), 10.0);
    }
}
