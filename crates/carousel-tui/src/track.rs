//! Scroll track laid out in terminal columns

use std::time::{Duration, Instant};

use carousel_core::registry::{SlideDescriptor, SlideId};
use carousel_core::{ScrollConfig, ScrollTrack, TrackGeometry};

use crate::scroll::ScrollAnimator;

/// Visible part of one slide inside the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideSpan {
    pub index: usize,
    /// Column inside the viewport where the visible part starts
    pub x: u16,
    pub width: u16,
    /// Columns of the slide hidden past the left edge
    pub clip_left: u16,
}

/// Quiet time after the last user scroll before the strip snaps
pub const SNAP_IDLE: Duration = Duration::from_millis(150);

/// Horizontal strip of equally wide slides, scrolled by a [`ScrollAnimator`]
///
/// With snapping on, user scrolls come to rest on the nearest slide edge once
/// input goes quiet. Programmatic scrolls always target an edge already.
#[derive(Debug, Clone)]
pub struct TerminalTrack {
    slides: Vec<SlideId>,
    slide_width_percent: f64,
    viewport_width: u16,
    animator: ScrollAnimator,
    scrolled: bool,
    snap: bool,
    /// Pointer is dragging the strip
    held: bool,
    settle_at: Option<Instant>,
}

impl TerminalTrack {
    pub fn new(scroll: ScrollConfig, slide_width_percent: f64) -> Self {
        Self {
            slides: Vec::new(),
            slide_width_percent,
            viewport_width: 0,
            animator: ScrollAnimator::new(scroll),
            scrolled: false,
            snap: false,
            held: false,
            settle_at: None,
        }
    }

    /// Snap user scrolls to slide edges
    pub fn with_snap(mut self, snap: bool) -> Self {
        self.snap = snap;
        self
    }

    pub fn set_viewport_width(&mut self, width: u16) {
        if self.viewport_width != width {
            self.viewport_width = width;
            self.clamp_position();
        }
    }

    #[inline]
    pub fn viewport_width(&self) -> u16 {
        self.viewport_width
    }

    /// Width of one slide in columns
    pub fn slide_width(&self) -> f64 {
        self.viewport_width as f64 * self.slide_width_percent / 100.0
    }

    #[inline]
    pub fn scroll_left(&self) -> f64 {
        self.animator.current()
    }

    pub fn max_scroll(&self) -> f64 {
        (self.slides.len() as f64 * self.slide_width() - self.viewport_width as f64).max(0.0)
    }

    /// Whether `step` still has work: an animation or a pending snap
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animator.needs_update() || self.settle_at.is_some()
    }

    /// User-driven scroll (wheel or drag); jumps without easing
    pub fn scroll_by(&mut self, delta: f64, now: Instant) {
        let left = (self.scroll_left() + delta).clamp(0.0, self.max_scroll());
        self.move_to(left);
        if self.snap && !self.held {
            self.settle_at = Some(now + SNAP_IDLE);
        }
    }

    /// Hold the strip under a drag. Releasing settles it right away.
    pub fn set_held(&mut self, held: bool, now: Instant) {
        if self.held == held {
            return;
        }
        self.held = held;
        if held {
            self.settle_at = None;
        } else if self.snap {
            self.settle_at = Some(now);
        }
    }

    /// Nearest slide edge to the current offset
    pub fn snap_target(&self) -> f64 {
        let width = self.slide_width();
        if width <= 0.0 {
            return self.scroll_left();
        }
        ((self.scroll_left() / width).round() * width).min(self.max_scroll())
    }

    /// Advance the animation to `now`. Returns true if the offset moved.
    pub fn step(&mut self, now: Instant) -> bool {
        if self.settle_at.is_some_and(|at| at <= now) {
            self.settle_at = None;
            let target = self.snap_target();
            self.animator.request_scroll_to(target);
        }
        if !self.animator.needs_update() {
            return false;
        }
        let before = self.animator.current();
        let after = self.animator.update(self.max_scroll(), now);
        let moved = after != before;
        self.scrolled |= moved;
        moved
    }

    /// Slides intersecting the viewport, left to right
    pub fn visible_spans(&self) -> Vec<SlideSpan> {
        let width = self.slide_width();
        if width <= 0.0 {
            return Vec::new();
        }
        let left = self.scroll_left();
        let viewport = self.viewport_width as f64;

        (0..self.slides.len())
            .filter_map(|index| {
                let start = (index as f64 * width - left).round();
                let end = ((index + 1) as f64 * width - left).round();
                let visible_start = start.max(0.0);
                let visible_end = end.min(viewport);
                if visible_end <= visible_start {
                    return None;
                }
                Some(SlideSpan {
                    index,
                    x: visible_start as u16,
                    width: (visible_end - visible_start) as u16,
                    clip_left: (visible_start - start) as u16,
                })
            })
            .collect()
    }

    /// Slide under a viewport column
    pub fn slide_at(&self, column: u16) -> Option<usize> {
        self.visible_spans()
            .into_iter()
            .find(|span| column >= span.x && column < span.x + span.width)
            .map(|span| span.index)
    }

    fn clamp_position(&mut self) {
        let max = self.max_scroll();
        if self.scroll_left() > max {
            self.move_to(max);
        }
    }

    fn move_to(&mut self, left: f64) {
        if left != self.animator.current() {
            self.animator.set_position(left);
            self.scrolled = true;
        }
    }
}

impl ScrollTrack for TerminalTrack {
    fn geometry(&self) -> Option<TrackGeometry> {
        if self.viewport_width == 0 {
            return None;
        }
        let client_width = self.viewport_width as f64;
        Some(TrackGeometry {
            scroll_left: self.scroll_left(),
            scroll_width: (self.slides.len() as f64 * self.slide_width()).max(client_width),
            client_width,
        })
    }

    fn slide_offset(&self, slide: &SlideDescriptor) -> Option<f64> {
        if self.viewport_width == 0 {
            return None;
        }
        self.slides
            .iter()
            .position(|id| *id == slide.id)
            .map(|index| index as f64 * self.slide_width())
    }

    fn smooth_scroll_to(&mut self, left: f64) {
        self.settle_at = None;
        self.animator.request_scroll_to(left);
    }

    fn slide_mounted(&mut self, slide: &SlideDescriptor) {
        if !self.slides.contains(&slide.id) {
            self.slides.push(slide.id);
        }
    }

    fn slide_unmounted(&mut self, slide: &SlideDescriptor) {
        self.slides.retain(|id| *id != slide.id);
        self.clamp_position();
    }

    fn take_scrolled(&mut self) -> bool {
        std::mem::take(&mut self.scrolled)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use carousel_core::EasingType;

    use super::*;

    fn track(count: usize, smooth: bool) -> (TerminalTrack, Vec<SlideDescriptor>) {
        let config = ScrollConfig {
            smooth_enabled: smooth,
            animation_duration_ms: 100,
            easing: EasingType::Linear,
            ..Default::default()
        };
        // Three slides per 60-column viewport
        let mut track = TerminalTrack::new(config, 100.0 / 3.0);
        track.set_viewport_width(60);
        let slides: Vec<_> = (0..count).map(|_| SlideDescriptor::new()).collect();
        for slide in &slides {
            track.slide_mounted(slide);
        }
        (track, slides)
    }

    #[test]
    fn test_geometry_in_columns() {
        let (track, slides) = track(6, true);
        assert!((track.slide_width() - 20.0).abs() < 1e-9);
        assert!((track.max_scroll() - 60.0).abs() < 1e-9);
        assert!((track.slide_offset(&slides[4]).unwrap() - 80.0).abs() < 1e-9);

        let geometry = track.geometry().unwrap();
        assert_eq!(geometry.client_width, 60.0);
        assert_eq!(geometry.ratio(), 0.0);
    }

    #[test]
    fn test_unmeasured_before_layout() {
        let mut track = TerminalTrack::new(ScrollConfig::default(), 50.0);
        let slide = SlideDescriptor::new();
        track.slide_mounted(&slide);
        assert!(track.geometry().is_none());
        assert!(track.slide_offset(&slide).is_none());
    }

    #[test]
    fn test_smooth_scroll_reports_movement() {
        let (mut track, _) = track(6, true);
        let start = Instant::now();

        track.smooth_scroll_to(40.0);
        assert!(!track.take_scrolled());

        assert!(!track.step(start));
        assert!(track.step(start + Duration::from_millis(50)));
        assert!((track.scroll_left() - 20.0).abs() < 1e-9);
        assert!(track.step(start + Duration::from_millis(100)));
        assert_eq!(track.scroll_left(), 40.0);
        assert!(!track.is_animating());

        assert!(track.take_scrolled());
        assert!(!track.take_scrolled());
    }

    #[test]
    fn test_wheel_scroll_is_immediate() {
        let (mut track, _) = track(6, true);
        let now = Instant::now();
        track.scroll_by(15.0, now);
        assert_eq!(track.scroll_left(), 15.0);
        track.scroll_by(500.0, now);
        assert!((track.scroll_left() - 60.0).abs() < 1e-9);
        assert!(track.take_scrolled());
    }

    #[test]
    fn test_visible_spans_clip_partial_slides() {
        let (mut track, _) = track(6, false);
        track.scroll_by(10.0, Instant::now());

        let spans = track.visible_spans();
        assert_eq!(
            spans,
            vec![
                SlideSpan { index: 0, x: 0, width: 10, clip_left: 10 },
                SlideSpan { index: 1, x: 10, width: 20, clip_left: 0 },
                SlideSpan { index: 2, x: 30, width: 20, clip_left: 0 },
                SlideSpan { index: 3, x: 50, width: 10, clip_left: 0 },
            ]
        );
        assert_eq!(track.slide_at(0), Some(0));
        assert_eq!(track.slide_at(35), Some(2));
        assert_eq!(track.slide_at(59), Some(3));
        assert_eq!(track.slide_at(60), None);
    }

    #[test]
    fn test_resize_clamps_offset() {
        let (mut track, _) = track(6, false);
        track.scroll_by(60.0, Instant::now());
        track.take_scrolled();

        // Narrower viewport shrinks slides and scroll range
        track.set_viewport_width(30);
        assert!((track.max_scroll() - 30.0).abs() < 1e-9);
        assert!((track.scroll_left() - 30.0).abs() < 1e-9);
        assert!(track.take_scrolled());
    }

    #[test]
    fn test_wheel_scroll_snaps_to_nearest_slide() {
        let (track, _) = track(6, true);
        let mut track = track.with_snap(true);
        let start = Instant::now();

        track.scroll_by(4.0, start);
        assert!(track.is_animating());
        // Not settled while input is still recent
        assert!(!track.step(start + SNAP_IDLE / 2));
        assert_eq!(track.scroll_left(), 4.0);

        let settle = start + SNAP_IDLE;
        track.step(settle);
        track.step(settle + Duration::from_millis(100));
        assert_eq!(track.scroll_left(), 0.0);
        assert!(!track.is_animating());

        track.scroll_by(13.0, settle);
        let settle = settle + SNAP_IDLE;
        track.step(settle);
        track.step(settle + Duration::from_millis(100));
        assert_eq!(track.scroll_left(), 20.0);
    }

    #[test]
    fn test_free_track_rests_anywhere() {
        let (mut track, _) = track(6, true);
        let start = Instant::now();
        track.scroll_by(4.0, start);
        assert!(!track.is_animating());
        assert!(!track.step(start + SNAP_IDLE * 2));
        assert_eq!(track.scroll_left(), 4.0);
    }

    #[test]
    fn test_held_strip_settles_on_release() {
        let (track, _) = track(6, true);
        let mut track = track.with_snap(true);
        let start = Instant::now();

        track.set_held(true, start);
        track.scroll_by(12.0, start);
        assert!(!track.step(start + SNAP_IDLE * 4));
        assert_eq!(track.scroll_left(), 12.0);

        let released = start + SNAP_IDLE * 4;
        track.set_held(false, released);
        track.step(released);
        track.step(released + Duration::from_millis(100));
        assert_eq!(track.scroll_left(), 20.0);
    }

    #[test]
    fn test_programmatic_scroll_cancels_settle() {
        let (track, slides) = track(6, true);
        let mut track = track.with_snap(true);
        let start = Instant::now();

        track.scroll_by(4.0, start);
        let offset = track.slide_offset(&slides[2]).unwrap();
        track.smooth_scroll_to(offset);
        track.step(start + SNAP_IDLE);
        track.step(start + SNAP_IDLE + Duration::from_millis(100));
        assert!((track.scroll_left() - 40.0).abs() < 1e-9);
    }
}
