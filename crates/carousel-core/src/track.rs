//! Scroll track primitives
//!
//! The engine never measures or scrolls anything itself. A [`ScrollTrack`]
//! supplies geometry sampling, slide offset lookup and a smooth scroll
//! primitive; front ends implement it over their own rendering surface.

use crate::registry::{SlideDescriptor, SlideId};

/// Sampled scroll geometry of a track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Current horizontal scroll position
    pub scroll_left: f64,
    /// Total scrollable content width
    pub scroll_width: f64,
    /// Visible width
    pub client_width: f64,
}

impl TrackGeometry {
    /// Largest reachable scroll position
    #[inline]
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    /// Scroll progress in [0, 1]; 0 when the content does not overflow
    pub fn ratio(&self) -> f64 {
        let range = self.scroll_width - self.client_width;
        if range.is_nan() || range <= 0.0 {
            return 0.0;
        }
        let ratio = self.scroll_left / range;
        if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        }
    }
}

/// Scrollable strip of slides
pub trait ScrollTrack {
    /// Sample the current geometry; `None` when the track is not measurable yet
    fn geometry(&self) -> Option<TrackGeometry>;

    /// Horizontal offset of a slide within the track, if it has been laid out
    fn slide_offset(&self, slide: &SlideDescriptor) -> Option<f64>;

    /// Start a smooth scroll toward `left`. Completion is not reported.
    fn smooth_scroll_to(&mut self, left: f64);

    /// Lay out a newly registered slide at the end of the strip
    fn slide_mounted(&mut self, _slide: &SlideDescriptor) {}

    /// Remove an unregistered slide from the strip
    fn slide_unmounted(&mut self, _slide: &SlideDescriptor) {}

    /// Whether the scroll position moved since the last call (the track's
    /// native scroll events). Resets the flag.
    fn take_scrolled(&mut self) -> bool {
        false
    }
}

/// In-memory track with uniformly sized slides
///
/// Scrolls land immediately. Used by the headless simulation and tests.
#[derive(Debug, Clone)]
pub struct VirtualTrack {
    slides: Vec<SlideId>,
    slide_width: f64,
    client_width: f64,
    scroll_left: f64,
    scrolled: bool,
    scroll_requests: Vec<f64>,
}

impl VirtualTrack {
    pub fn new(client_width: f64, slide_width: f64) -> Self {
        Self {
            slides: Vec::new(),
            slide_width,
            client_width,
            scroll_left: 0.0,
            scrolled: false,
            scroll_requests: Vec::new(),
        }
    }

    /// Simulate a user-driven scroll
    pub fn set_scroll_left(&mut self, left: f64) {
        self.move_to(left.clamp(0.0, self.max_scroll()));
    }

    #[inline]
    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    /// Targets passed to `smooth_scroll_to`, in call order
    pub fn scroll_requests(&self) -> &[f64] {
        &self.scroll_requests
    }

    fn scroll_width(&self) -> f64 {
        self.slides.len() as f64 * self.slide_width
    }

    fn max_scroll(&self) -> f64 {
        (self.scroll_width() - self.client_width).max(0.0)
    }

    fn move_to(&mut self, left: f64) {
        if left != self.scroll_left {
            self.scroll_left = left;
            self.scrolled = true;
        }
    }
}

impl ScrollTrack for VirtualTrack {
    fn geometry(&self) -> Option<TrackGeometry> {
        if self.client_width <= 0.0 {
            return None;
        }
        Some(TrackGeometry {
            scroll_left: self.scroll_left,
            scroll_width: self.scroll_width().max(self.client_width),
            client_width: self.client_width,
        })
    }

    fn slide_offset(&self, slide: &SlideDescriptor) -> Option<f64> {
        self.slides
            .iter()
            .position(|id| *id == slide.id)
            .map(|index| index as f64 * self.slide_width)
    }

    fn smooth_scroll_to(&mut self, left: f64) {
        self.scroll_requests.push(left);
        self.move_to(left.clamp(0.0, self.max_scroll()));
    }

    fn slide_mounted(&mut self, slide: &SlideDescriptor) {
        if !self.slides.contains(&slide.id) {
            self.slides.push(slide.id);
        }
    }

    fn slide_unmounted(&mut self, slide: &SlideDescriptor) {
        self.slides.retain(|id| *id != slide.id);
        let max = self.max_scroll();
        if self.scroll_left > max {
            self.move_to(max);
        }
    }

    fn take_scrolled(&mut self) -> bool {
        std::mem::take(&mut self.scrolled)
    }
}
