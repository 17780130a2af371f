//! Scroll synchronizer
//!
//! Two independent halves:
//! - programmatic drive: scrolls the track once per new `scroll_index`
//! - observed ratio: samples track geometry at most once per frame
//!
//! The ratio never feeds back into navigation, so the track's own smooth
//! scrolls cannot be mistaken for user intent.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::registry::SlideRegistry;
use crate::track::ScrollTrack;

/// Default frame interval (~60fps)
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// A pending animation-frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest {
    pub id: u64,
    pub due: Instant,
}

#[derive(Debug, Clone)]
pub struct ScrollSynchronizer {
    scroll_offset: f64,
    frame_interval: Duration,
    /// Last scroll index acted on, whether or not the scroll could be issued
    driven_index: Option<usize>,
    pending_frame: Option<FrameRequest>,
    next_frame_id: u64,
    ratio: f64,
}

impl Default for ScrollSynchronizer {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_FRAME_INTERVAL)
    }
}

impl ScrollSynchronizer {
    pub fn new(scroll_offset: f64, frame_interval: Duration) -> Self {
        Self {
            scroll_offset,
            frame_interval,
            driven_index: None,
            pending_frame: None,
            next_frame_id: 0,
            ratio: 0.0,
        }
    }

    pub fn set_frame_interval(&mut self, frame_interval: Duration) {
        self.frame_interval = frame_interval;
    }

    /// Latest observed scroll ratio
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    #[inline]
    pub fn pending_frame(&self) -> Option<FrameRequest> {
        self.pending_frame
    }

    /// Scroll the track to `scroll_index` if that value has not been acted on yet.
    ///
    /// Returns the index the track was sent to. A missing descriptor or an
    /// unmeasured slide skips the scroll but still consumes the value.
    pub fn drive<T: ScrollTrack + ?Sized>(
        &mut self,
        scroll_index: Option<usize>,
        slides: &SlideRegistry,
        track: &mut T,
    ) -> Option<usize> {
        if self.driven_index == scroll_index {
            return None;
        }
        self.driven_index = scroll_index;

        let index = scroll_index?;
        let Some(slide) = slides.get(index) else {
            debug!(index, "No slide registered at scroll target, skipping");
            return None;
        };
        let Some(offset) = track.slide_offset(slide) else {
            debug!(index, slide = %slide.id, "Slide not laid out yet, skipping scroll");
            return None;
        };

        let target = offset - self.scroll_offset;
        debug!(index, target, "Scrolling track to slide");
        track.smooth_scroll_to(target);
        Some(index)
    }

    /// Register a native scroll event. Replaces any pending frame request;
    /// the replacement still fires on the frame that was already due.
    pub fn request_frame(&mut self, now: Instant) -> FrameRequest {
        self.next_frame_id += 1;
        let due = match self.pending_frame.take() {
            Some(previous) => {
                trace!(cancelled = previous.id, "Replacing pending frame request");
                previous.due
            }
            None => now + self.frame_interval,
        };

        let request = FrameRequest {
            id: self.next_frame_id,
            due,
        };
        self.pending_frame = Some(request);
        request
    }

    /// Run the pending frame, if any, and return the recomputed ratio
    pub fn run_frame<T: ScrollTrack + ?Sized>(&mut self, track: &T) -> Option<f64> {
        let request = self.pending_frame.take()?;
        self.ratio = track.geometry().map(|g| g.ratio()).unwrap_or(0.0);
        trace!(frame = request.id, ratio = self.ratio, "Scroll ratio sampled");
        Some(self.ratio)
    }

    /// Run the pending frame only if it is due at `now`
    pub fn run_due_frame<T: ScrollTrack + ?Sized>(
        &mut self,
        now: Instant,
        track: &T,
    ) -> Option<f64> {
        match self.pending_frame {
            Some(request) if request.due <= now => self.run_frame(track),
            _ => None,
        }
    }

    /// Drop the pending frame request
    pub fn teardown(&mut self) {
        if let Some(request) = self.pending_frame.take() {
            trace!(cancelled = request.id, "Frame request cancelled on teardown");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::registry::SlideDescriptor;
    use crate::track::{TrackGeometry, VirtualTrack};

    fn registry_and_track(count: usize) -> (SlideRegistry, VirtualTrack) {
        let mut registry = SlideRegistry::new();
        let mut track = VirtualTrack::new(300.0, 100.0);
        for _ in 0..count {
            let slide = SlideDescriptor::new();
            registry.mount(slide);
            track.slide_mounted(&slide);
        }
        (registry, track)
    }

    /// Track that counts geometry samples
    struct CountingTrack {
        samples: Cell<usize>,
        geometry: Option<TrackGeometry>,
    }

    impl ScrollTrack for CountingTrack {
        fn geometry(&self) -> Option<TrackGeometry> {
            self.samples.set(self.samples.get() + 1);
            self.geometry
        }

        fn slide_offset(&self, _slide: &SlideDescriptor) -> Option<f64> {
            None
        }

        fn smooth_scroll_to(&mut self, _left: f64) {}
    }

    #[test]
    fn test_drive_once_per_distinct_index() {
        let (registry, mut track) = registry_and_track(5);
        let mut sync = ScrollSynchronizer::default();

        assert_eq!(sync.drive(None, &registry, &mut track), None);
        assert_eq!(sync.drive(Some(1), &registry, &mut track), Some(1));
        assert_eq!(sync.drive(Some(1), &registry, &mut track), None);
        assert_eq!(sync.drive(Some(1), &registry, &mut track), None);
        assert_eq!(track.scroll_requests(), &[100.0]);

        assert_eq!(sync.drive(Some(0), &registry, &mut track), Some(0));
        assert_eq!(sync.drive(Some(1), &registry, &mut track), Some(1));
        assert_eq!(track.scroll_requests(), &[100.0, 0.0, 100.0]);
    }

    #[test]
    fn test_drive_subtracts_scroll_offset() {
        let (registry, mut track) = registry_and_track(5);
        let mut sync = ScrollSynchronizer::new(20.0, DEFAULT_FRAME_INTERVAL);

        sync.drive(Some(2), &registry, &mut track);
        assert_eq!(track.scroll_requests(), &[180.0]);
    }

    #[test]
    fn test_drive_skips_missing_slide() {
        let (registry, mut track) = registry_and_track(2);
        let mut sync = ScrollSynchronizer::default();

        assert_eq!(sync.drive(Some(4), &registry, &mut track), None);
        assert!(track.scroll_requests().is_empty());
        // Consumed: the same value is not retried
        assert_eq!(sync.drive(Some(4), &registry, &mut track), None);

        let mut unmeasured = VirtualTrack::new(300.0, 100.0);
        assert_eq!(sync.drive(Some(1), &registry, &mut unmeasured), None);
        assert!(unmeasured.scroll_requests().is_empty());
    }

    #[test]
    fn test_scroll_events_coalesce_into_one_frame() {
        let track = CountingTrack {
            samples: Cell::new(0),
            geometry: Some(TrackGeometry {
                scroll_left: 75.0,
                scroll_width: 400.0,
                client_width: 100.0,
            }),
        };
        let mut sync = ScrollSynchronizer::default();
        let start = Instant::now();

        let first = sync.request_frame(start);
        for step in 1..10 {
            let request = sync.request_frame(start + Duration::from_millis(step));
            assert_eq!(request.due, first.due);
            assert_ne!(request.id, first.id);
        }

        assert_eq!(sync.run_due_frame(start + Duration::from_millis(5), &track), None);
        assert_eq!(track.samples.get(), 0);

        assert_eq!(sync.run_due_frame(first.due, &track), Some(0.25));
        assert_eq!(track.samples.get(), 1);
        assert_eq!(sync.run_frame(&track), None);
        assert_eq!(track.samples.get(), 1);
        assert_eq!(sync.ratio(), 0.25);
    }

    #[test]
    fn test_unmeasurable_track_yields_zero() {
        let track = CountingTrack {
            samples: Cell::new(0),
            geometry: None,
        };
        let mut sync = ScrollSynchronizer::default();
        sync.request_frame(Instant::now());
        assert_eq!(sync.run_frame(&track), Some(0.0));
    }

    #[test]
    fn test_teardown_drops_pending_frame() {
        let mut sync = ScrollSynchronizer::default();
        sync.request_frame(Instant::now());
        sync.teardown();
        assert_eq!(sync.pending_frame(), None);
        sync.teardown();
    }
}
