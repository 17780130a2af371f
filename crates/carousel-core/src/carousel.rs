//! Carousel controller
//!
//! The single serialized entry point of the engine. Navigation commands,
//! native scroll events, animation frames, hover signals and autoplay ticks
//! all funnel through a [`Carousel`], so no two of them can interleave.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::autoplay::{AutoplayScheduler, AutoplayTransition};
use crate::config::CarouselConfig;
use crate::navigation::{NavigationCommand, NavigationState};
use crate::pause::PauseCoordinator;
use crate::progress::{self, IndicatorType, SegmentStyle};
use crate::registry::{SlideAction, SlideDescriptor, SlideRegistry};
use crate::sync::{ScrollSynchronizer, DEFAULT_FRAME_INTERVAL};
use crate::track::ScrollTrack;
use crate::Result;

/// Callback invoked with the index of every slide the track is scrolled to
pub type SlideCallback = Box<dyn FnMut(usize)>;

/// Read model for presentational consumers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselSnapshot {
    pub current_slide_index: usize,
    pub selected_slide_index: Option<usize>,
    pub slide_count: usize,
    pub scroll_ratio: f64,
    pub slide_width_percent: f64,
    pub paused: bool,
    pub autoplaying: bool,
}

pub struct Carousel<T: ScrollTrack> {
    config: CarouselConfig,
    navigation: NavigationState,
    sync: ScrollSynchronizer,
    autoplay: AutoplayScheduler,
    pause: PauseCoordinator,
    track: T,
    on_slide: Option<SlideCallback>,
    torn_down: bool,
}

impl<T: ScrollTrack> Carousel<T> {
    /// Create a carousel over `track`, starting autoplay now if enabled
    pub fn new(config: CarouselConfig, track: T) -> Result<Self> {
        Self::new_at(config, track, Instant::now())
    }

    /// Create a carousel whose clock starts at `now`
    pub fn new_at(config: CarouselConfig, track: T, now: Instant) -> Result<Self> {
        config.validate()?;

        let mut carousel = Self {
            navigation: NavigationState::new(),
            sync: ScrollSynchronizer::new(config.scroll_offset, DEFAULT_FRAME_INTERVAL),
            autoplay: AutoplayScheduler::new(),
            pause: PauseCoordinator::new(config.pause_on_hover, config.pause),
            track,
            on_slide: None,
            torn_down: false,
            config,
        };
        carousel.reconcile_autoplay(now);
        Ok(carousel)
    }

    /// Set the frame interval used to coalesce scroll events
    pub fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.sync.set_frame_interval(frame_interval);
        self
    }

    /// Set the slide notification callback
    pub fn with_on_slide(mut self, on_slide: impl FnMut(usize) + 'static) -> Self {
        self.on_slide = Some(Box::new(on_slide));
        self
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn track(&self) -> &T {
        &self.track
    }

    pub fn track_mut(&mut self) -> &mut T {
        &mut self.track
    }

    pub fn slides(&self) -> &SlideRegistry {
        self.navigation.slides()
    }

    /// Process one navigation command, then let the synchronizer act on the
    /// resulting scroll index. Returns the index the track was scrolled to.
    pub fn dispatch(&mut self, command: NavigationCommand) -> Option<usize> {
        if self.torn_down {
            warn!(?command, "Command dispatched to a torn down carousel");
            return None;
        }

        if self.navigation.apply(command) {
            // Registry and track must agree before the drive looks up offsets
            if let NavigationCommand::UpdateSlide { slide, action } = command {
                match action {
                    SlideAction::Mount => self.track.slide_mounted(&slide),
                    SlideAction::Unmount => self.track.slide_unmounted(&slide),
                }
            }
            debug!(
                ?command,
                current = self.navigation.current_slide_index(),
                scroll_index = ?self.navigation.scroll_index(),
                "Navigation state changed"
            );
        }

        let slid = self.sync.drive(
            self.navigation.scroll_index(),
            self.navigation.slides(),
            &mut self.track,
        );
        if let (Some(index), Some(on_slide)) = (slid, self.on_slide.as_mut()) {
            on_slide(index);
        }
        slid
    }

    pub fn register(&mut self, slide: SlideDescriptor) {
        self.dispatch(NavigationCommand::UpdateSlide {
            slide,
            action: SlideAction::Mount,
        });
    }

    pub fn unregister(&mut self, slide: SlideDescriptor) {
        self.dispatch(NavigationCommand::UpdateSlide {
            slide,
            action: SlideAction::Unmount,
        });
    }

    pub fn go_to_next_slide(&mut self) -> Option<usize> {
        self.dispatch(NavigationCommand::GoToNextSlide {
            wrap: !self.config.use_free_scroll,
        })
    }

    pub fn go_to_prev_slide(&mut self) -> Option<usize> {
        self.dispatch(NavigationCommand::GoToPrevSlide {
            wrap: !self.config.use_free_scroll,
        })
    }

    pub fn go_to_slide_index(&mut self, index: usize) -> Option<usize> {
        self.dispatch(NavigationCommand::GoToSlideIndex(index))
    }

    /// Select a slide; scrolls to it when `slide_on_select` is set
    pub fn select_slide(&mut self, index: usize) -> Option<usize> {
        self.dispatch(NavigationCommand::SelectSlide {
            index,
            scroll: self.config.slide_on_select,
        })
    }

    /// Native scroll event on the track
    pub fn on_scroll_event(&mut self, now: Instant) {
        if !self.torn_down {
            self.sync.request_frame(now);
        }
    }

    /// Forward the track's own scroll events, if it moved. Returns true if it did.
    pub fn pump_track(&mut self, now: Instant) -> bool {
        if self.track.take_scrolled() {
            self.on_scroll_event(now);
            true
        } else {
            false
        }
    }

    /// Run the pending animation frame regardless of its due time
    pub fn on_animation_frame(&mut self) -> Option<f64> {
        self.sync.run_frame(&self.track)
    }

    /// Run the pending animation frame if it is due
    pub fn run_due_frame(&mut self, now: Instant) -> Option<f64> {
        self.sync.run_due_frame(now, &self.track)
    }

    pub fn hover_enter(&mut self, now: Instant) -> AutoplayTransition {
        self.pause.hover_enter();
        self.reconcile_autoplay(now)
    }

    pub fn hover_leave(&mut self, now: Instant) -> AutoplayTransition {
        self.pause.hover_leave();
        self.reconcile_autoplay(now)
    }

    /// Set or clear the external pause override
    pub fn set_pause(&mut self, pause: Option<bool>, now: Instant) -> AutoplayTransition {
        self.config.pause = pause;
        self.pause.set_external(pause);
        self.reconcile_autoplay(now)
    }

    pub fn set_pause_on_hover(&mut self, pause_on_hover: bool, now: Instant) -> AutoplayTransition {
        self.config.pause_on_hover = pause_on_hover;
        self.pause.set_pause_on_hover(pause_on_hover);
        self.reconcile_autoplay(now)
    }

    pub fn set_autoplay(&mut self, auto_play: bool, now: Instant) -> AutoplayTransition {
        self.config.auto_play = auto_play;
        self.reconcile_autoplay(now)
    }

    /// Change the autoplay period; a running timer restarts with it.
    /// Zero is rejected and leaves the period unchanged.
    pub fn set_autoplay_speed(&mut self, speed_ms: u64, now: Instant) -> AutoplayTransition {
        if speed_ms == 0 {
            warn!("Ignoring autoplay speed of 0ms");
            return AutoplayTransition::Unchanged;
        }
        self.config.autoplay_speed_ms = speed_ms;
        self.reconcile_autoplay(now)
    }

    /// Fire the autoplay tick if it is due at `now`. Returns the index the
    /// track was scrolled to.
    pub fn advance_time(&mut self, now: Instant) -> Option<usize> {
        if !self.autoplay.poll(now) {
            return None;
        }
        self.dispatch(NavigationCommand::GoToNextSlide { wrap: true })
    }

    /// Earliest instant at which `advance_time` or `run_due_frame` has work
    pub fn next_wakeup(&self) -> Option<Instant> {
        let frame = self.sync.pending_frame().map(|f| f.due);
        match (self.autoplay.next_deadline(), frame) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Cancel the autoplay timer and any pending frame. Safe to call twice;
    /// also runs on drop.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.autoplay.teardown();
        self.sync.teardown();
        info!(slides = self.navigation.slide_count(), "Carousel torn down");
    }

    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    #[inline]
    pub fn current_slide_index(&self) -> usize {
        self.navigation.current_slide_index()
    }

    #[inline]
    pub fn selected_slide_index(&self) -> Option<usize> {
        self.navigation.selected_slide_index()
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.navigation.slide_count()
    }

    #[inline]
    pub fn scroll_ratio(&self) -> f64 {
        self.sync.ratio()
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    #[inline]
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn slide_width_percent(&self) -> f64 {
        progress::slide_width_percent(self.config.slides_to_show)
    }

    /// Progress indicator placement for the current ratio
    pub fn indicator(&self, indicator_type: IndicatorType) -> SegmentStyle {
        progress::indicator_segment(
            self.scroll_ratio(),
            self.slide_count(),
            self.config.slides_to_show,
            indicator_type,
        )
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current_slide_index: self.current_slide_index(),
            selected_slide_index: self.selected_slide_index(),
            slide_count: self.slide_count(),
            scroll_ratio: self.scroll_ratio(),
            slide_width_percent: self.slide_width_percent(),
            paused: self.is_paused(),
            autoplaying: self.is_autoplaying(),
        }
    }

    fn reconcile_autoplay(&mut self, now: Instant) -> AutoplayTransition {
        let should_run = !self.torn_down && self.config.auto_play && !self.pause.is_paused();
        self.autoplay
            .reconcile(should_run, self.config.autoplay_period(), now)
    }
}

impl<T: ScrollTrack> Drop for Carousel<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}
