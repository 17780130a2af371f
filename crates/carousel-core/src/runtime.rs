use std::time::Instant;

use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::carousel::Carousel;
use crate::registry::SlideDescriptor;
use crate::track::ScrollTrack;

/// Commands accepted by the runtime, processed in arrival order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselCommand {
    Next,
    Prev,
    GoTo(usize),
    Select(usize),
    Mount(SlideDescriptor),
    Unmount(SlideDescriptor),
    HoverEnter,
    HoverLeave,
    SetPause(Option<bool>),
    SetPauseOnHover(bool),
    SetAutoplay(bool),
    SetAutoplaySpeed(u64),
    /// Native scroll event on the track
    Scrolled,
}

/// Events emitted by the runtime to notify consumers of changes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CarouselEvent {
    /// The track was scrolled to a slide
    Slid { index: usize },
    /// A frame produced a new scroll ratio
    RatioChanged { ratio: f64 },
    /// Autoplay started or stopped
    AutoplayChanged { running: bool },
}

/// Single-threaded event loop around a [`Carousel`]
///
/// The carousel is driven on the caller's task and never moved to another
/// one, so it needs neither `Send` nor locks.
#[derive(Debug, Default)]
pub struct CarouselRuntime {
    event_tx: Option<mpsc::UnboundedSender<CarouselEvent>>,
}

impl CarouselRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the event sender for consumer notifications
    pub fn with_event_sender(mut self, tx: mpsc::UnboundedSender<CarouselEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    /// Send an event (if an event channel is configured)
    fn send_event(&self, event: CarouselEvent) {
        if let Some(ref tx) = self.event_tx {
            if tx.send(event).is_err() {
                warn!("Failed to send carousel event: receiver dropped");
            }
        }
    }

    /// Run until the shutdown signal fires or the command channel closes.
    /// The carousel is torn down before it is handed back.
    pub async fn run<T: ScrollTrack>(
        &self,
        mut carousel: Carousel<T>,
        mut commands: mpsc::UnboundedReceiver<CarouselCommand>,
        mut shutdown: watch::Receiver<bool>,
    ) -> Carousel<T> {
        info!(
            slides = carousel.slide_count(),
            autoplay = carousel.is_autoplaying(),
            "Carousel runtime started"
        );
        let mut last_ratio = carousel.scroll_ratio();

        loop {
            let wakeup = carousel.next_wakeup();

            tokio::select! {
                result = shutdown.changed() => {
                    if result.is_err() || *shutdown.borrow() {
                        info!("Carousel runtime received shutdown signal");
                        break;
                    }
                }

                command = commands.recv() => {
                    match command {
                        Some(command) => self.handle_command(&mut carousel, command, now()),
                        None => {
                            debug!("Command channel closed");
                            break;
                        }
                    }
                }

                _ = sleep_until(wakeup) => {
                    if let Some(index) = carousel.advance_time(now()) {
                        self.send_event(CarouselEvent::Slid { index });
                    }
                }
            }

            let now = now();
            carousel.pump_track(now);
            if let Some(ratio) = carousel.run_due_frame(now) {
                if ratio != last_ratio {
                    last_ratio = ratio;
                    self.send_event(CarouselEvent::RatioChanged { ratio });
                }
            }
        }

        carousel.teardown();
        info!("Carousel runtime stopped");
        carousel
    }

    fn handle_command<T: ScrollTrack>(
        &self,
        carousel: &mut Carousel<T>,
        command: CarouselCommand,
        now: Instant,
    ) {
        debug!(?command, "Handling carousel command");
        let was_running = carousel.is_autoplaying();

        let slid = match command {
            CarouselCommand::Next => carousel.go_to_next_slide(),
            CarouselCommand::Prev => carousel.go_to_prev_slide(),
            CarouselCommand::GoTo(index) => carousel.go_to_slide_index(index),
            CarouselCommand::Select(index) => carousel.select_slide(index),
            CarouselCommand::Mount(slide) => {
                carousel.register(slide);
                None
            }
            CarouselCommand::Unmount(slide) => {
                carousel.unregister(slide);
                None
            }
            CarouselCommand::HoverEnter => {
                carousel.hover_enter(now);
                None
            }
            CarouselCommand::HoverLeave => {
                carousel.hover_leave(now);
                None
            }
            CarouselCommand::SetPause(pause) => {
                carousel.set_pause(pause, now);
                None
            }
            CarouselCommand::SetPauseOnHover(enabled) => {
                carousel.set_pause_on_hover(enabled, now);
                None
            }
            CarouselCommand::SetAutoplay(enabled) => {
                carousel.set_autoplay(enabled, now);
                None
            }
            CarouselCommand::SetAutoplaySpeed(speed_ms) => {
                carousel.set_autoplay_speed(speed_ms, now);
                None
            }
            CarouselCommand::Scrolled => {
                carousel.on_scroll_event(now);
                None
            }
        };

        if let Some(index) = slid {
            self.send_event(CarouselEvent::Slid { index });
        }
        let running = carousel.is_autoplaying();
        if running != was_running {
            self.send_event(CarouselEvent::AutoplayChanged { running });
        }
    }
}

/// Current time on tokio's clock, so paused test clocks apply
fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}
