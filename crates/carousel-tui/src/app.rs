use std::time::{Duration, Instant};

use anyhow::Result;
use carousel_core::{AppConfig, Carousel, SlideDescriptor};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::widgets::{Block, Borders};
use tracing::debug;

use crate::input::Action;
use crate::theme::Theme;
use crate::track::TerminalTrack;
use crate::widgets::DotsWidget;

/// Step applied by `+`/`-` to the autoplay period
const SPEED_STEP_MS: u64 = 250;
/// Shortest period reachable from the keyboard
const MIN_SPEED_MS: u64 = 250;
/// Columns moved per wheel notch
const WHEEL_STEP_COLUMNS: f64 = 4.0;

/// Content of a demo slide
#[derive(Debug, Clone)]
pub struct DemoSlide {
    pub descriptor: SlideDescriptor,
    pub title: String,
    pub body: String,
}

impl DemoSlide {
    fn numbered(number: usize) -> Self {
        Self {
            descriptor: SlideDescriptor::new(),
            title: format!("Slide {}", number),
            body: format!("Content #{}", number),
        }
    }
}

/// Screen regions from the last draw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppLayout {
    pub track: Rect,
    pub prev_button: Rect,
    pub dots: Rect,
    pub next_button: Rect,
    pub progress: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(8),
                Constraint::Min(0),
                Constraint::Length(8),
            ])
            .split(rows[1]);

        Self {
            track: rows[0],
            prev_button: controls[0],
            dots: controls[1],
            next_button: controls[2],
            progress: rows[2],
            status: rows[3],
        }
    }

    /// Area inside the track border where slides are drawn
    pub fn viewport(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.track)
    }
}

/// What the pointer is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Slide(usize),
    /// Track border or empty track space
    Track,
    Dot(usize),
    /// Controls row away from any dot
    Controls,
    PrevButton,
    NextButton,
}

/// Application state
pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    pub carousel: Carousel<TerminalTrack>,
    pub slides: Vec<DemoSlide>,
    pub layout: AppLayout,
    /// Pointer is over the track or its controls
    pub hovering: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Last column of a left-button drag on the track
    drag_column: Option<u16>,
}

impl App {
    pub fn new(config: AppConfig, theme: Theme, now: Instant) -> Result<Self> {
        let track = TerminalTrack::new(
            config.scroll.clone(),
            carousel_core::progress::slide_width_percent(config.carousel.slides_to_show),
        )
        .with_snap(!config.carousel.use_free_scroll);
        let mut carousel = Carousel::new_at(config.carousel.clone(), track, now)?
            .with_frame_interval(config.scroll.frame_interval())
            .with_on_slide(|index| debug!(index, "Track scrolled to slide"));

        let slides: Vec<_> = (1..=config.ui.demo_slides).map(DemoSlide::numbered).collect();
        for slide in &slides {
            carousel.register(slide.descriptor);
        }

        Ok(Self {
            config,
            theme,
            carousel,
            slides,
            layout: AppLayout::default(),
            hovering: false,
            should_quit: false,
            status_message: None,
            drag_column: None,
        })
    }

    /// Recompute regions for `area`; a new viewport width resamples the ratio
    pub fn update_layout(&mut self, area: Rect, now: Instant) {
        self.layout = AppLayout::new(area);
        let width = self.layout.viewport().width;
        if width != self.carousel.track().viewport_width() {
            self.carousel.track_mut().set_viewport_width(width);
            self.carousel.on_scroll_event(now);
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn apply_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Prev => {
                self.carousel.go_to_prev_slide();
            }
            Action::Next => {
                self.carousel.go_to_next_slide();
            }
            Action::GoTo(index) => {
                self.carousel.go_to_slide_index(index);
            }
            Action::Select => {
                let index = self.carousel.current_slide_index();
                self.select(index);
            }
            Action::ToggleAutoplay => {
                let enabled = !self.carousel.config().auto_play;
                self.carousel.set_autoplay(enabled, now);
                self.set_status(if enabled { "Autoplay on" } else { "Autoplay off" });
            }
            Action::SpeedUp => {
                let speed = self
                    .carousel
                    .config()
                    .autoplay_speed_ms
                    .saturating_sub(SPEED_STEP_MS)
                    .max(MIN_SPEED_MS);
                self.set_speed(speed, now);
            }
            Action::SlowDown => {
                let speed = self.carousel.config().autoplay_speed_ms + SPEED_STEP_MS;
                self.set_speed(speed, now);
            }
            Action::CyclePause => {
                let next = match self.carousel.config().pause {
                    None => Some(true),
                    Some(true) => Some(false),
                    Some(false) => None,
                };
                self.carousel.set_pause(next, now);
                self.set_status(format!("Pause override: {}", self.pause_label()));
            }
            Action::None => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let target = self.hit_test(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.set_hover(target.is_some(), now);
                if mouse.kind == MouseEventKind::Drag(MouseButton::Left) {
                    self.drag_to(mouse.column, now);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.set_hover(target.is_some(), now);
                if self.is_over_track(target) {
                    self.drag_column = Some(mouse.column);
                    self.carousel.track_mut().set_held(true, now);
                }
                match target {
                    Some(HitTarget::PrevButton) => self.apply_action(Action::Prev, now),
                    Some(HitTarget::NextButton) => self.apply_action(Action::Next, now),
                    Some(HitTarget::Dot(index)) => self.apply_action(Action::GoTo(index), now),
                    Some(HitTarget::Slide(index)) => self.select(index),
                    Some(HitTarget::Track) | Some(HitTarget::Controls) | None => {}
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.drag_column.take().is_some() {
                    self.carousel.track_mut().set_held(false, now);
                }
            }
            MouseEventKind::ScrollRight | MouseEventKind::ScrollDown => {
                if self.is_over_track(target) {
                    self.carousel.track_mut().scroll_by(WHEEL_STEP_COLUMNS, now);
                }
            }
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollUp => {
                if self.is_over_track(target) {
                    self.carousel.track_mut().scroll_by(-WHEEL_STEP_COLUMNS, now);
                }
            }
            _ => {}
        }
    }

    /// Advance animations, autoplay and the ratio frame to `now`
    pub fn tick(&mut self, now: Instant) {
        if let Some(index) = self.carousel.advance_time(now) {
            debug!(index, "Autoplay advanced");
        }
        self.carousel.track_mut().step(now);
        self.carousel.pump_track(now);
        self.carousel.run_due_frame(now);
    }

    /// How long the event loop may block before `tick` has work
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        let idle = Duration::from_millis(self.config.ui.tick_rate_ms);
        if self.carousel.track().is_animating() {
            return self.config.scroll.frame_interval().min(idle);
        }
        match self.carousel.next_wakeup() {
            Some(wakeup) => wakeup.saturating_duration_since(now).min(idle),
            None => idle,
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        let layout = &self.layout;

        if layout.prev_button.contains(position) {
            return Some(HitTarget::PrevButton);
        }
        if layout.next_button.contains(position) {
            return Some(HitTarget::NextButton);
        }
        if layout.dots.contains(position) {
            let dot = self
                .config
                .ui
                .show_dots
                .then(|| DotsWidget::dot_at(layout.dots, self.slides.len(), column))
                .flatten();
            return Some(dot.map_or(HitTarget::Controls, HitTarget::Dot));
        }
        if layout.track.contains(position) {
            let viewport = layout.viewport();
            if viewport.contains(position) {
                if let Some(index) = self.carousel.track().slide_at(column - viewport.x) {
                    return Some(HitTarget::Slide(index));
                }
            }
            return Some(HitTarget::Track);
        }
        None
    }

    /// Label of the external pause override
    pub fn pause_label(&self) -> &'static str {
        match self.carousel.config().pause {
            None => "auto",
            Some(true) => "paused",
            Some(false) => "playing",
        }
    }

    fn select(&mut self, index: usize) {
        self.carousel.select_slide(index);
        if let Some(selected) = self.carousel.selected_slide_index() {
            self.set_status(format!("Selected slide {}", selected + 1));
        }
    }

    fn set_speed(&mut self, speed_ms: u64, now: Instant) {
        self.carousel.set_autoplay_speed(speed_ms, now);
        self.set_status(format!("Autoplay every {}ms", speed_ms));
    }

    fn set_hover(&mut self, hovering: bool, now: Instant) {
        if hovering == self.hovering {
            return;
        }
        self.hovering = hovering;
        if hovering {
            self.carousel.hover_enter(now);
        } else {
            self.carousel.hover_leave(now);
        }
    }

    /// Move the strip with the pointer: dragging left reveals later slides
    fn drag_to(&mut self, column: u16, now: Instant) {
        let Some(last) = self.drag_column else {
            return;
        };
        self.drag_column = Some(column);
        let dx = column as f64 - last as f64;
        if dx != 0.0 {
            self.carousel.track_mut().scroll_by(-dx, now);
        }
    }

    fn is_over_track(&self, target: Option<HitTarget>) -> bool {
        matches!(target, Some(HitTarget::Slide(_)) | Some(HitTarget::Track))
    }
}
