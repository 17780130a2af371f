//! Smooth horizontal scrolling for the terminal track
//!
//! Programmatic scrolls ease the track offset toward the target over the
//! configured duration instead of jumping.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing curves (cubic, quintic, ease-in-out)
//! - `timing` - Progress and interpolation helpers over explicit instants
//! - `config` - Configuration types (re-exported from carousel-core)
//!
//! ## L3 Molecular Layer
//! - `animation` - Animator combining the atoms
//!
//! # Usage
//!
//! ```ignore
//! use carousel_tui::scroll::{ScrollAnimator, ScrollConfig};
//!
//! let mut animator = ScrollAnimator::new(ScrollConfig::default());
//!
//! // Ask for a target; the animation starts on the next update
//! animator.request_scroll_to(40.0);
//!
//! // Each frame, advance and read the current offset in columns
//! let left = animator.update(max_scroll, Instant::now());
//! ```

// L4 Atomic Layer
pub mod config;
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
