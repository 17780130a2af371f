pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod error;
pub mod navigation;
pub mod pause;
pub mod progress;
pub mod registry;
pub mod runtime;
pub mod sync;
pub mod track;

pub use autoplay::AutoplayTransition;
pub use carousel::{Carousel, CarouselSnapshot};
pub use config::{AppConfig, CarouselConfig, EasingType, ScrollConfig, UiConfig};
pub use error::{Error, Result};
pub use navigation::NavigationCommand;
pub use progress::IndicatorType;
pub use registry::{SlideDescriptor, SlideId};
pub use runtime::{CarouselCommand, CarouselEvent, CarouselRuntime};
pub use track::{ScrollTrack, TrackGeometry, VirtualTrack};
