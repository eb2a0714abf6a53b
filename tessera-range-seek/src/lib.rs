//! Dual-handle range seek slider for tessera-ui.
//!
//! The crate holds everything with real behaviour in a range slider: mapping
//! between values and track positions, resolving step, distance and domain
//! constraints after every change, and deciding which handle a touch grabs.
//! Drawing is left to the host; the slider hands out plain [`Rect`]s and
//! [`ResolvedColors`].
//!
//! # Example
//!
//! ```
//! use tessera_range_seek::{Point, RangeSeekSlider, Size};
//!
//! let mut slider = RangeSeekSlider::new();
//! slider.set_bounds(Size::new(320.0, 65.0));
//!
//! // Grab the right handle at the end of the track and drag it to the middle.
//! assert!(slider.begin_tracking(Point::new(304.0, 32.0)));
//! slider.continue_tracking(Point::new(160.0, 32.0));
//! slider.end_tracking();
//!
//! assert!((slider.selected_max_value() - 50.0).abs() < 1e-3);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod color;
pub mod config;
pub mod delegate;
mod error;
pub mod geometry;
pub mod image;
pub mod interaction;
pub mod mapping;
pub mod prop;
pub mod slider;
pub mod style;

pub use color::Color;
pub use config::RangeSeekConfig;
pub use delegate::RangeSeekDelegate;
pub use error::ConfigError;
pub use geometry::{Point, Rect, Size};
pub use crate::image::{HandleImage, ImageSource, load_handle_image};
pub use interaction::{PointerEvent, RangeSeekController};
pub use mapping::{TrackMetrics, percentage_along_line};
pub use prop::Callback;
pub use slider::{HandleTracking, RangeSeekSlider, SliderGeometry};
pub use style::{ResolvedColors, SliderStyle};
