#![forbid(unsafe_code)]

//! Value-constraint and coordinate-mapping engine for a dual-thumb range
//! slider.
//!
//! # Role in duoslider
//! The engine is the pure-logic layer between a host's pointer callbacks and
//! its renderer. It maps values to track positions and back, resolves drag
//! deltas under every active constraint, and reports what happened as a
//! deterministic event stream.
//!
//! # Primary responsibilities
//! - **mapper**: value <-> position for left- and right-anchored thumbs.
//! - **resolver**: own-bound clamp, non-crossing, and all-or-nothing mid check.
//! - **state**: the single source of truth for values and bounds.
//! - **emitter**: events and observers.
//! - **drag**: the per-gesture state machine.
//! - **slider**: the host-facing control tying it all together.
//!
//! # Example
//!
//! ```
//! use duoslider_core::event::PointerSample;
//! use duoslider_core::geometry::Rect;
//! use duoslider_engine::{SliderConfig, SliderEvent};
//!
//! let mut slider = SliderConfig::default().build()?;
//! slider.set_view_bounds(Rect::from_size(335.0, 70.0));
//! slider.subscribe(|event: &SliderEvent| println!("{event:?}"));
//!
//! slider.handle_pointer(PointerSample::down(17.5, 35.0));
//! slider.handle_pointer(PointerSample::moved(47.5, 35.0));
//! slider.handle_pointer(PointerSample::up(47.5, 35.0));
//! assert!((slider.left() - 10.0).abs() < 1e-9);
//! # Ok::<(), duoslider_engine::ConfigError>(())
//! ```

pub mod bounds;
pub mod config;
pub mod drag;
pub mod emitter;
pub mod error;
pub mod layout;
pub mod mapper;
pub mod resolver;
pub mod slider;
pub mod state;

pub use bounds::Bounds;
pub use config::{ElementConfig, SliderConfig};
pub use drag::{DragController, DragPhase};
pub use emitter::{EventEmitter, SliderEvent, SliderObserver, SubscriptionId, Target};
pub use error::{BoundsKind, ConfigError};
pub use layout::SliderLayout;
pub use mapper::Anchor;
pub use resolver::{Limit, Resolution};
pub use slider::RangeSlider;
pub use state::{RangeSliderState, StateSnapshot, Thumb, ThumbConfig};
