//! Form controls: range sliders mapped onto numeric ranges, and the state
//! object holding the x, y and z sliders.
//!
//! # Invariants
//! - A slider's raw position stays in [0, 100].
//! - `value = min + raw * (max - min) / 100`.
//! - Change listeners run synchronously, in registration order.

pub mod config;
pub mod listeners;
pub mod slider;
pub mod state;

pub use config::{SliderConfig, SliderConfigError};
pub use listeners::Listeners;
pub use slider::{RAW_MAX, RAW_MIN, Slider, SliderId};
pub use state::State;
