use crate::listeners::Listeners;
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicU32, Ordering};

/// Lowest raw position of the underlying control.
pub const RAW_MIN: f64 = 0.0;
/// Highest raw position of the underlying control.
pub const RAW_MAX: f64 = 100.0;

static NEXT_SLIDER_ID: AtomicU32 = AtomicU32::new(1);

/// Process-unique slider identifier, displayed as `formControlRange<N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SliderId(pub u32);

impl SliderId {
    fn next() -> Self {
        Self(NEXT_SLIDER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SliderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "formControlRange{}", self.0)
    }
}

/// A range slider whose raw 0..=100 position maps linearly onto `[min, max]`.
///
/// The raw position belongs to the control; the mapped value is always
/// derived from it. Bounds are not checked. A raw position that is not a
/// number (NaN input, or `set_value` on a zero-width range) falls back to
/// the midpoint, so the control never leaves `[0, 100]`.
#[derive(Debug)]
pub struct Slider {
    id: SliderId,
    pub min: f64,
    pub max: f64,
    raw: f64,
    label: String,
    listeners: Listeners<f64>,
}

impl Slider {
    /// Create a slider over `[min, max]` with the control at its midpoint.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            id: SliderId::next(),
            min,
            max,
            raw: (RAW_MIN + RAW_MAX) / 2.0,
            label: String::new(),
            listeners: Listeners::new(),
        }
    }

    pub fn id(&self) -> SliderId {
        self.id
    }

    /// Raw control position in `[0, 100]`.
    pub fn raw(&self) -> f64 {
        self.raw
    }

    /// Mapped value: `min + raw * (max - min) / 100`.
    pub fn value(&self) -> f64 {
        self.min + self.raw * (self.max - self.min) / RAW_MAX
    }

    /// Position the control so that `value()` returns `value`.
    ///
    /// Values outside `[min, max]` pin the control to the nearest end; NaN
    /// resets it to the midpoint. Listeners are not notified.
    pub fn set_value(&mut self, value: f64) {
        self.raw = clamp_raw(RAW_MAX * (value - self.min) / (self.max - self.min));
    }

    /// A user move of the control to `raw`. Notifies every listener with
    /// the new mapped value.
    pub fn input(&mut self, raw: f64) {
        self.raw = clamp_raw(raw);
        let value = self.value();
        self.listeners.notify(value);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
        tracing::debug!(id = %self.id, label = %self.label, "slider label set");
    }

    /// Register a callback run after every user move, in registration order.
    pub fn on_change(&mut self, callback: impl FnMut(f64) + 'static) {
        self.listeners.subscribe(callback);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// The raw position range of the control.
    pub fn raw_range() -> RangeInclusive<f64> {
        RAW_MIN..=RAW_MAX
    }
}

fn clamp_raw(raw: f64) -> f64 {
    if raw.is_nan() {
        return (RAW_MIN + RAW_MAX) / 2.0;
    }
    raw.clamp(RAW_MIN, RAW_MAX)
}
