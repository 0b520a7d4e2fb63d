use crate::slider::Slider;
use serde::{Deserialize, Serialize};

/// Errors from validating a slider description.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SliderConfigError {
    #[error("slider {label:?}: bounds must be finite, got [{min}, {max}]")]
    NonFiniteBounds { label: String, min: f64, max: f64 },
    #[error("slider {label:?}: range [{min}, {max}] has zero width")]
    EmptyRange { label: String, min: f64, max: f64 },
    #[error("slider {label:?}: initial value {initial} lies outside [{min}, {max}]")]
    InitialOutOfRange {
        label: String,
        initial: f64,
        min: f64,
        max: f64,
    },
}

/// Serializable description of one slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub initial: f64,
}

impl SliderConfig {
    /// Axis slider over `[-5, 5]` starting at 0.
    pub fn axis(label: &str) -> Self {
        Self {
            label: label.to_string(),
            min: -5.0,
            max: 5.0,
            initial: 0.0,
        }
    }

    pub fn validate(&self) -> Result<(), SliderConfigError> {
        let (min, max) = (self.min, self.max);
        if !min.is_finite() || !max.is_finite() {
            return Err(SliderConfigError::NonFiniteBounds {
                label: self.label.clone(),
                min,
                max,
            });
        }
        if min == max {
            return Err(SliderConfigError::EmptyRange {
                label: self.label.clone(),
                min,
                max,
            });
        }
        let (lo, hi) = if min < max { (min, max) } else { (max, min) };
        if !(lo..=hi).contains(&self.initial) {
            return Err(SliderConfigError::InitialOutOfRange {
                label: self.label.clone(),
                initial: self.initial,
                min,
                max,
            });
        }
        Ok(())
    }

    /// Build the slider this config describes. Does not validate.
    pub fn build(&self) -> Slider {
        let mut slider = Slider::new(self.min, self.max);
        slider.set_value(self.initial);
        slider.set_label(self.label.as_str());
        slider
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self::axis("")
    }
}
