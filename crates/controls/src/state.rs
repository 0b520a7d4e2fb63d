use crate::config::SliderConfig;
use crate::slider::Slider;
use glam::Vec3;

/// The x, y and z sliders that drive a position.
#[derive(Debug)]
pub struct State {
    pub x: Slider,
    pub y: Slider,
    pub z: Slider,
}

impl State {
    /// Three sliders labelled "x", "y" and "z", each over `[-5, 5]` at 0.
    pub fn new() -> Self {
        Self::from_config(&[
            SliderConfig::axis("x"),
            SliderConfig::axis("y"),
            SliderConfig::axis("z"),
        ])
    }

    pub fn from_config(sliders: &[SliderConfig; 3]) -> Self {
        let [x, y, z] = sliders;
        Self {
            x: x.build(),
            y: y.build(),
            z: z.build(),
        }
    }

    /// Current slider values as a single-precision position.
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.x.value() as f32,
            self.y.value() as f32,
            self.z.value() as f32,
        )
    }

    /// Sliders in form order.
    pub fn sliders(&self) -> [&Slider; 3] {
        [&self.x, &self.y, &self.z]
    }

    pub fn sliders_mut(&mut self) -> [&mut Slider; 3] {
        [&mut self.x, &mut self.y, &mut self.z]
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_origin() {
        let state = State::new();
        assert_eq!(state.position(), Vec3::ZERO);
        let labels: Vec<&str> = state.sliders().iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["x", "y", "z"]);
    }

    #[test]
    fn sliders_are_independent() {
        let mut state = State::new();
        state.x.set_value(1.0);
        state.z.input(0.0);
        assert_eq!(state.position(), Vec3::new(1.0, 0.0, -5.0));
    }

    #[test]
    fn sliders_mut_in_form_order() {
        let mut state = State::new();
        for (i, slider) in state.sliders_mut().into_iter().enumerate() {
            slider.set_value(i as f64);
        }
        assert_eq!(state.position(), Vec3::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn ids_follow_construction_order() {
        let state = State::new();
        assert!(state.x.id() < state.y.id());
        assert!(state.y.id() < state.z.id());
    }

    #[test]
    fn from_config_uses_ranges() {
        let state = State::from_config(&[
            SliderConfig {
                initial: 3.0,
                ..SliderConfig::axis("a")
            },
            SliderConfig::axis("b"),
            SliderConfig {
                min: 0.0,
                max: 1.0,
                initial: 1.0,
                label: "c".into(),
            },
        ]);
        assert_eq!(state.position(), Vec3::new(3.0, 0.0, 1.0));
        assert_eq!(state.z.label(), "c");
    }
}
