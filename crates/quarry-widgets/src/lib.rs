//! Widget implementations for the Quarry launcher UI toolkit.

pub mod slider;

pub use slider::{Mark, Slider, SliderChanged};
