//! Label text a host view shows next to the slider.

use std::fmt;

use duoslider_engine::{RangeSliderState, SliderEvent, Target};

pub const NO_MESSAGE: &str = "No message";
pub const MAX_REACHED: &str = "Max Reached";
pub const MIN_REACHED: &str = "Min Reached";

/// Text of the four labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub left: String,
    pub middle: String,
    pub right: String,
    pub message: &'static str,
}

impl Labels {
    /// Labels for the configured values before any gesture.
    #[must_use]
    pub fn from_state(state: &RangeSliderState) -> Self {
        Self {
            left: format_value(state.left()),
            middle: format_value(state.mid()),
            right: format_value(state.right()),
            message: NO_MESSAGE,
        }
    }

    /// Update the labels for one slider event.
    ///
    /// Limit events on the thumbs clear the message; only the mid value
    /// reports reaching a bound.
    pub fn apply(&mut self, event: &SliderEvent) {
        match *event {
            SliderEvent::LeftUpdate(v) => self.left = format_value(v),
            SliderEvent::RightUpdate(v) => self.right = format_value(v),
            SliderEvent::MidUpdate(v) => self.middle = format_value(v),
            SliderEvent::MaxValueReached(Target::Mid) => self.message = MAX_REACHED,
            SliderEvent::MinValueReached(Target::Mid) => self.message = MIN_REACHED,
            _ => self.message = NO_MESSAGE,
        }
    }
}

impl fmt::Display for Labels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "left={} mid={} right={} message=\"{}\"",
            self.left, self.middle, self.right, self.message
        )
    }
}

/// Whole-number label text.
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value:.0}")
}
