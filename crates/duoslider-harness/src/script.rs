//! Gesture scripts and their replay.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use duoslider_core::event::{PointerPhase, PointerSample};
use duoslider_core::geometry::{Point, Rect};
use duoslider_engine::{SliderConfig, SliderEvent};
use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};
use crate::labels::Labels;

/// Size of the slider view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewSize {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewSize {
    /// A 375-wide screen with 20 units of margin on each side.
    fn default() -> Self {
        Self {
            width: 335.0,
            height: 70.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptPhase {
    Down,
    Move,
    Up,
    Cancel,
}

impl From<ScriptPhase> for PointerPhase {
    fn from(phase: ScriptPhase) -> Self {
        match phase {
            ScriptPhase::Down => Self::Down,
            ScriptPhase::Move => Self::Move,
            ScriptPhase::Up => Self::Up,
            ScriptPhase::Cancel => Self::Cancel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptSample {
    pub x: f64,
    pub y: f64,
    pub phase: ScriptPhase,
}

impl ScriptSample {
    #[must_use]
    pub const fn new(x: f64, y: f64, phase: ScriptPhase) -> Self {
        Self { x, y, phase }
    }
}

impl From<ScriptSample> for PointerSample {
    fn from(sample: ScriptSample) -> Self {
        PointerSample::new(Point::new(sample.x, sample.y), sample.phase.into())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    pub config: SliderConfig,
    pub view: ViewSize,
    pub samples: Vec<ScriptSample>,
}

impl Default for Script {
    /// Default configuration; drags the left thumb 20 units right, then
    /// pushes the right thumb into it.
    fn default() -> Self {
        use ScriptPhase::{Down, Move, Up};
        Self {
            config: SliderConfig::default(),
            view: ViewSize::default(),
            samples: vec![
                ScriptSample::new(17.5, 35.0, Down),
                ScriptSample::new(47.5, 35.0, Move),
                ScriptSample::new(77.5, 35.0, Move),
                ScriptSample::new(77.5, 35.0, Up),
                ScriptSample::new(137.5, 35.0, Down),
                ScriptSample::new(107.5, 35.0, Move),
                ScriptSample::new(47.5, 35.0, Move),
                ScriptSample::new(47.5, 35.0, Up),
            ],
        }
    }
}

impl Script {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Drive a freshly built slider through every sample.
    ///
    /// The returned report holds the initial labels followed by one frame per
    /// sample that emitted at least one event.
    pub fn replay(&self) -> Result<Replay> {
        let ViewSize { width, height } = self.view;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(HarnessError::InvalidView { width, height });
        }

        let mut slider = self.config.build()?;
        slider.set_view_bounds(Rect::from_size(width, height));

        let initial = Labels::from_state(slider.state());
        let labels = Rc::new(RefCell::new(initial.clone()));
        let events = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&labels);
        let counter = Rc::clone(&events);
        slider.subscribe(move |event: &SliderEvent| {
            tracing::debug!(?event, "slider event");
            sink.borrow_mut().apply(event);
            *counter.borrow_mut() += 1;
        });

        tracing::info!(samples = self.samples.len(), width, height, "replaying script");

        let mut frames = Vec::new();
        let mut ignored = 0usize;
        for (index, sample) in self.samples.iter().enumerate() {
            let before = *events.borrow();
            if !slider.handle_pointer((*sample).into()) {
                ignored += 1;
                tracing::trace!(index, x = sample.x, y = sample.y, "sample ignored");
                continue;
            }
            if *events.borrow() > before {
                frames.push(Frame {
                    index,
                    labels: labels.borrow().clone(),
                });
            }
        }

        let final_labels = labels.borrow().clone();
        Ok(Replay {
            initial,
            frames,
            final_labels,
            left: slider.left(),
            mid: slider.mid(),
            right: slider.right(),
            ignored,
        })
    }
}

/// Labels after one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub labels: Labels,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Replay {
    pub initial: Labels,
    pub frames: Vec<Frame>,
    pub final_labels: Labels,
    pub left: f64,
    pub mid: f64,
    pub right: f64,
    /// Samples the slider did not claim.
    pub ignored: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{MIN_REACHED, NO_MESSAGE};
    use duoslider_engine::Bounds;

    #[test]
    fn default_script_pins_right_thumb_against_left() {
        let replay = Script::default().replay().unwrap();
        assert_eq!(replay.initial.left, "0");
        assert_eq!(replay.initial.middle, "40");
        assert_eq!(replay.initial.right, "60");

        assert!((replay.left - 20.0).abs() < 1e-9);
        assert!((replay.right - 80.0).abs() < 1e-9);
        assert!(replay.mid.abs() < 1e-9);
        assert_eq!(replay.final_labels.left, "20");
        assert_eq!(replay.final_labels.middle, "0");
        assert_eq!(replay.final_labels.right, "80");
        assert_eq!(replay.final_labels.message, NO_MESSAGE);
        assert_eq!(replay.frames.len(), 4);
        assert_eq!(replay.ignored, 0);
    }

    #[test]
    fn mid_rejection_shows_min_reached() {
        let mut script = Script::default();
        script.config.mid.bounds = Bounds::new_unchecked(30.0, 100.0);
        // right thumb 15 units left would leave a mid of 25
        script.samples = vec![
            ScriptSample::new(137.5, 35.0, ScriptPhase::Down),
            ScriptSample::new(92.5, 35.0, ScriptPhase::Move),
            ScriptSample::new(92.5, 35.0, ScriptPhase::Up),
        ];
        let replay = script.replay().unwrap();
        assert_eq!(replay.final_labels.message, MIN_REACHED);
        assert_eq!(replay.final_labels.right, "60");
        assert_eq!(replay.frames.len(), 1);
    }

    #[test]
    fn samples_off_the_thumbs_are_ignored() {
        let mut script = Script::default();
        script.samples = vec![
            ScriptSample::new(250.0, 35.0, ScriptPhase::Down),
            ScriptSample::new(260.0, 35.0, ScriptPhase::Move),
        ];
        let replay = script.replay().unwrap();
        assert_eq!(replay.ignored, 2);
        assert!(replay.frames.is_empty());
        assert_eq!(replay.final_labels, replay.initial);
    }

    #[test]
    fn empty_view_is_rejected() {
        let mut script = Script::default();
        script.view.width = 0.0;
        assert!(matches!(
            script.replay(),
            Err(HarnessError::InvalidView { .. })
        ));
    }

    #[test]
    fn json_fills_missing_fields() {
        let script = Script::from_json(
            r#"{ "samples": [ { "x": 17.5, "y": 35.0, "phase": "down" } ] }"#,
        )
        .unwrap();
        assert_eq!(script.config, SliderConfig::default());
        assert_eq!(script.view, ViewSize::default());
        assert_eq!(script.samples[0].phase, ScriptPhase::Down);
    }

    #[test]
    fn unknown_phase_is_malformed() {
        let err = Script::from_json(r#"{ "samples": [ { "x": 0, "y": 0, "phase": "hover" } ] }"#)
            .unwrap_err();
        assert!(matches!(err, HarnessError::Json(_)));
    }
}
