#![forbid(unsafe_code)]

//! Slider events and their delivery.
//!
//! [`EventEmitter`] turns resolver outcomes into a discrete [`SliderEvent`]
//! stream and hands each event to every subscribed observer.
//!
//! # Ordering
//!
//! For one accepted step the stream is:
//!
//! 1. the thumb update (`LeftUpdate` / `RightUpdate`), when the value changed;
//! 2. `MidUpdate`, when the value changed;
//! 3. the thumb's limit transition (`MaxValueReached` / `MinValueReached` on
//!    entering a limit, `AllInRange` on leaving one);
//! 4. `AllInRange(Mid)` when the previous step was rejected.
//!
//! A rejected step emits exactly one event, `MinValueReached(Mid)` or
//! `MaxValueReached(Mid)`, every time it happens.

use crate::resolver::{Limit, Resolution};
use crate::state::Thumb;

/// Which logical element an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Target {
    Left,
    Mid,
    Right,
}

impl From<Thumb> for Target {
    fn from(thumb: Thumb) -> Self {
        match thumb {
            Thumb::Left => Self::Left,
            Thumb::Right => Self::Right,
        }
    }
}

/// Events delivered to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "payload"))]
pub enum SliderEvent {
    LeftUpdate(f64),
    RightUpdate(f64),
    MidUpdate(f64),
    MaxValueReached(Target),
    MinValueReached(Target),
    AllInRange(Target),
}

impl SliderEvent {
    fn update(thumb: Thumb, value: f64) -> Self {
        match thumb {
            Thumb::Left => Self::LeftUpdate(value),
            Thumb::Right => Self::RightUpdate(value),
        }
    }

    fn reached(limit: Limit, target: Target) -> Self {
        match limit {
            Limit::Min => Self::MinValueReached(target),
            Limit::Max => Self::MaxValueReached(target),
        }
    }
}

/// Receives slider events.
pub trait SliderObserver {
    fn on_event(&mut self, event: &SliderEvent);
}

impl<F> SliderObserver for F
where
    F: FnMut(&SliderEvent),
{
    fn on_event(&mut self, event: &SliderEvent) {
        self(event);
    }
}

/// Handle returned by [`EventEmitter::subscribe`]; pass it to
/// [`EventEmitter::unsubscribe`] to detach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Last known limit status of each target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LimitStatus {
    left: Option<Limit>,
    mid: Option<Limit>,
    right: Option<Limit>,
}

impl LimitStatus {
    fn slot(&mut self, target: Target) -> &mut Option<Limit> {
        match target {
            Target::Left => &mut self.left,
            Target::Mid => &mut self.mid,
            Target::Right => &mut self.right,
        }
    }
}

/// Observer list plus the limit bookkeeping needed to report transitions.
#[derive(Default)]
pub struct EventEmitter {
    observers: Vec<(SubscriptionId, Box<dyn SliderObserver>)>,
    next_id: u64,
    status: LimitStatus,
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("observers", &self.observers.len())
            .field("status", &self.status)
            .finish()
    }
}

impl EventEmitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an observer. Observers are called in subscription order.
    pub fn subscribe(&mut self, observer: impl SliderObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Detach an observer. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Number of attached observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Forget limit transitions, e.g. after the host reconfigures the slider.
    pub fn reset_status(&mut self) {
        self.status = LimitStatus::default();
    }

    /// Translate a resolution into events, updating the limit bookkeeping.
    /// Does not notify observers.
    pub fn translate(&mut self, resolution: &Resolution) -> Vec<SliderEvent> {
        let mut out = Vec::with_capacity(4);
        match *resolution {
            Resolution::Accepted {
                thumb,
                previous,
                value,
                mid,
                clamped,
            } => {
                if value.to_bits() != previous.to_bits() {
                    out.push(SliderEvent::update(thumb, value));
                    out.push(SliderEvent::MidUpdate(mid));
                }

                let target = Target::from(thumb);
                let slot = self.status.slot(target);
                if *slot != clamped {
                    out.push(match clamped {
                        Some(limit) => SliderEvent::reached(limit, target),
                        None => SliderEvent::AllInRange(target),
                    });
                    *slot = clamped;
                }

                if self.status.mid.take().is_some() {
                    out.push(SliderEvent::AllInRange(Target::Mid));
                }
            }
            Resolution::Rejected { violation, .. } => {
                out.push(SliderEvent::reached(violation, Target::Mid));
                self.status.mid = Some(violation);
            }
        }
        out
    }

    /// Deliver events to every observer, in order.
    pub fn emit(&mut self, events: &[SliderEvent]) {
        for event in events {
            for (_, observer) in &mut self.observers {
                observer.on_event(event);
            }
        }
    }

    /// [`translate`](Self::translate) then [`emit`](Self::emit); returns the
    /// events that were delivered.
    pub fn dispatch(&mut self, resolution: &Resolution) -> Vec<SliderEvent> {
        let events = self.translate(resolution);
        self.emit(&events);
        events
    }
}
