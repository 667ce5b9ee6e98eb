#![forbid(unsafe_code)]

//! Configuration errors.
//!
//! Out-of-range drag proposals are never errors: they are clamped or rejected
//! by the resolver. Only the setup API can fail, and it fails fast so a slider
//! never starts from an inconsistent configuration.

use thiserror::Error;

use crate::state::Thumb;

/// Which configured range an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsKind {
    /// The global `[min, max]` limits.
    Limits,
    /// A thumb's own bounds.
    Thumb(Thumb),
    /// The derived middle value's bounds.
    Mid,
}

impl std::fmt::Display for BoundsKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Limits => f.write_str("limits"),
            Self::Thumb(thumb) => write!(f, "{thumb} thumb bounds"),
            Self::Mid => f.write_str("mid bounds"),
        }
    }
}

/// Errors raised by the configuration API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{kind}: min {min} is greater than max {max}")]
    InvertedBounds { kind: BoundsKind, min: f64, max: f64 },

    #[error("{kind}: bounds must be finite, got [{min}, {max}]")]
    NonFiniteBounds { kind: BoundsKind, min: f64, max: f64 },

    #[error("{thumb} value {value} must be finite")]
    NonFiniteValue { thumb: Thumb, value: f64 },

    #[error("{thumb} value {value} is outside [{min}, {max}]")]
    ValueOutOfBounds {
        thumb: Thumb,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("thumbs cross: left {left} and right {right} overlap by {overlap}")]
    ThumbsCrossed { left: f64, right: f64, overlap: f64 },

    #[error("mid value {given} does not match derived mid {derived}")]
    InconsistentMid { given: f64, derived: f64 },

    #[error("mid value {mid} is outside mid bounds [{min}, {max}]")]
    MidOutOfBounds { mid: f64, min: f64, max: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_range() {
        let err = ConfigError::InvertedBounds {
            kind: BoundsKind::Thumb(Thumb::Left),
            min: 5.0,
            max: 1.0,
        };
        assert_eq!(
            err.to_string(),
            "left thumb bounds: min 5 is greater than max 1"
        );

        let err = ConfigError::InvertedBounds {
            kind: BoundsKind::Mid,
            min: 2.0,
            max: 1.0,
        };
        assert!(err.to_string().starts_with("mid bounds"));
    }

    #[test]
    fn inconsistent_mid_message() {
        let err = ConfigError::InconsistentMid {
            given: 30.0,
            derived: 40.0,
        };
        assert_eq!(
            err.to_string(),
            "mid value 30 does not match derived mid 40"
        );
    }

    #[test]
    fn crossed_thumbs_message() {
        let err = ConfigError::ThumbsCrossed {
            left: 50.0,
            right: 60.0,
            overlap: 10.0,
        };
        assert_eq!(
            err.to_string(),
            "thumbs cross: left 50 and right 60 overlap by 10"
        );
    }
}
