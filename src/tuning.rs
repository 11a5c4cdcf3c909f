//! Game balance parameters
//!
//! Defaults reproduce the classic layout. Hosts may override any subset with a
//! JSON document; missing fields keep their defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors produced while loading or checking tuning values
#[derive(Debug)]
pub enum TuningError {
    /// The document was not valid tuning JSON
    Parse(serde_json::Error),
    /// A size or speed must be strictly positive
    NonPositive { field: &'static str, value: f32 },
    /// An angle or spread must not be negative
    Negative { field: &'static str, value: f32 },
    /// A field was NaN or infinite
    NotFinite { field: &'static str },
    /// The surface cannot fit the paddles and ball
    SurfaceTooSmall { width: f32, height: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "invalid tuning JSON: {e}"),
            TuningError::NonPositive { field, value } => {
                write!(f, "tuning field `{field}` must be positive, got {value}")
            }
            TuningError::Negative { field, value } => {
                write!(f, "tuning field `{field}` must not be negative, got {value}")
            }
            TuningError::NotFinite { field } => {
                write!(f, "tuning field `{field}` must be finite")
            }
            TuningError::SurfaceTooSmall { width, height } => {
                write!(f, "surface {width}x{height} is too small for this tuning")
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub ball_size: f32,
    /// AI paddle speed cap (units per frame)
    pub ai_speed: f32,
    /// |dx| growth factor per paddle hit
    pub paddle_hit_speedup: f32,
    /// Max |dy| after a paddle hit (at the paddle tips)
    pub paddle_hit_angle: f32,
    /// Serve |dx|
    pub serve_speed: f32,
    /// Serve dy range half-width
    pub serve_spread: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            ball_size: BALL_SIZE,
            ai_speed: AI_SPEED,
            paddle_hit_speedup: PADDLE_HIT_SPEEDUP,
            paddle_hit_angle: PADDLE_HIT_ANGLE,
            serve_speed: SERVE_SPEED,
            serve_spread: SERVE_SPREAD,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Sizes and speeds; zero would collapse geometry or freeze play
    fn extents(&self) -> [(&'static str, f32); 7] {
        [
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_margin", self.paddle_margin),
            ("ball_size", self.ball_size),
            ("ai_speed", self.ai_speed),
            ("paddle_hit_speedup", self.paddle_hit_speedup),
            ("serve_speed", self.serve_speed),
        ]
    }

    /// Vertical scales; zero means flat serves or flat returns
    fn spreads(&self) -> [(&'static str, f32); 2] {
        [
            ("paddle_hit_angle", self.paddle_hit_angle),
            ("serve_spread", self.serve_spread),
        ]
    }

    /// Every field must be finite. Sizes and speeds must be positive,
    /// the hit angle and serve spread non-negative.
    pub fn validate(&self) -> Result<(), TuningError> {
        for (field, value) in self.extents().into_iter().chain(self.spreads()) {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { field });
            }
        }
        for (field, value) in self.extents() {
            if value <= 0.0 {
                return Err(TuningError::NonPositive { field, value });
            }
        }
        for (field, value) in self.spreads() {
            if value < 0.0 {
                return Err(TuningError::Negative { field, value });
            }
        }
        Ok(())
    }

    /// Reject surfaces that cannot hold both paddles, their margins and the ball
    pub fn check_surface(&self, width: f32, height: f32) -> Result<(), TuningError> {
        let min_width = 2.0 * (self.paddle_margin + self.paddle_width) + self.ball_size;
        let min_height = self.paddle_height.max(self.ball_size);
        if !(width >= min_width && height >= min_height) {
            return Err(TuningError::SurfaceTooSmall { width, height });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_layout() {
        let t = Tuning::default();
        assert_eq!(t.paddle_width, 12.0);
        assert_eq!(t.paddle_height, 80.0);
        assert_eq!(t.paddle_margin, 18.0);
        assert_eq!(t.ball_size, 14.0);
        assert_eq!(t.ai_speed, 4.4);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "ai_speed": 6.0 }"#).unwrap();
        assert_eq!(t.ai_speed, 6.0);
        assert_eq!(t.paddle_height, PADDLE_HEIGHT);
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_rejects_non_positive() {
        let err = Tuning::from_json(r#"{ "ball_size": 0 }"#).unwrap_err();
        match err {
            TuningError::NonPositive { field, .. } => assert_eq!(field, "ball_size"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_angle_and_spread_allowed() {
        let t = Tuning::from_json(r#"{ "serve_spread": 0, "paddle_hit_angle": 0 }"#).unwrap();
        assert_eq!(t.serve_spread, 0.0);
        assert_eq!(t.paddle_hit_angle, 0.0);
    }

    #[test]
    fn test_rejects_negative_spread() {
        let err = Tuning::from_json(r#"{ "serve_spread": -2 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Negative {
                field: "serve_spread",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        let t = Tuning {
            ai_speed: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            t.validate(),
            Err(TuningError::NotFinite { field: "ai_speed" })
        ));
    }

    #[test]
    fn test_check_surface() {
        let t = Tuning::default();
        assert!(t.check_surface(800.0, 500.0).is_ok());
        assert!(t.check_surface(800.0, 40.0).is_err());
        assert!(t.check_surface(50.0, 500.0).is_err());
    }
}
