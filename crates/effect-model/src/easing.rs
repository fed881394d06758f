//! Easing curves for tween motion.
//!
//! An easing curve is a pure mapping from normalized time `t` in
//! `[0.0, 1.0]` to a normalized progress value. Outputs are not
//! restricted to `[0.0, 1.0]` — the elastic curve overshoots.

use serde::{Deserialize, Serialize};

/// The fixed easing registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    /// Identity: progress equals time.
    #[default]
    Linear,
    /// Quadratic acceleration from zero.
    EaseIn,
    /// Quadratic deceleration to zero.
    EaseOut,
    /// Quadratic acceleration then deceleration.
    EaseInOut,
    /// Exponentially decaying sine oscillation, overshooting past 1.
    EaseOutElastic,
}

impl Easing {
    /// Look up a curve by name, case-insensitively.
    ///
    /// Returns `None` for unknown names; callers that need the
    /// fall-back-to-linear behavior handle (and log) it themselves.
    pub fn from_name(name: &str) -> Option<Easing> {
        match name.to_ascii_lowercase().as_str() {
            "linear" => Some(Self::Linear),
            "easein" => Some(Self::EaseIn),
            "easeout" => Some(Self::EaseOut),
            "easeinout" => Some(Self::EaseInOut),
            "easeoutelastic" => Some(Self::EaseOutElastic),
            _ => None,
        }
    }

    /// The registry name of this curve.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "easein",
            Self::EaseOut => "easeout",
            Self::EaseInOut => "easeinout",
            Self::EaseOutElastic => "easeoutelastic",
        }
    }

    /// Evaluate the curve at normalized time `t`.
    ///
    /// `t` is clamped to the `[0.0, 1.0]` domain before evaluation.
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Self::EaseOutElastic => {
                let p = 0.3;
                2.0_f64.powf(-10.0 * t) * ((t - p / 4.0) * (2.0 * std::f64::consts::PI) / p).sin()
                    + 1.0
            }
        }
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
