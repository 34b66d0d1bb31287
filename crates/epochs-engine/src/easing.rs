//! Easing curves for tweens.

use serde::{Deserialize, Serialize};

/// Interpolation curve applied to linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Cubic ease-out: starts fast, decelerates toward the target.
    ///
    /// Same curve as GSAP's `power2.out`.
    #[default]
    EaseOut,
    /// Cubic ease-in-out.
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` to eased progress.
    ///
    /// Input outside the unit range is clamped first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
            assert!(easing.apply(0.0).abs() < f64::EPSILON);
            assert!((easing.apply(1.0) - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_ease_out_leads_linear() {
        // Ease-out covers more distance early on
        assert!(Easing::EaseOut.apply(0.25) > Easing::Linear.apply(0.25));
        assert!((Easing::EaseOut.apply(0.5) - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_ease_out_is_monotonic() {
        let mut last = 0.0;
        for step in 1..=100 {
            let v = Easing::EaseOut.apply(f64::from(step) / 100.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert!((Easing::EaseOut.apply(1.7) - 1.0).abs() < f64::EPSILON);
        assert!(Easing::EaseInOut.apply(-0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Easing::EaseOut).unwrap();
        assert_eq!(json, "\"ease_out\"");
        let parsed: Easing = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(parsed, Easing::Linear);
    }
}
