//! Easing functions for animations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Easing function type
///
/// Serialized in kebab-case (`"ease-in"`), with cubic bezier curves written
/// as `{ cubic-bezier = [x1, y1, x2, y2] }`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_ease(t, *x1, *y1, *x2, *y2),
        }
    }

    /// CSS `transition-timing-function` name for this curve
    pub fn css_name(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseIn => "ease-in".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css_name())
    }
}

/// Cubic bezier easing calculation (matches CSS spec / browser implementations).
///
/// Uses Newton-Raphson with binary-search fallback for robustness.
/// Computes in f64 internally to avoid f32 precision jitter at 120fps.
fn cubic_bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let x = t as f64;
    let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);

    let mut p = x;
    for _ in 0..8 {
        let err = bezier_sample(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return bezier_sample(p, y1, y2) as f32;
        }
        let slope = bezier_slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }

    // Slope too flat for Newton; bisect instead
    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    p = x;
    for _ in 0..20 {
        let val = bezier_sample(p, x1, x2);
        if (val - x).abs() < 1e-7 {
            break;
        }
        if val < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) * 0.5;
    }

    bezier_sample(p, y1, y2) as f32
}

/// B(t) = 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³
#[inline]
fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

/// B'(t) = 3(1-t)²·p1 + 6(1-t)t·(p2-p1) + 3t²·(1-p2)
#[inline]
fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    (3.0 * a * t + 2.0 * b) * t + c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::CubicBezier(0.42, 0.0, 1.0, 1.0),
        ] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing}");
        }
    }

    #[test]
    fn test_ease_in_starts_slow() {
        let mid = Easing::EaseIn.apply(0.5);
        assert!((mid - 0.125).abs() < 1e-6);
        assert!(Easing::EaseIn.apply(0.25) < Easing::Linear.apply(0.25));
    }

    #[test]
    fn test_css_bezier_ease_in_is_monotonic_and_slow() {
        let css = Easing::CubicBezier(0.42, 0.0, 1.0, 1.0);
        let mut prev = 0.0;
        for i in 1..10 {
            let t = i as f32 / 10.0;
            let v = css.apply(t);
            assert!(v >= prev, "t={t}");
            assert!(v < t, "t={t}");
            prev = v;
        }
    }

    #[test]
    fn test_css_names() {
        assert_eq!(Easing::EaseIn.css_name(), "ease-in");
        assert_eq!(Easing::EaseInOut.to_string(), "ease-in-out");
        assert_eq!(
            Easing::CubicBezier(0.42, 0.0, 1.0, 1.0).css_name(),
            "cubic-bezier(0.42, 0, 1, 1)"
        );
    }

    #[test]
    fn test_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Doc {
            easing: Easing,
        }

        let doc: Doc = toml::from_str(r#"easing = "ease-in-out""#).unwrap();
        assert_eq!(doc.easing, Easing::EaseInOut);

        let doc: Doc = toml::from_str("easing = { cubic-bezier = [0.4, 0.0, 1.0, 1.0] }").unwrap();
        assert_eq!(doc.easing, Easing::CubicBezier(0.4, 0.0, 1.0, 1.0));
    }
}
