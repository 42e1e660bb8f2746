//! Assertion helpers for headless diagnostics goals.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default tolerance for displayed-value comparisons
pub const DEFAULT_TOLERANCE: f32 = 1e-4;

/// Snapshot of app-observable state used for headless assertions.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsSnapshot {
    pub elements: HashMap<String, DiagnosticsElement>,
    pub effect: EffectSnapshot,
}

/// Minimal element representation for diagnostics checks.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsElement {
    pub text: Option<String>,
    pub opacity: f32,
}

/// Glass effect values at the moment of the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectSnapshot {
    pub active: bool,
    /// Values currently shown on the surface
    pub blur_radius: f32,
    pub saturation: f32,
    /// Values the transition is heading for
    pub target_blur: f32,
    pub target_saturation: f32,
    pub content_opacity: f32,
    pub animating: bool,
    pub backdrop_supported: bool,
    pub css: Option<String>,
}

/// Assertion result with structured failure details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionResult {
    Passed,
    Failed { code: String, message: String },
}

impl AssertionResult {
    fn failed(code: &str, message: String) -> Self {
        AssertionResult::Failed {
            code: code.to_string(),
            message,
        }
    }
}

pub fn evaluate_assert_exists(id: &str, snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    if snapshot.elements.contains_key(id) {
        AssertionResult::Passed
    } else {
        AssertionResult::failed("missing_element", format!("{id}: element not found"))
    }
}

pub fn evaluate_assert_text_contains(
    id: &str,
    expected: &str,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    let Some(element) = snapshot.elements.get(id) else {
        return AssertionResult::failed("missing_element", format!("{id}: element not found"));
    };
    let Some(text) = element.text.as_deref() else {
        return AssertionResult::failed("missing_text", format!("{id}: text not available"));
    };
    if text.contains(expected) {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "text_mismatch",
            format!("{id}: expected substring '{expected}', got '{text}'"),
        )
    }
}

pub fn evaluate_assert_active(expected: bool, snapshot: &DiagnosticsSnapshot) -> AssertionResult {
    if snapshot.effect.active == expected {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            "active_mismatch",
            format!("expected active={expected}, got {}", snapshot.effect.active),
        )
    }
}

pub fn evaluate_assert_blur(
    expected: f32,
    tolerance: Option<f32>,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    evaluate_close(
        "blur_mismatch",
        "blur radius",
        expected,
        snapshot.effect.blur_radius,
        tolerance,
    )
}

pub fn evaluate_assert_saturation(
    expected: f32,
    tolerance: Option<f32>,
    snapshot: &DiagnosticsSnapshot,
) -> AssertionResult {
    evaluate_close(
        "saturation_mismatch",
        "saturation",
        expected,
        snapshot.effect.saturation,
        tolerance,
    )
}

fn evaluate_close(
    code: &str,
    what: &str,
    expected: f32,
    actual: f32,
    tolerance: Option<f32>,
) -> AssertionResult {
    let tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE).abs();
    if (actual - expected).abs() <= tolerance {
        AssertionResult::Passed
    } else {
        AssertionResult::failed(
            code,
            format!("expected {what} {expected} (±{tolerance}), got {actual}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> DiagnosticsSnapshot {
        let mut elements = HashMap::new();
        elements.insert(
            "card-holder".to_string(),
            DiagnosticsElement {
                text: Some("SEUNGCHUL HA".to_string()),
                opacity: 1.0,
            },
        );
        elements.insert("card-logo".to_string(), DiagnosticsElement::default());
        DiagnosticsSnapshot {
            elements,
            effect: EffectSnapshot {
                active: true,
                blur_radius: 10.0,
                saturation: 1.8,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_exists_and_text() {
        let snap = snapshot();
        assert_eq!(evaluate_assert_exists("card-holder", &snap), AssertionResult::Passed);
        assert!(matches!(
            evaluate_assert_exists("nope", &snap),
            AssertionResult::Failed { ref code, .. } if code == "missing_element"
        ));
        assert_eq!(
            evaluate_assert_text_contains("card-holder", "HA", &snap),
            AssertionResult::Passed
        );
        assert!(matches!(
            evaluate_assert_text_contains("card-logo", "x", &snap),
            AssertionResult::Failed { ref code, .. } if code == "missing_text"
        ));
    }

    #[test]
    fn test_effect_assertions() {
        let snap = snapshot();
        assert_eq!(evaluate_assert_active(true, &snap), AssertionResult::Passed);
        assert_eq!(evaluate_assert_blur(10.0, None, &snap), AssertionResult::Passed);
        assert_eq!(
            evaluate_assert_saturation(1.7, Some(0.2), &snap),
            AssertionResult::Passed
        );

        let AssertionResult::Failed { code, message } = evaluate_assert_blur(30.0, None, &snap)
        else {
            panic!("blur assertion should fail");
        };
        assert_eq!(code, "blur_mismatch");
        assert!(message.contains("got 10"));
    }
}
