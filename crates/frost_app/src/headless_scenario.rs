//! Scenario definition for app-level headless diagnostics.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Sequence of headless diagnostic steps.
#[derive(Debug, Clone, Deserialize)]
pub struct HeadlessScenario {
    #[serde(default)]
    pub name: Option<String>,
    pub steps: Vec<ScenarioStep>,
}

impl HeadlessScenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Whether any step needs a live app snapshot to evaluate
    pub fn has_assertions(&self) -> bool {
        self.steps.iter().any(ScenarioStep::is_assertion)
    }
}

/// Scenario steps: frame advancement, user input, and assertions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Wait {
        ms: u64,
    },
    Tick {
        frames: u32,
    },
    /// Mount the card, attaching the backdrop surface
    Attach,
    /// Flip the glass toggle
    Toggle,
    SetActive {
        value: bool,
    },
    AssertExists {
        id: String,
    },
    AssertTextContains {
        id: String,
        value: String,
    },
    AssertActive {
        value: bool,
    },
    AssertBlur {
        value: f32,
        #[serde(default)]
        tolerance: Option<f32>,
    },
    AssertSaturation {
        value: f32,
        #[serde(default)]
        tolerance: Option<f32>,
    },
}

impl ScenarioStep {
    pub fn is_assertion(&self) -> bool {
        matches!(
            self,
            ScenarioStep::AssertExists { .. }
                | ScenarioStep::AssertTextContains { .. }
                | ScenarioStep::AssertActive { .. }
                | ScenarioStep::AssertBlur { .. }
                | ScenarioStep::AssertSaturation { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let scenario = HeadlessScenario::from_json(
            r#"{
                "name": "roundtrip",
                "steps": [
                    { "type": "attach" },
                    { "type": "toggle" },
                    { "type": "set_active", "value": false },
                    { "type": "wait", "ms": 500 },
                    { "type": "assert_blur", "value": 30.0 },
                    { "type": "assert_saturation", "value": 1.0, "tolerance": 0.01 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(scenario.name.as_deref(), Some("roundtrip"));
        assert_eq!(scenario.steps.len(), 6);
        assert_eq!(scenario.steps[0], ScenarioStep::Attach);
        assert_eq!(scenario.steps[2], ScenarioStep::SetActive { value: false });
        assert_eq!(
            scenario.steps[4],
            ScenarioStep::AssertBlur {
                value: 30.0,
                tolerance: None
            }
        );
        assert!(scenario.has_assertions());
    }

    #[test]
    fn test_unknown_step_is_rejected() {
        let err = HeadlessScenario::from_json(r#"{ "steps": [{ "type": "swipe" }] }"#);
        assert!(err.is_err());
    }
}
