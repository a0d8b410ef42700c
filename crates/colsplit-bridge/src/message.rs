// ABOUTME: Wire format exchanged with the resize front-end.
// ABOUTME: Arguments carry ratios, labels and display hints; values carry dragged widths.

use colsplit_core::Gap;
use colsplit_layout::ResizeRequest;
use serde::{Deserialize, Serialize};

use crate::BridgeError;

/// Configuration the front-end draws handles from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireConfig {
    pub widths: Vec<f64>,
    pub labels: Vec<String>,
    #[serde(default)]
    pub gap: Gap,
    #[serde(default)]
    pub border: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_widths: Option<Vec<f64>>,
}

/// Everything sent to the front-end for one render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentArgs {
    pub config: WireConfig,
    /// Value the front-end reports until the user drags
    pub default: ComponentValue,
}

/// Value reported back by the front-end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentValue {
    #[serde(alias = "ratios")]
    pub widths: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl ComponentArgs {
    pub fn new(request: &ResizeRequest, default: &[f64]) -> Self {
        Self {
            config: WireConfig {
                widths: request.ratios.clone(),
                labels: request.labels.clone(),
                gap: request.gap,
                border: request.border,
                min_widths: request.min_widths.clone(),
            },
            default: ComponentValue {
                widths: default.to_vec(),
                action: None,
            },
        }
    }

    pub fn to_json(&self) -> Result<String, BridgeError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, BridgeError> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl ComponentValue {
    /// Value the front-end sends when a drag ends
    pub fn resize(widths: Vec<f64>) -> Self {
        Self {
            widths,
            action: Some("resize".to_string()),
        }
    }

    pub fn to_json(&self) -> Result<String, BridgeError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, BridgeError> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_shape() {
        let request = ResizeRequest {
            ratios: vec![2.0, 1.0],
            labels: vec!["Main".to_string(), "Side".to_string()],
            gap: Gap::Large,
            border: true,
            min_widths: Some(vec![0.1, 0.1]),
        };
        let json = ComponentArgs::new(&request, &[2.0, 1.0]).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["config"]["widths"], serde_json::json!([2.0, 1.0]));
        assert_eq!(value["config"]["gap"], "large");
        assert_eq!(value["config"]["min_widths"], serde_json::json!([0.1, 0.1]));
        assert_eq!(value["default"]["widths"], serde_json::json!([2.0, 1.0]));
        assert!(value["default"].get("action").is_none());
    }

    #[test]
    fn value_from_front_end() {
        let value =
            ComponentValue::from_json(r#"{"widths": [1.2, 0.8], "action": "resize"}"#).unwrap();
        assert_eq!(value, ComponentValue::resize(vec![1.2, 0.8]));
    }

    #[test]
    fn value_accepts_ratios_field() {
        let value = ComponentValue::from_json(r#"{"ratios": [1, 3]}"#).unwrap();
        assert_eq!(value.widths, vec![1.0, 3.0]);
        assert_eq!(value.action, None);
    }

    #[test]
    fn malformed_value_is_an_error() {
        assert!(matches!(
            ComponentValue::from_json(r#"{"widths": "wide"}"#),
            Err(BridgeError::Json(_))
        ));
    }
}
