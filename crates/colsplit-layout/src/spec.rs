// ABOUTME: Column spec normalization into canonical ratio vectors.
// ABOUTME: Resolves labels and minimum-width fractions against the column count.

use serde_json::Value;

use crate::LayoutError;

/// Requested layout: a column count or explicit weights
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutSpec {
    /// N equal-weight columns
    Count(i64),
    /// One positive weight per column
    Weights(Vec<f64>),
}

impl From<i64> for LayoutSpec {
    fn from(count: i64) -> Self {
        LayoutSpec::Count(count)
    }
}

impl From<Vec<f64>> for LayoutSpec {
    fn from(weights: Vec<f64>) -> Self {
        LayoutSpec::Weights(weights)
    }
}

impl From<&[f64]> for LayoutSpec {
    fn from(weights: &[f64]) -> Self {
        LayoutSpec::Weights(weights.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for LayoutSpec {
    fn from(weights: [f64; N]) -> Self {
        LayoutSpec::Weights(weights.to_vec())
    }
}

impl TryFrom<&Value> for LayoutSpec {
    type Error = LayoutError;

    /// Accepts an integer or an array of numbers
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => n.as_i64().map(LayoutSpec::Count).ok_or_else(|| {
                LayoutError::InvalidSpec(format!("column count must be an integer, got {n}"))
            }),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_f64().ok_or_else(|| {
                        LayoutError::InvalidSpec(format!("weight must be a number, got {item}"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(LayoutSpec::Weights),
            other => Err(LayoutError::InvalidSpec(format!(
                "expected an integer or a list of numbers, got {other}"
            ))),
        }
    }
}

/// Spec accepted by the legacy entry point
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LegacySpec {
    /// Two equal columns
    #[default]
    Default,
    /// Raw ratio list
    Widths(Vec<f64>),
    /// Ratios plus optional per-column floors
    Config {
        widths: Option<Vec<f64>>,
        min_widths: Option<Vec<f64>>,
    },
}

impl LegacySpec {
    /// Split into (widths, explicit minimum widths)
    pub(crate) fn into_parts(self) -> (Vec<f64>, Option<Vec<f64>>) {
        match self {
            LegacySpec::Default => (vec![1.0, 1.0], None),
            LegacySpec::Widths(widths) => (widths, None),
            LegacySpec::Config { widths, min_widths } => {
                (widths.unwrap_or_else(|| vec![1.0, 1.0]), min_widths)
            }
        }
    }
}

impl From<Vec<f64>> for LegacySpec {
    fn from(widths: Vec<f64>) -> Self {
        LegacySpec::Widths(widths)
    }
}

/// Turn a spec into a ratio vector, rejecting empty or non-positive layouts
pub fn normalize(spec: &LayoutSpec) -> Result<Vec<f64>, LayoutError> {
    let ratios = match spec {
        LayoutSpec::Count(n) if *n <= 0 => {
            return Err(LayoutError::InvalidSpec(format!(
                "column count must be at least 1, got {n}"
            )))
        }
        LayoutSpec::Count(n) => {
            let too_large =
                || LayoutError::InvalidSpec(format!("column count {n} is too large"));
            let n = usize::try_from(*n).map_err(|_| too_large())?;
            let mut ratios = Vec::new();
            ratios.try_reserve_exact(n).map_err(|_| too_large())?;
            ratios.resize(n, 1.0);
            ratios
        }
        LayoutSpec::Weights(weights) => weights.clone(),
    };

    if ratios.is_empty() {
        return Err(LayoutError::InvalidSpec(
            "at least one column is required".to_string(),
        ));
    }
    if let Some((i, w)) = ratios
        .iter()
        .enumerate()
        .find(|(_, w)| !(w.is_finite() && **w > 0.0))
    {
        return Err(LayoutError::InvalidSpec(format!(
            "weight {i} must be a positive number, got {w}"
        )));
    }

    if !ratios.iter().sum::<f64>().is_finite() {
        return Err(LayoutError::InvalidSpec(
            "weights are too large to sum".to_string(),
        ));
    }

    Ok(ratios)
}

/// Labels shown above each column, "Col 1".."Col N" when not given
pub fn resolve_labels(labels: Option<&[String]>, count: usize) -> Result<Vec<String>, LayoutError> {
    match labels {
        None => Ok((1..=count).map(|i| format!("Col {i}")).collect()),
        Some(labels) if labels.len() != count => Err(LayoutError::LabelCountMismatch {
            expected: count,
            found: labels.len(),
        }),
        Some(labels) => Ok(labels.to_vec()),
    }
}

/// Per-column floor fractions, `default` for every column when not given
pub fn resolve_min_widths(
    min_widths: Option<&[f64]>,
    count: usize,
    default: f64,
) -> Result<Vec<f64>, LayoutError> {
    let fractions = match min_widths {
        None => vec![default; count],
        Some(given) if given.len() != count => {
            return Err(LayoutError::MinWidthCountMismatch {
                expected: count,
                found: given.len(),
            })
        }
        Some(given) => given.to_vec(),
    };

    if let Some(f) = fractions.iter().find(|f| !(0.0..1.0).contains(*f)) {
        return Err(LayoutError::InvalidSpec(format!(
            "minimum width fraction must be in [0, 1), got {f}"
        )));
    }
    Ok(fractions)
}
