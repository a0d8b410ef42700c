// ABOUTME: Pass-through display hints for adjustable column rows.
// ABOUTME: Gap size, vertical alignment, and border visibility.

use serde::{Deserialize, Serialize};

/// Spacing between adjacent columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gap {
    #[default]
    Small,
    Medium,
    Large,
}

impl Gap {
    pub fn all() -> &'static [Gap] {
        &[Gap::Small, Gap::Medium, Gap::Large]
    }

    /// Name used on the wire to the front-end
    pub fn as_str(&self) -> &'static str {
        match self {
            Gap::Small => "small",
            Gap::Medium => "medium",
            Gap::Large => "large",
        }
    }

    /// CSS length the front-end uses between handle areas
    pub fn css_size(&self) -> &'static str {
        match self {
            Gap::Small => "0.5rem",
            Gap::Medium => "1rem",
            Gap::Large => "1.5rem",
        }
    }
}

impl std::str::FromStr for Gap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gap::all()
            .iter()
            .copied()
            .find(|gap| gap.as_str() == s)
            .ok_or_else(|| format!("unknown gap '{s}', expected small, medium or large"))
    }
}

/// Vertical alignment of content inside each column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlignment {
    #[default]
    Top,
    Center,
    Bottom,
}

impl VerticalAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalAlignment::Top => "top",
            VerticalAlignment::Center => "center",
            VerticalAlignment::Bottom => "bottom",
        }
    }
}

impl std::str::FromStr for VerticalAlignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(VerticalAlignment::Top),
            "center" => Ok(VerticalAlignment::Center),
            "bottom" => Ok(VerticalAlignment::Bottom),
            other => Err(format!(
                "unknown vertical alignment '{other}', expected top, center or bottom"
            )),
        }
    }
}

/// Display hints handed unchanged to the layout primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DisplayOptions {
    pub gap: Gap,
    pub vertical_alignment: VerticalAlignment,
    pub border: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_host_columns() {
        let display = DisplayOptions::default();
        assert_eq!(display.gap, Gap::Small);
        assert_eq!(display.vertical_alignment, VerticalAlignment::Top);
        assert!(!display.border);
    }

    #[test]
    fn gap_parses_wire_names() {
        for gap in Gap::all() {
            assert_eq!(gap.as_str().parse::<Gap>().unwrap(), *gap);
        }
        assert!("huge".parse::<Gap>().is_err());
    }

    #[test]
    fn gap_css_sizes_grow() {
        assert_eq!(Gap::Small.css_size(), "0.5rem");
        assert_eq!(Gap::Medium.css_size(), "1rem");
        assert_eq!(Gap::Large.css_size(), "1.5rem");
    }

    #[test]
    fn alignment_parses() {
        assert_eq!(
            "center".parse::<VerticalAlignment>().unwrap(),
            VerticalAlignment::Center
        );
        assert!("middle".parse::<VerticalAlignment>().is_err());
    }
}
