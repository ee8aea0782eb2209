use std::{fmt, str::FromStr};

use thiserror::Error;

/// Errors raised when a text tag from outside the process names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTagError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("unknown style axis: {0}")]
    UnknownAxis(String),
    #[error("unknown dictionary: {0}")]
    UnknownDictionary(String),
}

/// Business area whose status and type tables a lookup applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Assessment,
    Questionnaire,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Assessment => "assessment",
            Self::Questionnaire => "questionnaire",
        }
    }

    pub fn all() -> [Category; 2] {
        [Self::Assessment, Self::Questionnaire]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseTagError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "assessment" => Ok(Self::Assessment),
            "questionnaire" => Ok(Self::Questionnaire),
            other => Err(ParseTagError::UnknownCategory(other.to_string())),
        }
    }
}

/// Style attribute of a result level that a view can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleAxis {
    /// Text color class.
    Color,
    /// Background class.
    Bg,
    /// Icon glyph.
    Icon,
    /// Progress bar color.
    Progress,
}

impl StyleAxis {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Bg => "bg",
            Self::Icon => "icon",
            Self::Progress => "progress",
        }
    }

    /// Parses a comma separated axis list such as `bg,icon`, keeping order.
    ///
    /// Blank items are ignored; any unknown item fails the whole list.
    pub fn parse_list(raw: &str) -> Result<Vec<StyleAxis>, ParseTagError> {
        raw.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(StyleAxis::from_str)
            .collect()
    }
}

impl FromStr for StyleAxis {
    type Err = ParseTagError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "color" => Ok(Self::Color),
            "bg" => Ok(Self::Bg),
            "icon" => Ok(Self::Icon),
            "progress" => Ok(Self::Progress),
            other => Err(ParseTagError::UnknownAxis(other.to_string())),
        }
    }
}

/// One numeric code and how it is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeEntry {
    pub value: i64,
    pub label: &'static str,
    pub color: Option<&'static str>,
}

impl CodeEntry {
    pub const fn new(value: i64, label: &'static str) -> Self {
        Self {
            value,
            label,
            color: None,
        }
    }

    pub const fn colored(value: i64, label: &'static str, color: &'static str) -> Self {
        Self {
            value,
            label,
            color: Some(color),
        }
    }
}

/// Immutable list of entries scanned linearly by value.
#[derive(Debug, Clone, Copy)]
pub struct CodeTable {
    name: &'static str,
    entries: &'static [CodeEntry],
}

impl CodeTable {
    pub const fn new(name: &'static str, entries: &'static [CodeEntry]) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &'static [CodeEntry] {
        self.entries
    }

    /// Returns the entry whose value equals `value`, if any.
    pub fn find(&self, value: i64) -> Option<&'static CodeEntry> {
        self.entries.iter().find(|entry| entry.value == value)
    }

    /// Like [`CodeTable::find`] but tolerates a missing code.
    pub fn find_opt(&self, value: Option<i64>) -> Option<&'static CodeEntry> {
        value.and_then(|value| self.find(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_tags() {
        for category in Category::all() {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert_eq!(
            "evaluation".parse::<Category>(),
            Err(ParseTagError::UnknownCategory("evaluation".into()))
        );
    }

    #[test]
    fn axis_list_keeps_requested_order() {
        let axes = StyleAxis::parse_list("icon, bg,,color").expect("valid list");
        assert_eq!(axes, vec![StyleAxis::Icon, StyleAxis::Bg, StyleAxis::Color]);
    }

    #[test]
    fn axis_list_rejects_unknown_items() {
        let err = StyleAxis::parse_list("bg,border").expect_err("border is not an axis");
        assert_eq!(err, ParseTagError::UnknownAxis("border".into()));
    }

    #[test]
    fn find_misses_without_panicking() {
        static ENTRIES: [CodeEntry; 1] = [CodeEntry::new(1, "one")];
        let table = CodeTable::new("sample", &ENTRIES);
        assert_eq!(table.find(1).map(|entry| entry.label), Some("one"));
        assert!(table.find(2).is_none());
        assert!(table.find_opt(None).is_none());
    }
}
