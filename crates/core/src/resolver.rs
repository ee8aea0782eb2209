use serde::Serialize;

use crate::code::RawCode;
use crate::tables::{DEFAULT_COLOR, UNKNOWN_STATUS, UNKNOWN_TYPE};
use crate::types::{Category, CodeEntry};

/// Returns the status entry matching `code` by strict numeric identity.
pub fn find_status(category: Category, code: impl Into<RawCode>) -> Option<&'static CodeEntry> {
    category.status_table().find_opt(code.into().exact())
}

/// Returns the type entry matching `code` after numeric coercion.
pub fn find_type(category: Category, code: impl Into<RawCode>) -> Option<&'static CodeEntry> {
    category.type_table().find_opt(code.into().coerced())
}

/// Outcome of a lookup: the value to display and whether a listed entry matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub matched: bool,
}

/// Label and tag color of a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDisplay {
    pub label: &'static str,
    pub color: &'static str,
}

/// Resolves a status code to its display, substituting `未知状态`/`default` on a miss.
pub fn resolve_status(category: Category, code: impl Into<RawCode>) -> Resolved<StatusDisplay> {
    let entry = find_status(category, code);
    Resolved {
        value: StatusDisplay {
            label: entry.map(|entry| entry.label).unwrap_or(UNKNOWN_STATUS),
            color: entry.and_then(|entry| entry.color).unwrap_or(DEFAULT_COLOR),
        },
        matched: entry.is_some(),
    }
}

/// Resolves a type code to its label, substituting `未知类型` on a miss.
pub fn resolve_type(category: Category, code: impl Into<RawCode>) -> Resolved<&'static str> {
    let entry = find_type(category, code);
    Resolved {
        value: entry.map(|entry| entry.label).unwrap_or(UNKNOWN_TYPE),
        matched: entry.is_some(),
    }
}

/// Display label for a status code, or `未知状态` when the code is not listed.
pub fn status_label(category: Category, code: impl Into<RawCode>) -> &'static str {
    resolve_status(category, code).value.label
}

/// Tag color for a status code, or `default` when the code is not listed.
pub fn status_color(category: Category, code: impl Into<RawCode>) -> &'static str {
    resolve_status(category, code).value.color
}

/// Display label for a type code, or `未知类型` when the code is not listed.
///
/// `"1"` and `1` resolve to the same entry.
pub fn type_label(category: Category, code: impl Into<RawCode>) -> &'static str {
    resolve_type(category, code).value
}
