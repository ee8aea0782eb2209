//! Status, type and result-level lookup tables for the emojump admin console.
//!
//! Every lookup is a pure function over static tables. Unknown codes never
//! fail; they resolve to a fallback label, color or style instead.

pub mod code;
pub mod dictionary;
pub mod level;
pub mod resolver;
pub mod tables;
pub mod types;

pub use code::RawCode;
pub use dictionary::{policy_type_label, DictOption, Dictionary, OptionValue, PolicyType};
pub use level::{level_attr, level_entry, level_style, LevelStyle, DEFAULT_LEVEL_STYLE};
pub use resolver::{
    find_status, find_type, resolve_status, resolve_type, status_color, status_label, type_label,
    Resolved, StatusDisplay,
};
pub use tables::{DEFAULT_COLOR, UNKNOWN_STATUS, UNKNOWN_TYPE};
pub use types::{Category, CodeEntry, CodeTable, ParseTagError, StyleAxis};
