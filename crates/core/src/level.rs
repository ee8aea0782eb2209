use std::{collections::HashMap, sync::LazyLock};

use crate::types::StyleAxis;

/// Presentation of a result level. Any axis may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStyle {
    pub level: &'static str,
    pub color: Option<&'static str>,
    pub bg: Option<&'static str>,
    pub icon: Option<&'static str>,
    pub progress: Option<&'static str>,
}

impl LevelStyle {
    /// Value of one axis, treating an empty string as absent.
    pub fn get(&self, axis: StyleAxis) -> Option<&'static str> {
        let value = match axis {
            StyleAxis::Color => self.color,
            StyleAxis::Bg => self.bg,
            StyleAxis::Icon => self.icon,
            StyleAxis::Progress => self.progress,
        };
        value.filter(|value| !value.is_empty())
    }
}

const fn style(
    level: &'static str,
    color: Option<&'static str>,
    bg: Option<&'static str>,
    icon: Option<&'static str>,
    progress: Option<&'static str>,
) -> LevelStyle {
    LevelStyle {
        level,
        color,
        bg,
        icon,
        progress,
    }
}

/// Used for any level the scoring pipeline emits that is not listed below.
pub static DEFAULT_LEVEL_STYLE: LevelStyle = style(
    "default",
    Some("text-gray-600"),
    Some("bg-gray-50"),
    Some("📊"),
    Some("#1677ff"),
);

static LEVEL_STYLES: [LevelStyle; 7] = [
    style(
        "优秀",
        Some("text-emerald-600"),
        Some("bg-emerald-50"),
        Some("🌟"),
        Some("#13c2c2"),
    ),
    style(
        "正常范围",
        Some("text-green-600"),
        Some("bg-green-50"),
        Some("✅"),
        Some("#52c41a"),
    ),
    style(
        "低风险",
        Some("text-blue-600"),
        Some("bg-blue-50"),
        Some("🔵"),
        Some("#1677ff"),
    ),
    style(
        "需关注",
        Some("text-yellow-600"),
        Some("bg-yellow-50"),
        Some("⚠️"),
        Some("#faad14"),
    ),
    style(
        "中风险",
        Some("text-orange-600"),
        Some("bg-orange-50"),
        Some("🟠"),
        Some("#fa8c16"),
    ),
    style(
        "高风险",
        Some("text-red-600"),
        Some("bg-red-50"),
        Some("🔴"),
        Some("#f5222d"),
    ),
    // pending reports render without a background or progress bar
    style("待评估", Some("text-gray-500"), None, Some("⏳"), None),
];

static LEVEL_INDEX: LazyLock<HashMap<&'static str, &'static LevelStyle>> =
    LazyLock::new(|| LEVEL_STYLES.iter().map(|entry| (entry.level, entry)).collect());

/// All listed levels, in display order.
pub fn level_styles() -> &'static [LevelStyle] {
    &LEVEL_STYLES
}

/// Returns the listed style for `level`, if any.
pub fn find_level(level: &str) -> Option<&'static LevelStyle> {
    LEVEL_INDEX.get(level).copied()
}

/// Returns the style for `level`, falling back to [`DEFAULT_LEVEL_STYLE`].
pub fn level_entry(level: &str) -> &'static LevelStyle {
    find_level(level).unwrap_or(&DEFAULT_LEVEL_STYLE)
}

/// Single style attribute for `level`; empty when that axis is absent.
pub fn level_attr(level: &str, axis: StyleAxis) -> &'static str {
    level_entry(level).get(axis).unwrap_or_default()
}

/// Space separated style attributes for `level` in the requested order.
///
/// Absent axes are skipped, so the result never holds doubled or trailing
/// separators.
pub fn level_style(level: &str, axes: &[StyleAxis]) -> String {
    let entry = level_entry(level);
    axes.iter()
        .filter_map(|axis| entry.get(*axis))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn single_axis_returns_value() {
        assert_eq!(level_attr("正常范围", StyleAxis::Color), "text-green-600");
        assert_eq!(level_attr("中风险", StyleAxis::Progress), "#fa8c16");
    }

    #[test]
    fn several_axes_are_space_joined_in_order() {
        assert_eq!(
            level_style("高风险", &[StyleAxis::Bg, StyleAxis::Icon]),
            "bg-red-50 🔴"
        );
        assert_eq!(
            level_style("高风险", &[StyleAxis::Icon, StyleAxis::Bg]),
            "🔴 bg-red-50"
        );
    }

    #[test]
    fn unknown_level_uses_default_entry() {
        assert_eq!(level_attr("totally-unknown-level", StyleAxis::Icon), "📊");
        assert_eq!(
            level_style("", &[StyleAxis::Color, StyleAxis::Bg, StyleAxis::Progress]),
            "text-gray-600 bg-gray-50 #1677ff"
        );
    }

    #[test]
    fn absent_axes_are_skipped() {
        assert_eq!(level_attr("待评估", StyleAxis::Bg), "");
        assert_eq!(
            level_style(
                "待评估",
                &[StyleAxis::Color, StyleAxis::Bg, StyleAxis::Progress, StyleAxis::Icon]
            ),
            "text-gray-500 ⏳"
        );
        assert_eq!(level_style("待评估", &[StyleAxis::Bg]), "");
    }

    #[test]
    fn empty_axis_list_yields_empty_string() {
        assert_eq!(level_style("高风险", &[]), "");
    }

    #[test]
    fn levels_are_unique() {
        let names: HashSet<_> = level_styles().iter().map(|entry| entry.level).collect();
        assert_eq!(names.len(), level_styles().len());
        assert!(find_level(DEFAULT_LEVEL_STYLE.level).is_none());
    }

    #[test]
    fn lookups_are_stable() {
        let axes = [StyleAxis::Color, StyleAxis::Icon];
        assert_eq!(level_style("低风险", &axes), level_style("低风险", &axes));
    }
}
