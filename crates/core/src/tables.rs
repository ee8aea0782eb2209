//! Canonical code tables shared by every admin view.
//!
//! The evaluation and emojump screens each carried their own copy of these
//! lists; this module is the single source both now read from.

use crate::types::{Category, CodeEntry, CodeTable};

pub const UNKNOWN_STATUS: &str = "未知状态";
pub const UNKNOWN_TYPE: &str = "未知类型";
pub const DEFAULT_COLOR: &str = "default";

static ASSESSMENT_STATUS: [CodeEntry; 4] = [
    CodeEntry::colored(0, "草稿", "default"),
    CodeEntry::colored(1, "已发布", "processing"),
    CodeEntry::colored(2, "已结束", "error"),
    CodeEntry::colored(3, "已取消", "warning"),
];

static QUESTIONNAIRE_STATUS: [CodeEntry; 4] = [
    CodeEntry::colored(0, "草稿", "default"),
    CodeEntry::colored(1, "已发布", "processing"),
    CodeEntry::colored(2, "已下线", "error"),
    CodeEntry::colored(3, "已归档", "warning"),
];

static ASSESSMENT_TYPE: [CodeEntry; 5] = [
    CodeEntry::new(1, "儿童发展测评"),
    CodeEntry::new(2, "行为评估"),
    CodeEntry::new(3, "认知能力测评"),
    CodeEntry::new(4, "情感发展测评"),
    CodeEntry::new(5, "社交技能测评"),
];

static QUESTIONNAIRE_TYPE: [CodeEntry; 7] = [
    CodeEntry::new(1, "儿童发展问卷"),
    CodeEntry::new(2, "行为调查问卷"),
    CodeEntry::new(3, "认知测试问卷"),
    CodeEntry::new(4, "情感调查问卷"),
    CodeEntry::new(5, "社交评估问卷"),
    CodeEntry::new(6, "家长反馈问卷"),
    CodeEntry::new(7, "教师评估问卷"),
];

static ARTICLE_STATUS: [CodeEntry; 2] = [
    CodeEntry::colored(1, "发布", "success"),
    CodeEntry::colored(0, "下架", "default"),
];

static RESULT_STATUS: [CodeEntry; 2] = [
    CodeEntry::colored(0, "进行中", "processing"),
    CodeEntry::colored(1, "已完成", "success"),
];

static CAROUSEL_TYPE: [CodeEntry; 2] = [
    CodeEntry::new(1, "跳转链接"),
    CodeEntry::new(2, "弹窗"),
];

static APPOINTMENT: [CodeEntry; 2] = [CodeEntry::new(1, "是"), CodeEntry::new(0, "否")];

pub static ASSESSMENT_STATUS_TABLE: CodeTable =
    CodeTable::new("assessment-status", &ASSESSMENT_STATUS);
pub static QUESTIONNAIRE_STATUS_TABLE: CodeTable =
    CodeTable::new("questionnaire-status", &QUESTIONNAIRE_STATUS);
pub static ASSESSMENT_TYPE_TABLE: CodeTable = CodeTable::new("assessment-type", &ASSESSMENT_TYPE);
pub static QUESTIONNAIRE_TYPE_TABLE: CodeTable =
    CodeTable::new("questionnaire-type", &QUESTIONNAIRE_TYPE);
pub static ARTICLE_STATUS_TABLE: CodeTable = CodeTable::new("article-status", &ARTICLE_STATUS);
pub static RESULT_STATUS_TABLE: CodeTable = CodeTable::new("result-status", &RESULT_STATUS);
pub static CAROUSEL_TYPE_TABLE: CodeTable = CodeTable::new("carousel-type", &CAROUSEL_TYPE);
pub static APPOINTMENT_TABLE: CodeTable = CodeTable::new("appointment", &APPOINTMENT);

impl Category {
    pub fn status_table(self) -> &'static CodeTable {
        match self {
            Self::Assessment => &ASSESSMENT_STATUS_TABLE,
            Self::Questionnaire => &QUESTIONNAIRE_STATUS_TABLE,
        }
    }

    pub fn type_table(self) -> &'static CodeTable {
        match self {
            Self::Assessment => &ASSESSMENT_TYPE_TABLE,
            Self::Questionnaire => &QUESTIONNAIRE_TYPE_TABLE,
        }
    }
}

/// Every numeric table, in the order dictionaries are listed.
pub fn all_tables() -> [&'static CodeTable; 8] {
    [
        &ASSESSMENT_STATUS_TABLE,
        &QUESTIONNAIRE_STATUS_TABLE,
        &ASSESSMENT_TYPE_TABLE,
        &QUESTIONNAIRE_TYPE_TABLE,
        &ARTICLE_STATUS_TABLE,
        &RESULT_STATUS_TABLE,
        &CAROUSEL_TYPE_TABLE,
        &APPOINTMENT_TABLE,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn values_are_unique_within_each_table() {
        for table in all_tables() {
            let mut seen = HashSet::new();
            for entry in table.entries() {
                assert!(
                    seen.insert(entry.value),
                    "duplicate value {} in {}",
                    entry.value,
                    table.name()
                );
            }
        }
    }

    #[test]
    fn table_names_are_unique() {
        let names: HashSet<_> = all_tables().iter().map(|table| table.name()).collect();
        assert_eq!(names.len(), all_tables().len());
    }

    #[test]
    fn status_tables_carry_colors() {
        for category in Category::all() {
            assert!(category
                .status_table()
                .entries()
                .iter()
                .all(|entry| entry.color.is_some()));
        }
    }

    #[test]
    fn category_selects_its_own_tables() {
        assert_eq!(Category::Assessment.type_table().entries().len(), 5);
        assert_eq!(Category::Questionnaire.type_table().entries().len(), 7);
        assert_eq!(
            Category::Questionnaire.status_table().find(2).map(|e| e.label),
            Some("已下线")
        );
    }
}
