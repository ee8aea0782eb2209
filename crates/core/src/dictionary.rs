use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::level::level_styles;
use crate::tables::{
    APPOINTMENT_TABLE, ARTICLE_STATUS_TABLE, ASSESSMENT_STATUS_TABLE, ASSESSMENT_TYPE_TABLE,
    CAROUSEL_TYPE_TABLE, QUESTIONNAIRE_STATUS_TABLE, QUESTIONNAIRE_TYPE_TABLE,
    RESULT_STATUS_TABLE, UNKNOWN_TYPE,
};
use crate::types::{CodeTable, ParseTagError};

/// Kind of legal agreement shown in the platform settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyType {
    PrivacyPolicy,
    ServiceAgreement,
}

impl PolicyType {
    pub fn code(self) -> &'static str {
        match self {
            Self::PrivacyPolicy => "privacy_policy",
            Self::ServiceAgreement => "service_agreement",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PrivacyPolicy => "隐私协议",
            Self::ServiceAgreement => "服务协议",
        }
    }

    pub fn all() -> [PolicyType; 2] {
        [Self::PrivacyPolicy, Self::ServiceAgreement]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "privacy_policy" => Some(Self::PrivacyPolicy),
            "service_agreement" => Some(Self::ServiceAgreement),
            _ => None,
        }
    }
}

/// Label for a raw policy type code, or `未知类型` when the code is not listed.
pub fn policy_type_label(code: &str) -> &'static str {
    PolicyType::from_code(code.trim())
        .map(PolicyType::label)
        .unwrap_or(UNKNOWN_TYPE)
}

/// Value of a select option: numeric codes and string keys share one list shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Code(i64),
    Key(&'static str),
}

/// One entry of a select component's option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DictOption {
    pub value: OptionValue,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
}

/// Named option lists served to admin forms and tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dictionary {
    AssessmentStatus,
    QuestionnaireStatus,
    AssessmentType,
    QuestionnaireType,
    ArticleStatus,
    ResultStatus,
    CarouselType,
    Appointment,
    PolicyType,
    ResultLevel,
}

impl Dictionary {
    pub fn all() -> [Dictionary; 10] {
        [
            Self::AssessmentStatus,
            Self::QuestionnaireStatus,
            Self::AssessmentType,
            Self::QuestionnaireType,
            Self::ArticleStatus,
            Self::ResultStatus,
            Self::CarouselType,
            Self::Appointment,
            Self::PolicyType,
            Self::ResultLevel,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::PolicyType => "policy-type",
            Self::ResultLevel => "result-level",
            Self::AssessmentStatus
            | Self::QuestionnaireStatus
            | Self::AssessmentType
            | Self::QuestionnaireType
            | Self::ArticleStatus
            | Self::ResultStatus
            | Self::CarouselType
            | Self::Appointment => self.table().map(CodeTable::name).unwrap_or_default(),
        }
    }

    /// Backing numeric table, when the dictionary has one.
    pub fn table(self) -> Option<&'static CodeTable> {
        match self {
            Self::AssessmentStatus => Some(&ASSESSMENT_STATUS_TABLE),
            Self::QuestionnaireStatus => Some(&QUESTIONNAIRE_STATUS_TABLE),
            Self::AssessmentType => Some(&ASSESSMENT_TYPE_TABLE),
            Self::QuestionnaireType => Some(&QUESTIONNAIRE_TYPE_TABLE),
            Self::ArticleStatus => Some(&ARTICLE_STATUS_TABLE),
            Self::ResultStatus => Some(&RESULT_STATUS_TABLE),
            Self::CarouselType => Some(&CAROUSEL_TYPE_TABLE),
            Self::Appointment => Some(&APPOINTMENT_TABLE),
            Self::PolicyType | Self::ResultLevel => None,
        }
    }

    /// Ordered option list for this dictionary.
    pub fn options(self) -> Vec<DictOption> {
        match self {
            Self::PolicyType => PolicyType::all()
                .into_iter()
                .map(|policy| DictOption {
                    value: OptionValue::Key(policy.code()),
                    label: policy.label(),
                    color: None,
                })
                .collect(),
            Self::ResultLevel => level_styles()
                .iter()
                .map(|entry| DictOption {
                    value: OptionValue::Key(entry.level),
                    label: entry.level,
                    color: entry.progress,
                })
                .collect(),
            Self::AssessmentStatus
            | Self::QuestionnaireStatus
            | Self::AssessmentType
            | Self::QuestionnaireType
            | Self::ArticleStatus
            | Self::ResultStatus
            | Self::CarouselType
            | Self::Appointment => self.table().map(table_options).unwrap_or_default(),
        }
    }
}

fn table_options(table: &'static CodeTable) -> Vec<DictOption> {
    table
        .entries()
        .iter()
        .map(|entry| DictOption {
            value: OptionValue::Code(entry.value),
            label: entry.label,
            color: entry.color,
        })
        .collect()
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dictionary {
    type Err = ParseTagError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|dictionary| dictionary.name() == value)
            .ok_or_else(|| ParseTagError::UnknownDictionary(value.to_string()))
    }
}
