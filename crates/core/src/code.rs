use serde::Deserialize;

/// Status or type code as received from the backend, before any interpretation.
///
/// Backend payloads are loosely typed: the same field can carry `1`, `1.0`,
/// `"1"` or nothing at all. Lookups pick one of two conversions:
/// [`RawCode::exact`] for strict numeric identity and [`RawCode::coerced`] when
/// numeric-looking text should count as a number.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(untagged)]
pub enum RawCode {
    Int(i64),
    Float(f64),
    Text(String),
    #[default]
    Missing,
}

impl RawCode {
    /// Interprets a query-string value: integer first, then float, else text.
    pub fn from_query(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Missing;
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::Int(value);
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Self::Float(value),
            Err(_) => Self::Text(raw.to_string()),
        }
    }

    /// Numeric value under strict identity. Text never matches.
    pub fn exact(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Float(value) => integral(*value),
            Self::Text(_) | Self::Missing => None,
        }
    }

    /// Numeric value after coercing numeric-looking text.
    ///
    /// Decimal, exponent and `0x`/`0o`/`0b` prefixed forms are accepted, so
    /// `"0x1"` and `"1e0"` both coerce to `1`.
    pub fn coerced(&self) -> Option<i64> {
        match self {
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| radix_prefixed(trimmed))
                    .or_else(|| trimmed.parse::<f64>().ok().and_then(integral))
            }
            other => other.exact(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

fn radix_prefixed(text: &str) -> Option<i64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    // signs are not allowed after a radix prefix
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    i64::from_str_radix(digits, radix).ok()
}

fn integral(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

impl From<i64> for RawCode {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for RawCode {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for RawCode {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for RawCode {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawCode {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<RawCode>> From<Option<T>> for RawCode {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_rejects_text_and_fractions() {
        assert_eq!(RawCode::Int(2).exact(), Some(2));
        assert_eq!(RawCode::Float(2.0).exact(), Some(2));
        assert_eq!(RawCode::Float(1.5).exact(), None);
        assert_eq!(RawCode::Float(f64::NAN).exact(), None);
        assert_eq!(RawCode::from("2").exact(), None);
        assert_eq!(RawCode::Missing.exact(), None);
    }

    #[test]
    fn coerced_accepts_numeric_text() {
        assert_eq!(RawCode::from("3").coerced(), Some(3));
        assert_eq!(RawCode::from(" 4 ").coerced(), Some(4));
        assert_eq!(RawCode::from("5.0").coerced(), Some(5));
        assert_eq!(RawCode::from("5.5").coerced(), None);
        assert_eq!(RawCode::from("").coerced(), None);
        assert_eq!(RawCode::from("abc").coerced(), None);
    }

    #[test]
    fn coerced_accepts_radix_prefixes() {
        assert_eq!(RawCode::from("0x1").coerced(), Some(1));
        assert_eq!(RawCode::from("0X1f").coerced(), Some(31));
        assert_eq!(RawCode::from("0o7").coerced(), Some(7));
        assert_eq!(RawCode::from("0b11").coerced(), Some(3));
        assert_eq!(RawCode::from("1e0").coerced(), Some(1));
        assert_eq!(RawCode::from("0x").coerced(), None);
        assert_eq!(RawCode::from("-0x1").coerced(), None);
        assert_eq!(RawCode::from("0x-1").coerced(), None);
        assert_eq!(RawCode::from("0b2").coerced(), None);
        assert_eq!(RawCode::from("0x1").exact(), None);
    }

    #[test]
    fn query_radix_text_coerces() {
        let code = RawCode::from_query("0x1");
        assert_eq!(code, RawCode::Text("0x1".into()));
        assert_eq!(code.coerced(), Some(1));
    }

    #[test]
    fn deserializes_loose_json_values() {
        let codes: Vec<RawCode> =
            serde_json::from_str(r#"[1, 2.5, "3", null]"#).expect("valid json");
        assert_eq!(
            codes,
            vec![
                RawCode::Int(1),
                RawCode::Float(2.5),
                RawCode::Text("3".into()),
                RawCode::Missing,
            ]
        );
    }

    #[test]
    fn query_values_prefer_integers() {
        assert_eq!(RawCode::from_query("7"), RawCode::Int(7));
        assert_eq!(RawCode::from_query("-1"), RawCode::Int(-1));
        assert_eq!(RawCode::from_query("0.5"), RawCode::Float(0.5));
        assert_eq!(RawCode::from_query("draft"), RawCode::Text("draft".into()));
        assert!(RawCode::from_query("  ").is_missing());
    }

    #[test]
    fn option_none_is_missing() {
        assert!(RawCode::from(None::<i64>).is_missing());
        assert_eq!(RawCode::from(Some(1)), RawCode::Int(1));
    }
}
