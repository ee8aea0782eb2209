use axum::{
    extract::{Path, Query},
    Json,
};
use emojump_core::{
    level::find_level, level_attr, level_style, resolve_status, resolve_type, Category,
    DictOption, Dictionary, RawCode, StatusDisplay, StyleAxis,
};
use metrics::counter;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::problem::ProblemResponse;

#[derive(Debug, Deserialize)]
pub struct CodeQuery {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

impl CodeQuery {
    fn category(&self) -> Result<Category, ProblemResponse> {
        let raw = self
            .category
            .as_deref()
            .ok_or_else(|| ProblemResponse::missing("category"))?;
        Ok(raw.trim().parse::<Category>()?)
    }

    fn code(&self) -> RawCode {
        self.code
            .as_deref()
            .map(RawCode::from_query)
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct LevelQuery {
    #[serde(default)]
    level: Option<String>,
    #[serde(default)]
    axes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LabelView {
    label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StyleView {
    value: String,
}

fn rejected(problem: ProblemResponse) -> ProblemResponse {
    counter!("lookup_rejected_total", "reason" => problem.reason()).increment(1);
    problem
}

fn record(kind: &'static str, matched: bool) {
    let outcome = if matched { "hit" } else { "fallback" };
    counter!("lookup_requests_total", "kind" => kind, "outcome" => outcome).increment(1);
}

pub async fn list_dictionaries() -> Json<Vec<&'static str>> {
    Json(Dictionary::all().into_iter().map(Dictionary::name).collect())
}

pub async fn dictionary(Path(name): Path<String>) -> Result<Json<Vec<DictOption>>, ProblemResponse> {
    let dictionary = name
        .parse::<Dictionary>()
        .map_err(|err| rejected(err.into()))?;
    counter!("dict_requests_total", "dictionary" => dictionary.name()).increment(1);
    Ok(Json(dictionary.options()))
}

pub async fn status(
    Query(query): Query<CodeQuery>,
) -> Result<Json<StatusDisplay>, ProblemResponse> {
    let category = query.category().map_err(rejected)?;
    let code = query.code();
    let resolved = resolve_status(category, code.clone());
    record("status", resolved.matched);
    if !resolved.matched {
        debug!(stage = "lookup", kind = "status", %category, ?code, "status code fell back to default");
    }

    Ok(Json(resolved.value))
}

pub async fn type_label(Query(query): Query<CodeQuery>) -> Result<Json<LabelView>, ProblemResponse> {
    let category = query.category().map_err(rejected)?;
    let code = query.code();
    let resolved = resolve_type(category, code.clone());
    record("type", resolved.matched);
    if !resolved.matched {
        debug!(stage = "lookup", kind = "type", %category, ?code, "type code fell back to default");
    }

    Ok(Json(LabelView {
        label: resolved.value,
    }))
}

pub async fn level(Query(query): Query<LevelQuery>) -> Result<Json<StyleView>, ProblemResponse> {
    let raw_axes = query
        .axes
        .as_deref()
        .ok_or_else(|| rejected(ProblemResponse::missing("axes")))?;
    let axes = StyleAxis::parse_list(raw_axes).map_err(|err| rejected(err.into()))?;
    if axes.is_empty() {
        return Err(rejected(ProblemResponse::missing("axes")));
    }

    let level = query.level.as_deref().unwrap_or_default();
    record("level", find_level(level).is_some());

    let value = match axes.as_slice() {
        [axis] => level_attr(level, *axis).to_string(),
        many => level_style(level, many),
    };
    Ok(Json(StyleView { value }))
}
