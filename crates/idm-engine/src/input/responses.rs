//! Questionnaire response parsing
//!
//! Responses arrive in one of two shapes:
//!
//! - **Flat**: category key -> { question id -> response value }
//! - **Nested**: chapters -> dimensions -> { question id -> response value },
//!   where dimension codes may use legacy aliases that are remapped
//!   through the taxonomy before use
//!
//! The shape is decided by an explicit discriminator check (a `chapters`
//! array marks the nested form); each shape has its own pure translation
//! function and both produce the same canonical `Vec<Question>`.
//! Unknown question ids and unmapped dimension codes are dropped with a
//! warning, never an error.

use crate::error::{EngineError, Result};
use idm_core::types::Question;
use idm_core::Taxonomy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Flat form: category key -> question id -> raw value.
///
/// Ordered maps keep translation deterministic for identical inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatResponses(pub BTreeMap<String, BTreeMap<String, Value>>);

/// Nested form: chapter -> dimension -> questions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NestedResponses {
    pub chapters: Vec<NestedChapter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NestedChapter {
    pub chapter: String,
    #[serde(default)]
    pub dimensions: Vec<NestedDimension>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NestedDimension {
    pub dimension: String,
    #[serde(default)]
    pub questions: BTreeMap<String, Value>,
}

/// Tagged union over the two questionnaire shapes
#[derive(Debug, Clone)]
pub enum ResponseDocument {
    Flat(FlatResponses),
    Nested(NestedResponses),
}

impl ResponseDocument {
    /// Classify and parse an already-parsed JSON document.
    ///
    /// Discriminator: an object carrying a `chapters` array is the
    /// nested form; any other object is the flat form.
    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| EngineError::InvalidInput("responses must be a JSON object".into()))?;

        if obj.get("chapters").map(Value::is_array).unwrap_or(false) {
            let nested: NestedResponses = serde_json::from_value(value.clone())
                .map_err(|e| EngineError::InvalidInput(format!("nested responses: {}", e)))?;
            Ok(ResponseDocument::Nested(nested))
        } else {
            let flat: FlatResponses = serde_json::from_value(value.clone())
                .map_err(|e| EngineError::InvalidInput(format!("flat responses: {}", e)))?;
            Ok(ResponseDocument::Flat(flat))
        }
    }

    /// Translate either shape into the canonical question list
    pub fn canonicalize(&self, taxonomy: &Taxonomy) -> Vec<Question> {
        match self {
            ResponseDocument::Flat(flat) => translate_flat(flat, taxonomy),
            ResponseDocument::Nested(nested) => translate_nested(nested, taxonomy),
        }
    }
}

fn translate_flat(flat: &FlatResponses, taxonomy: &Taxonomy) -> Vec<Question> {
    let mut questions = Vec::new();
    for (category, entries) in &flat.0 {
        for (question_id, raw) in entries {
            match build_question(question_id, raw, taxonomy) {
                Some(q) => questions.push(q),
                None => {
                    tracing::warn!(
                        category = %category,
                        question_id = %question_id,
                        "dropping unmapped question"
                    );
                }
            }
        }
    }
    questions
}

fn translate_nested(nested: &NestedResponses, taxonomy: &Taxonomy) -> Vec<Question> {
    let mut questions = Vec::new();
    for chapter in &nested.chapters {
        for dimension in &chapter.dimensions {
            let Some(dim_code) = taxonomy.resolve_dimension_code(&dimension.dimension) else {
                tracing::warn!(
                    chapter = %chapter.chapter,
                    dimension = %dimension.dimension,
                    "dropping dimension with unmapped code"
                );
                continue;
            };
            for (question_id, raw) in &dimension.questions {
                match build_question(question_id, raw, taxonomy) {
                    // The taxonomy mapping is authoritative for placement;
                    // a mismatch with the declared dimension is only noise
                    Some(q) => {
                        if q.dimension_code != dim_code {
                            tracing::warn!(
                                question_id = %question_id,
                                declared = %dim_code,
                                mapped = %q.dimension_code,
                                "question mapped outside its declared dimension"
                            );
                        }
                        questions.push(q);
                    }
                    None => {
                        tracing::warn!(question_id = %question_id, "dropping unmapped question");
                    }
                }
            }
        }
    }
    questions
}

fn build_question(question_id: &str, raw: &Value, taxonomy: &Taxonomy) -> Option<Question> {
    let mapping = taxonomy.mapping(question_id)?;
    Some(Question {
        question_id: question_id.to_string(),
        dimension_code: mapping.dimension,
        sub_indicator_id: mapping.sub_indicator_id.clone(),
        raw_response: raw.clone(),
        normalized_score: normalize_response(raw),
    })
}

/// Normalize a raw response value onto the canonical 0-100 scale.
///
/// Typed responses: `scale` (1-5) maps via `round(((v-1)/4)*100)`,
/// `percentage` clamps to [0,100], anything else passes through only
/// when an explicit `normalized_value` is supplied. Bare numbers are
/// inferred the way the legacy webhook path did: integral 1-5 as scale,
/// 0-100 as percentage. Everything else yields `None`.
pub fn normalize_response(raw: &Value) -> Option<f64> {
    if let Some(obj) = raw.as_object() {
        let kind = obj.get("type").and_then(Value::as_str)?;
        return match kind {
            "scale" => {
                let v = obj.get("value").and_then(Value::as_f64)?;
                if (1.0..=5.0).contains(&v) {
                    Some((((v - 1.0) / 4.0) * 100.0).round())
                } else {
                    None
                }
            }
            "percentage" => {
                let v = obj.get("value").and_then(Value::as_f64)?;
                Some(v.clamp(0.0, 100.0))
            }
            _ => obj
                .get("normalized_value")
                .and_then(Value::as_f64)
                .map(|v| v.clamp(0.0, 100.0)),
        };
    }

    let v = raw.as_f64()?;
    if (1.0..=5.0).contains(&v) {
        Some((((v - 1.0) / 4.0) * 100.0).round())
    } else if (0.0..=100.0).contains(&v) {
        Some(v)
    } else {
        None
    }
}
