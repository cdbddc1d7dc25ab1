//! # Objective Records
//!
//! An [`ObjectiveRecord`] is one learning objective: a level and verb picked from the
//! catalog, free-text condition/task/degree fragments, and the outcome codes it is
//! tagged against. Records are only ever built through validating constructors, so
//! holding one means every field is well-formed.
//!
//! A record does not know whether its codes exist in any catalog. That check happens
//! when it is rendered against one, and a dangling code fails the render.
//!
//! ## Sentence Composition
//!
//! ```text
//! [<condition>, ]the student will be able to <verb> <task> [<degree>].
//! ```
//!
//! Whitespace is collapsed, so empty optional fragments leave no gaps, the first
//! character is capitalized, and the sentence ends with exactly one period.
//!
//! ## Wire Shape
//!
//! [`RawObjective`] is the plain-data form used for import and export:
//!
//! ```text
//! { "level": "1", "verb": "0", "condition": "", "task": "...", "degree": "", "ABET_ids": ["2"] }
//! ```

use crate::catalog::CatalogIndex;
use crate::code::Code;
use crate::error::{Field, LobzError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const ACTION_PREFIX: &str = "the student will be able to";

/// Punctuation dropped from the end of a sentence before the closing period.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Plain-data form of a record, with the fixed wire field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawObjective {
    #[serde(default)]
    pub condition: String,
    pub level: String,
    pub verb: String,
    pub task: String,
    #[serde(default)]
    pub degree: String,
    #[serde(rename = "ABET_ids")]
    pub outcome_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectiveRecord {
    level: Code,
    verb: Code,
    condition: String,
    task: String,
    degree: String,
    outcome_ids: Vec<Code>,
}

impl ObjectiveRecord {
    /// Builds a validated record. Empty `condition`/`degree` mean "absent".
    pub fn new<I, S>(
        level: &str,
        verb: &str,
        condition: impl Into<String>,
        task: impl Into<String>,
        degree: impl Into<String>,
        outcome_ids: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let level = parse_field_code(Field::Level, level)?;
        let verb = parse_field_code(Field::Verb, verb)?;

        let task = task.into();
        if task.trim().is_empty() {
            return Err(LobzError::validation(Field::Task, task, "must not be empty"));
        }
        if !task.chars().any(char::is_alphanumeric) {
            return Err(LobzError::validation(
                Field::Task,
                task,
                "must contain a letter or digit",
            ));
        }

        let outcome_ids = outcome_ids
            .into_iter()
            .map(|id| {
                let id = id.as_ref();
                Code::parse(id).ok_or_else(|| {
                    LobzError::validation(Field::OutcomeIds, id, "entries must be integer strings")
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            level,
            verb,
            condition: condition.into(),
            task,
            degree: degree.into(),
            outcome_ids,
        })
    }

    /// Builds a record from an untyped plain object, checking each field's shape.
    ///
    /// A value that is not an object at all is a [`LobzError::Type`]; a field with the
    /// wrong shape (e.g. a scalar where the outcome list belongs) is a
    /// [`LobzError::Validation`] naming that field.
    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = value.as_object().ok_or(LobzError::Type {
            expected: "a record object",
            found: json_kind(value),
        })?;

        let level = required_str(obj, Field::Level)?;
        let verb = required_str(obj, Field::Verb)?;
        let task = required_str(obj, Field::Task)?;
        let condition = optional_str(obj, Field::Condition)?;
        let degree = optional_str(obj, Field::Degree)?;

        let outcome_ids = match obj.get(Field::OutcomeIds.wire_name()) {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str().ok_or_else(|| {
                        LobzError::validation(
                            Field::OutcomeIds,
                            item.to_string(),
                            "entries must be integer strings",
                        )
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            Some(other) => {
                return Err(LobzError::validation(
                    Field::OutcomeIds,
                    other.to_string(),
                    "must be a list of outcome ids",
                ))
            }
            None => {
                return Err(LobzError::validation(Field::OutcomeIds, "", "is required"));
            }
        };

        Self::new(level, verb, condition, task, degree, outcome_ids)
    }

    pub fn level(&self) -> &Code {
        &self.level
    }

    pub fn verb(&self) -> &Code {
        &self.verb
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn degree(&self) -> &str {
        &self.degree
    }

    pub fn outcome_ids(&self) -> &[Code] {
        &self.outcome_ids
    }

    /// Renders the record as a sentence, resolving its verb through `catalog`.
    pub fn render(&self, catalog: &CatalogIndex) -> Result<String> {
        let verb = catalog.get_verb(self.level.as_str(), self.verb.as_str())?;

        let mut composed = String::new();
        let condition = self.condition.trim().trim_end_matches(',').trim_end();
        if !condition.is_empty() {
            composed.push_str(condition);
            composed.push_str(", ");
        }
        for part in [ACTION_PREFIX, verb, self.task.as_str(), self.degree.as_str()] {
            composed.push_str(part);
            composed.push(' ');
        }

        let collapsed = composed.split_whitespace().collect::<Vec<_>>().join(" ");
        let body = collapsed
            .trim_end_matches(|c: char| TRAILING_PUNCTUATION.contains(&c) || c.is_whitespace());

        let mut sentence = capitalize_first(body);
        sentence.push('.');
        Ok(sentence)
    }

    /// Labels of the outcomes this record is tagged with, in stored order.
    pub fn outcome_labels<'c>(&self, catalog: &'c CatalogIndex) -> Result<Vec<&'c str>> {
        self.outcome_ids
            .iter()
            .map(|id| catalog.get_outcome(id.as_str()))
            .collect()
    }

    pub fn to_raw(&self) -> RawObjective {
        RawObjective {
            condition: self.condition.clone(),
            level: self.level.to_string(),
            verb: self.verb.to_string(),
            task: self.task.clone(),
            degree: self.degree.clone(),
            outcome_ids: self.outcome_ids.iter().map(Code::to_string).collect(),
        }
    }
}

impl TryFrom<RawObjective> for ObjectiveRecord {
    type Error = LobzError;

    fn try_from(raw: RawObjective) -> Result<Self> {
        Self::new(
            &raw.level,
            &raw.verb,
            raw.condition,
            raw.task,
            raw.degree,
            raw.outcome_ids,
        )
    }
}

fn parse_field_code(field: Field, value: &str) -> Result<Code> {
    if value.is_empty() {
        return Err(LobzError::validation(field, value, "must not be empty"));
    }
    Code::parse(value)
        .ok_or_else(|| LobzError::validation(field, value, "must be an integer string"))
}

fn required_str(obj: &Map<String, Value>, field: Field) -> Result<&str> {
    match obj.get(field.wire_name()) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(LobzError::validation(field, other.to_string(), "must be a string")),
        None => Err(LobzError::validation(field, "", "is required")),
    }
}

fn optional_str(obj: &Map<String, Value>, field: Field) -> Result<&str> {
    match obj.get(field.wire_name()) {
        Some(Value::String(s)) => Ok(s),
        None | Some(Value::Null) => Ok(""),
        Some(other) => Err(LobzError::validation(field, other.to_string(), "must be a string")),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RefKind;
    use crate::test_utils::{record, sample_catalog};
    use serde_json::json;

    fn no_outcomes() -> Vec<String> {
        Vec::new()
    }

    #[test]
    fn renders_full_sentence() {
        let catalog = sample_catalog();
        let r = ObjectiveRecord::new(
            "3",
            "2",
            "given a linear system",
            "it by elimination",
            "with no arithmetic errors",
            ["0"],
        )
        .unwrap();
        assert_eq!(
            r.render(&catalog).unwrap(),
            "Given a linear system, the student will be able to solve it by elimination with no arithmetic errors."
        );
    }

    #[test]
    fn empty_condition_and_degree_leave_no_gaps() {
        let catalog = sample_catalog();
        let r = record("1", "0", "", "the term entropy", "");
        let sentence = r.render(&catalog).unwrap();
        assert_eq!(sentence, "The student will be able to define the term entropy.");
        assert!(!sentence.contains("  "));
        assert!(!sentence.starts_with(','));
    }

    #[test]
    fn whitespace_only_fragments_count_as_absent() {
        let catalog = sample_catalog();
        let r = record("1", "1", "   ", "the planets", " ");
        assert_eq!(
            r.render(&catalog).unwrap(),
            "The student will be able to list the planets."
        );
    }

    #[test]
    fn trailing_punctuation_becomes_one_period() {
        let catalog = sample_catalog();
        for task in ["the term.", "the term..", "the term?", "the term ;"] {
            let r = record("1", "0", "", task, "");
            let sentence = r.render(&catalog).unwrap();
            assert_eq!(sentence, "The student will be able to define the term.");
        }
    }

    #[test]
    fn condition_comma_is_not_doubled() {
        let catalog = sample_catalog();
        let r = record("1", "0", "in class,", "the term", "");
        assert_eq!(
            r.render(&catalog).unwrap(),
            "In class, the student will be able to define the term."
        );
    }

    #[test]
    fn lowercase_condition_is_capitalized() {
        let catalog = sample_catalog();
        let r = record("2", "0", "éventuellement", "energy", "");
        assert!(r.render(&catalog).unwrap().starts_with('É'));
    }

    #[test]
    fn render_is_repeatable_and_leaves_record_untouched() {
        let catalog = sample_catalog();
        let r = record("3", "1", "with a calculator", "logarithms", "accurately");
        let before = r.clone();
        let first = r.render(&catalog).unwrap();
        let second = r.render(&catalog).unwrap();
        assert_eq!(first, second);
        assert_eq!(r, before);
        assert_eq!(catalog, sample_catalog());
    }

    #[test]
    fn dangling_verb_fails_render() {
        let catalog = sample_catalog();
        let r = record("2", "9", "", "things", "");
        assert!(matches!(
            r.render(&catalog),
            Err(LobzError::NotFound {
                kind: RefKind::Verb,
                ..
            })
        ));
    }

    #[test]
    fn dangling_level_fails_render() {
        let catalog = sample_catalog();
        let r = record("42", "0", "", "things", "");
        assert!(matches!(
            r.render(&catalog),
            Err(LobzError::NotFound {
                kind: RefKind::Level,
                ..
            })
        ));
    }

    #[test]
    fn rejects_empty_level() {
        let err = ObjectiveRecord::new("", "0", "", "task", "", no_outcomes()).unwrap_err();
        assert!(matches!(
            err,
            LobzError::Validation {
                field: Field::Level,
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_numeric_codes() {
        let err = ObjectiveRecord::new("1", "3abc", "", "task", "", no_outcomes()).unwrap_err();
        assert!(matches!(
            err,
            LobzError::Validation {
                field: Field::Verb,
                ..
            }
        ));

        let err = ObjectiveRecord::new("one", "0", "", "task", "", no_outcomes()).unwrap_err();
        assert!(matches!(
            err,
            LobzError::Validation {
                field: Field::Level,
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty_task() {
        for task in ["", "   "] {
            let err = ObjectiveRecord::new("1", "0", "", task, "", no_outcomes()).unwrap_err();
            assert!(matches!(
                err,
                LobzError::Validation {
                    field: Field::Task,
                    ..
                }
            ));
        }
    }

    #[test]
    fn rejects_punctuation_only_task() {
        for task in ["?", " ... ", ",;!"] {
            let err = ObjectiveRecord::new("1", "0", "", task, "", no_outcomes()).unwrap_err();
            assert!(matches!(
                err,
                LobzError::Validation {
                    field: Field::Task,
                    reason: "must contain a letter or digit",
                    ..
                }
            ));
        }
        assert!(ObjectiveRecord::new("1", "0", "", "C++?", "", no_outcomes()).is_ok());
    }

    #[test]
    fn rejects_malformed_outcome_entry() {
        let err = ObjectiveRecord::new("1", "0", "", "task", "", ["2", "b"]).unwrap_err();
        assert!(matches!(
            err,
            LobzError::Validation {
                field: Field::OutcomeIds,
                ..
            }
        ));
    }

    #[test]
    fn from_value_rejects_scalar_outcomes() {
        let value = json!({ "level": "1", "verb": "0", "task": "t", "ABET_ids": "3" });
        let err = ObjectiveRecord::from_value(&value).unwrap_err();
        assert!(matches!(
            err,
            LobzError::Validation {
                field: Field::OutcomeIds,
                ..
            }
        ));
    }

    #[test]
    fn from_value_rejects_null_or_missing_outcomes() {
        for value in [
            json!({ "level": "1", "verb": "0", "task": "t", "ABET_ids": null }),
            json!({ "level": "1", "verb": "0", "task": "t" }),
        ] {
            assert!(matches!(
                ObjectiveRecord::from_value(&value),
                Err(LobzError::Validation {
                    field: Field::OutcomeIds,
                    ..
                })
            ));
        }
    }

    #[test]
    fn from_value_rejects_numeric_level() {
        let value = json!({ "level": 1, "verb": "0", "task": "t", "ABET_ids": [] });
        assert!(matches!(
            ObjectiveRecord::from_value(&value),
            Err(LobzError::Validation {
                field: Field::Level,
                ..
            })
        ));
    }

    #[test]
    fn from_value_rejects_non_string_condition() {
        let value = json!({ "level": "1", "verb": "0", "condition": 4, "task": "t", "ABET_ids": [] });
        assert!(matches!(
            ObjectiveRecord::from_value(&value),
            Err(LobzError::Validation {
                field: Field::Condition,
                ..
            })
        ));
    }

    #[test]
    fn from_value_rejects_non_objects() {
        for value in [json!(3), json!("record"), json!([1, 2]), json!(null)] {
            assert!(matches!(
                ObjectiveRecord::from_value(&value),
                Err(LobzError::Type { .. })
            ));
        }
    }

    #[test]
    fn from_value_defaults_missing_optionals() {
        let value = json!({ "level": "1", "verb": "0", "task": "t", "ABET_ids": ["1"] });
        let r = ObjectiveRecord::from_value(&value).unwrap();
        assert_eq!(r.condition(), "");
        assert_eq!(r.degree(), "");
        assert_eq!(r.outcome_ids(), &[Code::from(1)]);
    }

    #[test]
    fn plain_form_round_trips() {
        let r = ObjectiveRecord::new("07", "1", "cond", "task", "deg", ["2", "0", "2"]).unwrap();
        let raw = r.to_raw();
        assert_eq!(raw.level, "07");
        assert_eq!(raw.outcome_ids, vec!["2", "0", "2"]);
        assert_eq!(ObjectiveRecord::try_from(raw).unwrap(), r);
    }

    #[test]
    fn wire_shape_uses_abet_ids() {
        let r = record("1", "0", "", "task", "");
        let value = serde_json::to_value(r.to_raw()).unwrap();
        assert_eq!(
            value,
            json!({
                "condition": "",
                "level": "1",
                "verb": "0",
                "task": "task",
                "degree": "",
                "ABET_ids": ["0"],
            })
        );
        assert_eq!(ObjectiveRecord::from_value(&value).unwrap(), r);
    }

    #[test]
    fn outcome_labels_follow_stored_order() {
        let catalog = sample_catalog();
        let r = ObjectiveRecord::new("1", "0", "", "t", "", ["2", "0"]).unwrap();
        let labels = r.outcome_labels(&catalog).unwrap();
        assert_eq!(labels.len(), 2);
        assert!(labels[0].starts_with("an ability to communicate"));

        let dangling = ObjectiveRecord::new("1", "0", "", "t", "", ["5"]).unwrap();
        assert!(matches!(
            dangling.outcome_labels(&catalog),
            Err(LobzError::NotFound {
                kind: RefKind::Outcome,
                ..
            })
        ));
    }
}
