use serde::Deserialize;
use serde_json::{Map, Value};

use super::domain::{evaluation_note_in_range, EmployeeId, EmployeeRecord, YesNo};

/// Loosely-typed employee fields as submitted by a client, keyed by dataset column name.
pub type RawEmployeeFields = Map<String, Value>;

const ID_KEY: &str = "id";
const ID_ALIAS: &str = "EmployeeNumber";
const SCORE_KEY: &str = "score";
const ATTRITION_KEY: &str = "Attrition";

/// Body of an employee registration request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EmployeeSubmission {
    /// Ask the store to pick the next free id instead of using the supplied one.
    #[serde(default)]
    pub auto_id: bool,
    #[serde(flatten)]
    pub fields: RawEmployeeFields,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdmissionError {
    #[error("invalid ID format")]
    InvalidId,
    #[error("ID {0} already exists, please choose another one")]
    DuplicateId(EmployeeId),
    #[error("invalid employee fields: {0}")]
    InvalidFields(String),
    #[error("evaluation note must be between 0 and 10 (found {0})")]
    EvaluationNoteOutOfRange(f64),
    #[error("no employee id left to assign")]
    IdExhausted,
}

/// Validate a submission against the ids already in the store and build the record to insert.
///
/// With `auto_id` the record gets `max(existing) + 1` (1 on an empty store) and any
/// supplied id is discarded. Otherwise the supplied id must be a positive integer, given
/// as a JSON number or a numeric string, that is not already taken. `score` defaults to
/// `0.0` and `Attrition` to `"No"`. Every other field passes through as supplied, and
/// fields left out stay absent on the record.
pub fn admit(
    mut fields: RawEmployeeFields,
    auto_id: bool,
    existing_ids: &[EmployeeId],
) -> Result<EmployeeRecord, AdmissionError> {
    let supplied = fields
        .remove(ID_KEY)
        .or_else(|| fields.remove(ID_ALIAS));
    fields.remove(ID_ALIAS);

    let id = if auto_id {
        next_id(existing_ids)?
    } else {
        let id = supplied
            .as_ref()
            .and_then(parse_id)
            .ok_or(AdmissionError::InvalidId)?;
        if existing_ids.contains(&id) {
            return Err(AdmissionError::DuplicateId(id));
        }
        id
    };

    fields.insert(ID_KEY.to_string(), Value::from(id.0));
    fill_default(&mut fields, SCORE_KEY, Value::from(0.0));
    fill_default(&mut fields, ATTRITION_KEY, Value::from(YesNo::No.label()));

    let record: EmployeeRecord = serde_json::from_value(Value::Object(fields))
        .map_err(|error| AdmissionError::InvalidFields(error.to_string()))?;

    if let Some(note) = record.evaluation_note {
        if !evaluation_note_in_range(note) {
            return Err(AdmissionError::EvaluationNoteOutOfRange(note));
        }
    }
    if !record.score.is_finite() {
        return Err(AdmissionError::InvalidFields(
            "score must be a finite number".to_string(),
        ));
    }

    Ok(record)
}

/// `max + 1`, or 1 when nothing is stored yet.
pub fn next_id(existing_ids: &[EmployeeId]) -> Result<EmployeeId, AdmissionError> {
    match existing_ids.iter().max() {
        None => Ok(EmployeeId(1)),
        Some(max) => max
            .0
            .checked_add(1)
            .map(EmployeeId)
            .ok_or(AdmissionError::IdExhausted),
    }
}

fn parse_id(value: &Value) -> Option<EmployeeId> {
    let raw = match value {
        Value::Number(number) => {
            if let Some(integer) = number.as_u64() {
                integer
            } else {
                let float = number.as_f64()?;
                if float.fract() != 0.0 || float < 0.0 {
                    return None;
                }
                float as u64
            }
        }
        Value::String(text) => text.trim().parse::<u64>().ok()?,
        _ => return None,
    };

    if raw == 0 {
        return None;
    }
    u32::try_from(raw).ok().map(EmployeeId)
}

fn fill_default(fields: &mut RawEmployeeFields, key: &str, default: Value) {
    match fields.get(key) {
        Some(Value::Null) | None => {
            fields.insert(key.to_string(), default);
        }
        Some(_) => {}
    }
}
