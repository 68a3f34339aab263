//! Homework records: response shape validation and status translation.
//!
//! The endpoint returns `{"homeworks": [...], "current_date": <epoch>}`.
//! Records are read-only and ephemeral per cycle; the only thing we
//! produce from one is the notification text.

use crate::error::{Error, Result};
use serde_json::Value;
use std::str::FromStr;

/// Review status of a homework, as reported by the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Approved,
    Reviewing,
    Rejected,
}

impl Status {
    /// The canned verdict sentence shown to the user.
    pub fn verdict(self) -> &'static str {
        match self {
            Status::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Status::Reviewing => "Работа взята на проверку ревьюером.",
            Status::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "approved" => Ok(Status::Approved),
            "reviewing" => Ok(Status::Reviewing),
            "rejected" => Ok(Status::Rejected),
            other => Err(Error::UnknownStatus(other.to_string())),
        }
    }
}

/// Validate the response shape and return the homework list.
///
/// The top level must be an object containing a list under
/// `"homeworks"`. The list may be empty.
pub fn check_response(response: &Value) -> Result<&Vec<Value>> {
    let object = response.as_object().ok_or_else(|| Error::Shape {
        expected: "object",
        actual: json_type_name(response).to_string(),
    })?;

    match object.get("homeworks") {
        Some(Value::Array(homeworks)) => Ok(homeworks),
        Some(other) => Err(Error::Shape {
            expected: "list under \"homeworks\"",
            actual: json_type_name(other).to_string(),
        }),
        None => Err(Error::Shape {
            expected: "list under \"homeworks\"",
            actual: "missing field".to_string(),
        }),
    }
}

/// Translate one homework record into the notification text.
///
/// Requires string fields `homework_name` and `status`, and a status
/// from the known enumeration.
pub fn parse_status(homework: &Value) -> Result<String> {
    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(Error::MissingData("homework_name"))?;
    let status: Status = homework
        .get("status")
        .and_then(Value::as_str)
        .ok_or(Error::MissingData("status"))?
        .parse()?;

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    ))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
