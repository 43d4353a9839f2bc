//! Input coercion
//!
//! Request bodies arrive as loosely typed JSON. These helpers apply the
//! trimming and numeric coercion rules before any domain record is built.

use serde_json::Value;

use crate::utils::errors::{AppError, AppResult};

/// How a JSON value reads as a whole amount.
#[derive(Debug, PartialEq, Eq)]
enum Amount {
    Whole(u64),
    Negative,
    Fractional,
    NotANumber,
}

fn classify_float(value: f64) -> Amount {
    if !value.is_finite() {
        Amount::NotANumber
    } else if value < 0.0 {
        Amount::Negative
    } else if value.fract() != 0.0 {
        Amount::Fractional
    } else if value > u64::MAX as f64 {
        Amount::NotANumber
    } else {
        Amount::Whole(value as u64)
    }
}

fn classify(value: &Value) -> Amount {
    match value {
        Value::Number(n) => {
            if let Some(whole) = n.as_u64() {
                Amount::Whole(whole)
            } else if n.is_i64() {
                Amount::Negative
            } else {
                n.as_f64().map(classify_float).unwrap_or(Amount::NotANumber)
            }
        }
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                Amount::NotANumber
            } else if let Ok(whole) = s.parse::<u64>() {
                Amount::Whole(whole)
            } else if let Ok(float) = s.parse::<f64>() {
                classify_float(float)
            } else {
                Amount::NotANumber
            }
        }
        _ => Amount::NotANumber,
    }
}

fn invalid_amount(field: &str) -> AppError {
    AppError::BadRequest(format!("{} must be a non-negative integer", field))
}

/// A string field that must be supplied. The result is trimmed but may be
/// empty; emptiness is checked by the model's validation.
pub fn required_text(field: &str, value: Option<Value>) -> AppResult<String> {
    match value {
        None | Some(Value::Null) => Err(AppError::BadRequest(format!("{} is required", field))),
        Some(value) => text(field, value),
    }
}

/// A string field that falls back to an empty string when absent or null.
pub fn text_or_empty(field: &str, value: Option<Value>) -> AppResult<String> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(value) => text(field, value),
    }
}

fn text(field: &str, value: Value) -> AppResult<String> {
    match value {
        Value::String(s) => Ok(s.trim().to_string()),
        _ => Err(AppError::BadRequest(format!("{} must be a string", field))),
    }
}

/// A non-negative whole amount that must be supplied, such as a price.
pub fn required_amount(field: &str, value: Option<Value>) -> AppResult<u64> {
    match value {
        None | Some(Value::Null) => Err(AppError::BadRequest(format!("{} is required", field))),
        Some(value) => match classify(&value) {
            Amount::Whole(amount) => Ok(amount),
            _ => Err(invalid_amount(field)),
        },
    }
}

/// A quantity that reads as 0 when absent, null or not numeric.
/// Negative and fractional numbers are still rejected.
pub fn quantity_or_zero(field: &str, value: Option<Value>) -> AppResult<u64> {
    let Some(value) = value else {
        return Ok(0);
    };

    match classify(&value) {
        Amount::Whole(quantity) => Ok(quantity),
        Amount::NotANumber => Ok(0),
        Amount::Negative | Amount::Fractional => Err(invalid_amount(field)),
    }
}
