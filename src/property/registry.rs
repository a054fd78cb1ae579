use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Number, Value};

use super::{PropertyType, TypeValidationError};
use crate::record::RecordId;

/// Wire format of `date` properties.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format of `datetime` properties.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Validates raw values against declared property types.
///
/// Implementations must be pure: the same input always yields the same
/// output and nothing outside the call is touched.
pub trait TypeRegistry: Send + Sync {
    fn validate_and_convert(
        &self,
        raw: &Value,
        declared: PropertyType,
    ) -> Result<Value, TypeValidationError>;
}

impl<R: TypeRegistry + ?Sized> TypeRegistry for &R {
    fn validate_and_convert(
        &self,
        raw: &Value,
        declared: PropertyType,
    ) -> Result<Value, TypeValidationError> {
        (**self).validate_and_convert(raw, declared)
    }
}

/// The default registry. Always attempts a conversion before rejecting a
/// value; `null` is accepted for every type.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTypes;

impl TypeRegistry for StandardTypes {
    fn validate_and_convert(
        &self,
        raw: &Value,
        declared: PropertyType,
    ) -> Result<Value, TypeValidationError> {
        if raw.is_null() {
            return Ok(Value::Null);
        }

        match declared {
            PropertyType::Boolean => to_boolean(raw),
            PropertyType::Short => to_integer(raw, declared, i16::MIN.into(), i16::MAX.into()),
            PropertyType::Integer => to_integer(raw, declared, i32::MIN.into(), i32::MAX.into()),
            PropertyType::Long => to_integer(raw, declared, i64::MIN, i64::MAX),
            PropertyType::Float => to_float(raw, declared, f32::MAX.into()),
            PropertyType::Double => to_float(raw, declared, f64::MAX),
            PropertyType::String => to_string(raw),
            PropertyType::Date => to_date(raw),
            PropertyType::DateTime => to_datetime(raw),
            PropertyType::Link => to_link(raw),
            PropertyType::EmbeddedList => match raw {
                Value::Array(_) => Ok(raw.clone()),
                _ => Err(TypeValidationError::new(declared, raw, "expected an array")),
            },
            PropertyType::EmbeddedMap => match raw {
                Value::Object(_) => Ok(raw.clone()),
                _ => Err(TypeValidationError::new(declared, raw, "expected an object")),
            },
        }
    }
}

fn to_boolean(raw: &Value) -> Result<Value, TypeValidationError> {
    let invalid = || TypeValidationError::new(PropertyType::Boolean, raw, "not a boolean");
    match raw {
        Value::Bool(_) => Ok(raw.clone()),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(Value::Bool(true)),
            "false" | "0" => Ok(Value::Bool(false)),
            _ => Err(invalid()),
        },
        Value::Number(n) => match n.as_i64() {
            Some(0) => Ok(Value::Bool(false)),
            Some(1) => Ok(Value::Bool(true)),
            _ => Err(invalid()),
        },
        _ => Err(invalid()),
    }
}

fn to_integer(
    raw: &Value,
    declared: PropertyType,
    min: i64,
    max: i64,
) -> Result<Value, TypeValidationError> {
    let value = match raw {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if n.is_u64() {
                return Err(TypeValidationError::new(declared, raw, "out of range"));
            } else {
                let f = n.as_f64().unwrap_or(f64::NAN);
                if f.fract() != 0.0 || !f.is_finite() {
                    return Err(TypeValidationError::new(declared, raw, "not an integral number"));
                }
                if f < i64::MIN as f64 || f >= i64::MAX as f64 {
                    return Err(TypeValidationError::new(declared, raw, "out of range"));
                }
                f as i64
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| TypeValidationError::new(declared, raw, e.to_string()))?,
        _ => return Err(TypeValidationError::new(declared, raw, "not a number")),
    };

    if value < min || value > max {
        return Err(TypeValidationError::new(
            declared,
            raw,
            format!("out of range {}..={}", min, max),
        ));
    }
    Ok(Value::from(value))
}

fn to_float(raw: &Value, declared: PropertyType, max: f64) -> Result<Value, TypeValidationError> {
    let value = match raw {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| TypeValidationError::new(declared, raw, e.to_string()))?,
        _ => return Err(TypeValidationError::new(declared, raw, "not a number")),
    };

    if !value.is_finite() || value.abs() > max {
        return Err(TypeValidationError::new(declared, raw, "not a finite number in range"));
    }
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| TypeValidationError::new(declared, raw, "not representable"))
}

fn to_string(raw: &Value) -> Result<Value, TypeValidationError> {
    match raw {
        Value::String(_) => Ok(raw.clone()),
        Value::Number(n) => Ok(Value::String(n.to_string())),
        Value::Bool(b) => Ok(Value::String(b.to_string())),
        _ => Err(TypeValidationError::new(
            PropertyType::String,
            raw,
            "arrays and objects are not strings",
        )),
    }
}

fn from_epoch_millis(raw: &Value, declared: PropertyType) -> Result<NaiveDateTime, TypeValidationError> {
    raw.as_i64()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| TypeValidationError::new(declared, raw, "not a valid epoch timestamp in milliseconds"))
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc()))
}

fn to_date(raw: &Value) -> Result<Value, TypeValidationError> {
    let date = match raw {
        Value::String(s) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
            .ok()
            .or_else(|| parse_datetime(s).map(|dt| dt.date()))
            .ok_or_else(|| {
                TypeValidationError::new(PropertyType::Date, raw, "expected YYYY-MM-DD")
            })?,
        Value::Number(_) => from_epoch_millis(raw, PropertyType::Date)?.date(),
        _ => return Err(TypeValidationError::new(PropertyType::Date, raw, "not a date")),
    };
    Ok(Value::String(date.format(DATE_FORMAT).to_string()))
}

fn to_datetime(raw: &Value) -> Result<Value, TypeValidationError> {
    let datetime = match raw {
        Value::String(s) => parse_datetime(s)
            .or_else(|| {
                NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
            .ok_or_else(|| {
                TypeValidationError::new(
                    PropertyType::DateTime,
                    raw,
                    "expected YYYY-MM-DD HH:MM:SS or RFC 3339",
                )
            })?,
        Value::Number(_) => from_epoch_millis(raw, PropertyType::DateTime)?,
        _ => return Err(TypeValidationError::new(PropertyType::DateTime, raw, "not a datetime")),
    };
    Ok(Value::String(datetime.format(DATETIME_FORMAT).to_string()))
}

fn to_link(raw: &Value) -> Result<Value, TypeValidationError> {
    raw.as_str()
        .and_then(|s| s.trim().parse::<RecordId>().ok())
        .map(|rid| Value::String(rid.to_string()))
        .ok_or_else(|| TypeValidationError::new(PropertyType::Link, raw, "expected a record id like #12:2"))
}
