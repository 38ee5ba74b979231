//! Field-level coercion shared by the payload validators.
//!
//! Numbers are accepted either as JSON numbers or as strings holding a number, so
//! `"price": "2.50"` and `"quantity": "4"` are as good as their numeric forms. Booleans and
//! nulls are never numbers.

use super::error::ValidationError;
use crate::model::ProductName;
use serde_json::{Map, Value};

pub type Object = Map<String, Value>;

/// Joins a parent path and a key: `("", "price")` gives `price`,
/// `("products[0]", "quantity")` gives `products[0].quantity`.
pub fn path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

pub fn object<'a>(field: &str, value: &'a Value) -> Result<&'a Object, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::invalid(field, "must be a JSON object"))
}

pub fn require<'a>(
    fields: &'a Object,
    parent: &str,
    key: &str,
) -> Result<&'a Value, ValidationError> {
    fields
        .get(key)
        .ok_or_else(|| ValidationError::MissingField(path(parent, key)))
}

pub fn text(field: &str, value: &Value) -> Result<String, ValidationError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| ValidationError::invalid(field, "must be a string"))
}

pub fn boolean(field: &str, value: &Value) -> Result<bool, ValidationError> {
    value
        .as_bool()
        .ok_or_else(|| ValidationError::invalid(field, "must be a boolean"))
}

pub fn product_name(field: &str, value: &Value) -> Result<ProductName, ValidationError> {
    let raw = text(field, value)?;
    if raw.trim().is_empty() {
        return Err(ValidationError::invalid(field, "must not be empty"));
    }
    Ok(ProductName::from(raw))
}

pub fn price(field: &str, value: &Value) -> Result<f64, ValidationError> {
    let price = match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ValidationError::invalid(field, "must be a number"))?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::invalid(field, "must be a number"))?,
        _ => return Err(ValidationError::invalid(field, "must be a number")),
    };

    if !price.is_finite() {
        return Err(ValidationError::invalid(field, "must be finite"));
    }
    if price < 0.0 {
        return Err(ValidationError::invalid(field, "must not be negative"));
    }
    // -0.0 passes the sign check; store it as 0
    Ok(if price == 0.0 { 0.0 } else { price })
}

pub fn quantity(field: &str, value: &Value) -> Result<u32, ValidationError> {
    let wide: i128 = match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                i128::from(u)
            } else if let Some(i) = n.as_i64() {
                i128::from(i)
            } else {
                whole_number(field, n.as_f64())?
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i128>()
            .map_err(|_| ValidationError::invalid(field, "must be an integer"))?,
        _ => return Err(ValidationError::invalid(field, "must be an integer")),
    };

    if wide < 0 {
        return Err(ValidationError::invalid(field, "must not be negative"));
    }
    u32::try_from(wide).map_err(|_| ValidationError::invalid(field, "is too large"))
}

/// Accepts `5.0` but not `5.5`.
fn whole_number(field: &str, value: Option<f64>) -> Result<i128, ValidationError> {
    match value {
        Some(f) if f.is_finite() && f.fract() == 0.0 => {
            if f.abs() > u32::MAX as f64 {
                // sign still decides the message
                Ok(if f < 0.0 { -1 } else { i128::from(u32::MAX) + 1 })
            } else {
                Ok(f as i128)
            }
        }
        _ => Err(ValidationError::invalid(field, "must be an integer")),
    }
}
