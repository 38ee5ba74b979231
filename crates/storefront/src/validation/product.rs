use super::coerce;
use super::error::ValidationError;
use crate::model::{ProductCreate, ProductUpdate};
use serde_json::Value;

/// Checks a product-create payload: `name`, `price` and `quantity` are all required.
///
/// Presence is checked for every key before any value is coerced. Unrecognised keys are
/// ignored.
pub fn validate_product_create(payload: &Value) -> Result<ProductCreate, ValidationError> {
    let fields = coerce::object("body", payload)?;
    let name = coerce::require(fields, "", "name")?;
    let price = coerce::require(fields, "", "price")?;
    let quantity = coerce::require(fields, "", "quantity")?;

    Ok(ProductCreate {
        name: coerce::product_name("name", name)?,
        price: coerce::price("price", price)?,
        quantity: coerce::quantity("quantity", quantity)?,
    })
}

/// Checks a product-update payload. At least one of `price` and `quantity` must be present;
/// whatever is present must be valid.
pub fn validate_product_update(payload: &Value) -> Result<ProductUpdate, ValidationError> {
    let fields = coerce::object("body", payload)?;
    let price = fields
        .get("price")
        .map(|v| coerce::price("price", v))
        .transpose()?;
    let quantity = fields
        .get("quantity")
        .map(|v| coerce::quantity("quantity", v))
        .transpose()?;

    if price.is_none() && quantity.is_none() {
        return Err(ValidationError::MissingField("price or quantity".into()));
    }
    Ok(ProductUpdate { price, quantity })
}
