use super::coerce::{self, Object};
use super::error::ValidationError;
use super::ProductLookup;
use crate::model::{LineItem, OrderCreate};
use serde_json::Value;
use std::collections::BTreeSet;

/// Keys every order-create payload must carry.
const ORDER_KEYS: [&str; 6] = [
    "customer_name",
    "customer_address",
    "completed",
    "products",
    "date_created",
    "date_processed",
];

/// The only keys a line item may carry.
const LINE_ITEM_KEYS: [&str; 2] = ["product_name", "quantity"];

/// Checks an order-create payload and confirms every referenced product exists.
///
/// `completed` and `date_processed` must be present and well typed, but their values are
/// dropped: a new order always starts pending.
pub async fn validate_order_create<L>(
    payload: &Value,
    lookup: &L,
) -> Result<OrderCreate, ValidationError>
where
    L: ProductLookup + ?Sized,
{
    let fields = coerce::object("body", payload)?;
    for key in ORDER_KEYS {
        coerce::require(fields, "", key)?;
    }

    let customer_name = coerce::text("customer_name", &fields["customer_name"])?;
    let customer_address = coerce::text("customer_address", &fields["customer_address"])?;
    coerce::boolean("completed", &fields["completed"])?;
    let date_created = coerce::text("date_created", &fields["date_created"])?;
    match &fields["date_processed"] {
        Value::Null | Value::String(_) => {}
        _ => {
            return Err(ValidationError::invalid(
                "date_processed",
                "must be a string or null",
            ))
        }
    }

    let products = line_items("products", &fields["products"])?;
    ensure_known(&products, lookup).await?;

    Ok(OrderCreate {
        customer_name,
        customer_address,
        date_created,
        products,
    })
}

/// Checks a line-item replacement payload: a bare array of `{product_name, quantity}`.
pub async fn validate_line_items<L>(
    payload: &Value,
    lookup: &L,
) -> Result<Vec<LineItem>, ValidationError>
where
    L: ProductLookup + ?Sized,
{
    let products = line_items("body", payload)?;
    ensure_known(&products, lookup).await?;
    Ok(products)
}

fn line_items(field: &str, value: &Value) -> Result<Vec<LineItem>, ValidationError> {
    let entries = value
        .as_array()
        .ok_or_else(|| ValidationError::invalid(field, "must be an array"))?;

    let mut seen = BTreeSet::new();
    let mut items = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let at = format!("{field}[{index}]");
        let item = line_item(&at, coerce::object(&at, entry)?)?;
        if !seen.insert(item.product_name.clone()) {
            return Err(ValidationError::DuplicateProduct(item.product_name));
        }
        items.push(item);
    }
    Ok(items)
}

fn line_item(at: &str, fields: &Object) -> Result<LineItem, ValidationError> {
    if let Some(extra) = fields
        .keys()
        .find(|key| !LINE_ITEM_KEYS.contains(&key.as_str()))
    {
        return Err(ValidationError::ExtraneousKey(coerce::path(at, extra)));
    }

    let name = coerce::require(fields, at, "product_name")?;
    let quantity = coerce::require(fields, at, "quantity")?;
    Ok(LineItem {
        product_name: coerce::product_name(&coerce::path(at, "product_name"), name)?,
        quantity: coerce::quantity(&coerce::path(at, "quantity"), quantity)?,
    })
}

async fn ensure_known<L>(items: &[LineItem], lookup: &L) -> Result<(), ValidationError>
where
    L: ProductLookup + ?Sized,
{
    for item in items {
        if !lookup.product_exists(&item.product_name).await? {
            return Err(ValidationError::UnknownProduct(item.product_name.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductName;
    use crate::product_actor::ProductError;
    use async_trait::async_trait;
    use serde_json::json;

    struct Catalog(Vec<&'static str>);

    #[async_trait]
    impl ProductLookup for Catalog {
        async fn product_exists(&self, name: &ProductName) -> Result<bool, ProductError> {
            Ok(self.0.iter().any(|known| *known == name.as_str()))
        }
    }

    struct Offline;

    #[async_trait]
    impl ProductLookup for Offline {
        async fn product_exists(&self, _name: &ProductName) -> Result<bool, ProductError> {
            Err(ProductError::ActorCommunicationError("Actor closed".into()))
        }
    }

    fn catalog() -> Catalog {
        Catalog(vec!["bolt", "nut"])
    }

    fn payload(products: Value) -> Value {
        json!({
            "customer_name": "Tim",
            "customer_address": "Vancouver",
            "completed": true,
            "products": products,
            "date_created": "2024-03-01 09:00",
            "date_processed": "2024-03-01 09:05"
        })
    }

    #[tokio::test]
    async fn test_order_create_normalizes_line_items() {
        let params = validate_order_create(
            &payload(json!([
                { "product_name": "Bolt", "quantity": 5 },
                { "product_name": "nut", "quantity": "2" }
            ])),
            &catalog(),
        )
        .await
        .unwrap();

        assert_eq!(params.customer_name, "Tim");
        assert_eq!(
            params.products,
            vec![LineItem::new("bolt", 5), LineItem::new("nut", 2)]
        );
    }

    #[tokio::test]
    async fn test_order_create_requires_every_key() {
        let mut body = payload(json!([]));
        body.as_object_mut().unwrap().remove("date_processed");

        let err = validate_order_create(&body, &catalog()).await.unwrap_err();
        assert_eq!(err, ValidationError::MissingField("date_processed".into()));
    }

    #[tokio::test]
    async fn test_order_create_type_checks_completed() {
        let mut body = payload(json!([]));
        body["completed"] = json!("yes");

        let err = validate_order_create(&body, &catalog()).await.unwrap_err();
        assert_eq!(err, ValidationError::invalid("completed", "must be a boolean"));
    }

    #[tokio::test]
    async fn test_order_create_accepts_null_date_processed() {
        let mut body = payload(json!([{ "product_name": "bolt", "quantity": 1 }]));
        body["date_processed"] = Value::Null;

        assert!(validate_order_create(&body, &catalog()).await.is_ok());
    }

    #[tokio::test]
    async fn test_order_create_rejects_unknown_product() {
        let err = validate_order_create(
            &payload(json!([{ "product_name": "Gear", "quantity": 1 }])),
            &catalog(),
        )
        .await
        .unwrap_err();

        assert_eq!(err, ValidationError::UnknownProduct(ProductName::new("gear")));
        assert_eq!(err.to_string(), "product `gear` does not exist");
    }

    #[tokio::test]
    async fn test_line_item_rejects_extra_key() {
        let err = validate_order_create(
            &payload(json!([{ "product_name": "bolt", "quantity": 1, "colour": "red" }])),
            &catalog(),
        )
        .await
        .unwrap_err();

        assert_eq!(
            err,
            ValidationError::ExtraneousKey("products[0].colour".into())
        );
    }

    #[tokio::test]
    async fn test_line_item_quantity_must_be_whole() {
        let err = validate_order_create(
            &payload(json!([
                { "product_name": "bolt", "quantity": 1 },
                { "product_name": "nut", "quantity": 1.5 }
            ])),
            &catalog(),
        )
        .await
        .unwrap_err();

        assert_eq!(
            err,
            ValidationError::invalid("products[1].quantity", "must be an integer")
        );
    }

    #[tokio::test]
    async fn test_same_product_twice_is_rejected() {
        let err = validate_line_items(
            &json!([
                { "product_name": "bolt", "quantity": 1 },
                { "product_name": "BOLT", "quantity": 2 }
            ]),
            &catalog(),
        )
        .await
        .unwrap_err();

        assert_eq!(err, ValidationError::DuplicateProduct(ProductName::new("bolt")));
    }

    #[tokio::test]
    async fn test_replacement_payload_must_be_array() {
        let err = validate_line_items(&json!({ "product_name": "bolt" }), &catalog())
            .await
            .unwrap_err();
        assert_eq!(err, ValidationError::invalid("body", "must be an array"));
    }

    #[tokio::test]
    async fn test_shape_errors_win_over_lookup() {
        let err = validate_line_items(&json!([{ "quantity": 1 }]), &Offline)
            .await
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingField("body[0].product_name".into()));
    }

    #[tokio::test]
    async fn test_lookup_failure_is_not_a_rejection() {
        let err = validate_line_items(&json!([{ "product_name": "bolt", "quantity": 1 }]), &Offline)
            .await
            .unwrap_err();
        assert!(matches!(err, ValidationError::Lookup(_)));
    }
}
