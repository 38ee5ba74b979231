use actor_framework::mock::MockClient;
use actor_framework::{ActorClient, FrameworkError};
use storefront::clients::{OrderClient, ProductClient};
use storefront::model::{LineItem, OrderCreate, Product, ProductName};
use storefront::order_actor::OrderError;
use storefront::processor::Withdrawal;
use storefront::product_actor::ProductActionResult;

fn order_params(items: Vec<LineItem>) -> OrderCreate {
    OrderCreate {
        customer_name: "Tim".into(),
        customer_address: "Vancouver".into(),
        date_created: "2024-03-01 09:00".into(),
        products: items,
    }
}

fn withdrawn(fulfilled: u32, remaining: u32) -> ProductActionResult {
    ProductActionResult::WithdrawStock(Withdrawal {
        fulfilled,
        remaining,
    })
}

/// Real Order actor with a mocked Product dependency.
///
/// The mock plays the product actor: each line item must turn into exactly one stock
/// withdrawal, in line item order.
#[tokio::test]
async fn test_processing_withdraws_each_line_item() {
    let mut product_mock = MockClient::<Product>::new();
    product_mock
        .expect_action(ProductName::new("bolt"))
        .return_ok(withdrawn(3, 0));
    product_mock
        .expect_action(ProductName::new("nut"))
        .return_ok(withdrawn(2, 8));

    let product_client = ProductClient::new(product_mock.client());
    let (order_actor, generic_client) = storefront::order_actor::new(10);
    let order_client = OrderClient::new(generic_client);
    let actor_handle = tokio::spawn(order_actor.run(product_client));

    let id = order_client
        .create_order(order_params(vec![
            LineItem::new("bolt", 5),
            LineItem::new("nut", 2),
        ]))
        .await
        .unwrap();

    let order = order_client
        .process_order(id, "2024-03-02 12:15".into())
        .await
        .unwrap();

    assert!(order.completed);
    assert_eq!(order.date_processed.as_deref(), Some("2024-03-02 12:15"));
    assert_eq!(
        order.products,
        vec![LineItem::new("bolt", 3), LineItem::new("nut", 2)]
    );
    assert_eq!(order_client.get(id).await.unwrap(), Some(order));
    product_mock.verify();

    // A second run must not reach the product actor at all
    let again = order_client
        .process_order(id, "2024-03-02 12:20".into())
        .await;
    assert_eq!(again, Err(OrderError::AlreadyProcessed(id)));
    product_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_processing_stops_at_deleted_product() {
    let mut product_mock = MockClient::<Product>::new();
    product_mock
        .expect_action(ProductName::new("bolt"))
        .return_ok(withdrawn(1, 4));
    product_mock
        .expect_action(ProductName::new("gone"))
        .return_err(FrameworkError::NotFound("gone".into()));

    let (order_actor, generic_client) = storefront::order_actor::new(10);
    let order_client = OrderClient::new(generic_client);
    tokio::spawn(order_actor.run(ProductClient::new(product_mock.client())));

    let id = order_client
        .create_order(order_params(vec![
            LineItem::new("bolt", 1),
            LineItem::new("gone", 1),
            LineItem::new("nut", 1),
        ]))
        .await
        .unwrap();

    let result = order_client
        .process_order(id, "2024-03-02 12:15".into())
        .await;
    assert_eq!(
        result,
        Err(OrderError::UnknownProduct(ProductName::new("gone")))
    );
    product_mock.verify();

    let order = order_client.get(id).await.unwrap().unwrap();
    assert!(!order.completed);
    assert!(order.date_processed.is_none());
}

#[tokio::test]
async fn test_line_items_are_frozen_after_processing() {
    let mut product_mock = MockClient::<Product>::new();
    product_mock
        .expect_action(ProductName::new("nut"))
        .return_ok(withdrawn(4, 0));

    let (order_actor, generic_client) = storefront::order_actor::new(10);
    let order_client = OrderClient::new(generic_client);
    tokio::spawn(order_actor.run(ProductClient::new(product_mock.client())));

    let id = order_client
        .create_order(order_params(vec![LineItem::new("bolt", 1)]))
        .await
        .unwrap();

    // Pending orders take a whole new collection
    let replaced = order_client
        .replace_line_items(id, vec![LineItem::new("nut", 4)])
        .await
        .unwrap();
    assert_eq!(replaced.products, vec![LineItem::new("nut", 4)]);

    order_client
        .process_order(id, "2024-03-02 12:15".into())
        .await
        .unwrap();

    let result = order_client
        .replace_line_items(id, vec![LineItem::new("bolt", 9)])
        .await;
    assert_eq!(result, Err(OrderError::AlreadyProcessed(id)));
    product_mock.verify();
}

#[tokio::test]
async fn test_missing_order_is_not_found() {
    let product_mock = MockClient::<Product>::new();
    let (order_actor, generic_client) = storefront::order_actor::new(10);
    let order_client = OrderClient::new(generic_client);
    tokio::spawn(order_actor.run(ProductClient::new(product_mock.client())));

    let missing = storefront::model::OrderId(42);
    assert_eq!(
        order_client
            .process_order(missing, "2024-03-02 12:15".into())
            .await,
        Err(OrderError::NotFound("42".into()))
    );
    assert_eq!(
        order_client.delete(missing).await,
        Err(OrderError::NotFound("42".into()))
    );
    assert_eq!(order_client.get(missing).await, Ok(None));
}
