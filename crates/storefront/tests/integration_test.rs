use actor_framework::ActorClient;
use storefront::lifecycle::StoreSystem;
use storefront::model::{LineItem, OrderCreate, OrderId, ProductCreate, ProductName, ProductUpdate};
use storefront::order_actor::OrderError;
use storefront::processor;
use storefront::product_actor::ProductError;

async fn add_product(system: &StoreSystem, name: &str, price: f64, quantity: u32) {
    system
        .product_client
        .create_product(ProductCreate {
            name: ProductName::new(name),
            price,
            quantity,
        })
        .await
        .unwrap();
}

async fn place_order(system: &StoreSystem, items: Vec<LineItem>) -> OrderId {
    system
        .order_client
        .create_order(OrderCreate {
            customer_name: "Tim".into(),
            customer_address: "Vancouver".into(),
            date_created: "2024-03-01 09:00".into(),
            products: items,
        })
        .await
        .unwrap()
}

async fn stock(system: &StoreSystem, name: &str) -> u32 {
    system
        .product_client
        .get(ProductName::new(name))
        .await
        .unwrap()
        .unwrap()
        .quantity
}

/// Full system: real Product and Order actors wired by `StoreSystem`.
#[tokio::test]
async fn test_oversold_line_item_is_clamped() {
    let system = StoreSystem::new(16);
    add_product(&system, "bolt", 0.5, 3).await;

    let id = place_order(&system, vec![LineItem::new("bolt", 5)]).await;
    let order = system
        .order_client
        .process_order(id, processor::now_timestamp())
        .await
        .unwrap();

    assert_eq!(stock(&system, "bolt").await, 0);
    assert_eq!(order.products, vec![LineItem::new("bolt", 3)]);
    assert!(order.completed);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_processing_within_stock() {
    let system = StoreSystem::new(16);
    add_product(&system, "bolt", 0.5, 10).await;
    add_product(&system, "nut", 0.1, 20).await;

    let id = place_order(
        &system,
        vec![LineItem::new("bolt", 4), LineItem::new("nut", 20)],
    )
    .await;
    let order = system
        .order_client
        .process_order(id, processor::now_timestamp())
        .await
        .unwrap();

    assert_eq!(stock(&system, "bolt").await, 6);
    assert_eq!(stock(&system, "nut").await, 0);
    assert_eq!(
        order.products,
        vec![LineItem::new("bolt", 4), LineItem::new("nut", 20)]
    );
    assert!(order.date_processed.is_some());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reprocessing_leaves_stock_alone() {
    let system = StoreSystem::new(16);
    add_product(&system, "bolt", 0.5, 10).await;

    let id = place_order(&system, vec![LineItem::new("bolt", 4)]).await;
    let first = system
        .order_client
        .process_order(id, "2024-03-02 12:15".into())
        .await
        .unwrap();

    let second = system
        .order_client
        .process_order(id, "2024-03-02 12:30".into())
        .await;

    assert_eq!(second, Err(OrderError::AlreadyProcessed(id)));
    assert_eq!(stock(&system, "bolt").await, 6);
    assert_eq!(
        system.order_client.get(id).await.unwrap(),
        Some(first)
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_processing_runs_once() {
    let system = StoreSystem::new(16);
    add_product(&system, "bolt", 0.5, 10).await;
    let id = place_order(&system, vec![LineItem::new("bolt", 4)]).await;

    let a = system.order_client.clone();
    let b = system.order_client.clone();
    let (ra, rb) = tokio::join!(
        a.process_order(id, processor::now_timestamp()),
        b.process_order(id, processor::now_timestamp()),
    );

    assert_eq!([ra.is_ok(), rb.is_ok()].iter().filter(|ok| **ok).count(), 1);
    assert_eq!(stock(&system, "bolt").await, 6);

    // clones keep the order actor alive
    drop((a, b));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_product_names_ignore_case() {
    let system = StoreSystem::new(16);
    add_product(&system, "Widget", 2.0, 1).await;

    let product = system
        .product_client
        .get(ProductName::new("WIDGET"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(product.name.as_str(), "widget");

    let duplicate = system
        .product_client
        .create_product(ProductCreate {
            name: ProductName::new("widget"),
            price: 9.0,
            quantity: 9,
        })
        .await;
    assert_eq!(duplicate, Err(ProductError::AlreadyExists("widget".into())));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_partial_product_update() {
    let system = StoreSystem::new(16);
    add_product(&system, "bolt", 0.5, 3).await;

    let updated = system
        .product_client
        .update_product(
            ProductName::new("bolt"),
            ProductUpdate {
                price: Some(0.75),
                quantity: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.price, 0.75);
    assert_eq!(updated.quantity, 3);

    let missing = system
        .product_client
        .update_product(ProductName::new("gear"), ProductUpdate::default())
        .await;
    assert_eq!(missing, Err(ProductError::NotFound("gear".into())));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_numbers_are_not_reused() {
    let system = StoreSystem::new(16);

    let first = place_order(&system, vec![]).await;
    let second = place_order(&system, vec![]).await;
    system.order_client.delete(second).await.unwrap();
    let third = place_order(&system, vec![]).await;

    assert_eq!((first, second, third), (OrderId(1), OrderId(2), OrderId(3)));
    let ids: Vec<OrderId> = system
        .order_client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|order| order.id)
        .collect();
    assert_eq!(ids, vec![OrderId(1), OrderId(3)]);

    system.shutdown().await.unwrap();
}
