mod common;

use food_delivery_api::{
    client::{BadgeColor, ClientError, HistoryFilter, OrderHistoryClient},
    dto::orders::CreateOrderRequest,
    models::{LineItem, OrderStatus},
    routes::create_router,
    services::order_service,
    state::AppState,
};
use tokio::net::TcpListener;
use uuid::Uuid;

async fn serve(state: AppState) -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, create_router(state)).await;
    });
    Ok(format!("http://{addr}/api"))
}

fn order(user_id: Uuid, status: OrderStatus) -> CreateOrderRequest {
    CreateOrderRequest {
        user_id: Some(user_id),
        restaurant_id: Uuid::new_v4(),
        items: vec![LineItem {
            name: "Khachapuri".into(),
            quantity: 1,
            price: 25.0,
        }],
        total_amount: None,
        delivery_fee: Some(3.5),
        status: Some(status),
        order_date: None,
    }
}

#[tokio::test]
async fn history_screen_shows_filtered_orders_with_totals() -> anyhow::Result<()> {
    let (_dir, state) = common::setup_state().await?;
    let me = Uuid::new_v4();

    order_service::create_order(&state, order(me, OrderStatus::Delivered)).await?;
    order_service::create_order(&state, order(me, OrderStatus::Cancelled)).await?;
    order_service::create_order(&state, order(Uuid::new_v4(), OrderStatus::Delivered)).await?;

    let client = OrderHistoryClient::new(serve(state).await?);

    let delivered = client
        .fetch_summaries(&HistoryFilter {
            user_id: Some(me),
            status: Some("delivered".into()),
            limit: Some(10),
        })
        .await?;
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].total, 28.5);
    assert_eq!(delivered[0].total_label, "28.50 ₾");
    assert_eq!(delivered[0].badge.color, BadgeColor::Green);

    let mine = client
        .fetch(&HistoryFilter {
            user_id: Some(me),
            ..Default::default()
        })
        .await?;
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().any(|o| o.status == "cancelled"));
    Ok(())
}

#[tokio::test]
async fn empty_history_is_not_an_error() -> anyhow::Result<()> {
    let (_dir, state) = common::setup_state().await?;
    let client = OrderHistoryClient::new(serve(state).await?);

    let orders = client
        .fetch(&HistoryFilter {
            user_id: Some(Uuid::new_v4()),
            ..Default::default()
        })
        .await?;
    assert!(orders.is_empty());
    Ok(())
}

#[tokio::test]
async fn unknown_status_filter_is_rejected() -> anyhow::Result<()> {
    let (_dir, state) = common::setup_state().await?;
    let client = OrderHistoryClient::new(serve(state).await?);

    let err = client
        .fetch(&HistoryFilter {
            status: Some("lost_in_space".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Rejected { status: 400, .. }));
    assert!(!err.is_retryable());
    Ok(())
}

#[tokio::test]
async fn wrong_base_url_is_not_found() -> anyhow::Result<()> {
    let (_dir, state) = common::setup_state().await?;
    let base = serve(state).await?;
    let client = OrderHistoryClient::new(base.trim_end_matches("/api").to_string() + "/v0");

    let err = client.fetch(&HistoryFilter::default()).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound));
    Ok(())
}
