mod common;

use food_delivery_api::{
    dto::{
        categories::{CreateCategoryRequest, UpdateCategoryRequest},
        restaurants::{CreateRestaurantRequest, UpdateRestaurantRequest},
    },
    entity::categories::ActiveModel as CategoryActive,
    error::{AppError, DUPLICATE_RECORD},
    services::{category_service, restaurant_service},
};
use sea_orm::{ActiveModelTrait, Set};
use uuid::Uuid;

fn category(name: &str, order: Option<i32>) -> CreateCategoryRequest {
    CreateCategoryRequest {
        name: name.into(),
        description: None,
        icon: None,
        bg_color: Some("#FFE8D6".into()),
        is_active: None,
        order,
    }
}

fn restaurant(name: &str) -> CreateRestaurantRequest {
    CreateRestaurantRequest {
        name: name.into(),
        description: None,
        image: None,
        address: None,
        rating: None,
        delivery_time: None,
        delivery_fee: None,
        is_active: None,
        order: None,
    }
}

#[tokio::test]
async fn duplicate_category_name_is_a_conflict() -> anyhow::Result<()> {
    let (_dir, state) = common::setup_state().await?;

    category_service::create_category(&state, category("Pizza", None)).await?;
    let duplicate = category_service::create_category(&state, category("Pizza", Some(3))).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let list = category_service::list_categories(&state).await?;
    assert_eq!(list.data.expect("list").items.len(), 1);
    Ok(())
}

#[tokio::test]
async fn renaming_onto_an_existing_category_is_a_conflict() -> anyhow::Result<()> {
    let (_dir, state) = common::setup_state().await?;

    category_service::create_category(&state, category("Pizza", None)).await?;
    let sushi = category_service::create_category(&state, category("Sushi", None))
        .await?
        .data
        .expect("category");

    let result = category_service::update_category(
        &state,
        sushi.id,
        UpdateCategoryRequest {
            name: Some("Pizza".into()),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
    Ok(())
}

#[tokio::test]
async fn categories_list_by_order_and_filter_active() -> anyhow::Result<()> {
    let (_dir, state) = common::setup_state().await?;

    category_service::create_category(&state, category("Drinks", Some(2))).await?;
    category_service::create_category(&state, category("Pizza", Some(0))).await?;
    let burgers = category_service::create_category(&state, category("Burgers", Some(1)))
        .await?
        .data
        .expect("category");

    let names = |items: Vec<food_delivery_api::models::Category>| {
        items.into_iter().map(|c| c.name).collect::<Vec<_>>()
    };

    let all = category_service::list_categories(&state).await?.data.expect("list");
    assert_eq!(names(all.items), vec!["Pizza", "Burgers", "Drinks"]);

    let updated = category_service::update_category(
        &state,
        burgers.id,
        UpdateCategoryRequest {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("category");
    assert!(!updated.is_active);
    assert!(updated.updated_at >= burgers.updated_at);

    let active = category_service::list_active_categories(&state)
        .await?
        .data
        .expect("list");
    assert_eq!(names(active.items), vec!["Pizza", "Drinks"]);
    Ok(())
}

#[tokio::test]
async fn blank_category_name_is_rejected() -> anyhow::Result<()> {
    let (_dir, state) = common::setup_state().await?;
    let result = category_service::create_category(&state, category("   ", None)).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    Ok(())
}

#[tokio::test]
async fn category_removal_is_not_repeatable() -> anyhow::Result<()> {
    let (_dir, state) = common::setup_state().await?;
    let created = category_service::create_category(&state, category("Soup", None))
        .await?
        .data
        .expect("category");

    category_service::delete_category(&state, created.id).await?;
    assert!(matches!(
        category_service::delete_category(&state, created.id).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        category_service::get_category(&state, created.id).await,
        Err(AppError::NotFound)
    ));
    Ok(())
}

#[tokio::test]
async fn restaurant_defaults_and_updates() -> anyhow::Result<()> {
    let (_dir, state) = common::setup_state().await?;

    let created = restaurant_service::create_restaurant(&state, restaurant("Machakhela"))
        .await?
        .data
        .expect("restaurant");
    assert!(created.is_active);
    assert_eq!(created.order, 0);
    assert_eq!(created.rating, 0.0);
    assert_eq!(created.delivery_fee, 0.0);

    let updated = restaurant_service::update_restaurant(
        &state,
        created.id,
        UpdateRestaurantRequest {
            delivery_fee: Some(3.5),
            rating: Some(4.6),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("restaurant");
    assert_eq!(updated.delivery_fee, 3.5);
    assert_eq!(updated.rating, 4.6);

    let invalid = restaurant_service::update_restaurant(
        &state,
        created.id,
        UpdateRestaurantRequest {
            rating: Some(7.0),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(invalid, Err(AppError::BadRequest(_))));
    Ok(())
}

#[tokio::test]
async fn inactive_restaurants_are_hidden_from_active_list() -> anyhow::Result<()> {
    let (_dir, state) = common::setup_state().await?;

    restaurant_service::create_restaurant(&state, restaurant("Open")).await?;
    restaurant_service::create_restaurant(
        &state,
        CreateRestaurantRequest {
            is_active: Some(false),
            ..restaurant("Closed")
        },
    )
    .await?;

    let active = restaurant_service::list_active_restaurants(&state)
        .await?
        .data
        .expect("list");
    let names: Vec<_> = active.items.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Open"]);

    let all = restaurant_service::list_restaurants(&state).await?;
    assert_eq!(all.meta.and_then(|m| m.total), Some(2));

    assert!(matches!(
        restaurant_service::delete_restaurant(&state, Uuid::new_v4()).await,
        Err(AppError::NotFound)
    ));
    Ok(())
}

#[tokio::test]
async fn unmapped_unique_violation_hides_driver_detail() -> anyhow::Result<()> {
    let (_dir, state) = common::setup_state().await?;
    category_service::create_category(&state, category("Pizza", None)).await?;

    let now = chrono::Utc::now().fixed_offset();
    let db_err = CategoryActive {
        id: Set(Uuid::new_v4()),
        name: Set("Pizza".into()),
        description: Set(None),
        icon: Set(None),
        bg_color: Set(None),
        is_active: Set(true),
        sort_order: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&state.orm)
    .await
    .expect_err("duplicate name must violate the unique index");

    match AppError::from(db_err) {
        AppError::Conflict(message) => assert_eq!(message, DUPLICATE_RECORD),
        other => panic!("expected conflict, got {other:?}"),
    }
    Ok(())
}
