use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};

use food_delivery_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{
        banners::CreateBannerRequest, categories::CreateCategoryRequest,
        restaurants::CreateRestaurantRequest,
    },
    entity::{Banners, Restaurants},
    error::AppError,
    services::{banner_service, category_service, restaurant_service},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;
    let state = AppState::new(orm);

    seed_categories(&state).await?;
    seed_restaurants(&state).await?;
    seed_banners(&state).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_categories(state: &AppState) -> anyhow::Result<()> {
    let categories = [
        ("Pizza", "🍕", "#FFE8D6"),
        ("Burgers", "🍔", "#FFF3C4"),
        ("Georgian", "🥟", "#E3F2FD"),
        ("Desserts", "🍰", "#FCE4EC"),
        ("Drinks", "🥤", "#E8F5E9"),
    ];

    for (order, (name, icon, bg_color)) in (0..).zip(categories) {
        let payload = CreateCategoryRequest {
            name: name.to_string(),
            description: None,
            icon: Some(icon.to_string()),
            bg_color: Some(bg_color.to_string()),
            is_active: Some(true),
            order: Some(order),
        };
        match category_service::create_category(state, payload).await {
            Ok(_) => println!("Seeded category {name}"),
            Err(AppError::Conflict(_)) => println!("Category {name} already exists"),
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

async fn seed_restaurants(state: &AppState) -> anyhow::Result<()> {
    if Restaurants::find().count(&state.orm).await? > 0 {
        println!("Restaurants already seeded");
        return Ok(());
    }

    let restaurants = [
        ("Machakhela", "Georgian classics", 4.7, "25-35 min", 3.5),
        ("Pizza Express", "Wood-fired pizza", 4.4, "30-40 min", 2.0),
        ("Burger Lab", "Smash burgers and fries", 4.2, "20-30 min", 0.0),
    ];

    for (order, (name, description, rating, delivery_time, delivery_fee)) in
        (0..).zip(restaurants)
    {
        restaurant_service::create_restaurant(
            state,
            CreateRestaurantRequest {
                name: name.to_string(),
                description: Some(description.to_string()),
                image: None,
                address: Some("Tbilisi".to_string()),
                rating: Some(rating),
                delivery_time: Some(delivery_time.to_string()),
                delivery_fee: Some(delivery_fee),
                is_active: Some(true),
                order: Some(order),
            },
        )
        .await?;
        println!("Seeded restaurant {name}");
    }
    Ok(())
}

async fn seed_banners(state: &AppState) -> anyhow::Result<()> {
    if Banners::find().count(&state.orm).await? > 0 {
        println!("Banners already seeded");
        return Ok(());
    }

    let now = Utc::now();
    banner_service::create_banner(
        state,
        CreateBannerRequest {
            title: "Free delivery this week".to_string(),
            old_price: Some(3.5),
            new_price: Some(0.0),
            image: "https://images.example.com/banners/free-delivery.png".to_string(),
            description: Some("On every order above 20 ₾".to_string()),
            link: None,
            is_active: Some(true),
            order: Some(0),
            start_date: Some(now),
            end_date: Some(now + Duration::days(7)),
        },
    )
    .await?;
    banner_service::create_banner(
        state,
        CreateBannerRequest {
            title: "Two pizzas for one".to_string(),
            old_price: Some(36.0),
            new_price: Some(18.0),
            image: "https://images.example.com/banners/pizza.png".to_string(),
            description: None,
            link: Some("/restaurants".to_string()),
            is_active: Some(true),
            order: Some(1),
            start_date: None,
            end_date: None,
        },
    )
    .await?;
    println!("Seeded banners");
    Ok(())
}
