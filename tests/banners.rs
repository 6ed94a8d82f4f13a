mod common;

use chrono::{DateTime, Duration, Utc};
use food_delivery_api::{
    dto::banners::{BannerList, CreateBannerRequest, UpdateBannerRequest},
    entity::banners::ActiveModel as BannerActive,
    error::AppError,
    response::ApiResponse,
    services::banner_service,
    state::AppState,
};
use sea_orm::{ActiveModelTrait, Set};
use uuid::Uuid;

fn banner(title: &str) -> CreateBannerRequest {
    CreateBannerRequest {
        title: title.into(),
        old_price: None,
        new_price: None,
        image: format!("https://cdn.example.com/{title}.png"),
        description: None,
        link: None,
        is_active: None,
        order: None,
        start_date: None,
        end_date: None,
    }
}

async fn insert_raw(
    state: &AppState,
    title: &str,
    order: i32,
    created_at: DateTime<Utc>,
) -> anyhow::Result<Uuid> {
    let model = BannerActive {
        id: Set(Uuid::new_v4()),
        title: Set(title.into()),
        old_price: Set(None),
        new_price: Set(None),
        image: Set("https://cdn.example.com/raw.png".into()),
        description: Set(None),
        link: Set(None),
        is_active: Set(true),
        sort_order: Set(order),
        start_date: Set(None),
        end_date: Set(None),
        created_at: Set(created_at.fixed_offset()),
        updated_at: Set(created_at.fixed_offset()),
    }
    .insert(&state.orm)
    .await?;
    Ok(model.id)
}

fn titles(resp: &ApiResponse<BannerList>) -> Vec<String> {
    resp.data
        .as_ref()
        .map(|list| list.items.iter().map(|b| b.title.clone()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn create_applies_schema_defaults() -> anyhow::Result<()> {
    let (_dir, state) = common::setup_state().await?;

    let created = banner_service::create_banner(&state, banner("defaults"))
        .await?
        .data
        .expect("banner");

    assert!(created.is_active);
    assert_eq!(created.order, 0);
    assert!(created.start_date.is_none() && created.end_date.is_none());
    assert_eq!(created.created_at, created.updated_at);
    Ok(())
}

#[tokio::test]
async fn active_banners_respect_flag_and_window() -> anyhow::Result<()> {
    let (_dir, state) = common::setup_state().await?;
    let now = Utc::now();

    banner_service::create_banner(&state, banner("unbounded")).await?;
    banner_service::create_banner(
        &state,
        CreateBannerRequest {
            start_date: Some(now - Duration::days(1)),
            end_date: Some(now + Duration::days(1)),
            ..banner("open-window")
        },
    )
    .await?;
    banner_service::create_banner(
        &state,
        CreateBannerRequest {
            start_date: Some(now + Duration::days(1)),
            ..banner("starts-tomorrow")
        },
    )
    .await?;
    banner_service::create_banner(
        &state,
        CreateBannerRequest {
            end_date: Some(now - Duration::days(1)),
            ..banner("ended-yesterday")
        },
    )
    .await?;
    banner_service::create_banner(
        &state,
        CreateBannerRequest {
            is_active: Some(false),
            ..banner("switched-off")
        },
    )
    .await?;

    let active = banner_service::list_active_banners_at(&state, now).await?;
    let mut visible = titles(&active);
    visible.sort();
    assert_eq!(visible, vec!["open-window", "unbounded"]);

    let all = banner_service::list_banners(&state).await?;
    assert_eq!(titles(&all).len(), 5);
    Ok(())
}

#[tokio::test]
async fn window_bounds_are_inclusive() -> anyhow::Result<()> {
    let (_dir, state) = common::setup_state().await?;
    let now = Utc::now();

    banner_service::create_banner(
        &state,
        CreateBannerRequest {
            start_date: Some(now),
            end_date: Some(now),
            ..banner("exactly-now")
        },
    )
    .await?;

    let at_now = banner_service::list_active_banners_at(&state, now).await?;
    assert_eq!(titles(&at_now), vec!["exactly-now"]);

    let later = banner_service::list_active_banners_at(&state, now + Duration::seconds(1)).await?;
    assert!(titles(&later).is_empty());

    let earlier = banner_service::list_active_banners_at(&state, now - Duration::seconds(1)).await?;
    assert!(titles(&earlier).is_empty());
    Ok(())
}

#[tokio::test]
async fn active_banners_sort_by_order_then_newest() -> anyhow::Result<()> {
    let (_dir, state) = common::setup_state().await?;
    let base = Utc::now() - Duration::hours(1);

    insert_raw(&state, "second-old", 1, base).await?;
    insert_raw(&state, "second-new", 1, base + Duration::minutes(10)).await?;
    insert_raw(&state, "first", 0, base + Duration::minutes(5)).await?;
    insert_raw(&state, "last", 7, base + Duration::minutes(20)).await?;

    let active = banner_service::list_active_banners(&state).await?;
    assert_eq!(
        titles(&active),
        vec!["first", "second-new", "second-old", "last"]
    );

    let all = banner_service::list_banners(&state).await?;
    assert_eq!(titles(&all), titles(&active));
    Ok(())
}

#[tokio::test]
async fn deactivating_hides_banner_and_persists() -> anyhow::Result<()> {
    let (_dir, state) = common::setup_state().await?;
    let created = banner_service::create_banner(&state, banner("promo"))
        .await?
        .data
        .expect("banner");

    banner_service::update_banner(
        &state,
        created.id,
        UpdateBannerRequest {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await?;

    let fetched = banner_service::get_banner(&state, created.id)
        .await?
        .data
        .expect("banner");
    assert!(!fetched.is_active);
    assert_eq!(fetched.title, "promo");

    let active = banner_service::list_active_banners(&state).await?;
    assert!(titles(&active).is_empty());
    Ok(())
}

#[tokio::test]
async fn identical_update_is_a_no_op() -> anyhow::Result<()> {
    let (_dir, state) = common::setup_state().await?;
    let created = banner_service::create_banner(&state, banner("steady"))
        .await?
        .data
        .expect("banner");

    let update = || UpdateBannerRequest {
        title: Some("steady".into()),
        order: Some(0),
        ..Default::default()
    };
    let first = banner_service::update_banner(&state, created.id, update())
        .await?
        .data
        .expect("banner");
    let second = banner_service::update_banner(&state, created.id, update())
        .await?
        .data
        .expect("banner");

    assert_eq!(first, created);
    assert_eq!(second, created);
    Ok(())
}

#[tokio::test]
async fn update_rejects_window_that_ends_before_it_starts() -> anyhow::Result<()> {
    let (_dir, state) = common::setup_state().await?;
    let now = Utc::now();
    let created = banner_service::create_banner(
        &state,
        CreateBannerRequest {
            start_date: Some(now),
            ..banner("window")
        },
    )
    .await?
    .data
    .expect("banner");

    let result = banner_service::update_banner(
        &state,
        created.id,
        UpdateBannerRequest {
            end_date: Some(now - Duration::days(2)),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    Ok(())
}

#[tokio::test]
async fn missing_banners_are_not_found() -> anyhow::Result<()> {
    let (_dir, state) = common::setup_state().await?;

    assert!(matches!(
        banner_service::get_banner(&state, Uuid::new_v4()).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        banner_service::update_banner(&state, Uuid::new_v4(), UpdateBannerRequest::default()).await,
        Err(AppError::NotFound)
    ));

    let created = banner_service::create_banner(&state, banner("short-lived"))
        .await?
        .data
        .expect("banner");
    banner_service::delete_banner(&state, created.id).await?;
    assert!(matches!(
        banner_service::delete_banner(&state, created.id).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        banner_service::delete_banner(&state, Uuid::new_v4()).await,
        Err(AppError::NotFound)
    ));
    Ok(())
}
