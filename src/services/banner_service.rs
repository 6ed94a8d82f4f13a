use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Select, Set,
};
use uuid::Uuid;

use crate::{
    audit,
    dto::banners::{BannerList, CreateBannerRequest, UpdateBannerRequest, validate_window},
    entity::banners::{ActiveModel, Column, Entity as Banners, Model as BannerModel},
    error::{AppError, AppResult},
    models::Banner,
    response::{ApiResponse, Meta},
    services::merge_field,
    state::AppState,
};

/// Banners whose flag is on and whose optional window contains `now`.
/// Missing bounds are open and both bounds are inclusive.
fn visible_at(now: DateTime<Utc>) -> Condition {
    let now = now.fixed_offset();
    Condition::all()
        .add(Column::IsActive.eq(true))
        .add(
            Condition::any()
                .add(Column::StartDate.is_null())
                .add(Column::StartDate.lte(now)),
        )
        .add(
            Condition::any()
                .add(Column::EndDate.is_null())
                .add(Column::EndDate.gte(now)),
        )
}

fn ordered(finder: Select<Banners>) -> Select<Banners> {
    finder
        .order_by_asc(Column::SortOrder)
        .order_by_desc(Column::CreatedAt)
}

pub async fn list_banners(state: &AppState) -> AppResult<ApiResponse<BannerList>> {
    let items: Vec<Banner> = ordered(Banners::find())
        .all(&state.orm)
        .await?
        .into_iter()
        .map(banner_from_entity)
        .collect();

    let meta = Meta::total(items.len() as i64);
    Ok(ApiResponse::success("Banners", BannerList { items }, Some(meta)))
}

pub async fn list_active_banners(state: &AppState) -> AppResult<ApiResponse<BannerList>> {
    list_active_banners_at(state, Utc::now()).await
}

pub async fn list_active_banners_at(
    state: &AppState,
    now: DateTime<Utc>,
) -> AppResult<ApiResponse<BannerList>> {
    let items: Vec<Banner> = ordered(Banners::find().filter(visible_at(now)))
        .all(&state.orm)
        .await?
        .into_iter()
        .map(banner_from_entity)
        .collect();

    tracing::debug!(count = items.len(), "active banners");
    let meta = Meta::total(items.len() as i64);
    Ok(ApiResponse::success(
        "Active banners",
        BannerList { items },
        Some(meta),
    ))
}

pub async fn get_banner(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Banner>> {
    let banner = Banners::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(banner_from_entity)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Banner", banner, None))
}

pub async fn create_banner(
    state: &AppState,
    payload: CreateBannerRequest,
) -> AppResult<ApiResponse<Banner>> {
    payload.validate()?;
    let now = Utc::now().fixed_offset();
    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(payload.title),
        old_price: Set(payload.old_price),
        new_price: Set(payload.new_price),
        image: Set(payload.image),
        description: Set(payload.description),
        link: Set(payload.link),
        is_active: Set(payload.is_active.unwrap_or(true)),
        sort_order: Set(payload.order.unwrap_or(0)),
        start_date: Set(payload.start_date.map(|d| d.fixed_offset())),
        end_date: Set(payload.end_date.map(|d| d.fixed_offset())),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let banner = active.insert(&state.orm).await?;

    audit::record(
        state,
        "banner_create",
        "banners",
        serde_json::json!({ "banner_id": banner.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Banner created",
        banner_from_entity(banner),
        Some(Meta::empty()),
    ))
}

pub async fn update_banner(
    state: &AppState,
    id: Uuid,
    payload: UpdateBannerRequest,
) -> AppResult<ApiResponse<Banner>> {
    payload.validate()?;
    let existing = Banners::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let start_date = payload.start_date.map(|d| d.fixed_offset());
    let end_date = payload.end_date.map(|d| d.fixed_offset());
    validate_window(
        start_date.or(existing.start_date).map(|d| d.with_timezone(&Utc)),
        end_date.or(existing.end_date).map(|d| d.with_timezone(&Utc)),
    )?;

    let mut active: ActiveModel = existing.clone().into();
    merge_field(&mut active.title, &existing.title, payload.title);
    merge_field(&mut active.old_price, &existing.old_price, payload.old_price.map(Some));
    merge_field(&mut active.new_price, &existing.new_price, payload.new_price.map(Some));
    merge_field(&mut active.image, &existing.image, payload.image);
    merge_field(&mut active.description, &existing.description, payload.description.map(Some));
    merge_field(&mut active.link, &existing.link, payload.link.map(Some));
    merge_field(&mut active.is_active, &existing.is_active, payload.is_active);
    merge_field(&mut active.sort_order, &existing.sort_order, payload.order);
    merge_field(&mut active.start_date, &existing.start_date, start_date.map(Some));
    merge_field(&mut active.end_date, &existing.end_date, end_date.map(Some));

    if !active.is_changed() {
        return Ok(ApiResponse::success(
            "Updated",
            banner_from_entity(existing),
            Some(Meta::empty()),
        ));
    }

    active.updated_at = Set(Utc::now().fixed_offset());
    let banner = active.update(&state.orm).await?;

    audit::record(
        state,
        "banner_update",
        "banners",
        serde_json::json!({ "banner_id": banner.id, "is_active": banner.is_active }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        banner_from_entity(banner),
        Some(Meta::empty()),
    ))
}

pub async fn delete_banner(state: &AppState, id: Uuid) -> AppResult<()> {
    let result = Banners::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        state,
        "banner_delete",
        "banners",
        serde_json::json!({ "banner_id": id }),
    )
    .await;

    Ok(())
}

fn banner_from_entity(model: BannerModel) -> Banner {
    Banner {
        id: model.id,
        title: model.title,
        old_price: model.old_price,
        new_price: model.new_price,
        image: model.image,
        description: model.description,
        link: model.link,
        is_active: model.is_active,
        order: model.sort_order,
        start_date: model.start_date.map(|dt| dt.with_timezone(&Utc)),
        end_date: model.end_date.map(|dt| dt.with_timezone(&Utc)),
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
