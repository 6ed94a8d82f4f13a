use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        banners::{BannerList, CreateBannerRequest, UpdateBannerRequest},
        categories::{CategoryList, CreateCategoryRequest, UpdateCategoryRequest},
        orders::{CreateOrderRequest, OrderList, UpdateOrderRequest},
        restaurants::{CreateRestaurantRequest, RestaurantList, UpdateRestaurantRequest},
        users::{CreateUserRequest, UpdateUserRequest, UserList},
    },
    models::{Banner, Category, LineItem, Order, OrderStatus, Restaurant, User},
    response::{ApiResponse, Meta},
    routes::{banners, categories, health, orders, restaurants, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        banners::list_banners,
        banners::list_active_banners,
        banners::get_banner,
        banners::create_banner,
        banners::update_banner,
        banners::delete_banner,
        categories::list_categories,
        categories::list_active_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        users::list_users,
        users::get_user_by_phone,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        restaurants::list_restaurants,
        restaurants::list_active_restaurants,
        restaurants::get_restaurant,
        restaurants::create_restaurant,
        restaurants::update_restaurant,
        restaurants::delete_restaurant,
        orders::list_orders,
        orders::get_order,
        orders::create_order,
        orders::update_order,
        orders::delete_order
    ),
    components(
        schemas(
            Banner,
            Category,
            User,
            Restaurant,
            Order,
            LineItem,
            OrderStatus,
            BannerList,
            CategoryList,
            UserList,
            RestaurantList,
            OrderList,
            CreateBannerRequest,
            UpdateBannerRequest,
            CreateCategoryRequest,
            UpdateCategoryRequest,
            CreateUserRequest,
            UpdateUserRequest,
            CreateRestaurantRequest,
            UpdateRestaurantRequest,
            CreateOrderRequest,
            UpdateOrderRequest,
            Meta,
            ApiResponse<Banner>,
            ApiResponse<BannerList>,
            ApiResponse<Order>,
            ApiResponse<OrderList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Banners", description = "Promotional banners"),
        (name = "Categories", description = "Food categories"),
        (name = "Users", description = "Customer accounts"),
        (name = "Restaurants", description = "Restaurant endpoints"),
        (name = "Orders", description = "Order endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
