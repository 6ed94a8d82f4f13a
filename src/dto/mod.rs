pub mod banners;
pub mod categories;
pub mod orders;
pub mod restaurants;
pub mod users;
