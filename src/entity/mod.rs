pub mod audit_logs;
pub mod banners;
pub mod categories;
pub mod orders;
pub mod restaurants;
pub mod users;

pub use audit_logs::Entity as AuditLogs;
pub use banners::Entity as Banners;
pub use categories::Entity as Categories;
pub use orders::Entity as Orders;
pub use restaurants::Entity as Restaurants;
pub use users::Entity as Users;
