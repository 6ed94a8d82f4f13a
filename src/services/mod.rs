use sea_orm::{ActiveValue, Set, Value};

pub mod banner_service;
pub mod category_service;
pub mod order_service;
pub mod restaurant_service;
pub mod user_service;

/// Copy `incoming` into an active-model field only when it differs from the
/// stored value, so replaying an identical update leaves the row untouched.
pub(crate) fn merge_field<V>(field: &mut ActiveValue<V>, current: &V, incoming: Option<V>)
where
    V: Into<Value> + PartialEq,
{
    if let Some(value) = incoming {
        if &value != current {
            *field = Set(value);
        }
    }
}
