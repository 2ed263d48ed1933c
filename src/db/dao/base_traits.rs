use sea_orm::entity::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

/// Columns used to order and seek keyset pages: newest first, id breaks ties.
pub trait HasKeysetColumns: sea_orm::EntityTrait {
    fn id_column() -> Self::Column;
    fn created_at_column() -> Self::Column;
}

pub trait KeysetModel {
    fn keyset_id(&self) -> Uuid;
    fn keyset_created_at(&self) -> DateTimeWithTimeZone;
}

pub trait HasIdActiveModel {
    fn set_id(&mut self, id: Uuid);
    fn id_is_set(&self) -> bool;
}

pub trait TimestampedActiveModel {
    fn set_created_at(&mut self, ts: DateTimeWithTimeZone);
    fn set_updated_at(&mut self, ts: DateTimeWithTimeZone);
}
