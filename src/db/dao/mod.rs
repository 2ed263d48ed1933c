pub mod base;
pub mod base_traits;
pub mod category_dao;
mod context;
pub mod error;
pub mod menu_dao;

pub use base::{CursorPage, DaoBase};
pub use base_traits::{HasIdActiveModel, HasKeysetColumns, KeysetModel, TimestampedActiveModel};
pub use category_dao::CategoryDao;
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use menu_dao::{MenuDao, MenuItemDraft};
