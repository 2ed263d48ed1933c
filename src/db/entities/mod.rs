#[allow(unused_imports)]
pub mod prelude {
    pub use super::category::Entity as Category;
    pub use super::menu_item::Entity as MenuItem;
}

pub mod category;
pub mod menu_item;
