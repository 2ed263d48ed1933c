pub mod category_service;
pub mod context;
pub mod errors;
pub mod inputs;
pub mod menu_service;

pub use context::ServiceContext;
