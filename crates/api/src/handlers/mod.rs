pub mod cache;
pub mod guard;
pub mod health;
pub mod labels;
pub mod menus;

pub use health::health_check;
