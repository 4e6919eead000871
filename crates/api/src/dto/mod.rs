pub mod cache;
pub mod guard;
pub mod labels;
pub mod menus;

pub use cache::{InvalidateCacheQuery, InvalidateCacheResponse};
pub use guard::{GuardQuery, GuardResponse};
pub use labels::LabelsResponse;
pub use menus::{ActiveMenuQuery, MenuQuery};
