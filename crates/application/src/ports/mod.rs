mod auth_provider;
mod menu_source;
mod user_directory;

pub use auth_provider::AuthProvider;
pub use menu_source::MenuSource;
pub use user_directory::UserDirectory;
