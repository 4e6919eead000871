pub mod builtin;
pub mod http;

pub use builtin::BuiltinMenuSource;
pub use http::HttpMenuSource;
