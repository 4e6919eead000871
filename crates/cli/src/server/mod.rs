pub mod web;

pub use web::{start_web_server, wait_for_signal};
