//! menuvault infrastructure: adapters implementing the application ports.
pub mod auth;
pub mod menus;
pub mod repositories;
