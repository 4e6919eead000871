//! menuvault application layer: ports, the read-through cache services and
//! the use cases driven by the HTTP API.
pub mod ports;
pub mod services;
pub mod use_cases;
