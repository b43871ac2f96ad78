pub mod config;
pub mod logging;
pub mod middleware;
pub mod short_id;
