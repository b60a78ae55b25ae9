pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod market;
pub mod report;
pub mod responses;
pub mod router;
pub mod templates;
