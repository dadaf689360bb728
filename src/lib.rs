pub mod config;
pub mod core;
pub mod models;
pub mod persist;
pub mod report;
#[cfg(test)]
pub mod test_helpers;
