pub mod api_utils;
pub mod config;
pub mod host;
#[cfg(test)]
pub mod testing;
pub mod transport;
