//! Client-side navigation: static triggers bound to full-page destinations.

pub mod bindings;
pub mod dom;
pub mod router;

pub use router::{BindReport, ConfigError, NavigationBinding, NavigationRouter};
