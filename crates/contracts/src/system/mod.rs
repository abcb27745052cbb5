pub mod admin;
pub mod routes;
pub mod users;
