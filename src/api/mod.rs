pub mod espn_client;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod sleeper_client;
