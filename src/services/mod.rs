pub mod comparison;
pub mod defense;
pub mod server;
