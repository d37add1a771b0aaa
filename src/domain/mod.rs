pub mod models;
pub mod resolver;

pub use models::*;
pub use resolver::{Resolution, resolve, search};
