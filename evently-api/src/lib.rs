pub mod config;
pub mod database;
pub mod functions;
pub mod handlers;
pub mod helpers;
pub mod integrations;

#[cfg(test)]
mod testing;

pub use database::Database;
