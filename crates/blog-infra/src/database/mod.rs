//! Database connection management and repositories.

mod sea_orm_base;
mod sea_orm_repo;
mod store;

pub mod entity;

pub use sea_orm_base::SeaOrmBaseRepository;
pub use sea_orm_repo::SeaOrmPostRepository;
pub use store::{DatabaseConfig, Store};

#[cfg(test)]
mod tests;
