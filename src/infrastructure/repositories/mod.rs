//! Repository implementations using SeaORM

pub mod email_repository;
pub mod franchise_repository;

pub use email_repository::SeaOrmEmailRepository;
pub use franchise_repository::SeaOrmFranchiseRepository;
