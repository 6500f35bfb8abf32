//! Domain layer - business-level types independent of axum and sea-orm specifics

pub mod errors;
pub mod repositories;

pub use errors::DomainError;
pub use repositories::{
    CreateFranchiseInput, EmailRepository, FranchiseRepository, UpdateFranchiseInput,
};
