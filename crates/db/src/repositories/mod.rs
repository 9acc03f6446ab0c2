//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod contact_repo;
pub mod project_repo;
pub mod tag_repo;

pub use contact_repo::ContactRepo;
pub use project_repo::ProjectRepo;
pub use tag_repo::TagRepo;
