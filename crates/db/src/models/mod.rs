//! Row structs and request DTOs, one module per table.

pub mod contact;
pub mod project;
pub mod tag;
