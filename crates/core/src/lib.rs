//! Domain rules for the agency site backend.
//!
//! Everything in this crate is pure: validation, normalization, and small
//! bits of arithmetic shared by the repository and HTTP layers. No I/O.

pub mod contact;
pub mod error;
pub mod links;
pub mod media;
pub mod pin;
pub mod portfolio;
pub mod project;
pub mod tag;
pub mod types;
