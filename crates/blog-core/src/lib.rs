//! # Blog Core
//!
//! The domain layer of the blog service.
//! This crate contains the post model, its validation rules and the
//! repository ports, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
