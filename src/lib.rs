//! User domain records with validated fields.
//!
//! This crate contains pure domain logic with no infrastructure
//! dependencies. Record kinds form a widening chain — [`BaseUser`] holds
//! identity fields, [`User`] adds credentials and age, [`AdminUser`] adds a
//! role with a permission check — each kind embedding the previous one.
//!
//! Records are built from raw named inputs (a JSON object). Undeclared
//! fields are rejected, declared fields are validated in declaration order,
//! and every later field write re-runs the same rule, so an instance can
//! never hold an invalid value.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use user_domain::User;
//!
//! let user = User::from_value(&json!({
//!     "email": "ada@example.com",
//!     "first_name": "ada",
//!     "last_name": "LOVELACE",
//!     "password": "Abcd1234!",
//!     "age": 25,
//! }))?;
//!
//! assert_eq!(user.first_name(), "Ada");
//! assert_eq!(user.last_name(), "Lovelace");
//! # Ok::<(), user_domain::DomainError>(())
//! ```

pub mod admin;
pub mod constants;
pub mod error;
mod fields;
pub mod user;

pub use admin::{AdminUser, UserRole};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{BaseUser, User};
