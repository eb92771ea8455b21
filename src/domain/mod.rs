//! Domain Layer
//!
//! Pure rules of the post-install step without direct I/O.
//!
//! ## Structure
//!
//! - `entities/` - Credential set as read and as validated
//! - `value_objects/` - Artifact names
//! - `services/` - Template rendering, dependency lookup
//! - `policies/` - All-or-nothing credential rule
//! - `ports/` - File system interface implemented by infrastructure

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
