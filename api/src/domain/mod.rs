//! Domain layer
//!
//! Contains pure business logic with no transport concerns.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for the stores the services depend on

pub mod entities;
pub mod ports;
