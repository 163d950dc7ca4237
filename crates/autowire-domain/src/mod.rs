//! # Domain Layer
//!
//! Core types of the autowiring injector: runtime values, structural
//! metadata descriptors, the ports implemented by metadata providers, and
//! the error type shared by every layer.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Values, instances, argument maps, descriptors |
//! | [`ports`] | Reflector, type source, doc tag parser, reflection cache |
//! | [`error`] | Configuration and resolution errors with reason codes |
//! | [`constants`] | Markers and reserved names |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, ReasonCode, Result};
pub use value_objects::*;
