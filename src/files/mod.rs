//! Static file serving.
//!
//! This module implements the request-processing pipeline behind the HTTP
//! layer: path normalization with traversal prevention, resolution against
//! the web root, and response construction.

pub mod handler;
pub mod resolver;

pub use handler::FileHandler;
pub use resolver::{PathError, Resolved};
