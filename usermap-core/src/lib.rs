//! # usermap-core
//!
//! Viewport-scoped loading and caching of map annotations: the
//! dataset type, the asynchronous gateway seam and the usecases
//! that tie them together.

pub mod bbox;
pub mod cache;
pub mod dataset;
pub mod gateways;
pub mod usecases;

pub mod entities {
    pub use usermap_entities::{annotation::*, geo::*, time::*};
}

#[cfg(test)]
pub(crate) mod test_fixtures;
