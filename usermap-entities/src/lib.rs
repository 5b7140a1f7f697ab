#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # usermap-entities
//!
//! Reusable, agnostic domain entities for usermap.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod annotation;
pub mod geo;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
