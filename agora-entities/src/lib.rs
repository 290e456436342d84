#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # agora-entities
//!
//! Reusable, agnostic domain entities for Agora.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod comment;
pub mod community;
pub mod id;
pub mod post;
pub mod reaction;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
