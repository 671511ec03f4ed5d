//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # karmadb-entities
//!
//! Reusable, agnostic domain entities for KarmaDB.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod id;
pub mod karma;
pub mod password;
pub mod review;
pub mod student;
pub mod time;
pub mod user;
pub mod vote;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
