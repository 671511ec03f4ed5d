//! # karmadb-core
//!
//! Business rules of KarmaDB: vote resolution, karma scoring
//! and the use cases around students, reviews and accounts.
//!
//! Storage is abstracted by the traits in [`repositories`].

pub mod authorization;
pub mod db;
pub mod karma;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use karmadb_entities::{
        id::*, karma::*, password::*, review::*, student::*, time::*, user::*, vote::*,
    };
}
