//! Galley back-office: typed records, CRUD with attachment cleanup, and the
//! table screens built on `galley_core`'s cursor-paged search engine.
#![warn(unreachable_pub)]

pub mod attachment;
pub mod collections;
pub mod config;
pub mod format;
pub mod model;
pub mod repository;
pub mod screens;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        config::GalleyConfig,
        model::{Record, Stored},
        repository::Repository,
        screens::{Screen, ScreenSession},
    };
    pub use galley_core::prelude::*;
}
