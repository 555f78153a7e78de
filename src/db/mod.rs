//! Persistence and domain layer for the tasko application.
//!
//! The [`store`] module owns the JSON task file and the id counter; the
//! [`tasks`] module is the domain service every front end talks to.

/// JSON file store and id allocation.
pub mod store;

/// Task service with validation, queries and write-through persistence.
pub mod tasks;
