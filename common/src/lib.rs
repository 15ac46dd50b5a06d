//! Shared car model and the client-side state machine of the car manager.
//!
//! Nothing in this crate performs I/O. The frontend owns a [`manager::CarManager`],
//! feeds it user actions and request outcomes, and executes the
//! [`manager::Effect`]s it hands back.

pub mod manager;
pub mod model;
