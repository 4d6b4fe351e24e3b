//! HTTP route handlers grouped by resource domain.
//!
//! Each submodule corresponds to a logical area of the API (users, trips,
//! health) and exposes typed Rocket handlers. Handlers always run in the
//! same order: authentication guard where required, store lookup,
//! ownership decision, store mutation, response shaping.

pub mod health;
pub mod trips;
pub mod users;
