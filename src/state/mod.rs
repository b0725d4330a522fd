//! Fetch-state tracking for views.
//!
//! A view owns one [`FetchController`] per fetch target, creates it when the
//! view starts and drops it when the view goes away. Controllers never share
//! state with each other.

mod controller;
mod fetch_state;

pub use controller::{FetchController, FetchOutcome, FetchTicket};
pub use fetch_state::FetchState;
