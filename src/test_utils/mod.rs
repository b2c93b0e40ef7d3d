//! Test utilities for use case and HTTP-level testing.
//!
//! This module provides:
//! - Test data factories for creating valid test fixtures
//! - In-memory port implementations with failure injection
//! - `TestAppStateBuilder` for constructing an `AppState` with those mocks

mod app_state_builder;
mod email_mocks;
mod factories;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use email_mocks::*;
pub use factories::*;
pub use waitlist_mocks::*;
