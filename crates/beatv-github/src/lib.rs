//! GitHub Projects (classic) API access and the velocity calculator.
//!
//! [`GithubClient`] is the real HTTP implementation of [`CardSource`];
//! [`compute_velocity`] works against the trait so tests can substitute an
//! in-memory source.

pub mod client;
pub mod error;
pub mod traits;
pub mod velocity;

pub use client::GithubClient;
pub use error::ApiError;
pub use traits::CardSource;
pub use velocity::compute_velocity;
