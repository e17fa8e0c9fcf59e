#![forbid(unsafe_code)]
//! The Joker core: loads the joke corpus once per process and answers
//! read-only queries over it.
//!
//! The dataset has exactly two states: uninitialized (empty) and ready
//! (non-empty, immutable). [`Joker::init_dataset`] performs the single
//! transition; repeated calls are no-ops.

mod corpus;
mod error;
mod joker;
mod provider;

pub use corpus::BundledCorpus;
pub use error::JokerError;
pub use joker::{Joker, ANY, LOAD_CATEGORIES};
pub use provider::{FakeProvider, JokeProvider, ProviderError};

pub const CRATE_NAME: &str = "joker-dataset";
