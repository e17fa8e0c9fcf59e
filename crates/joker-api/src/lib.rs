#![forbid(unsafe_code)]

mod dto;
mod error_mapping;

pub use dto::{ErrorBodyDto, JokeBodyDto, JokeDto, JokesBodyDto};
pub use error_mapping::{map_joker_error, ApiErrorMapping};

pub const CRATE_NAME: &str = "joker-api";
pub const API_VERSION: &str = "v1";
