// SPDX-License-Identifier: Apache-2.0

use joker_dataset::JokerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiErrorMapping {
    pub status_code: u16,
}

/// Every core error collapses to 404 at the transport boundary; clients
/// only ever see the message string. Finer-grained codes would be more
/// conventional, but existing consumers key off 404.
#[must_use]
pub fn map_joker_error(error: &JokerError) -> ApiErrorMapping {
    let status_code = match error {
        JokerError::DatasetEmpty
        | JokerError::NotInitialized
        | JokerError::InvalidLanguage(_)
        | JokerError::InvalidCategory(_)
        | JokerError::JokeNotFound { .. } => 404,
        // `JokerError` is `#[non_exhaustive]`; every core error collapses to 404.
        _ => 404,
    };
    ApiErrorMapping { status_code }
}
