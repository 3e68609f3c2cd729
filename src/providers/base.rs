//! Base provider trait for GameSmith
//!
//! Defines the seam between the generation client and the generative
//! backend. A provider takes one fully-built instruction string and returns
//! the raw model text; parsing and validation happen above this layer.

use crate::error::Result;
use async_trait::async_trait;

/// Provider trait for generative backends
///
/// Implementations send exactly one request per call and perform no retries.
/// Transport failures (network, authentication, quota) must surface as
/// [`crate::error::GameSmithError::Transport`]; a missing credential must be
/// detected at construction time, before any network call is possible.
///
/// # Examples
///
/// ```
/// use gamesmith::providers::Provider;
/// use gamesmith::error::Result;
/// use async_trait::async_trait;
///
/// struct FixedProvider(String);
///
/// #[async_trait]
/// impl Provider for FixedProvider {
///     async fn complete(&self, _instruction: &str) -> Result<String> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send one instruction to the backend and return the raw response text
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the backend reports an error
    async fn complete(&self, instruction: &str) -> Result<String>;
}
