//! Traits for external dependencies of the planner service

use async_trait::async_trait;

/// Trait for text-completion backends used to draft itineraries
///
/// Implementations live in the infrastructure layer (e.g. a Gemini
/// client) or in tests. Errors are plain strings; the planner treats
/// any failure the same way and falls back to heuristics.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Run one completion for the given prompt
    ///
    /// # Arguments
    ///
    /// * `prompt` - The full planning prompt
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The raw model response text
    /// * `Err(String)` - Describing why the call failed
    async fn complete(&self, prompt: &str) -> Result<String, String>;

    /// Human-readable name of the backend, used in log events
    fn backend_name(&self) -> &str;
}
