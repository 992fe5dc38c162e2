//! Shared application state.

use std::sync::{Arc, Mutex};

use lucky_core::clock::Clock;
use lucky_core::rng::DeterministicRng;
use lucky_draw::application::command_handlers::SessionRepository;

use crate::i18n::Language;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Clock used for session timestamps.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// RNG shared by every session; locked only for the synchronous draw.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    /// Store holding every live session.
    pub session_repository: Arc<SessionRepository>,
    /// Language used when a request does not specify one.
    pub default_language: Language,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock + Send + Sync>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        session_repository: Arc<SessionRepository>,
        default_language: Language,
    ) -> Self {
        Self {
            clock,
            rng,
            session_repository,
            default_language,
        }
    }
}
