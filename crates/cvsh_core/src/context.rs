//! The application state container.
//!
//! [`AppContext`] owns the profile record, the palette, the admin flag
//! and the transcript. Rendering code only reads from it; every
//! mutation goes through a command handler, which writes the changed
//! blob back to the store.

use tracing::{info, warn};

use crate::error::CvshResult;
use crate::palette::Palette;
use crate::profile::Profile;
use crate::storage::{self, KvStore, PALETTE_KEY, PROFILE_KEY};
use crate::transcript::Transcript;

/// Everything a session knows, behind one owner.
pub struct AppContext {
    pub profile: Profile,
    pub palette: Palette,
    /// Client-side edit-mode flag; there is no real authentication.
    pub admin: bool,
    pub transcript: Transcript,
    store: Box<dyn KvStore>,
}

impl AppContext {
    /// Build a context from a store, falling back to the built-in
    /// defaults for any missing or corrupt blob.
    pub fn load(store: Box<dyn KvStore>) -> Self {
        let profile = storage::load_profile(store.as_ref());
        let palette = storage::load_palette(store.as_ref());
        info!(name = %profile.personal.name, "session context loaded");
        Self {
            profile,
            palette,
            admin: false,
            transcript: Transcript::new(),
            store,
        }
    }

    /// Prompt prefix shown before every input line.
    pub fn prompt(&self) -> String {
        format!("{}> ", self.profile.first_name())
    }

    /// Write the profile blob through to the store.
    pub fn persist_profile(&mut self) -> CvshResult<()> {
        storage::save(self.store.as_mut(), PROFILE_KEY, &self.profile)
    }

    /// Write the palette blob through to the store.
    pub fn persist_palette(&mut self) -> CvshResult<()> {
        storage::save(self.store.as_mut(), PALETTE_KEY, &self.palette)
    }

    /// Persist after a mutation; failures become an operator note, the
    /// mutation itself stands (last write wins on the next save).
    pub fn persist_profile_noting(&mut self) -> Option<String> {
        match self.persist_profile() {
            Ok(()) => None,
            Err(e) => {
                warn!(error = %e, "profile write-through failed");
                Some("Note: changes are live but could not be persisted.".to_string())
            }
        }
    }

    /// Palette counterpart of [`Self::persist_profile_noting`].
    pub fn persist_palette_noting(&mut self) -> Option<String> {
        match self.persist_palette() {
            Ok(()) => None,
            Err(e) => {
                warn!(error = %e, "palette write-through failed");
                Some("Note: changes are live but could not be persisted.".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn load_uses_defaults_on_empty_store() {
        let ctx = AppContext::load(Box::new(MemoryStore::new()));
        assert_eq!(ctx.profile, Profile::default());
        assert_eq!(ctx.palette, Palette::default());
        assert!(!ctx.admin);
        assert!(ctx.transcript.is_empty());
    }

    #[test]
    fn prompt_uses_first_name() {
        let ctx = AppContext::load(Box::new(MemoryStore::new()));
        assert_eq!(ctx.prompt(), "Karthi> ");
    }

    #[test]
    fn persisted_profile_reloads() {
        let mut ctx = AppContext::load(Box::new(MemoryStore::new()));
        ctx.profile.personal.title = "Lead Engineer".into();
        ctx.persist_profile().unwrap();

        // The store is owned by the context, so reload through a fresh
        // context backed by the same serialized blob.
        let json = serde_json::to_string(&ctx.profile).unwrap();
        let mut store = MemoryStore::new();
        use crate::storage::KvStore as _;
        store.put(PROFILE_KEY, &json).unwrap();
        let reloaded = AppContext::load(Box::new(store));
        assert_eq!(reloaded.profile.personal.title, "Lead Engineer");
    }
}
