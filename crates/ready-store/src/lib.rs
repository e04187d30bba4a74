//! # ready-store
//!
//! Persistence cache for in-progress checklist state.
//!
//! State is kept as one JSON document per key. Reads fall back to defaults
//! and writes are best-effort: storage trouble never interrupts the checklist.
//!
//! ```no_run
//! use ready_core::{Catalog, Quiz};
//! use ready_store::QuizStore;
//!
//! let mut store = QuizStore::open_dir("/tmp/aiready");
//! let quiz = Quiz::new(Catalog::standard(), store.restore(), &mut store);
//! println!("resuming at step {}", quiz.state().step);
//! ```

mod backend;
mod cache;
mod error;
mod quiz_store;

pub use backend::{DirBackend, KeyValueBackend, MemoryBackend};
pub use cache::JsonCache;
pub use error::StoreError;
pub use quiz_store::{
    ANSWERS_KEY, CONSENT_KEY, EMAIL_KEY, NAME_KEY, QuizStore, STEP_KEY, key_for,
};

impl QuizStore<DirBackend> {
    /// Store rooted at `dir`, created on first write.
    pub fn open_dir(dir: impl Into<std::path::PathBuf>) -> Self {
        Self::new(DirBackend::new(dir))
    }
}
