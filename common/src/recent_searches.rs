//! Durable, capped journal of submitted search queries.
//!
//! The journal is written only on explicit submit or suggestion selection,
//! never on debounce passes, so half-typed queries do not pollute it.

use std::fmt;

use tracing::warn;

use crate::search_const::MAX_RECENT_SEARCHES;


/// Storage read/write failed (quota, disabled storage). Absorbed inside
/// the journal; the in-memory list stays authoritative for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceUnavailable(pub String);

impl fmt::Display for PersistenceUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "durable storage unavailable: {}", self.0)
    }
}

impl std::error::Error for PersistenceUnavailable {}


/// Durable key-value capability the journal persists through. One fixed
/// key, string payloads; anything per-client and durable satisfies this.
pub trait RecentSearchStore {
    fn get(&self) -> Option<String>;
    fn set(&self, payload: &str) -> Result<(), PersistenceUnavailable>;
}

impl<S: RecentSearchStore> RecentSearchStore for std::rc::Rc<S> {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, payload: &str) -> Result<(), PersistenceUnavailable> {
        (**self).set(payload)
    }
}


/// Session-only store. Used by tests and by hosts without durable storage.
#[derive(Default)]
pub struct MemoryStore {
    payload: std::cell::RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.payload.borrow().clone()
    }
}

impl RecentSearchStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.payload.borrow().clone()
    }

    fn set(&self, payload: &str) -> Result<(), PersistenceUnavailable> {
        *self.payload.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}


/// Most-recent-first list of submitted queries, deduplicated by exact text
/// and capped at [`MAX_RECENT_SEARCHES`].
pub struct RecentSearchJournal {
    entries: Vec<String>,
    store: Box<dyn RecentSearchStore>,
}

impl RecentSearchJournal {
    /// Reads the stored journal once. Missing or unreadable payloads start
    /// an empty journal instead of failing the caller.
    pub fn load(store: Box<dyn RecentSearchStore>) -> Self {
        let entries = match store.get() {
            Some(payload) => match serde_json::from_str::<Vec<String>>(&payload) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!("discarding unreadable recent searches: {err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Self { entries, store }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `text` at the front, moving an existing identical entry
    /// instead of duplicating it, then persists. Empty-after-trim input is
    /// a no-op.
    pub fn record(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.entries.retain(|existing| existing != text);
        self.entries.insert(0, text.to_string());
        self.entries.truncate(MAX_RECENT_SEARCHES);
        self.persist();
    }

    fn persist(&self) {
        let payload = match serde_json::to_string(&self.entries) {
            Ok(payload) => payload,
            Err(_) => return,
        };
        if let Err(err) = self.store.set(&payload) {
            warn!("recent searches not persisted: {err}");
        }
    }
}


#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    struct FailingStore;

    impl RecentSearchStore for FailingStore {
        fn get(&self) -> Option<String> {
            None
        }

        fn set(&self, _payload: &str) -> Result<(), PersistenceUnavailable> {
            Err(PersistenceUnavailable("quota exceeded".to_string()))
        }
    }

    struct CorruptStore;

    impl RecentSearchStore for CorruptStore {
        fn get(&self) -> Option<String> {
            Some("{not json".to_string())
        }

        fn set(&self, _payload: &str) -> Result<(), PersistenceUnavailable> {
            Ok(())
        }
    }

    #[test]
    fn recording_a_duplicate_moves_it_to_the_front() {
        let mut journal = RecentSearchJournal::load(Box::new(MemoryStore::new()));
        journal.record("x");
        journal.record("y");
        journal.record("x");

        assert_eq!(journal.entries(), ["x", "y"]);
    }

    #[test]
    fn dedup_is_case_sensitive() {
        let mut journal = RecentSearchJournal::load(Box::new(MemoryStore::new()));
        journal.record("Rust");
        journal.record("rust");

        assert_eq!(journal.entries(), ["rust", "Rust"]);
    }

    #[test]
    fn sixth_entry_evicts_the_oldest() {
        let mut journal = RecentSearchJournal::load(Box::new(MemoryStore::new()));
        for text in ["a", "b", "c", "d", "e", "f"] {
            journal.record(text);
        }

        assert_eq!(journal.entries(), ["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn blank_input_is_a_no_op() {
        let mut journal = RecentSearchJournal::load(Box::new(MemoryStore::new()));
        journal.record("   ");
        journal.record("");

        assert!(journal.is_empty());
    }

    #[test]
    fn record_trims_surrounding_whitespace() {
        let mut journal = RecentSearchJournal::load(Box::new(MemoryStore::new()));
        journal.record("  react hooks  ");

        assert_eq!(journal.entries(), ["react hooks"]);
    }

    #[test]
    fn every_record_persists_synchronously() {
        let store = Rc::new(MemoryStore::new());
        let mut journal = RecentSearchJournal::load(Box::new(Rc::clone(&store)));
        journal.record("first");

        assert_eq!(store.contents().unwrap(), r#"["first"]"#);

        journal.record("second");
        assert_eq!(store.contents().unwrap(), r#"["second","first"]"#);
    }

    #[test]
    fn journal_survives_a_failing_store() {
        let mut journal = RecentSearchJournal::load(Box::new(FailingStore));
        journal.record("test");

        assert_eq!(journal.entries(), ["test"]);
    }

    #[test]
    fn corrupt_payload_loads_as_empty() {
        let journal = RecentSearchJournal::load(Box::new(CorruptStore));
        assert!(journal.is_empty());
    }

    #[test]
    fn stored_payload_round_trips_across_loads() {
        let store = Rc::new(MemoryStore::new());
        {
            let mut journal = RecentSearchJournal::load(Box::new(Rc::clone(&store)));
            journal.record("react hooks");
            journal.record("blog seo");
        }

        let reloaded = RecentSearchJournal::load(Box::new(store));
        assert_eq!(reloaded.entries(), ["blog seo", "react hooks"]);
    }
}
