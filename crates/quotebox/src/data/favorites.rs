//! Favorites management
//!
//! Ordered, duplicate-free list of favorite quotes, written through to a
//! `KeyValueStore` after every mutation.

use crate::config::storage::FAVORITES_KEY;
use crate::data::storage::KeyValueStore;
use crate::data::types::Quote;
use crate::error::{QuoteError, Result};
use std::collections::HashSet;

/// Manages favorite quotes
///
/// The in-memory list and the stored value are equal after every
/// mutating call returns `Ok`.
pub struct FavoritesStore<S: KeyValueStore> {
    backing: S,
    favorites: Vec<Quote>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Open a store, loading whatever is persisted in `backing`
    pub fn open(backing: S) -> Self {
        let mut store = Self {
            backing,
            favorites: Vec::new(),
        };
        store.reload();
        store
    }

    /// Read the persisted list
    ///
    /// Absent, empty, unreadable, or malformed data all yield an empty list.
    pub fn load(&self) -> Vec<Quote> {
        let raw = match self.backing.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read favorites, starting empty");
                return Vec::new();
            }
        };

        if raw.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Vec<Quote>>(&raw) {
            Ok(favorites) => dedup(favorites),
            Err(e) => {
                tracing::warn!(error = %e, "Stored favorites are malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// Replace the in-memory list with the persisted one
    pub fn reload(&mut self) {
        self.favorites = self.load();
        tracing::debug!(count = self.favorites.len(), "Loaded favorites");
    }

    /// Replace the list with `favorites` and overwrite the stored value
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn persist(&mut self, favorites: &[Quote]) -> Result<()> {
        self.commit(dedup(favorites.to_vec()))
    }

    /// Check whether an equal quote is favorited
    pub fn is_favorite(&self, quote: &Quote) -> bool {
        self.favorites.contains(quote)
    }

    /// Append a quote; returns false (and writes nothing) if already present
    pub fn add(&mut self, quote: Quote) -> Result<bool> {
        if self.is_favorite(&quote) {
            return Ok(false);
        }
        let mut next = self.favorites.clone();
        next.push(quote);
        self.commit(next)?;
        Ok(true)
    }

    /// Remove a quote; returns false (and writes nothing) if absent
    pub fn remove(&mut self, quote: &Quote) -> Result<bool> {
        if !self.is_favorite(quote) {
            return Ok(false);
        }
        self.commit(without(&self.favorites, quote))?;
        Ok(true)
    }

    /// Remove `quote` if favorited, else append it
    pub fn toggle(&mut self, quote: &Quote) -> Result<&[Quote]> {
        if self.is_favorite(quote) {
            self.commit(without(&self.favorites, quote))?;
            tracing::info!(author = %quote.author, "Removed favorite");
        } else {
            let mut next = self.favorites.clone();
            next.push(quote.clone());
            self.commit(next)?;
            tracing::info!(author = %quote.author, "Added favorite");
        }
        Ok(&self.favorites)
    }

    /// Remove every favorite
    pub fn clear(&mut self) -> Result<&[Quote]> {
        self.commit(Vec::new())?;
        tracing::info!("Cleared favorites");
        Ok(&self.favorites)
    }

    /// Current favorites in insertion order
    pub fn quotes(&self) -> &[Quote] {
        &self.favorites
    }

    /// Numbered display lines, `"1. content - author"`
    pub fn list_lines(&self) -> Vec<String> {
        self.favorites
            .iter()
            .enumerate()
            .map(|(i, q)| q.list_line(i))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Write `next` to the backing store, then adopt it in memory
    ///
    /// On a write error the in-memory list is left as it was.
    fn commit(&mut self, next: Vec<Quote>) -> Result<()> {
        let json = serde_json::to_string(&next)
            .map_err(|e| QuoteError::Storage(format!("Failed to serialize favorites: {}", e)))?;
        self.backing.set(FAVORITES_KEY, &json)?;
        self.favorites = next;
        Ok(())
    }
}

/// Drop repeated quotes, keeping first-seen order
fn dedup(favorites: Vec<Quote>) -> Vec<Quote> {
    let mut seen = HashSet::new();
    favorites
        .into_iter()
        .filter(|q| seen.insert(q.clone()))
        .collect()
}

fn without(favorites: &[Quote], quote: &Quote) -> Vec<Quote> {
    favorites.iter().filter(|f| *f != quote).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::storage::{FileStore, MemoryStore};
    use tempfile::tempdir;

    fn quote(content: &str, author: &str) -> Quote {
        Quote::new(content, author)
    }

    fn seeded(raw: &str) -> MemoryStore {
        let mut backing = MemoryStore::new();
        backing.set(FAVORITES_KEY, raw).unwrap();
        backing
    }

    /// Backing whose writes always fail
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(QuoteError::Storage("read-only".to_string()))
        }
    }

    /// Backing with readable data whose writes always fail
    struct FailingStore {
        raw: String,
    }

    impl FailingStore {
        fn seeded(raw: &str) -> Self {
            Self {
                raw: raw.to_string(),
            }
        }
    }

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(Some(self.raw.clone()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(QuoteError::Storage("disk full".to_string()))
        }
    }

    // =========================================================================
    // Toggle / membership
    // =========================================================================

    #[test]
    fn test_toggle_scenario() {
        let mut store = FavoritesStore::open(MemoryStore::new());
        let ab = quote("A", "B");

        assert_eq!(store.toggle(&ab).unwrap(), &[ab.clone()]);
        assert!(store.is_favorite(&quote("A", "B")));

        assert!(store.toggle(&ab).unwrap().is_empty());
        assert!(!store.is_favorite(&ab));
    }

    #[test]
    fn test_double_toggle_restores_sequence() {
        let mut store = FavoritesStore::open(MemoryStore::new());
        store.add(quote("one", "x")).unwrap();
        store.add(quote("two", "y")).unwrap();
        let before = store.quotes().to_vec();

        let fresh = quote("three", "z");
        store.toggle(&fresh).unwrap();
        store.toggle(&fresh).unwrap();
        assert_eq!(store.quotes(), before.as_slice());

        // Re-adding appends, so only the last entry round-trips in place
        let existing = quote("two", "y");
        store.toggle(&existing).unwrap();
        store.toggle(&existing).unwrap();
        assert_eq!(store.quotes(), before.as_slice());
    }

    #[test]
    fn test_is_favorite_compares_fields() {
        let mut store = FavoritesStore::open(MemoryStore::new());
        store.add(quote("Be yourself", "Oscar Wilde")).unwrap();

        let same = Quote {
            content: String::from("Be yourself"),
            author: String::from("Oscar Wilde"),
        };
        assert!(store.is_favorite(&same));
        assert!(!store.is_favorite(&quote("Be yourself", "oscar wilde")));
        assert!(!store.is_favorite(&quote("Be yourself.", "Oscar Wilde")));
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut store = FavoritesStore::open(MemoryStore::new());
        assert!(store.add(quote("A", "B")).unwrap());
        assert!(!store.add(quote("A", "B")).unwrap());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut store = FavoritesStore::open(MemoryStore::new());
        store.add(quote("keep", "x")).unwrap();
        store.add(quote("drop", "y")).unwrap();

        assert!(store.remove(&quote("drop", "y")).unwrap());
        assert!(!store.remove(&quote("drop", "y")).unwrap());
        assert_eq!(store.quotes(), &[quote("keep", "x")]);
    }

    #[test]
    fn test_insertion_order_and_list_lines() {
        let mut store = FavoritesStore::open(MemoryStore::new());
        store.toggle(&quote("first", "a")).unwrap();
        store.toggle(&quote("second", "b")).unwrap();
        store.toggle(&quote("third", "c")).unwrap();

        assert_eq!(
            store.list_lines(),
            vec!["1. first - a", "2. second - b", "3. third - c"]
        );
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    #[test]
    fn test_every_mutation_writes_through() {
        let backing = MemoryStore::new();
        let mut store = FavoritesStore::open(backing.clone());

        store.toggle(&quote("A", "B")).unwrap();
        let raw = backing.get(FAVORITES_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"[{"content":"A","author":"B"}]"#);

        store.add(quote("C", "D")).unwrap();
        assert_eq!(store.load(), store.quotes());

        store.remove(&quote("A", "B")).unwrap();
        assert_eq!(store.load(), vec![quote("C", "D")]);
    }

    #[test]
    fn test_clear_then_load_is_empty() {
        let backing = MemoryStore::new();
        let mut store = FavoritesStore::open(backing.clone());
        store.add(quote("A", "B")).unwrap();

        assert!(store.clear().unwrap().is_empty());
        assert!(store.load().is_empty());
        assert_eq!(backing.get(FAVORITES_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_persist_then_load_roundtrip() {
        let store_seq = vec![
            quote("Ünïcödé \"quoted\"", "Author, Jr."),
            quote("", ""),
            quote("line\nbreak", "someone"),
        ];

        let mut store = FavoritesStore::open(MemoryStore::new());
        store.persist(&store_seq).unwrap();
        assert_eq!(store.load(), store_seq);

        store.persist(&[]).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_invalid_json_is_empty() {
        let store = FavoritesStore::open(seeded("this is {not json"));
        assert!(store.is_empty());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_wrong_shape_is_empty() {
        let store = FavoritesStore::open(seeded(r#"{"content":"A","author":"B"}"#));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_blank_is_empty() {
        let store = FavoritesStore::open(seeded(""));
        assert!(store.is_empty());
    }

    #[test]
    fn test_reload_picks_up_external_writes() {
        let backing = MemoryStore::new();
        let mut reader = FavoritesStore::open(backing.clone());
        let mut writer = FavoritesStore::open(backing);

        writer.toggle(&quote("A", "B")).unwrap();
        assert!(reader.is_empty());

        reader.reload();
        assert_eq!(reader.quotes(), &[quote("A", "B")]);
    }

    #[test]
    fn test_write_failure_propagates() {
        let mut store = FavoritesStore::open(ReadOnlyStore);
        let result = store.toggle(&quote("A", "B"));
        assert!(matches!(result, Err(QuoteError::Storage(_))));
    }

    #[test]
    fn test_write_failure_leaves_memory_unchanged() {
        let backing = FailingStore::seeded(r#"[{"content":"A","author":"B"}]"#);
        let mut store = FavoritesStore::open(backing);
        assert_eq!(store.quotes(), &[quote("A", "B")]);

        assert!(store.toggle(&quote("C", "D")).is_err());
        assert!(store.toggle(&quote("A", "B")).is_err());
        assert!(store.clear().is_err());
        assert!(store.persist(&[quote("X", "Y")]).is_err());

        assert_eq!(store.quotes(), &[quote("A", "B")]);
        assert_eq!(store.quotes(), store.load().as_slice());
    }

    #[test]
    fn test_persist_replaces_in_memory_list() {
        let mut store = FavoritesStore::open(MemoryStore::new());
        store.add(quote("old", "o")).unwrap();

        store.persist(&[quote("X", "Y")]).unwrap();
        assert!(store.is_favorite(&quote("X", "Y")));
        assert!(!store.is_favorite(&quote("old", "o")));
        assert_eq!(store.quotes(), store.load().as_slice());

        // A later toggle builds on the persisted list
        store.toggle(&quote("Z", "W")).unwrap();
        assert_eq!(store.load(), vec![quote("X", "Y"), quote("Z", "W")]);
    }

    #[test]
    fn test_persist_drops_duplicates() {
        let mut store = FavoritesStore::open(MemoryStore::new());
        store
            .persist(&[quote("A", "B"), quote("C", "D"), quote("A", "B")])
            .unwrap();
        assert_eq!(store.quotes(), &[quote("A", "B"), quote("C", "D")]);
        assert_eq!(store.load(), store.quotes());
    }

    #[test]
    fn test_load_drops_stored_duplicates() {
        let raw = r#"[{"content":"A","author":"B"},{"content":"C","author":"D"},{"content":"A","author":"B"}]"#;
        let mut store = FavoritesStore::open(seeded(raw));
        assert_eq!(store.quotes(), &[quote("A", "B"), quote("C", "D")]);

        let after = store.toggle(&quote("A", "B")).unwrap();
        assert_eq!(after, &[quote("C", "D")]);
        assert!(!store.is_favorite(&quote("A", "B")));
        assert_eq!(store.load(), vec![quote("C", "D")]);
    }

    #[test]
    fn test_file_backed_survives_reopen() {
        let dir = tempdir().unwrap();

        {
            let mut store = FavoritesStore::open(FileStore::new(dir.path()));
            store.toggle(&quote("Station to station", "Bowie")).unwrap();
            store.toggle(&quote("Second", "Someone")).unwrap();
        }

        let store = FavoritesStore::open(FileStore::new(dir.path()));
        assert_eq!(
            store.quotes(),
            &[quote("Station to station", "Bowie"), quote("Second", "Someone")]
        );
        assert!(dir.path().join("favorites.json").exists());
    }

    #[test]
    fn test_file_backed_garbage_is_empty() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("favorites.json"), "<<garbage>>").unwrap();

        let store = FavoritesStore::open(FileStore::new(dir.path()));
        assert!(store.is_empty());
    }
}
