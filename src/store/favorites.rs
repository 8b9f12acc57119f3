//! Favorites persistence on top of a [`KeyValueStore`].

use crate::error::Result;
use crate::favorites::Favorites;
use crate::quote::Quote;
use crate::store::KeyValueStore;
use std::sync::Arc;

/// Storage key holding the JSON list of favorite quotes.
pub const FAVORITES_KEY: &str = "favoriteQuotes";

/// Loads and saves the favorites list under [`FAVORITES_KEY`].
#[derive(Clone)]
pub struct FavoritesStore {
    store: Arc<dyn KeyValueStore>,
}

impl FavoritesStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the stored favorites.
    ///
    /// An absent key yields an empty set. A value that is not a JSON list of strings
    /// is logged and also yields an empty set; only store IO errors are returned.
    pub fn load(&self) -> Result<Favorites> {
        let Some(raw) = self.store.get_item(FAVORITES_KEY)? else {
            return Ok(Favorites::new());
        };

        match serde_json::from_str::<Vec<Quote>>(&raw) {
            Ok(list) => Ok(Favorites::from_list(list)),
            Err(e) => {
                log::warn!("ignoring unreadable {} value: {}", FAVORITES_KEY, e);
                Ok(Favorites::new())
            }
        }
    }

    /// Overwrite the stored favorites with `list`, preserving order
    pub fn save(&self, list: &[Quote]) -> Result<()> {
        let json = serde_json::to_string(list)?;
        self.store.set_item(FAVORITES_KEY, &json)
    }
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("key", &FAVORITES_KEY)
            .finish()
    }
}
