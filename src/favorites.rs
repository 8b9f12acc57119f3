//! Ordered, duplicate-free set of favorite quotes.

use crate::quote::Quote;

/// How many favorites the view lists.
pub const RECENT_FAVORITES_SHOWN: usize = 3;

/// Favorites in insertion order. Membership is by exact quote text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    items: Vec<Quote>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a stored list, dropping later duplicates
    pub fn from_list(list: Vec<Quote>) -> Self {
        let mut favorites = Self::new();
        for quote in list {
            favorites.insert(quote);
        }
        favorites
    }

    pub fn contains(&self, quote: &Quote) -> bool {
        self.items.contains(quote)
    }

    /// Append `quote` unless already present. Returns true if it was added.
    pub fn insert(&mut self, quote: Quote) -> bool {
        if self.contains(&quote) {
            return false;
        }
        self.items.push(quote);
        true
    }

    /// Remove every occurrence of `quote`. Returns true if anything changed.
    pub fn remove(&mut self, quote: &Quote) -> bool {
        let before = self.items.len();
        self.items.retain(|fav| fav != quote);
        self.items.len() != before
    }

    /// Remove `quote` if present, otherwise append it. Returns the new membership.
    pub fn toggle(&mut self, quote: &Quote) -> bool {
        if self.remove(quote) {
            false
        } else {
            self.items.push(quote.clone());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Quote] {
        &self.items
    }

    /// The last `n` favorites, oldest first
    pub fn most_recent(&self, n: usize) -> &[Quote] {
        let start = self.items.len().saturating_sub(n);
        &self.items[start..]
    }

    pub fn to_list(&self) -> Vec<Quote> {
        self.items.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn q(text: &str) -> Quote {
        Quote::new(text)
    }

    #[test]
    fn test_insert_prevents_duplicates() {
        let mut favorites = Favorites::new();
        assert!(favorites.insert(q("a")));
        assert!(!favorites.insert(q("a")));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = Favorites::new();
        assert!(favorites.toggle(&q("a")));
        assert!(favorites.contains(&q("a")));
        assert!(!favorites.toggle(&q("a")));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_remove_keeps_order_of_others() {
        let mut favorites = Favorites::from_list(vec![q("a"), q("b"), q("c")]);
        assert!(favorites.remove(&q("b")));
        assert_eq!(favorites.as_slice(), &[q("a"), q("c")]);
        assert!(!favorites.remove(&q("zzz")));
    }

    #[test]
    fn test_from_list_drops_duplicates() {
        let favorites = Favorites::from_list(vec![q("a"), q("b"), q("a")]);
        assert_eq!(favorites.as_slice(), &[q("a"), q("b")]);
    }

    #[test]
    fn test_most_recent() {
        let favorites = Favorites::from_list(vec![q("1"), q("2"), q("3"), q("4"), q("5")]);
        assert_eq!(
            favorites.most_recent(RECENT_FAVORITES_SHOWN),
            &[q("3"), q("4"), q("5")]
        );

        let short = Favorites::from_list(vec![q("only")]);
        assert_eq!(short.most_recent(RECENT_FAVORITES_SHOWN), &[q("only")]);
        assert!(Favorites::new().most_recent(3).is_empty());
    }

    proptest! {
        #[test]
        fn toggle_membership_matches_parity(text in ".{0,40}", toggles in 0usize..20) {
            let quote = Quote::new(text);
            let mut favorites = Favorites::new();
            for _ in 0..toggles {
                favorites.toggle(&quote);
            }
            let copies = favorites.iter().filter(|fav| **fav == quote).count();
            prop_assert!(copies <= 1);
            prop_assert_eq!(favorites.contains(&quote), toggles % 2 == 1);
        }

        #[test]
        fn never_holds_duplicates(ops in proptest::collection::vec((0u8..4, any::<bool>()), 0..50)) {
            let mut favorites = Favorites::new();
            for (id, toggle) in ops {
                let quote = Quote::new(format!("quote {}", id));
                if toggle {
                    favorites.toggle(&quote);
                } else {
                    favorites.insert(quote);
                }
            }
            let mut seen = std::collections::HashSet::new();
            prop_assert!(favorites.iter().all(|fav| seen.insert(fav.clone())));
        }
    }
}
