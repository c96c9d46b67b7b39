//! Word pair catalog.
//!
//! The catalog is data: a fixed list of related pairs drawn uniformly at
//! random. Renderers may ship their own table as JSON; `builtin()` is the
//! table used when they don't.

use crate::core::error::{GameError, Result};
use crate::core::rng::GameRng;

use super::pair::WordPair;

/// Source of word pairs for new games.
///
/// Implementations must pick uniformly among their pairs and must never be
/// empty.
pub trait WordPairSource {
    /// Draw the pair for the next game.
    fn pick_random_pair(&self, rng: &mut GameRng) -> WordPair;
}

const BUILTIN_PAIRS: &[(&str, &str)] = &[
    ("Coffee", "Tea"),
    ("Cat", "Dog"),
    ("Beach", "Pool"),
    ("Pizza", "Burger"),
    ("Guitar", "Violin"),
    ("Train", "Bus"),
    ("Apple", "Pear"),
    ("Football", "Rugby"),
    ("Winter", "Autumn"),
    ("Doctor", "Nurse"),
    ("Moon", "Sun"),
    ("Piano", "Organ"),
    ("Castle", "Palace"),
    ("Lion", "Tiger"),
    ("Book", "Magazine"),
    ("Wine", "Beer"),
    ("Mountain", "Hill"),
    ("Rain", "Snow"),
    ("Cinema", "Theatre"),
    ("Bicycle", "Motorcycle"),
];

/// A fixed, non-empty list of word pairs.
///
/// ## Example
///
/// ```
/// use mr_whitey::core::GameRng;
/// use mr_whitey::words::{WordCatalog, WordPair, WordPairSource};
///
/// let catalog = WordCatalog::new(vec![WordPair::new("Coffee", "Tea")]).unwrap();
/// let mut rng = GameRng::new(1);
///
/// assert_eq!(catalog.pick_random_pair(&mut rng), WordPair::new("Coffee", "Tea"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordCatalog {
    pairs: Vec<WordPair>,
}

impl WordCatalog {
    /// Build a catalog, rejecting an empty list or an invalid pair.
    pub fn new(pairs: Vec<WordPair>) -> Result<Self> {
        if pairs.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        for pair in &pairs {
            pair.validate()?;
        }
        Ok(Self { pairs })
    }

    /// The table shipped with the game.
    #[must_use]
    pub fn builtin() -> Self {
        let pairs = BUILTIN_PAIRS
            .iter()
            .map(|&(normal, mr_white)| WordPair::new(normal, mr_white))
            .collect();
        Self { pairs }
    }

    /// Load a catalog from a JSON array of `{ "normal", "mr_white" }` objects.
    ///
    /// `mrWhite` is accepted in place of `mr_white`.
    pub fn from_json(json: &str) -> Result<Self> {
        let pairs: Vec<WordPair> = serde_json::from_str(json)?;
        Self::new(pairs)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always false for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordPair> {
        self.pairs.iter()
    }
}

impl Default for WordCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WordPairSource for WordCatalog {
    fn pick_random_pair(&self, rng: &mut GameRng) -> WordPair {
        let index = rng.gen_index(self.pairs.len());
        self.pairs[index].clone()
    }
}
