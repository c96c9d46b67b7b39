//! Word pair definition.

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};

/// The two words in circulation for one game.
///
/// Everyone except Mr. White gets `normal`; Mr. White gets `mr_white`.
/// The words are related but must differ. Tables written for the web and
/// mobile front ends spell the second key `mrWhite`; both spellings load.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    pub normal: String,
    #[serde(alias = "mrWhite")]
    pub mr_white: String,
}

impl WordPair {
    /// Create a word pair.
    #[must_use]
    pub fn new(normal: impl Into<String>, mr_white: impl Into<String>) -> Self {
        Self {
            normal: normal.into(),
            mr_white: mr_white.into(),
        }
    }

    /// The word dealt to a seat with the given role.
    #[must_use]
    pub fn word_for(&self, is_mr_white: bool) -> &str {
        if is_mr_white {
            &self.mr_white
        } else {
            &self.normal
        }
    }

    /// Reject blank words and pairs whose words match ignoring case.
    pub fn validate(&self) -> Result<()> {
        let normal = self.normal.trim();
        let mr_white = self.mr_white.trim();
        let same = normal.to_lowercase() == mr_white.to_lowercase();
        if normal.is_empty() || mr_white.is_empty() || same {
            return Err(GameError::InvalidWordPair {
                normal: self.normal.clone(),
                mr_white: self.mr_white.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_for_role() {
        let pair = WordPair::new("Coffee", "Tea");

        assert_eq!(pair.word_for(false), "Coffee");
        assert_eq!(pair.word_for(true), "Tea");
    }

    #[test]
    fn test_validate() {
        assert!(WordPair::new("Cat", "Dog").validate().is_ok());
        assert!(WordPair::new("Cat", "cat").validate().is_err());
        assert!(WordPair::new("Cat", " CAT ").validate().is_err());
        assert!(WordPair::new("", "Dog").validate().is_err());
        assert!(WordPair::new("Cat", "   ").validate().is_err());
    }
}
