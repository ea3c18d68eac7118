//! Per-letter feedback types
//!
//! The matcher produces an [`AnnotatedGuess`]: one [`AnnotatedLetter`] per
//! guess position, each carrying a [`MatchState`]. Colors and symbols are
//! owned by the presenters, not by these types.

use std::fmt;

/// Classification of one guess letter relative to the secret
///
/// Variants are ordered by display precedence, so merging several
/// annotations of the same letter keeps the strongest with `max`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchState {
    /// No unmatched occurrence of the letter remains in the secret
    #[default]
    NoMatch,
    /// Letter occurs elsewhere in the secret with multiplicity to spare
    PartialMatch,
    /// Letter equals the secret's letter at the same position
    FullMatch,
}

impl MatchState {
    /// All states in display precedence order
    pub const ALL: [Self; 3] = [Self::NoMatch, Self::PartialMatch, Self::FullMatch];
}

impl fmt::Display for MatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoMatch => "no match",
            Self::PartialMatch => "partial match",
            Self::FullMatch => "full match",
        };
        f.pad(name)
    }
}

/// A guess letter together with its resolved state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnnotatedLetter {
    character: char,
    state: MatchState,
}

impl AnnotatedLetter {
    pub(crate) const fn new(character: char, state: MatchState) -> Self {
        Self { character, state }
    }

    #[inline]
    #[must_use]
    pub const fn character(&self) -> char {
        self.character
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> MatchState {
        self.state
    }
}

/// Fully resolved feedback for one guess, in guess order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AnnotatedGuess {
    letters: Vec<AnnotatedLetter>,
}

impl AnnotatedGuess {
    pub(crate) const fn from_letters(letters: Vec<AnnotatedLetter>) -> Self {
        Self { letters }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[AnnotatedLetter] {
        &self.letters
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnnotatedLetter> {
        self.letters.iter()
    }

    /// States in position order
    pub fn states(&self) -> impl Iterator<Item = MatchState> + '_ {
        self.letters.iter().map(AnnotatedLetter::state)
    }

    /// The guess text these annotations were computed for
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(AnnotatedLetter::character).collect()
    }

    /// Number of positions in the given state
    #[must_use]
    pub fn count(&self, state: MatchState) -> usize {
        self.states().filter(|&s| s == state).count()
    }

    /// True when every position is a full match
    ///
    /// An empty annotation is never considered solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.is_empty() && self.states().all(|s| s == MatchState::FullMatch)
    }
}

impl<'a> IntoIterator for &'a AnnotatedGuess {
    type Item = &'a AnnotatedLetter;
    type IntoIter = std::slice::Iter<'a, AnnotatedLetter>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.iter()
    }
}
