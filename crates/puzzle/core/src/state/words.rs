use std::fmt;

use crate::error::{ErrorSeverity, PuzzleError};

/// Position of an entry in the word list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordId(pub u32);

impl WordId {
    #[inline]
    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "word#{}", self.0)
    }
}

/// Opaque RGB color assigned to a solved word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB`, uppercase.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// `#RRGGBBAA`, uppercase. Used for translucent solved-cell backgrounds.
    pub fn to_hex_with_alpha(self, alpha: u8) -> String {
        format!("{}{:02X}", self.to_hex(), alpha)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Finite stack of colors, consumed from the top as words are solved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorPool {
    colors: Vec<Color>,
}

impl ColorPool {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color the next solve will receive.
    pub fn peek(&self) -> Option<Color> {
        self.colors.last().copied()
    }

    pub(crate) fn pop(&mut self) -> Option<Color> {
        self.colors.pop()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordEntry {
    text: String,
    solved: bool,
    color: Option<Color>,
}

impl WordEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            solved: false,
            color: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Assigned at solve time; `None` while the word is unsolved.
    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WordListError {
    #[error("word list is empty")]
    Empty,

    #[error("word at position {index} is empty")]
    EmptyWord { index: usize },

    #[error("{colors} colors provisioned for {words} words")]
    InsufficientColors { words: usize, colors: usize },
}

impl PuzzleError for WordListError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "WORDS_EMPTY",
            Self::EmptyWord { .. } => "WORDS_EMPTY_WORD",
            Self::InsufficientColors { .. } => "WORDS_INSUFFICIENT_COLORS",
        }
    }
}

/// Ordered target words together with the color pool they draw from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawWordList"))]
pub struct WordList {
    entries: Vec<WordEntry>,
    pool: ColorPool,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawWordList {
    entries: Vec<WordEntry>,
    pool: ColorPool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawWordList> for WordList {
    type Error = WordListError;

    /// The pool must still cover every unsolved word.
    fn try_from(raw: RawWordList) -> Result<Self, Self::Error> {
        let RawWordList { entries, pool } = raw;
        WordList::check(&entries)?;
        let unsolved = entries.iter().filter(|entry| !entry.solved).count();
        if pool.len() < unsolved {
            return Err(WordListError::InsufficientColors {
                words: unsolved,
                colors: pool.len(),
            });
        }
        Ok(Self { entries, pool })
    }
}

impl WordList {
    /// Builds a list whose pool holds at least one color per word.
    pub fn new<I, S>(words: I, colors: Vec<Color>) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<WordEntry> = words.into_iter().map(WordEntry::new).collect();
        Self::check(&entries)?;
        if colors.len() < entries.len() {
            return Err(WordListError::InsufficientColors {
                words: entries.len(),
                colors: colors.len(),
            });
        }

        Ok(Self {
            entries,
            pool: ColorPool::new(colors),
        })
    }

    fn check(entries: &[WordEntry]) -> Result<(), WordListError> {
        if entries.is_empty() {
            return Err(WordListError::Empty);
        }
        if let Some(index) = entries.iter().position(|entry| entry.text.is_empty()) {
            return Err(WordListError::EmptyWord { index });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn entry(&self, id: WordId) -> Option<&WordEntry> {
        self.entries.get(id.get())
    }

    pub fn iter(&self) -> impl Iterator<Item = (WordId, &WordEntry)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (WordId(index as u32), entry))
    }

    pub fn solved_words(&self) -> impl Iterator<Item = (WordId, &WordEntry)> + '_ {
        self.iter().filter(|(_, entry)| entry.solved)
    }

    /// Number of words not yet solved.
    pub fn remaining(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.solved).count()
    }

    pub fn is_all_solved(&self) -> bool {
        self.entries.iter().all(|entry| entry.solved)
    }

    /// First unsolved entry whose text equals `text` exactly.
    pub fn find_unsolved(&self, text: &str) -> Option<WordId> {
        self.entries
            .iter()
            .position(|entry| !entry.solved && entry.text == text)
            .map(|index| WordId(index as u32))
    }

    /// Color the next solved word will receive; used to tint live highlights.
    pub fn next_color(&self) -> Option<Color> {
        self.pool.peek()
    }

    pub fn pool(&self) -> &ColorPool {
        &self.pool
    }

    pub(crate) fn pool_mut(&mut self) -> &mut ColorPool {
        &mut self.pool
    }

    /// Returns false if `id` is unknown or already solved.
    pub(crate) fn mark_solved(&mut self, id: WordId, color: Color) -> bool {
        match self.entries.get_mut(id.get()) {
            Some(entry) if !entry.solved => {
                entry.solved = true;
                entry.color = Some(color);
                true
            }
            _ => false,
        }
    }
}
