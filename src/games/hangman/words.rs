use std::fs;
use std::path::Path;

use rand::Rng;
use tracing::{info, warn};

use crate::core::error::WordSourceError;

pub const DEFAULT_WORDS_FILE: &str = "fruits.txt";

/// Used whenever the word list cannot be read.
pub const FALLBACK_WORDS: [&str; 3] = ["Mango", "Apple", "Banana"];

/// Candidate words for the game. Never empty.
#[derive(Debug)]
pub struct WordSource {
    words: Vec<String>,
    fallback_reason: Option<WordSourceError>,
}

impl WordSource {
    /// Load one word per line, trimmed. Blank lines are skipped.
    /// Any failure falls back to [`FALLBACK_WORDS`] so the game stays playable.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match read_words(path) {
            Ok(words) => {
                info!(path = %path.display(), count = words.len(), "loaded word list");
                Self { words, fallback_reason: None }
            }
            Err(e) => {
                warn!(error = %e, "word list unavailable, using default list");
                Self {
                    words: fallback_words(),
                    fallback_reason: Some(e),
                }
            }
        }
    }

    /// Build from words already in memory; blank entries are dropped and an
    /// empty list becomes the fallback list.
    pub fn from_words(words: Vec<String>) -> Self {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            Self::fallback()
        } else {
            Self { words, fallback_reason: None }
        }
    }

    pub fn fallback() -> Self {
        Self {
            words: fallback_words(),
            fallback_reason: None,
        }
    }

    /// Uniform pick from the list.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
        &self.words[rng.random_range(0..self.words.len())]
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Why the default list is in use, if loading failed.
    pub fn fallback_reason(&self) -> Option<&WordSourceError> {
        self.fallback_reason.as_ref()
    }
}

fn fallback_words() -> Vec<String> {
    FALLBACK_WORDS.iter().map(|w| w.to_string()).collect()
}

fn read_words(path: &Path) -> Result<Vec<String>, WordSourceError> {
    let text = fs::read_to_string(path).map_err(|source| WordSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    if words.is_empty() {
        return Err(WordSourceError::Empty { path: path.to_path_buf() });
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::io::Write;

    #[test]
    fn missing_file_falls_back_to_default_list() {
        let dir = tempfile::tempdir().unwrap();
        let source = WordSource::load(dir.path().join("missing.txt"));

        assert_eq!(source.words(), &["Mango", "Apple", "Banana"]);
        assert!(matches!(source.fallback_reason(), Some(WordSourceError::Io { .. })));

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert!(FALLBACK_WORDS.contains(&source.pick(&mut rng)));
        }
    }

    #[test]
    fn lines_are_trimmed_and_blank_lines_skipped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  Papaya  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "\tDragon fruit").unwrap();
        writeln!(file, "   ").unwrap();

        let source = WordSource::load(file.path());
        assert_eq!(source.words(), &["Papaya", "Dragon fruit"]);
        assert!(source.fallback_reason().is_none());
    }

    #[test]
    fn file_without_words_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "\n  \n").unwrap();

        let source = WordSource::load(file.path());
        assert_eq!(source.words().len(), FALLBACK_WORDS.len());
        assert!(matches!(source.fallback_reason(), Some(WordSourceError::Empty { .. })));
    }

    #[test]
    fn pick_covers_the_whole_list() {
        let source = WordSource::from_words(vec!["Lime".into(), "Pear".into(), " ".into()]);
        assert_eq!(source.words().len(), 2);

        let mut rng = StdRng::seed_from_u64(7);
        let picks: Vec<&str> = (0..100).map(|_| source.pick(&mut rng)).collect();
        assert!(picks.contains(&"Lime"));
        assert!(picks.contains(&"Pear"));
    }
}
