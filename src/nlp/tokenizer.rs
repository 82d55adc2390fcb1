//! Whitespace tokenization
//!
//! Sentences arrive pre-segmented from the text-acquisition side. This module
//! turns raw sentence or paragraph strings into [`Sentence`] values, plus the
//! cleanup that scraped article paragraphs need before ranking.

use crate::types::Sentence;
use regex::Regex;
use std::sync::LazyLock;

/// Bracketed digit runs such as `[12]` or `[]`
static CITATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[0-9]*\]").expect("Invalid citation regex"));

/// Runs of ASCII spaces
static SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" +").expect("Invalid spaces regex"));

/// A whitespace tokenizer
#[derive(Debug, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer
    pub fn new() -> Self {
        Self
    }

    /// Tokenize one sentence string
    pub fn tokenize(&self, text: &str) -> Sentence {
        let tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();

        Sentence {
            text: text.trim().to_string(),
            tokens,
        }
    }

    /// Tokenize a sequence of sentence strings, preserving order
    pub fn tokenize_all<I, S>(&self, texts: I) -> Vec<Sentence>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .map(|text| self.tokenize(text.as_ref()))
            .collect()
    }

    /// Clean scraped paragraphs and tokenize the survivors
    ///
    /// Paragraphs that are blank after [`clean_paragraph`] are dropped, so the
    /// returned sentences may be fewer than the inputs.
    pub fn sentences_from_paragraphs<I, S>(&self, paragraphs: I) -> Vec<Sentence>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paragraphs
            .into_iter()
            .filter_map(|p| clean_paragraph(p.as_ref()))
            .map(|p| self.tokenize(&p))
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Strip citation markers and collapse runs of spaces
///
/// Citation markers are bracketed digit runs such as `[12]` or `[]`; each is
/// replaced by a single space. Returns `None` when nothing but whitespace
/// remains.
pub fn clean_paragraph(text: &str) -> Option<String> {
    let stripped = CITATION.replace_all(text, " ");
    let cleaned = SPACES.replace_all(&stripped, " ");

    if cleaned.trim().is_empty() {
        None
    } else {
        Some(cleaned.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = Tokenizer::new();
        let sentence = tokenizer.tokenize("Hello world.\tThis is\na test.");

        assert_eq!(
            sentence.tokens,
            vec!["Hello", "world.", "This", "is", "a", "test."]
        );
    }

    #[test]
    fn test_short_tokens_kept() {
        let tokenizer = Tokenizer::new();
        let sentence = tokenizer.tokenize("a cat is on the mat");

        assert_eq!(sentence.tokens, vec!["a", "cat", "is", "on", "the", "mat"]);
    }

    #[test]
    fn test_unicode_tokens() {
        let tokenizer = Tokenizer::new();
        let sentence = tokenizer.tokenize("Café naïve 日本語");

        assert_eq!(sentence.tokens, vec!["Café", "naïve", "日本語"]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::new();
        let sentence = tokenizer.tokenize("   ");

        assert!(sentence.is_empty());
        assert_eq!(sentence.text, "");
    }

    #[test]
    fn test_tokenize_all_preserves_order() {
        let tokenizer = Tokenizer::new();
        let sentences = tokenizer.tokenize_all(["first one", "second one"]);

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].tokens[0], "first");
        assert_eq!(sentences[1].tokens[0], "second");
    }

    #[test]
    fn test_clean_citation_markers() {
        let cleaned = clean_paragraph("Rust is fast.[1] It is safe.[23][]").unwrap();
        assert_eq!(cleaned, "Rust is fast. It is safe. ");
    }

    #[test]
    fn test_clean_keeps_other_brackets() {
        let cleaned = clean_paragraph("see [note] and [a1]").unwrap();
        assert_eq!(cleaned, "see [note] and [a1]");
    }

    #[test]
    fn test_clean_mixed_markers() {
        let cleaned = clean_paragraph("a[12] b [x] c[]  d").unwrap();
        assert_eq!(cleaned, "a b [x] c d");
    }

    #[test]
    fn test_clean_collapses_spaces() {
        let cleaned = clean_paragraph("too    many  spaces").unwrap();
        assert_eq!(cleaned, "too many spaces");
    }

    #[test]
    fn test_clean_drops_blank() {
        assert_eq!(clean_paragraph("\n"), None);
        assert_eq!(clean_paragraph(" "), None);
        assert_eq!(clean_paragraph("[4] [5]"), None);
    }

    #[test]
    fn test_sentences_from_paragraphs() {
        let tokenizer = Tokenizer::new();
        let sentences =
            tokenizer.sentences_from_paragraphs(["The cat sat.[1]", "\n", "Dogs  bark."]);

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].tokens, vec!["The", "cat", "sat."]);
        assert_eq!(sentences[1].text, "Dogs bark.");
    }
}
