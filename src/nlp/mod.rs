//! Natural Language Processing components
//!
//! This module provides whitespace tokenization and stopword sets.

pub mod stopwords;
pub mod tokenizer;
