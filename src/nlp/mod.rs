//! Natural Language Processing components
//!
//! Language resolution, tokenization, stopword filtering, stemming and
//! lemmatization, tied together by the [`cleaner::TextCleaner`] pipeline.

pub mod cleaner;
pub mod language;
pub mod morphology;
pub mod stopwords;
pub mod tokenizer;
