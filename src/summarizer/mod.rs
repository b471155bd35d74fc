//! Summarization components
//!
//! Extractive summarization: picks the transcript sentences that carry the
//! most document keywords per word.

pub mod selector;
