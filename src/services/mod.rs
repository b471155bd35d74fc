//! Collaborator seams
//!
//! The crate never talks to the network. Speech-to-text and text completion
//! are capabilities supplied by the caller through [`Transcriber`] and
//! [`Completion`]; this module builds prompts for them, interprets their
//! replies and composes them with the local analysis.

pub mod category;
pub mod prompts;
pub mod structured;
pub mod video;

use std::path::Path;

use crate::errors::{ServiceError, TranscriptionError};

/// "Given a prompt, return text"
pub trait Completion: Send + Sync {
    fn complete(&self, prompt: &str) -> Result<String, ServiceError>;
}

impl<F> Completion for F
where
    F: Fn(&str) -> Result<String, ServiceError> + Send + Sync,
{
    fn complete(&self, prompt: &str) -> Result<String, ServiceError> {
        self(prompt)
    }
}

/// "Given an audio file, return its transcript"
pub trait Transcriber: Send + Sync {
    fn transcribe(&self, audio: &Path) -> Result<String, TranscriptionError>;
}

/// Call `completion` and reject blank replies
pub(crate) fn complete_non_empty<C: Completion + ?Sized>(
    completion: &C,
    prompt: &str,
) -> Result<String, ServiceError> {
    let reply = completion.complete(prompt)?;
    if reply.trim().is_empty() {
        return Err(ServiceError::EmptyReply);
    }
    Ok(reply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_completion() {
        let echo = |prompt: &str| Ok::<_, ServiceError>(format!("echo: {prompt}"));
        assert_eq!(echo.complete("hi").unwrap(), "echo: hi");
    }

    #[test]
    fn test_blank_reply_rejected() {
        let blank = |_: &str| Ok::<_, ServiceError>("   ".to_string());
        assert!(matches!(
            complete_non_empty(&blank, "x"),
            Err(ServiceError::EmptyReply)
        ));
    }
}
