//! Queue-driven prompter for testing the collection flow.

use std::{
    collections::VecDeque,
    sync::Mutex,
};

use docforge_core::{
    application::{
        ApplicationError,
        ports::{Prompter, SelectChoice},
    },
    error::ForgeResult,
};

/// One scripted reply, consumed in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Integer(i64),
    Selection(Vec<usize>),
    Confirmed(bool),
}

/// A [`Prompter`] fed from a fixed queue of replies.
///
/// Running out of replies (or hitting a reply of the wrong kind) returns a
/// prompt failure instead of blocking, so a mis-scripted test fails fast
/// rather than looping in the collector's re-ask logic. Rejection messages
/// are recorded for assertions.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: Mutex<VecDeque<Reply>>,
    rejections: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            rejections: Mutex::new(Vec::new()),
        }
    }

    /// Validation messages shown so far, in order.
    pub fn rejections(&self) -> Vec<String> {
        self.rejections.lock().unwrap().clone()
    }

    /// True when every scripted reply was consumed.
    pub fn exhausted(&self) -> bool {
        self.replies.lock().unwrap().is_empty()
    }

    fn next(&self, prompt: &str) -> ForgeResult<Reply> {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| script_error(prompt, "no scripted reply left"))
    }
}

fn script_error(prompt: &str, problem: &str) -> docforge_core::error::ForgeError {
    ApplicationError::PromptFailed {
        reason: format!("{problem} for prompt '{prompt}'"),
    }
    .into()
}

impl Prompter for ScriptedPrompter {
    fn input(&self, message: &str, _default: Option<&str>) -> ForgeResult<String> {
        match self.next(message)? {
            Reply::Text(s) => Ok(s),
            other => Err(script_error(message, &format!("expected Text, got {other:?}"))),
        }
    }

    fn integer(&self, message: &str, _default: i64) -> ForgeResult<i64> {
        match self.next(message)? {
            Reply::Integer(n) => Ok(n),
            other => Err(script_error(message, &format!("expected Integer, got {other:?}"))),
        }
    }

    fn multi_select(&self, message: &str, _choices: &[SelectChoice]) -> ForgeResult<Vec<usize>> {
        match self.next(message)? {
            Reply::Selection(v) => Ok(v),
            other => Err(script_error(message, &format!("expected Selection, got {other:?}"))),
        }
    }

    fn confirm(&self, message: &str, _default: bool) -> ForgeResult<bool> {
        match self.next(message)? {
            Reply::Confirmed(b) => Ok(b),
            other => Err(script_error(message, &format!("expected Confirmed, got {other:?}"))),
        }
    }

    fn reject(&self, message: &str) -> ForgeResult<()> {
        self.rejections.lock().unwrap().push(message.to_string());
        Ok(())
    }
}
