//! Null prompt implementation.
//!
//! Used when interactive type collection is disabled but the type system
//! requires a `TypePrompt` implementation.

use super::TypePrompt;

/// A prompt that never answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTypePrompt;

impl NullTypePrompt {
    pub const fn new() -> Self {
        Self
    }
}

impl TypePrompt for NullTypePrompt {
    fn select_one(&mut self, _message: &str, _options: &[&str]) -> Option<String> {
        None
    }
}
