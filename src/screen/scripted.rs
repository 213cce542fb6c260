//! A [Screen] that plays back a script of key presses, for tests.

use super::{Key, Modal, Screen};
use crate::error::ScreenError;
use std::collections::VecDeque;

/// Answers every acknowledgement dialog with ENTER and every choice from the script,
/// recording each dialog it was shown.
#[derive(Default)]
pub struct ScriptedScreen {
    script: VecDeque<Key>,
    pub shown: Vec<Modal>,
}

impl ScriptedScreen {
    /// Creates a screen that answers choices with the given digit keys, in order.
    pub fn new(choices: &str) -> Self {
        Self {
            script: choices.chars().map(Key::Char).collect(),
            shown: vec![],
        }
    }

    /// Returns true once every scripted choice has been used.
    pub fn finished(&self) -> bool {
        self.script.is_empty()
    }

    /// The dialogs shown with the given title.
    pub fn titled(&self, title: &str) -> Vec<&Modal> {
        self.shown
            .iter()
            .filter(|m| m.title.as_deref() == Some(title))
            .collect()
    }

    /// Returns true if any dialog's text contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.shown.iter().any(|m| m.text.contains(needle))
    }
}

impl Screen for ScriptedScreen {
    fn show_modal(&mut self, modal: &Modal) -> Result<Key, ScreenError> {
        self.shown.push(modal.clone());
        if modal.accepts(Key::Enter) {
            return Ok(Key::Enter);
        }
        let key = self.script.pop_front().ok_or(ScreenError::Interrupted)?;
        assert!(
            modal.accepts(key),
            "scripted key {:?} is not offered by {:?}",
            key,
            modal
        );
        Ok(key)
    }
}
