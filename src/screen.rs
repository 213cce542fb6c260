//! The modal dialog contract every player-facing flow is written against.

pub use self::terminal::TerminalScreen;
use crate::error::ScreenError;
use std::fmt::Display;

#[cfg(test)]
pub mod scripted;
mod terminal;

/// Footer shown when any key dismisses the dialog.
pub const ANY_KEY_FOOTER: &str = "= PRESS A KEY =";
/// Footer shown when only ENTER dismisses the dialog.
pub const ENTER_FOOTER: &str = "= Press ENTER =";

/// A key the player pressed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    Enter,
    Char(char),
    /// Any key with no meaning to the game.
    Other,
}

/// A bordered dialog with a title, wrapped text and a footer prompt,
/// dismissed by one of an explicit set of keys.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Modal {
    pub text: String,
    pub title: Option<String>,
    /// The keys that dismiss the dialog; `None` accepts any key.
    pub keys: Option<Vec<Key>>,
    pub footer: Option<String>,
    /// Lines are laid out as given instead of being word-wrapped.
    pub preformatted: bool,
}

impl Modal {
    /// Creates a dialog that any key dismisses.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: None,
            keys: None,
            footer: Some(ANY_KEY_FOOTER.to_string()),
            preformatted: false,
        }
    }

    /// Keeps the text's own line breaks and spacing, for tables.
    pub fn preformatted(mut self) -> Self {
        self.preformatted = true;
        self
    }

    pub fn title(mut self, title: impl ToString) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Restricts the keys that dismiss the dialog.
    pub fn keys(mut self, keys: Vec<Key>, footer: impl Into<String>) -> Self {
        self.keys = Some(keys);
        self.footer = Some(footer.into());
        self
    }

    /// Only ENTER dismisses the dialog.
    pub fn enter(self) -> Self {
        self.keys(vec![Key::Enter], ENTER_FOOTER)
    }

    /// Returns whether `key` dismisses the dialog.
    pub fn accepts(&self, key: Key) -> bool {
        match &self.keys {
            Some(keys) => keys.contains(&key),
            None => true,
        }
    }
}

/// Something that can show a [Modal] and block until the player presses an accepted key.
pub trait Screen {
    /// Shows the dialog and returns the key that dismissed it,
    /// which is always one the dialog accepts.
    fn show_modal(&mut self, modal: &Modal) -> Result<Key, ScreenError>;
}

/// The key that selects the menu entry at `idx`: 1 through 9, then 0.
pub fn menu_key(idx: usize) -> char {
    char::from(b'0' + ((idx + 1) % 10) as u8)
}

/// A numbered single-choice menu.
pub struct Menu<T> {
    lines: Vec<String>,
    options: Vec<(Key, T)>,
}

impl<T> Menu<T> {
    /// The most entries a menu can hold, one per digit key.
    pub const MAX_OPTIONS: usize = 10;

    /// Creates a menu that starts with a line of text.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            lines: vec![heading.into()],
            options: vec![],
        }
    }

    /// Adds another line of text above the options.
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    /// Adds an option, labelled with the next digit key.
    pub fn option(&mut self, label: impl Display, value: T) {
        debug_assert!(self.options.len() < Self::MAX_OPTIONS);
        let key = menu_key(self.options.len());
        self.lines.push(format!("{}) {}", key, label));
        self.options.push((Key::Char(key), value));
    }

    /// Shows the menu and returns the chosen value.
    pub fn choose<S: Screen + ?Sized>(
        mut self,
        screen: &mut S,
        title: impl ToString,
        footer: &str,
    ) -> Result<T, ScreenError> {
        let keys = self.options.iter().map(|(key, _)| *key).collect();
        let modal = Modal::new(self.lines.join("\n"))
            .title(title)
            .keys(keys, footer);
        loop {
            let pressed = screen.show_modal(&modal)?;
            if let Some(idx) = self.options.iter().position(|(key, _)| *key == pressed) {
                return Ok(self.options.swap_remove(idx).1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_keys_run_one_to_nine_then_zero() {
        let keys = (0..10).map(menu_key).collect::<String>();
        assert_eq!(keys, "1234567890");
    }

    #[test]
    fn modal_accepts_only_listed_keys() {
        let modal = Modal::new("hi").keys(vec![Key::Char('1')], "= Choose =");
        assert!(modal.accepts(Key::Char('1')));
        assert!(!modal.accepts(Key::Char('2')));
        assert!(!modal.accepts(Key::Enter));
        assert!(Modal::new("any").accepts(Key::Other));
    }
}
