//! Main menu options.
use strum::{Display, EnumIter, IntoEnumIterator};

/// Options offered by the main menu, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum MenuChoice {
    Search,
    Battle,
    Exit,
}

impl MenuChoice {
    /// Key the user types to pick this option.
    pub const fn key(self) -> char {
        match self {
            MenuChoice::Search => '1',
            MenuChoice::Battle => '2',
            MenuChoice::Exit => '3',
        }
    }

    /// Parse a menu line. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::iter().find(|choice| choice.key() == key)
    }

    /// Menu lines such as `1: search`.
    pub fn lines() -> impl Iterator<Item = String> {
        Self::iter().map(|choice| format!("{}: {}", choice.key(), choice))
    }
}
