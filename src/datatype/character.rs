use std::fmt;

use crate::algebra::{lift2, ordinal, Tri};
use crate::datatype::text::edit_distance;
use crate::datatype::{stable_hash, Integer, Text};
use crate::value::{Textual, Value};

/// Tri-state Unicode scalar value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Character(Tri<char>);

impl Character {
    pub fn new() -> Self {
        Self(Tri::Unset)
    }
    pub fn of(value: char) -> Self {
        Self(Tri::Set(value))
    }
    pub fn from_text(text: &Text) -> Self {
        match text.get() {
            Some(s) => Self::parse(s),
            None => Self::new(),
        }
    }
    pub fn state(&self) -> Tri<char> {
        self.0
    }
    pub fn get(&self) -> Option<char> {
        self.0.into_option()
    }
    // Case mappings that expand to several characters (e.g. 'ß') leave the
    // character as it is.
    pub fn upper_case(&self) -> Character {
        Self(self.0.map(|c| single(c.to_uppercase()).unwrap_or(c)))
    }
    pub fn lower_case(&self) -> Character {
        Self(self.0.map(|c| single(c.to_lowercase()).unwrap_or(c)))
    }
    pub fn length(&self) -> Integer {
        Integer::from(self.0.map(|_| 1i64))
    }
    /// The `#^` operator: a one character String.
    pub fn promote(&self) -> Text {
        Text::from(self.0.map(String::from))
    }
    /// Step to the next code point; stepping into the surrogate gap or past
    /// the last scalar value leaves the character unset.
    pub fn inc(&mut self) -> &mut Self {
        self.0 = self.0.and_then(|c| char::from_u32(c as u32 + 1).into());
        self
    }
    pub fn dec(&mut self) -> &mut Self {
        self.0 = self
            .0
            .and_then(|c| (c as u32).checked_sub(1).and_then(char::from_u32).into());
        self
    }
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    let first = mapped.next()?;
    match mapped.next() {
        Some(_) => None,
        None => Some(first),
    }
}

impl Value for Character {
    const TYPE_NAME: &'static str = "Character";
    fn is_set(&self) -> bool {
        self.0.is_set()
    }
    fn compare(&self, other: &Self) -> Integer {
        Integer::from(lift2(self.0, other.0, |a, b| ordinal(a.cmp(&b))))
    }
    fn fuzzy(&self, other: &Self) -> Integer {
        Integer::from(lift2(self.0, other.0, |a, b| {
            edit_distance(a.encode_utf8(&mut [0; 4]), b.encode_utf8(&mut [0; 4])) as i64
        }))
    }
    fn as_text(&self) -> Text {
        self.promote()
    }
    fn hash_code(&self) -> Integer {
        Integer::from(self.0.map(|c| stable_hash(&(c as u32).to_le_bytes())))
    }
    fn to_json(&self) -> Option<serde_json::Value> {
        self.get().map(|c| serde_json::Value::String(c.to_string()))
    }
}

impl Textual for Character {
    /// Exactly one character; anything else is unset.
    fn parse(text: &str) -> Self {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::of(c),
            _ => Self::new(),
        }
    }
}

impl From<char> for Character {
    fn from(value: char) -> Self {
        Self::of(value)
    }
}
impl From<Tri<char>> for Character {
    fn from(value: Tri<char>) -> Self {
        Self(value)
    }
}
impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Tri::Set(c) => write!(f, "{}", c),
            Tri::Unset => Ok(()),
        }
    }
}
