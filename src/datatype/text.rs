use std::fmt;
use std::ops;

use crate::algebra::{lift2, lift2_partial, ordinal, Tri};
use crate::datatype::{stable_hash, Boolean, Character, Integer};
use crate::specialize::IteratorOf;
use crate::value::{Textual, Value};

/// Tri-state string; the language-level `String`.
///
/// Lengths, positions and padding widths count characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Text(Tri<String>);

impl Text {
    pub fn new() -> Self {
        Self(Tri::Unset)
    }
    pub fn of(value: impl Into<String>) -> Self {
        Self(Tri::Set(value.into()))
    }
    pub fn state(&self) -> &Tri<String> {
        &self.0
    }
    pub fn get(&self) -> Option<&str> {
        self.0.get().map(String::as_str)
    }

    pub fn concat(&self, other: &Text) -> Text {
        Self(lift2(self.0.as_ref(), other.0.as_ref(), |a, b| format!("{}{}", a, b)))
    }
    pub fn add_char(&self, other: &Character) -> Text {
        Self(lift2(self.0.as_ref(), other.state(), |a, c| format!("{}{}", a, c)))
    }
    pub fn add_assign(&mut self, other: &Text) {
        self.0.assign_with(&other.0, |a, b| Some(format!("{}{}", a, b)));
    }
    pub fn contains(&self, other: &Text) -> Boolean {
        Boolean::from(lift2(self.0.as_ref(), other.0.as_ref(), |a, b| a.contains(b.as_str())))
    }
    pub fn length(&self) -> Integer {
        Integer::from(self.0.as_ref().map(|s| s.chars().count() as i64))
    }
    /// True for the empty string and for whitespace only.
    pub fn is_empty(&self) -> Boolean {
        Boolean::from(self.0.as_ref().map(|s| s.trim().is_empty()))
    }
    pub fn upper_case(&self) -> Text {
        Self(self.0.as_ref().map(|s| s.to_uppercase()))
    }
    pub fn lower_case(&self) -> Text {
        Self(self.0.as_ref().map(|s| s.to_lowercase()))
    }
    pub fn trim(&self) -> Text {
        Self(self.0.as_ref().map(|s| s.trim().to_string()))
    }
    /// First character; unset for an empty string.
    pub fn first(&self) -> Character {
        Character::from(self.0.as_ref().and_then(|s| Tri::from(s.chars().next())))
    }
    pub fn last(&self) -> Character {
        Character::from(self.0.as_ref().and_then(|s| Tri::from(s.chars().next_back())))
    }
    /// Occurrences of a character.
    pub fn count(&self, c: &Character) -> Integer {
        Integer::from(lift2(self.0.as_ref(), c.state(), |s, c| {
            s.chars().filter(|&x| x == c).count() as i64
        }))
    }
    /// Unset when the padded string cannot be allocated.
    pub fn left_padded(&self, width: &Integer) -> Text {
        Self(lift2_partial(self.0.as_ref(), width.state(), |s, w| padded(s, w, true)))
    }
    pub fn right_padded(&self, width: &Integer) -> Text {
        Self(lift2_partial(self.0.as_ref(), width.state(), |s, w| padded(s, w, false)))
    }
    /// Characters in order; an unset string gives an unset iterator.
    pub fn chars(&self) -> IteratorOf<Character> {
        match self.get() {
            Some(s) => s.chars().map(Character::of).collect(),
            None => IteratorOf::new(),
        }
    }
}

fn padded(s: &str, width: i64, left: bool) -> Option<String> {
    let pad = usize::try_from(width).unwrap_or(0).saturating_sub(s.chars().count());
    let mut out = String::new();
    out.try_reserve_exact(pad.checked_add(s.len())?).ok()?;
    if !left {
        out.push_str(s);
    }
    out.extend(std::iter::repeat_n(' ', pad));
    if left {
        out.push_str(s);
    }
    Some(out)
}

/// Case-insensitive Levenshtein distance, counted in characters.
pub(crate) fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let cost = if ca == cb { 0 } else { 1 };
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }
    row[b.len()]
}

impl Value for Text {
    const TYPE_NAME: &'static str = "String";
    fn is_set(&self) -> bool {
        self.0.is_set()
    }
    fn compare(&self, other: &Self) -> Integer {
        Integer::from(lift2(self.0.as_ref(), other.0.as_ref(), |a, b| ordinal(a.cmp(b))))
    }
    fn fuzzy(&self, other: &Self) -> Integer {
        Integer::from(lift2(self.0.as_ref(), other.0.as_ref(), |a, b| {
            edit_distance(a, b) as i64
        }))
    }
    fn as_text(&self) -> Text {
        self.clone()
    }
    fn hash_code(&self) -> Integer {
        Integer::from(self.0.as_ref().map(|s| stable_hash(s.as_bytes())))
    }
    fn to_json(&self) -> Option<serde_json::Value> {
        self.get().map(|s| serde_json::Value::String(s.to_string()))
    }
    fn pipe(&mut self, other: &Self) {
        self.0.accumulate_from(&other.0, |a, b| format!("{}{}", a, b));
    }
}

impl Textual for Text {
    fn parse(text: &str) -> Self {
        Self::of(text)
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::of(value)
    }
}
impl From<String> for Text {
    fn from(value: String) -> Self {
        Self::of(value)
    }
}
impl From<Tri<String>> for Text {
    fn from(value: Tri<String>) -> Self {
        Self(value)
    }
}
impl ops::Add for Text {
    type Output = Text;
    fn add(self, other: Text) -> Text {
        self.concat(&other)
    }
}
impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.0 {
            Tri::Set(s) => write!(f, "{}", s),
            Tri::Unset => Ok(()),
        }
    }
}
