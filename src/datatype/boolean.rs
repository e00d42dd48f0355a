use std::fmt;
use std::ops;

use crate::algebra::{lift2, ordinal, Tri};
use crate::datatype::{Integer, Text};
use crate::value::{Textual, Value};

/// Tri-state boolean.
///
/// Besides the plain logical operators it carries two latch rules:
/// `add_assign` and `pipe` are sticky ORs, so once the receiver is true it
/// stays true. They differ on unset input: `add_assign` lets an unset
/// argument drop the receiver to unset, `pipe` ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Boolean(Tri<bool>);

impl Boolean {
    pub fn new() -> Self {
        Self(Tri::Unset)
    }
    pub fn of(value: bool) -> Self {
        Self(Tri::Set(value))
    }
    /// Parsing from a language-level String: unset input stays unset.
    pub fn from_text(text: &Text) -> Self {
        match text.get() {
            Some(s) => Self::parse(s),
            None => Self::new(),
        }
    }
    pub fn state(&self) -> Tri<bool> {
        self.0
    }
    pub fn get(&self) -> Option<bool> {
        self.0.into_option()
    }
    /// Set and true.
    pub fn is_true(&self) -> bool {
        self.0 == Tri::Set(true)
    }
    /// Set and false.
    pub fn is_false(&self) -> bool {
        self.0 == Tri::Set(false)
    }
    pub fn negate(&self) -> Boolean {
        Self(self.0.map(|b| !b))
    }
    pub fn and(&self, other: &Boolean) -> Boolean {
        Self(lift2(self.0, other.0, |a, b| a && b))
    }
    pub fn or(&self, other: &Boolean) -> Boolean {
        Self(lift2(self.0, other.0, |a, b| a || b))
    }
    pub fn xor(&self, other: &Boolean) -> Boolean {
        Self(lift2(self.0, other.0, |a, b| a ^ b))
    }
    pub fn add(&self, other: &Boolean) -> Boolean {
        self.or(other)
    }
    /// Collects booleans to see whether any one of them is true.
    pub fn add_assign(&mut self, other: &Boolean) {
        self.0.assign_with(&other.0, |a, b| Some(*a || *b));
    }
}

impl Value for Boolean {
    const TYPE_NAME: &'static str = "Boolean";
    fn is_set(&self) -> bool {
        self.0.is_set()
    }
    fn compare(&self, other: &Self) -> Integer {
        Integer::from(lift2(self.0, other.0, |a, b| ordinal(a.cmp(&b))))
    }
    fn as_text(&self) -> Text {
        Text::from(self.0.map(|b| b.to_string()))
    }
    fn hash_code(&self) -> Integer {
        Integer::from(self.0.map(|b| if b { 1231i64 } else { 1237 }))
    }
    fn to_json(&self) -> Option<serde_json::Value> {
        self.get().map(serde_json::Value::Bool)
    }
    fn pipe(&mut self, other: &Self) {
        self.0.accumulate_from(&other.0, |a, b| *a || *b);
    }
}

impl Textual for Boolean {
    /// Unlike the other types, any text that is not `true` is a set false.
    fn parse(text: &str) -> Self {
        Self::of(text.trim().eq_ignore_ascii_case("true"))
    }
}

impl From<bool> for Boolean {
    fn from(value: bool) -> Self {
        Self::of(value)
    }
}
impl From<Tri<bool>> for Boolean {
    fn from(value: Tri<bool>) -> Self {
        Self(value)
    }
}
impl ops::Not for Boolean {
    type Output = Boolean;
    fn not(self) -> Boolean {
        self.negate()
    }
}
impl ops::BitAnd for Boolean {
    type Output = Boolean;
    fn bitand(self, other: Boolean) -> Boolean {
        self.and(&other)
    }
}
impl ops::BitOr for Boolean {
    type Output = Boolean;
    fn bitor(self, other: Boolean) -> Boolean {
        self.or(&other)
    }
}
impl ops::BitXor for Boolean {
    type Output = Boolean;
    fn bitxor(self, other: Boolean) -> Boolean {
        self.xor(&other)
    }
}
impl fmt::Display for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Tri::Set(b) => write!(f, "{}", b),
            Tri::Unset => Ok(()),
        }
    }
}
