//! Type-erased key/value pair, the base behind [`PairOf`](crate::specialize::PairOf).

use crate::algebra::{ordinal, Tri};
use crate::datatype::{Boolean, Integer, Text};
use crate::value::{AnyValue, Value};

/// Set iff both halves are present and set.
#[derive(Debug, Clone, Default)]
pub struct Pair(Tri<(Box<dyn AnyValue>, Box<dyn AnyValue>)>);

impl Pair {
    pub fn new() -> Self {
        Self(Tri::Unset)
    }
    /// Builds a set pair, or an unset one when either half is unset.
    pub fn of(key: Box<dyn AnyValue>, value: Box<dyn AnyValue>) -> Self {
        if key.any_is_set() && value.any_is_set() {
            Self(Tri::Set((key, value)))
        } else {
            Self::new()
        }
    }
    pub fn from_parts(key: Option<Box<dyn AnyValue>>, value: Option<Box<dyn AnyValue>>) -> Self {
        match (key, value) {
            (Some(key), Some(value)) => Self::of(key, value),
            _ => Self::new(),
        }
    }
    pub fn key(&self) -> Option<&dyn AnyValue> {
        self.0.get().map(|(k, _)| k.as_ref())
    }
    pub fn value(&self) -> Option<&dyn AnyValue> {
        self.0.get().map(|(_, v)| v.as_ref())
    }
}

impl Value for Pair {
    const TYPE_NAME: &'static str = "Pair";
    fn is_set(&self) -> bool {
        self.0.is_set()
    }
    /// Keys first, then values; halves of different types are not comparable.
    fn compare(&self, other: &Self) -> Integer {
        let ((k1, v1), (k2, v2)) = match (self.0.get(), other.0.get()) {
            (Some(a), Some(b)) => (a, b),
            _ => return Integer::new(),
        };
        let by_key = k1.any_compare(k2.as_ref());
        match by_key.get() {
            Some(0) => v1.any_compare(v2.as_ref()),
            Some(o) => Integer::of(ordinal(o.cmp(&0))),
            None => Integer::new(),
        }
    }
    fn equals(&self, other: &Self) -> Boolean {
        match (self.0.get(), other.0.get()) {
            (Some((k1, v1)), Some((k2, v2))) => k1.any_equals(k2.as_ref()).and(&v1.any_equals(v2.as_ref())),
            _ => Boolean::new(),
        }
    }
    fn as_text(&self) -> Text {
        match self.0.get() {
            Some((k, v)) => k.any_text().concat(&Text::of("=")).concat(&v.any_text()),
            None => Text::new(),
        }
    }
    fn hash_code(&self) -> Integer {
        match self.0.get() {
            Some((k, v)) => Integer::from(
                k.any_hash()
                    .state()
                    .zip(v.any_hash().state())
                    .map(|(k, v)| k.wrapping_mul(31).wrapping_add(v)),
            ),
            None => Integer::new(),
        }
    }
    fn to_json(&self) -> Option<serde_json::Value> {
        let (k, v) = self.0.get()?;
        let key = k.any_text().get()?.to_string();
        let mut object = serde_json::Map::new();
        object.insert(key, v.any_json()?);
        Some(serde_json::Value::Object(object))
    }
}
