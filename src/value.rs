//! The Value Contract.
//!
//! [`Value`] is the capability set every built-in value implements: the set
//! query, ordering and equality, fuzzy comparison, text and hash forms, the
//! structured projection, and the reinitializing mutators. Only the few
//! domain-specific operations are required; everything derivable (the six
//! comparisons, the mutators) is provided once here on top of the algebra.
//!
//! [`AnyValue`] is the object-safe mirror used by the type-erased generic
//! bases ([`crate::pair::Pair`], [`crate::sequence::Cursor`],
//! [`crate::function::Function`]). A blanket impl covers every cloneable
//! value, and comparing two values of different runtime types is unset.

use std::any::Any;
use std::fmt;

use crate::datatype::{Boolean, Integer, Text};
use crate::specialize::Signature;

pub trait Value: fmt::Debug + Default + Send + 'static {
    // static stuff which needs to be implemented downstream
    const TYPE_NAME: &'static str;

    /// Host-side view of the set flag.
    fn is_set(&self) -> bool;
    /// The single ordering primitive (-1/0/1), unset when either side is unset
    /// or the operands are not comparable.
    fn compare(&self, other: &Self) -> Integer;
    fn as_text(&self) -> Text;
    fn hash_code(&self) -> Integer;
    /// Structured projection; unset values project to an absent element.
    fn to_json(&self) -> Option<serde_json::Value>;

    // pre-made implementations
    fn signature() -> Signature {
        Signature::concrete(Self::TYPE_NAME)
    }
    /// The `?` operator: always a set Boolean.
    fn query(&self) -> Boolean {
        Boolean::of(self.is_set())
    }
    fn equals(&self, other: &Self) -> Boolean {
        self.compare(other).test(|o| o == 0)
    }
    fn not_equals(&self, other: &Self) -> Boolean {
        self.equals(other).negate()
    }
    fn less_than(&self, other: &Self) -> Boolean {
        self.compare(other).test(|o| o < 0)
    }
    fn less_or_equal(&self, other: &Self) -> Boolean {
        self.compare(other).test(|o| o <= 0)
    }
    fn greater_than(&self, other: &Self) -> Boolean {
        self.compare(other).test(|o| o > 0)
    }
    fn greater_or_equal(&self, other: &Self) -> Boolean {
        self.compare(other).test(|o| o >= 0)
    }
    fn fuzzy(&self, other: &Self) -> Integer {
        self.compare(other)
    }
    fn replace(&mut self, other: &Self)
    where
        Self: Clone,
    {
        *self = other.clone();
    }
    fn copy(&mut self, other: &Self)
    where
        Self: Clone,
    {
        self.replace(other);
    }
    fn merge(&mut self, other: &Self)
    where
        Self: Clone,
    {
        if other.is_set() {
            *self = other.clone();
        }
    }
    fn pipe(&mut self, other: &Self)
    where
        Self: Clone,
    {
        self.merge(other);
    }
}

/// Canonical text form boundary. Malformed text yields an unset value.
pub trait Textual: Value {
    fn parse(text: &str) -> Self;
}

pub trait AnyValue: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn any_type_name(&self) -> &'static str;
    fn any_is_set(&self) -> bool;
    fn any_compare(&self, other: &dyn AnyValue) -> Integer;
    fn any_equals(&self, other: &dyn AnyValue) -> Boolean;
    fn any_fuzzy(&self, other: &dyn AnyValue) -> Integer;
    fn any_text(&self) -> Text;
    fn any_hash(&self) -> Integer;
    fn any_json(&self) -> Option<serde_json::Value>;
    fn any_clone(&self) -> Box<dyn AnyValue>;
}

impl<T: Value + Clone + Sync> AnyValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn any_type_name(&self) -> &'static str {
        T::TYPE_NAME
    }
    fn any_is_set(&self) -> bool {
        self.is_set()
    }
    fn any_compare(&self, other: &dyn AnyValue) -> Integer {
        match downcast::<T>(other) {
            Some(other) => self.compare(other),
            None => Integer::new(),
        }
    }
    fn any_equals(&self, other: &dyn AnyValue) -> Boolean {
        match downcast::<T>(other) {
            Some(other) => self.equals(other),
            None => Boolean::new(),
        }
    }
    fn any_fuzzy(&self, other: &dyn AnyValue) -> Integer {
        match downcast::<T>(other) {
            Some(other) => self.fuzzy(other),
            None => Integer::new(),
        }
    }
    fn any_text(&self) -> Text {
        self.as_text()
    }
    fn any_hash(&self) -> Integer {
        self.hash_code()
    }
    fn any_json(&self) -> Option<serde_json::Value> {
        self.to_json()
    }
    fn any_clone(&self) -> Box<dyn AnyValue> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn AnyValue> {
    fn clone(&self) -> Self {
        self.any_clone()
    }
}

/// Narrow a type-erased value back to its concrete type.
pub fn downcast<T: Value>(value: &dyn AnyValue) -> Option<&T> {
    value.as_any().downcast_ref::<T>()
}

/// Narrow and clone; a mismatched runtime type becomes an unset `T`.
pub fn narrow<T: Value + Clone>(value: &dyn AnyValue) -> T {
    downcast::<T>(value).cloned().unwrap_or_default()
}
