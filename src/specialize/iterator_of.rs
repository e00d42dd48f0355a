use std::io::BufRead;
use std::marker::PhantomData;

use crate::datatype::{Boolean, Integer, Text};
use crate::error::Result;
use crate::sequence::{Cursor, CursorState};
use crate::specialize::{Signature, Specialized};
use crate::value::{downcast, narrow, AnyValue, Value};

/// `Iterator of T`.
#[derive(Debug, Default)]
pub struct IteratorOf<T> {
    base: Cursor,
    element: PhantomData<fn() -> T>,
}

impl<T: Value + Clone + Sync> IteratorOf<T> {
    pub fn new() -> Self {
        Self::wrap(Cursor::new())
    }
    /// One element; an unset element gives an unset iterator.
    pub fn of(value: T) -> Self {
        if value.is_set() {
            Self::wrap(Cursor::of(Box::new(value)))
        } else {
            Self::new()
        }
    }
    pub fn from_values(values: Vec<T>) -> Self {
        Self::wrap(Cursor::from_values(
            values
                .into_iter()
                .map(|v| Box::new(v) as Box<dyn AnyValue>)
                .collect(),
        ))
    }
    fn wrap(base: Cursor) -> Self {
        Self {
            base,
            element: PhantomData,
        }
    }

    pub fn has_next(&self) -> Boolean {
        self.base.has_next()
    }
    /// The next element, narrowed. After `close` this is an unset `T`.
    pub fn next(&mut self) -> Result<T> {
        Ok(match self.base.next()? {
            Some(value) => narrow::<T>(value.as_ref()),
            None => T::default(),
        })
    }
    pub fn close(&mut self) {
        self.base.close();
    }
    pub fn state(&self) -> CursorState {
        self.base.state()
    }
    pub fn remaining(&mut self) -> Vec<T> {
        self.base
            .remaining()
            .iter()
            .map(|v| narrow::<T>(v.as_ref()))
            .collect()
    }
}

impl IteratorOf<Text> {
    pub fn lines<R: BufRead + Send + 'static>(reader: R) -> Self {
        Self::wrap(Cursor::from_lines(reader))
    }
    pub fn environment_keys() -> Self {
        Self::wrap(Cursor::environment_keys())
    }
}

impl<T: Value + Clone + Sync> FromIterator<T> for IteratorOf<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter.into_iter().collect())
    }
}

impl<T: Value + Clone + Sync> Value for IteratorOf<T> {
    const TYPE_NAME: &'static str = "Iterator";
    fn signature() -> Signature {
        Self::specialized_signature()
    }
    fn is_set(&self) -> bool {
        self.base.is_set()
    }
    fn compare(&self, other: &Self) -> Integer {
        self.base.compare(&other.base)
    }
    fn equals(&self, other: &Self) -> Boolean {
        self.base.equals(&other.base)
    }
    fn fuzzy(&self, other: &Self) -> Integer {
        self.base.fuzzy(&other.base)
    }
    fn as_text(&self) -> Text {
        self.base.as_text()
    }
    fn hash_code(&self) -> Integer {
        self.base.hash_code()
    }
    fn to_json(&self) -> Option<serde_json::Value> {
        self.base.to_json()
    }
}

impl<T: Value + Clone + Sync> Specialized for IteratorOf<T> {
    const TEMPLATE: &'static str = "Iterator";
    type Base = Cursor;

    fn arguments() -> Vec<Signature> {
        vec![T::signature()]
    }
    fn from_base(base: Option<Cursor>) -> Self {
        match base {
            Some(base) if base.peek().is_none_or(|v| downcast::<T>(v).is_some()) => Self::wrap(base),
            _ => Self::new(),
        }
    }
    fn base(&self) -> &Cursor {
        &self.base
    }
    fn into_base(self) -> Cursor {
        self.base
    }
    fn same_instance(&self, other: &Self) -> bool {
        self.base.instance() == other.base.instance()
    }
}
