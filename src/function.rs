//! Type-erased function value, the base behind
//! [`FunctionOf`](crate::specialize::FunctionOf).

use std::fmt;
use std::sync::Arc;

use crate::datatype::{stable_hash, Boolean, Integer, Text};
use crate::value::{AnyValue, Value};

pub type Callable = dyn Fn(&dyn AnyValue) -> Box<dyn AnyValue> + Send + Sync;

/// Set iff a callable is held. Clones share the callable, and equality is
/// sharing the same one.
#[derive(Clone, Default)]
pub struct Function(Option<Arc<Callable>>);

impl Function {
    pub fn new() -> Self {
        Self(None)
    }
    pub fn of<F>(callable: F) -> Self
    where
        F: Fn(&dyn AnyValue) -> Box<dyn AnyValue> + Send + Sync + 'static,
    {
        Self(Some(Arc::new(callable)))
    }
    /// Absent when nothing is held.
    pub fn call(&self, argument: &dyn AnyValue) -> Option<Box<dyn AnyValue>> {
        self.0.as_ref().map(|f| f(argument))
    }
    pub fn same_callable(&self, other: &Function) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
    fn address(&self) -> Option<usize> {
        self.0.as_ref().map(|f| Arc::as_ptr(f) as *const () as usize)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.address() {
            Some(address) => write!(f, "Function({:#x})", address),
            None => write!(f, "Function(unset)"),
        }
    }
}

impl Value for Function {
    const TYPE_NAME: &'static str = "Function";
    fn is_set(&self) -> bool {
        self.0.is_some()
    }
    fn compare(&self, other: &Self) -> Integer {
        if self.same_callable(other) {
            Integer::of(0)
        } else {
            Integer::new()
        }
    }
    fn equals(&self, other: &Self) -> Boolean {
        if self.is_set() && other.is_set() {
            Boolean::of(self.same_callable(other))
        } else {
            Boolean::new()
        }
    }
    fn as_text(&self) -> Text {
        if self.is_set() {
            Text::of(Self::TYPE_NAME)
        } else {
            Text::new()
        }
    }
    // derived from the address: stable while the callable lives, not across runs
    fn hash_code(&self) -> Integer {
        match self.address() {
            Some(address) => Integer::of(stable_hash(&address.to_le_bytes())),
            None => Integer::new(),
        }
    }
    fn to_json(&self) -> Option<serde_json::Value> {
        None
    }
}
