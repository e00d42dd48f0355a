//! Exclusive access to one value.
//!
//! A [`Guard`] owns a single value behind a mutex and only lets callbacks near
//! it. The callback's outcome comes back as a tri-state [`Boolean`]: unset when
//! there is nothing to guard, true when the callback completed, false when it
//! panicked or (for `try_enter`) the guard was busy. A panicking callback never
//! leaves the guard locked or poisoned.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Mutex, MutexGuard, PoisonError, TryLockError};

use tracing::warn;

use crate::datatype::{Boolean, Integer, Text};
use crate::error::panic_message;
use crate::sequence::{next_instance, Instance};
use crate::value::Value;

#[derive(Debug)]
pub struct Guard<V> {
    instance: Instance,
    item: Option<Mutex<V>>,
}

impl<V: Value> Guard<V> {
    pub fn new() -> Self {
        Self {
            instance: next_instance(),
            item: None,
        }
    }
    /// Guards `value`; an unset value gives an unset guard.
    pub fn of(value: V) -> Self {
        Self {
            instance: next_instance(),
            item: value.is_set().then(|| Mutex::new(value)),
        }
    }
    /// Waits for exclusive access, then runs `callback` on the value.
    pub fn enter<F: FnOnce(&mut V)>(&self, callback: F) -> Boolean {
        match &self.item {
            None => Boolean::new(),
            Some(item) => self.run(item.lock().unwrap_or_else(PoisonError::into_inner), callback),
        }
    }
    /// As `enter`, but gives up straight away when the value is busy.
    pub fn try_enter<F: FnOnce(&mut V)>(&self, callback: F) -> Boolean {
        match &self.item {
            None => Boolean::new(),
            Some(item) => match item.try_lock() {
                Ok(held) => self.run(held, callback),
                Err(TryLockError::Poisoned(poisoned)) => self.run(poisoned.into_inner(), callback),
                Err(TryLockError::WouldBlock) => Boolean::of(false),
            },
        }
    }
    fn run<F: FnOnce(&mut V)>(&self, mut held: MutexGuard<'_, V>, callback: F) -> Boolean {
        match catch_unwind(AssertUnwindSafe(|| callback(&mut held))) {
            Ok(()) => Boolean::of(true),
            Err(payload) => {
                warn!(instance = self.instance, reason = %panic_message(payload), "guarded callback panicked");
                Boolean::of(false)
            }
        }
    }
    fn with_item<R, F: FnOnce(&V) -> R>(&self, f: F) -> Option<R> {
        self.item
            .as_ref()
            .map(|item| f(&item.lock().unwrap_or_else(PoisonError::into_inner)))
    }
}

impl<V: Value> Default for Guard<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Set iff a value is held. Two guards are equal only when they are the same
/// guard; text, hash and projection are the held value's.
impl<V: Value> Value for Guard<V> {
    const TYPE_NAME: &'static str = "MutexLock";
    fn is_set(&self) -> bool {
        self.item.is_some()
    }
    fn compare(&self, other: &Self) -> Integer {
        if self.is_set() && other.is_set() && self.instance == other.instance {
            Integer::of(0)
        } else {
            Integer::new()
        }
    }
    fn equals(&self, other: &Self) -> Boolean {
        if self.is_set() && other.is_set() {
            Boolean::of(self.instance == other.instance)
        } else {
            Boolean::new()
        }
    }
    fn as_text(&self) -> Text {
        self.with_item(|v| v.as_text()).unwrap_or_default()
    }
    fn hash_code(&self) -> Integer {
        self.with_item(|v| v.hash_code()).unwrap_or_default()
    }
    fn to_json(&self) -> Option<serde_json::Value> {
        self.with_item(|v| v.to_json()).flatten()
    }
}
