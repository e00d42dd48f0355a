//! The single-pass cursor behind every iterator.
//!
//! A [`Cursor`] keeps exactly one element of look-ahead: construction pulls the
//! first element from its source, and each `next` hands out the pending element
//! and pulls the following one. That look-ahead is what makes `has_next` a pure
//! query and lets the set flag mirror it.
//!
//! ```text
//!   Empty ──────────────────────────────┐
//!   HasPending ──next──▶ HasPending      ├──close──▶ Closed
//!              ──next──▶ Exhausted ──────┘
//! ```

use std::fmt;
use std::io::BufRead;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use crate::datatype::{stable_hash, Boolean, Integer, Text};
use crate::error::{Result, TristateError};
use crate::value::{AnyValue, Value};

pub type Source = Box<dyn Iterator<Item = Box<dyn AnyValue>> + Send>;

// cursors compare by instance, and an address does not survive a move
pub type Instance = u64;
static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_instance() -> Instance {
    NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Created over nothing; there never was a position.
    Empty,
    HasPending,
    Exhausted,
    Closed,
}

pub struct Cursor {
    instance: Instance,
    source: Option<Source>,
    pending: Option<Box<dyn AnyValue>>,
    element_type: Option<&'static str>,
    state: CursorState,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            instance: next_instance(),
            source: None,
            pending: None,
            element_type: None,
            state: CursorState::Empty,
        }
    }
    pub fn of(value: Box<dyn AnyValue>) -> Self {
        Self::from_values(vec![value])
    }
    pub fn from_values(values: Vec<Box<dyn AnyValue>>) -> Self {
        Self::from_source(values.into_iter())
    }
    /// Wraps any iterator; the first element is fetched right away.
    pub fn from_source<I>(source: I) -> Self
    where
        I: Iterator<Item = Box<dyn AnyValue>> + Send + 'static,
    {
        let mut source: Source = Box::new(source);
        match source.next() {
            Some(first) => Self {
                instance: next_instance(),
                element_type: Some(first.any_type_name()),
                pending: Some(first),
                source: Some(source),
                state: CursorState::HasPending,
            },
            None => Self::new(),
        }
    }
    /// Lines of a reader, without their terminators. A read failure ends the
    /// iteration.
    pub fn from_lines<R: BufRead + Send + 'static>(reader: R) -> Self {
        let lines = reader.lines().map_while(|line| match line {
            Ok(line) => Some(Box::new(Text::of(line)) as Box<dyn AnyValue>),
            Err(e) => {
                warn!(error=%e, "unreadable input line, ending iteration");
                None
            }
        });
        Self::from_source(lines)
    }
    /// Names of the process environment variables, sorted.
    pub fn environment_keys() -> Self {
        let mut keys: Vec<String> = std::env::vars_os()
            .filter_map(|(key, _)| key.into_string().ok())
            .collect();
        keys.sort();
        Self::from_source(keys.into_iter().map(|k| Box::new(Text::of(k)) as Box<dyn AnyValue>))
    }

    pub fn state(&self) -> CursorState {
        self.state
    }
    pub fn instance(&self) -> Instance {
        self.instance
    }
    /// Type name of the elements seen so far, if any.
    pub fn element_type(&self) -> Option<&'static str> {
        self.element_type
    }
    pub fn peek(&self) -> Option<&dyn AnyValue> {
        self.pending.as_deref()
    }
    /// Always set; repeated calls never move the cursor.
    pub fn has_next(&self) -> Boolean {
        Boolean::of(self.state == CursorState::HasPending)
    }
    /// Hands out the pending element. A closed cursor yields nothing without
    /// complaint, whereas asking an empty or exhausted one is an error.
    pub fn next(&mut self) -> Result<Option<Box<dyn AnyValue>>> {
        match self.state {
            CursorState::Closed => Ok(None),
            CursorState::Empty | CursorState::Exhausted => Err(TristateError::NoSuchElement),
            CursorState::HasPending => {
                let current = self.pending.take();
                self.pending = self.source.as_mut().and_then(|s| s.next());
                if self.pending.is_none() {
                    self.source = None;
                    self.state = CursorState::Exhausted;
                    debug!(instance = self.instance, "cursor exhausted");
                }
                Ok(current)
            }
        }
    }
    pub fn close(&mut self) {
        self.source = None;
        self.pending = None;
        self.state = CursorState::Closed;
    }
    /// Drains what is left; the cursor ends up exhausted.
    pub fn remaining(&mut self) -> Vec<Box<dyn AnyValue>> {
        let mut values = Vec::new();
        while let Ok(Some(value)) = self.next() {
            values.push(value);
        }
        values
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("instance", &self.instance)
            .field("state", &self.state)
            .field("pending", &self.pending)
            .finish()
    }
}

impl Value for Cursor {
    const TYPE_NAME: &'static str = "Iterator";
    /// A cursor counts as set exactly while it has an element to hand out.
    fn is_set(&self) -> bool {
        self.state == CursorState::HasPending
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
        match (self.is_set(), self.element_type) {
            (true, Some(element)) => Text::of(format!("{} of {}", Self::TYPE_NAME, element)),
            _ => Text::new(),
        }
    }
    fn hash_code(&self) -> Integer {
        if self.is_set() {
            Integer::of(stable_hash(&self.instance.to_le_bytes()))
        } else {
            Integer::new()
        }
    }
    fn to_json(&self) -> Option<serde_json::Value> {
        None
    }
}
