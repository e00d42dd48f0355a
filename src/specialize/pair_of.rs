use std::marker::PhantomData;

use crate::datatype::{Boolean, Integer, Text};
use crate::pair::Pair;
use crate::specialize::{Signature, Specialized};
use crate::value::{downcast, narrow, Value};

/// `Pair of (K, V)`.
#[derive(Debug, Clone, Default)]
pub struct PairOf<K, V> {
    base: Pair,
    types: PhantomData<fn() -> (K, V)>,
}

impl<K, V> PairOf<K, V>
where
    K: Value + Clone + Sync,
    V: Value + Clone + Sync,
{
    pub fn new() -> Self {
        Self::wrap(Pair::new())
    }
    /// Unset unless both halves are set.
    pub fn of(key: K, value: V) -> Self {
        Self::wrap(Pair::of(Box::new(key), Box::new(value)))
    }
    fn wrap(base: Pair) -> Self {
        Self {
            base,
            types: PhantomData,
        }
    }
    pub fn key(&self) -> K {
        self.base.key().map(narrow::<K>).unwrap_or_default()
    }
    pub fn value(&self) -> V {
        self.base.value().map(narrow::<V>).unwrap_or_default()
    }
}

impl<K, V> Value for PairOf<K, V>
where
    K: Value + Clone + Sync,
    V: Value + Clone + Sync,
{
    const TYPE_NAME: &'static str = "Pair";
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
    fn replace(&mut self, other: &Self) {
        self.base.replace(&other.base);
    }
    fn copy(&mut self, other: &Self) {
        self.base.copy(&other.base);
    }
    fn merge(&mut self, other: &Self) {
        self.base.merge(&other.base);
    }
    fn pipe(&mut self, other: &Self) {
        self.base.pipe(&other.base);
    }
}

impl<K, V> Specialized for PairOf<K, V>
where
    K: Value + Clone + Sync,
    V: Value + Clone + Sync,
{
    const TEMPLATE: &'static str = "Pair";
    type Base = Pair;

    fn arguments() -> Vec<Signature> {
        vec![K::signature(), V::signature()]
    }
    fn from_base(base: Option<Pair>) -> Self {
        let matches = |base: &Pair| match (base.key(), base.value()) {
            (Some(k), Some(v)) => downcast::<K>(k).is_some() && downcast::<V>(v).is_some(),
            _ => false,
        };
        match base {
            Some(base) if matches(&base) => Self::wrap(base),
            _ => Self::new(),
        }
    }
    fn base(&self) -> &Pair {
        &self.base
    }
    fn into_base(self) -> Pair {
        self.base
    }
    /// Wrappers own their base, so two distinct wrappers are never the same
    /// instance.
    fn same_instance(&self, other: &Self) -> bool {
        std::ptr::eq(&self.base, &other.base)
    }
}
