//! Generic specialization.
//!
//! A generic template (`Iterator`, `Pair`, `Function`) applied to an ordered
//! list of concrete type arguments is a *specialization*. On the Rust side each
//! one is a native generic wrapper ([`IteratorOf`], [`PairOf`], [`FunctionOf`])
//! that owns exactly one type-erased base and narrows its signatures. What the
//! generics cannot give us is a stable name, so every specialization also has
//! an [`Identity`]: a BLAKE3 digest of its [`Signature`] tree, rendered as
//! `_<Template>_<64 hex digits>`. The [`Registry`] keeps the records.
//!
//! ```
//! use tristate::specialize::{identity, Signature};
//! let forward = identity("Pair", &[Signature::concrete("String"), Signature::concrete("Integer")]);
//! let reverse = identity("Pair", &[Signature::concrete("Integer"), Signature::concrete("String")]);
//! assert_ne!(forward, reverse);
//! assert!(forward.identifier("Pair").starts_with("_Pair_"));
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::Value;

mod descriptor;
mod function_of;
mod iterator_of;
mod pair_of;
mod registry;

pub use descriptor::parse_signature;
pub use function_of::FunctionOf;
pub use iterator_of::IteratorOf;
pub use pair_of::PairOf;
pub use registry::{Registry, Specialization};

// ------------- Signature -------------
/// `name` for a concrete type, `name of (arg, ...)` for a specialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    args: Vec<Signature>,
}

impl Signature {
    pub fn concrete(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }
    pub fn of(name: impl Into<String>, args: Vec<Signature>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn args(&self) -> &[Signature] {
        &self.args
    }
    pub fn is_concrete(&self) -> bool {
        self.args.is_empty()
    }
    /// Every name in the tree, depth first.
    pub fn names(&self) -> Vec<&str> {
        let mut names = vec![self.name.as_str()];
        for arg in &self.args {
            names.extend(arg.names());
        }
        names
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.args.as_slice() {
            [] => write!(f, "{}", self.name),
            [single] => write!(f, "{} of {}", self.name, single),
            args => {
                write!(f, "{} of (", self.name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

// ------------- Identity -------------
const CONCRETE: u8 = 0;
const PARAMETERISED: u8 = 1;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identity([u8; 32]);

impl Identity {
    /// Digest of a signature tree. Every name is length prefixed and every node
    /// tagged, and arguments contribute their own identities in order, so
    /// distinct trees cannot share an encoding.
    pub fn of(signature: &Signature) -> Self {
        let mut hasher = blake3::Hasher::new();
        let name = signature.name.as_bytes();
        if signature.is_concrete() {
            hasher.update(&[CONCRETE]);
            hasher.update(&(name.len() as u64).to_le_bytes());
            hasher.update(name);
        } else {
            hasher.update(&[PARAMETERISED]);
            hasher.update(&(name.len() as u64).to_le_bytes());
            hasher.update(name);
            hasher.update(&(signature.args.len() as u64).to_le_bytes());
            for arg in &signature.args {
                hasher.update(&Identity::of(arg).0);
            }
        }
        Self(*hasher.finalize().as_bytes())
    }
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02X}", b)).collect()
    }
    pub fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 64 || !hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F')) {
            return None;
        }
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16).ok()?;
        }
        Some(Self(bytes))
    }
    /// The generated name, e.g. `_Iterator_66111C2B...`.
    pub fn identifier(&self, template: &str) -> String {
        format!("_{}_{}", template, self.to_hex())
    }
}

/// Identity of `template` applied to `args`.
pub fn identity(template: &str, args: &[Signature]) -> Identity {
    Identity::of(&Signature::of(template, args.to_vec()))
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Identity({})", self.to_hex())
    }
}
impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Identity::from_hex(&hex).ok_or_else(|| serde::de::Error::custom("expected 64 hex digits"))
    }
}

// ------------- Specialized -------------
/// A typed wrapper around one type-erased base.
///
/// Every [`Value`] operation on the wrapper must give exactly what the same
/// operation gives on [`base`](Specialized::base). `same_instance` is wrapper
/// identity and says nothing about the held values; use `equals` for that.
pub trait Specialized: Value {
    const TEMPLATE: &'static str;
    type Base: Value;

    /// The concrete type arguments, in order.
    fn arguments() -> Vec<Signature>;
    /// Never fails: a missing base, or one whose runtime element types do not
    /// match the narrowed ones, gives an unset wrapper.
    fn from_base(base: Option<Self::Base>) -> Self;
    fn base(&self) -> &Self::Base;
    fn into_base(self) -> Self::Base;
    fn same_instance(&self, other: &Self) -> bool;

    fn specialized_signature() -> Signature {
        Signature::of(Self::TEMPLATE, Self::arguments())
    }
    fn identity() -> Identity {
        Identity::of(&Self::specialized_signature())
    }
    fn name() -> String {
        Self::identity().identifier(Self::TEMPLATE)
    }
}
