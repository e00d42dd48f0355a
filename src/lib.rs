//! Tristate – built-in values that may be *unset*, with one operator algebra for all of them.
//!
//! Every value in the crate is either set (it holds a payload) or unset (a
//! constructible third state, not a missing reference). One rule set governs
//! what every operator does with unset operands:
//! * pure operators (comparison, arithmetic, conversion) are unset as soon as
//!   any operand is unset;
//! * the `?` query ([`value::Value::query`]) is always set;
//! * the reinitializing mutators (`replace`, `copy`, `merge`, `pipe`) are the
//!   only way into or out of the unset state, each with its own rule.
//!
//! ## Modules
//! * [`algebra`] – [`algebra::Tri`] and the lift combinators every operator is built from.
//! * [`value`] – the [`value::Value`] contract, its type-erased mirror
//!   [`value::AnyValue`], and the [`value::Textual`] parse boundary.
//! * [`datatype`] – `Boolean`, `Integer`, `Character` and `String` ([`datatype::Text`]).
//! * [`pair`], [`function`], [`sequence`] – the type-erased generic bases.
//! * [`specialize`] – typed wrappers ([`specialize::IteratorOf`],
//!   [`specialize::PairOf`], [`specialize::FunctionOf`]), their deterministic
//!   identities, descriptor parsing and the [`specialize::Registry`].
//! * [`guard`] – exclusive access to a single value.
//! * [`pool`] – a bounded worker pool.
//! * [`settings`] – layered configuration and the `tracing` bootstrap.
//!
//! ## Specializations
//! A generic template applied to concrete type arguments gets a stable
//! generated name such as `_Iterator_<64 hex digits>`, derived from a BLAKE3
//! digest of its signature. The same template and arguments always give the
//! same name; reordering the arguments gives a different one.
//!
//! ## Quick Start
//! ```
//! use tristate::datatype::{Boolean, Integer, Text};
//! use tristate::specialize::{IteratorOf, PairOf, Registry, Specialized};
//! use tristate::value::Value;
//!
//! let unset = Integer::new();
//! assert!(!unset.add(&Integer::of(1)).is_set());
//! assert!(unset.query().is_false());
//!
//! let mut seen = Boolean::of(false);
//! seen.pipe(&Boolean::of(true));
//! seen.pipe(&Boolean::of(false));
//! assert!(seen.is_true());
//!
//! let entry = PairOf::of(Text::of("answer"), Integer::of(42));
//! assert_eq!(entry.as_text().get(), Some("answer=42"));
//!
//! let mut words = IteratorOf::from_values(vec![Text::of("first"), Text::of("second")]);
//! assert_eq!(words.next().unwrap().get(), Some("first"));
//!
//! let mut registry = Registry::new();
//! let kept = registry.register::<PairOf<Text, Integer>>().unwrap();
//! assert_eq!(kept.name(), PairOf::<Text, Integer>::name());
//! ```

pub mod algebra;
pub mod datatype;
pub mod error;
pub mod function;
pub mod guard;
pub mod pair;
pub mod pool;
pub mod sequence;
pub mod settings;
pub mod specialize;
pub mod value;

pub use error::{Result, TristateError};
