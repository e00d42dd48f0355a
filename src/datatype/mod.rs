//! Representative built-in value types.
//!
//! Each type wraps a [`Tri`](crate::algebra::Tri) payload and implements the
//! [`Value`](crate::value::Value) contract plus its own domain operators. The
//! language-level names are `Boolean`, `Integer`, `Character` and `String`;
//! the last is [`Text`] on the Rust side so it does not shadow `std::string::String`.

mod boolean;
mod character;
mod integer;
mod text;

pub use boolean::Boolean;
pub use character::Character;
pub use integer::Integer;
pub use text::Text;

// hash codes must be stable across runs, so the std RandomState is out
pub(crate) fn stable_hash(bytes: &[u8]) -> i64 {
    seahash::hash(bytes) as i64
}
