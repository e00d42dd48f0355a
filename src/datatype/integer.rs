use std::fmt;
use std::ops;

use crate::algebra::{lift2, lift2_partial, ordinal, Tri};
use crate::datatype::{stable_hash, Boolean, Text};
use crate::value::{Textual, Value};

/// Tri-state 64-bit integer.
///
/// Arithmetic that would overflow, and division or remainder by zero, yields
/// unset rather than panicking. `pipe` accumulates by addition; an overflowing
/// pipe leaves the receiver unset, as `add_assign` does.
///
/// The text form is an optional `-` followed by decimal digits, with no
/// surrounding whitespace and no `+`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Integer(Tri<i64>);

impl Integer {
    pub fn new() -> Self {
        Self(Tri::Unset)
    }
    pub fn of(value: i64) -> Self {
        Self(Tri::Set(value))
    }
    pub fn from_text(text: &Text) -> Self {
        match text.get() {
            Some(s) => Self::parse(s),
            None => Self::new(),
        }
    }
    pub fn state(&self) -> Tri<i64> {
        self.0
    }
    pub fn get(&self) -> Option<i64> {
        self.0.into_option()
    }
    /// Lift a predicate over the payload into a tri-state Boolean.
    pub fn test<F: FnOnce(i64) -> bool>(&self, predicate: F) -> Boolean {
        Boolean::from(self.0.map(predicate))
    }

    pub fn add(&self, other: &Integer) -> Integer {
        Self(lift2_partial(self.0, other.0, i64::checked_add))
    }
    pub fn sub(&self, other: &Integer) -> Integer {
        Self(lift2_partial(self.0, other.0, i64::checked_sub))
    }
    pub fn mul(&self, other: &Integer) -> Integer {
        Self(lift2_partial(self.0, other.0, i64::checked_mul))
    }
    pub fn div(&self, other: &Integer) -> Integer {
        Self(lift2_partial(self.0, other.0, i64::checked_div))
    }
    /// Truncating remainder; takes the sign of the dividend.
    pub fn rem(&self, other: &Integer) -> Integer {
        Self(lift2_partial(self.0, other.0, |a, b| (b != 0).then(|| a.wrapping_rem(b))))
    }
    /// Modulus; takes the sign of the divisor.
    pub fn modulo(&self, other: &Integer) -> Integer {
        Self(lift2_partial(self.0, other.0, |a, b| {
            let r = (b != 0).then(|| a.wrapping_rem(b))?;
            // differing signs keep r + b within range
            Some(if r != 0 && (r < 0) != (b < 0) { r + b } else { r })
        }))
    }
    pub fn negate(&self) -> Integer {
        Self(self.0.and_then(|a| a.checked_neg().into()))
    }
    pub fn abs(&self) -> Integer {
        Self(self.0.and_then(|a| a.checked_abs().into()))
    }
    pub fn is_zero(&self) -> Boolean {
        self.test(|a| a == 0)
    }
    /// Number of characters in the decimal form, sign included.
    pub fn length(&self) -> Integer {
        Self(self.0.map(|a| a.to_string().len() as i64))
    }

    pub fn add_assign(&mut self, other: &Integer) {
        self.0.assign_with(&other.0, |a, b| a.checked_add(*b));
    }
    pub fn sub_assign(&mut self, other: &Integer) {
        self.0.assign_with(&other.0, |a, b| a.checked_sub(*b));
    }
    pub fn mul_assign(&mut self, other: &Integer) {
        self.0.assign_with(&other.0, |a, b| a.checked_mul(*b));
    }
    pub fn div_assign(&mut self, other: &Integer) {
        self.0.assign_with(&other.0, |a, b| a.checked_div(*b));
    }
    /// `++`; an unset receiver stays unset.
    pub fn inc(&mut self) -> &mut Self {
        self.0 = self.0.and_then(|a| a.checked_add(1).into());
        self
    }
    /// `--`; an unset receiver stays unset.
    pub fn dec(&mut self) -> &mut Self {
        self.0 = self.0.and_then(|a| a.checked_sub(1).into());
        self
    }
}

impl Value for Integer {
    const TYPE_NAME: &'static str = "Integer";
    fn is_set(&self) -> bool {
        self.0.is_set()
    }
    fn compare(&self, other: &Self) -> Integer {
        Self(lift2(self.0, other.0, |a, b| ordinal(a.cmp(&b))))
    }
    fn as_text(&self) -> Text {
        Text::from(self.0.map(|a| a.to_string()))
    }
    fn hash_code(&self) -> Integer {
        Self(self.0.map(|a| stable_hash(&a.to_le_bytes())))
    }
    fn to_json(&self) -> Option<serde_json::Value> {
        self.get().map(serde_json::Value::from)
    }
    fn pipe(&mut self, other: &Self) {
        self.0 = match (self.0, other.0) {
            (_, Tri::Unset) => return,
            (Tri::Unset, Tri::Set(b)) => Tri::Set(b),
            (Tri::Set(a), Tri::Set(b)) => a.checked_add(b).into(),
        };
    }
}

impl Textual for Integer {
    fn parse(text: &str) -> Self {
        if text.starts_with('+') {
            return Self::new();
        }
        Self(text.parse::<i64>().ok().into())
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::of(value)
    }
}
impl From<Tri<i64>> for Integer {
    fn from(value: Tri<i64>) -> Self {
        Self(value)
    }
}
impl ops::Add for Integer {
    type Output = Integer;
    fn add(self, other: Integer) -> Integer {
        Integer::add(&self, &other)
    }
}
impl ops::Sub for Integer {
    type Output = Integer;
    fn sub(self, other: Integer) -> Integer {
        Integer::sub(&self, &other)
    }
}
impl ops::Mul for Integer {
    type Output = Integer;
    fn mul(self, other: Integer) -> Integer {
        Integer::mul(&self, &other)
    }
}
impl ops::Div for Integer {
    type Output = Integer;
    fn div(self, other: Integer) -> Integer {
        Integer::div(&self, &other)
    }
}
impl ops::Neg for Integer {
    type Output = Integer;
    fn neg(self) -> Integer {
        self.negate()
    }
}
impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Tri::Set(a) => write!(f, "{}", a),
            Tri::Unset => Ok(()),
        }
    }
}
