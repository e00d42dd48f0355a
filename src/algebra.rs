//! The tri-state operator algebra.
//!
//! Every payload in the crate lives inside a [`Tri`], and every operator is
//! expressed through the combinators below, so unset propagation is written
//! once instead of being re-guarded in each operator:
//!
//! * pure operators use [`Tri::map`], [`lift2`] and [`lift2_partial`], which
//!   yield `Unset` as soon as one input is unset;
//! * the reinitializing mutators use [`Tri::replace_from`],
//!   [`Tri::merge_from`] and [`Tri::accumulate_from`], each with its own rule
//!   for an unset source;
//! * compound assignment uses [`Tri::assign_with`], which drops the receiver to
//!   `Unset` when either side is unset or the domain function refuses.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tri<T> {
    Unset,
    Set(T),
}

// no `T: Default` bound, unlike the derive
impl<T> Default for Tri<T> {
    fn default() -> Self {
        Tri::Unset
    }
}

impl<T> Tri<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Tri::Set(_))
    }
    pub fn get(&self) -> Option<&T> {
        match self {
            Tri::Set(t) => Some(t),
            Tri::Unset => None,
        }
    }
    pub fn as_ref(&self) -> Tri<&T> {
        match self {
            Tri::Set(t) => Tri::Set(t),
            Tri::Unset => Tri::Unset,
        }
    }
    pub fn into_option(self) -> Option<T> {
        match self {
            Tri::Set(t) => Some(t),
            Tri::Unset => None,
        }
    }
    /// Unary lift.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Tri<U> {
        match self {
            Tri::Set(t) => Tri::Set(f(t)),
            Tri::Unset => Tri::Unset,
        }
    }
    pub fn and_then<U, F: FnOnce(T) -> Tri<U>>(self, f: F) -> Tri<U> {
        match self {
            Tri::Set(t) => f(t),
            Tri::Unset => Tri::Unset,
        }
    }
    pub fn zip<U>(self, other: Tri<U>) -> Tri<(T, U)> {
        match (self, other) {
            (Tri::Set(a), Tri::Set(b)) => Tri::Set((a, b)),
            _ => Tri::Unset,
        }
    }
    pub fn unset(&mut self) {
        *self = Tri::Unset;
    }
}

impl<T: Clone> Tri<T> {
    /// `replace` / `copy`: mirror the source, including entering the unset state.
    pub fn replace_from(&mut self, source: &Tri<T>) {
        *self = source.clone();
    }
    /// `merge`: overwrite only when the source holds a value.
    pub fn merge_from(&mut self, source: &Tri<T>) {
        if let Tri::Set(value) = source {
            *self = Tri::Set(value.clone());
        }
    }
    /// `pipe`: ignore an unset source, adopt the source when the receiver is
    /// unset, otherwise fold the source into the receiver.
    pub fn accumulate_from<F: FnOnce(&T, &T) -> T>(&mut self, source: &Tri<T>, combine: F) {
        let folded = match (&*self, source) {
            (_, Tri::Unset) => return,
            (Tri::Unset, Tri::Set(value)) => value.clone(),
            (Tri::Set(current), Tri::Set(value)) => combine(current, value),
        };
        *self = Tri::Set(folded);
    }
    /// Compound assignment: domain function when both sides are set and it
    /// accepts the operands, unset otherwise.
    pub fn assign_with<F: FnOnce(&T, &T) -> Option<T>>(&mut self, source: &Tri<T>, f: F) {
        *self = match (&*self, source) {
            (Tri::Set(current), Tri::Set(value)) => f(current, value).map_or(Tri::Unset, Tri::Set),
            _ => Tri::Unset,
        };
    }
}

impl<T> From<Option<T>> for Tri<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Tri::Unset, Tri::Set)
    }
}

/// Binary lift: unset if either input is unset.
pub fn lift2<A, B, R, F: FnOnce(A, B) -> R>(a: Tri<A>, b: Tri<B>, f: F) -> Tri<R> {
    a.zip(b).map(|(a, b)| f(a, b))
}

/// Binary lift for domain functions that may refuse their operands
/// (division by zero, overflow, invalid code points).
pub fn lift2_partial<A, B, R, F: FnOnce(A, B) -> Option<R>>(a: Tri<A>, b: Tri<B>, f: F) -> Tri<R> {
    a.zip(b).and_then(|(a, b)| f(a, b).into())
}

/// The -1/0/1 ordinal every comparison operator reports.
pub fn ordinal(ordering: Ordering) -> i64 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lift2_propagates_unset_from_either_side() {
        assert_eq!(lift2(Tri::Set(1), Tri::Set(2), |a, b| a + b), Tri::Set(3));
        assert_eq!(lift2(Tri::Unset, Tri::Set(2), |a: i32, b| a + b), Tri::Unset);
        assert_eq!(lift2(Tri::Set(1), Tri::Unset, |a, b: i32| a + b), Tri::Unset);
    }

    #[test]
    fn partial_lift_refusal_is_unset() {
        assert_eq!(lift2_partial(Tri::Set(4), Tri::Set(0), |a: i64, b| a.checked_div(b)), Tri::Unset);
        assert_eq!(lift2_partial(Tri::Set(4), Tri::Set(2), |a: i64, b| a.checked_div(b)), Tri::Set(2));
    }

    #[test]
    fn mutators_follow_their_unset_rules() {
        let mut value = Tri::Set(5);
        value.merge_from(&Tri::Unset);
        assert_eq!(value, Tri::Set(5));
        value.accumulate_from(&Tri::Unset, |a, b| a + b);
        assert_eq!(value, Tri::Set(5));
        value.accumulate_from(&Tri::Set(2), |a, b| a + b);
        assert_eq!(value, Tri::Set(7));
        value.replace_from(&Tri::Unset);
        assert_eq!(value, Tri::Unset);
        value.accumulate_from(&Tri::Set(3), |a, b| a + b);
        assert_eq!(value, Tri::Set(3));
        value.assign_with(&Tri::Unset, |a, b| Some(a + b));
        assert_eq!(value, Tri::Unset);
    }
}
