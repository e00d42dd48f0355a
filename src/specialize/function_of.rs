use std::marker::PhantomData;

use crate::datatype::{Boolean, Integer, Text};
use crate::function::Function;
use crate::specialize::{Signature, Specialized};
use crate::value::{narrow, AnyValue, Value};

/// `Function of (A, R)`: a callable from `A` to `R`.
#[derive(Debug, Clone, Default)]
pub struct FunctionOf<A, R> {
    base: Function,
    types: PhantomData<fn(A) -> R>,
}

impl<A, R> FunctionOf<A, R>
where
    A: Value + Clone + Sync,
    R: Value + Clone + Sync,
{
    pub fn new() -> Self {
        Self::wrap(Function::new())
    }
    pub fn of<F>(f: F) -> Self
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
    {
        Self::wrap(Function::of(move |argument: &dyn AnyValue| {
            Box::new(f(&narrow::<A>(argument))) as Box<dyn AnyValue>
        }))
    }
    fn wrap(base: Function) -> Self {
        Self {
            base,
            types: PhantomData,
        }
    }
    /// An unset function gives an unset result.
    pub fn call(&self, argument: &A) -> R {
        self.base
            .call(argument)
            .map(|result| narrow::<R>(result.as_ref()))
            .unwrap_or_default()
    }
}

impl<A, R> Value for FunctionOf<A, R>
where
    A: Value + Clone + Sync,
    R: Value + Clone + Sync,
{
    const TYPE_NAME: &'static str = "Function";
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

impl<A, R> Specialized for FunctionOf<A, R>
where
    A: Value + Clone + Sync,
    R: Value + Clone + Sync,
{
    const TEMPLATE: &'static str = "Function";
    type Base = Function;

    fn arguments() -> Vec<Signature> {
        vec![A::signature(), R::signature()]
    }
    /// The callable's types are not visible at runtime, so any base is taken;
    /// arguments and results that do not narrow arrive unset.
    fn from_base(base: Option<Function>) -> Self {
        Self::wrap(base.unwrap_or_default())
    }
    fn base(&self) -> &Function {
        &self.base
    }
    fn into_base(self) -> Function {
        self.base
    }
    fn same_instance(&self, other: &Self) -> bool {
        self.base.same_callable(&other.base)
    }
}
