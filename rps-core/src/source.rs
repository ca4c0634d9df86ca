//! Trait for anything that maps a recursion index to a rotor on S³.

use crate::error::Result;
use crate::rotor::Rotor4;

/// Source of unit rotors indexed by a non-negative integer
pub trait RotorSource: Send + Sync {
    /// Name used in logs and error messages
    fn name(&self) -> &str;

    /// Unit rotor for index `n`
    fn rotor(&self, n: u32) -> Result<Rotor4>;

    /// Number of valid indices, or `None` when every `u32` is valid
    fn len(&self) -> Option<usize>;

    /// Returns true if the source is bounded and has no indices
    fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }
}

impl<S: RotorSource + ?Sized> RotorSource for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn rotor(&self, n: u32) -> Result<Rotor4> {
        (**self).rotor(n)
    }

    fn len(&self) -> Option<usize> {
        (**self).len()
    }
}
