use crate::kind::Kind;
use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// An error encountered when a type-erased value is not numeric.
pub struct NonNumericError(pub Kind);

impl NonNumericError {
    /// Creates a new `NonNumericError`
    ///
    /// # Arguments
    ///
    /// * `kind: Kind` - The kind of the rejected value, [`Kind::INVALID`] if it
    ///   has none.
    pub fn new(kind: Kind) -> Self { NonNumericError(kind) }

    pub fn kind(&self) -> Kind { self.0 }
}

impl Error for NonNumericError {}

impl fmt::Display for NonNumericError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Kind::INVALID => f.write_str("number: non-numeric type"),
            kind => write!(f, "number: non-numeric type `{}`", kind),
        }
    }
}
