use std::fmt::{self, Display, Formatter};

mod error;
pub use error::AlleleError;

/// One of the two variant forms found at a biallelic locus.
/// 
/// Missing calls are never represented by this type: an allele call is an `Option<Allele>`,
/// where `None` stands for a missing (`0`) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Allele {
    A1,
    A2,
}

impl Allele {
    /// Return the other allele of the locus. (`1 -> 2`, `2 -> 1`)
    #[must_use]
    pub fn complement(self) -> Self {
        match self {
            Self::A1 => Self::A2,
            Self::A2 => Self::A1,
        }
    }

    /// Convert a numeric allele code into an allele call.
    /// - `0` => `None` (missing)
    /// - `1` => `Some(Allele::A1)`
    /// - `2` => `Some(Allele::A2)`
    /// 
    /// # Errors
    /// - `AlleleError::InvalidCode` for any other value.
    pub fn from_code(code: u8) -> Result<Option<Self>, AlleleError> {
        match code {
            0 => Ok(None),
            1 => Ok(Some(Self::A1)),
            2 => Ok(Some(Self::A2)),
            _ => Err(AlleleError::InvalidCode(code.to_string())),
        }
    }

    /// Parse a raw allele call token, as found within a genotype line.
    /// 
    /// # Errors
    /// - `AlleleError::InvalidCode` if the token is not one of `0`, `1` or `2`
    pub fn parse_call(token: &str) -> Result<Option<Self>, AlleleError> {
        let code = token.parse::<u8>().map_err(|_| AlleleError::InvalidCode(token.to_string()))?;
        Self::from_code(code)
    }

    /// Numeric code of an allele call. Missing calls are coded as `0`.
    #[must_use]
    pub fn code(call: Option<Self>) -> u8 {
        match call {
            None           => 0,
            Some(Self::A1) => 1,
            Some(Self::A2) => 2,
        }
    }
}

impl Display for Allele {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::code(Some(*self)))
    }
}
