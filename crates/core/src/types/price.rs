//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("price must be a number")]
    Invalid,
}

/// A product price.
///
/// Prices are plain decimal amounts in the store's display currency,
/// normalized to two fractional digits. Binary floating point never touches
/// a price; parsing goes straight from the form string to [`Decimal`].
///
/// ## Examples
///
/// ```
/// use shoplite_core::Price;
///
/// assert!(Price::parse("19.99").is_ok());
/// assert!(Price::parse("10").is_ok());      // normalized to 10.00
/// assert!(Price::parse("").is_err());       // empty
/// assert!(Price::parse("free").is_err());   // not a number
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Number of fractional digits a price is stored with.
    pub const SCALE: u32 = 2;

    /// Parse a `Price` from a form input string.
    ///
    /// Surrounding whitespace is ignored. The amount is rescaled to two
    /// fractional digits, rounding half-to-even.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or is not a decimal number.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PriceError::Empty);
        }

        let amount: Decimal = s.parse().map_err(|_| PriceError::Invalid)?;
        Ok(Self::new(amount))
    }

    /// Create a `Price` from a decimal amount, normalizing the scale.
    #[must_use]
    pub fn new(mut amount: Decimal) -> Self {
        amount.rescale(Self::SCALE);
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// SQLx support (with sqlite feature)
//
// SQLite has no decimal column type, so prices are stored as TEXT and
// re-parsed on read. A row that fails to parse surfaces as a column
// decode error rather than a silently truncated float.
#[cfg(feature = "sqlite")]
impl sqlx::Type<sqlx::Sqlite> for Price {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <String as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

#[cfg(feature = "sqlite")]
impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for Price {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        let amount: Decimal = s.parse()?;
        Ok(Self(amount))
    }
}

#[cfg(feature = "sqlite")]
impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for Price {
    fn encode_by_ref(
        &self,
        args: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(&self.0.to_string(), args)
    }
}
