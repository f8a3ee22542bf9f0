//! Integer price representation in Indonesian rupiah.

use std::iter::Sum;

use serde::{Deserialize, Serialize};

/// An amount of rupiah in the smallest currency unit.
///
/// Rupiah has no fractional unit in practice, so amounts are plain
/// integers and totals are plain integer sums. `Display` renders the
/// amount with `id-ID` thousands grouping (`17600` becomes `17.600`);
/// the `Rp` prefix is applied by the view layer.
///
/// Amounts are expected to be non-negative for meaningful totals, but
/// this is not enforced here: the widget validates listing attributes at
/// the parse boundary instead.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rupiah(i64);

impl Rupiah {
    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the underlying integer amount.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Rupiah {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 < 0 {
            f.write_str("-")?;
        }
        let digits = self.0.unsigned_abs().to_string();
        let len = digits.len();
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                f.write_str(".")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl Sum for Rupiah {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|p| p.0).sum())
    }
}
