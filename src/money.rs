// src/money.rs
//
// Fixed-point money. Amounts are held as micros (1/1_000_000 of a currency
// unit) so that accumulating many shares stays exact for addition; binary
// floats drift. Two-decimal strings exist only at the export boundary.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

const MICROS_PER_UNIT: i64 = 1_000_000;
const MICROS_PER_CENT: i64 = MICROS_PER_UNIT / 100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Entry point for scraped JSON numbers. Rounds to the nearest micro.
    pub fn from_f64(v: f64) -> Money {
        Money((v * MICROS_PER_UNIT as f64).round() as i64)
    }

    pub fn from_micros(micros: i64) -> Money {
        Money(micros)
    }

    pub fn micros(self) -> i64 {
        self.0
    }

    /// Lossy; for re-serializing to the wire shapes.
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / MICROS_PER_UNIT as f64
    }

    /// One of `n` equal shares, truncated at the micro. Everyone in a split
    /// gets the same value; the sub-cent remainder is below display
    /// resolution and is not redistributed.
    pub fn split(self, n: u32) -> Money {
        Money(self.0 / i64::from(n.max(1)))
    }

    /// Two-decimal display string, rounding half away from zero.
    pub fn format_2dp(self) -> String {
        let neg = self.0 < 0;
        let abs = self.0.unsigned_abs();
        let half = MICROS_PER_CENT as u64 / 2;
        let cents = (abs + half) / MICROS_PER_CENT as u64;
        let units = cents / 100;
        let frac = cents % 100;
        if neg {
            format!("-{units}.{frac:02}")
        } else {
            format!("{units}.{frac:02}")
        }
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

/// Serde adapter: amounts travel as plain numbers in the wire shapes.
pub mod as_f64 {
    use super::Money;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(m: &Money, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(m.to_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Money, D::Error> {
        f64::deserialize(d).map(Money::from_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_rounds_half_away_from_zero() {
        assert_eq!(Money::from_f64(1.005).format_2dp(), "1.01");
        assert_eq!(Money::from_f64(0.0).format_2dp(), "0.00");
        assert_eq!(Money::from_f64(-2.675).format_2dp(), "-2.68");
        assert_eq!(Money::from_f64(1234.5).format_2dp(), "1234.50");
    }

    #[test]
    fn split_is_exact_at_display_resolution() {
        let m = Money::from_f64(9.00);
        assert_eq!(m.split(2).format_2dp(), "4.50");
        // 10.00 / 3 truncates at the micro; still displays 3.33
        assert_eq!(Money::from_f64(10.00).split(3).format_2dp(), "3.33");
        // split by zero guards to 1
        assert_eq!(m.split(0), m);
    }

    #[test]
    fn accumulation_does_not_drift() {
        let dime = Money::from_f64(0.10);
        let total: Money = std::iter::repeat(dime).take(1000).sum();
        assert_eq!(total.format_2dp(), "100.00");
    }
}
