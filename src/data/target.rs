use serde::{Deserialize, Serialize};

/// Boolean conditions over a byte, used as single-bit learning targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetFunction {
    DivisibleBy3,
    Less20OrGreater90,
    Equals42,
    Equals23Or42,
    /// Decimal representation contains the digit `2`.
    ContainsDigit2,
    IsOdd,
    IsPrime,
}

impl TargetFunction {
    pub const ALL: [TargetFunction; 7] = [
        TargetFunction::DivisibleBy3,
        TargetFunction::Less20OrGreater90,
        TargetFunction::Equals42,
        TargetFunction::Equals23Or42,
        TargetFunction::ContainsDigit2,
        TargetFunction::IsOdd,
        TargetFunction::IsPrime,
    ];

    pub fn holds(self, b: u8) -> bool {
        match self {
            TargetFunction::DivisibleBy3 => b % 3 == 0,
            TargetFunction::Less20OrGreater90 => !(20..=90).contains(&b),
            TargetFunction::Equals42 => b == 42,
            TargetFunction::Equals23Or42 => b == 23 || b == 42,
            TargetFunction::ContainsDigit2 => b.to_string().contains('2'),
            TargetFunction::IsOdd => b % 2 == 1,
            TargetFunction::IsPrime => is_prime(b),
        }
    }

    /// Target byte for `b`: `1` when the condition holds, else `0`.
    pub fn apply(self, b: u8) -> u8 {
        self.holds(b) as u8
    }
}

fn is_prime(b: u8) -> bool {
    let n = u16::from(b);
    if n < 2 {
        return false;
    }
    (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}
