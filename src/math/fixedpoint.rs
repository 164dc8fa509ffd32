// ── fixedpoint.rs ───────────────────────────────────────────────────────────

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer
};

use crate::curveerror::CurveError;

/// 10^18：host 邊界上所有定點數的縮放因子。
pub const WAD: i128 = 1_000_000_000_000_000_000;

const WAD_DIGITS: u32 = 18;

/// 以 `i128` 表示、縮放 10^18 的定點數。
///
/// # 截斷規則
/// 所有乘、除都向零截斷（與 Rust 整數除法相同），溢位一律回傳
/// `CurveError::ArithmeticOverflow`，不會 wrap。
///
/// # 與浮點的關係
/// 本型別內部不使用任何浮點運算；`to_f64` 只供 off-host 顯示。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed(i128);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const ONE: Fixed = Fixed(WAD);

    pub const fn from_raw(raw: i128) -> Fixed {
        Fixed(raw)
    }

    pub const fn from_int(value: i64) -> Fixed {
        Fixed(value as i128 * WAD)
    }

    pub const fn raw(&self) -> i128 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, rhs: Fixed) -> Result<Fixed, CurveError> {
        self.0
            .checked_add(rhs.0)
            .map(Fixed)
            .ok_or(CurveError::ArithmeticOverflow("add"))
    }

    pub fn checked_sub(self, rhs: Fixed) -> Result<Fixed, CurveError> {
        self.0
            .checked_sub(rhs.0)
            .map(Fixed)
            .ok_or(CurveError::ArithmeticOverflow("sub"))
    }

    /// `self · rhs / 10^18`，向零截斷。
    ///
    /// 拆成整數部與小數部相乘，避免 `a · b` 在除以 WAD 之前就超出 `i128`：
    ///
    ///   a·b/W = ha·hb·W + ha·lb + la·hb + la·lb/W
    ///
    /// 四項同號，所以只截斷最後一項等同於對整體截斷。
    pub fn checked_mul(self, rhs: Fixed) -> Result<Fixed, CurveError> {
        let overflow = || CurveError::ArithmeticOverflow("mul");
        let (ha, la) = (self.0 / WAD, self.0 % WAD);
        let (hb, lb) = (rhs.0 / WAD, rhs.0 % WAD);

        let hh = ha
            .checked_mul(hb)
            .and_then(|v| v.checked_mul(WAD))
            .ok_or_else(overflow)?;
        let hl = ha.checked_mul(lb).ok_or_else(overflow)?;
        let lh = la.checked_mul(hb).ok_or_else(overflow)?;
        let ll = la * lb / WAD;

        hh.checked_add(hl)
            .and_then(|v| v.checked_add(lh))
            .and_then(|v| v.checked_add(ll))
            .map(Fixed)
            .ok_or_else(overflow)
    }

    pub fn checked_mul_int(self, rhs: i128) -> Result<Fixed, CurveError> {
        self.0
            .checked_mul(rhs)
            .map(Fixed)
            .ok_or(CurveError::ArithmeticOverflow("mul_int"))
    }

    pub fn checked_div_int(self, rhs: i128) -> Result<Fixed, CurveError> {
        self.0
            .checked_div(rhs)
            .map(Fixed)
            .ok_or(CurveError::ArithmeticOverflow("div_int"))
    }

    pub fn rem_euclid(self, modulus: Fixed) -> Fixed {
        Fixed(self.0.rem_euclid(modulus.0))
    }

    pub fn from_decimal(value: Decimal) -> Result<Fixed, CurveError> {
        let mantissa = value.mantissa();
        let scale = value.scale();
        let raw = if scale <= WAD_DIGITS {
            mantissa.checked_mul(10i128.pow(WAD_DIGITS - scale))
        } else {
            Some(mantissa / 10i128.pow(scale - WAD_DIGITS))
        };
        raw.map(Fixed)
            .ok_or(CurveError::ArithmeticOverflow("from_decimal"))
    }

    pub fn to_decimal(&self) -> Result<Decimal, CurveError> {
        Decimal::try_from_i128_with_scale(self.0, WAD_DIGITS)
            .map(|d| d.normalize())
            .map_err(|_| CurveError::ArithmeticOverflow("to_decimal"))
    }

    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / WAD as f64
    }
}

impl From<i64> for Fixed {
    fn from(value: i64) -> Self {
        Fixed::from_int(value)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let integer = magnitude / WAD as u128;
        let fraction = magnitude % WAD as u128;
        if fraction == 0 {
            return write!(f, "{}{}", sign, integer);
        }
        let digits = format!("{:018}", fraction);
        write!(f, "{}{}.{}", sign, integer, digits.trim_end_matches('0'))
    }
}

impl FromStr for Fixed {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s)?;
        Fixed::from_decimal(value).map_err(|_| rust_decimal::Error::ExceedsMaximumPossibleValue)
    }
}

// JSON 上以十進位字串表示，避免 i128 在 JSON number 上的精度問題。
impl Serialize for Fixed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Fixed {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Fixed::from_str(&text).map_err(serde::de::Error::custom)
    }
}
