// ── trigonometry.rs ─────────────────────────────────────────────────────────
//
// 純整數的 sine 近似，供 deterministic host 使用。
//
// 步驟：
//   1. 角度（degree）對 360° 取 Euclidean 餘數 → [0°, 360°)
//   2. 利用對稱性折到第一象限 [0°, 90°]，記下符號
//   3. 轉成 radian：θ · π / 180
//   4. Taylor 展開 sin(x) = x − x³/3! + x⁵/5! − …，直到下一項截斷為 0
//
// x ≤ π/2 時各項單調遞減，約 12 項即收斂，誤差 < 1e-15。

use crate::curveerror::CurveError;
use crate::math::fixedpoint::{
    Fixed,
    WAD
};

/// floor(π · 10^18)
pub const PI: Fixed = Fixed::from_raw(3_141_592_653_589_793_238);

const FULL_TURN: Fixed = Fixed::from_int(360);
const HALF_TURN: Fixed = Fixed::from_int(180);
const QUARTER_TURN: Fixed = Fixed::from_int(90);

pub fn degrees_to_radians(degrees: Fixed) -> Result<Fixed, CurveError> {
    degrees.checked_mul(PI)?.checked_div_int(180)
}

/// 以 degree 為單位的 sine，回傳值位於 [-1, 1]（10^18 縮放）。
pub fn sin_degrees(angle: Fixed) -> Result<Fixed, CurveError> {
    let mut reduced = angle.rem_euclid(FULL_TURN);
    let mut negate = false;

    if reduced >= HALF_TURN {
        reduced = reduced.checked_sub(HALF_TURN)?;
        negate = true;
    }
    if reduced > QUARTER_TURN {
        reduced = HALF_TURN.checked_sub(reduced)?;
    }

    let radians = degrees_to_radians(reduced)?;
    let value = sin_first_quadrant(radians)?;

    if negate {
        Ok(Fixed::from_raw(-value.raw()))
    } else {
        Ok(value)
    }
}

fn sin_first_quadrant(x: Fixed) -> Result<Fixed, CurveError> {
    let x_squared = x.checked_mul(x)?;
    let mut term = x;
    let mut sum = x;
    let mut k: i128 = 1;

    while term.raw() != 0 {
        term = term
            .checked_mul(x_squared)?
            .checked_div_int((2 * k) * (2 * k + 1))?;
        term = Fixed::from_raw(-term.raw());
        sum = sum.checked_add(term)?;
        k += 1;
    }

    // 截斷誤差可能讓 sin(90°) 略超過 1
    Ok(Fixed::from_raw(sum.raw().clamp(0, WAD)))
}
