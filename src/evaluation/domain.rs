use crate::curveerror::CurveError;
use crate::math::fixedpoint::Fixed;

/// 求值的 x 座標來源。
#[derive(Debug, Clone, Copy)]
pub enum Domain<'a> {
    /// `x_i = i`，`i ∈ [0, count)`
    Index(u64),
    /// 由外部提供（通常來自 `LinearSpaceSampler`）
    Continuous(&'a [Fixed])
}

impl<'a> Domain<'a> {
    /// 取樣點數；index domain 超出 `usize` 時為 `None`。
    pub fn sample_len(&self) -> Option<usize> {
        match self {
            Domain::Index(count) => usize::try_from(*count).ok(),
            Domain::Continuous(xs) => Some(xs.len())
        }
    }

    pub fn coordinates(&self) -> Result<Vec<Fixed>, CurveError> {
        match self {
            Domain::Index(count) => {
                if self.sample_len().is_none() {
                    return Err(CurveError::invalid_range(format!("index domain of {} samples is not addressable", count)));
                }
                (0..*count)
                    .map(|i| Fixed::ONE.checked_mul_int(i as i128))
                    .collect()
            },
            Domain::Continuous(xs) => Ok(xs.to_vec())
        }
    }
}
