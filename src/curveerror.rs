use thiserror::Error;

use crate::access::principal::Principal;
use crate::circle::curveid::CurveId;

/// 曲線引擎的錯誤分類。
///
/// 所有失敗都在任何狀態變更之前回傳，呼叫端看到 `Err` 時 registry 保持原樣。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    #[error("parallel lists differ in length: radii {radii}, frequencies {frequencies}, phases {phases}")]
    LengthMismatch {
        radii: usize,
        frequencies: usize,
        phases: usize,
    },

    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error("curve '{0}' not found")]
    NotFound(CurveId),

    #[error("curve '{0}' is already stored with different parameters")]
    IdentifierCollision(CurveId),

    #[error("caller {0} is not the owner")]
    Unauthorized(Principal),

    #[error("requested {requested} samples exceeds the configured bound {bound}")]
    SampleBoundExceeded { requested: u64, bound: u64 },

    #[error("circle {field} must be non-negative")]
    NegativeComponent { field: &'static str },

    #[error("fixed-point overflow in {0}")]
    ArithmeticOverflow(&'static str),
}

impl CurveError {
    pub fn invalid_range(message: impl Into<String>) -> CurveError {
        CurveError::InvalidRange(message.into())
    }
}
