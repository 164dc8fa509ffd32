use serde::Deserialize;
use tracing::debug;

use crate::circle::circlecomponent::CircleComponent;
use crate::circle::sampledpoint::SampledPoint;
use crate::curveerror::CurveError;
use crate::evaluation::curveevaluator::evaluate;
use crate::evaluation::domain::Domain;
use crate::math::fixedpoint::Fixed;

/// 等距切分是否包含右端點。
///
/// - `Inclusive`：`step = (end − start) / (N − 1)`，第 N−1 點恰為 `end`（同 numpy `linspace`）
/// - `Exclusive`：`step = (end − start) / N`，不含 `end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Endpoint {
    #[default]
    Inclusive,
    Exclusive
}

/// 將 `[start, end]` 切成 N 個等距座標，並只回傳其中一頁。
///
/// 第 i 點以 `start + (end − start) · i / d` 直接計算（d 依 `Endpoint` 而定），
/// 不累加 step，所以截斷誤差不會沿著序列累積。
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSpaceSampler {
    endpoint: Endpoint
}

impl LinearSpaceSampler {
    pub fn new(endpoint: Endpoint) -> LinearSpaceSampler {
        LinearSpaceSampler { endpoint }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn linear_space(&self,
                        n: u64,
                        page_length: u64,
                        page: u64,
                        start: Fixed,
                        end: Fixed) -> Result<Vec<Fixed>, CurveError> {
        if n == 0 {
            return Err(CurveError::invalid_range("sample count must be positive"));
        }
        if page_length == 0 {
            return Err(CurveError::invalid_range("page length must be positive"));
        }
        if start > end {
            return Err(CurveError::invalid_range(format!("start {} is after end {}", start, end)));
        }

        let offset = match page.checked_mul(page_length) {
            Some(offset) if offset < n => offset,
            _ => return Ok(Vec::new())
        };
        let len = page_length.min(n - offset);
        debug!(n, page, offset, len, "sampling linear space");

        let span = end.checked_sub(start)?;
        let divisor = match self.endpoint {
            Endpoint::Inclusive => n - 1,
            Endpoint::Exclusive => n
        };

        (offset..offset + len)
            .map(|i| {
                if divisor == 0 {
                    return Ok(start);
                }
                span.checked_mul_int(i as i128)?
                    .checked_div_int(divisor as i128)?
                    .checked_add(start)
            })
            .collect()
    }

    /// 一頁座標並附上 `components` 在各點的值。
    pub fn sample(&self,
                  components: &[CircleComponent],
                  n: u64,
                  page_length: u64,
                  page: u64,
                  start: Fixed,
                  end: Fixed) -> Result<Vec<SampledPoint>, CurveError> {
        let xs = self.linear_space(n, page_length, page, start, end)?;
        evaluate(components, Domain::Continuous(&xs))
    }
}
