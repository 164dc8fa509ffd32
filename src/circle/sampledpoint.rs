use serde::Serialize;

use crate::math::fixedpoint::Fixed;

/// `(x, y)` 取樣點，兩者皆為 10^18 縮放的定點數。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampledPoint {
    x: Fixed,
    y: Fixed
}

impl SampledPoint {
    pub fn new(x: Fixed, y: Fixed) -> SampledPoint {
        SampledPoint { x, y }
    }

    pub fn x(&self) -> Fixed {
        self.x
    }

    pub fn y(&self) -> Fixed {
        self.y
    }
}

/// 拆成 host 介面的 `(x[], y[])` 兩條平行序列。
pub fn unzip_points(points: &[SampledPoint]) -> (Vec<Fixed>, Vec<Fixed>) {
    points.iter().map(|p| (p.x, p.y)).unzip()
}
