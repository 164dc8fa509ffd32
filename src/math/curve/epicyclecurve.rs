use std::f64::consts::PI;

use crate::circle::circlecomponent::CircleComponent;
use crate::math::curve::curve::Curve;
use crate::math::curve::point2d::Point2D;

/// 以原生 `f64` 計算同一條 epicycle 公式，供圖表即時預覽。
///
/// 與 host 上的定點結果不保證逐位相同，只是近似值。
pub struct EpicycleCurve {
    terms: Vec<(f64, f64, f64)>
}

impl EpicycleCurve {
    pub fn new(components: &[CircleComponent]) -> EpicycleCurve {
        let terms = components
            .iter()
            .map(|c| (c.radius().to_f64(), c.frequency().to_f64(), c.phase().to_f64()))
            .collect();
        EpicycleCurve { terms }
    }

    pub fn from_parts(terms: Vec<(f64, f64, f64)>) -> EpicycleCurve {
        EpicycleCurve { terms }
    }

    /// `[0, n)` 上的 index domain 取樣。
    pub fn points(&self, n: usize) -> Vec<Point2D> {
        let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
        self.sample(&xs)
    }
}

impl Curve for EpicycleCurve {
    fn value(&self, x: f64) -> f64 {
        self.terms
            .iter()
            .map(|&(radius, frequency, phase)| radius * ((frequency * x + phase) * PI / 180.0).sin())
            .sum()
    }

    fn derivative(&self, x: f64) -> f64 {
        self.terms
            .iter()
            .map(|&(radius, frequency, phase)| {
                radius * frequency * PI / 180.0 * ((frequency * x + phase) * PI / 180.0).cos()
            })
            .sum()
    }
}
