use crate::math::curve::point2d::Point2D;

/// 以原生 `f64` 求值的曲線，僅供 off-host 顯示使用。
pub trait Curve {
    fn value(&self, x: f64) -> f64;

    fn derivative(&self, x: f64) -> f64;

    fn sample(&self, xs: &[f64]) -> Vec<Point2D> {
        xs.iter()
            .map(|&x| Point2D::new(x, self.value(x)))
            .collect()
    }
}
