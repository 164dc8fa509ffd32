use serde::{
    Deserialize,
    Serialize
};

use crate::curveerror::CurveError;
use crate::math::fixedpoint::Fixed;
use crate::math::trigonometry::sin_degrees;

/// 單一 epicycle 項：`radius · sin((frequency · x + phase) · π / 180)`。
///
/// `radius` 與 `frequency` 必須 ≥ 0；`phase` 以 degree 表示，不限制範圍。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CircleComponentJsonProp")]
pub struct CircleComponent {
    radius: Fixed,
    frequency: Fixed,
    phase: Fixed
}

#[derive(Deserialize)]
struct CircleComponentJsonProp {
    radius: Fixed,
    frequency: Fixed,
    #[serde(default)]
    phase: Fixed
}

impl TryFrom<CircleComponentJsonProp> for CircleComponent {
    type Error = CurveError;

    fn try_from(prop: CircleComponentJsonProp) -> Result<Self, Self::Error> {
        CircleComponent::new(prop.radius, prop.frequency, prop.phase)
    }
}

impl CircleComponent {
    pub fn new(radius: Fixed, frequency: Fixed, phase: Fixed) -> Result<CircleComponent, CurveError> {
        if radius.is_negative() {
            return Err(CurveError::NegativeComponent { field: "radius" });
        }
        if frequency.is_negative() {
            return Err(CurveError::NegativeComponent { field: "frequency" });
        }
        Ok(CircleComponent { radius, frequency, phase })
    }

    pub fn radius(&self) -> Fixed {
        self.radius
    }

    pub fn frequency(&self) -> Fixed {
        self.frequency
    }

    pub fn phase(&self) -> Fixed {
        self.phase
    }

    /// 此項在 `x` 的貢獻，全程定點運算。
    pub fn contribution(&self, x: Fixed) -> Result<Fixed, CurveError> {
        let angle = self.frequency.checked_mul(x)?.checked_add(self.phase)?;
        self.radius.checked_mul(sin_degrees(angle)?)
    }

    /// 由三條平行序列組出 components；長度不一致時回傳 `LengthMismatch`。
    pub fn from_parallel(radii: &[Fixed],
                         frequencies: &[Fixed],
                         phases: &[Fixed]) -> Result<Vec<CircleComponent>, CurveError> {
        if radii.len() != frequencies.len() || radii.len() != phases.len() {
            return Err(CurveError::LengthMismatch {
                radii: radii.len(),
                frequencies: frequencies.len(),
                phases: phases.len()
            });
        }
        radii.iter()
            .zip(frequencies.iter())
            .zip(phases.iter())
            .map(|((&r, &f), &p)| CircleComponent::new(r, f, p))
            .collect()
    }
}
