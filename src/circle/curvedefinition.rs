use serde::{
    Deserialize,
    Serialize
};

use crate::circle::circlecomponent::CircleComponent;
use crate::circle::curveid::CurveId;

/// 已提交至 registry 的曲線定義，建立後不再變動。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveDefinition {
    nonce: u64,
    sample_count: u64,
    components: Vec<CircleComponent>
}

impl CurveDefinition {
    pub fn new(nonce: u64, sample_count: u64, components: Vec<CircleComponent>) -> CurveDefinition {
        CurveDefinition { nonce, sample_count, components }
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    pub fn components(&self) -> &[CircleComponent] {
        &self.components
    }

    pub fn curve_id(&self) -> CurveId {
        CurveId::compute(self.nonce, self.sample_count, &self.components)
    }
}
