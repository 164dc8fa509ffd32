use std::sync::Arc;

use tracing::{
    debug,
    info,
    warn
};

use crate::circle::circlecomponent::CircleComponent;
use crate::circle::curvedefinition::CurveDefinition;
use crate::circle::curveid::CurveId;
use crate::circle::sampledpoint::{
    SampledPoint,
    unzip_points
};
use crate::curveerror::CurveError;
use crate::evaluation::curveevaluator::{
    evaluate,
    evaluate_parallel
};
use crate::evaluation::domain::Domain;
use crate::math::fixedpoint::Fixed;
use crate::registry::curveobserver::{
    CurveObserver,
    CurveSetEvent
};
use crate::registry::curvestore::{
    CurveStore,
    RefCellCurveStore
};

pub fn compute_curve_id(nonce: u64, sample_count: u64, components: &[CircleComponent]) -> CurveId {
    CurveId::compute(nonce, sample_count, components)
}

/// 不經過 store 的臨時曲線：x 為 `[0, len)`。
pub fn get_ephemeral_curve(radii: &[Fixed],
                           frequencies: &[Fixed],
                           phases: &[Fixed]) -> Result<(Vec<Fixed>, Vec<Fixed>), CurveError> {
    let points = evaluate_parallel(radii, frequencies, phases)?;
    Ok(unzip_points(&points))
}

/// 內容定址的曲線 registry。
///
/// - 同一個 `CurveId` 只會對應一個定義（first-writer-wins）。
/// - 以相同參數重複提交為 idempotent：回傳同一個 id，不再發出 `CurveSetEvent`。
/// - 同 id 但參數不同 → `IdentifierCollision`，store 不變。
///
/// 提交不需要任何權限；權限只用於 `TransformCurve` 上的管理操作。
pub struct CurveRegistry<S: CurveStore = RefCellCurveStore> {
    store: S,
    observers: Vec<Arc<dyn CurveObserver>>,
}

impl<S: CurveStore> CurveRegistry<S> {
    pub fn new(store: S) -> CurveRegistry<S> {
        CurveRegistry {
            store,
            observers: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn subscribe(&mut self, observer: Arc<dyn CurveObserver>) {
        self.observers.push(observer);
    }

    pub fn set_curve(&self,
                     nonce: u64,
                     sample_count: u64,
                     components: Vec<CircleComponent>) -> Result<CurveId, CurveError> {
        if sample_count == 0 {
            return Err(CurveError::invalid_range("sample count must be positive"));
        }

        let definition = CurveDefinition::new(nonce, sample_count, components);
        let curve_id = definition.curve_id();

        match self.store.insert_if_absent(curve_id, definition.clone()) {
            None => {
                info!(%curve_id, nonce, sample_count, components = definition.components().len(), "curve set");
                let event = CurveSetEvent::new(curve_id);
                for observer in &self.observers {
                    observer.on_curve_set(&event);
                }
                Ok(curve_id)
            },
            Some(existing) if existing == definition => {
                debug!(%curve_id, "curve already stored with identical parameters");
                Ok(curve_id)
            },
            Some(_) => {
                warn!(%curve_id, "rejected submission colliding with a different stored curve");
                Err(CurveError::IdentifierCollision(curve_id))
            }
        }
    }

    pub fn get_curve(&self, curve_id: &CurveId) -> Result<CurveDefinition, CurveError> {
        self.store
            .get(curve_id)
            .ok_or(CurveError::NotFound(*curve_id))
    }

    pub fn get_curve_points(&self, curve_id: &CurveId, domain: Domain<'_>) -> Result<Vec<SampledPoint>, CurveError> {
        let definition = self.get_curve(curve_id)?;
        evaluate(definition.components(), domain)
    }

    pub fn contains(&self, curve_id: &CurveId) -> bool {
        self.store.contains(curve_id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl Default for CurveRegistry<RefCellCurveStore> {
    fn default() -> Self {
        CurveRegistry::new(RefCellCurveStore::new())
    }
}
