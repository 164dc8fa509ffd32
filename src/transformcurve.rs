// ── transformcurve.rs ───────────────────────────────────────────────────────
//
// host 對外介面：
//
//   initialize(maxSampleBound)            → TransformCurve::initialize
//   owner() / sampleBound()               → owner / sample_bound
//   getCurve(radii, frequencies, phases)  → get_ephemeral_curve
//   setCurve(nonce, sampleCount, circles) → set_curve（發出 CurveSetEvent）
//   getCurve(curveId)                     → get_curve
//   getLinearSpace(N, pageLength, page, start, end) → get_linear_space
//
// 所有定點數以 10^18 縮放，縮放與還原由呼叫端負責。

use std::sync::Arc;

use tracing::info;

use crate::access::accesscontroller::AccessController;
use crate::access::principal::Principal;
use crate::circle::circlecomponent::CircleComponent;
use crate::circle::curvedefinition::CurveDefinition;
use crate::circle::curveid::CurveId;
use crate::circle::sampledpoint::SampledPoint;
use crate::configuration::EngineConfiguration;
use crate::curveerror::CurveError;
use crate::evaluation::domain::Domain;
use crate::evaluation::linearspacesampler::{
    Endpoint,
    LinearSpaceSampler
};
use crate::math::fixedpoint::Fixed;
use crate::registry::curveobserver::CurveObserver;
use crate::registry::curveregistry::{
    CurveRegistry,
    get_ephemeral_curve
};
use crate::registry::curvestore::{
    CurveStore,
    RefCellCurveStore
};

pub struct TransformCurve<S: CurveStore = RefCellCurveStore> {
    access: AccessController,
    sample_bound: Option<u64>,
    sampler: LinearSpaceSampler,
    registry: CurveRegistry<S>
}

impl TransformCurve<RefCellCurveStore> {
    pub fn initialize(caller: Principal, max_sample_bound: Option<u64>) -> TransformCurve<RefCellCurveStore> {
        let configuration = EngineConfiguration::new(max_sample_bound, Endpoint::default());
        TransformCurve::with_store(caller, configuration, RefCellCurveStore::new())
    }
}

impl<S: CurveStore> TransformCurve<S> {
    pub fn with_store(caller: Principal,
                      configuration: EngineConfiguration,
                      store: S) -> TransformCurve<S> {
        info!(owner = %caller, sample_bound = ?configuration.max_sample_bound(), "transform curve initialized");
        TransformCurve {
            access: AccessController::new(caller),
            sample_bound: configuration.max_sample_bound(),
            sampler: LinearSpaceSampler::new(configuration.endpoint()),
            registry: CurveRegistry::new(store)
        }
    }

    pub fn owner(&self) -> Principal {
        self.access.owner()
    }

    pub fn sample_bound(&self) -> Option<u64> {
        self.sample_bound
    }

    pub fn endpoint(&self) -> Endpoint {
        self.sampler.endpoint()
    }

    pub fn registry(&self) -> &CurveRegistry<S> {
        &self.registry
    }

    pub fn subscribe(&mut self, observer: Arc<dyn CurveObserver>) {
        self.registry.subscribe(observer);
    }

    // ── 管理操作（owner only）──────────────────────────────────────────────

    pub fn set_sample_bound(&mut self, caller: &Principal, sample_bound: Option<u64>) -> Result<(), CurveError> {
        self.access.require_owner(caller)?;
        info!(previous = ?self.sample_bound, sample_bound = ?sample_bound, "sample bound changed");
        self.sample_bound = sample_bound;
        Ok(())
    }

    pub fn transfer_ownership(&mut self, caller: &Principal, new_owner: Principal) -> Result<(), CurveError> {
        self.access.transfer_ownership(caller, new_owner)
    }

    // ── 曲線操作（任何呼叫者）──────────────────────────────────────────────

    pub fn get_ephemeral_curve(&self,
                               radii: &[Fixed],
                               frequencies: &[Fixed],
                               phases: &[Fixed]) -> Result<(Vec<Fixed>, Vec<Fixed>), CurveError> {
        get_ephemeral_curve(radii, frequencies, phases)
    }

    pub fn set_curve(&self,
                     caller: &Principal,
                     nonce: u64,
                     sample_count: u64,
                     components: Vec<CircleComponent>) -> Result<CurveId, CurveError> {
        self.check_sample_bound(sample_count)?;
        let curve_id = self.registry.set_curve(nonce, sample_count, components)?;
        info!(%caller, %curve_id, "curve submitted");
        Ok(curve_id)
    }

    pub fn get_curve(&self, curve_id: &CurveId) -> Result<CurveDefinition, CurveError> {
        self.registry.get_curve(curve_id)
    }

    /// 已儲存曲線在 `[0, sample_count)` 上的值。
    pub fn get_stored_curve_points(&self, curve_id: &CurveId) -> Result<Vec<SampledPoint>, CurveError> {
        let definition = self.registry.get_curve(curve_id)?;
        self.check_sample_bound(definition.sample_count())?;
        self.registry.get_curve_points(curve_id, Domain::Index(definition.sample_count()))
    }

    pub fn get_linear_space(&self,
                            components: &[CircleComponent],
                            n: u64,
                            page_length: u64,
                            page: u64,
                            start: Fixed,
                            end: Fixed) -> Result<Vec<SampledPoint>, CurveError> {
        self.check_sample_bound(n)?;
        self.sampler.sample(components, n, page_length, page, start, end)
    }

    /// 以已儲存曲線的 `sample_count` 作為 N。
    pub fn get_stored_linear_space(&self,
                                   curve_id: &CurveId,
                                   page_length: u64,
                                   page: u64,
                                   start: Fixed,
                                   end: Fixed) -> Result<Vec<SampledPoint>, CurveError> {
        let definition = self.registry.get_curve(curve_id)?;
        self.get_linear_space(definition.components(), definition.sample_count(), page_length, page, start, end)
    }

    fn check_sample_bound(&self, requested: u64) -> Result<(), CurveError> {
        match self.sample_bound {
            Some(bound) if requested > bound => Err(CurveError::SampleBoundExceeded { requested, bound }),
            _ => Ok(())
        }
    }
}
