use std::sync::{
    Mutex,
    PoisonError
};

use serde::Serialize;

use crate::circle::curveid::CurveId;

/// registry 新增一條曲線後發出的通知。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurveSetEvent {
    curve_id: CurveId
}

impl CurveSetEvent {
    pub fn new(curve_id: CurveId) -> CurveSetEvent {
        CurveSetEvent { curve_id }
    }

    pub fn curve_id(&self) -> CurveId {
        self.curve_id
    }
}

pub trait CurveObserver: Send + Sync {
    fn on_curve_set(&self, event: &CurveSetEvent);
}

/// 依序記錄所有收到的事件，相當於 host 上的 event log。
#[derive(Default)]
pub struct CurveEventLog {
    events: Mutex<Vec<CurveSetEvent>>,
}

impl CurveEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<CurveSetEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CurveObserver for CurveEventLog {
    fn on_curve_set(&self, event: &CurveSetEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*event);
    }
}
