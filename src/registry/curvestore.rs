// ── curvestore.rs ───────────────────────────────────────────────────────────

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{
    PoisonError,
    RwLock
};

use crate::circle::curvedefinition::CurveDefinition;
use crate::circle::curveid::CurveId;

/// 抽象的 `CurveId -> CurveDefinition` 鍵值儲存。
///
/// `insert_if_absent` 的檢查與寫入在同一個臨界區內完成。
/// 回傳 `Some(existing)` 代表已有資料、這次沒有寫入，
/// 由呼叫端決定是 idempotent 還是 collision。
pub trait CurveStore {
    fn get(&self, curve_id: &CurveId) -> Option<CurveDefinition>;

    fn insert_if_absent(&self, curve_id: CurveId, definition: CurveDefinition) -> Option<CurveDefinition>;

    fn len(&self) -> usize;

    fn contains(&self, curve_id: &CurveId) -> bool {
        self.get(curve_id).is_some()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── 單執行緒版：RefCell ──────────────────────────────────────────────────────

#[derive(Default)]
pub struct RefCellCurveStore {
    map: RefCell<HashMap<CurveId, CurveDefinition>>,
}

impl RefCellCurveStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CurveStore for RefCellCurveStore {
    fn get(&self, curve_id: &CurveId) -> Option<CurveDefinition> {
        self.map.borrow().get(curve_id).cloned()
    }

    fn insert_if_absent(&self, curve_id: CurveId, definition: CurveDefinition) -> Option<CurveDefinition> {
        let mut map = self.map.borrow_mut();
        match map.get(&curve_id) {
            Some(existing) => Some(existing.clone()),
            None => {
                map.insert(curve_id, definition);
                None
            }
        }
    }

    fn len(&self) -> usize {
        self.map.borrow().len()
    }
}

// ── 多執行緒版：RwLock ───────────────────────────────────────────────────────
//
// 讀取（get / contains / len）只拿 read lock，可與其他讀取並行；
// insert_if_absent 在 write lock 內完成檢查與寫入。

#[derive(Default)]
pub struct RwLockCurveStore {
    map: RwLock<HashMap<CurveId, CurveDefinition>>,
}

impl RwLockCurveStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CurveStore for RwLockCurveStore {
    fn get(&self, curve_id: &CurveId) -> Option<CurveDefinition> {
        self.map
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(curve_id)
            .cloned()
    }

    fn insert_if_absent(&self, curve_id: CurveId, definition: CurveDefinition) -> Option<CurveDefinition> {
        let mut map = self.map.write().unwrap_or_else(PoisonError::into_inner);
        match map.get(&curve_id) {
            Some(existing) => Some(existing.clone()),
            None => {
                map.insert(curve_id, definition);
                None
            }
        }
    }

    fn len(&self) -> usize {
        self.map.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
