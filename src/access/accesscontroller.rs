use tracing::{
    info,
    warn
};

use crate::access::principal::Principal;
use crate::curveerror::CurveError;

/// 單一 owner 的管理權限。
///
/// 只有管理操作在入口處呼叫 `require_owner`；曲線提交與查詢不經過這裡。
#[derive(Debug, Clone)]
pub struct AccessController {
    owner: Principal
}

impl AccessController {
    pub fn new(owner: Principal) -> AccessController {
        AccessController { owner }
    }

    pub fn owner(&self) -> Principal {
        self.owner
    }

    pub fn is_owner(&self, caller: &Principal) -> bool {
        self.owner == *caller
    }

    pub fn require_owner(&self, caller: &Principal) -> Result<(), CurveError> {
        if self.is_owner(caller) {
            Ok(())
        } else {
            warn!(%caller, owner = %self.owner, "owner-gated call rejected");
            Err(CurveError::Unauthorized(*caller))
        }
    }

    pub fn transfer_ownership(&mut self, caller: &Principal, new_owner: Principal) -> Result<(), CurveError> {
        self.require_owner(caller)?;
        info!(previous = %self.owner, owner = %new_owner, "ownership transferred");
        self.owner = new_owner;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_owner_passes() {
        let owner = Principal::new();
        let stranger = Principal::new();
        let access = AccessController::new(owner);
        assert_eq!(access.owner(), owner);
        assert!(access.require_owner(&owner).is_ok());
        assert_eq!(access.require_owner(&stranger), Err(CurveError::Unauthorized(stranger)));
    }

    #[test]
    fn transfer_moves_the_gate() {
        let owner = Principal::new();
        let next = Principal::new();
        let mut access = AccessController::new(owner);

        assert_eq!(access.transfer_ownership(&next, next), Err(CurveError::Unauthorized(next)));
        assert_eq!(access.owner(), owner);

        access.transfer_ownership(&owner, next).unwrap();
        assert!(access.require_owner(&next).is_ok());
        assert!(access.require_owner(&owner).is_err());
    }
}
