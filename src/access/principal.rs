use std::fmt;

use serde::{
    Deserialize,
    Serialize
};
use uuid::Uuid;

/// 呼叫者身分。host 上相當於交易發送者的位址。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal(Uuid);

impl Principal {
    pub fn new() -> Principal {
        Principal(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Principal {
        Principal(uuid)
    }

    pub fn uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_principals_are_distinct() {
        assert_ne!(Principal::new(), Principal::new());
    }

    #[test]
    fn wraps_a_given_uuid() {
        let uuid = Uuid::from_u128(7);
        let principal = Principal::from_uuid(uuid);
        assert_eq!(principal.uuid(), &uuid);
        assert_eq!(principal, Principal::from_uuid(uuid));
        assert_eq!(principal.to_string(), uuid.to_string());
    }
}
