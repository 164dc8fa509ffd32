use std::fmt;

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer
};
use thiserror::Error;

use crate::circle::circlecomponent::CircleComponent;

const DOMAIN_TAG: &[u8] = b"transformcurve/curve-id/v1";

/// 內容定址的曲線識別碼：BLAKE3 over 固定寬度 big-endian 編碼。
///
/// 編碼順序：
///   tag ‖ nonce(u64) ‖ sample_count(u64) ‖ len(u64) ‖ Σ (radius ‖ frequency ‖ phase)(i128 ×3)
///
/// 每欄寬度固定，所以不同 tuple 不會編碼成相同位元組；components 順序會影響結果。
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurveId([u8; 32]);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurveIdParseError {
    #[error("expected 64 hex characters, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex digit")]
    InvalidHex,
}

impl CurveId {
    pub fn from_bytes(bytes: [u8; 32]) -> CurveId {
        CurveId(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn compute(nonce: u64, sample_count: u64, components: &[CircleComponent]) -> CurveId {
        let mut hasher = blake3::Hasher::new();
        hasher.update(DOMAIN_TAG);
        hasher.update(&nonce.to_be_bytes());
        hasher.update(&sample_count.to_be_bytes());
        hasher.update(&(components.len() as u64).to_be_bytes());
        for component in components {
            hasher.update(&component.radius().raw().to_be_bytes());
            hasher.update(&component.frequency().raw().to_be_bytes());
            hasher.update(&component.phase().raw().to_be_bytes());
        }
        CurveId(*hasher.finalize().as_bytes())
    }

    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }

    pub fn from_hex(hex: &str) -> Result<CurveId, CurveIdParseError> {
        if hex.len() != 64 {
            return Err(CurveIdParseError::InvalidLength(hex.len()));
        }
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = hex.get(i * 2..i * 2 + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or(CurveIdParseError::InvalidHex)?;
        }
        Ok(CurveId(bytes))
    }
}

impl fmt::Debug for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CurveId({})", &self.to_hex()[..12])
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl Serialize for CurveId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for CurveId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        CurveId::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::fixedpoint::Fixed;

    fn circle(r: i64, f: i64, p: i64) -> CircleComponent {
        CircleComponent::new(Fixed::from_int(r), Fixed::from_int(f), Fixed::from_int(p)).unwrap()
    }

    #[test]
    fn identical_inputs_give_identical_ids() {
        let cs = [circle(1, 1, 0), circle(1, 2, 0)];
        assert_eq!(CurveId::compute(7, 10, &cs), CurveId::compute(7, 10, &cs));
    }

    #[test]
    fn every_field_feeds_the_id() {
        let cs = [circle(1, 1, 0), circle(1, 2, 0)];
        let base = CurveId::compute(7, 10, &cs);
        assert_ne!(base, CurveId::compute(8, 10, &cs));
        assert_ne!(base, CurveId::compute(7, 11, &cs));
        assert_ne!(base, CurveId::compute(7, 10, &[circle(1, 1, 0), circle(1, 2, 1)]));
        assert_ne!(base, CurveId::compute(7, 10, &[circle(1, 2, 0), circle(1, 1, 0)]));
        assert_ne!(base, CurveId::compute(7, 10, &cs[..1]));
    }

    #[test]
    fn hex_is_fixed_width() {
        let id = CurveId::compute(0, 1, &[]);
        let hex = id.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(CurveId::from_hex(&hex).unwrap(), id);
        assert_eq!(CurveId::from_hex("abc"), Err(CurveIdParseError::InvalidLength(3)));
        assert_eq!(CurveId::from_hex(&"zz".repeat(32)), Err(CurveIdParseError::InvalidHex));
    }
}
