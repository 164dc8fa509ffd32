// ── curveevaluator.rs ───────────────────────────────────────────────────────
//
//   y_i = Σ_c radius_c · sin((frequency_c · x_i + phase_c) · π / 180)
//
// 每一項獨立以定點數計算，正、負貢獻各自累加成 u128，最後只做一次相減。
// 同號累加的結果與順序無關，所以 components 的順序不影響任何 y_i
// 是否溢位或其值（但會影響 CurveId）。

use tracing::debug;

use crate::circle::circlecomponent::CircleComponent;
use crate::circle::sampledpoint::SampledPoint;
use crate::curveerror::CurveError;
use crate::evaluation::domain::Domain;
use crate::math::fixedpoint::Fixed;

pub fn value_at(components: &[CircleComponent], x: Fixed) -> Result<Fixed, CurveError> {
    let overflow = || CurveError::ArithmeticOverflow("add");
    let mut positive: u128 = 0;
    let mut negative: u128 = 0;

    for component in components {
        let term = component.contribution(x)?.raw();
        if term >= 0 {
            positive = positive.checked_add(term.unsigned_abs()).ok_or_else(overflow)?;
        } else {
            negative = negative.checked_add(term.unsigned_abs()).ok_or_else(overflow)?;
        }
    }

    let raw = if positive >= negative {
        i128::try_from(positive - negative).map_err(|_| overflow())?
    } else {
        0i128.checked_sub_unsigned(negative - positive).ok_or_else(overflow)?
    };
    Ok(Fixed::from_raw(raw))
}

pub fn evaluate(components: &[CircleComponent], domain: Domain<'_>) -> Result<Vec<SampledPoint>, CurveError> {
    debug!(components = components.len(), samples = ?domain.sample_len(), "evaluating curve");
    domain
        .coordinates()?
        .into_iter()
        .map(|x| Ok(SampledPoint::new(x, value_at(components, x)?)))
        .collect()
}

/// 以三條平行序列直接求值，x 為 `[0, len)` 的 index domain，不觸及 registry。
pub fn evaluate_parallel(radii: &[Fixed],
                         frequencies: &[Fixed],
                         phases: &[Fixed]) -> Result<Vec<SampledPoint>, CurveError> {
    let components = CircleComponent::from_parallel(radii, frequencies, phases)?;
    evaluate(&components, Domain::Index(components.len() as u64))
}
