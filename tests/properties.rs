use proptest::prelude::*;

use transformcurve::circle::circlecomponent::CircleComponent;
use transformcurve::circle::curveid::CurveId;
use transformcurve::evaluation::curveevaluator::evaluate;
use transformcurve::evaluation::domain::Domain;
use transformcurve::evaluation::linearspacesampler::LinearSpaceSampler;
use transformcurve::math::fixedpoint::{
    Fixed,
    WAD
};

fn component() -> impl Strategy<Value = CircleComponent> {
    (0i128..100 * WAD, 0i128..50 * WAD, -720 * WAD..720 * WAD).prop_map(|(r, f, p)| {
        CircleComponent::new(Fixed::from_raw(r), Fixed::from_raw(f), Fixed::from_raw(p)).unwrap()
    })
}

proptest! {
    #[test]
    fn empty_components_are_flat(n in 1u64..200) {
        let points = evaluate(&[], Domain::Index(n)).unwrap();
        prop_assert_eq!(points.len() as u64, n);
        prop_assert!(points.iter().all(|p| p.y() == Fixed::ZERO));
    }

    #[test]
    fn evaluation_is_deterministic(components in prop::collection::vec(component(), 0..6), n in 1u64..40) {
        let a = evaluate(&components, Domain::Index(n)).unwrap();
        let b = evaluate(&components, Domain::Index(n)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn reversing_components_changes_id_not_shape(
        components in prop::collection::vec(component(), 2..6),
        nonce in any::<u64>(),
        n in 1u64..40,
    ) {
        let mut reversed = components.clone();
        reversed.reverse();
        prop_assume!(reversed != components);

        prop_assert_ne!(CurveId::compute(nonce, n, &components), CurveId::compute(nonce, n, &reversed));
        prop_assert_eq!(
            evaluate(&components, Domain::Index(n)).unwrap(),
            evaluate(&reversed, Domain::Index(n)).unwrap()
        );
    }

    #[test]
    fn pages_reassemble_the_partition(n in 1u64..60, page_length in 1u64..17, end in 0i64..10_000) {
        let sampler = LinearSpaceSampler::default();
        let end = Fixed::from_int(end);
        let full = sampler.linear_space(n, n, 0, Fixed::ZERO, end).unwrap();
        prop_assert_eq!(full.len() as u64, n);

        let pages = n.div_ceil(page_length);
        let mut joined = Vec::new();
        for page in 0..pages {
            let chunk = sampler.linear_space(n, page_length, page, Fixed::ZERO, end).unwrap();
            prop_assert!(chunk.len() as u64 <= page_length);
            joined.extend(chunk);
        }
        prop_assert_eq!(joined, full);
        prop_assert!(sampler.linear_space(n, page_length, pages, Fixed::ZERO, end).unwrap().is_empty());
    }
}
