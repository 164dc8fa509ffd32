use std::env;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use transformcurve::access::principal::Principal;
use transformcurve::circle::circlecomponent::CircleComponent;
use transformcurve::configuration::EngineConfiguration;
use transformcurve::curveerror::CurveError;
use transformcurve::math::fixedpoint::Fixed;
use transformcurve::registry::curvestore::RefCellCurveStore;
use transformcurve::transformcurve::TransformCurve;

// 用法：transformcurve [config.json]
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let configuration = match env::args().nth(1) {
        Some(path) => match EngineConfiguration::from_reader(&path) {
            Ok(configuration) => configuration,
            Err(err) => {
                error!(%path, %err, "failed to load configuration");
                return ExitCode::FAILURE;
            }
        },
        None => EngineConfiguration::default()
    };

    match run(configuration) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "demo failed");
            ExitCode::FAILURE
        }
    }
}

fn run(configuration: EngineConfiguration) -> Result<(), CurveError> {
    let deployer = Principal::new();
    let engine = TransformCurve::with_store(deployer, configuration, RefCellCurveStore::new());

    let radii = [Fixed::ONE; 3];
    let frequencies = [Fixed::from_int(1), Fixed::from_int(2), Fixed::from_int(3)];
    let phases = [Fixed::ZERO; 3];

    let (xs, ys) = engine.get_ephemeral_curve(&radii, &frequencies, &phases)?;
    for (x, y) in xs.iter().zip(ys.iter()) {
        println!("{}, {}", x, y);
    }

    let components = CircleComponent::from_parallel(&radii, &frequencies, &phases)?;
    let curve_id = engine.set_curve(&deployer, 0, 11, components)?;
    println!("curve {}", curve_id);

    let page = engine.get_stored_linear_space(&curve_id, 11, 0, Fixed::ZERO, Fixed::from_int(50))?;
    for point in page {
        println!("{}, {}", point.x(), point.y());
    }
    Ok(())
}
