//! `shape-playground [star|cloud] [seed] [key=value ...]`
//!
//! Builds one solid from a seeded session and prints its payload summary as
//! JSON. Star and extrusion controls can be overridden with `key=value`
//! arguments, e.g. `shape-playground star 7 branches=12 bevelEnabled=true`.

use anyhow::{bail, Context};
use shape_outline::{CloudParams, ShapeKind};
use shape_playground::{
    clamp_parameters, init_logging, LoggingConfig, ParameterSet, RenderPayload, RotationStepper,
    ShapeSession, Transform,
};

const DEFAULT_SEED: u64 = 0;

/// One frame at 60 Hz.
const FRAME_DELTA: f64 = 1.0 / 60.0;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args().skip(1).peekable();

    let shape = match args.peek() {
        Some(arg) if !arg.contains('=') && arg.parse::<u64>().is_err() => args.next(),
        _ => None,
    };

    let seed = match args.peek() {
        Some(arg) if !arg.contains('=') => {
            let arg = args.next().unwrap_or_default();
            arg.parse::<u64>()
                .with_context(|| format!("seed must be an unsigned integer, got '{arg}'"))?
        }
        _ => DEFAULT_SEED,
    };

    let mut params = ParameterSet::new();
    for assignment in args {
        params.apply_assignment(&assignment)?;
    }
    let params = clamp_parameters(&params);

    let kind = match shape.as_deref() {
        None | Some("star") => ShapeKind::Star(params.star_params()?),
        Some("cloud") => ShapeKind::Cloud(CloudParams::default()),
        Some(other) => bail!("unknown shape kind '{other}', expected star or cloud"),
    };
    let extrusion = params.extrusion_params()?;

    log::info!("building {} with seed {seed}", kind.name());
    let mut session = ShapeSession::from_seed(seed);
    let solid = session.solid(&kind, &extrusion)?;

    let mut transform = Transform::default();
    RotationStepper::default().step(&mut transform, FRAME_DELTA);

    let payload = RenderPayload::from_solid(kind.name(), &solid, &transform);
    println!("{}", serde_json::to_string_pretty(&payload.summary())?);
    Ok(())
}
