//! Fixed-step time integrator for the sheet/ball system
//!
//! Advances both bodies by symplectic Euler (kick then drift with the
//! updated velocity), substepped for stability against the floor-collision
//! nonlinearity and the fast-changing force at small separations.

use super::forces::{ForceError, ForceLaw};
use super::params::Parameters;
use super::states::System;

/// Resting clearance left between the ball surface and the sheet top after a
/// collision clamp. Keeps the separation fed into the force law strictly
/// positive even for a zero-thickness sheet.
const CONTACT_GAP: f64 = 1e-6;

/// Advance the system by one fixed step `params.h0` using symplectic Euler.
///
/// The step is divided into `params.substeps` equal substeps. Each substep:
/// 1. evaluates the force at the current separation,
/// 2. kicks and drifts the sheet (free motion, no collision response),
/// 3. kicks and drifts the ball with the reaction force, then resolves
///    penetration against the sheet's *already updated* top surface,
/// 4. caps the ball speed at `params.v_max`.
///
/// The sheet-before-ball ordering matters: the collision test must see the
/// surface where the sheet actually is at the end of the substep.
pub fn symplectic_euler_step(
    sys: &mut System,
    forces: &impl ForceLaw,
    params: &Parameters,
) -> Result<(), ForceError> {
    let dt = params.h0 / params.substeps as f64;

    for _ in 0..params.substeps {
        // Re-evaluate every substep: near contact the force varies on the
        // scale of a single substep's displacement
        let z = sys.ball.x - sys.sheet.x;
        let f = forces.force(z, &sys.sheet, sys.ball.m)?;

        // Sheet: pulled toward the ball, never clamped. It is normally so
        // massive that the displacement is negligible, but it is integrated
        // honestly rather than pinned.
        sys.sheet.v += f / sys.sheet.m * dt;
        sys.sheet.x += sys.sheet.v * dt;

        // Ball: Newton's third law reaction
        sys.ball.v += -f / sys.ball.m * dt;
        sys.ball.x += sys.ball.v * dt;

        // Floor collision against the sheet's current top surface: clamp to
        // just above it and reflect the velocity upward, magnitude preserved
        let floor = sys.sheet.top_surface() + sys.ball.radius;
        if sys.ball.x < floor {
            sys.ball.x = floor + CONTACT_GAP;
            sys.ball.v = sys.ball.v.abs();
        }

        // Terminal-velocity cap: clamp the speed to at most v_max, sign
        // preserved. Speeds already below the cap pass through untouched.
        let speed = sys.ball.v.abs();
        if speed > params.v_max {
            sys.ball.v *= params.v_max / speed;
        }
    }

    sys.t += params.h0;
    Ok(())
}
