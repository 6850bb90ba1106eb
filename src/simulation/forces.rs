//! Force laws coupling the sheet and the point mass
//!
//! Defines the [`ForceLaw`] trait and its Newtonian implementation for a
//! uniform rectangular sheet, evaluated by nested Simpson quadrature.

use thiserror::Error;

use crate::simulation::quadrature::{simpson_2d, QuadratureError};
use crate::simulation::states::SheetBody;

/// Subdivision count used for the force integral when nothing else is
/// configured. Generic quadrature callers typically get by with 10; the
/// force integrand is peaked near small separations and wants more nodes.
pub const DEFAULT_FORCE_SUBDIVISIONS: usize = 100;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ForceError {
    /// The integrand diverges at zero separation; the simulator keeps a
    /// strictly positive gap so this only fires on bad inputs.
    #[error("gravitational force is undefined at zero separation")]
    UndefinedForce,

    #[error(transparent)]
    Quadrature(#[from] QuadratureError),
}

/// Force on the point mass along the axis through the sheet center.
///
/// `separation` is the signed perpendicular distance from the sheet's plane
/// to the point mass. The returned value carries the sign of `separation`:
/// positive means the sheet is pulled up toward a ball above it, and the
/// ball feels the equal and opposite reaction.
pub trait ForceLaw {
    fn force(&self, separation: f64, sheet: &SheetBody, point_mass: f64) -> Result<f64, ForceError>;
}

/// Newtonian attraction between a uniform rectangular sheet and a point mass
///
/// Only the axial component survives by symmetry, which leaves the surface
/// integral
///
///   F(z) = G m sigma z * integral of 1/(x^2 + y^2 + z^2)^(3/2)
///          over x in [-L/2, L/2], y in [-W/2, W/2]
///
/// with sigma = M/(L W). There is no closed form over a rectangle worth
/// carrying around, so the integral is evaluated numerically.
pub struct SheetGravity {
    pub G: f64, // gravitational constant
    pub subdivisions: usize, // Simpson subdivisions per axis
}

impl ForceLaw for SheetGravity {
    fn force(&self, separation: f64, sheet: &SheetBody, point_mass: f64) -> Result<f64, ForceError> {
        let z = separation;
        if z == 0.0 {
            return Err(ForceError::UndefinedForce);
        }

        // sigma: mass per unit area of the sheet
        let sigma = sheet.m / (sheet.length * sheet.width);

        let z2 = z * z;
        let integral = simpson_2d(
            |x, y| (x * x + y * y + z2).powf(1.5).recip(),
            -0.5 * sheet.length,
            0.5 * sheet.length,
            -0.5 * sheet.width,
            0.5 * sheet.width,
            self.subdivisions,
        )?;

        // The z factor carries the sign: force(-z) = -force(z)
        Ok(self.G * point_mass * sigma * z * integral)
    }
}

impl SheetGravity {
    /// Sample the force at `samples` evenly spaced separations over
    /// `[z_min, z_max]`. Used by the `--curve` console mode to inspect the
    /// force profile without a plotting stack.
    pub fn sample_curve(
        &self,
        sheet: &SheetBody,
        point_mass: f64,
        z_min: f64,
        z_max: f64,
        samples: usize,
    ) -> Result<Vec<(f64, f64)>, ForceError> {
        let mut curve = Vec::with_capacity(samples);
        for i in 0..samples {
            let frac = i as f64 / (samples - 1).max(1) as f64;
            let z = z_min + frac * (z_max - z_min);
            curve.push((z, self.force(z, sheet, point_mass)?));
        }
        Ok(curve)
    }
}
