//! Core state types for the sheet/ball simulation.
//!
//! Motion is one-dimensional along the axis through the sheet center, so
//! positions and velocities are plain scalars (meters, m/s):
//! - `SheetBody` — the uniform rectangular mass sheet
//! - `PointBody` — the point mass ("ball") falling toward it
//!
//! `System` holds both bodies and the current simulation time `t`.

#[derive(Debug, Clone)]
pub struct SheetBody {
    pub x: f64, // position of the slab center along the axis
    pub v: f64, // velocity
    pub m: f64, // mass
    pub length: f64, // extent along the sheet's own x axis
    pub width: f64, // extent along the sheet's own y axis
    pub thickness: f64, // slab thickness (collision only, not in the force law)
}

impl SheetBody {
    /// Height of the sheet's top surface, from physical state alone.
    /// The collision check and the renderer both consume this; neither
    /// owns the other's coordinate mapping.
    pub fn top_surface(&self) -> f64 {
        self.x + 0.5 * self.thickness
    }
}

#[derive(Debug, Clone)]
pub struct PointBody {
    pub x: f64, // position along the axis
    pub v: f64, // velocity
    pub m: f64, // mass
    pub radius: f64, // radius (collision and visualization)
}

#[derive(Debug, Clone)]
pub struct System {
    pub sheet: SheetBody,
    pub ball: PointBody,
    pub t: f64, // time
}
