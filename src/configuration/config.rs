//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`SheetConfig`]      – initial state and geometry of the mass sheet
//! - [`BallConfig`]       – initial state of the point mass
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   h0: 0.01            # fixed physics step size, seconds
//!   substeps: 10        # symplectic-Euler substeps per step
//!   v_max: 3.0          # ball terminal-velocity cap
//!   subdivisions: 100   # Simpson subdivisions for the force integral
//!   G: 6.674e-11        # gravitational constant
//!
//! sheet:
//!   x: 0.0              # slab center position
//!   v: 0.0
//!   m: 10000.0          # kg
//!   length: 10.0        # m
//!   width: 10.0         # m
//!   thickness: 0.2      # m, collision geometry only
//!
//! ball:
//!   x: 50.0             # m above the sheet center
//!   v: 0.0
//!   m: 1.0              # kg
//!   radius: 0.5         # m
//! ```
//!
//! The engine maps this configuration into its runtime scenario
//! representation; the config structs themselves are never mutated.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub h0: f64,                     // fixed physics step size
    pub substeps: Option<usize>,     // substeps per physics step (default 10)
    pub v_max: Option<f64>,          // ball speed cap (default 3.0)
    pub subdivisions: Option<usize>, // Simpson subdivisions for the force integral (default 100)
    pub G: f64,                      // gravitational constant
}

/// Initial state and geometry of the mass sheet
#[derive(Deserialize, Debug)]
pub struct SheetConfig {
    pub x: f64,         // initial position of the slab center
    pub v: f64,         // initial velocity
    pub m: f64,         // mass
    pub length: f64,    // sheet length L
    pub width: f64,     // sheet width W
    pub thickness: f64, // slab thickness, used by the collision clamp
}

/// Initial state of the point mass
#[derive(Deserialize, Debug)]
pub struct BallConfig {
    pub x: f64,      // initial position
    pub v: f64,      // initial velocity
    pub m: f64,      // mass
    pub radius: f64, // radius, used for collision and visualization
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub sheet: SheetConfig,           // the mass sheet
    pub ball: BallConfig,             // the point mass
}
