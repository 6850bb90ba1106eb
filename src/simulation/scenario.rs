//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with both bodies at t = 0)
//! - the active force law (`SheetGravity`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration and visualization systems.

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::forces::{SheetGravity, DEFAULT_FORCE_SUBDIVISIONS};
use crate::simulation::params::Parameters;
use crate::simulation::states::{PointBody, SheetBody, System};

/// Bevy resource representing a fully-initialized scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// the numerical parameters, the current system state, and the force law
/// coupling the two bodies. All simulation constants live here; nothing is
/// read from ambient globals.
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: SheetGravity,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Bodies: map the config structs onto runtime state
        let sheet = SheetBody {
            x: cfg.sheet.x,
            v: cfg.sheet.v,
            m: cfg.sheet.m,
            length: cfg.sheet.length,
            width: cfg.sheet.width,
            thickness: cfg.sheet.thickness,
        };
        let ball = PointBody {
            x: cfg.ball.x,
            v: cfg.ball.v,
            m: cfg.ball.m,
            radius: cfg.ball.radius,
        };

        // Initial system state at t = 0
        let system = System {
            sheet,
            ball,
            t: 0.0,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            h0: p_cfg.h0,
            substeps: p_cfg.substeps.unwrap_or(10),
            v_max: p_cfg.v_max.unwrap_or(3.0),
            subdivisions: p_cfg.subdivisions.unwrap_or(DEFAULT_FORCE_SUBDIVISIONS),
            G: p_cfg.G,
        };

        // Force law: Newtonian sheet gravity evaluated by Simpson quadrature
        let forces = SheetGravity {
            G: parameters.G,
            subdivisions: parameters.subdivisions,
        };

        Self {
            parameters,
            system,
            forces,
        }
    }
}
