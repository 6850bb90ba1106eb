pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{SheetBody, PointBody, System};
pub use simulation::quadrature::{simpson_1d, simpson_2d, QuadratureError};
pub use simulation::forces::{ForceLaw, SheetGravity, ForceError, DEFAULT_FORCE_SUBDIVISIONS};
pub use simulation::integrator::symplectic_euler_step;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, SheetConfig, BallConfig, ScenarioConfig};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::{bench_quadrature, bench_step};
