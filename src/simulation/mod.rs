pub mod states;
pub mod params;
pub mod quadrature;
pub mod forces;
pub mod integrator;
pub mod scenario;
