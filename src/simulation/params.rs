//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed physics step size and substep count,
//! - the terminal-velocity cap for the ball,
//! - quadrature subdivision count and gravitational constant (`subdivisions`, `G`)

#[derive(Debug, Clone)]
pub struct Parameters {
    pub h0: f64, // fixed physics step size
    pub substeps: usize, // substeps per physics step
    pub v_max: f64, // ball speed cap
    pub subdivisions: usize, // Simpson subdivisions for the force integral
    pub G: f64, // gravitational constant
}
