use std::time::Instant;

use crate::simulation::forces::{ForceLaw, SheetGravity};
use crate::simulation::integrator::symplectic_euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{PointBody, SheetBody, System};

fn bench_sheet() -> SheetBody {
    SheetBody {
        x: 0.0,
        v: 0.0,
        m: 10000.0,
        length: 10.0,
        width: 10.0,
        thickness: 0.2,
    }
}

/// Time the force integral at increasing subdivision counts.
///
/// The cost is quadratic in `n` (an n x n node grid), while the estimate
/// converges quickly; this prints both so the crossover is visible.
pub fn bench_quadrature() {
    let ns = [10, 20, 40, 80, 160, 320];
    let sheet = bench_sheet();

    for n in ns {
        let gravity = SheetGravity {
            G: 6.674e-11,
            subdivisions: n,
        };

        let start = Instant::now();
        let reps: u32 = 100;
        let mut force = 0.0;
        for _ in 0..reps {
            force = gravity
                .force(10.0, &sheet, 1.0)
                .expect("benchmark inputs are valid");
        }
        let elapsed = start.elapsed();

        println!(
            "force integral n = {:4}: F = {:.9e} N, {:?} per call",
            n,
            force,
            elapsed / reps
        );
    }
}

/// Time full physics steps, force evaluation included.
pub fn bench_step() {
    let mut sys = System {
        sheet: bench_sheet(),
        ball: PointBody {
            x: 50.0,
            v: 0.0,
            m: 1.0,
            radius: 0.5,
        },
        t: 0.0,
    };

    let parameters = Parameters {
        h0: 0.01,
        substeps: 10,
        v_max: 3.0,
        subdivisions: 100,
        G: 1.0,
    };

    let forces = SheetGravity {
        G: parameters.G,
        subdivisions: parameters.subdivisions,
    };

    let steps: u32 = 1000;
    let start = Instant::now();
    for _ in 0..steps {
        symplectic_euler_step(&mut sys, &forces, &parameters)
            .expect("benchmark inputs are valid");
    }
    let elapsed = start.elapsed();

    println!(
        "{} steps x {} substeps: {:?} total, {:?} per step, final t = {:.2}",
        steps,
        parameters.substeps,
        elapsed,
        elapsed / steps,
        sys.t
    );
}
