use sheetfall::simulation::forces::{ForceError, ForceLaw, SheetGravity};
use sheetfall::simulation::integrator::symplectic_euler_step;
use sheetfall::simulation::params::Parameters;
use sheetfall::simulation::quadrature::{simpson_1d, simpson_2d, QuadratureError};
use sheetfall::simulation::states::{PointBody, SheetBody, System};

use approx::assert_relative_eq;

/// 10 m x 10 m, 10 t sheet at the origin, at rest
pub fn test_sheet() -> SheetBody {
    SheetBody {
        x: 0.0,
        v: 0.0,
        m: 10000.0,
        length: 10.0,
        width: 10.0,
        thickness: 0.2,
    }
}

/// Default physics parameters for tests; G is boosted so dynamics tests
/// finish in seconds of simulated time, and the force integral uses a
/// coarser grid than production to keep the settle test fast
pub fn test_params() -> Parameters {
    Parameters {
        h0: 0.01,
        substeps: 10,
        v_max: 3.0,
        subdivisions: 20,
        G: 1.0,
    }
}

/// Ball of 1 kg dropped from rest at height `z0` above the sheet center
pub fn drop_system(z0: f64) -> System {
    System {
        sheet: test_sheet(),
        ball: PointBody {
            x: z0,
            v: 0.0,
            m: 1.0,
            radius: 0.5,
        },
        t: 0.0,
    }
}

pub fn gravity(p: &Parameters) -> SheetGravity {
    SheetGravity {
        G: p.G,
        subdivisions: p.subdivisions,
    }
}

// ==================================================================================
// Quadrature tests
// ==================================================================================

#[test]
fn simpson_constant_is_exact() {
    for n in [2, 4, 10, 100] {
        let result = simpson_1d(|_| 1.0, 0.0, 1.0, n).unwrap();
        assert_relative_eq!(result, 1.0, max_relative = 1e-14);
    }
}

#[test]
fn simpson_quadratic_is_exact() {
    // x^2 is degree <= 3, so Simpson integrates it exactly up to roundoff
    let result = simpson_1d(|x| x * x, 0.0, 1.0, 10).unwrap();
    assert!(
        (result - 1.0 / 3.0).abs() < 1e-6,
        "Expected ~1/3, got {result}"
    );
}

#[test]
fn simpson_cubic_exact_at_minimal_n() {
    // Degree-3 exactness holds even for a single subinterval pair
    let result = simpson_1d(|x| x * x * x, 0.0, 1.0, 2).unwrap();
    assert_relative_eq!(result, 0.25, max_relative = 1e-14);
}

#[test]
fn simpson_rejects_bad_subdivision_counts() {
    assert_eq!(
        simpson_1d(|_| 1.0, 0.0, 1.0, 3),
        Err(QuadratureError::InvalidSubdivision(3))
    );
    assert_eq!(
        simpson_1d(|_| 1.0, 0.0, 1.0, 0),
        Err(QuadratureError::InvalidSubdivision(0))
    );
    assert_eq!(
        simpson_2d(|_, _| 1.0, 0.0, 1.0, 0.0, 1.0, 7),
        Err(QuadratureError::InvalidSubdivision(7))
    );
}

#[test]
fn simpson_rejects_degenerate_bounds() {
    assert_eq!(
        simpson_1d(|_| 1.0, 1.0, 1.0, 10),
        Err(QuadratureError::InvalidBounds { a: 1.0, b: 1.0 })
    );
    assert_eq!(
        simpson_1d(|_| 1.0, 2.0, 1.0, 10),
        Err(QuadratureError::InvalidBounds { a: 2.0, b: 1.0 })
    );
    // Both axes are checked, inner x axis included
    assert_eq!(
        simpson_2d(|_, _| 1.0, 1.0, 0.0, 0.0, 1.0, 10),
        Err(QuadratureError::InvalidBounds { a: 1.0, b: 0.0 })
    );
    assert_eq!(
        simpson_2d(|_, _| 1.0, 0.0, 1.0, 5.0, 5.0, 10),
        Err(QuadratureError::InvalidBounds { a: 5.0, b: 5.0 })
    );
}

#[test]
fn simpson2d_unit_square_constant() {
    for n in [2, 10, 50] {
        let result = simpson_2d(|_, _| 1.0, 0.0, 1.0, 0.0, 1.0, n).unwrap();
        assert_relative_eq!(result, 1.0, max_relative = 1e-14);
    }
}

#[test]
fn simpson2d_separable_product() {
    // integral of x*y over the unit square is 1/4; the nested rule is exact
    // for a bilinear integrand
    let result = simpson_2d(|x, y| x * y, 0.0, 1.0, 0.0, 1.0, 10).unwrap();
    assert_relative_eq!(result, 0.25, max_relative = 1e-12);
}

#[test]
fn quadrature_is_deterministic() {
    let f = |x: f64| (x * x + 1.0).recip();
    let first = simpson_1d(f, 0.0, 3.0, 50).unwrap();
    let second = simpson_1d(f, 0.0, 3.0, 50).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

// ==================================================================================
// Force law tests
// ==================================================================================

#[test]
fn force_matches_reference_value() {
    // Regression oracle: for the square sheet the axial integral has the
    // closed form G*m*sigma * 4*atan(a*b / (z*sqrt(a^2 + b^2 + z^2))),
    // which gives 5.3754511e-9 N at z = 10 with these constants
    let sheet = test_sheet();
    let gravity = SheetGravity {
        G: 6.674e-11,
        subdivisions: 100,
    };

    let force = gravity.force(10.0, &sheet, 1.0).unwrap();
    let reference = 5.3754511e-9;

    assert!(
        (force - reference).abs() / reference < 0.01,
        "Expected ~{reference:.4e} N, got {force:.4e} N"
    );
}

#[test]
fn force_decays_toward_zero() {
    let sheet = test_sheet();
    let p = test_params();
    let gravity = gravity(&p);

    let near = gravity.force(10.0, &sheet, 1.0).unwrap();
    let mid = gravity.force(20.0, &sheet, 1.0).unwrap();
    let far = gravity.force(40.0, &sheet, 1.0).unwrap();
    let very_far = gravity.force(1000.0, &sheet, 1.0).unwrap();

    assert!(near > mid && mid > far && far > very_far);
    assert!(very_far > 0.0);
    assert!(very_far < near * 1e-3, "Force should decay, got {very_far}");
}

#[test]
fn force_is_antisymmetric() {
    let sheet = test_sheet();
    let p = test_params();
    let gravity = gravity(&p);

    for z in [0.5, 2.0, 10.0, 50.0] {
        let above = gravity.force(z, &sheet, 1.0).unwrap();
        let below = gravity.force(-z, &sheet, 1.0).unwrap();
        assert_relative_eq!(above, -below, max_relative = 1e-12);
    }
}

#[test]
fn force_undefined_at_zero_separation() {
    let sheet = test_sheet();
    let p = test_params();
    let gravity = gravity(&p);

    assert_eq!(
        gravity.force(0.0, &sheet, 1.0),
        Err(ForceError::UndefinedForce)
    );
}

#[test]
fn force_curve_is_monotone() {
    let sheet = test_sheet();
    // Monotonicity needs the production grid: at coarse subdivision counts
    // the quadrature error near small separations swamps the decay
    let gravity = SheetGravity {
        G: 1.0,
        subdivisions: 100,
    };

    let curve = gravity.sample_curve(&sheet, 1.0, 0.5, 10.0, 100).unwrap();
    assert_eq!(curve.len(), 100);
    for pair in curve.windows(2) {
        assert!(
            pair[0].1 > pair[1].1,
            "Force should decrease with separation: {pair:?}"
        );
    }
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn ball_falls_and_sheet_rises() {
    let mut sys = drop_system(50.0);
    let p = test_params();
    let forces = gravity(&p);

    symplectic_euler_step(&mut sys, &forces, &p).unwrap();

    assert!(sys.ball.x < 50.0, "Ball should fall toward the sheet");
    assert!(sys.ball.v < 0.0);
    // Newton's third law: the sheet is pulled up toward the ball, slightly
    assert!(sys.sheet.v > 0.0);
    assert!(sys.sheet.v.abs() < sys.ball.v.abs());
    assert_relative_eq!(sys.t, p.h0);
}

#[test]
fn bounce_reflects_velocity_upward() {
    let mut sys = drop_system(0.601); // just above the 0.6 m contact height
    sys.ball.v = -3.0;
    // Single substep so the step ends right after the impact
    let mut p = test_params();
    p.h0 = 0.001;
    p.substeps = 1;
    let forces = gravity(&p);

    symplectic_euler_step(&mut sys, &forces, &p).unwrap();

    let floor = sys.sheet.top_surface() + sys.ball.radius;
    assert!(sys.ball.x >= floor, "Ball must not penetrate the sheet");
    assert!(sys.ball.v > 0.0, "Impact should reflect velocity upward");
    // Inelastic-free bounce: the clamp preserves magnitude, so speed stays
    // within the cap rather than being damped away
    assert!(sys.ball.v <= p.v_max + 1e-12);
}

#[test]
fn velocity_cap_engages_under_strong_force() {
    let mut sys = drop_system(1.0);
    let mut p = test_params();
    p.v_max = 0.5;
    let forces = gravity(&p);

    // At z = 1 the acceleration is hundreds of m/s^2 with G = 1; a single
    // substep would exceed the cap without the clamp
    symplectic_euler_step(&mut sys, &forces, &p).unwrap();
    assert!(
        sys.ball.v.abs() <= p.v_max + 1e-12,
        "Speed {} exceeds cap {}",
        sys.ball.v.abs(),
        p.v_max
    );
}

#[test]
fn velocity_below_cap_is_untouched() {
    // Far from the sheet the acceleration is tiny; one step must not scale
    // a sub-cap velocity up to the cap
    let mut sys = drop_system(200.0);
    sys.ball.v = -0.1;
    let p = test_params();
    let forces = gravity(&p);

    symplectic_euler_step(&mut sys, &forces, &p).unwrap();
    assert!(
        sys.ball.v.abs() < 0.2,
        "Cap must not inflate slow velocities, got {}",
        sys.ball.v
    );
}

#[test]
fn ball_settles_onto_sheet() {
    let mut sys = drop_system(50.0);
    let p = test_params();
    let forces = gravity(&p);

    // The drop takes roughly 17 s of simulated time at the 3 m/s cap;
    // 3500 steps of 10 ms leaves ample margin for the bounces to die down
    let mut gap_at_checkpoint = f64::NAN;
    for step in 0..3500 {
        symplectic_euler_step(&mut sys, &forces, &p).unwrap();
        assert!(
            sys.ball.v.abs() <= p.v_max + 1e-9,
            "Speed cap violated at step {step}"
        );

        if step == 3000 {
            gap_at_checkpoint = sys.ball.x - (sys.sheet.top_surface() + sys.ball.radius);
        }
    }

    let gap = sys.ball.x - (sys.sheet.top_surface() + sys.ball.radius);

    // Resting contact: the ball sits just above the sheet's (drifting) top
    // surface, and stays there between the late checkpoints
    assert!(gap >= 0.0, "Ball ended below the sheet surface: {gap}");
    assert!(gap < 0.01, "Ball did not settle onto the sheet: gap {gap}");
    assert!(
        gap_at_checkpoint >= 0.0 && gap_at_checkpoint < 0.01,
        "Ball was not settled at the checkpoint: gap {gap_at_checkpoint}"
    );

    // The pair may drift together (the clamp injects momentum) and the
    // resting contact jitters by one substep's kick, so the relative
    // velocity is bounded rather than exactly zero
    assert!(
        (sys.ball.v - sys.sheet.v).abs() < p.v_max,
        "Relative velocity did not stay bounded: {}",
        sys.ball.v - sys.sheet.v
    );
}

#[test]
fn separation_stays_positive_throughout() {
    // The collision clamp doubles as the guarantee that the force law never
    // sees zero separation
    let mut sys = drop_system(2.0);
    let p = test_params();
    let forces = gravity(&p);

    for _ in 0..1000 {
        symplectic_euler_step(&mut sys, &forces, &p).unwrap();
        assert!(sys.ball.x - sys.sheet.x > 0.0);
    }
}
