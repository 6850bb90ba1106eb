use bevy::app::AppExit;
use bevy::math::primitives::{Circle, Rectangle};
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::integrator::symplectic_euler_step;
use crate::simulation::scenario::Scenario;

#[derive(Component)]
struct SheetMarker;

#[derive(Component)]
struct BallMarker;

/// World-space (meters) → screen-space (pixels) scaling for positions and sizes
const SCALE: f32 = 8.0;

/// Screen y of the physical origin; shifts the scene down so a ball dropped
/// from tens of meters stays inside the default window
const ORIGIN_Y: f32 = -250.0;

/// Longest frame delta fed into the physics accumulator. A stall (window
/// drag, debugger pause) otherwise turns into a burst of catch-up steps.
const MAX_FRAME_DT: f64 = 0.25;

pub fn run_2d(scenario: Scenario) {
    // Bevy's log plugin is not installed yet at this point
    println!(
        "run_2d: starting Bevy 2D viewer, ball at {:.2} m above the sheet",
        scenario.system.ball.x - scenario.system.sheet.x
    );

    App::new()
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system))
        .run();
}

fn to_screen_y(x: f64) -> f32 {
    x as f32 * SCALE + ORIGIN_Y
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    let sheet = &scenario.system.sheet;
    let ball = &scenario.system.ball;

    // Sheet: a rectangle spanning its length, at least a couple pixels thick
    let sheet_w = (sheet.length as f32) * SCALE;
    let sheet_h = ((sheet.thickness as f32) * SCALE).max(2.0);
    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Rectangle::new(sheet_w, sheet_h))),
            material: materials.add(ColorMaterial::from(Color::srgb(0.8, 0.8, 0.8))),
            transform: Transform::from_xyz(0.0, to_screen_y(sheet.x), 0.0),
            ..Default::default()
        },
        SheetMarker,
    ));

    // Ball: a circle, clamped to a visible minimum radius
    let ball_r = ((ball.radius as f32) * SCALE).max(2.0);
    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Circle::new(ball_r))),
            material: materials.add(ColorMaterial::from(Color::WHITE)),
            transform: Transform::from_xyz(0.0, to_screen_y(ball.x), 1.0),
            ..Default::default()
        },
        BallMarker,
    ));
}

/// Fixed-timestep accumulator: real frame time accrues into `accumulator`
/// and is consumed in whole `h0` physics steps, decoupling the physics tick
/// rate from the render tick rate. Substeps inside each step remain an
/// internal accuracy control.
fn physics_step_system(
    mut scenario: ResMut<Scenario>,
    time: Res<Time>,
    mut accumulator: Local<f64>,
    mut exit: EventWriter<AppExit>,
) {
    *accumulator += (time.delta_seconds() as f64).min(MAX_FRAME_DT);

    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        system,
        parameters,
        forces,
    } = &mut *scenario;

    while *accumulator >= parameters.h0 {
        if let Err(err) = symplectic_euler_step(system, forces, parameters) {
            // A failed step is fatal to the run: log and quit
            error!("physics step failed at t = {:.3}: {err}", system.t);
            exit.send(AppExit::error());
            return;
        }
        *accumulator -= parameters.h0;
    }
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    mut sheet_query: Query<&mut Transform, (With<SheetMarker>, Without<BallMarker>)>,
    mut ball_query: Query<&mut Transform, With<BallMarker>>,
) {
    for mut transform in &mut sheet_query {
        transform.translation.y = to_screen_y(scenario.system.sheet.x);
    }
    for mut transform in &mut ball_query {
        transform.translation.y = to_screen_y(scenario.system.ball.x);
    }
}
