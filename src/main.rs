//! quatcam - headless free-look camera walkthrough
//!
//! Drives the camera through a scripted input sequence at a fixed
//! timestep and logs the resulting pose each simulated second. The window,
//! input polling, and GPU layers are external consumers; this binary
//! stands in for them with synthetic winit events.

mod config;

use quatcam_camera::Camera;
use quatcam_input::CameraController;
use quatcam_math::{mat4, Vec3};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use config::AppConfig;

const FRAME_DT: f32 = 1.0 / 60.0;
const FRAMES_PER_PHASE: u32 = 120;

/// One segment of the scripted walkthrough
struct Phase {
    name: &'static str,
    key: Option<KeyCode>,
    /// Mouse delta fed to the controller every frame
    mouse: (f64, f64),
}

const SCRIPT: &[Phase] = &[
    Phase { name: "walk forward", key: Some(KeyCode::KeyW), mouse: (0.0, 0.0) },
    Phase { name: "yaw sweep left", key: None, mouse: (-3.0, 0.0) },
    Phase { name: "walk forward after yaw", key: Some(KeyCode::KeyW), mouse: (0.0, 0.0) },
    Phase { name: "look up against clamp", key: None, mouse: (0.0, -25.0) },
    Phase { name: "sprint strafe right", key: Some(KeyCode::KeyD), mouse: (0.0, 0.0) },
];

fn main() {
    // Load configuration
    let app_config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // Initialize logging from the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&app_config.debug.log_level),
    )
    .init();
    log::info!("Starting quatcam walkthrough");

    let mut camera = Camera::new()
        .with_position(Vec3::from(app_config.camera.start_position))
        .with_move_speed(app_config.input.move_speed)
        .with_look_sensitivity(app_config.input.look_sensitivity)
        .with_pitch_limit(app_config.camera.pitch_limit);

    let mut controller = CameraController::new()
        .with_move_speed(app_config.input.move_speed)
        .with_sprint_multiplier(app_config.input.sprint_multiplier)
        .with_constrain_pitch(app_config.input.constrain_pitch);

    for (index, phase) in SCRIPT.iter().enumerate() {
        log::info!("Phase {}: {}", index + 1, phase.name);

        if let Some(key) = phase.key {
            controller.process_keyboard(key, ElementState::Pressed);
        }
        // The last phase demonstrates the sprint modifier
        if index == SCRIPT.len() - 1 {
            controller.process_keyboard(KeyCode::ShiftLeft, ElementState::Pressed);
        }

        for frame in 0..FRAMES_PER_PHASE {
            controller.process_mouse_motion(phase.mouse.0, phase.mouse.1);
            let position = controller.update(&mut camera, FRAME_DT, true);

            if (frame + 1) % 60 == 0 {
                let dir = camera.direction();
                log::info!(
                    "  pos ({:.2}, {:.2}, {:.2})  dir ({:.2}, {:.2}, {:.2})  yaw {:.1}  pitch {:.1}",
                    position.x, position.y, position.z,
                    dir.x, dir.y, dir.z,
                    camera.yaw(), camera.pitch(),
                );
            }
        }

        if let Some(key) = phase.key {
            controller.process_keyboard(key, ElementState::Released);
        }
        if index == SCRIPT.len() - 1 {
            controller.process_keyboard(KeyCode::ShiftLeft, ElementState::Released);
        }
    }

    // The uniforms a render layer would consume every frame
    let view = camera.view_matrix();
    let projection = mat4::perspective(
        app_config.camera.fov.to_radians(),
        16.0 / 9.0,
        app_config.camera.near,
        app_config.camera.far,
    );
    log::info!("Final view matrix: {:?}", view);
    log::debug!("Projection matrix: {:?}", projection);

    log::info!(
        "Walkthrough finished at ({:.2}, {:.2}, {:.2})",
        camera.position().x, camera.position().y, camera.position().z,
    );
}
