use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use constants::camera_controls::{
    DAMPING_FACTOR, LINE_SCROLL_FACTOR, MAX_DISTANCE, MAX_POLAR_ANGLE, MIN_DISTANCE,
    PAN_SENSITIVITY, PITCH_SENSITIVITY, PIXEL_SCROLL_FACTOR, YAW_SENSITIVITY,
};
use constants::scene_layout::{CAMERA_LOOK_TARGET, CAMERA_START_POSITION};

/// Keeps the polar angle off the exact pole where yaw degenerates.
const POLAR_EPSILON: f32 = 0.01;

/// Orbit camera state and limits.
///
/// The camera sits on a sphere around `target`: `yaw` is the azimuth and
/// `polar_angle` is measured from the +Y axis, so `polar_angle == PI / 2`
/// puts the camera level with the target. Defaults are permissive; the
/// product-viewer feel comes from [`configure_controls`].
#[derive(Resource)]
pub struct OrbitControls {
    pub target: Vec3,
    pub yaw: f32,
    pub polar_angle: f32,
    pub distance: f32,

    pub enable_damping: bool,
    pub damping_factor: f32,
    pub screen_space_panning: bool,
    pub max_polar_angle: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: CAMERA_LOOK_TARGET,
            yaw: 0.0,
            polar_angle: std::f32::consts::FRAC_PI_2,
            distance: CAMERA_START_POSITION.length(),
            enable_damping: false,
            damping_factor: 0.05,
            screen_space_panning: true,
            max_polar_angle: std::f32::consts::PI,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
        }
    }
}

impl OrbitControls {
    /// Derive orbit state from an existing camera transform.
    pub fn from_camera_transform(transform: &Transform, target: Vec3) -> Self {
        let offset = transform.translation - target;
        let distance = offset.length().max(f32::EPSILON);
        Self {
            target,
            yaw: offset.x.atan2(offset.z),
            polar_angle: (offset.y / distance).clamp(-1.0, 1.0).acos(),
            distance,
            ..Self::default()
        }
    }

    /// Where the camera belongs for the current orbit state.
    pub fn camera_position(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar_angle.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        self.target
            + self.distance * Vec3::new(sin_polar * sin_yaw, cos_polar, sin_polar * cos_yaw)
    }

    /// Rotate around the target, clamping the polar angle to its limits.
    pub fn apply_orbit(&mut self, delta: Vec2) {
        self.yaw -= delta.x * YAW_SENSITIVITY;
        self.polar_angle = (self.polar_angle - delta.y * PITCH_SENSITIVITY)
            .clamp(POLAR_EPSILON, self.max_polar_angle);
    }

    /// Dolly towards or away from the target, clamped to the zoom limits.
    pub fn apply_dolly(&mut self, amount: f32) {
        let dolly_speed = (self.distance * 0.2).max(0.05);
        self.distance =
            (self.distance - amount * dolly_speed).clamp(self.min_distance, self.max_distance);
    }

    /// Move the orbit target sideways.
    ///
    /// With screen-space panning the target follows the camera's up axis;
    /// otherwise vertical drag slides the target within the ground plane so
    /// the table never drifts below the horizon.
    pub fn apply_pan(&mut self, delta: Vec2) {
        let orientation = Quat::from_euler(
            EulerRot::YXZ,
            self.yaw,
            self.polar_angle - std::f32::consts::FRAC_PI_2,
            0.0,
        );
        let right = orientation * Vec3::X;
        let up = if self.screen_space_panning {
            orientation * Vec3::Y
        } else {
            Vec3::Y.cross(right)
        };

        let pan_speed = self.distance * PAN_SENSITIVITY;
        self.target += (-delta.x * right + delta.y * up) * pan_speed;
    }
}

/// Fixed control feel for the product viewer: damped motion, no screen-space
/// panning, camera never below the table, zoom clamped around it.
pub fn configure_controls(controls: &mut OrbitControls) {
    controls.enable_damping = true;
    controls.damping_factor = DAMPING_FACTOR;
    controls.screen_space_panning = false;
    controls.max_polar_angle = MAX_POLAR_ANGLE;
    controls.min_distance = MIN_DISTANCE;
    controls.max_distance = MAX_DISTANCE;
}

/// Spawn the viewport camera and install the configured orbit controls.
pub fn spawn_viewport_camera(commands: &mut Commands) {
    let transform =
        Transform::from_translation(CAMERA_START_POSITION).looking_at(CAMERA_LOOK_TARGET, Vec3::Y);

    let mut controls = OrbitControls::from_camera_transform(&transform, CAMERA_LOOK_TARGET);
    configure_controls(&mut controls);

    commands.spawn((Camera3d::default(), transform));
    commands.insert_resource(controls);
}

/// Apply mouse input to the orbit state and move the camera towards it.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut controls: ResMut<OrbitControls>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    if mouse_delta != Vec2::ZERO {
        if mouse_button.pressed(MouseButton::Left) {
            controls.apply_orbit(mouse_delta);
        } else if mouse_button.pressed(MouseButton::Right) {
            controls.apply_pan(mouse_delta);
        }
    }

    // Wheel scroll accumulation (line and pixel scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * LINE_SCROLL_FACTOR,
            MouseScrollUnit::Pixel => ev.y * PIXEL_SCROLL_FACTOR,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        controls.apply_dolly(scroll_accum);
    }

    let target_pos = controls.camera_position();
    let target_rot = Transform::from_translation(target_pos)
        .looking_at(controls.target, Vec3::Y)
        .rotation;

    if controls.enable_damping {
        let lerp_t = (controls.damping_factor * time.delta_secs() * 60.0).min(1.0);
        camera_transform.translation = camera_transform.translation.lerp(target_pos, lerp_t);
        camera_transform.rotation = camera_transform.rotation.slerp(target_rot, lerp_t);
    } else {
        camera_transform.translation = target_pos;
        camera_transform.rotation = target_rot;
    }
}
