use glam::Vec3;

// Scene tunables shared by the pure core and the web front-end.

// Interaction timeline
pub const HOLD_DURATION_SEC: f32 = 3.0; // press-and-hold time before dismissal
pub const SHAKE_INTENSITY_MAX: f32 = 0.05; // jitter amplitude reached at the end of the hold
pub const FILL_REVERSE_SEC: f32 = 0.2; // fill bar rewind after an early release
pub const DISMISS_FADE_SEC: f32 = 0.5; // every cascade tween runs this long
pub const DISMISS_SCALE: f32 = 1.2; // mascot grows to this while fading out

// Wave rings (pixel sizes are CSS px)
pub const WAVE_PERIOD_SEC: f32 = 1.5;
pub const WAVE_ALPHA_PEAK: f32 = 0.4;
pub const WAVE_ALPHA_LEG_SEC: f32 = 1.5;
pub const WAVE_ALPHA_REPEATS: u32 = 2;
pub const WAVE_GROW_SEC: f32 = 3.0;
pub const WAVE_SIZE_START_PX: f32 = 100.0;
pub const WAVE_SIZE_END_PX: f32 = 200.0;
pub const WAVE_THICKNESS_START_PX: f32 = 6.0;
pub const WAVE_THICKNESS_END_PX: f32 = 0.0;
pub const WAVE_LINK_OFFSET_Y_PX: f32 = -30.0;

// Label
pub const LABEL_TEXT: &str = "PRESS AND HOLD";
pub const LABEL_WIDTH_PX: f32 = 220.0;
pub const LABEL_HEIGHT_PX: f32 = 35.0;
pub const LABEL_CORNER_RADIUS_PX: f32 = 20.0;
pub const LABEL_LINK_OFFSET_Y_PX: f32 = -150.0;
pub const ACCENT_COLOR: &str = "#FFD800";

// Ray flares (world units)
pub const FLARE_OFFSET_Y: f32 = 0.2;
pub const FLARE_Z: f32 = 0.5;
pub const FLARE_LARGE: f32 = 1.5;
pub const FLARE_SMALL: f32 = 0.5;
pub const FLARE_LEG_SEC: f32 = 2.0;
pub const FLARE_SECOND_ANGLE: f32 = 0.5;

// Particles
pub const PARTICLE_EMIT_RATE: f32 = 100.0; // particles per real second
pub const PARTICLE_CAPACITY: usize = 500;
pub const PARTICLE_EMIT_POWER: f32 = 0.2;
pub const PARTICLE_LIFETIME: f32 = 0.4; // in simulation time units
pub const PARTICLE_SIZE: f32 = 0.02;
pub const PARTICLE_UPDATE_SPEED: f32 = 0.005; // simulation units per reference frame
pub const PARTICLE_REFERENCE_FPS: f32 = 60.0;
pub const PARTICLE_DIRECTION_1: Vec3 = Vec3::new(-1.0, 4.0, 1.0);
pub const PARTICLE_DIRECTION_2: Vec3 = Vec3::new(1.0, 4.0, -1.0);
pub const PARTICLE_COLOR_START: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const PARTICLE_COLOR_DEAD: [f32; 4] = [0.2, 0.2, 0.0, 0.0];
pub const PARTICLE_NOISE_STRENGTH: Vec3 = Vec3::new(5.0, 10.0, 5.0);
pub const NOISE_OCTAVES: u32 = 5;
pub const NOISE_PERSISTENCE: f32 = 2.0;
pub const NOISE_BRIGHTNESS: f32 = 0.5;
pub const NOISE_ANIMATION_SPEED: f32 = 5.0;

// Mascot pivot rest pose
pub const PIVOT_PITCH: f32 = 0.0;
pub const PIVOT_YAW: f32 = std::f32::consts::PI / 1.3;
pub const PIVOT_ROLL: f32 = -0.2;
pub const DEFAULT_ROTATION_SPEED: f32 = 0.01; // radians per frame

// Camera (left-handed, looking down +Z)
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.6, -8.0);
pub const CAMERA_FOV_Y: f32 = 0.8;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Lighting
pub const LIGHT_DIRECTION: Vec3 = Vec3::new(0.5, -1.0, 2.0);
pub const LIGHT_INTENSITY: f32 = 15.0;

// Spatial audio
pub const LISTENER_RAY_DISTANCE: f32 = 30.0;
pub const LISTENER_Z: f32 = -3.0;
pub const SOUND_ROLLOFF: f64 = 1.0;
