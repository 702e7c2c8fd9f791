// Shared tuning defaults for the ambient effects and marquees.

// Brand accent used by the particle field
pub const BRAND_RGB: [u8; 3] = [237, 121, 34];

// Particle field
pub const PARTICLE_COUNT: usize = 70;
pub const PARTICLE_SPEED_MAX: f32 = 0.15; // px per frame, each axis, symmetric
pub const PARTICLE_RADIUS_MIN: f32 = 0.4;
pub const PARTICLE_RADIUS_MAX: f32 = 2.0;
pub const PARTICLE_OPACITY_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_MAX: f32 = 0.7;

// Ambient dust
pub const DUST_COUNT: usize = 42;
pub const DUST_SMALL_SIZE: f32 = 2.0;
pub const DUST_LARGE_SIZE: f32 = 3.0;
pub const DUST_SMALL_CHANCE: f32 = 0.85;
pub const DUST_WHITE_CHANCE: f32 = 0.6;
pub const DUST_WHITE_RGB: [u8; 3] = [255, 255, 255];
pub const DUST_WHITE_ALPHA: f32 = 0.30;
pub const DUST_AMBER_RGB: [u8; 3] = [252, 211, 77];
pub const DUST_AMBER_ALPHA: f32 = 0.25;
pub const DUST_REST_OPACITY: f32 = 0.08;
pub const DUST_REST_BLUR: f32 = 1.5; // px, softening while faded out
pub const DUST_DRIFT_MAX: f32 = 40.0; // px, each axis
pub const DUST_PEAK_OPACITY_MIN: f32 = 0.15;
pub const DUST_PEAK_OPACITY_MAX: f32 = 0.45;
pub const DUST_DURATION_MIN_SEC: f32 = 8.0;
pub const DUST_DURATION_MAX_SEC: f32 = 16.0;
pub const DUST_DELAY_MAX_SEC: f32 = 8.0;

// Marquee
pub const MARQUEE_MIN_LOOP_WIDTH: f32 = 50.0; // below this the layout has not settled
pub const MARQUEE_LEFTWARD_ROW_SEC: f64 = 40.0;
pub const MARQUEE_RIGHTWARD_ROW_SEC: f64 = 45.0;
pub const MEASURE_SETTLE_FRAMES: u32 = 2;
pub const MEASURE_RETRY_FRAMES: u32 = 60;
