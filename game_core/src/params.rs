/// Default gameplay parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 480.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 5.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_INSET: f32 = 100.0; // Distance from side line to paddle edge

    // Ball
    pub const BALL_RADIUS: f32 = 5.0;

    // Shared by paddles and ball, units per frame
    pub const BASE_SPEED: f32 = 2.0;

    // Paddle contact: x is reflected and scaled, y is only scaled
    pub const TURN_FACTOR: f32 = 1.1;

    // Horizontal sampling step of the collision scan
    pub const SCAN_STEP: f32 = 1.0;
}
