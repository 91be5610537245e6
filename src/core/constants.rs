// Shared visual tuning constants for the portfolio page.

// Cursor overlay sizing (CSS px)
pub const CURSOR_SIZE: i32 = 32; // base circle diameter
pub const CURSOR_HOVER_SCALE: f32 = 3.0; // circle scale while hovering an image
pub const PREVIEW_SIZE: i32 = 96; // preview image diameter

// Cursor transition timings (seconds)
pub const CURSOR_SCALE_SEC: f32 = 0.3;
pub const PREVIEW_FADE_SEC: f32 = 0.3;
pub const PLACEHOLDER_FADE_SEC: f32 = 0.5;

// Progress bar spring
pub const SPRING_STIFFNESS: f32 = 100.0;
pub const SPRING_DAMPING: f32 = 30.0;
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_REST_DELTA: f32 = 0.001;
pub const SPRING_REST_SPEED: f32 = 0.01;
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const SPRING_MAX_FRAME_SEC: f32 = 0.1; // longer gaps (hidden tab) are clamped

// Scroll-linked background
pub const BG_SATURATION_PCT: u8 = 100;
pub const BG_LIGHTNESS_PCT: u8 = 98;

// Scroll-linked element effects: (input, output) stops
pub const ITEM_OFFSET_STOPS: [(f32, f32); 2] = [(0.0, 100.0), (1.0, -100.0)];
pub const FADE_STOPS: [(f32, f32); 4] = [(0.0, 0.0), (0.2, 1.0), (0.8, 1.0), (1.0, 0.0)];
pub const DETAIL_SCALE_STOPS: [(f32, f32); 2] = [(0.0, 0.8), (1.0, 1.0)];

// Page copy
pub const ARTIST_NAME: &str = "Max Pirrit";
pub const SOCIAL_URL: &str = "https://www.instagram.com/mxx.pr/";
pub const PLACEHOLDER_TEXT: &str = "Select a project to view details";
