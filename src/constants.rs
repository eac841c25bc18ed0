use raylib::prelude::Color;

pub const WINDOW_WIDTH: i32 = 1280;           // Initial viewer window width
pub const WINDOW_HEIGHT: i32 = 800;           // Initial viewer window height
pub const FPS: u32 = 60;                      // Frames per second

pub const MARGIN: i32 = 24;                   // Space around the image area (pixels)
pub const TITLE_SIZE: i32 = 32;               // Gallery title font size
pub const TEXT_SIZE: i32 = 20;                // Caption, indicator and footer font size
pub const HEADER_HEIGHT: i32 = 72;            // Title band above the image
pub const FOOTER_HEIGHT: i32 = 96;            // Caption, indicator and gallery list below the image
pub const IMAGE_FILL: f32 = 0.9;              // Largest share of the image area an image may cover

pub const BACKGROUND: Color = Color::new(245, 247, 250, 255);
pub const ACCENT: Color = Color::new(43, 108, 176, 255);
pub const TEXT: Color = Color::new(45, 55, 72, 255);
pub const MUTED: Color = Color::new(160, 174, 192, 255);
pub const ERROR: Color = Color::new(155, 44, 44, 255);
