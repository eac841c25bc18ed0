use raylib::prelude::*;
use tracing::debug;

use crate::carousel::ImageRef;
use crate::error::NotFoundError;
use crate::resolve::ResolvedImage;

// --- Decode Resolved Bytes, Apply EXIF Rotation, Create Texture ---
pub fn load_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_ref: &ImageRef,
    resolved: &ResolvedImage,
) -> Result<Texture2D, NotFoundError> {
    let mut image = Image::load_image_from_mem(&resolved.file_type(), &resolved.bytes)
        .map_err(|e| NotFoundError::new(image_ref, format!("failed to decode: {e}")))?;

    // 1 = upright, 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Mirrored orientations are drawn as stored.
    match resolved.orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    debug!(image = %image_ref, orientation = resolved.orientation, "decoded image");

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| NotFoundError::new(image_ref, format!("failed to create texture: {e}")))
}
