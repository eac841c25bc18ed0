//! Interactive window: one gallery on screen at a time, every gallery with its own cursor.

pub mod state;
pub mod texture_loader;

use std::collections::HashMap;

use anyhow::{Result, bail};
use raylib::prelude::*;
use tracing::{info, warn};

use crate::carousel::ImageRef;
use crate::constants::*;
use crate::content::PageContent;
use crate::resolve::ImageResolver;
use crate::session::Session;
use crate::viewer::state::{ViewerState, key_command};
use crate::viewer::texture_loader::load_texture;

type TextureCache = HashMap<ImageRef, Result<Texture2D, String>>;

pub fn run(content: &PageContent, session: Session, resolver: &dyn ImageResolver) -> Result<()> {
    if session.is_empty() {
        bail!("page `{}` has no galleries to view", content.title);
    }
    let titles: Vec<String> = session
        .gallery_ids()
        .map(|id| content.gallery(id).map_or_else(|| id.to_string(), |g| g.title.clone()))
        .collect();
    let mut state = ViewerState::new(session);

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title(&content.title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    info!(galleries = titles.len(), "viewer started");

    let mut textures: TextureCache = HashMap::new();

    // --- Main Loop ---
    while !rl.window_should_close() {
        while let Some(key) = rl.get_key_pressed() {
            if let Some(command) = key_command(key) {
                state.handle(command);
            }
        }

        let Some(carousel) = state.session.carousel_at(state.focus()) else {
            break;
        };
        let current = carousel.current().clone();
        if !textures.contains_key(&current) {
            let loaded = resolver
                .resolve(&current)
                .and_then(|resolved| load_texture(&mut rl, &thread, &current, &resolved))
                .map_err(|e| {
                    warn!(image = %current, "{}", e.reason);
                    e.to_string()
                });
            textures.insert(current.clone(), loaded);
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(BACKGROUND);
        draw_frame(&mut d, &state, &titles, &textures);
    }

    info!("viewer closed");
    Ok(())
}

fn draw_frame(d: &mut RaylibDrawHandle, state: &ViewerState, titles: &[String], textures: &TextureCache) {
    let Some(carousel) = state.session.carousel_at(state.focus()) else {
        return;
    };
    let screen_width = d.get_screen_width();
    let screen_height = d.get_screen_height();
    let current = carousel.current();

    d.draw_text(&titles[state.focus()], MARGIN, MARGIN, TITLE_SIZE, ACCENT);

    let area = Rectangle::new(
        MARGIN as f32,
        HEADER_HEIGHT as f32,
        (screen_width - 2 * MARGIN) as f32,
        (screen_height - HEADER_HEIGHT - FOOTER_HEIGHT) as f32,
    );
    match textures.get(current) {
        Some(Ok(texture)) => draw_fitted(d, texture, area),
        Some(Err(message)) => d.draw_text(message, area.x as i32, (area.y + area.height / 2.0) as i32, TEXT_SIZE, ERROR),
        None => {}
    }

    // --- Caption and Pagination ---
    let caption_y = screen_height - FOOTER_HEIGHT + 8;
    d.draw_text(current.caption(), MARGIN, caption_y, TEXT_SIZE, TEXT);
    d.draw_text(&format!("< {} >", carousel.position()), screen_width - MARGIN - 120, caption_y, TEXT_SIZE, ACCENT);

    // --- Every Gallery With Its Own Cursor ---
    let mut x = MARGIN;
    let list_y = caption_y + TEXT_SIZE + 16;
    for i in 0..state.session.len() {
        let Some(other) = state.session.carousel_at(i) else {
            continue;
        };
        let label = format!("{} {}", other.name(), other.position());
        let color = if i == state.focus() { ACCENT } else { MUTED };
        d.draw_text(&label, x, list_y, TEXT_SIZE, color);
        x += (label.len() as i32 + 4) * TEXT_SIZE / 2;
    }
    d.draw_text("Left/Right: previous/next   Tab/Up/Down: switch gallery", x + MARGIN, list_y, TEXT_SIZE / 2 + 4, MUTED);
}

fn draw_fitted(d: &mut RaylibDrawHandle, texture: &Texture2D, area: Rectangle) {
    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;
    let scale = fit_scale(tex_width, tex_height, area.width, area.height);
    let scaled_width = tex_width * scale;
    let scaled_height = tex_height * scale;

    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, tex_width, tex_height),
        Rectangle::new(
            area.x + (area.width - scaled_width) / 2.0,
            area.y + (area.height - scaled_height) / 2.0,
            scaled_width,
            scaled_height,
        ),
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}

/// Scale that keeps the image inside `IMAGE_FILL` of the area. Never enlarges.
fn fit_scale(width: f32, height: f32, area_width: f32, area_height: f32) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        return 1.0;
    }
    let fit = (area_width * IMAGE_FILL / width).min(area_height * IMAGE_FILL / height);
    fit.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_images_keep_their_size() {
        assert_eq!(fit_scale(200.0, 100.0, 1000.0, 800.0), 1.0);
    }

    #[test]
    fn large_images_shrink_to_the_tighter_side() {
        let scale = fit_scale(2000.0, 1000.0, 1000.0, 800.0);
        assert!((scale - 0.45).abs() < 1e-6);
        let scale = fit_scale(1000.0, 4000.0, 1000.0, 800.0);
        assert!((scale - 0.18).abs() < 1e-6);
    }
}
