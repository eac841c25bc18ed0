use std::fmt::Write;

use tracing::warn;

use crate::carousel::{Carousel, ImageRef};
use crate::content::GallerySpec;
use crate::render::html::escape;
use crate::resolve::ImageResolver;

/// A captioned image, or an inline diagnostic when the image cannot be resolved.
pub fn image(resolver: &dyn ImageResolver, image: &ImageRef, caption: &str) -> String {
    match resolver.resolve(image) {
        Ok(_) => format!(
            r#"<figure><img src="{src}" alt="{alt}"><figcaption>{alt}</figcaption></figure>"#,
            src = escape(&resolver.href(image)),
            alt = escape(caption),
        ),
        Err(e) => {
            warn!(image = %image, "{}", e.reason);
            format!(
                r#"<div class="image-error">Error loading image {}: {}</div>"#,
                escape(image.as_str()),
                escape(&e.reason)
            )
        }
    }
}

/// Every slide of a gallery with only the carousel's current image visible,
/// followed by the pagination indicator and Previous / Next controls.
pub fn carousel(resolver: &dyn ImageResolver, gallery: &GallerySpec, state: &Carousel) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<div class="carousel" id="carousel-{id}" data-index="{cursor}" data-len="{len}"><p class="carousel-title">{title}</p>"#,
        id = escape(&gallery.id),
        cursor = state.cursor(),
        len = state.len(),
        title = escape(&gallery.title),
    );
    for (i, img) in state.images().iter().enumerate() {
        let hidden = if i == state.cursor() { "" } else { " hidden" };
        let _ = write!(out, r#"<div class="slide" data-slide="{i}"{hidden}>{}</div>"#, image(resolver, img, img.caption()));
    }
    let _ = write!(
        out,
        r#"<div class="carousel-controls"><button type="button" class="carousel-button" data-step="-1">Previous</button><span class="carousel-position">{}</span><button type="button" class="carousel-button" data-step="1">Next</button></div></div>"#,
        state.position()
    );
    out
}

/// YouTube links become an embedded player, anything else a plain `<video>`.
pub fn video(url: &str) -> String {
    match youtube_embed_url(url) {
        Some(embed) => format!(
            r#"<div class="video"><iframe src="{}" width="100%" height="400" frameborder="0" allowfullscreen></iframe></div>"#,
            escape(&embed)
        ),
        None => format!(r#"<div class="video"><video src="{}" controls width="100%"></video></div>"#, escape(url)),
    }
}

fn youtube_embed_url(url: &str) -> Option<String> {
    let rest = url.strip_prefix("https://").or_else(|| url.strip_prefix("http://"))?;
    let rest = rest.strip_prefix("www.").unwrap_or(rest);

    let id = if let Some(path) = rest.strip_prefix("youtu.be/") {
        path.split(['?', '&', '#']).next()?
    } else if let Some(query) = rest.strip_prefix("youtube.com/watch?") {
        query.split('&').find_map(|kv| kv.strip_prefix("v="))?
    } else if let Some(path) = rest.strip_prefix("youtube.com/embed/") {
        path.split(['?', '#']).next()?
    } else {
        return None;
    };

    if id.is_empty() {
        return None;
    }
    Some(format!("https://www.youtube.com/embed/{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotFoundError;
    use crate::resolve::ResolvedImage;
    use std::path::PathBuf;

    /// Resolves only the listed references.
    struct Only(Vec<&'static str>);

    impl ImageResolver for Only {
        fn resolve(&self, image: &ImageRef) -> Result<ResolvedImage, NotFoundError> {
            if self.0.iter().any(|r| *r == image.as_str()) {
                Ok(ResolvedImage {
                    path: PathBuf::from(image.as_str()),
                    bytes: Vec::new(),
                    orientation: 1,
                })
            } else {
                Err(NotFoundError::new(image, "no file"))
            }
        }
    }

    fn svm_gallery() -> GallerySpec {
        GallerySpec {
            id: "svm".into(),
            title: "SVM Visualizations".into(),
            images: vec!["svm_images/svm_roc.png".into(), "svm_images/svm_confusion_matrix.png".into()],
        }
    }

    #[test]
    fn missing_image_becomes_inline_error() {
        let html = image(&Only(vec![]), &"cnn_images/grad_cam1.png".into(), "GradCam Example 1");
        assert!(html.starts_with(r#"<div class="image-error">"#));
        assert!(html.contains("cnn_images/grad_cam1.png"));
    }

    #[test]
    fn carousel_shows_only_current_slide() {
        let gallery = svm_gallery();
        let mut state = Carousel::new(gallery.id.clone(), gallery.images.clone()).unwrap();
        state.advance();
        let html = carousel(&Only(vec!["svm_images/svm_roc.png", "svm_images/svm_confusion_matrix.png"]), &gallery, &state);
        assert!(html.contains(r#"data-index="1""#));
        assert!(html.contains(r#"<div class="slide" data-slide="0" hidden>"#));
        assert!(html.contains(r#"<div class="slide" data-slide="1"><figure><img src="svm_images/svm_confusion_matrix.png""#));
        assert!(html.contains("<figcaption>svm_confusion_matrix.png</figcaption>"));
        assert!(html.contains(r#"<span class="carousel-position">2 / 2</span>"#));
    }

    #[test]
    fn carousel_controls_survive_missing_images() {
        let gallery = svm_gallery();
        let state = Carousel::new(gallery.id.clone(), gallery.images.clone()).unwrap();
        let html = carousel(&Only(vec![]), &gallery, &state);
        assert_eq!(html.matches(r#"class="image-error""#).count(), 2);
        assert!(html.contains(r#"data-step="-1">Previous</button>"#));
        assert!(html.contains(r#"data-step="1">Next</button>"#));
        assert!(html.contains("1 / 2"));
    }

    #[test]
    fn youtube_links_are_embedded() {
        assert_eq!(youtube_embed_url("https://youtu.be/5lw-qKBNyoA").as_deref(), Some("https://www.youtube.com/embed/5lw-qKBNyoA"));
        assert_eq!(
            youtube_embed_url("https://www.youtube.com/watch?feature=share&v=5lw-qKBNyoA").as_deref(),
            Some("https://www.youtube.com/embed/5lw-qKBNyoA")
        );
        assert_eq!(youtube_embed_url("https://example.com/clip.mp4"), None);
        assert!(video("https://example.com/clip.mp4").contains("<video src=\"https://example.com/clip.mp4\""));
    }
}
