use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use tracing::{debug, warn};

use crate::carousel::ImageRef;
use crate::error::NotFoundError;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Looks up the bytes behind an image reference.
pub trait ImageResolver {
    fn resolve(&self, image: &ImageRef) -> Result<ResolvedImage, NotFoundError>;

    /// Link target for the image as seen from the rendered page.
    fn href(&self, image: &ImageRef) -> String {
        image.as_str().to_string()
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedImage {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    /// EXIF orientation tag, 1 when absent or unreadable.
    pub orientation: u16,
}

impl ResolvedImage {
    /// Lower-case extension with a leading dot, as raylib expects for in-memory loads.
    pub fn file_type(&self) -> String {
        format!(".{}", extension(&self.path))
    }
}

/// Resolves references relative to an asset directory.
#[derive(Debug, Clone)]
pub struct FsResolver {
    root: PathBuf,
    /// Prepended to references in `href`; empty when the page sits in `root`.
    link_prefix: String,
}

impl FsResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            link_prefix: String::new(),
        }
    }

    /// Makes `href` relative to `page_dir`, the directory the page is written to.
    /// Both directories must exist.
    pub fn linked_from(mut self, page_dir: &Path) -> io::Result<Self> {
        let root = fs::canonicalize(&self.root)?;
        let page_dir = fs::canonicalize(page_dir)?;
        self.link_prefix = relative_prefix(&page_dir, &root);
        debug!(prefix = %self.link_prefix, "image links relative to page");
        Ok(self)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, image: &ImageRef) -> PathBuf {
        self.root.join(image.as_str())
    }
}

impl ImageResolver for FsResolver {
    fn resolve(&self, image: &ImageRef) -> Result<ResolvedImage, NotFoundError> {
        let path = self.path_of(image);
        if !path.is_file() {
            return Err(NotFoundError::new(image, format!("no file at {}", path.display())));
        }
        let ext = extension(&path);
        if !IMAGE_EXTENSIONS.iter().any(|e| *e == ext) {
            return Err(NotFoundError::new(image, format!("unsupported image type `{ext}`")));
        }
        let bytes = fs::read(&path).map_err(|e| NotFoundError::new(image, format!("failed to read {}: {e}", path.display())))?;

        let orientation = if ext == "jpg" || ext == "jpeg" {
            read_orientation(&bytes, &path)
        } else {
            1
        };
        debug!(image = %image, orientation, size = bytes.len(), "resolved image");

        Ok(ResolvedImage {
            path,
            bytes,
            orientation,
        })
    }

    fn href(&self, image: &ImageRef) -> String {
        format!("{}{}", self.link_prefix, image.as_str())
    }
}

/// `"../"` for each level `from` sits below the common ancestor, then the path down to `to`.
fn relative_prefix(from: &Path, to: &Path) -> String {
    let mut prefix = String::new();
    let mut base = from;
    loop {
        if let Ok(rest) = to.strip_prefix(base) {
            for part in rest.components() {
                prefix.push_str(&part.as_os_str().to_string_lossy());
                prefix.push('/');
            }
            return prefix;
        }
        match base.parent() {
            Some(parent) => {
                prefix.push_str("../");
                base = parent;
            }
            // No shared ancestor (different drives): link absolutely.
            None => return format!("{}/", to.display()),
        }
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// Only the primary image's orientation is honoured; flips (2, 4, 5, 7) are treated as upright later.
fn read_orientation(bytes: &[u8], path: &Path) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!(path = %path.display(), "could not read EXIF data: {e}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = FsResolver::new(dir.path());
        let err = resolver.resolve(&ImageRef::from("cnn_images/absent.png")).unwrap_err();
        assert_eq!(err.image.as_str(), "cnn_images/absent.png");
        assert!(err.reason.contains("no file"));
    }

    #[test]
    fn existing_png_resolves_with_upright_orientation() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("svm_images")).unwrap();
        fs::write(dir.path().join("svm_images/svm_roc.png"), b"not really a png").unwrap();

        let resolved = FsResolver::new(dir.path())
            .resolve(&ImageRef::from("svm_images/svm_roc.png"))
            .unwrap();
        assert_eq!(resolved.orientation, 1);
        assert_eq!(resolved.bytes, b"not really a png");
        assert_eq!(resolved.file_type(), ".png");
    }

    #[test]
    fn jpeg_without_exif_falls_back_to_upright() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("scan.JPG"), [0xFF, 0xD8, 0xFF, 0xD9]).unwrap();
        let resolved = FsResolver::new(dir.path()).resolve(&ImageRef::from("scan.JPG")).unwrap();
        assert_eq!(resolved.orientation, 1);
        assert_eq!(resolved.file_type(), ".jpg");
    }

    #[test]
    fn links_follow_the_page_directory() {
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join("assets");
        let site = dir.path().join("site");
        fs::create_dir_all(assets.join("pages")).unwrap();
        fs::create_dir(&site).unwrap();
        let img = ImageRef::from("cnn_images/grad_cam1.png");

        assert_eq!(FsResolver::new(&assets).href(&img), "cnn_images/grad_cam1.png");
        let beside = FsResolver::new(&assets).linked_from(&assets).unwrap();
        assert_eq!(beside.href(&img), "cnn_images/grad_cam1.png");
        let below = FsResolver::new(&assets).linked_from(&assets.join("pages")).unwrap();
        assert_eq!(below.href(&img), "../cnn_images/grad_cam1.png");
        let sibling = FsResolver::new(&assets).linked_from(&site).unwrap();
        assert_eq!(sibling.href(&img), "../assets/cnn_images/grad_cam1.png");
        let above = FsResolver::new(&assets).linked_from(dir.path()).unwrap();
        assert_eq!(above.href(&img), "assets/cnn_images/grad_cam1.png");
    }

    #[test]
    fn linking_from_a_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FsResolver::new(dir.path()).linked_from(&dir.path().join("absent")).is_err());
    }

    #[test]
    fn non_image_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
        let err = FsResolver::new(dir.path()).resolve(&ImageRef::from("notes.txt")).unwrap_err();
        assert!(err.reason.contains("unsupported"));
    }
}
