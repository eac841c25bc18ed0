//! Typed page content.
//!
//! The whole page is data: roster, sections made of blocks, and the galleries
//! the carousel blocks point at. One template renders any `PageContent`.

pub mod metrics;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::carousel::ImageRef;
use crate::error::ConfigurationError;

pub use metrics::{MetricsTable, ScoreRun};

const BUILT_IN_REPORT: &str = include_str!("../../demos/report.toml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GallerySpec {
    pub id: String,
    pub title: String,
    pub images: Vec<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub image: ImageRef,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub member: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Markdown { text: String },
    Metrics(MetricsTable),
    Scores { title: String, runs: Vec<ScoreRun> },
    Figure(Figure),
    Gallery { id: String },
    Video(Video),
    Contributions { rows: Vec<Contribution> },
    References { entries: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub anchor: String,
    /// 1 for page-level titles, 2 for sections, 3 for subsections.
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

fn default_level() -> u8 {
    2
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub title: String,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub galleries: Vec<GallerySpec>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl PageContent {
    /// Parses and validates TOML content.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigurationError> {
        let content: PageContent = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigurationError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_toml_str(&source)?;
        info!(
            path = %path.display(),
            sections = content.sections.len(),
            galleries = content.galleries.len(),
            "loaded page content"
        );
        Ok(content)
    }

    /// The project report shipped with the binary.
    pub fn default_report() -> Result<Self, ConfigurationError> {
        Self::from_toml_str(BUILT_IN_REPORT)
    }

    pub fn gallery(&self, id: &str) -> Option<&GallerySpec> {
        self.galleries.iter().find(|g| g.id == id)
    }

    /// Replaces the URL of every video block.
    pub fn override_video_url(&mut self, url: &str) {
        for section in &mut self.sections {
            for block in &mut section.blocks {
                if let Block::Video(video) = block {
                    video.url = url.to_string();
                }
            }
        }
    }

    /// Every image the page refers to, figures first in page order, then galleries.
    pub fn image_refs(&self) -> Vec<&ImageRef> {
        let figures = self
            .sections
            .iter()
            .flat_map(|s| s.blocks.iter())
            .filter_map(|b| match b {
                Block::Figure(f) => Some(&f.image),
                _ => None,
            });
        let galleries = self.galleries.iter().flat_map(|g| g.images.iter());
        figures.chain(galleries).collect()
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.title.trim().is_empty() {
            return Err(ConfigurationError::EmptyName("page title"));
        }
        if self.members.iter().any(|m| m.name.trim().is_empty()) {
            return Err(ConfigurationError::EmptyName("member name"));
        }

        let mut gallery_ids = HashSet::new();
        for gallery in &self.galleries {
            if gallery.id.trim().is_empty() {
                return Err(ConfigurationError::EmptyName("gallery id"));
            }
            if !gallery_ids.insert(gallery.id.as_str()) {
                return Err(ConfigurationError::DuplicateGallery(gallery.id.clone()));
            }
            if gallery.images.is_empty() {
                return Err(ConfigurationError::EmptyGallery {
                    gallery: gallery.id.clone(),
                });
            }
        }

        let roster: HashSet<&str> = self.members.iter().map(|m| m.name.as_str()).collect();
        let mut anchors = HashSet::new();
        let mut shown_galleries = HashSet::new();
        for section in &self.sections {
            if section.anchor.trim().is_empty() {
                return Err(ConfigurationError::EmptyName("section anchor"));
            }
            if !anchors.insert(section.anchor.as_str()) {
                return Err(ConfigurationError::DuplicateAnchor(section.anchor.clone()));
            }
            for block in &section.blocks {
                match block {
                    Block::Metrics(table) => table.validate()?,
                    Block::Scores { title, runs } => MetricsTable::from_runs(title.as_str(), runs).validate()?,
                    Block::Gallery { id } => {
                        if !gallery_ids.contains(id.as_str()) {
                            return Err(ConfigurationError::UnknownGallery(id.clone()));
                        }
                        if !shown_galleries.insert(id.as_str()) {
                            return Err(ConfigurationError::GalleryShownTwice(id.clone()));
                        }
                    }
                    Block::Contributions { rows } => {
                        if let Some(row) = rows.iter().find(|r| !roster.contains(r.member.as_str())) {
                            return Err(ConfigurationError::UnknownMember {
                                table: section.title.clone(),
                                member: row.member.clone(),
                            });
                        }
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}
