use tracing::warn;

use crate::carousel::{Carousel, ImageRef};
use crate::content::PageContent;
use crate::error::ConfigurationError;

/// A navigation request coming from the viewer or the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Advance(String),
    Retreat(String),
}

/// Carousel state of one page view: one controller per gallery, in page order.
#[derive(Debug, Clone)]
pub struct Session {
    carousels: Vec<(String, Carousel)>,
}

impl Session {
    pub fn from_content(content: &PageContent) -> Result<Self, ConfigurationError> {
        let mut carousels: Vec<(String, Carousel)> = Vec::with_capacity(content.galleries.len());
        for gallery in &content.galleries {
            if carousels.iter().any(|(id, _)| *id == gallery.id) {
                return Err(ConfigurationError::DuplicateGallery(gallery.id.clone()));
            }
            let carousel = Carousel::new(gallery.id.clone(), gallery.images.clone())?;
            carousels.push((gallery.id.clone(), carousel));
        }
        Ok(Self { carousels })
    }

    pub fn gallery_ids(&self) -> impl Iterator<Item = &str> {
        self.carousels.iter().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }

    pub fn carousel(&self, id: &str) -> Option<&Carousel> {
        self.carousels.iter().find(|(g, _)| g.as_str() == id).map(|(_, c)| c)
    }

    pub fn carousel_at(&self, index: usize) -> Option<&Carousel> {
        self.carousels.get(index).map(|(_, c)| c)
    }

    fn carousel_mut(&mut self, id: &str) -> Option<&mut Carousel> {
        self.carousels.iter_mut().find(|(g, _)| g.as_str() == id).map(|(_, c)| c)
    }

    /// Advances a gallery `steps` times. Only `steps % len` moves are made.
    pub fn advance_by(&mut self, id: &str, steps: usize) -> Result<&ImageRef, ConfigurationError> {
        let Some(carousel) = self.carousel_mut(id) else {
            warn!(gallery = %id, "navigation requested for unknown gallery");
            return Err(ConfigurationError::UnknownGallery(id.to_string()));
        };
        for _ in 0..steps % carousel.len() {
            carousel.advance();
        }
        Ok(carousel.current())
    }

    /// Applies one navigation action and returns the image now shown by that gallery.
    pub fn apply(&mut self, action: &Action) -> Result<&ImageRef, ConfigurationError> {
        let (id, forward) = match action {
            Action::Advance(id) => (id, true),
            Action::Retreat(id) => (id, false),
        };
        let Some(carousel) = self.carousel_mut(id) else {
            warn!(gallery = %id, "navigation requested for unknown gallery");
            return Err(ConfigurationError::UnknownGallery(id.clone()));
        };
        Ok(if forward { carousel.advance() } else { carousel.retreat() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::from_content(&PageContent::default_report().unwrap()).unwrap()
    }

    #[test]
    fn one_carousel_per_gallery_in_page_order() {
        let s = session();
        let ids: Vec<&str> = s.gallery_ids().collect();
        assert_eq!(ids, vec!["cnn", "logistic", "svm"]);
        assert!(s.gallery_ids().all(|id| s.carousel(id).unwrap().cursor() == 0));
    }

    #[test]
    fn actions_only_touch_their_gallery() {
        let mut s = session();
        s.apply(&Action::Advance("cnn".into())).unwrap();
        s.apply(&Action::Advance("cnn".into())).unwrap();
        let shown = s.apply(&Action::Retreat("svm".into())).unwrap().clone();
        assert_eq!(shown.as_str(), "svm_images/svm_confusion_matrix.png");

        assert_eq!(s.carousel("cnn").unwrap().cursor(), 2);
        assert_eq!(s.carousel("logistic").unwrap().cursor(), 0);
        assert_eq!(s.carousel("svm").unwrap().cursor(), 1);
    }

    #[test]
    fn unknown_gallery_leaves_state_untouched() {
        let mut s = session();
        s.apply(&Action::Advance("logistic".into())).unwrap();
        let err = s.apply(&Action::Advance("rnn".into())).unwrap_err();
        assert!(matches!(err, ConfigurationError::UnknownGallery(ref id) if id == "rnn"));
        assert_eq!(s.carousel("logistic").unwrap().cursor(), 1);
        assert_eq!(s.carousel("cnn").unwrap().cursor(), 0);
    }

    #[test]
    fn advance_by_wraps_huge_step_counts() {
        let mut s = session();
        let shown = s.advance_by("cnn", usize::MAX).unwrap().clone();
        assert_eq!(s.carousel("cnn").unwrap().cursor(), usize::MAX % 6);
        assert_eq!(shown.as_str(), "cnn_images/prob_non.png");
        s.advance_by("svm", 4).unwrap();
        assert_eq!(s.carousel("svm").unwrap().cursor(), 0);
        assert!(matches!(s.advance_by("rnn", 1), Err(ConfigurationError::UnknownGallery(_))));
    }

    #[test]
    fn unvalidated_duplicate_gallery_is_rejected() {
        let mut content = PageContent::default_report().unwrap();
        let copy = content.galleries[1].clone();
        content.galleries.push(copy);
        let err = Session::from_content(&content).unwrap_err();
        assert!(matches!(err, ConfigurationError::DuplicateGallery(ref id) if id == "logistic"));
    }

    #[test]
    fn unvalidated_empty_gallery_is_rejected() {
        let mut content = PageContent::default_report().unwrap();
        content.galleries[2].images.clear();
        let err = Session::from_content(&content).unwrap_err();
        assert!(matches!(err, ConfigurationError::EmptyGallery { ref gallery } if gallery == "svm"));
    }

    #[test]
    fn content_without_galleries_gives_empty_session() {
        let mut content = PageContent::default_report().unwrap();
        content.galleries.clear();
        content.sections.clear();
        let s = Session::from_content(&content).unwrap();
        assert!(s.is_empty());
        assert!(s.carousel_at(0).is_none());
    }
}
