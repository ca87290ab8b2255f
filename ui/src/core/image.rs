//! Image source resolution for a single menu item.
//!
//! An item carries up to two candidate URLs. The resolver tries the primary
//! one, falls back to the thumbnail once if the primary fails, and gives up
//! after that. Loads are driven entirely by the `load` / `error` events of the
//! rendered `<img>`; there are no retries and no timeouts.
//!
//! ```text
//!            ┌──── load ────▶ Loaded (primary)
//! Primary ───┤
//!            └──── error ───▶ Thumbnail ──┬── load ──▶ Loaded (thumbnail)
//!                 (thumbnail              └── error ─▶ Exhausted
//!                  exists)
//! Primary ── error (no thumbnail) ──▶ Exhausted
//! None (no candidates) : terminal placeholder from the start
//! ```
//!
//! Every attempt is identified by an [`Attempt`] token. Events carrying a token
//! for a superseded attempt are ignored, the same way timer events for an
//! aborted task run are dropped when their run id no longer matches.

use api::ImageCandidates;
use dioxus::logger::tracing::debug;

/// Which candidate is currently being shown (or attempted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSource {
    Primary,
    Thumbnail,
    None,
}

/// Identifies one load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attempt {
    pub source: ImageSource,
    pub generation: u64,
}

/// Result of feeding an event to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Loaded,
    FellBack,
    Exhausted,
    /// Stale token, unknown item, or the resolver was already terminal.
    Ignored,
}

/// What the image region should show right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus<'a> {
    Loading { url: &'a str },
    Loaded { url: &'a str },
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    candidates: ImageCandidates,
    active: ImageSource,
    loaded: bool,
    exhausted: bool,
    generation: u64,
}

impl ImageResolver {
    pub fn new(candidates: ImageCandidates) -> Self {
        Self::with_generation(candidates, 0)
    }

    /// Fresh resolver whose attempt tokens cannot collide with those of an
    /// earlier resolver for the same item.
    pub fn with_generation(candidates: ImageCandidates, generation: u64) -> Self {
        let active = if candidates.primary.is_some() {
            ImageSource::Primary
        } else if candidates.thumbnail.is_some() {
            ImageSource::Thumbnail
        } else {
            ImageSource::None
        };

        Self {
            candidates,
            active,
            loaded: false,
            exhausted: false,
            generation,
        }
    }

    pub fn candidates(&self) -> &ImageCandidates {
        &self.candidates
    }

    pub fn active_source(&self) -> ImageSource {
        self.active
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// No further automatic transition can happen.
    pub fn is_terminal(&self) -> bool {
        self.loaded || self.active == ImageSource::None
    }

    pub fn active_url(&self) -> Option<&str> {
        match self.active {
            ImageSource::Primary => self.candidates.primary.as_deref(),
            ImageSource::Thumbnail => self.candidates.thumbnail.as_deref(),
            ImageSource::None => None,
        }
    }

    /// Token for the load currently in flight, if any.
    pub fn attempt(&self) -> Option<Attempt> {
        if self.is_terminal() {
            return None;
        }
        Some(self.token())
    }

    fn token(&self) -> Attempt {
        Attempt {
            source: self.active,
            generation: self.generation,
        }
    }

    pub fn status(&self) -> ImageStatus<'_> {
        match self.active_url() {
            None => ImageStatus::Placeholder,
            Some(url) if self.loaded => ImageStatus::Loaded { url },
            Some(url) => ImageStatus::Loading { url },
        }
    }

    /// Target of the "view full image" link. Prefers the primary URL even
    /// while the thumbnail is displayed inline; hidden once every candidate
    /// has failed.
    pub fn full_image_link(&self) -> Option<&str> {
        if self.exhausted {
            return None;
        }
        self.candidates
            .primary
            .as_deref()
            .or(self.candidates.thumbnail.as_deref())
    }

    pub fn on_load(&mut self, attempt: Attempt) -> Transition {
        if self.is_terminal() || attempt != self.token() {
            return Transition::Ignored;
        }
        self.loaded = true;
        debug!(source = ?self.active, "image loaded");
        Transition::Loaded
    }

    pub fn on_error(&mut self, attempt: Attempt) -> Transition {
        if self.is_terminal() || attempt != self.token() {
            return Transition::Ignored;
        }

        if self.active == ImageSource::Primary && self.candidates.thumbnail.is_some() {
            self.active = ImageSource::Thumbnail;
            self.loaded = false;
            debug!("primary image failed, falling back to thumbnail");
            return Transition::FellBack;
        }

        self.active = ImageSource::None;
        self.loaded = false;
        self.exhausted = true;
        debug!("all image candidates failed");
        Transition::Exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolver(primary: Option<&str>, thumbnail: Option<&str>) -> ImageResolver {
        ImageResolver::new(ImageCandidates::new(primary, thumbnail))
    }

    fn current(r: &ImageResolver) -> Attempt {
        r.attempt().expect("an attempt should be in flight")
    }

    #[test]
    fn no_candidates_is_terminal_placeholder() {
        let mut r = resolver(None, None);
        assert_eq!(r.active_source(), ImageSource::None);
        assert_eq!(r.status(), ImageStatus::Placeholder);
        assert!(r.attempt().is_none());
        assert!(r.full_image_link().is_none());
        assert!(r.is_terminal());

        let stray = Attempt {
            source: ImageSource::Primary,
            generation: 0,
        };
        assert_eq!(r.on_error(stray), Transition::Ignored);
        assert_eq!(r.on_load(stray), Transition::Ignored);
        assert_eq!(r.status(), ImageStatus::Placeholder);
    }

    #[test]
    fn thumbnail_only_starts_on_thumbnail() {
        let r = resolver(None, Some("t.jpg"));
        assert_eq!(r.active_source(), ImageSource::Thumbnail);
        assert_eq!(r.status(), ImageStatus::Loading { url: "t.jpg" });
        assert_eq!(r.full_image_link(), Some("t.jpg"));
    }

    #[test]
    fn primary_only_failure_exhausts() {
        let mut r = resolver(Some("a.jpg"), None);
        let attempt = current(&r);
        assert_eq!(r.on_error(attempt), Transition::Exhausted);
        assert!(r.is_exhausted());
        assert_eq!(r.active_source(), ImageSource::None);
        assert_eq!(r.status(), ImageStatus::Placeholder);
        assert!(r.full_image_link().is_none());
    }

    #[test]
    fn primary_failure_then_thumbnail_success() {
        let mut r = resolver(Some("a.jpg"), Some("a_thumb.jpg"));
        assert_eq!(r.status(), ImageStatus::Loading { url: "a.jpg" });

        assert_eq!(r.on_error(current(&r)), Transition::FellBack);
        assert_eq!(r.active_source(), ImageSource::Thumbnail);
        assert!(!r.is_loaded());
        assert_eq!(r.status(), ImageStatus::Loading { url: "a_thumb.jpg" });

        assert_eq!(r.on_load(current(&r)), Transition::Loaded);
        assert!(r.is_loaded());
        assert_eq!(r.status(), ImageStatus::Loaded { url: "a_thumb.jpg" });
        assert_eq!(r.full_image_link(), Some("a.jpg"));
    }

    #[test]
    fn thumbnail_is_attempted_exactly_once() {
        let mut r = resolver(Some("a.jpg"), Some("a_thumb.jpg"));
        assert_eq!(r.on_error(current(&r)), Transition::FellBack);
        let thumb = current(&r);
        assert_eq!(r.on_error(thumb), Transition::Exhausted);
        assert!(r.is_exhausted());
        assert!(r.attempt().is_none());
        // A repeated failure for the same attempt changes nothing.
        assert_eq!(r.on_error(thumb), Transition::Ignored);
        assert!(r.full_image_link().is_none());
    }

    #[test]
    fn success_is_final() {
        let mut r = resolver(Some("a.jpg"), Some("a_thumb.jpg"));
        let primary = current(&r);
        assert_eq!(r.on_load(primary), Transition::Loaded);
        assert_eq!(r.on_error(primary), Transition::Ignored);
        assert_eq!(r.active_source(), ImageSource::Primary);
        assert_eq!(r.status(), ImageStatus::Loaded { url: "a.jpg" });
    }

    #[test]
    fn stale_primary_error_after_fallback_is_ignored() {
        let mut r = resolver(Some("a.jpg"), Some("a_thumb.jpg"));
        let primary = current(&r);
        assert_eq!(r.on_error(primary), Transition::FellBack);
        // Late duplicate from the primary <img> must not burn the thumbnail.
        assert_eq!(r.on_error(primary), Transition::Ignored);
        assert_eq!(r.active_source(), ImageSource::Thumbnail);
        assert!(!r.is_exhausted());
    }

    #[test]
    fn tokens_from_another_generation_are_ignored() {
        let candidates = ImageCandidates::new(Some("a.jpg"), None);
        let old = ImageResolver::with_generation(candidates.clone(), 1);
        let mut fresh = ImageResolver::with_generation(candidates, 2);
        assert_eq!(fresh.on_error(current(&old)), Transition::Ignored);
        assert_eq!(fresh.on_load(current(&old)), Transition::Ignored);
        assert_eq!(fresh.status(), ImageStatus::Loading { url: "a.jpg" });
    }
}
