//! Gallery filter, pagination and lightbox state.
//!
//! The lightbox holds a [`ScrollLockGuard`] for exactly as long as an image
//! is selected, so dropping the state (navigating away) also releases the
//! page scroll.

use std::collections::BTreeSet;

use crate::{
    catalog::{FALLBACK_IMAGE, GALLERY_IMAGES},
    error::{CoreError, Result},
    scroll_lock::{ScrollLock, ScrollLockGuard},
};

/// Images shown before any "load more".
pub const INITIAL_COUNT: usize = 6;

/// Images revealed by each "load more".
pub const LOAD_MORE_STEP: usize = 3;

/// Key that dismisses the lightbox.
pub const DISMISS_KEY: &str = "Escape";

/// Filter categories offered above the grid.
///
/// Gallery images carry no category metadata, so the filter is a label only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GalleryFilter {
    #[default]
    All,
    Resort,
    Villas,
    Tents,
    Nature,
}

impl GalleryFilter {
    pub const ALL: [GalleryFilter; 5] = [
        GalleryFilter::All,
        GalleryFilter::Resort,
        GalleryFilter::Villas,
        GalleryFilter::Tents,
        GalleryFilter::Nature,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            GalleryFilter::All => "All",
            GalleryFilter::Resort => "Resort",
            GalleryFilter::Villas => "Villas",
            GalleryFilter::Tents => "Tents",
            GalleryFilter::Nature => "Nature",
        }
    }
}

/// Editorial grid tile shape for a position in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileShape {
    /// Spans two columns, 16:9.
    Large,
    /// Single column, 3:4.
    Tall,
    /// Single column, 1:1.
    Square,
}

impl TileShape {
    pub fn for_index(index: usize) -> Self {
        if index % 5 == 0 {
            TileShape::Large
        } else if index % 3 == 0 {
            TileShape::Tall
        } else {
            TileShape::Square
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            TileShape::Large => "tile-large",
            TileShape::Tall => "tile-tall",
            TileShape::Square => "tile-square",
        }
    }
}

#[derive(Debug)]
struct Selection {
    url: &'static str,
    _guard: ScrollLockGuard,
}

/// Per-page gallery state.
#[derive(Debug)]
pub struct GalleryState {
    images: &'static [&'static str],
    filter: GalleryFilter,
    visible_count: usize,
    selection: Option<Selection>,
    broken: BTreeSet<String>,
    scroll_lock: ScrollLock,
}

impl GalleryState {
    /// Gallery over the published catalog.
    pub fn new(scroll_lock: ScrollLock) -> Self {
        Self::with_images(GALLERY_IMAGES, scroll_lock)
    }

    /// Gallery over an arbitrary image list.
    pub fn with_images(images: &'static [&'static str], scroll_lock: ScrollLock) -> Self {
        Self {
            images,
            filter: GalleryFilter::default(),
            visible_count: INITIAL_COUNT.min(images.len()),
            selection: None,
            broken: BTreeSet::new(),
            scroll_lock,
        }
    }

    pub fn filter(&self) -> GalleryFilter {
        self.filter
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Total number of images in the catalog.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Images currently rendered in the grid.
    pub fn visible_images(&self) -> &'static [&'static str] {
        let images: &'static [&'static str] = self.images;
        &images[..self.visible_count]
    }

    /// Whether a "load more" control should be offered.
    pub fn has_more(&self) -> bool {
        self.visible_count < self.images.len()
    }

    /// Images not yet revealed.
    pub fn remaining(&self) -> usize {
        self.images.len() - self.visible_count
    }

    /// Switch category and rewind the grid to the initial window.
    ///
    /// An open image stays open while it remains in the rewound window;
    /// otherwise the lightbox closes so the selection never points outside
    /// the grid.
    pub fn select_filter(&mut self, filter: GalleryFilter) {
        self.filter = filter;
        self.visible_count = INITIAL_COUNT.min(self.images.len());
        if let Some(url) = self.selected()
            && !self.is_visible(url)
        {
            self.close_image();
        }
    }

    /// Reveal up to [`LOAD_MORE_STEP`] more images. Returns how many were
    /// revealed; zero once the catalog is exhausted.
    pub fn load_more(&mut self) -> usize {
        let next = (self.visible_count + LOAD_MORE_STEP).min(self.images.len());
        let revealed = next - self.visible_count;
        self.visible_count = next;
        revealed
    }

    /// Image currently shown in the lightbox.
    pub fn selected(&self) -> Option<&'static str> {
        self.selection.as_ref().map(|s| s.url)
    }

    pub fn is_open(&self) -> bool {
        self.selection.is_some()
    }

    /// Show `url` in the lightbox, locking page scroll while it is open.
    pub fn open_image(&mut self, url: &str) -> Result<()> {
        let url = self
            .visible_images()
            .iter()
            .copied()
            .find(|img| *img == url)
            .ok_or_else(|| CoreError::image_not_visible(url))?;

        match self.selection.as_mut() {
            // Keep the existing guard when switching images.
            Some(selection) => selection.url = url,
            None => {
                self.selection = Some(Selection {
                    url,
                    _guard: self.scroll_lock.acquire(),
                });
            }
        }
        Ok(())
    }

    /// Close the lightbox and release the scroll lock. Returns whether an
    /// image was open.
    pub fn close_image(&mut self) -> bool {
        self.selection.take().is_some()
    }

    /// Keyboard handling while the gallery is mounted. Returns whether the
    /// key closed the lightbox.
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == DISMISS_KEY && self.close_image()
    }

    /// Record that `url` failed to load. Returns `false` if already known.
    pub fn mark_broken(&mut self, url: &str) -> bool {
        if url == FALLBACK_IMAGE {
            return false;
        }
        self.broken.insert(url.to_string())
    }

    pub fn is_broken(&self, url: &str) -> bool {
        self.broken.contains(url)
    }

    /// Source to render for `url`: the fallback once it has failed.
    pub fn display_src<'a>(&self, url: &'a str) -> &'a str {
        if self.is_broken(url) {
            FALLBACK_IMAGE
        } else {
            url
        }
    }

    fn is_visible(&self, url: &str) -> bool {
        self.visible_images().contains(&url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_lock::tests::RecordingBackend;

    fn gallery() -> (GalleryState, RecordingBackend) {
        let backend = RecordingBackend::default();
        let state = GalleryState::new(ScrollLock::new(backend.clone()));
        (state, backend)
    }

    #[test]
    fn test_initial_window() {
        let (state, _) = gallery();
        assert_eq!(state.visible_count(), INITIAL_COUNT);
        assert_eq!(state.visible_images().len(), 6);
        assert_eq!(state.filter(), GalleryFilter::All);
        assert!(state.has_more());
        assert_eq!(state.remaining(), 10);
    }

    #[test]
    fn test_load_more_is_monotonic_and_capped() {
        let (mut state, _) = gallery();
        let mut previous = state.visible_count();
        for _ in 0..20 {
            state.load_more();
            assert!(state.visible_count() >= previous);
            assert!(state.visible_count() <= state.len());
            previous = state.visible_count();
        }
        assert_eq!(state.visible_count(), 16);
        assert_eq!(state.load_more(), 0);
    }

    #[test]
    fn test_partial_last_step_reveals_rest() {
        let (mut state, _) = gallery();
        for _ in 0..3 {
            state.load_more();
        }
        assert_eq!(state.visible_count(), 15);
        assert_eq!(state.load_more(), 1);
        assert!(!state.has_more());
    }

    #[test]
    fn test_select_filter_resets_window() {
        let (mut state, _) = gallery();
        state.load_more();
        state.load_more();
        state.select_filter(GalleryFilter::Tents);
        assert_eq!(state.filter(), GalleryFilter::Tents);
        assert_eq!(state.visible_count(), INITIAL_COUNT);
    }

    #[test]
    fn test_filter_is_cosmetic() {
        let (mut state, _) = gallery();
        let before = state.visible_images().to_vec();
        state.select_filter(GalleryFilter::Nature);
        assert_eq!(state.visible_images(), before.as_slice());
    }

    #[test]
    fn test_select_filter_keeps_visible_selection() {
        let (mut state, _) = gallery();
        let first = state.visible_images()[0];
        state.open_image(first).expect("first image is visible");
        state.select_filter(GalleryFilter::Resort);
        assert_eq!(state.selected(), Some(first));
    }

    #[test]
    fn test_select_filter_closes_selection_outside_window() {
        let (mut state, backend) = gallery();
        state.load_more();
        let eighth = state.visible_images()[7];
        state.open_image(eighth).expect("eighth image is visible");
        state.select_filter(GalleryFilter::Villas);
        assert!(state.selected().is_none());
        assert!(backend.scroll_enabled());
    }

    #[test]
    fn test_open_and_close_restore_scroll() {
        let (mut state, backend) = gallery();
        let url = state.visible_images()[2];

        state.open_image(url).expect("visible");
        assert_eq!(state.selected(), Some(url));
        assert!(!backend.scroll_enabled());

        assert!(state.close_image());
        assert!(state.selected().is_none());
        assert!(backend.scroll_enabled());
    }

    #[test]
    fn test_switching_images_keeps_single_lock() {
        let backend = RecordingBackend::default();
        let lock = ScrollLock::new(backend.clone());
        let mut state = GalleryState::new(lock.clone());

        state.open_image(state.visible_images()[0]).expect("visible");
        state.open_image(state.visible_images()[1]).expect("visible");
        assert_eq!(lock.holders(), 1);
    }

    #[test]
    fn test_open_hidden_image_is_rejected() {
        let (mut state, backend) = gallery();
        let hidden = GALLERY_IMAGES[10];
        let err = state.open_image(hidden).unwrap_err();
        assert_eq!(err, CoreError::image_not_visible(hidden));
        assert!(state.selected().is_none());
        assert!(backend.scroll_enabled());
    }

    #[test]
    fn test_dismiss_key() {
        let (mut state, backend) = gallery();
        state.open_image(state.visible_images()[0]).expect("visible");

        assert!(!state.handle_key("Enter"));
        assert!(state.is_open());

        assert!(state.handle_key("Escape"));
        assert!(!state.is_open());
        assert!(backend.scroll_enabled());
    }

    #[test]
    fn test_dismiss_key_without_selection_is_noop() {
        let (mut state, backend) = gallery();
        assert!(!state.handle_key("Escape"));
        assert!(backend.calls.lock().expect("lock calls").is_empty());
    }

    #[test]
    fn test_dropping_state_releases_lock() {
        let backend = RecordingBackend::default();
        let lock = ScrollLock::new(backend.clone());
        {
            let mut state = GalleryState::new(lock.clone());
            state.open_image(state.visible_images()[0]).expect("visible");
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
        assert!(backend.scroll_enabled());
    }

    #[test]
    fn test_broken_images_use_fallback() {
        let (mut state, _) = gallery();
        let url = state.visible_images()[3];
        assert_eq!(state.display_src(url), url);

        assert!(state.mark_broken(url));
        assert!(!state.mark_broken(url));
        assert_eq!(state.display_src(url), FALLBACK_IMAGE);
    }

    #[test]
    fn test_fallback_is_never_marked_broken() {
        let (mut state, _) = gallery();
        assert!(!state.mark_broken(FALLBACK_IMAGE));
        assert_eq!(state.display_src(FALLBACK_IMAGE), FALLBACK_IMAGE);
    }

    #[test]
    fn test_small_catalog_window() {
        static TWO: &[&str] = &["a.jpg", "b.jpg"];
        let mut state = GalleryState::with_images(TWO, ScrollLock::default());
        assert_eq!(state.visible_count(), 2);
        assert!(!state.has_more());
        assert_eq!(state.load_more(), 0);
    }

    #[test]
    fn test_tile_shapes() {
        assert_eq!(TileShape::for_index(0), TileShape::Large);
        assert_eq!(TileShape::for_index(3), TileShape::Tall);
        assert_eq!(TileShape::for_index(5), TileShape::Large);
        assert_eq!(TileShape::for_index(15), TileShape::Large);
        assert_eq!(TileShape::for_index(4), TileShape::Square);
        assert_eq!(TileShape::for_index(9), TileShape::Tall);
    }
}
