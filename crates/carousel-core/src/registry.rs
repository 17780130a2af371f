//! Ordered registry of mounted slides
//!
//! Index semantics for the whole engine come from this ordering: a slide's
//! index is its position among the currently mounted slides, in mount order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a slide
///
/// Also serves as the opaque position handle: tracks resolve a `SlideId` to
/// the slide's horizontal offset when a scroll is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlideId(Uuid);

impl SlideId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SlideId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SlideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A mounted slide as seen by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlideDescriptor {
    pub id: SlideId,
}

impl SlideDescriptor {
    /// Create a descriptor with a fresh identity
    pub fn new() -> Self {
        Self { id: SlideId::new() }
    }

    pub fn with_id(id: SlideId) -> Self {
        Self { id }
    }
}

impl Default for SlideDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

/// Mount lifecycle action for a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideAction {
    Mount,
    Unmount,
}

#[derive(Debug, Clone, Default)]
pub struct SlideRegistry {
    slides: Vec<SlideDescriptor>,
}

impl SlideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slide. Returns false if it is already mounted.
    pub fn mount(&mut self, slide: SlideDescriptor) -> bool {
        if self.contains(slide.id) {
            return false;
        }
        self.slides.push(slide);
        true
    }

    /// Remove a slide. Returns the index it occupied.
    pub fn unmount(&mut self, id: SlideId) -> Option<usize> {
        let index = self.index_of(id)?;
        self.slides.remove(index);
        Some(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SlideDescriptor> {
        self.slides.get(index)
    }

    pub fn contains(&self, id: SlideId) -> bool {
        self.slides.iter().any(|s| s.id == id)
    }

    pub fn index_of(&self, id: SlideId) -> Option<usize> {
        self.slides.iter().position(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlideDescriptor> {
        self.slides.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_order_defines_indices() {
        let mut registry = SlideRegistry::new();
        let slides: Vec<_> = (0..3).map(|_| SlideDescriptor::new()).collect();
        for slide in &slides {
            assert!(registry.mount(*slide));
        }

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.index_of(slides[2].id), Some(2));
        assert_eq!(registry.get(0), Some(&slides[0]));
    }

    #[test]
    fn test_duplicate_mount_ignored() {
        let mut registry = SlideRegistry::new();
        let slide = SlideDescriptor::new();
        assert!(registry.mount(slide));
        assert!(!registry.mount(slide));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unmount_shifts_later_slides() {
        let mut registry = SlideRegistry::new();
        let slides: Vec<_> = (0..3).map(|_| SlideDescriptor::new()).collect();
        for slide in &slides {
            registry.mount(*slide);
        }

        assert_eq!(registry.unmount(slides[1].id), Some(1));
        assert_eq!(registry.index_of(slides[2].id), Some(1));
        assert_eq!(registry.unmount(slides[1].id), None);
    }
}
