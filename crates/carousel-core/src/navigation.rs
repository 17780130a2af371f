//! Slide navigation state machine
//!
//! All mutations of [`NavigationState`] go through [`NavigationState::apply`].
//! Out-of-range requests and boundary moves without wrapping are absorbed as
//! no-ops so the UI stays inert instead of erroring.

use tracing::trace;

use crate::registry::{SlideAction, SlideDescriptor, SlideRegistry};

/// Command processed by the navigation state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    /// Advance one slide; `wrap` jumps from the last slide to the first
    GoToNextSlide { wrap: bool },
    /// Go back one slide; `wrap` jumps from the first slide to the last
    GoToPrevSlide { wrap: bool },
    /// Jump to an index
    GoToSlideIndex(usize),
    /// Mark a slide as selected, optionally scrolling to it
    SelectSlide { index: usize, scroll: bool },
    /// Slide mounted or unmounted
    UpdateSlide {
        slide: SlideDescriptor,
        action: SlideAction,
    },
}

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    current_slide_index: usize,
    selected_slide_index: Option<usize>,
    /// Last index the track was told to scroll to. Kept apart from
    /// `current_slide_index` so repeated requests can be deduplicated.
    scroll_index: Option<usize>,
    slides: SlideRegistry,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current_slide_index(&self) -> usize {
        self.current_slide_index
    }

    #[inline]
    pub fn selected_slide_index(&self) -> Option<usize> {
        self.selected_slide_index
    }

    #[inline]
    pub fn scroll_index(&self) -> Option<usize> {
        self.scroll_index
    }

    #[inline]
    pub fn slides(&self) -> &SlideRegistry {
        &self.slides
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Apply a command. Returns true if any field changed.
    pub fn apply(&mut self, command: NavigationCommand) -> bool {
        let before = (
            self.current_slide_index,
            self.selected_slide_index,
            self.scroll_index,
        );

        match command {
            NavigationCommand::GoToNextSlide { wrap } => {
                if let Some(target) = self.next_index(wrap) {
                    self.scroll_to(target);
                }
            }
            NavigationCommand::GoToPrevSlide { wrap } => {
                if let Some(target) = self.prev_index(wrap) {
                    self.scroll_to(target);
                }
            }
            NavigationCommand::GoToSlideIndex(index) => {
                if index < self.slides.len() {
                    self.scroll_to(index);
                }
            }
            NavigationCommand::SelectSlide { index, scroll } => {
                if index < self.slides.len() {
                    self.selected_slide_index = Some(index);
                    if scroll {
                        self.scroll_to(index);
                    }
                }
            }
            NavigationCommand::UpdateSlide { slide, action } => {
                let changed = match action {
                    SlideAction::Mount => self.slides.mount(slide),
                    SlideAction::Unmount => self.slides.unmount(slide.id).is_some(),
                };
                if !changed {
                    trace!(slide = %slide.id, ?action, "Slide update ignored");
                    return false;
                }
                self.clamp_to_slides();
                return true;
            }
        }

        let changed = before
            != (
                self.current_slide_index,
                self.selected_slide_index,
                self.scroll_index,
            );
        if !changed {
            trace!(?command, "Navigation command absorbed");
        }
        changed
    }

    fn next_index(&self, wrap: bool) -> Option<usize> {
        if self.slides.is_empty() {
            return None;
        }
        if self.current_slide_index + 1 < self.slides.len() {
            Some(self.current_slide_index + 1)
        } else if wrap {
            Some(0)
        } else {
            None
        }
    }

    fn prev_index(&self, wrap: bool) -> Option<usize> {
        if self.slides.is_empty() {
            return None;
        }
        if self.current_slide_index > 0 {
            Some(self.current_slide_index - 1)
        } else if wrap {
            Some(self.slides.len() - 1)
        } else {
            None
        }
    }

    fn scroll_to(&mut self, index: usize) {
        self.scroll_index = Some(index);
        self.current_slide_index = index;
    }

    fn clamp_to_slides(&mut self) {
        let last = self.slides.len().saturating_sub(1);
        self.current_slide_index = self.current_slide_index.min(last);
        if self
            .selected_slide_index
            .is_some_and(|selected| selected >= self.slides.len())
        {
            self.selected_slide_index = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(count: usize) -> (NavigationState, Vec<SlideDescriptor>) {
        let mut state = NavigationState::new();
        let slides: Vec<_> = (0..count).map(|_| SlideDescriptor::new()).collect();
        for slide in &slides {
            state.apply(NavigationCommand::UpdateSlide {
                slide: *slide,
                action: SlideAction::Mount,
            });
        }
        (state, slides)
    }

    #[test]
    fn test_non_wrapping_moves_stay_in_range() {
        let (mut state, _) = state_with(4);
        let moves = [true, true, true, true, true, false, false, false, false, false, true];

        for forward in moves {
            let command = if forward {
                NavigationCommand::GoToNextSlide { wrap: false }
            } else {
                NavigationCommand::GoToPrevSlide { wrap: false }
            };
            state.apply(command);
            assert!(state.current_slide_index() < state.slide_count());
        }
        assert_eq!(state.current_slide_index(), 1);
    }

    #[test]
    fn test_boundary_without_wrap_keeps_scroll_index() {
        let (mut state, _) = state_with(3);
        state.apply(NavigationCommand::GoToSlideIndex(2));
        assert_eq!(state.scroll_index(), Some(2));

        assert!(!state.apply(NavigationCommand::GoToNextSlide { wrap: false }));
        assert_eq!(state.current_slide_index(), 2);
        assert_eq!(state.scroll_index(), Some(2));

        let (mut state, _) = state_with(3);
        assert!(!state.apply(NavigationCommand::GoToPrevSlide { wrap: false }));
        assert_eq!(state.current_slide_index(), 0);
        assert_eq!(state.scroll_index(), None);
    }

    #[test]
    fn test_wrapping() {
        let (mut state, _) = state_with(3);
        state.apply(NavigationCommand::GoToSlideIndex(2));
        assert!(state.apply(NavigationCommand::GoToNextSlide { wrap: true }));
        assert_eq!(state.current_slide_index(), 0);
        assert_eq!(state.scroll_index(), Some(0));

        assert!(state.apply(NavigationCommand::GoToPrevSlide { wrap: true }));
        assert_eq!(state.current_slide_index(), 2);
        assert_eq!(state.scroll_index(), Some(2));
    }

    #[test]
    fn test_go_to_out_of_range_is_noop() {
        let (mut state, _) = state_with(3);
        state.apply(NavigationCommand::GoToSlideIndex(1));

        assert!(!state.apply(NavigationCommand::GoToSlideIndex(3)));
        assert!(!state.apply(NavigationCommand::GoToSlideIndex(usize::MAX)));
        assert_eq!(state.current_slide_index(), 1);
        assert_eq!(state.scroll_index(), Some(1));
    }

    #[test]
    fn test_empty_registry_ignores_navigation() {
        let mut state = NavigationState::new();
        assert!(!state.apply(NavigationCommand::GoToNextSlide { wrap: true }));
        assert!(!state.apply(NavigationCommand::GoToPrevSlide { wrap: true }));
        assert!(!state.apply(NavigationCommand::GoToSlideIndex(0)));
        assert!(!state.apply(NavigationCommand::SelectSlide { index: 0, scroll: true }));
        assert_eq!(state.current_slide_index(), 0);
        assert_eq!(state.scroll_index(), None);
    }

    #[test]
    fn test_unmount_current_clamps() {
        let (mut state, slides) = state_with(5);
        state.apply(NavigationCommand::GoToSlideIndex(4));

        state.apply(NavigationCommand::UpdateSlide {
            slide: slides[4],
            action: SlideAction::Unmount,
        });
        assert_eq!(state.slide_count(), 4);
        assert_eq!(state.current_slide_index(), 3);

        // Unmounting an earlier slide leaves an in-range index alone
        state.apply(NavigationCommand::UpdateSlide {
            slide: slides[0],
            action: SlideAction::Unmount,
        });
        assert_eq!(state.current_slide_index(), 2);
    }

    #[test]
    fn test_unmount_all_floors_at_zero() {
        let (mut state, slides) = state_with(2);
        state.apply(NavigationCommand::GoToSlideIndex(1));
        for slide in slides {
            state.apply(NavigationCommand::UpdateSlide {
                slide,
                action: SlideAction::Unmount,
            });
        }
        assert_eq!(state.current_slide_index(), 0);
        assert_eq!(state.slide_count(), 0);
    }

    #[test]
    fn test_select_with_and_without_scroll() {
        let (mut state, slides) = state_with(4);

        assert!(state.apply(NavigationCommand::SelectSlide { index: 3, scroll: false }));
        assert_eq!(state.selected_slide_index(), Some(3));
        assert_eq!(state.current_slide_index(), 0);
        assert_eq!(state.scroll_index(), None);

        assert!(state.apply(NavigationCommand::SelectSlide { index: 2, scroll: true }));
        assert_eq!(state.selected_slide_index(), Some(2));
        assert_eq!(state.current_slide_index(), 2);
        assert_eq!(state.scroll_index(), Some(2));

        state.apply(NavigationCommand::UpdateSlide {
            slide: slides[3],
            action: SlideAction::Unmount,
        });
        state.apply(NavigationCommand::UpdateSlide {
            slide: slides[2],
            action: SlideAction::Unmount,
        });
        assert_eq!(state.selected_slide_index(), None);
    }
}
