//! Pause coordinator: merges hover and external pause into one flag

use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PauseCoordinator {
    pause_on_hover: bool,
    hover_pause: bool,
    external: Option<bool>,
}

impl PauseCoordinator {
    pub fn new(pause_on_hover: bool, external: Option<bool>) -> Self {
        Self {
            pause_on_hover,
            hover_pause: false,
            external,
        }
    }

    /// Pointer entered the track or one of its controls
    pub fn hover_enter(&mut self) {
        if self.pause_on_hover {
            self.hover_pause = true;
        }
    }

    /// Pointer left the track or one of its controls
    pub fn hover_leave(&mut self) {
        if self.pause_on_hover {
            self.hover_pause = false;
        }
    }

    /// Set or clear the external override
    pub fn set_external(&mut self, external: Option<bool>) {
        if self.external != external {
            debug!(?external, "External pause override changed");
        }
        self.external = external;
    }

    pub fn set_pause_on_hover(&mut self, pause_on_hover: bool) {
        self.pause_on_hover = pause_on_hover;
        if !pause_on_hover {
            self.hover_pause = false;
        }
    }

    #[inline]
    pub fn external(&self) -> Option<bool> {
        self.external
    }

    #[inline]
    pub fn hover_pause(&self) -> bool {
        self.hover_pause
    }

    /// Effective pause: the override if set, hover otherwise
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.external.unwrap_or(self.hover_pause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_toggles_only_when_enabled() {
        let mut pause = PauseCoordinator::new(true, None);
        pause.hover_enter();
        assert!(pause.is_paused());
        pause.hover_leave();
        assert!(!pause.is_paused());

        let mut pause = PauseCoordinator::new(false, None);
        pause.hover_enter();
        assert!(!pause.is_paused());
    }

    #[test]
    fn test_external_override_wins() {
        let mut pause = PauseCoordinator::new(true, Some(false));
        pause.hover_enter();
        assert!(!pause.is_paused());

        pause.set_external(Some(true));
        pause.hover_leave();
        assert!(pause.is_paused());

        pause.set_external(None);
        assert!(!pause.is_paused());
        pause.hover_enter();
        assert!(pause.is_paused());
    }

    #[test]
    fn test_disabling_hover_pause_clears_it() {
        let mut pause = PauseCoordinator::new(true, None);
        pause.hover_enter();
        pause.set_pause_on_hover(false);
        assert!(!pause.hover_pause());
        assert!(!pause.is_paused());
    }
}
