//! Open/close state of the command palette overlay and the presence phases
//! that let its exit animation finish before the panel is unmounted.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaletteState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteEvent {
    Toggle,
    Escape,
    BackdropClick,
    /// Clicks inside the panel are contained and never close it.
    PanelClick,
    Close,
}

impl PaletteEvent {
    /// Classifies a click that reached the backdrop by whether its target sits
    /// inside the panel.
    pub fn for_click(inside_panel: bool) -> Self {
        if inside_panel {
            Self::PanelClick
        } else {
            Self::BackdropClick
        }
    }
}

impl PaletteState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn apply(self, event: PaletteEvent) -> Self {
        match (self, event) {
            (Self::Closed, PaletteEvent::Toggle) => Self::Open,
            (Self::Open, PaletteEvent::Toggle) => Self::Closed,
            (Self::Open, PaletteEvent::Escape | PaletteEvent::BackdropClick | PaletteEvent::Close) => {
                Self::Closed
            }
            (state, _) => state,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayPresence {
    #[default]
    Unmounted,
    Visible,
    Exiting,
}

impl OverlayPresence {
    /// Follows the open flag. Closing from `Visible` starts the exit phase.
    pub fn follow(self, state: PaletteState) -> Self {
        match (self, state) {
            (_, PaletteState::Open) => Self::Visible,
            (Self::Visible, PaletteState::Closed) => Self::Exiting,
            (presence, PaletteState::Closed) => presence,
        }
    }

    pub fn exit_finished(self) -> Self {
        match self {
            Self::Exiting => Self::Unmounted,
            presence => presence,
        }
    }

    pub fn is_rendered(self) -> bool {
        !matches!(self, Self::Unmounted)
    }

    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(PaletteState::default(), PaletteState::Closed);
        assert_eq!(OverlayPresence::default(), OverlayPresence::Unmounted);
    }

    #[test]
    fn toggle_flips_state() {
        let open = PaletteState::Closed.apply(PaletteEvent::Toggle);
        assert!(open.is_open());
        assert!(!open.apply(PaletteEvent::Toggle).is_open());
    }

    #[test]
    fn escape_closes_only_when_open() {
        assert_eq!(
            PaletteState::Open.apply(PaletteEvent::Escape),
            PaletteState::Closed
        );
        assert_eq!(
            PaletteState::Closed.apply(PaletteEvent::Escape),
            PaletteState::Closed
        );
    }

    #[test]
    fn panel_click_is_contained() {
        assert_eq!(
            PaletteState::Open.apply(PaletteEvent::PanelClick),
            PaletteState::Open
        );
        assert_eq!(
            PaletteState::Open.apply(PaletteEvent::BackdropClick),
            PaletteState::Closed
        );
        assert_eq!(
            PaletteState::Open.apply(PaletteEvent::Close),
            PaletteState::Closed
        );
    }

    #[test]
    fn clicks_inside_panel_never_close() {
        let mut state = PaletteState::Closed.apply(PaletteEvent::Toggle);
        for _ in 0..3 {
            state = state.apply(PaletteEvent::for_click(true));
            assert!(state.is_open());
        }

        assert_eq!(
            state.apply(PaletteEvent::for_click(false)),
            PaletteState::Closed
        );
    }

    #[test]
    fn link_click_inside_panel_closes_once() {
        // A link emits Close and the same click then reaches the backdrop.
        let state = PaletteState::Open
            .apply(PaletteEvent::Close)
            .apply(PaletteEvent::for_click(true));
        assert_eq!(state, PaletteState::Closed);
    }

    #[test]
    fn exiting_panel_is_rendered_but_not_interactive() {
        let visible = OverlayPresence::Unmounted.follow(PaletteState::Open);
        assert!(visible.is_interactive());

        let exiting = visible.follow(PaletteState::Closed);
        assert_eq!(exiting, OverlayPresence::Exiting);
        assert!(exiting.is_rendered());
        assert!(!exiting.is_interactive());

        let gone = exiting.exit_finished();
        assert!(!gone.is_rendered());
    }

    #[test]
    fn reopening_during_exit_restores_panel() {
        let exiting = OverlayPresence::Visible.follow(PaletteState::Closed);
        assert_eq!(exiting.follow(PaletteState::Open), OverlayPresence::Visible);
    }

    #[test]
    fn stale_exit_timer_does_not_hide_reopened_panel() {
        assert_eq!(
            OverlayPresence::Visible.exit_finished(),
            OverlayPresence::Visible
        );
        assert_eq!(
            OverlayPresence::Unmounted.follow(PaletteState::Closed),
            OverlayPresence::Unmounted
        );
    }
}
