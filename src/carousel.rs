/// Index into a fixed list that advances on a timer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether a timer is worth installing. Empty lists must never tick and a
    /// single item has nothing to advance to.
    pub fn should_run(&self) -> bool {
        self.len > 1
    }

    pub fn tick(&mut self) -> usize {
        if self.len > 1 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    /// Jumps to `index`. Out-of-range requests are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }

    /// Follows a change in the item count, keeping the index valid.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }
}

/// Which slide is on screen. A new index waits for the outgoing slide to
/// finish its exit before it is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlidePhase {
    Showing(usize),
    Leaving { from: usize, to: usize },
}

impl SlidePhase {
    pub fn follow(self, index: usize) -> Self {
        match self {
            Self::Showing(current) if current == index => self,
            Self::Showing(current) => Self::Leaving {
                from: current,
                to: index,
            },
            Self::Leaving { from, .. } if from == index => Self::Showing(from),
            Self::Leaving { from, .. } => Self::Leaving { from, to: index },
        }
    }

    pub fn exit_finished(self) -> Self {
        match self {
            Self::Leaving { to, .. } => Self::Showing(to),
            showing => showing,
        }
    }

    pub fn displayed(self) -> usize {
        match self {
            Self::Showing(index) | Self::Leaving { from: index, .. } => index,
        }
    }

    pub fn is_leaving(self) -> bool {
        matches!(self, Self::Leaving { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn three_items_four_ticks() {
        let mut carousel = Carousel::new(3);
        let mut seen = vec![carousel.index()];
        for _ in 0..4 {
            seen.push(carousel.tick());
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn select_keeps_schedule_from_new_index() {
        let mut carousel = Carousel::new(4);
        carousel.tick();
        assert!(carousel.select(3));
        assert_eq!(carousel.tick(), 0);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut carousel = Carousel::new(2);
        assert!(!carousel.select(2));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn degenerate_lists_never_advance() {
        let mut empty = Carousel::new(0);
        assert!(empty.is_empty());
        assert!(!empty.should_run());
        assert_eq!(empty.tick(), 0);

        let mut single = Carousel::new(1);
        assert!(!single.should_run());
        assert_eq!(single.tick(), 0);
    }

    #[test]
    fn shrinking_wraps_index_into_range() {
        let mut carousel = Carousel::new(5);
        carousel.select(4);
        carousel.resize(3);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.len(), 3);

        carousel.select(2);
        carousel.resize(6);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn outgoing_slide_stays_until_exit_finishes() {
        let phase = SlidePhase::Showing(0).follow(1);
        assert!(phase.is_leaving());
        assert_eq!(phase.displayed(), 0);

        let shown = phase.exit_finished();
        assert_eq!(shown, SlidePhase::Showing(1));
        assert_eq!(shown.displayed(), 1);
    }

    #[test]
    fn retargeting_during_exit_keeps_outgoing_slide() {
        let phase = SlidePhase::Showing(0).follow(1).follow(2);
        assert_eq!(phase, SlidePhase::Leaving { from: 0, to: 2 });
        assert_eq!(phase.exit_finished(), SlidePhase::Showing(2));
    }

    #[test]
    fn returning_to_outgoing_slide_cancels_exit() {
        let phase = SlidePhase::Showing(2).follow(0).follow(2);
        assert_eq!(phase, SlidePhase::Showing(2));
        assert_eq!(phase.exit_finished(), SlidePhase::Showing(2));
    }

    #[test]
    fn same_index_is_not_a_transition() {
        assert_eq!(SlidePhase::Showing(1).follow(1), SlidePhase::Showing(1));
    }

    proptest! {
        #[test]
        fn ticks_wrap_modulo_len(len in 1usize..50, ticks in 0usize..500) {
            let mut carousel = Carousel::new(len);
            for _ in 0..ticks {
                carousel.tick();
            }
            prop_assert_eq!(carousel.index(), ticks % len);
        }
    }
}
