//! One-shot scroll reveal: an element fades up the first time it enters the
//! viewport and stays visible after that.

/// Upper bound on a staggered reveal delay so long lists never lag behind the
/// scroll position.
pub const MAX_STAGGER_MS: u32 = 600;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn revealed() -> Self {
        Self { revealed: true }
    }

    pub fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Records one intersection report. Returns `true` only for the report that
    /// flips the latch; leaving the viewport afterwards changes nothing.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
        .min(MAX_STAGGER_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hidden_until_first_intersection() {
        let mut latch = RevealLatch::default();
        assert!(!latch.is_revealed());
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());

        assert!(latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn leaving_viewport_keeps_element_visible() {
        let mut latch = RevealLatch::default();
        latch.observe(true);
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
        assert!(latch.is_revealed());
    }

    #[test]
    fn reduced_motion_starts_revealed() {
        let mut latch = RevealLatch::revealed();
        assert!(latch.is_revealed());
        assert!(!latch.observe(true));
    }

    #[test]
    fn stagger_grows_per_item_and_caps() {
        assert_eq!(stagger_delay_ms(0, 80), 0);
        assert_eq!(stagger_delay_ms(3, 80), 240);
        assert_eq!(stagger_delay_ms(50, 80), MAX_STAGGER_MS);
        assert_eq!(stagger_delay_ms(usize::MAX, 80), MAX_STAGGER_MS);
    }

    proptest! {
        #[test]
        fn latch_flips_at_most_once(reports in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut latch = RevealLatch::default();
            let flips = reports.iter().filter(|&&seen| latch.observe(seen)).count();

            prop_assert_eq!(flips, usize::from(reports.contains(&true)));
            prop_assert_eq!(latch.is_revealed(), reports.contains(&true));
        }
    }
}
