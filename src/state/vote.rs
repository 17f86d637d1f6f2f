use serde::{Deserialize, Serialize};

/// Result of a finished swipe, or of a tap on one of the vote buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureOutcome {
    #[default]
    None,
    Boost,
    Deboost,
}

/// What the viewer should be told after a vote change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteNotice {
    Boosted,
    BoostRemoved,
    Deboosted,
}

impl VoteNotice {
    pub fn message(&self) -> &'static str {
        match self {
            VoteNotice::Boosted => "Boosted",
            VoteNotice::BoostRemoved => "Boost removed",
            VoteNotice::Deboosted => "Deboosted",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteState {
    /// Displayed tally; may go negative.
    pub count: i64,
    pub boosted: bool,
}

impl VoteState {
    pub fn new(count: i64) -> Self {
        Self {
            count,
            boosted: false,
        }
    }

    /// Applies a commit action. Boost toggles; Deboost always takes one off
    /// and clears the boost, even when the item was not boosted.
    pub fn apply(&mut self, outcome: GestureOutcome) -> Option<VoteNotice> {
        match outcome {
            GestureOutcome::None => None,
            GestureOutcome::Boost if self.boosted => {
                self.count = self.count.saturating_sub(1);
                self.boosted = false;
                Some(VoteNotice::BoostRemoved)
            }
            GestureOutcome::Boost => {
                self.count = self.count.saturating_add(1);
                self.boosted = true;
                Some(VoteNotice::Boosted)
            }
            GestureOutcome::Deboost => {
                self.count = self.count.saturating_sub(1);
                self.boosted = false;
                Some(VoteNotice::Deboosted)
            }
        }
    }

    /// Notice `apply` would produce, without changing anything.
    pub fn preview(&self, outcome: GestureOutcome) -> Option<VoteNotice> {
        let mut copy = *self;
        copy.apply(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boost_toggles() {
        let mut v = VoteState::new(5);
        assert_eq!(v.apply(GestureOutcome::Boost), Some(VoteNotice::Boosted));
        assert_eq!(v, VoteState { count: 6, boosted: true });
        assert_eq!(v.apply(GestureOutcome::Boost), Some(VoteNotice::BoostRemoved));
        assert_eq!(v, VoteState { count: 5, boosted: false });
    }

    #[test]
    fn deboost_is_unconditional() {
        let mut boosted = VoteState { count: 5, boosted: true };
        assert_eq!(boosted.apply(GestureOutcome::Deboost), Some(VoteNotice::Deboosted));
        assert_eq!(boosted, VoteState { count: 4, boosted: false });

        let mut plain = VoteState { count: 5, boosted: false };
        plain.apply(GestureOutcome::Deboost);
        assert_eq!(plain, VoteState { count: 4, boosted: false });
    }

    #[test]
    fn repeated_deboosts_go_negative() {
        let mut v = VoteState::new(1);
        for _ in 0..3 {
            v.apply(GestureOutcome::Deboost);
        }
        assert_eq!(v.count, -2);
        assert!(!v.boosted);
    }

    #[test]
    fn tally_saturates_at_the_extremes() {
        let mut low = VoteState { count: i64::MIN, boosted: false };
        assert_eq!(low.apply(GestureOutcome::Deboost), Some(VoteNotice::Deboosted));
        assert_eq!(low, VoteState { count: i64::MIN, boosted: false });

        let mut high = VoteState::new(i64::MAX);
        assert_eq!(high.apply(GestureOutcome::Boost), Some(VoteNotice::Boosted));
        assert_eq!(high, VoteState { count: i64::MAX, boosted: true });
        high.apply(GestureOutcome::Boost);
        assert_eq!(high, VoteState { count: i64::MAX - 1, boosted: false });
    }

    #[test]
    fn none_changes_nothing() {
        let mut v = VoteState { count: 9, boosted: true };
        assert_eq!(v.apply(GestureOutcome::None), None);
        assert_eq!(v, VoteState { count: 9, boosted: true });
    }

    #[test]
    fn preview_leaves_state_alone() {
        let v = VoteState { count: 3, boosted: true };
        assert_eq!(v.preview(GestureOutcome::Boost), Some(VoteNotice::BoostRemoved));
        assert_eq!(v, VoteState { count: 3, boosted: true });
    }

    #[test]
    fn notice_messages() {
        assert_eq!(VoteNotice::Boosted.message(), "Boosted");
        assert_eq!(VoteNotice::BoostRemoved.message(), "Boost removed");
        assert_eq!(VoteNotice::Deboosted.message(), "Deboosted");
    }
}
