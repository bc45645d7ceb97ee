use crate::model::Side;

/// The side input that most recently gained focus.
///
/// Blur never clears it: the Delete control always edits the last field the
/// player touched, even after focus has moved to the button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusTracker {
    current: Option<Side>,
}

impl FocusTracker {
    pub fn focus(&mut self, side: Side) {
        self.current = Some(side);
    }

    pub fn current(&self) -> Option<Side> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unset() {
        assert_eq!(FocusTracker::default().current(), None);
    }

    #[test]
    fn keeps_only_the_latest_side() {
        let mut tracker = FocusTracker::default();
        tracker.focus(Side::Top);
        tracker.focus(Side::Left);
        assert_eq!(tracker.current(), Some(Side::Left));
    }
}
