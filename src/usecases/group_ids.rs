//! Wall-clock based group id allocation.

use chrono::Utc;

use crate::domain::group::GroupId;

use super::contracts::GroupIdSource;

/// Issues `g-<unix millis>` ids, bumping past the last issued value when the
/// clock has not advanced (or went backwards).
#[derive(Debug, Default)]
pub struct ClockGroupIds {
    last_issued: Option<i64>,
}

impl ClockGroupIds {
    fn next_after(&mut self, now_ms: i64) -> GroupId {
        let value = match self.last_issued {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last_issued = Some(value);
        GroupId::new(format!("g-{value}"))
    }
}

impl GroupIdSource for ClockGroupIds {
    fn next_id(&mut self) -> GroupId {
        self.next_after(Utc::now().timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn uses_clock_value_when_it_advances() {
        let mut ids = ClockGroupIds::default();

        assert_eq!(ids.next_after(1_000), GroupId::new("g-1000"));
        assert_eq!(ids.next_after(2_500), GroupId::new("g-2500"));
    }

    #[test]
    fn bumps_when_clock_stalls_or_rewinds() {
        let mut ids = ClockGroupIds::default();

        ids.next_after(1_000);
        assert_eq!(ids.next_after(1_000), GroupId::new("g-1001"));
        assert_eq!(ids.next_after(900), GroupId::new("g-1002"));
    }

    #[test]
    fn rapid_allocation_never_repeats() {
        let mut ids = ClockGroupIds::default();
        let issued: HashSet<_> = (0..100).map(|_| ids.next_id()).collect();

        assert_eq!(issued.len(), 100);
    }
}
