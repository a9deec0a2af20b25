use crate::domain::model::Timings;
use crate::domain::view::Patch;
use std::time::{Duration, Instant};

/// Keys the navigator reacts to. Escape is a modal concern and never
/// reaches this component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
}

/// Single-page scroll-scene controller. Exactly one section (and its
/// indicator) is active at any time; transitions hold a cool-down lock,
/// and wheel input is rate-limited on top of that lock.
pub struct SectionNavigator {
    current: usize,
    count: usize,
    locked_until: Option<Instant>,
    last_wheel: Option<Instant>,
    cooldown: Duration,
    wheel_threshold: Duration,
}

impl SectionNavigator {
    pub fn new(count: usize, timings: &Timings) -> Self {
        Self {
            current: 0,
            count,
            locked_until: None,
            last_wheel: None,
            cooldown: timings.transition_cooldown,
            wheel_threshold: timings.wheel_threshold,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Initial activation of section 0, emitted once when the engine
    /// takes over the page.
    pub fn bootstrap(&self) -> Vec<Patch> {
        vec![
            Patch::SectionActive { index: 0 },
            Patch::FooterCompact(false),
            Patch::DecorLayer(true),
        ]
    }

    /// Transitions to `index`. No-ops on the current index, out-of-range
    /// indices, and while the cool-down lock is held.
    pub fn go_to(&mut self, index: usize, now: Instant) -> Vec<Patch> {
        if index >= self.count || index == self.current {
            return Vec::new();
        }
        if let Some(until) = self.locked_until {
            if now < until {
                return Vec::new();
            }
        }

        let previous = self.current;
        self.current = index;
        self.locked_until = Some(now + self.cooldown);

        vec![
            Patch::SectionInactive { index: previous },
            Patch::FooterCompact(index != 0),
            Patch::DecorLayer(index == 0),
            Patch::SectionActive { index },
        ]
    }

    /// Wheel input steps one section in the scroll direction. The rate
    /// limit stamps every accepted wheel event, including ones that end
    /// up at a bound, matching how the page always resets its timer.
    pub fn wheel(&mut self, delta_y: f64, now: Instant) -> Vec<Patch> {
        if let Some(last) = self.last_wheel {
            if now.duration_since(last) < self.wheel_threshold {
                return Vec::new();
            }
        }
        self.last_wheel = Some(now);

        if delta_y > 0.0 && self.current + 1 < self.count {
            self.go_to(self.current + 1, now)
        } else if delta_y < 0.0 && self.current > 0 {
            self.go_to(self.current - 1, now)
        } else {
            Vec::new()
        }
    }

    /// Arrow/Page keys step one section, clamped at the bounds. An empty
    /// result means the key was not consumed and the host should let the
    /// default action through.
    pub fn key(&mut self, key: NavKey, now: Instant) -> Vec<Patch> {
        match key {
            NavKey::ArrowDown | NavKey::PageDown if self.current + 1 < self.count => {
                self.go_to(self.current + 1, now)
            }
            NavKey::ArrowUp | NavKey::PageUp if self.current > 0 => {
                self.go_to(self.current - 1, now)
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator(count: usize) -> SectionNavigator {
        SectionNavigator::new(count, &Timings::default())
    }

    #[test]
    fn transition_activates_exactly_one_section() {
        let mut nav = navigator(4);
        let t0 = Instant::now();

        let patches = nav.go_to(2, t0);
        assert_eq!(
            patches,
            vec![
                Patch::SectionInactive { index: 0 },
                Patch::FooterCompact(true),
                Patch::DecorLayer(false),
                Patch::SectionActive { index: 2 },
            ]
        );
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn same_index_and_out_of_range_are_noops() {
        let mut nav = navigator(3);
        let t0 = Instant::now();

        assert!(nav.go_to(0, t0).is_empty());
        assert!(nav.go_to(3, t0).is_empty());
        assert!(nav.go_to(99, t0).is_empty());
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn cooldown_blocks_reentrant_transitions() {
        let mut nav = navigator(4);
        let t0 = Instant::now();

        assert!(!nav.go_to(1, t0).is_empty());
        assert!(nav.go_to(2, t0 + Duration::from_millis(100)).is_empty());
        assert!(nav.go_to(2, t0 + Duration::from_millis(799)).is_empty());
        assert_eq!(nav.current(), 1);

        let patches = nav.go_to(2, t0 + Duration::from_millis(800));
        assert!(!patches.is_empty());
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn returning_to_first_section_restores_footer_and_decor() {
        let mut nav = navigator(2);
        let t0 = Instant::now();

        nav.go_to(1, t0);
        let patches = nav.go_to(0, t0 + Duration::from_secs(1));
        assert!(patches.contains(&Patch::FooterCompact(false)));
        assert!(patches.contains(&Patch::DecorLayer(true)));
    }

    #[test]
    fn wheel_steps_by_direction() {
        let mut nav = navigator(3);
        let t0 = Instant::now();

        assert!(!nav.wheel(5.0, t0).is_empty());
        assert_eq!(nav.current(), 1);

        let t1 = t0 + Duration::from_secs(1);
        assert!(!nav.wheel(-3.0, t1).is_empty());
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn wheel_is_rate_limited_independently_of_the_lock() {
        let mut nav = navigator(5);
        let t0 = Instant::now();

        assert!(!nav.wheel(1.0, t0).is_empty());
        // Past the rate limit but still inside the transition lock.
        assert!(nav.wheel(1.0, t0 + Duration::from_millis(750)).is_empty());
        assert_eq!(nav.current(), 1);
    }

    #[test]
    fn wheel_at_bound_still_stamps_the_rate_limit() {
        let mut nav = navigator(3);
        let t0 = Instant::now();

        // Scrolling up at section 0 goes nowhere but consumes the window.
        assert!(nav.wheel(-1.0, t0).is_empty());
        assert!(nav.wheel(1.0, t0 + Duration::from_millis(100)).is_empty());
        assert!(!nav.wheel(1.0, t0 + Duration::from_millis(700)).is_empty());
    }

    #[test]
    fn keys_clamp_at_bounds() {
        let mut nav = navigator(2);
        let t0 = Instant::now();

        assert!(nav.key(NavKey::ArrowUp, t0).is_empty());
        assert!(!nav.key(NavKey::PageDown, t0).is_empty());
        assert_eq!(nav.current(), 1);
        assert!(nav
            .key(NavKey::ArrowDown, t0 + Duration::from_secs(1))
            .is_empty());
    }
}
