use crate::domain::model::PostId;
use crate::domain::view::{CardPhase, Patch};
use std::time::{Duration, Instant};

/// A blog card as the filter sees it: the post it opens and its joined
/// category string (e.g. `"rust, web"`).
#[derive(Debug, Clone)]
pub struct Card {
    pub post_id: PostId,
    pub categories: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Visible,
    Fading(Instant),
    Collapsed,
}

/// Client-side category filter over the static card list. Matching is a
/// raw substring test on the joined category string, so `"go"` matches a
/// card tagged `"diego"`. That is the page's contract, partial-word false
/// positives included.
pub struct CardFilter {
    chips: Vec<String>,
    cards: Vec<(Card, Phase)>,
    active_chip: usize,
    collapse_delay: Duration,
}

impl CardFilter {
    pub fn new(chips: Vec<String>, cards: Vec<Card>, collapse_delay: Duration) -> Self {
        Self {
            chips,
            cards: cards.into_iter().map(|c| (c, Phase::Visible)).collect(),
            active_chip: 0,
            collapse_delay,
        }
    }

    pub fn active_chip(&self) -> usize {
        self.active_chip
    }

    pub fn post_id(&self, card: usize) -> Option<PostId> {
        self.cards.get(card).map(|(c, _)| c.post_id)
    }

    /// Marks the chip exclusive-active and re-evaluates every card.
    /// Non-matching cards start fading and collapse later; a card that
    /// matches again before its deadline returns to `Visible` and the
    /// pending collapse is abandoned.
    pub fn select(&mut self, chip: usize, now: Instant) -> Vec<Patch> {
        let Some(filter) = self.chips.get(chip) else {
            return Vec::new();
        };
        self.active_chip = chip;

        let mut patches = vec![Patch::ChipActive { index: chip }];
        for (index, (card, phase)) in self.cards.iter_mut().enumerate() {
            let matched = filter == "all" || card.categories.contains(filter.as_str());
            if matched {
                *phase = Phase::Visible;
                patches.push(Patch::Card {
                    index,
                    phase: CardPhase::Visible,
                });
            } else {
                match *phase {
                    Phase::Visible => {
                        *phase = Phase::Fading(now + self.collapse_delay);
                        patches.push(Patch::Card {
                            index,
                            phase: CardPhase::FadingOut,
                        });
                    }
                    // Already on its way out or gone; the earlier deadline
                    // stands.
                    Phase::Fading(_) | Phase::Collapsed => {}
                }
            }
        }
        patches
    }

    /// Collapses cards whose fade deadline has passed and that are still
    /// meant to be hidden. The phase check is the guard against the
    /// hide-vs-re-show race.
    pub fn sweep(&mut self, now: Instant) -> Vec<Patch> {
        let mut patches = Vec::new();
        for (index, (_, phase)) in self.cards.iter_mut().enumerate() {
            if let Phase::Fading(deadline) = *phase {
                if now >= deadline {
                    *phase = Phase::Collapsed;
                    patches.push(Patch::Card {
                        index,
                        phase: CardPhase::Collapsed,
                    });
                }
            }
        }
        patches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> CardFilter {
        CardFilter::new(
            vec!["all".to_string(), "go".to_string(), "rust".to_string()],
            vec![
                Card {
                    post_id: 1,
                    categories: "rust, web".to_string(),
                },
                Card {
                    post_id: 2,
                    categories: "diego, travel".to_string(),
                },
            ],
            Duration::from_millis(300),
        )
    }

    #[test]
    fn substring_match_includes_partial_words() {
        let mut cards = filter();
        // "go" matches "diego": the documented false positive.
        let patches = cards.select(1, Instant::now());
        assert!(patches.contains(&Patch::Card {
            index: 1,
            phase: CardPhase::Visible
        }));
        assert!(patches.contains(&Patch::Card {
            index: 0,
            phase: CardPhase::FadingOut
        }));
    }

    #[test]
    fn all_chip_shows_everything() {
        let mut cards = filter();
        let t0 = Instant::now();
        cards.select(2, t0);
        let patches = cards.select(0, t0);
        assert!(patches.contains(&Patch::Card {
            index: 0,
            phase: CardPhase::Visible
        }));
        assert!(patches.contains(&Patch::Card {
            index: 1,
            phase: CardPhase::Visible
        }));
    }

    #[test]
    fn chip_activation_is_exclusive() {
        let mut cards = filter();
        let patches = cards.select(2, Instant::now());
        assert_eq!(patches[0], Patch::ChipActive { index: 2 });
        assert_eq!(cards.active_chip(), 2);
    }

    #[test]
    fn collapse_fires_after_delay_when_still_hidden() {
        let mut cards = filter();
        let t0 = Instant::now();

        cards.select(2, t0); // card 1 does not match "rust"
        assert!(cards.sweep(t0 + Duration::from_millis(100)).is_empty());

        let patches = cards.sweep(t0 + Duration::from_millis(300));
        assert_eq!(
            patches,
            vec![Patch::Card {
                index: 1,
                phase: CardPhase::Collapsed
            }]
        );
    }

    #[test]
    fn reshow_before_deadline_cancels_collapse() {
        let mut cards = filter();
        let t0 = Instant::now();

        cards.select(2, t0);
        // Back to "all" before the collapse deadline.
        cards.select(0, t0 + Duration::from_millis(100));

        assert!(cards.sweep(t0 + Duration::from_millis(400)).is_empty());
    }

    #[test]
    fn unknown_chip_is_a_noop() {
        let mut cards = filter();
        assert!(cards.select(9, Instant::now()).is_empty());
        assert_eq!(cards.active_chip(), 0);
    }
}
