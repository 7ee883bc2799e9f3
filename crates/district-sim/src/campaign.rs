//! Mission state machine.
//!
//! Stored in `SimulationEngine` next to the ECS world, not as entities.
//! The cursor only moves forward, one objective per step, and only when the
//! active objective's predicate holds.

use district_core::objectives::{Objective, WorldView};

/// Reported when the cursor advances.
#[derive(Debug, Clone, PartialEq)]
pub enum MissionTransition {
    /// A new objective became active.
    Advanced { cursor: usize },
    /// The last objective was completed.
    Completed,
}

/// An ordered list of objectives and the cursor into it.
#[derive(Debug, Clone, Default)]
pub struct Campaign {
    objectives: Vec<Objective>,
    cursor: usize,
}

impl Campaign {
    pub fn new(objectives: Vec<Objective>) -> Self {
        Self {
            objectives,
            cursor: 0,
        }
    }

    /// Evaluate the active objective and advance at most once.
    pub fn step(&mut self, view: &WorldView<'_>) -> Option<MissionTransition> {
        let active = self.objectives.get(self.cursor)?;
        if !active.condition.holds(view) {
            return None;
        }

        self.cursor += 1;
        if self.is_complete() {
            Some(MissionTransition::Completed)
        } else {
            Some(MissionTransition::Advanced {
                cursor: self.cursor,
            })
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.objectives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objectives.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.objectives.len()
    }

    /// The objective currently being pursued, `None` once complete.
    pub fn active(&self) -> Option<&Objective> {
        self.objectives.get(self.cursor)
    }

    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }
}

#[cfg(test)]
mod tests {
    use district_core::objectives::ObjectiveCondition;

    use super::*;

    fn campaign() -> Campaign {
        Campaign::new(vec![
            Objective::new(
                "A",
                "reach 0",
                ObjectiveCondition::ReachCheckpoint {
                    checkpoint: 0,
                    radius: 2.5,
                },
            ),
            Objective::new("B", "clear", ObjectiveCondition::AllEnemiesDefeated),
        ])
    }

    fn view(checkpoint_distances: &[f32], live: usize) -> WorldView<'_> {
        WorldView {
            checkpoint_distances,
            live_enemies: live,
            total_enemies: 2,
        }
    }

    #[test]
    fn test_advances_only_when_active_holds() {
        let mut campaign = campaign();

        assert_eq!(campaign.step(&view(&[10.0], 0)), None);
        assert_eq!(campaign.cursor(), 0);

        assert_eq!(
            campaign.step(&view(&[0.0], 0)),
            Some(MissionTransition::Advanced { cursor: 1 })
        );
    }

    #[test]
    fn test_single_increment_per_step() {
        // Both predicates hold at once; only one advance per step.
        let mut campaign = campaign();
        let all_done = view(&[0.0], 0);

        campaign.step(&all_done);
        assert_eq!(campaign.cursor(), 1);
        assert_eq!(campaign.step(&all_done), Some(MissionTransition::Completed));
        assert_eq!(campaign.cursor(), 2);
        assert!(campaign.is_complete());
        assert!(campaign.active().is_none());
    }

    #[test]
    fn test_later_objectives_wait_for_earlier_ones() {
        let mut campaign = campaign();
        // Objective B holds, A does not.
        for _ in 0..5 {
            assert_eq!(campaign.step(&view(&[50.0], 0)), None);
        }
        assert_eq!(campaign.cursor(), 0);
    }

    #[test]
    fn test_complete_campaign_is_inert() {
        let mut campaign = campaign();
        let all_done = view(&[0.0], 0);
        campaign.step(&all_done);
        campaign.step(&all_done);
        for _ in 0..10 {
            assert_eq!(campaign.step(&all_done), None);
            assert_eq!(campaign.cursor(), campaign.len());
        }
    }

    #[test]
    fn test_empty_campaign_starts_complete() {
        let mut campaign = Campaign::new(Vec::new());
        assert!(campaign.is_empty());
        assert!(campaign.is_complete());
        assert_eq!(campaign.step(&view(&[], 0)), None);
        assert_eq!(campaign.cursor(), 0);
    }
}
