//! Implementation Planner: strategies -> time-boxed phased schedule
//!
//! One phase per selected strategy, laid out over a horizon-fixed
//! timeline with one unit of overlap between consecutive phases. Each
//! tactic becomes a milestone chained to its predecessor.

use crate::types::{ImplementationPlan, Milestone, Phase, SelectedStrategy, TimelineUnit};

/// Build the phased implementation plan for a selected strategy list.
///
/// Timeline constants are fixed by horizon: short_term runs 12 weeks,
/// medium_term 12 months, anything else (long_term included) 8 quarters.
pub fn build_plan(strategies: &[SelectedStrategy], horizon: &str) -> ImplementationPlan {
    let (timeline_unit, total_duration) = match horizon {
        "short_term" => (TimelineUnit::Weeks, 12),
        "medium_term" => (TimelineUnit::Months, 12),
        _ => (TimelineUnit::Quarters, 8),
    };

    let mut phases = Vec::new();
    if !strategies.is_empty() {
        // Divide the duration among strategies with some overlap
        let phase_duration = (total_duration / strategies.len() as u32 + 1).max(2);

        for (i, strategy) in strategies.iter().enumerate() {
            // Clamp keeps start <= end even when there are more phases
            // than the timeline can hold
            let start = (i as u32 * phase_duration)
                .saturating_sub(1)
                .min(total_duration);
            let end = (start + phase_duration).min(total_duration);

            let tactic_count = strategy.tactics.len() as u32;
            let key_milestones = strategy
                .tactics
                .iter()
                .enumerate()
                .map(|(j, tactic)| Milestone {
                    milestone: format!("Complete {}", tactic),
                    timeline: start + (j as u32 * (end - start)) / (tactic_count + 1),
                    dependencies: if j == 0 {
                        Vec::new()
                    } else {
                        vec![format!("Milestone {}", j)]
                    },
                })
                .collect();

            phases.push(Phase {
                phase: format!("Phase {}: {}", i + 1, strategy.strategy),
                start,
                end,
                key_milestones,
            });
        }
    }

    ImplementationPlan {
        timeline_unit,
        total_duration,
        phases,
    }
}
