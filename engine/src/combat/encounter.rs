use serde::Serialize;
use tracing::info;

use super::{CombatEngine, RoundResult};
use crate::dice::RandomSource;
use crate::error::{CombatError, Result};
use crate::warrior::Combatant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EncounterState {
    InProgress,
    FirstDefeated,
    SecondDefeated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EncounterOutcome {
    FirstDefeated,
    SecondDefeated,
    /// The exchange cap ran out with both warriors standing.
    Stalemate,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct EncounterReport {
    pub outcome: EncounterOutcome,
    pub exchanges: u32,
    pub winner: Option<String>,
    pub loser: Option<String>,
    pub rounds: Vec<RoundResult>,
}

impl EncounterReport {
    pub fn dodges(&self) -> usize {
        self.rounds.iter().filter(|r| r.dodged).count()
    }
}

impl<R: RandomSource> CombatEngine<R> {
    /// Fight until one side falls: `first` attacks `second`, then `second`
    /// attacks `first`, repeated. `on_round` sees every round as it resolves.
    pub fn resolve_encounter(
        &mut self,
        first: &mut dyn Combatant,
        second: &mut dyn Combatant,
        mut on_round: impl FnMut(&RoundResult),
    ) -> Result<EncounterReport> {
        for side in [&*first, &*second] {
            if !side.is_alive() {
                return Err(CombatError::invalid(format!(
                    "{} cannot start an encounter while defeated",
                    side.warrior().name()
                )));
            }
        }

        let mut state = EncounterState::InProgress;
        let mut rounds = Vec::new();
        let mut exchanges = 0u32;

        while state == EncounterState::InProgress && exchanges < self.max_exchanges {
            exchanges += 1;

            let round = self.resolve_round(&*first, &mut *second)?;
            on_round(&round);
            let died = round.defender_died;
            rounds.push(round);
            if died {
                state = EncounterState::SecondDefeated;
                break;
            }

            let round = self.resolve_round(&*second, &mut *first)?;
            on_round(&round);
            let died = round.defender_died;
            rounds.push(round);
            if died {
                state = EncounterState::FirstDefeated;
            }
        }

        let (outcome, winner, loser) = match state {
            EncounterState::SecondDefeated => (
                EncounterOutcome::SecondDefeated,
                Some(first.warrior().name().to_string()),
                Some(second.warrior().name().to_string()),
            ),
            EncounterState::FirstDefeated => (
                EncounterOutcome::FirstDefeated,
                Some(second.warrior().name().to_string()),
                Some(first.warrior().name().to_string()),
            ),
            EncounterState::InProgress => (EncounterOutcome::Stalemate, None, None),
        };

        info!(
            ?outcome,
            exchanges,
            rounds = rounds.len(),
            "encounter finished"
        );
        Ok(EncounterReport {
            outcome,
            exchanges,
            winner,
            loser,
            rounds,
        })
    }
}
