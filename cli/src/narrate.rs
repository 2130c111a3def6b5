use engine::{EncounterOutcome, EncounterReport, RoundResult, TeleportOutcome, Warrior};

pub fn round_lines(round: &RoundResult) -> Vec<String> {
    let mut lines = Vec::new();
    if round.dodged {
        lines.push(format!("{} dodged the attack", round.defender));
    }
    lines.push(format!(
        "{} attacks {} and deals {} damage",
        round.attacker, round.defender, round.damage
    ));
    lines.push(format!(
        "{} has {} health",
        round.defender, round.defender_health
    ));
    if round.defender_died {
        lines.push(format!(
            "{} has died and {} is victorious",
            round.defender, round.attacker
        ));
    }
    lines
}

pub fn outcome_line(report: &EncounterReport) -> String {
    match report.outcome {
        EncounterOutcome::Stalemate => {
            format!("No winner after {} exchanges", report.exchanges)
        }
        _ => "Game Over".to_string(),
    }
}

pub fn survivor_line(first: &Warrior, second: &Warrior) -> String {
    match (first.health() > 0, second.health() > 0) {
        (true, true) => "Draw! Both warriors survive.".to_string(),
        (true, false) => format!("{} is the winner!", first.name()),
        (false, true) => format!("{} is the winner!", second.name()),
        (false, false) => "Both warriors have fallen.".to_string(),
    }
}

pub fn teleport_line(name: &str, attempt: &engine::Result<TeleportOutcome>) -> String {
    match attempt {
        Ok(outcome) => format!("{}'s teleport attempt: {}", name, outcome),
        Err(e) => format!("{}'s teleport attempt: {}", name, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{CombatError, Combatant};

    fn round(dodged: bool, died: bool) -> RoundResult {
        RoundResult {
            attacker: "Thor".into(),
            defender: "Loki".into(),
            attack_roll: 90,
            block_roll: if dodged { engine::DODGE_SENTINEL } else { 30 },
            dodged,
            damage: if dodged { 0 } else { 60 },
            defender_health: if died { -10 } else { 740 },
            defender_died: died,
        }
    }

    #[test]
    fn plain_round_reads_as_attack_then_health() {
        assert_eq!(
            round_lines(&round(false, false)),
            ["Thor attacks Loki and deals 60 damage", "Loki has 740 health"]
        );
    }

    #[test]
    fn dodge_and_death_are_announced() {
        let dodged = round_lines(&round(true, false));
        assert_eq!(dodged[0], "Loki dodged the attack");
        assert_eq!(dodged[1], "Thor attacks Loki and deals 0 damage");

        let fatal = round_lines(&round(false, true));
        assert_eq!(fatal.last().unwrap(), "Loki has died and Thor is victorious");
    }

    #[test]
    fn survivor_is_named() {
        let thor = Warrior::new("Thor", 10, 5, 5).unwrap();
        let mut loki = Warrior::new("Loki", 10, 5, 5).unwrap();
        assert_eq!(survivor_line(&thor, &loki), "Draw! Both warriors survive.");
        loki.apply_damage(10).unwrap();
        assert_eq!(survivor_line(&thor, &loki), "Thor is the winner!");
    }

    #[test]
    fn teleport_failures_are_readable() {
        assert_eq!(
            teleport_line("Loki", &Ok(TeleportOutcome::Failed)),
            "Loki's teleport attempt: Fails at Teleporting"
        );
        let err = Err(CombatError::IllegalState("Thor has no teleport strategy assigned".into()));
        assert_eq!(
            teleport_line("Thor", &err),
            "Thor's teleport attempt: illegal state: Thor has no teleport strategy assigned"
        );
    }
}
