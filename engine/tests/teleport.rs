use engine::{CombatError, Combatant, TeleportOutcome, TeleportStrategy, Warrior};

#[test]
fn strategies_map_to_fixed_outcomes() {
    assert_eq!(TeleportStrategy::Succeeds.teleport(), TeleportOutcome::Succeeded);
    assert_eq!(TeleportStrategy::Fails.teleport(), TeleportOutcome::Failed);
    assert_eq!(TeleportOutcome::Succeeded.label(), "Teleports Away");
    assert_eq!(TeleportOutcome::Failed.to_string(), "Fails at Teleporting");
}

#[test]
fn unassigned_strategy_is_illegal_state() {
    let thor = Warrior::new("Thor", 800, 130, 40).unwrap();
    assert!(matches!(thor.teleport(), Err(CombatError::IllegalState(_))));
}

#[test]
fn strategy_swaps_at_runtime() {
    let mut w = Warrior::new("Loki", 800, 85, 40).unwrap();

    w.set_teleport_strategy(TeleportStrategy::Fails);
    let out = w.teleport().unwrap();
    assert_eq!(out, TeleportOutcome::Failed);
    assert_eq!(out.label(), "Fails at Teleporting");

    w.set_teleport_strategy(TeleportStrategy::Succeeds);
    let out = w.teleport().unwrap();
    assert_eq!(out, TeleportOutcome::Succeeded);
    assert_eq!(out.label(), "Teleports Away");
    assert_eq!(w.teleport_strategy(), Some(TeleportStrategy::Succeeds));
}
