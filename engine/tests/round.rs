use engine::{CombatEngine, CombatError, Combatant, Dice, ScriptedDice, Warrior};
use proptest::prelude::*;

#[test]
fn max_rolls_kill_fragile_defender() {
    let a = Warrior::new("A", 10, 5, 0).unwrap();
    let mut b = Warrior::new("B", 1, 0, 0).unwrap();
    let mut engine = CombatEngine::new(ScriptedDice::always_max());

    let round = engine.resolve_round(&a, &mut b).unwrap();
    assert_eq!(round.attacker, "A");
    assert_eq!(round.defender, "B");
    assert_eq!(round.attack_roll, 5);
    assert_eq!(round.block_roll, 0);
    assert_eq!(round.damage, 5);
    assert_eq!(round.defender_health, -4);
    assert!(round.defender_died);
    assert_eq!(b.health(), -4);
}

#[test]
fn block_above_attack_deals_nothing() {
    let a = Warrior::new("A", 10, 20, 1).unwrap();
    let mut b = Warrior::new("B", 10, 1, 30).unwrap();
    let mut engine = CombatEngine::new(ScriptedDice::from_ints(vec![4, 25]));

    let round = engine.resolve_round(&a, &mut b).unwrap();
    assert_eq!(round.damage, 0);
    assert_eq!(round.defender_health, 10);
    assert!(!round.defender_died);
}

#[test]
fn defeated_warriors_cannot_fight() {
    let mut a = Warrior::new("A", 10, 5, 5).unwrap();
    let mut b = Warrior::new("B", 10, 5, 5).unwrap();
    b.apply_damage(10).unwrap();
    let mut engine = CombatEngine::new(ScriptedDice::always_max());

    assert!(matches!(
        engine.resolve_round(&a, &mut b),
        Err(CombatError::InvalidArgument(_))
    ));
    assert!(matches!(
        engine.resolve_round(&b, &mut a),
        Err(CombatError::InvalidArgument(_))
    ));
    assert_eq!(a.health(), 10);
}

#[test]
fn round_display_marks_death_and_dodge() {
    let a = Warrior::new("A", 10, 5, 0).unwrap();
    let mut b = Warrior::new("B", 1, 0, 0).unwrap();
    let mut engine = CombatEngine::new(ScriptedDice::always_max());
    let round = engine.resolve_round(&a, &mut b).unwrap();
    assert_eq!(round.to_string(), "[ROUND] A → B atk=5 blk=0 dmg=5 hp=-4 DIED");
}

proptest! {
    #[test]
    fn damage_is_never_negative(
        seed in any::<u64>(),
        attack_max in 0i32..300,
        block_max in 0i32..300,
        health in 1i32..1_000,
    ) {
        let a = Warrior::new("A", 100, attack_max, block_max).unwrap();
        let mut b = Warrior::new("B", health, attack_max, block_max).unwrap();
        let mut engine = CombatEngine::new(Dice::from_seed(seed));

        let round = engine.resolve_round(&a, &mut b).unwrap();
        prop_assert!(round.damage >= 0);
        prop_assert_eq!(round.damage, (round.attack_roll - round.block_roll).max(0));
        prop_assert_eq!(round.defender_health, health - round.damage);
        prop_assert_eq!(round.defender_died, round.defender_health <= 0);
    }
}
