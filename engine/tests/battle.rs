use dungeon_engine::{resolve_battle, BattleError, CombatUnit, Dice, Difficulty, Element, Verdict};
use proptest::prelude::*;

fn unit(name: &str, damage: i32, hp: i32, element: Element) -> CombatUnit {
    CombatUnit::new(name, damage, hp, element, false)
}

fn run(player: Vec<CombatUnit>, enemy: Vec<CombatUnit>) -> dungeon_engine::BattleOutcome {
    let mut dice = Dice::from_seed(0);
    resolve_battle(player, enemy, Difficulty::NONE, &mut dice).expect("battle resolves")
}

#[test]
fn strong_first_blow_ends_the_battle() {
    let out = run(
        vec![unit("A", 10, 20, Element::Fire)],
        vec![unit("B", 6, 15, Element::Earth)],
    );
    assert_eq!(out.verdict, Verdict::PlayerWins);
    assert_eq!(out.winning_attacker.as_deref(), Some("A"));
    assert_eq!(out.log, ["1.kor;jatekos;tamad;A;20;B;0"]);
    assert_eq!(out.rounds, 1);
    assert!(out.enemy_remaining.is_empty());
    assert_eq!(out.player_remaining[0].hit_points(), 20);
}

#[test]
fn replacement_enemy_does_not_counter_on_entry() {
    let out = run(
        vec![unit("Hero", 10, 20, Element::Fire)],
        vec![
            unit("First", 6, 15, Element::Earth),
            unit("Second", 6, 30, Element::Water),
        ],
    );
    assert_eq!(
        out.log,
        [
            "1.kor;jatekos;tamad;Hero;20;First;0",
            "2.kor;jatekos;tamad;Hero;20;Second;10",
            "2.kor;kazamata;tamad;Second;3;Hero;17",
            "3.kor;jatekos;tamad;Hero;20;Second;0",
        ]
    );
    assert_eq!(out.verdict, Verdict::PlayerWins);
    assert_eq!(out.winning_attacker.as_deref(), Some("Hero"));
}

#[test]
fn lone_unit_falls_before_landing_a_kill() {
    let out = run(
        vec![unit("Frail", 2, 3, Element::Water)],
        vec![unit("Brute", 10, 40, Element::Air)],
    );
    assert_eq!(out.verdict, Verdict::PlayerLoses);
    assert!(out.winning_attacker.is_none());
    assert_eq!(
        out.log,
        ["1.kor;jatekos;tamad;Frail;1;Brute;39", "1.kor;kazamata;tamad;Brute;20;Frail;0"]
    );
    assert!(out.player_remaining.is_empty());
    assert_eq!(out.enemy_remaining.len(), 1);
}

#[test]
fn next_player_unit_steps_in_and_winner_is_the_last_attacker() {
    let out = run(
        vec![unit("Scout", 2, 2, Element::Air), unit("Knight", 8, 30, Element::Earth)],
        vec![unit("Imp", 4, 12, Element::Fire)],
    );
    // Scout: air vs fire is weak (1). Imp: fire vs air is weak (2), Scout drops.
    // Knight: earth vs fire weak (4); Imp: fire vs earth strong (8).
    assert_eq!(
        out.log,
        [
            "1.kor;jatekos;tamad;Scout;1;Imp;11",
            "1.kor;kazamata;tamad;Imp;2;Scout;0",
            "2.kor;jatekos;tamad;Knight;4;Imp;7",
            "2.kor;kazamata;tamad;Imp;8;Knight;22",
            "3.kor;jatekos;tamad;Knight;4;Imp;3",
            "3.kor;kazamata;tamad;Imp;8;Knight;14",
            "4.kor;jatekos;tamad;Knight;4;Imp;0",
        ]
    );
    assert_eq!(out.winning_attacker.as_deref(), Some("Knight"));
    assert_eq!(out.player_remaining.len(), 1);
    assert_eq!(out.player_remaining[0].hit_points(), 14);
}

#[test]
fn leader_fights_last() {
    let out = run(
        vec![unit("Hero", 50, 100, Element::Air)],
        vec![
            unit("Grunt", 2, 10, Element::Water),
            CombatUnit::new("Boss", 4, 10, Element::Earth, true),
        ],
    );
    assert_eq!(
        out.log,
        ["1.kor;jatekos;tamad;Hero;100;Grunt;0", "2.kor;jatekos;tamad;Hero;100;Boss;0"]
    );
}

#[test]
fn empty_queues_are_rejected_before_any_round() {
    let mut dice = Dice::from_seed(1);
    assert_eq!(
        resolve_battle(vec![unit("A", 5, 5, Element::Air)], vec![], Difficulty::NONE, &mut dice)
            .unwrap_err(),
        BattleError::EmptyEnemyQueue
    );
    assert_eq!(
        resolve_battle(vec![], vec![unit("B", 5, 5, Element::Air)], Difficulty::NONE, &mut dice)
            .unwrap_err(),
        BattleError::EmptyPlayerQueue
    );
}

#[test]
fn seeded_hard_battles_replay_identically() {
    let player = vec![unit("P1", 9, 30, Element::Fire), unit("P2", 7, 25, Element::Water)];
    let enemy = vec![unit("E1", 8, 28, Element::Air), unit("E2", 6, 35, Element::Earth)];
    let mut a = Dice::from_seed(2024);
    let mut b = Dice::from_seed(2024);
    let first = resolve_battle(player.clone(), enemy.clone(), Difficulty::new(8), &mut a).unwrap();
    let second = resolve_battle(player, enemy, Difficulty::new(8), &mut b).unwrap();
    assert_eq!(first.log, second.log);
    assert_eq!(first.verdict, second.verdict);
}

fn any_element() -> impl Strategy<Value = Element> {
    prop_oneof![
        Just(Element::Air),
        Just(Element::Earth),
        Just(Element::Fire),
        Just(Element::Water),
    ]
}

fn any_unit() -> impl Strategy<Value = CombatUnit> {
    (0i32..=120, 0i32..=120, any_element(), any::<bool>())
        .prop_map(|(d, h, e, l)| CombatUnit::new("U", d, h, e, l))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn every_battle_ends_with_one_side_empty(
        player in prop::collection::vec(any_unit(), 1..6),
        enemy in prop::collection::vec(any_unit(), 1..6),
        level in 0i64..=10,
        seed in any::<u64>(),
    ) {
        let attacks_cap = (player.len() + enemy.len()) * 2 * 100;
        let mut dice = Dice::from_seed(seed);
        let out = resolve_battle(player, enemy, Difficulty::new(level), &mut dice).unwrap();
        prop_assert!(out.log.len() <= attacks_cap);
        match out.verdict {
            Verdict::PlayerWins => {
                prop_assert!(out.enemy_remaining.is_empty());
                prop_assert!(!out.player_remaining.is_empty());
                prop_assert!(out.winning_attacker.is_some());
                prop_assert!(out.log.last().unwrap().contains(";jatekos;"));
            }
            Verdict::PlayerLoses => {
                prop_assert!(out.player_remaining.is_empty());
                prop_assert!(!out.enemy_remaining.is_empty());
                prop_assert!(out.winning_attacker.is_none());
                prop_assert!(out.log.last().unwrap().contains(";kazamata;"));
            }
        }
        for u in out.player_remaining.iter().chain(&out.enemy_remaining) {
            prop_assert!(u.hit_points() > 0);
        }
    }
}
