use dungeon_engine::api::{fight, simulate_many};
use dungeon_engine::content::{builtin_worlds, load_world};
use dungeon_engine::{Dice, Difficulty, Verdict};

#[test]
fn starter_world_loads() {
    assert!(builtin_worlds().contains_key("starter"));
    let session = load_world("starter").unwrap();
    assert_eq!(session.world.cards().count(), 6);
    assert_eq!(session.world.leaders().count(), 2);
    assert_eq!(session.world.dungeons().count(), 3);
    let player = session.player.unwrap();
    assert_eq!(player.deck(), ["Ember Wolf", "Ash Sprite"]);
}

#[test]
fn starter_crypt_is_won_by_the_front_card() {
    let mut session = load_world("starter").unwrap();
    let player = session.player.as_mut().unwrap();
    let report = fight(&session.world, player, "Sunken Crypt", Difficulty::NONE, &mut Dice::from_seed(0)).unwrap();
    assert_eq!(
        report.lines,
        [
            "1.kor;jatekos;tamad;Ember Wolf;8;Tide Serpent;0",
            "2.kor;jatekos;tamad;Ember Wolf;8;Mud Golem;0",
            "3.kor;jatekos;tamad;Ember Wolf;8;Troll King;8",
            "3.kor;kazamata;tamad;Troll King;1;Ember Wolf;4",
            "4.kor;jatekos;tamad;Ember Wolf;8;Troll King;0",
            "jatekos nyert;eletero;Ember Wolf",
        ]
    );
    assert_eq!(player.card("Ember Wolf").unwrap().health, 7);
}

#[test]
fn starter_peak_is_lost_at_difficulty_zero() {
    let mut session = load_world("starter").unwrap();
    let player = session.player.as_mut().unwrap();
    let report = fight(&session.world, player, "Ashen Peak", Difficulty::NONE, &mut Dice::from_seed(0)).unwrap();
    assert_eq!(report.outcome.verdict, Verdict::PlayerLoses);
    assert_eq!(report.outcome.log.len(), 9);
    insta::assert_snapshot!(&report.lines[2], @"2.kor;jatekos;tamad;Ember Wolf;2;Gale Hawk;0");
    insta::assert_snapshot!(report.lines.last().unwrap(), @"jatekos vesztett");
}

#[test]
fn simulation_counts_add_up() {
    let session = load_world("starter").unwrap();
    let player = session.player.unwrap();
    let stats = simulate_many(&session.world, &player, "Mossy Hollow", Difficulty::new(10), 1, 50).unwrap();
    assert_eq!(stats.samples, 50);
    assert_eq!(stats.wins + stats.losses, 50);

    let calm = simulate_many(&session.world, &player, "Mossy Hollow", Difficulty::NONE, 1, 10).unwrap();
    assert_eq!(calm.wins, 10);
    assert_eq!(calm.median_rounds_on_win, 1);
    assert!((calm.win_rate() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn unknown_world_id_reports_context() {
    let err = load_world("no-such-world").unwrap_err();
    assert!(format!("{:#}", err).contains("neither a built-in world"));
}
