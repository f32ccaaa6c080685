use crate::card::CardDefinition;
use crate::dungeon::{Dungeon, DungeonKind};
use crate::player::Player;
use crate::world::World;

fn card_fields(card: &CardDefinition) -> String {
    format!(
        "{};{};{};{}",
        card.name,
        card.damage,
        card.health,
        card.element.script_token()
    )
}

fn dungeon_line(d: &Dungeon) -> String {
    let mut line = format!("kazamata;{};{};{}", d.kind.script_token(), d.name, d.enemies.join(","));
    if matches!(d.kind, DungeonKind::Medium | DungeonKind::Large) {
        if let Some(leader) = &d.leader {
            line.push(';');
            line.push_str(leader);
        }
    }
    if let Some(reward) = d.reward {
        line.push(';');
        line.push_str(reward.script_token());
    }
    line
}

/// Simple cards, then leaders, then dungeons, each in catalog order.
pub fn world_lines(world: &World) -> Vec<String> {
    world
        .cards()
        .map(|c| format!("kartya;{}", card_fields(c)))
        .chain(world.leaders().map(|c| format!("vezer;{}", card_fields(c))))
        .chain(world.dungeons().map(dungeon_line))
        .collect()
}

/// Collection with current stats, then the deck.
pub fn player_lines(player: &Player) -> Vec<String> {
    player
        .collection()
        .map(|c| format!("gyujtemeny;{}", card_fields(c)))
        .chain(player.deck().iter().map(|name| format!("pakli;{}", name)))
        .collect()
}
