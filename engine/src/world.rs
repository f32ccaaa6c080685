//! The world catalog: simple cards, leader cards and dungeons, each kept in
//! insertion order. Card and leader names share one name space.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::card::{check_name, CardDefinition, LeaderBoost, MAX_NAME_LEN};
use crate::dungeon::Dungeon;
use crate::error::CatalogError;
use crate::player::Player;

#[derive(Debug, Clone, Default, Serialize)]
pub struct World {
    cards: IndexMap<String, CardDefinition>,
    leaders: IndexMap<String, CardDefinition>,
    dungeons: IndexMap<String, Dungeon>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    fn name_taken(&self, name: &str) -> bool {
        self.cards.contains_key(name) || self.leaders.contains_key(name)
    }

    /// Rejects names that are empty, non-ASCII or longer than 16 characters.
    pub fn add_card(&mut self, card: CardDefinition) -> Result<(), CatalogError> {
        check_name(&card.name, MAX_NAME_LEN)?;
        if self.name_taken(&card.name) {
            return Err(CatalogError::DuplicateCard(card.name));
        }
        debug!(card = %card, "catalog card added");
        self.cards.insert(card.name.clone(), card);
        Ok(())
    }

    /// Derives a leader from an existing simple card.
    pub fn add_leader(&mut self, name: &str, base: &str, boost: LeaderBoost) -> Result<(), CatalogError> {
        let leader = self.card(base)?.leader(name, boost);
        check_name(&leader.name, MAX_NAME_LEN)?;
        if self.name_taken(&leader.name) {
            return Err(CatalogError::DuplicateCard(leader.name));
        }
        debug!(leader = %leader, base, ?boost, "catalog leader added");
        self.leaders.insert(leader.name.clone(), leader);
        Ok(())
    }

    /// Validates shape and every card reference before inserting.
    pub fn add_dungeon(&mut self, dungeon: Dungeon) -> Result<(), CatalogError> {
        if self.dungeons.contains_key(&dungeon.name) {
            return Err(CatalogError::DuplicateDungeon(dungeon.name));
        }
        dungeon.validate()?;
        for enemy in &dungeon.enemies {
            self.card(enemy)?;
        }
        if let Some(leader) = &dungeon.leader {
            self.leader(leader)?;
        }
        debug!(dungeon = %dungeon.name, kind = ?dungeon.kind, "dungeon added");
        self.dungeons.insert(dungeon.name.clone(), dungeon);
        Ok(())
    }

    pub fn card(&self, name: &str) -> Result<&CardDefinition, CatalogError> {
        self.cards
            .get(name)
            .ok_or_else(|| CatalogError::UnknownCard(name.to_string()))
    }

    pub fn leader(&self, name: &str) -> Result<&CardDefinition, CatalogError> {
        self.leaders
            .get(name)
            .ok_or_else(|| CatalogError::UnknownLeader(name.to_string()))
    }

    pub fn dungeon(&self, name: &str) -> Result<&Dungeon, CatalogError> {
        self.dungeons
            .get(name)
            .ok_or_else(|| CatalogError::UnknownDungeon(name.to_string()))
    }

    pub fn cards(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    pub fn leaders(&self) -> impl Iterator<Item = &CardDefinition> {
        self.leaders.values()
    }

    pub fn dungeons(&self) -> impl Iterator<Item = &Dungeon> {
        self.dungeons.values()
    }

    /// First simple card, in catalog order, the player does not own yet.
    pub fn first_unowned_card(&self, player: &Player) -> Option<&CardDefinition> {
        self.cards.values().find(|c| !player.owns(&c.name))
    }
}
