use indexmap::IndexMap;
use serde::Serialize;
use tracing::warn;

use crate::card::CardDefinition;
use crate::combat::CombatUnit;
use crate::error::{CatalogError, DeckError};
use crate::world::World;

/// A player's collection (ordered, keyed by card name) and current deck.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Player {
    collection: IndexMap<String, CardDefinition>,
    deck: Vec<String>,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owns(&self, name: &str) -> bool {
        self.collection.contains_key(name)
    }

    pub fn collection(&self) -> impl Iterator<Item = &CardDefinition> {
        self.collection.values()
    }

    pub fn deck(&self) -> &[String] {
        &self.deck
    }

    pub fn card(&self, name: &str) -> Result<&CardDefinition, CatalogError> {
        self.collection
            .get(name)
            .ok_or_else(|| CatalogError::NotInCollection(name.to_string()))
    }

    pub(crate) fn card_mut(&mut self, name: &str) -> Result<&mut CardDefinition, CatalogError> {
        self.collection
            .get_mut(name)
            .ok_or_else(|| CatalogError::NotInCollection(name.to_string()))
    }

    /// Copies a simple card from the catalog. `Ok(false)` if already owned.
    pub fn add_from_world(&mut self, world: &World, name: &str) -> Result<bool, CatalogError> {
        if self.owns(name) {
            return Ok(false);
        }
        let card = world.card(name)?.clone();
        self.collection.insert(card.name.clone(), card);
        Ok(true)
    }

    /// Half the collection, rounded up.
    pub fn max_deck_size(&self) -> usize {
        self.collection.len().div_ceil(2)
    }

    /// Keeps owned, distinct names in the given order up to `max_deck_size`.
    /// An empty result leaves the previous deck in place.
    pub fn set_deck<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), DeckError> {
        let limit = self.max_deck_size();
        let mut deck: Vec<String> = Vec::new();
        for name in names.iter().map(|n| n.as_ref()) {
            if deck.len() >= limit {
                break;
            }
            if !self.owns(name) {
                warn!(card = name, "deck entry skipped: not in the collection");
                continue;
            }
            if deck.iter().any(|d| d == name) {
                warn!(card = name, "deck entry skipped: duplicate");
                continue;
            }
            deck.push(name.to_string());
        }
        if deck.is_empty() {
            return Err(DeckError::Empty);
        }
        self.deck = deck;
        Ok(())
    }

    /// Player battle queue in deck order.
    pub fn battle_queue(&self) -> Result<Vec<CombatUnit>, DeckError> {
        if self.deck.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(self
            .deck
            .iter()
            .filter_map(|name| self.collection.get(name))
            .map(|card| card.to_unit(false))
            .collect())
    }
}
