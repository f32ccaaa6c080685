use serde::{Deserialize, Serialize};

use crate::card::{truncate_name, DAMAGE_RANGE, HEALTH_RANGE, MAX_NAME_LEN};
use crate::element::Element;

/// One card fighting in a battle. Only `hit_points` changes once the unit is
/// built; everything else is fixed for the battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatUnit {
    name: String,
    damage: i32,
    hit_points: i32,
    element: Element,
    is_leader: bool,
}

impl CombatUnit {
    /// Clamps damage to [2, 100] and hit points to [1, 100].
    pub fn new(name: &str, damage: i32, hit_points: i32, element: Element, is_leader: bool) -> Self {
        Self {
            name: truncate_name(name, MAX_NAME_LEN),
            damage: damage.clamp(DAMAGE_RANGE.0, DAMAGE_RANGE.1),
            hit_points: hit_points.clamp(HEALTH_RANGE.0, HEALTH_RANGE.1),
            element,
            is_leader,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn hit_points(&self) -> i32 {
        self.hit_points
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn is_leader(&self) -> bool {
        self.is_leader
    }

    pub fn is_defeated(&self) -> bool {
        self.hit_points <= 0
    }

    /// Subtracts `amount` (floored at 0 HP). Returns true if this hit dropped
    /// the unit.
    pub(crate) fn take_hit(&mut self, amount: i32) -> bool {
        let before = self.hit_points;
        self.hit_points = (self.hit_points - amount.max(0)).max(0);
        before > 0 && self.hit_points == 0
    }
}
