use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScriptError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Air,
    Earth,
    Fire,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Air, Element::Earth, Element::Fire, Element::Water];

    /// Token used by the scripted command language and the exports.
    pub fn script_token(self) -> &'static str {
        match self {
            Element::Air => "levego",
            Element::Earth => "fold",
            Element::Fire => "tuz",
            Element::Water => "viz",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Element::Air => "air",
            Element::Earth => "earth",
            Element::Fire => "fire",
            Element::Water => "water",
        };
        f.write_str(s)
    }
}

impl FromStr for Element {
    type Err = ScriptError;

    /// Accepts both the script tokens and the English identifiers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "levego" | "air" => Ok(Element::Air),
            "fold" | "earth" => Ok(Element::Earth),
            "tuz" | "fire" => Ok(Element::Fire),
            "viz" | "water" => Ok(Element::Water),
            other => Err(ScriptError::UnknownToken {
                what: "element",
                token: other.to_string(),
            }),
        }
    }
}

/// How an attacking element fares against a defending one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Neutral,
    Strong,
    Weak,
}

/// Directed strong/weak graph. Air and fire beat earth and water; the
/// reverse directions are weak, and {air, fire} / {earth, water} are weak
/// both ways.
pub fn relation(attacker: Element, defender: Element) -> Relation {
    use Element::*;
    match (attacker, defender) {
        (a, d) if a == d => Relation::Neutral,
        (Air | Fire, Earth | Water) => Relation::Strong,
        (Earth | Water, Air | Fire) => Relation::Weak,
        (Air, Fire) | (Fire, Air) | (Earth, Water) | (Water, Earth) => Relation::Weak,
        _ => Relation::Neutral,
    }
}

/// Elemental multiplier on a base damage. Weak attacks floor-divide, so a
/// base of 1 can come out as 0.
pub fn adjusted_damage(attacker: Element, defender: Element, base_damage: i32) -> i32 {
    match relation(attacker, defender) {
        Relation::Neutral => base_damage,
        Relation::Strong => base_damage * 2,
        Relation::Weak => base_damage.div_euclid(2),
    }
}
