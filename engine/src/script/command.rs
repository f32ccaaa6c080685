use std::str::FromStr;

use crate::card::LeaderBoost;
use crate::dungeon::{Dungeon, DungeonKind};
use crate::element::Element;
use crate::error::ScriptError;
use crate::reward::RewardKind;

/// One line of the scripted command language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewCard {
        name: String,
        damage: i32,
        health: i32,
        element: Element,
    },
    NewLeader {
        name: String,
        base: String,
        boost: LeaderBoost,
    },
    NewDungeon(Dungeon),
    NewPlayer,
    Collect {
        card: String,
    },
    NewDeck {
        cards: Vec<String>,
    },
    Battle {
        dungeon: String,
        output: String,
    },
    ExportWorld {
        output: String,
    },
    ExportPlayer {
        output: String,
    },
}

fn need(command: &str, fields: &[&str], expected: usize) -> Result<(), ScriptError> {
    if fields.len() < expected {
        return Err(ScriptError::Arity {
            command: command.to_string(),
            expected,
            got: fields.len(),
        });
    }
    Ok(())
}

fn number(s: &str) -> Result<i32, ScriptError> {
    s.parse().map_err(|_| ScriptError::BadNumber(s.to_string()))
}

/// Comma-separated names, blanks dropped.
fn name_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_dungeon(f: &[&str]) -> Result<Dungeon, ScriptError> {
    let cmd = "uj kazamata";
    need(cmd, f, 4)?;
    let kind: DungeonKind = f[1].parse()?;
    let (leader, reward): (Option<String>, Option<RewardKind>) = match kind {
        DungeonKind::Small => {
            need(cmd, f, 5)?;
            (None, Some(f[4].parse()?))
        }
        DungeonKind::Medium => {
            need(cmd, f, 6)?;
            (Some(f[4].to_string()), Some(f[5].parse()?))
        }
        DungeonKind::Large => {
            need(cmd, f, 5)?;
            (Some(f[4].to_string()), None)
        }
    };
    Ok(Dungeon::new(f[2], kind, name_list(f[3]), leader, reward))
}

impl FromStr for Command {
    type Err = ScriptError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let f: Vec<&str> = line.split(';').map(str::trim).collect();
        let cmd = f[0];
        match cmd {
            "uj kartya" => {
                need(cmd, &f, 5)?;
                Ok(Command::NewCard {
                    name: f[1].to_string(),
                    damage: number(f[2])?,
                    health: number(f[3])?,
                    element: f[4].parse()?,
                })
            }
            "uj vezer" => {
                need(cmd, &f, 4)?;
                Ok(Command::NewLeader {
                    name: f[1].to_string(),
                    base: f[2].to_string(),
                    boost: f[3].parse()?,
                })
            }
            "uj kazamata" => parse_dungeon(&f).map(Command::NewDungeon),
            "uj jatekos" => Ok(Command::NewPlayer),
            "felvetel gyujtemenybe" => {
                need(cmd, &f, 2)?;
                Ok(Command::Collect {
                    card: f[1].to_string(),
                })
            }
            "uj pakli" => {
                need(cmd, &f, 2)?;
                Ok(Command::NewDeck {
                    cards: name_list(f[1]),
                })
            }
            "harc" => {
                need(cmd, &f, 3)?;
                Ok(Command::Battle {
                    dungeon: f[1].to_string(),
                    output: f[2].to_string(),
                })
            }
            "export vilag" => {
                need(cmd, &f, 2)?;
                Ok(Command::ExportWorld {
                    output: f[1].to_string(),
                })
            }
            "export jatekos" => {
                need(cmd, &f, 2)?;
                Ok(Command::ExportPlayer {
                    output: f[1].to_string(),
                })
            }
            other => Err(ScriptError::UnknownCommand(other.to_string())),
        }
    }
}
