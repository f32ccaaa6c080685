use thiserror::Error;

/// Catalog and collection lookups. Raised before any combat happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("a card named '{0}' already exists")]
    DuplicateCard(String),
    #[error("a dungeon named '{0}' already exists")]
    DuplicateDungeon(String),
    #[error("unknown card '{0}'")]
    UnknownCard(String),
    #[error("unknown leader '{0}'")]
    UnknownLeader(String),
    #[error("unknown dungeon '{0}'")]
    UnknownDungeon(String),
    #[error("card '{0}' is not in the collection")]
    NotInCollection(String),
    #[error("name '{name}' is longer than {max} characters")]
    NameTooLong { name: String, max: usize },
    #[error("name '{name}' {reason}")]
    InvalidName { name: String, reason: &'static str },
    #[error("dungeon '{name}' is malformed: {reason}")]
    MalformedDungeon { name: String, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("the deck is empty or has no card from the collection")]
    Empty,
    #[error("no player has been created yet")]
    NoPlayer,
}

/// Precondition violations of `resolve_battle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("player queue is empty")]
    EmptyPlayerQueue,
    #[error("enemy queue is empty")]
    EmptyEnemyQueue,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{command}' expects {expected} fields, got {got}")]
    Arity {
        command: String,
        expected: usize,
        got: usize,
    },
    #[error("'{0}' is not an integer")]
    BadNumber(String),
    #[error("unknown {what} '{token}'")]
    UnknownToken { what: &'static str, token: String },
}
