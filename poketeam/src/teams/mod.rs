mod pokemon;
mod team;
mod validator;

pub use pokemon::{
    DEFAULT_LEVEL,
    MAX_NICKNAME_WIDTH,
    Pokemon,
};
pub use team::{
    BattleFormat,
    DEFAULT_TEAM_NAME,
    MAX_TEAM_NAME_LENGTH,
    MAX_TEAM_SIZE,
    Team,
};
pub use validator::TeamValidator;
