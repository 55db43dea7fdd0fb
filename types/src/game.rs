//! Game types known to the API.
//!
//! Every game has three names: the upper-case API name used as a key in leaderboard and
//! game-count documents, the database key used inside a player's `stats` document, and a
//! human readable display name. It also carries the numeric id used by older endpoints.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown game type: {0}")]
pub struct UnknownGameType(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameType {
    Quakecraft,
    Walls,
    Paintball,
    SurvivalGames,
    TntGames,
    VampireZ,
    Walls3,
    Arcade,
    Arena,
    Mcgo,
    Uhc,
    Battleground,
    SuperSmash,
    Gingerbread,
    Housing,
    SkyWars,
    TrueCombat,
    SpeedUhc,
    SkyClash,
    Legacy,
    Prototype,
    Bedwars,
    MurderMystery,
    BuildBattle,
    Duels,
    SkyBlock,
    Pit,
}

impl GameType {
    pub const ALL: [GameType; 27] = [
        GameType::Quakecraft,
        GameType::Walls,
        GameType::Paintball,
        GameType::SurvivalGames,
        GameType::TntGames,
        GameType::VampireZ,
        GameType::Walls3,
        GameType::Arcade,
        GameType::Arena,
        GameType::Mcgo,
        GameType::Uhc,
        GameType::Battleground,
        GameType::SuperSmash,
        GameType::Gingerbread,
        GameType::Housing,
        GameType::SkyWars,
        GameType::TrueCombat,
        GameType::SpeedUhc,
        GameType::SkyClash,
        GameType::Legacy,
        GameType::Prototype,
        GameType::Bedwars,
        GameType::MurderMystery,
        GameType::BuildBattle,
        GameType::Duels,
        GameType::SkyBlock,
        GameType::Pit,
    ];

    /// Key used for this game in `leaderboards` and `gameCounts`.
    pub fn api_name(&self) -> &'static str {
        match self {
            GameType::Quakecraft => "QUAKECRAFT",
            GameType::Walls => "WALLS",
            GameType::Paintball => "PAINTBALL",
            GameType::SurvivalGames => "SURVIVAL_GAMES",
            GameType::TntGames => "TNTGAMES",
            GameType::VampireZ => "VAMPIREZ",
            GameType::Walls3 => "WALLS3",
            GameType::Arcade => "ARCADE",
            GameType::Arena => "ARENA",
            GameType::Mcgo => "MCGO",
            GameType::Uhc => "UHC",
            GameType::Battleground => "BATTLEGROUND",
            GameType::SuperSmash => "SUPER_SMASH",
            GameType::Gingerbread => "GINGERBREAD",
            GameType::Housing => "HOUSING",
            GameType::SkyWars => "SKYWARS",
            GameType::TrueCombat => "TRUE_COMBAT",
            GameType::SpeedUhc => "SPEED_UHC",
            GameType::SkyClash => "SKYCLASH",
            GameType::Legacy => "LEGACY",
            GameType::Prototype => "PROTOTYPE",
            GameType::Bedwars => "BEDWARS",
            GameType::MurderMystery => "MURDER_MYSTERY",
            GameType::BuildBattle => "BUILD_BATTLE",
            GameType::Duels => "DUELS",
            GameType::SkyBlock => "SKYBLOCK",
            GameType::Pit => "PIT",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GameType::Quakecraft => "Quakecraft",
            GameType::Walls => "Walls",
            GameType::Paintball => "Paintball",
            GameType::SurvivalGames => "Blitz Survival Games",
            GameType::TntGames => "The TNT Games",
            GameType::VampireZ => "VampireZ",
            GameType::Walls3 => "Mega Walls",
            GameType::Arcade => "Arcade",
            GameType::Arena => "Arena Brawl",
            GameType::Mcgo => "Cops and Crims",
            GameType::Uhc => "UHC Champions",
            GameType::Battleground => "Warlords",
            GameType::SuperSmash => "Smash Heroes",
            GameType::Gingerbread => "Turbo Kart Racers",
            GameType::Housing => "Housing",
            GameType::SkyWars => "SkyWars",
            GameType::TrueCombat => "Crazy Walls",
            GameType::SpeedUhc => "Speed UHC",
            GameType::SkyClash => "SkyClash",
            GameType::Legacy => "Classic Games",
            GameType::Prototype => "Prototype",
            GameType::Bedwars => "Bed Wars",
            GameType::MurderMystery => "Murder Mystery",
            GameType::BuildBattle => "Build Battle",
            GameType::Duels => "Duels",
            GameType::SkyBlock => "SkyBlock",
            GameType::Pit => "Pit",
        }
    }

    /// Key used for this game inside a player's `stats` document.
    pub fn database_name(&self) -> &'static str {
        match self {
            GameType::Quakecraft => "Quake",
            GameType::Walls => "Walls",
            GameType::Paintball => "Paintball",
            GameType::SurvivalGames => "HungerGames",
            GameType::TntGames => "TNTGames",
            GameType::VampireZ => "VampireZ",
            GameType::Walls3 => "Walls3",
            GameType::Arcade => "Arcade",
            GameType::Arena => "Arena",
            GameType::Mcgo => "MCGO",
            GameType::Uhc => "UHC",
            GameType::Battleground => "Battleground",
            GameType::SuperSmash => "SuperSmash",
            GameType::Gingerbread => "GingerBread",
            GameType::Housing => "Housing",
            GameType::SkyWars => "SkyWars",
            GameType::TrueCombat => "TrueCombat",
            GameType::SpeedUhc => "SpeedUHC",
            GameType::SkyClash => "SkyClash",
            GameType::Legacy => "Legacy",
            GameType::Prototype => "Prototype",
            GameType::Bedwars => "Bedwars",
            GameType::MurderMystery => "MurderMystery",
            GameType::BuildBattle => "BuildBattle",
            GameType::Duels => "Duels",
            GameType::SkyBlock => "SkyBlock",
            GameType::Pit => "Pit",
        }
    }

    pub fn id(&self) -> u8 {
        match self {
            GameType::Quakecraft => 2,
            GameType::Walls => 3,
            GameType::Paintball => 4,
            GameType::SurvivalGames => 5,
            GameType::TntGames => 6,
            GameType::VampireZ => 7,
            GameType::Walls3 => 13,
            GameType::Arcade => 14,
            GameType::Arena => 17,
            GameType::Mcgo => 21,
            GameType::Uhc => 20,
            GameType::Battleground => 23,
            GameType::SuperSmash => 24,
            GameType::Gingerbread => 25,
            GameType::Housing => 26,
            GameType::SkyWars => 51,
            GameType::TrueCombat => 52,
            GameType::SpeedUhc => 54,
            GameType::SkyClash => 55,
            GameType::Legacy => 56,
            GameType::Prototype => 57,
            GameType::Bedwars => 58,
            GameType::MurderMystery => 59,
            GameType::BuildBattle => 60,
            GameType::Duels => 61,
            GameType::SkyBlock => 63,
            GameType::Pit => 64,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|game| game.id() == id)
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Accepts either the API name (`BEDWARS`) or the database key (`Bedwars`), ignoring case.
impl FromStr for GameType {
    type Err = UnknownGameType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|game| {
                game.api_name().eq_ignore_ascii_case(value)
                    || game.database_name().eq_ignore_ascii_case(value)
            })
            .ok_or_else(|| UnknownGameType(value.to_string()))
    }
}
