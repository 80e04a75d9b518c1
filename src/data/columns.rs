//! Column labels used throughout the pipeline.
//!
//! Source labels follow the season export's header after duplicate labels
//! are suffixed (`Yds`, `Yds.1`, `Yds.2`); semantic labels are what the
//! cleaner renames them to.

pub const PLAYER: &str = "Player";
pub const TEAM: &str = "Tm";
pub const POSITION: &str = "FantPos";
pub const AGE: &str = "Age";
pub const GAMES: &str = "G";

pub const PASSING_ATT: &str = "PassingAtt";
pub const PASSING_YDS: &str = "PassingYDs";
pub const PASSING_TD: &str = "PassingTD";
pub const INTERCEPTIONS: &str = "Int";
pub const FANTASY_PT: &str = "FantPt";

pub const RUSHING_ATT: &str = "RushingAtt";
pub const RUSHING_YDS: &str = "RushingYDs";
pub const YARDS_PER_ATT: &str = "Y/A";
pub const RUSHING_TD: &str = "RushingTD";

pub const TARGETS: &str = "Tgt";
pub const RECEPTIONS: &str = "Rec";
pub const RECEIVING_YDS: &str = "ReceivingYDs";
pub const YARDS_PER_REC: &str = "Y/R";
pub const RECEIVING_TD: &str = "ReceivingTD";

pub const FUMBLES_LOST: &str = "FL";
pub const TOTAL_TD: &str = "TotalTD";
pub const COMPLETIONS: &str = "Cmp";

// Derived running back metrics
pub const FANTASY_POINTS: &str = "FantasyPoints";
pub const POINTS_PER_GAME: &str = "FantasyPoints/GM";
pub const USAGE_PER_GAME: &str = "Usage/GM";
pub const TD_PER_USAGE: &str = "TD/Usage";

/// Columns with no bearing on the analysis: ranks, alternate scoring formats,
/// two-point conversions, total fumbles and games started.
pub const UNUSED: [&str; 11] = [
    "Rk", "2PM", "2PP", "DKPt", "FDPt", "VBD", "PosRank", "OvRank", "PPR", "Fmb", "GS",
];

/// Source label to semantic label.
pub const RENAMES: [(&str, &str); 9] = [
    ("TD", PASSING_TD),
    ("TD.1", RUSHING_TD),
    ("TD.2", RECEIVING_TD),
    ("TD.3", TOTAL_TD),
    ("Yds", PASSING_YDS),
    ("Yds.1", RUSHING_YDS),
    ("Yds.2", RECEIVING_YDS),
    ("Att", PASSING_ATT),
    ("Att.1", RUSHING_ATT),
];

pub const IDENTITY: [&str; 4] = [PLAYER, TEAM, AGE, GAMES];
pub const RUSHING_GROUP: [&str; 4] = [RUSHING_ATT, RUSHING_YDS, YARDS_PER_ATT, RUSHING_TD];
pub const RECEIVING_GROUP: [&str; 5] =
    [TARGETS, RECEPTIONS, RECEIVING_YDS, YARDS_PER_REC, RECEIVING_TD];
pub const PASSING_GROUP: [&str; 5] =
    [PASSING_ATT, PASSING_YDS, PASSING_TD, INTERCEPTIONS, FANTASY_PT];

/// Per-attempt rates: blank cells stay null instead of becoming zero.
pub const RATE_COLUMNS: [&str; 2] = [YARDS_PER_ATT, YARDS_PER_REC];

/// Every column the cleaner coerces to `Float64` when present.
pub const NUMERIC_COLUMNS: [&str; 19] = [
    AGE,
    GAMES,
    COMPLETIONS,
    PASSING_ATT,
    PASSING_YDS,
    PASSING_TD,
    INTERCEPTIONS,
    RUSHING_ATT,
    RUSHING_YDS,
    YARDS_PER_ATT,
    RUSHING_TD,
    TARGETS,
    RECEPTIONS,
    RECEIVING_YDS,
    YARDS_PER_REC,
    RECEIVING_TD,
    FUMBLES_LOST,
    TOTAL_TD,
    FANTASY_PT,
];
