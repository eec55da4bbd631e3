use serde::{Deserialize, Serialize};

// === Domain models ===

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    #[default]
    #[serde(rename = "POSITION_INVALID")]
    Invalid,
    #[serde(rename = "POSITION_GOALKEEPER")]
    Goalkeeper,
    #[serde(rename = "POSITION_DEFENDER")]
    Defender,
    #[serde(rename = "POSITION_LEFT_WING")]
    LeftWing,
    #[serde(rename = "POSITION_RIGHT_WING")]
    RightWing,
    #[serde(rename = "POSITION_MIDDLEFIELD")]
    Middlefield,
    #[serde(rename = "POSITION_STRIKER")]
    Striker,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Formation {
    #[default]
    #[serde(rename = "FORMATION_INVALID")]
    Invalid,
    #[serde(rename = "FORMATION_FOUR_FOUR_TWO")]
    FourFourTwo,
    #[serde(rename = "FORMATION_FOUR_THREE_THREE")]
    FourThreeThree,
    #[serde(rename = "FORMATION_THREE_FOUR_THREE")]
    ThreeFourThree,
}

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub player_id: i64,
    pub display_name: String,
    pub number: i32,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize)]
pub struct Lineup {
    pub lineup_id: i64,
    pub formation: Formation,
    pub is_local: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<Player>>,
}

// === Request models ===

#[derive(Debug, Deserialize)]
pub struct NewPlayer {
    #[serde(default)]
    pub player_id: Option<i64>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub number: i32,
    #[serde(default)]
    pub position: Position,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Deserialize)]
pub struct PlayerUpdate {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub number: Option<i32>,
    #[serde(default)]
    pub position: Option<Position>,
}

#[derive(Debug, Deserialize)]
pub struct NewLineup {
    #[serde(default)]
    pub lineup_id: Option<i64>,
    #[serde(default)]
    pub formation: Formation,
    #[serde(default)]
    pub is_local: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct LineupUpdate {
    #[serde(default)]
    pub formation: Option<Formation>,
    #[serde(default)]
    pub is_local: Option<bool>,
}

/// Body of lineup membership mutations: `{"player_id": N}`.
#[derive(Debug, Deserialize)]
pub struct LineupMember {
    pub player_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ListPlayersQuery {
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct GetLineupQuery {
    #[serde(rename = "with-players", default)]
    pub with_players: bool,
}

// === Response models ===

#[derive(Debug, Serialize)]
pub struct PlayerCreated {
    pub player_id: i64,
}

#[derive(Debug, Serialize)]
pub struct LineupCreated {
    pub lineup_id: i64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_uses_wire_names() {
        let json = serde_json::to_string(&Position::RightWing).unwrap();
        assert_eq!(json, "\"POSITION_RIGHT_WING\"");
        let parsed: Position = serde_json::from_str("\"POSITION_STRIKER\"").unwrap();
        assert_eq!(parsed, Position::Striker);
    }

    #[test]
    fn unknown_position_is_rejected() {
        assert!(serde_json::from_str::<Position>("\"POSITION_SWEEPER\"").is_err());
    }

    #[test]
    fn lineup_omits_players_unless_embedded() {
        let lineup = Lineup {
            lineup_id: 1,
            formation: Formation::FourFourTwo,
            is_local: true,
            players: None,
        };
        assert_eq!(
            serde_json::to_string(&lineup).unwrap(),
            "{\"lineup_id\":1,\"formation\":\"FORMATION_FOUR_FOUR_TWO\",\"is_local\":true}"
        );
    }
}
