use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{MatchId, PlayerId};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub host_id: PlayerId,
    pub status: MatchStatus,
    pub created_at: String, // ISO 8601 string
    pub current_word: String,
    pub time_left: i32, // Seconds, written once at creation and never counted down
    pub winner_id: Option<PlayerId>,
}

/// Safe version of Match that doesn't expose the target word
/// Used for HTTP responses where we need to protect game integrity
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SafeMatch {
    pub id: MatchId,
    pub host_id: PlayerId,
    pub status: MatchStatus,
    pub created_at: String,
    pub word_length: i32,
    pub time_left: i32,
    pub winner_id: Option<PlayerId>,
}

impl From<&Match> for SafeMatch {
    fn from(game_match: &Match) -> Self {
        SafeMatch {
            id: game_match.id,
            host_id: game_match.host_id,
            status: game_match.status.clone(),
            created_at: game_match.created_at.clone(),
            word_length: game_match.current_word.len() as i32,
            time_left: game_match.time_left,
            winner_id: game_match.winner_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Waiting,  // Open match, no winning guess yet
    Finished, // Terminal; a winner has been recorded
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Waiting => write!(f, "waiting"),
            MatchStatus::Finished => write!(f, "finished"),
        }
    }
}

impl FromStr for MatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "waiting" => Ok(MatchStatus::Waiting),
            "finished" => Ok(MatchStatus::Finished),
            other => Err(format!("unknown match status: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_status_round_trips_through_strings() {
        assert_eq!(MatchStatus::Waiting.to_string(), "waiting");
        assert_eq!(MatchStatus::Finished.to_string(), "finished");
        assert_eq!("waiting".parse::<MatchStatus>().unwrap(), MatchStatus::Waiting);
        assert_eq!("finished".parse::<MatchStatus>().unwrap(), MatchStatus::Finished);
        assert!("WAITING".parse::<MatchStatus>().is_err());
        assert!("".parse::<MatchStatus>().is_err());
    }

    #[test]
    fn test_safe_match_hides_target_word() {
        let game_match = Match {
            id: Uuid::new_v4(),
            host_id: Uuid::new_v4(),
            status: MatchStatus::Waiting,
            created_at: "2024-02-10T12:00:00+00:00".to_string(),
            current_word: "FLUTTER".to_string(),
            time_left: 60,
            winner_id: None,
        };

        let safe = SafeMatch::from(&game_match);
        assert_eq!(safe.id, game_match.id);
        assert_eq!(safe.word_length, 7);
        assert_eq!(safe.time_left, 60);
        assert_eq!(safe.winner_id, None);
    }
}
