use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{GuessId, PlayerId};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Guess {
    pub id: GuessId,
    pub guess: String, // Stored exactly as submitted; normalized only at evaluation
    pub player_id: PlayerId,
}
