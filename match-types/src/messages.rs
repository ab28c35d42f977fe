use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{GuessId, MatchId};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchResponse {
    pub match_id: MatchId,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGuessRequest {
    pub guess: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGuessResponse {
    pub guess_id: GuessId,
}
