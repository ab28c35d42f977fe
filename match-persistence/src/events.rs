use match_types::{Guess, MatchId};

/// Append event published whenever a guess record lands under a match.
///
/// Carries the new child record and its parent key, so consumers can
/// evaluate the guess without reading it back from the store.
#[derive(Debug, Clone)]
pub struct GuessAppended {
    pub match_id: MatchId,
    pub guess: Guess,
}
