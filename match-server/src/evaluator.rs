use std::sync::Arc;

use anyhow::Result;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use match_core::is_winning_guess;
use match_persistence::events::GuessAppended;
use match_persistence::repositories::MatchRepository;

/// Background worker that reacts to appended guesses and settles the
/// match they belong to. It holds no state of its own; every event
/// carries the guess record plus its parent match id, and everything
/// else is read back from the repository.
pub struct GuessEvaluator {
    repository: Arc<MatchRepository>,
}

impl GuessEvaluator {
    pub fn new(repository: Arc<MatchRepository>) -> Self {
        Self { repository }
    }

    /// Consume guess events until the sending side is dropped
    pub async fn run(self, mut events: broadcast::Receiver<GuessAppended>) {
        loop {
            match events.recv().await {
                Ok(event) => {
                    if let Err(e) = self.handle_guess(&event).await {
                        tracing::error!(
                            "Failed to evaluate guess {} for match {}: {}",
                            event.guess.id,
                            event.match_id,
                            e
                        );
                    }
                }
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    warn!("Guess evaluator lagging, {} events dropped", missed);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }

        info!("Guess evaluator stopped");
    }

    /// Compare one appended guess against its match's target word and
    /// mark the match finished when it hits. Matches that are already
    /// finished keep their original winner.
    pub async fn handle_guess(&self, event: &GuessAppended) -> Result<()> {
        let game_match = match self.repository.find_match(event.match_id).await? {
            Some(game_match) => game_match,
            None => {
                warn!(
                    "Guess {} references unknown match {}, skipping evaluation",
                    event.guess.id, event.match_id
                );
                return Ok(());
            }
        };

        if !is_winning_guess(&event.guess.guess, &game_match.current_word) {
            debug!(
                "Guess {} by player {} did not match for match {}",
                event.guess.id, event.guess.player_id, event.match_id
            );
            return Ok(());
        }

        let won = self
            .repository
            .record_winner(event.match_id, event.guess.player_id)
            .await?;

        if won {
            info!(
                "Match {} won by player {}",
                event.match_id, event.guess.player_id
            );
        } else {
            info!(
                "Match {} already finished, correct guess {} changes nothing",
                event.match_id, event.guess.id
            );
        }

        Ok(())
    }
}
