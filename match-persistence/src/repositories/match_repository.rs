use anyhow::Result;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::entities::{guesses, matches, prelude::*};
use crate::events::GuessAppended;
use match_types::{Guess, Match, MatchId, MatchStatus, PlayerId};

const GUESS_EVENT_CAPACITY: usize = 256;

pub struct MatchRepository {
    db: DatabaseConnection,
    guess_events: broadcast::Sender<GuessAppended>,
}

impl MatchRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        let (guess_events, _) = broadcast::channel(GUESS_EVENT_CAPACITY);
        Self { db, guess_events }
    }

    /// Subscribe to guess append events. Every appended guess is
    /// delivered to all subscribers alive at append time.
    pub fn subscribe_guesses(&self) -> broadcast::Receiver<GuessAppended> {
        self.guess_events.subscribe()
    }

    fn model_to_match(model: matches::Model) -> Result<Match> {
        let status = model.status.parse().map_err(anyhow::Error::msg)?;

        Ok(Match {
            id: model.id,
            host_id: model.host_id,
            status,
            created_at: model.created_at.to_rfc3339(),
            current_word: model.current_word,
            time_left: model.time_left,
            winner_id: model.winner_id,
        })
    }

    fn model_to_guess(model: guesses::Model) -> Guess {
        Guess {
            id: model.id,
            guess: model.guess,
            player_id: model.player_id,
        }
    }

    pub async fn create_match(
        &self,
        host_id: PlayerId,
        current_word: String,
        time_left: i32,
    ) -> Result<Match> {
        let match_id = Uuid::new_v4();

        let match_model = matches::ActiveModel {
            id: sea_orm::ActiveValue::Set(match_id),
            host_id: sea_orm::ActiveValue::Set(host_id),
            status: sea_orm::ActiveValue::Set(MatchStatus::Waiting.to_string()),
            created_at: sea_orm::ActiveValue::Set(chrono::Utc::now().into()),
            current_word: sea_orm::ActiveValue::Set(current_word),
            time_left: sea_orm::ActiveValue::Set(time_left),
            winner_id: sea_orm::ActiveValue::Set(None),
        };

        Matches::insert(match_model).exec(&self.db).await?;

        // Fetch the created match
        let created = Matches::find_by_id(match_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Failed to retrieve created match"))?;

        Self::model_to_match(created)
    }

    pub async fn find_match(&self, id: MatchId) -> Result<Option<Match>> {
        let match_model = Matches::find_by_id(id).one(&self.db).await?;
        match_model.map(Self::model_to_match).transpose()
    }

    pub async fn count_matches(&self) -> Result<u64> {
        Ok(Matches::find().count(&self.db).await?)
    }

    /// Append a guess under a match and publish the append event.
    /// The parent match is not consulted: appends under unknown match
    /// ids are accepted and persisted.
    pub async fn append_guess(
        &self,
        match_id: MatchId,
        player_id: PlayerId,
        text: String,
    ) -> Result<Guess> {
        let guess_id = Uuid::new_v4();

        let guess_model = guesses::ActiveModel {
            id: sea_orm::ActiveValue::Set(guess_id),
            match_id: sea_orm::ActiveValue::Set(match_id),
            guess: sea_orm::ActiveValue::Set(text),
            player_id: sea_orm::ActiveValue::Set(player_id),
            created_at: sea_orm::ActiveValue::Set(chrono::Utc::now().into()),
        };

        Guesses::insert(guess_model).exec(&self.db).await?;

        // Fetch the created guess
        let created = Guesses::find_by_id(guess_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Failed to retrieve created guess"))?;

        let guess = Self::model_to_guess(created);

        // send only fails when no subscriber is listening
        let event = GuessAppended {
            match_id,
            guess: guess.clone(),
        };
        if self.guess_events.send(event).is_err() {
            tracing::debug!("Guess {} appended with no evaluator subscribed", guess.id);
        }

        Ok(guess)
    }

    pub async fn guesses_for_match(&self, match_id: MatchId) -> Result<Vec<Guess>> {
        let guess_models = Guesses::find()
            .filter(guesses::Column::MatchId.eq(match_id))
            .order_by_asc(guesses::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(guess_models.into_iter().map(Self::model_to_guess).collect())
    }

    /// Finish a match, but only if it is still waiting. The status
    /// guard runs inside the UPDATE itself, so two concurrent winning
    /// guesses cannot both take the match. Returns whether this call
    /// recorded the winner.
    pub async fn record_winner(&self, match_id: MatchId, winner_id: PlayerId) -> Result<bool> {
        let result = Matches::update_many()
            .col_expr(
                matches::Column::Status,
                Expr::value(MatchStatus::Finished.to_string()),
            )
            .col_expr(matches::Column::WinnerId, Expr::value(winner_id))
            .filter(matches::Column::Id.eq(match_id))
            .filter(matches::Column::Status.eq(MatchStatus::Waiting.to_string()))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
