use std::sync::Arc;
use uuid::Uuid;

use match_persistence::connection::connect_to_memory_database;
use match_persistence::events::GuessAppended;
use match_persistence::repositories::MatchRepository;
use match_server::evaluator::GuessEvaluator;
use match_types::Match;
use migration::{Migrator, MigratorTrait};

/// Test setup with an in-memory store and an evaluator wired to it
pub struct TestMatchSetup {
    pub repository: Arc<MatchRepository>,
    pub evaluator: GuessEvaluator,
}

impl TestMatchSetup {
    pub async fn new() -> Self {
        let db = connect_to_memory_database()
            .await
            .expect("Failed to connect to test database");
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        let repository = Arc::new(MatchRepository::new(db));
        let evaluator = GuessEvaluator::new(repository.clone());

        Self {
            repository,
            evaluator,
        }
    }

    /// Creates a waiting match hosted by a fresh player
    pub async fn create_match_with_word(&self, word: &str) -> Match {
        self.repository
            .create_match(Uuid::new_v4(), word.to_string(), 60)
            .await
            .expect("Failed to create match")
    }

    /// Appends a guess through the store and hands the resulting event
    /// to the evaluator, mirroring the production flow
    pub async fn submit_and_evaluate(&self, match_id: Uuid, player_id: Uuid, text: &str) {
        let mut events = self.repository.subscribe_guesses();

        self.repository
            .append_guess(match_id, player_id, text.to_string())
            .await
            .expect("Failed to append guess");

        let event: GuessAppended = events.try_recv().expect("Append should publish an event");
        self.evaluator
            .handle_guess(&event)
            .await
            .expect("Evaluation should not fail");
    }
}
