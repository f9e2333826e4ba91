use super::domain::{NewTrainer, Trainer};
use crate::error::{LeagueError, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

#[async_trait]
pub trait TrainerRepository: Send + Sync {
    async fn insert(&self, trainer: NewTrainer) -> Result<Trainer>;
    async fn update(&self, trainer: Trainer) -> Result<Trainer>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Trainer>>;
    /// Usernames compare case-insensitively.
    async fn find_by_username(&self, username: &str) -> Result<Option<Trainer>>;
    /// All trainers, ordered by id.
    async fn find_all(&self) -> Result<Vec<Trainer>>;
    async fn count_admins(&self) -> Result<usize>;
}

/// Process-local trainer storage. Ids come from a sequence starting at 1.
pub struct InMemoryTrainerRepository {
    trainers: DashMap<i64, Trainer>,
    sequence: AtomicI64,
}

impl Default for InMemoryTrainerRepository {
    fn default() -> Self {
        Self {
            trainers: DashMap::new(),
            sequence: AtomicI64::new(1),
        }
    }
}

impl InMemoryTrainerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TrainerRepository for InMemoryTrainerRepository {
    async fn insert(&self, trainer: NewTrainer) -> Result<Trainer> {
        let id = self.sequence.fetch_add(1, Ordering::SeqCst);
        let trainer = Trainer {
            id,
            name: trainer.name,
            surname: trainer.surname,
            username: trainer.username,
            born: trainer.born,
            admin: trainer.admin,
        };
        self.trainers.insert(id, trainer.clone());
        tracing::trace!(id, "trainer inserted");
        Ok(trainer)
    }

    async fn update(&self, trainer: Trainer) -> Result<Trainer> {
        let mut stored = self
            .trainers
            .get_mut(&trainer.id)
            .ok_or(LeagueError::TrainerNotFound { id: trainer.id })?;
        *stored = trainer.clone();
        Ok(trainer)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Trainer>> {
        Ok(self.trainers.get(&id).map(|t| t.clone()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Trainer>> {
        Ok(self
            .trainers
            .iter()
            .find(|t| t.username.eq_ignore_ascii_case(username))
            .map(|t| t.clone()))
    }

    async fn find_all(&self) -> Result<Vec<Trainer>> {
        let mut trainers: Vec<Trainer> = self.trainers.iter().map(|t| t.clone()).collect();
        trainers.sort_by_key(|t| t.id);
        Ok(trainers)
    }

    async fn count_admins(&self) -> Result<usize> {
        Ok(self.trainers.iter().filter(|t| t.admin).count())
    }
}
