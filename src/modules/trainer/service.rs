use super::domain::{NewTrainer, Trainer};
use super::repository::TrainerRepository;
use crate::di::{Container, Injectable};
use crate::error::{LeagueError, Result};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Trainer use cases.
///
/// The league keeps at least one administrator once it has trainers: the
/// first trainer must be an administrator and the last administrator cannot
/// be demoted. Writes are serialized so two concurrent demotions cannot both
/// see "another admin exists".
pub struct TrainerService {
    repository: Arc<dyn TrainerRepository>,
    write_gate: Mutex<()>,
}

impl Injectable for TrainerService {
    fn inject(container: &Container) -> Result<Self> {
        Ok(Self::new(container.resolve_trait::<dyn TrainerRepository>()?))
    }
}

impl TrainerService {
    pub fn new(repository: Arc<dyn TrainerRepository>) -> Self {
        Self {
            repository,
            write_gate: Mutex::new(()),
        }
    }

    pub async fn create(&self, trainer: NewTrainer) -> Result<Trainer> {
        let _gate = self.write_gate.lock().await;

        if self
            .repository
            .find_by_username(&trainer.username)
            .await?
            .is_some()
        {
            return Err(LeagueError::UsernameTaken {
                username: trainer.username,
            });
        }

        if !trainer.admin && self.repository.count_admins().await? == 0 {
            tracing::warn!(
                username = %trainer.username,
                "refusing non-admin trainer, league has no administrator"
            );
            return Err(LeagueError::NoAdministrator);
        }

        let created = self.repository.insert(trainer).await?;
        tracing::info!(
            id = created.id,
            username = %created.username,
            admin = created.admin,
            "trainer created"
        );
        Ok(created)
    }

    pub async fn set_admin(&self, id: i64, admin: bool) -> Result<Trainer> {
        let _gate = self.write_gate.lock().await;

        let mut trainer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(LeagueError::TrainerNotFound { id })?;

        if trainer.admin == admin {
            tracing::debug!(id, admin, "admin flag unchanged");
            return Ok(trainer);
        }

        if !admin && self.repository.count_admins().await? <= 1 {
            tracing::warn!(id, "refusing to demote the last administrator");
            return Err(LeagueError::NoAdministrator);
        }

        trainer.admin = admin;
        let updated = self.repository.update(trainer).await?;
        tracing::info!(id, admin, "trainer admin flag changed");
        Ok(updated)
    }

    pub async fn find_all(&self) -> Result<Vec<Trainer>> {
        self.repository.find_all().await
    }
}
