use super::domain::{NewTrainer, TrainerCreateForm, TrainerView};
use super::service::TrainerService;
use crate::prelude::*;

/// What the web layer is allowed to do with trainers.
#[async_trait]
pub trait TrainerFacade: Send + Sync {
    /// Create a trainer from a validated form, returning its id.
    async fn create_trainer(&self, form: &TrainerCreateForm) -> Result<i64>;

    async fn set_admin(&self, id: i64, admin: bool) -> Result<()>;

    async fn find_all_trainers(&self) -> Result<Vec<TrainerView>>;
}

#[derive(Injectable)]
pub struct TrainerFacadeImpl {
    service: Arc<TrainerService>,
}

#[async_trait]
impl TrainerFacade for TrainerFacadeImpl {
    async fn create_trainer(&self, form: &TrainerCreateForm) -> Result<i64> {
        let born = form.born_date().ok_or_else(|| LeagueError::InvalidForm {
            message: format!("born '{}' is not a date", form.born),
        })?;

        let trainer = NewTrainer {
            name: form.name.trim().to_string(),
            surname: form.surname.trim().to_string(),
            username: form.username.trim().to_string(),
            born,
            admin: form.is_admin(),
        };
        Ok(self.service.create(trainer).await?.id)
    }

    async fn set_admin(&self, id: i64, admin: bool) -> Result<()> {
        self.service.set_admin(id, admin).await?;
        Ok(())
    }

    async fn find_all_trainers(&self) -> Result<Vec<TrainerView>> {
        let trainers = self.service.find_all().await?;
        Ok(trainers.into_iter().map(TrainerView::from).collect())
    }
}
