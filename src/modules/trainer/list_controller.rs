use super::facade::TrainerFacade;
use crate::i18n::{AcceptLanguage, Messages};
use crate::prelude::*;
use crate::web::{FlashStore, View, Views};
use axum::response::Html;
use axum_extra::extract::cookie::CookieJar;

pub const LIST_VIEW: &str = "trainer/list";

#[controller(path = "/trainer")]
pub struct TrainerController {
    facade: Arc<dyn TrainerFacade>,
    messages: Arc<Messages>,
    flash: Arc<FlashStore>,
    views: Arc<Views>,
}

#[routes(TrainerController)]
impl TrainerController {
    #[get("/list")]
    pub async fn list(
        &self,
        jar: CookieJar,
        locale: AcceptLanguage,
    ) -> Result<(CookieJar, Html<String>)> {
        let trainers = self.facade.find_all_trainers().await?;
        tracing::debug!(count = trainers.len(), "listing trainers");

        let (jar, flash) = self.flash.take(jar);
        let view = View::new(LIST_VIEW)
            .with("lang", self.messages.language_for(&locale))
            .with("trainers", &trainers)
            .with_flash(&flash);
        Ok((jar, self.views.render(&view)?))
    }
}
