use super::domain::TrainerCreateForm;
use super::facade::TrainerFacade;
use crate::i18n::{AcceptLanguage, FluentArgs, Messages};
use crate::prelude::*;
use crate::web::{BindingResult, FlashMessage, FlashStore, View, Views};
use axum::response::Html;
use axum_extra::extract::cookie::CookieJar;

pub const CREATE_VIEW: &str = "admin/trainer/create";
pub const CREATE_URL: &str = "/admin/trainer/create";
pub const LIST_URL: &str = "/trainer/list";

/// Administrator actions on trainer accounts.
#[controller(path = "/admin/trainer")]
pub struct AdminTrainerController {
    facade: Arc<dyn TrainerFacade>,
    messages: Arc<Messages>,
    flash: Arc<FlashStore>,
    views: Arc<Views>,
}

#[routes(AdminTrainerController)]
impl AdminTrainerController {
    #[get("/new")]
    pub async fn new_trainer(&self, locale: AcceptLanguage) -> Result<Html<String>> {
        tracing::debug!("showing trainer creation form");
        self.views
            .render(&self.create_view(&locale, &TrainerCreateForm::default()))
    }

    /// Landing page of the "no administrator" redirect, so it shows the warning.
    #[get("/create")]
    pub async fn create_form(
        &self,
        jar: CookieJar,
        locale: AcceptLanguage,
    ) -> Result<(CookieJar, Html<String>)> {
        tracing::debug!("showing trainer creation form after redirect");
        let (jar, flash) = self.flash.take(jar);
        let view = self
            .create_view(&locale, &TrainerCreateForm::default())
            .with_flash(&flash);
        Ok((jar, self.views.render(&view)?))
    }

    #[post("/create")]
    pub async fn create(
        &self,
        jar: CookieJar,
        locale: AcceptLanguage,
        #[form] fields: Vec<(String, String)>,
    ) -> Result<Response> {
        let (form, mut binding) = TrainerCreateForm::bind(fields);
        tracing::debug!(username = %form.username, "creating trainer");

        binding.merge(BindingResult::validate(&form));
        if binding.has_errors() {
            let error_text = self.messages.get(&locale, "form-field-invalid");
            let mut view = self
                .create_view(&locale, &form)
                .with("field_error_text", &error_text);
            for field in binding.fields() {
                tracing::trace!(field, codes = ?binding.codes(field), "invalid field");
                view = view.with(BindingResult::error_flag(field), &true);
            }
            return Ok(self.views.render(&view)?.into_response());
        }

        match self.facade.create_trainer(&form).await {
            Ok(id) => {
                let mut args = FluentArgs::new();
                args.set("id", id);
                let text = self
                    .messages
                    .get_with(&locale, "trainer-created-successfully", &args);
                Ok(self
                    .flash
                    .redirect(jar, LIST_URL, FlashMessage::success(text))
                    .into_response())
            }
            Err(LeagueError::NoAdministrator) => {
                let text = self.messages.get(&locale, "trainer-no-administrator");
                Ok(self
                    .flash
                    .redirect(jar, CREATE_URL, FlashMessage::warning(text))
                    .into_response())
            }
            Err(e) => Err(e),
        }
    }

    #[post("/setAdmin/{id}")]
    pub async fn set_admin(
        &self,
        jar: CookieJar,
        locale: AcceptLanguage,
        #[param] id: i64,
    ) -> Result<Response> {
        tracing::debug!(id, "promoting trainer to administrator");
        self.update_admin(jar, &locale, id, true).await
    }

    #[post("/unsetAdmin/{id}")]
    pub async fn unset_admin(
        &self,
        jar: CookieJar,
        locale: AcceptLanguage,
        #[param] id: i64,
    ) -> Result<Response> {
        tracing::debug!(id, "removing administrator rights");
        self.update_admin(jar, &locale, id, false).await
    }

    async fn update_admin(
        &self,
        jar: CookieJar,
        locale: &AcceptLanguage,
        id: i64,
        admin: bool,
    ) -> Result<Response> {
        let message = match self.facade.set_admin(id, admin).await {
            Ok(()) => {
                FlashMessage::success(self.messages.get(locale, "trainer-updated-successfully"))
            }
            Err(LeagueError::NoAdministrator) => {
                FlashMessage::warning(self.messages.get(locale, "trainer-no-administrator"))
            }
            Err(e) => return Err(e),
        };
        Ok(self.flash.redirect(jar, LIST_URL, message).into_response())
    }

    fn create_view(&self, locale: &AcceptLanguage, form: &TrainerCreateForm) -> View {
        View::new(CREATE_VIEW)
            .with("lang", self.messages.language_for(locale))
            .with("trainerCreate", form)
    }
}
