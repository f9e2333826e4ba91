use crate::error::Result;
use crate::web::FlashMessage;
use axum::response::Html;
use serde::Serialize;
use tera::{Context, Tera};

// Templates are compiled into the binary.
const TPL_LAYOUT: &str = include_str!("../../templates/layout.html");
const TPL_ADMIN_TRAINER_CREATE: &str = include_str!("../../templates/admin/trainer/create.html");
const TPL_TRAINER_LIST: &str = include_str!("../../templates/trainer/list.html");

/// Template engine holding every page of the application.
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn embedded() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("layout.html", TPL_LAYOUT),
            ("admin/trainer/create.html", TPL_ADMIN_TRAINER_CREATE),
            ("trainer/list.html", TPL_TRAINER_LIST),
        ])?;
        Ok(Self { tera })
    }

    pub fn render(&self, view: &View) -> Result<Html<String>> {
        let html = self.tera.render(&view.template_name(), &view.model)?;
        Ok(Html(html))
    }
}

/// A view name plus the model rendered into it.
#[derive(Debug, Clone)]
pub struct View {
    name: String,
    model: Context,
}

impl View {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: Context::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &Context {
        &self.model
    }

    pub fn with<T: Serialize + ?Sized>(mut self, key: impl Into<String>, value: &T) -> Self {
        self.model.insert(key, value);
        self
    }

    pub fn with_flash(mut self, messages: &[FlashMessage]) -> Self {
        for message in messages {
            self.model.insert(message.attribute_name(), &message.text);
        }
        self
    }

    fn template_name(&self) -> String {
        format!("{}.html", self.name)
    }
}
