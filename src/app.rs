//! Application wiring: the root module, the shared infrastructure and the
//! axum router.

use crate::config::AppConfig;
use crate::i18n::Messages;
use crate::interceptor::{InterceptorLayer, RequestLoggingInterceptor};
use crate::modules::trainer::{
    AdminTrainerController, InMemoryTrainerRepository, TrainerController, TrainerModule,
};
use crate::prelude::*;
use crate::web::{FlashStore, Views};
use tower_http::trace::TraceLayer;

/// Root application module
#[module(imports = [TrainerModule])]
pub struct AppModule;

/// Container holding the services that have no DI dependencies of their own.
/// Modules are registered on top of it.
pub fn infrastructure(config: &AppConfig) -> Result<Container> {
    Ok(ContainerBuilder::new()
        .register(Messages::embedded(&config.default_locale)?)
        .register(Views::embedded()?)
        .register(FlashStore::new())
        .register(InMemoryTrainerRepository::new())
        .build())
}

/// Infrastructure plus every module, ready for [`build_router`].
pub fn bootstrap(config: &AppConfig) -> Result<Container> {
    let mut container = infrastructure(config)?;
    AppModule::register(&mut container)?;
    tracing::debug!(services = container.len(), "container ready");
    Ok(container)
}

/// Build the HTTP router from a container holding both controllers'
/// dependencies.
pub fn build_router(container: Container) -> Result<Router> {
    let admin_trainer = Arc::new(AdminTrainerController::inject(&container)?);
    let trainer = Arc::new(TrainerController::inject(&container)?);

    let interceptors = InterceptorLayer::new(vec![Box::new(RequestLoggingInterceptor)]);

    Ok(Router::new()
        .nest(
            AdminTrainerController::base_path(),
            AdminTrainerController::router(admin_trainer),
        )
        .nest(
            TrainerController::base_path(),
            TrainerController::router(trainer),
        )
        .layer(interceptors)
        .layer(TraceLayer::new_for_http()))
}
