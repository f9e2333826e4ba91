use crate::prelude::*;

pub mod admin_controller;
pub mod domain;
pub mod facade;
pub mod list_controller;
pub mod repository;
pub mod service;

pub use admin_controller::AdminTrainerController;
pub use domain::{NewTrainer, Trainer, TrainerCreateForm, TrainerView};
pub use facade::{TrainerFacade, TrainerFacadeImpl};
pub use list_controller::TrainerController;
pub use repository::{InMemoryTrainerRepository, TrainerRepository};
pub use service::TrainerService;

/// Trainer administration.
///
/// The repository is infrastructure and must already be registered in the
/// container; this module binds it and builds everything on top of it.
#[module(
    controllers = [AdminTrainerController, TrainerController],
    providers = [TrainerService, TrainerFacadeImpl],
    bindings = [
        (dyn TrainerRepository => InMemoryTrainerRepository),
        (dyn TrainerFacade => TrainerFacadeImpl),
    ],
)]
pub struct TrainerModule;
