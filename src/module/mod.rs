use crate::di::Container;
use crate::error::Result;

/// Trait for application modules
///
/// Modules are defined with the `#[module]` macro, which implements this
/// trait: trait bindings first, then imported modules, then providers and
/// controllers in declaration order.
///
/// # Example
/// ```ignore
/// use pokeleague::prelude::*;
///
/// #[module(
///     controllers = [AdminTrainerController],
///     providers = [TrainerService, TrainerFacadeImpl],
/// )]
/// pub struct TrainerModule;
/// ```
pub trait Module {
    /// Register all providers and controllers in this module
    fn register(container: &mut Container) -> Result<()>;
}
