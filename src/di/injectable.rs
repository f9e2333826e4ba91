use crate::di::Container;
use crate::error::Result;

/// Trait for types that can be injected from the DI container
///
/// This trait is typically implemented automatically via the `#[derive(Injectable)]`
/// or `#[controller]` macros.
///
/// # Example
/// ```ignore
/// use pokeleague::prelude::*;
///
/// #[derive(Injectable)]
/// pub struct TrainerService {
///     // This field will be resolved from the container
///     repository: Arc<dyn TrainerRepository>,
/// }
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Create an instance by resolving dependencies from the container
    ///
    /// # Errors
    /// Returns an error if any required dependency is not found in the container.
    fn inject(container: &Container) -> Result<Self>;
}
