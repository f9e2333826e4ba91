//! Server-rendered web plumbing shared by the controllers: form binding,
//! flash messages and views.

pub mod binding;
pub mod flash;
pub mod view;

pub use binding::BindingResult;
pub use flash::{FlashLevel, FlashMessage, FlashStore};
pub use view::{View, Views};
