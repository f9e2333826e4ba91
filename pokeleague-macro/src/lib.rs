use proc_macro::TokenStream;

mod controller;
mod http_methods;
mod injectable;
mod module;

/// Derive macro for making a struct injectable into the DI container
///
/// Every field must be an `Arc<T>` or an `Arc<dyn Trait>`; trait objects are
/// resolved through the container's trait bindings.
///
/// # Example
/// ```ignore
/// use pokeleague::prelude::*;
///
/// #[derive(Injectable)]
/// pub struct TrainerService {
///     repository: Arc<dyn TrainerRepository>,
/// }
/// ```
#[proc_macro_derive(Injectable)]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    injectable::derive_injectable(input)
}

/// Attribute macro for defining a controller with automatic DI registration
///
/// # Example
/// ```ignore
/// #[controller(path = "/admin/trainer")]
/// pub struct AdminTrainerController {
///     facade: Arc<dyn TrainerFacade>,
/// }
/// ```
#[proc_macro_attribute]
pub fn controller(attr: TokenStream, item: TokenStream) -> TokenStream {
    controller::controller_attribute(attr, item)
}

/// Attribute macro for defining routes in an impl block
///
/// Generates a `router()` function wiring every `#[get]`/`#[post]` method
/// into an `axum::Router`. Parameters marked `#[param]` or `#[form]` are
/// extracted with `Path` or `Form`; any other parameter must itself be an
/// axum extractor.
///
/// # Example
/// ```ignore
/// #[routes(AdminTrainerController)]
/// impl AdminTrainerController {
///     #[post("/setAdmin/{id}")]
///     async fn set_admin(&self, jar: CookieJar, #[param] id: i64) -> Result<Response> {
///         // ...
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn routes(attr: TokenStream, item: TokenStream) -> TokenStream {
    controller::routes_attribute(attr, item)
}

/// Attribute macro for defining a module with providers and controllers
///
/// # Example
/// ```ignore
/// #[module(
///     controllers = [AdminTrainerController],
///     providers = [TrainerService, TrainerFacadeImpl],
///     bindings = [(dyn TrainerFacade => TrainerFacadeImpl)],
/// )]
/// pub struct TrainerModule;
/// ```
#[proc_macro_attribute]
pub fn module(attr: TokenStream, item: TokenStream) -> TokenStream {
    module::module_attribute(attr, item)
}

/// HTTP GET method attribute for controller methods
#[proc_macro_attribute]
pub fn get(attr: TokenStream, item: TokenStream) -> TokenStream {
    http_methods::http_method_attribute("GET", attr, item)
}

/// HTTP POST method attribute for controller methods
#[proc_macro_attribute]
pub fn post(attr: TokenStream, item: TokenStream) -> TokenStream {
    http_methods::http_method_attribute("POST", attr, item)
}

/// Parameter attribute for url-encoded form bodies
/// Wraps the parameter with axum::Form extractor; must be the last parameter
#[proc_macro_attribute]
pub fn form(_attr: TokenStream, item: TokenStream) -> TokenStream {
    item
}

/// Parameter attribute for path parameters
/// Wraps the parameter with axum::extract::Path extractor
#[proc_macro_attribute]
pub fn param(_attr: TokenStream, item: TokenStream) -> TokenStream {
    item
}
