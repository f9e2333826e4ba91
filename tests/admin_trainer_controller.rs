mod common;

use axum::http::StatusCode;
use common::{Client, assert_redirect, body_text};
use mockall::mock;
use mockall::predicate::eq;
use pokeleague::app;
use pokeleague::i18n::Messages;
use pokeleague::modules::trainer::{TrainerCreateForm, TrainerFacade, TrainerView};
use pokeleague::prelude::*;
use pokeleague::web::{FlashStore, Views};

mock! {
    pub Facade {}

    #[async_trait]
    impl TrainerFacade for Facade {
        async fn create_trainer(&self, form: &TrainerCreateForm) -> Result<i64>;
        async fn set_admin(&self, id: i64, admin: bool) -> Result<()>;
        async fn find_all_trainers(&self) -> Result<Vec<TrainerView>>;
    }
}

const VALID_FORM: &str = "name=Ash&surname=Ketchum&username=ash&born=1997-04-01";

fn client(mut facade: MockFacade) -> Client {
    facade
        .expect_find_all_trainers()
        .returning(|| Ok(Vec::new()));

    let container = ContainerBuilder::new()
        .register(facade)
        .bind::<dyn TrainerFacade, MockFacade, _>(|f| f as Arc<dyn TrainerFacade>)
        .register(Messages::embedded("en").unwrap())
        .register(FlashStore::new())
        .register(Views::embedded().unwrap())
        .build();
    Client::new(app::build_router(container).unwrap())
}

fn has_error(html: &str, field: &str) -> bool {
    html.contains(&format!(r#"data-error-for="{field}""#))
}

#[tokio::test]
async fn new_form_renders_empty() {
    let mut client = client(MockFacade::new());
    let response = client.get("/admin/trainer/new").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(r#"action="/admin/trainer/create""#));
    assert!(!html.contains("help-block"));
}

#[tokio::test]
async fn invalid_form_is_rerendered_without_calling_facade() {
    let mut facade = MockFacade::new();
    facade.expect_create_trainer().never();
    let mut client = client(facade);

    let response = client
        .post_form(
            "/admin/trainer/create",
            "name=&surname=Ketchum&username=a%20b&born=1997-04-01",
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(has_error(&html, "name"));
    assert!(has_error(&html, "username"));
    assert!(!has_error(&html, "surname"));
    assert!(!has_error(&html, "born"));
    assert!(html.contains(r#"value="Ketchum""#));
    assert!(html.contains("Please enter a valid value."));
}

#[tokio::test]
async fn empty_submission_flags_every_required_field() {
    let mut facade = MockFacade::new();
    facade.expect_create_trainer().never();
    let mut client = client(facade);

    let html = body_text(client.post_form("/admin/trainer/create", "").await).await;
    for field in ["name", "surname", "username", "born"] {
        assert!(has_error(&html, field), "{field} should be flagged");
    }
}

#[tokio::test]
async fn valid_form_creates_once_and_redirects_to_list() {
    let mut facade = MockFacade::new();
    facade
        .expect_create_trainer()
        .withf(|form| form.username == "ash" && !form.is_admin())
        .times(1)
        .returning(|_| Ok(42));
    let mut client = client(facade);

    let response = client.post_form("/admin/trainer/create", VALID_FORM).await;
    assert_redirect(&response, "/trainer/list");

    let html = body_text(client.get("/trainer/list").await).await;
    assert!(html.contains(r#"class="alert alert-success""#));
    assert!(html.contains("Trainer with id 42 was created successfully."));

    // Shown once.
    let html = body_text(client.get("/trainer/list").await).await;
    assert!(!html.contains("alert-success"));
}

#[tokio::test]
async fn no_administrator_on_create_redirects_back_with_warning() {
    let mut facade = MockFacade::new();
    facade
        .expect_create_trainer()
        .times(1)
        .returning(|_| Err(LeagueError::NoAdministrator));
    let mut client = client(facade);

    let response = client.post_form("/admin/trainer/create", VALID_FORM).await;
    assert_redirect(&response, "/admin/trainer/create");

    let html = body_text(client.get("/admin/trainer/create").await).await;
    assert!(html.contains(r#"class="alert alert-warning""#));
    assert!(html.contains("The league must always have at least one administrator."));
}

#[tokio::test]
async fn repeated_text_field_is_rerendered_as_invalid() {
    let mut facade = MockFacade::new();
    facade.expect_create_trainer().never();
    let mut client = client(facade);

    let response = client
        .post_form("/admin/trainer/create", &format!("{VALID_FORM}&name=Red"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(has_error(&html, "name"));
    assert!(!has_error(&html, "surname"));
    assert!(html.contains(r#"value="Ash""#));
}

#[tokio::test]
async fn repeated_admin_checkbox_still_creates_an_administrator() {
    let mut facade = MockFacade::new();
    facade
        .expect_create_trainer()
        .withf(|form| form.username == "ash" && form.is_admin())
        .times(1)
        .returning(|_| Ok(1));
    let mut client = client(facade);

    let response = client
        .post_form(
            "/admin/trainer/create",
            &format!("{VALID_FORM}&admin=on&admin=on"),
        )
        .await;
    assert_redirect(&response, "/trainer/list");
}

#[tokio::test]
async fn undecodable_name_is_rerendered_as_invalid() {
    let mut facade = MockFacade::new();
    facade.expect_create_trainer().never();
    let mut client = client(facade);

    let response = client
        .post_form(
            "/admin/trainer/create",
            "name=A%FFsh&surname=Ketchum&username=ash&born=1997-04-01",
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(has_error(&html, "name"));
    assert!(!has_error(&html, "username"));
}

#[tokio::test]
async fn set_admin_promotes() {
    let mut facade = MockFacade::new();
    facade
        .expect_set_admin()
        .with(eq(7), eq(true))
        .times(1)
        .returning(|_, _| Ok(()));
    let mut client = client(facade);

    let response = client.post("/admin/trainer/setAdmin/7").await;
    assert_redirect(&response, "/trainer/list");

    let html = body_text(client.get("/trainer/list").await).await;
    assert!(html.contains("Trainer was updated successfully."));
}

#[tokio::test]
async fn unset_admin_warns_when_last_administrator() {
    let mut facade = MockFacade::new();
    facade
        .expect_set_admin()
        .with(eq(7), eq(false))
        .times(1)
        .returning(|_, _| Err(LeagueError::NoAdministrator));
    let mut client = client(facade);

    let response = client.post("/admin/trainer/unsetAdmin/7").await;
    assert_redirect(&response, "/trainer/list");

    let html = body_text(client.get("/trainer/list").await).await;
    assert!(html.contains(r#"class="alert alert-warning""#));
    assert!(!html.contains("alert-success"));
}

#[tokio::test]
async fn set_admin_warns_on_no_administrator() {
    let mut facade = MockFacade::new();
    facade
        .expect_set_admin()
        .with(eq(7), eq(true))
        .times(1)
        .returning(|_, _| Err(LeagueError::NoAdministrator));
    let mut client = client(facade);

    let response = client.post("/admin/trainer/setAdmin/7").await;
    assert_redirect(&response, "/trainer/list");

    let html = body_text(client.get("/trainer/list").await).await;
    assert!(html.contains(r#"class="alert alert-warning""#));
    assert!(html.contains("The league must always have at least one administrator."));
}

#[tokio::test]
async fn unset_admin_demotes() {
    let mut facade = MockFacade::new();
    facade
        .expect_set_admin()
        .with(eq(7), eq(false))
        .times(1)
        .returning(|_, _| Ok(()));
    let mut client = client(facade);

    let response = client.post("/admin/trainer/unsetAdmin/7").await;
    assert_redirect(&response, "/trainer/list");

    let html = body_text(client.get("/trainer/list").await).await;
    assert!(html.contains(r#"class="alert alert-success""#));
    assert!(html.contains("Trainer was updated successfully."));
}

#[tokio::test]
async fn other_failures_use_the_error_response() {
    let mut facade = MockFacade::new();
    facade
        .expect_set_admin()
        .returning(|id, _| Err(LeagueError::TrainerNotFound { id }));
    let mut client = client(facade);

    let response = client.post("/admin/trainer/setAdmin/99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_id_is_rejected() {
    let mut facade = MockFacade::new();
    facade.expect_set_admin().never();
    let mut client = client(facade);

    let response = client.post("/admin/trainer/setAdmin/pikachu").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn flash_is_localized_from_accept_language() {
    let mut facade = MockFacade::new();
    facade.expect_create_trainer().returning(|_| Ok(3));
    let mut client = client(facade).with_language("cs-CZ,cs;q=0.9,en;q=0.5");

    let response = client.post_form("/admin/trainer/create", VALID_FORM).await;
    assert_redirect(&response, "/trainer/list");

    let html = body_text(client.get("/trainer/list").await).await;
    assert!(html.contains("Trenér s id 3 byl úspěšně vytvořen."));
}
