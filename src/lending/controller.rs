use axum::{
    extract::{Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::Value;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::lending::command::checkin_books_cmd::{CheckinBooksCommand, CheckinBooksCommandRequest, CheckinBooksCommandResponse};
use crate::lending::command::checkout_books_cmd::{CheckoutBooksCommand, CheckoutBooksCommandRequest, CheckoutBooksCommandResponse};
use crate::lending::command::issue_card_cmd::{IssueCardCommand, IssueCardCommandRequest, IssueCardCommandResponse};
use crate::lending::command::list_catalog_cmd::{ListCatalogCommand, ListCatalogCommandRequest, ListCatalogCommandResponse};
use crate::lending::command::list_members_cmd::{ListMembersCommand, ListMembersCommandRequest, ListMembersCommandResponse};
use crate::lending::command::overdue_books_cmd::{OverdueBooksCommand, OverdueBooksCommandRequest, OverdueBooksCommandResponse, OverdueScope};
use crate::lending::command::renew_books_cmd::{RenewBooksCommand, RenewBooksCommandRequest, RenewBooksCommandResponse};
use crate::lending::command::search_catalog_cmd::{SearchCatalogCommand, SearchCatalogCommandRequest, SearchCatalogCommandResponse};
use crate::lending::command::serve_member_cmd::{ServeMemberCommand, ServeMemberCommandRequest, ServeMemberCommandResponse};
use crate::lending::command::session_cmd::{SessionAction, SessionCommand, SessionCommandRequest, SessionCommandResponse};
use crate::lending::domain::LendingService;
use crate::lending::factory;

fn build_service(state: AppState) -> Box<dyn LendingService> {
    factory::create_lending_service(&state.config, state.library, state.publisher)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/library/open", post(open_library))
        .route("/library/close", post(close_library))
        .route("/library/quit", post(quit_library))
        .route("/members", get(list_members).post(issue_card))
        .route("/members/serve", post(serve_member))
        .route("/members/notices", post(send_overdue_notices))
        .route("/loans/checkout", post(checkout_books))
        .route("/loans/checkin", post(checkin_books))
        .route("/loans/renew", post(renew_books))
        .route("/loans/overdue", get(find_overdue_books))
        .route("/loans/overdue/all", get(find_all_overdue_books))
        .route("/catalog", get(list_catalog))
        .route("/catalog/search", get(search_catalog))
        .with_state(state)
}

async fn run_session(state: AppState, action: SessionAction) -> Result<Json<SessionCommandResponse>, ServerError> {
    let svc = build_service(state);
    let res = SessionCommand::new(svc).execute(SessionCommandRequest::new(action)).await?;
    Ok(Json(res))
}

async fn run_overdue(state: AppState, scope: OverdueScope) -> Result<Json<OverdueBooksCommandResponse>, ServerError> {
    let svc = build_service(state);
    let res = OverdueBooksCommand::new(svc).execute(OverdueBooksCommandRequest::new(scope)).await?;
    Ok(Json(res))
}

pub(crate) async fn open_library(
    State(state): State<AppState>) -> Result<Json<SessionCommandResponse>, ServerError> {
    run_session(state, SessionAction::Open).await
}

pub(crate) async fn close_library(
    State(state): State<AppState>) -> Result<Json<SessionCommandResponse>, ServerError> {
    run_session(state, SessionAction::Close).await
}

pub(crate) async fn quit_library(
    State(state): State<AppState>) -> Result<Json<SessionCommandResponse>, ServerError> {
    run_session(state, SessionAction::Quit).await
}

pub(crate) async fn issue_card(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<IssueCardCommandResponse>, ServerError> {
    let req: IssueCardCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state);
    let res = IssueCardCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn serve_member(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ServeMemberCommandResponse>, ServerError> {
    let req: ServeMemberCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state);
    let res = ServeMemberCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn list_members(
    State(state): State<AppState>) -> Result<Json<ListMembersCommandResponse>, ServerError> {
    let svc = build_service(state);
    let res = ListMembersCommand::new(svc).execute(ListMembersCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn checkout_books(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<CheckoutBooksCommandResponse>, ServerError> {
    let req: CheckoutBooksCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state);
    let res = CheckoutBooksCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn checkin_books(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<CheckinBooksCommandResponse>, ServerError> {
    let req: CheckinBooksCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state);
    let res = CheckinBooksCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn renew_books(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<RenewBooksCommandResponse>, ServerError> {
    let req: RenewBooksCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(state);
    let res = RenewBooksCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_overdue_books(
    State(state): State<AppState>) -> Result<Json<OverdueBooksCommandResponse>, ServerError> {
    run_overdue(state, OverdueScope::ActiveMember).await
}

pub(crate) async fn find_all_overdue_books(
    State(state): State<AppState>) -> Result<Json<OverdueBooksCommandResponse>, ServerError> {
    run_overdue(state, OverdueScope::AllMembers).await
}

pub(crate) async fn send_overdue_notices(
    State(state): State<AppState>) -> Result<Json<OverdueBooksCommandResponse>, ServerError> {
    run_overdue(state, OverdueScope::Notices).await
}

pub(crate) async fn list_catalog(
    State(state): State<AppState>) -> Result<Json<ListCatalogCommandResponse>, ServerError> {
    let svc = build_service(state);
    let res = ListCatalogCommand::new(svc).execute(ListCatalogCommandRequest::default()).await?;
    Ok(Json(res))
}

pub(crate) async fn search_catalog(
    State(state): State<AppState>,
    Query(req): Query<SearchCatalogCommandRequest>) -> Result<Json<SearchCatalogCommandResponse>, ServerError> {
    let svc = build_service(state);
    let res = SearchCatalogCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

#[cfg(test)]
mod tests {
    use axum::extract::{Query, State};
    use axum::http::StatusCode;
    use axum::response::Json;
    use serde_json::json;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::lending::command::search_catalog_cmd::SearchCatalogCommandRequest;
    use crate::lending::controller::{checkin_books, checkout_books, close_library, find_all_overdue_books,
                                     find_overdue_books, issue_card, list_catalog, list_members, open_library,
                                     quit_library, renew_books, router, search_catalog, send_overdue_notices, serve_member};
    use crate::lending::domain::model::tests::seed;
    use crate::lending::factory::create_library;

    fn build_state() -> AppState {
        let config = Configuration::new("test");
        let library = create_library(&config, &seed());
        AppState::new(config, library)
    }

    #[tokio::test]
    async fn test_should_serve_lending_session() {
        let state = build_state();
        let res = open_library(State(state.clone())).await.expect("should open");
        assert_eq!("Today is day 1.", res.0.outcome.message);
        issue_card(State(state.clone()), Json(json!({"name": "Bruce Banner"}))).await.expect("should issue card");
        serve_member(State(state.clone()), Json(json!({"name": "Bruce Banner"}))).await.expect("should serve");
        let res = checkout_books(State(state.clone()), Json(json!({"book_ids": [1, 2]}))).await.expect("should check out");
        assert_eq!("2 books have been checked out to Bruce Banner.", res.0.outcome.message);
        renew_books(State(state.clone()), Json(json!({"book_ids": [1]}))).await.expect("should renew");
        checkin_books(State(state.clone()), Json(json!({"book_ids": [2]}))).await.expect("should check in");
        let res = find_overdue_books(State(state.clone())).await.expect("should report");
        assert_eq!("\nOverdue books for Bruce Banner: \n\tNone\n", res.0.outcome.message);
        find_all_overdue_books(State(state.clone())).await.expect("should report");
        send_overdue_notices(State(state.clone())).await.expect("should report");
        assert_eq!(11, list_catalog(State(state.clone())).await.expect("should list").0.books.len());
        assert_eq!(1, list_members(State(state.clone())).await.expect("should list").0.members.len());
        close_library(State(state.clone())).await.expect("should close");
        quit_library(State(state)).await.expect("should quit");
    }

    #[tokio::test]
    async fn test_should_map_errors_to_status() {
        let state = build_state();
        let err = issue_card(State(state.clone()), Json(json!({"name": "Bruce Banner"}))).await.err().expect("should fail");
        assert_eq!(StatusCode::CONFLICT, err.0);
        open_library(State(state.clone())).await.expect("should open");
        let err = issue_card(State(state.clone()), Json(json!({"email": "bruce"}))).await.err().expect("should fail");
        assert_eq!(StatusCode::BAD_REQUEST, err.0);
        issue_card(State(state.clone()), Json(json!({"name": "Bruce Banner"}))).await.expect("should issue card");
        serve_member(State(state.clone()), Json(json!({"name": "Bruce Banner"}))).await.expect("should serve");
        let err = checkout_books(State(state.clone()), Json(json!({"book_ids": [1, 99]}))).await.err().expect("should fail");
        assert_eq!(StatusCode::NOT_FOUND, err.0);
        assert_eq!(12, list_catalog(State(state)).await.expect("should list").0.books.len());
    }

    #[tokio::test]
    async fn test_should_search_catalog() {
        let state = build_state();
        let res = search_catalog(State(state.clone()), Query(SearchCatalogCommandRequest::new("doll"))).await.expect("should search");
        assert_eq!("12: A Doll's House : a play, by Henrik Ibsen\n", res.0.outcome.message);
        let _ = router(state);
    }
}
