use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::accounts::BankAccountDto;
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/api/accounts", tag = "accounts",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::BankAccountDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list_accounts(State(state): State<ServerState>) -> Result<Json<Vec<BankAccountDto>>, JsonApiError> {
    let list = state.accounts.list_accounts().await?;
    info!(count = list.len(), "list accounts");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/accounts/{id}", tag = "accounts",
    params(("id" = i64, Path, description = "Account ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::BankAccountDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_account(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<BankAccountDto>, JsonApiError> {
    Ok(Json(state.accounts.get_account(id).await?))
}

/// Responds 200 rather than 201; existing clients depend on it.
#[utoipa::path(
    post, path = "/api/accounts", tag = "accounts",
    request_body = crate::openapi::BankAccountDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::BankAccountDoc),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create_account(State(state): State<ServerState>, Json(input): Json<BankAccountDto>) -> Result<Json<BankAccountDto>, JsonApiError> {
    let created = state.accounts.create_account(input).await?;
    info!(id = ?created.id, account_number = %created.account_number, "created account");
    Ok(Json(created))
}

#[utoipa::path(
    put, path = "/api/accounts/{id}", tag = "accounts",
    params(("id" = i64, Path, description = "Account ID")),
    request_body = crate::openapi::BankAccountDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::BankAccountDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update_account(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(input): Json<BankAccountDto>,
) -> Result<Json<BankAccountDto>, JsonApiError> {
    let updated = state.accounts.update_account(id, input).await?;
    info!(id, "updated account");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/accounts/{id}", tag = "accounts",
    params(("id" = i64, Path, description = "Account ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete_account(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, JsonApiError> {
    state.accounts.delete_account(id).await?;
    info!(id, "deleted account");
    Ok(StatusCode::NO_CONTENT)
}
