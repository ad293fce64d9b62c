use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Wire shape of an account; `balance` travels as a decimal string.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountDoc {
    #[schema(read_only)]
    pub id: Option<i64>,
    pub account_number: String,
    pub account_holder_name: String,
    #[schema(example = "5000.00")]
    pub balance: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::accounts::list_accounts,
        crate::routes::accounts::get_account,
        crate::routes::accounts::create_account,
        crate::routes::accounts::update_account,
        crate::routes::accounts::delete_account,
    ),
    components(
        schemas(
            HealthResponse,
            BankAccountDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "accounts")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_account_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/api/accounts"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/accounts/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }
}
