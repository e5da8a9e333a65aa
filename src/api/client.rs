//! HTTP API Client
//!
//! Typed functions for communicating with the SecureBank REST API.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::api::types::{Account, BankInfo, Card, Employee, Kyc, Loan, Profile, Transaction};

/// Default backend origin when no deployment URL is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Errors surfaced by API calls.
///
/// `Unauthorized` is kept distinct from other server failures so callers can
/// force a logout instead of just showing a notice.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("session expired")]
    Unauthorized,
    #[error("{0}")]
    Api(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Decode(String),
}

/// Server error body (FastAPI-style `detail` field)
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// API root: deployment-time backend origin with `/api` appended
pub fn api_base() -> String {
    api_root(option_env!("SECUREBANK_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL))
}

fn api_root(backend_url: &str) -> String {
    format!("{}/api", backend_url.trim_end_matches('/'))
}

fn bearer(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {}", token))
}

/// Decode a response, mapping 401 and server-reported errors to the matching
/// `FetchError` variant
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    if response.status() == 401 {
        return Err(FetchError::Unauthorized);
    }

    if !response.ok() {
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        return Err(FetchError::Api(detail.unwrap_or_else(|| {
            format!("Request failed with status {}", response.status())
        })));
    }

    response
        .json()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, FetchError> {
    let mut builder = Request::get(&format!("{}{}", api_base(), path));
    if let Some(token) = token {
        builder = bearer(builder, token);
    }

    let response = builder
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    read_json(response).await
}

// ============ Auth ============

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    token: String,
}

/// Log in with email and password, returning the session token
pub async fn login(email: &str, password: &str) -> Result<String, FetchError> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        email: String,
        password: String,
    }

    let response = Request::post(&format!("{}/auth/login", api_base()))
        .json(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| FetchError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let result: TokenResponse = read_json(response).await?;
    Ok(result.token)
}

/// Profile fields submitted at registration
#[derive(Debug, serde::Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub address: String,
    pub nid_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nid_image: Option<String>,
    pub monthly_income: f64,
    pub gender: String,
    pub password: String,
}

/// Register a new customer, returning the session token
pub async fn register(request: &RegisterRequest) -> Result<String, FetchError> {
    let response = Request::post(&format!("{}/auth/register", api_base()))
        .json(request)
        .map_err(|e| FetchError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let result: TokenResponse = read_json(response).await?;
    Ok(result.token)
}

// ============ Dashboard reads ============

/// Fetch the customer profile
pub async fn fetch_profile(token: &str) -> Result<Profile, FetchError> {
    get_json("/user/profile", Some(token)).await
}

/// Fetch all accounts
pub async fn fetch_accounts(token: &str) -> Result<Vec<Account>, FetchError> {
    get_json("/accounts", Some(token)).await
}

/// Fetch the transaction history
pub async fn fetch_transactions(token: &str) -> Result<Vec<Transaction>, FetchError> {
    get_json("/transactions", Some(token)).await
}

/// Fetch all loans
pub async fn fetch_loans(token: &str) -> Result<Vec<Loan>, FetchError> {
    get_json("/loans", Some(token)).await
}

/// Fetch all cards
pub async fn fetch_cards(token: &str) -> Result<Vec<Card>, FetchError> {
    get_json("/cards", Some(token)).await
}

/// Fetch the KYC record
pub async fn fetch_kyc(token: &str) -> Result<Kyc, FetchError> {
    get_json("/kyc", Some(token)).await
}

// ============ Dashboard writes ============

/// Submit a loan application. The caller re-fetches the loan list on success
/// rather than inserting optimistically.
pub async fn apply_loan(token: &str, amount: f64, duration_months: u32) -> Result<(), FetchError> {
    #[derive(serde::Serialize)]
    struct LoanRequest {
        amount: f64,
        duration_months: u32,
    }

    let response = bearer(Request::post(&format!("{}/loans", api_base())), token)
        .json(&LoanRequest {
            amount,
            duration_months,
        })
        .map_err(|e| FetchError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if response.status() == 401 {
        return Err(FetchError::Unauthorized);
    }
    if !response.ok() {
        return Err(FetchError::Api("Failed to submit loan application".to_string()));
    }

    Ok(())
}

/// Replace the KYC document sequence with the given one
pub async fn update_kyc(token: &str, documents: &[String]) -> Result<(), FetchError> {
    #[derive(serde::Serialize)]
    struct KycRequest<'a> {
        documents: &'a [String],
    }

    let response = bearer(Request::put(&format!("{}/kyc", api_base())), token)
        .json(&KycRequest { documents })
        .map_err(|e| FetchError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if response.status() == 401 {
        return Err(FetchError::Unauthorized);
    }
    if !response.ok() {
        return Err(FetchError::Api("Failed to update KYC".to_string()));
    }

    Ok(())
}

// ============ Chat ============

/// Send a single support-chat message (no conversation history is carried)
/// and return the assistant's reply
pub async fn send_chat_message(token: &str, message: &str) -> Result<String, FetchError> {
    #[derive(serde::Serialize)]
    struct ChatRequest {
        message: String,
    }

    #[derive(serde::Deserialize)]
    struct ChatReply {
        response: String,
    }

    let response = bearer(Request::post(&format!("{}/chat", api_base())), token)
        .json(&ChatRequest {
            message: message.to_string(),
        })
        .map_err(|e| FetchError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let reply: ChatReply = read_json(response).await?;
    Ok(reply.response)
}

// ============ Public directory ============

/// Fetch the staff directory shown on the landing page
pub async fn fetch_employees() -> Result<Vec<Employee>, FetchError> {
    get_json("/employees", None).await
}

/// Fetch the branch directory shown on the landing page
pub async fn fetch_bank_info() -> Result<Vec<BankInfo>, FetchError> {
    get_json("/bank-info", None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_root_appends_api_segment() {
        assert_eq!(api_root("https://bank.example.com"), "https://bank.example.com/api");
    }

    #[test]
    fn test_api_root_trims_trailing_slash() {
        assert_eq!(api_root("https://bank.example.com/"), "https://bank.example.com/api");
    }
}
