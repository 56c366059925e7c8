//! Resource gateways: one function per domain operation, one HTTP call each.
//!
//! DESIGN
//! ======
//! Gateways are pure mappings onto [`HttpClient::send`]. They never catch
//! errors, never retry, and validate nothing beyond what the originating
//! form already enforced; the backend is the authority on correctness.
//! The client instance is passed in rather than held globally, so tests
//! and alternate shells can substitute their own.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::http::{ApiError, HttpClient, Method};
use super::types::{
    AdminUser, Disease, DiseaseListResponse, HistoryRecord, NewsArticle, NewsDraft,
    NewsListResponse, Tip, TipListResponse,
};

fn decode<T: DeserializeOwned>(data: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<T: serde::Serialize>(body: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn delete_tip_payload(crop_name: &str) -> serde_json::Value {
    serde_json::json!({ "crop_name": crop_name })
}

fn delete_disease_payload(disease_name: &str) -> serde_json::Value {
    serde_json::json!({ "disease_name": disease_name })
}

fn delete_news_payload(title: &str) -> serde_json::Value {
    serde_json::json!({ "title": title })
}

fn login_payload(username: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "username": username, "password": password })
}

// =============================================================
// Tips
// =============================================================

/// `GET /api/tips`.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the call or envelope decoding.
pub async fn fetch_tips(api: &HttpClient) -> Result<Vec<Tip>, ApiError> {
    let resp = api.send(Method::Get, "/api/tips", None).await?;
    let body: TipListResponse = decode(resp.data)?;
    Ok(body.tips)
}

/// `POST /admin_dashboard/add_tip` (session + CSRF).
///
/// # Errors
///
/// Propagates any [`ApiError`]; 401/403 surface as `AuthRequired`.
pub async fn add_tip(api: &HttpClient, tip: &Tip) -> Result<(), ApiError> {
    let body = encode(tip)?;
    api.send(Method::Post, "/admin_dashboard/add_tip", Some(&body)).await?;
    Ok(())
}

/// `DELETE /admin_dashboard/delete_tip` (session + CSRF).
///
/// # Errors
///
/// Propagates any [`ApiError`]; the backend answers 404 for unknown crops.
pub async fn delete_tip(api: &HttpClient, crop_name: &str) -> Result<(), ApiError> {
    let body = delete_tip_payload(crop_name);
    api.send(Method::Delete, "/admin_dashboard/delete_tip", Some(&body)).await?;
    Ok(())
}

// =============================================================
// Diseases
// =============================================================

/// `GET /api/diseases`.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the call or envelope decoding.
pub async fn fetch_diseases(api: &HttpClient) -> Result<Vec<Disease>, ApiError> {
    let resp = api.send(Method::Get, "/api/diseases", None).await?;
    let body: DiseaseListResponse = decode(resp.data)?;
    Ok(body.diseases)
}

/// `POST /admin_dashboard/add_disease` (session + CSRF).
///
/// # Errors
///
/// Propagates any [`ApiError`].
pub async fn add_disease(api: &HttpClient, disease: &Disease) -> Result<(), ApiError> {
    let body = encode(disease)?;
    api.send(Method::Post, "/admin_dashboard/add_disease", Some(&body)).await?;
    Ok(())
}

/// `DELETE /admin_dashboard/delete_disease` (session + CSRF).
///
/// # Errors
///
/// Propagates any [`ApiError`].
pub async fn delete_disease(api: &HttpClient, disease_name: &str) -> Result<(), ApiError> {
    let body = delete_disease_payload(disease_name);
    api.send(Method::Delete, "/admin_dashboard/delete_disease", Some(&body)).await?;
    Ok(())
}

// =============================================================
// News
// =============================================================

/// `GET /api/news`.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the call or envelope decoding.
pub async fn fetch_news(api: &HttpClient) -> Result<Vec<NewsArticle>, ApiError> {
    let resp = api.send(Method::Get, "/api/news", None).await?;
    let body: NewsListResponse = decode(resp.data)?;
    Ok(body.news)
}

/// `POST /admin_dashboard/add_news` (session + CSRF). The backend stamps
/// the publication timestamp, so the payload is a [`NewsDraft`].
///
/// # Errors
///
/// Propagates any [`ApiError`].
pub async fn add_news(api: &HttpClient, draft: &NewsDraft) -> Result<(), ApiError> {
    let body = encode(draft)?;
    api.send(Method::Post, "/admin_dashboard/add_news", Some(&body)).await?;
    Ok(())
}

/// `DELETE /admin_dashboard/delete_news` (session + CSRF).
///
/// # Errors
///
/// Propagates any [`ApiError`].
pub async fn delete_news(api: &HttpClient, title: &str) -> Result<(), ApiError> {
    let body = delete_news_payload(title);
    api.send(Method::Delete, "/admin_dashboard/delete_news", Some(&body)).await?;
    Ok(())
}

// =============================================================
// History
// =============================================================

/// `GET /api/history` — a bare JSON array, no envelope.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the call or decoding.
pub async fn fetch_history(api: &HttpClient) -> Result<Vec<HistoryRecord>, ApiError> {
    let resp = api.send(Method::Get, "/api/history", None).await?;
    decode(resp.data)
}

// =============================================================
// Auth
// =============================================================

/// `POST /auth/admin_login`. On success the browser has received the
/// session and CSRF cookies; the response body itself is not needed.
///
/// # Errors
///
/// Bad credentials come back as `AuthRequired` (401).
pub async fn admin_login(api: &HttpClient, username: &str, password: &str) -> Result<(), ApiError> {
    let body = login_payload(username, password);
    api.send(Method::Post, "/auth/admin_login", Some(&body)).await?;
    Ok(())
}

/// `GET /auth/logout`. Ends the session; later mutating calls fail with
/// `AuthRequired` until re-login. Best effort, failures ignored.
pub async fn logout(api: &HttpClient) {
    let _ = api.send(Method::Get, "/auth/logout", None).await;
}

/// `GET /auth/me`. Returns `None` when there is no authenticated session
/// (or outside the browser), so the shell can redirect to login.
pub async fn fetch_current_user(api: &HttpClient) -> Option<AdminUser> {
    let resp = api.send(Method::Get, "/auth/me", None).await.ok()?;
    serde_json::from_value(resp.data).ok()
}
