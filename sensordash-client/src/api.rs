/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! HTTP surface of the backend collaborator.
//!
//! | Endpoint          | Method | Response                                   |
//! |-------------------|--------|--------------------------------------------|
//! | `/live_data`      | GET    | gauge snapshot, `{}` until data exists     |
//! | `/recent_entries` | GET    | readings, oldest first                     |
//! | `/all_data`       | GET    | full `{timestamp, temperature, anomaly}`   |
//! | `/clear_log`      | POST   | `{status, message?}`, possibly empty       |

use std::fmt;

use reqwasm::http::Request;
use sensordash_types::{ClearResponse, HistoryPoint, LiveSnapshot, Reading};

use crate::constants::{ALL_DATA_PATH, CLEAR_LOG_PATH, LIVE_DATA_PATH, RECENT_ENTRIES_PATH};

#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    Network(String),
    Server(u16),
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "network error: {e}"),
            ApiError::Server(code) => write!(f, "server error (HTTP {code})"),
            ApiError::Decode(e) => write!(f, "undecodable response: {e}"),
        }
    }
}

pub async fn fetch_live(api_base: &str) -> Result<Option<LiveSnapshot>, ApiError> {
    let body = get_text(&format!("{api_base}{LIVE_DATA_PATH}")).await?;
    LiveSnapshot::parse(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn fetch_recent(api_base: &str) -> Result<Vec<Reading>, ApiError> {
    let body = get_text(&format!("{api_base}{RECENT_ENTRIES_PATH}")).await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn fetch_history(api_base: &str) -> Result<Vec<HistoryPoint>, ApiError> {
    let body = get_text(&format!("{api_base}{ALL_DATA_PATH}")).await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_text(url: &str) -> Result<String, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !(200..300).contains(&response.status()) {
        return Err(ApiError::Server(response.status()));
    }
    response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Failure modes of the clear-log request, worded for the user-facing alert.
#[derive(Clone, Debug, PartialEq)]
pub enum ClearLogError {
    /// The request never completed.
    Network(String),
    /// The server answered and declined; carries the server's message.
    Rejected(String),
}

impl fmt::Display for ClearLogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClearLogError::Network(e) => write!(f, "failed to send clear log request: {e}"),
            ClearLogError::Rejected(msg) => write!(f, "{msg}"),
        }
    }
}

/// Issue the clear request. The server answers `{status, message?}` on both
/// success and failure (it pairs failures with a non-2xx code); an empty
/// body on a 2xx is the fire-and-forget deployment and counts as success.
pub async fn clear_log(api_base: &str) -> Result<(), ClearLogError> {
    let response = Request::post(&format!("{api_base}{CLEAR_LOG_PATH}"))
        .send()
        .await
        .map_err(|e| ClearLogError::Network(e.to_string()))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    classify_clear_response(status, &body)
}

fn classify_clear_response(status: u16, body: &str) -> Result<(), ClearLogError> {
    if body.trim().is_empty() {
        return if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(ClearLogError::Network(format!("HTTP {status}")))
        };
    }

    match serde_json::from_str::<ClearResponse>(body) {
        Ok(ack) if ack.is_success() => Ok(()),
        Ok(ack) => Err(ClearLogError::Rejected(ack.message.unwrap_or_else(|| {
            "the server rejected the request".to_string()
        }))),
        Err(e) => Err(ClearLogError::Network(format!("undecodable response: {e}"))),
    }
}
