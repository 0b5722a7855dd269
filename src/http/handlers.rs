use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;

use crate::http::server::AppState;
use crate::sweep::{SweepError, SweepOutcome, SweepRequest};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub wallet_address: String,
    pub is_sweep_configured: bool,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let treasury = state.sweeper.treasury();
    Json(HealthStatus {
        status: "ok",
        version: state.version,
        wallet_address: treasury.display_address(),
        is_sweep_configured: treasury.is_configured(),
    })
}

pub async fn sweep_eth(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SweepOutcome>, SweepError> {
    let request = parse_sweep_request(&body)?;
    let outcome = state.sweeper.sweep(request).await?;
    Ok(Json(outcome))
}

/// An empty body is a request with no overrides.
fn parse_sweep_request(body: &[u8]) -> Result<SweepRequest, SweepError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SweepRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| SweepError::MalformedRequest(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_body() {
        assert!(parse_sweep_request(b"").unwrap().destination.is_none());
        assert!(parse_sweep_request(b"  \n").unwrap().destination.is_none());
    }

    #[test]
    fn test_parse_destination() {
        let req = parse_sweep_request(br#"{"destination":"0x70997970C51812dc3A010C7d01b50e0d17dc79C8"}"#).unwrap();
        assert_eq!(
            req.destination.as_deref(),
            Some("0x70997970C51812dc3A010C7d01b50e0d17dc79C8")
        );
    }

    #[test]
    fn test_parse_garbage() {
        let err = parse_sweep_request(b"destination=0x1").unwrap_err();
        assert!(matches!(err, SweepError::MalformedRequest(_)));
    }
}
