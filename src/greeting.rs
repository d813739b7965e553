//! Greeting card
//!
//! The landing page shows a short greeting fetched from the backend.
//! Failures are shown inline; there are no retries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Backend endpoint serving the greeting
pub const GREETING_PATH: &str = "/api/hello.json";

/// Greeting payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
    /// Server time, milliseconds since the epoch as a string
    pub timestamp: String,
}

/// Response envelope used by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum GreetingError {
    /// Request never produced a usable body
    #[error("Failed to fetch data")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// The backend reported an error in the envelope
    #[error("{0}")]
    Server(String),
}

/// Decode a response body; `Ok(None)` when the envelope carries no data
pub fn parse_response(body: &str) -> Result<Option<Greeting>, GreetingError> {
    let response: ApiResponse<Greeting> = serde_json::from_str(body)?;
    if let Some(error) = response.error {
        return Err(GreetingError::Server(error));
    }
    Ok(response.data)
}

/// Reject non-2xx HTTP statuses before the body is decoded
pub fn check_status(status: u16) -> Result<(), GreetingError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(GreetingError::Transport(format!("HTTP {}", status)))
    }
}

/// What the card currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GreetingView {
    #[default]
    Loading,
    Ready(Greeting),
    Failed(String),
    Empty,
}

impl GreetingView {
    pub fn from_result(result: Result<Option<Greeting>, GreetingError>) -> Self {
        match result {
            Ok(Some(greeting)) => GreetingView::Ready(greeting),
            Ok(None) => GreetingView::Empty,
            Err(e) => {
                log::error!("Greeting fetch error: {:?}", e);
                GreetingView::Failed(e.to_string())
            }
        }
    }

    /// Card body, one paragraph per entry
    pub fn paragraphs(&self) -> Vec<String> {
        match self {
            GreetingView::Loading => vec!["Loading...".to_string()],
            GreetingView::Ready(g) => {
                vec![g.message.clone(), format!("Timestamp: {}", g.timestamp)]
            }
            GreetingView::Failed(e) => vec![format!("Error: {}", e)],
            GreetingView::Empty => vec!["No data available".to_string()],
        }
    }
}

/// GET the greeting from `base` + [`GREETING_PATH`]
#[cfg(target_arch = "wasm32")]
pub async fn fetch_greeting(base: &str) -> Result<Option<Greeting>, GreetingError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let transport = |e: wasm_bindgen::JsValue| GreetingError::Transport(format!("{:?}", e));

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let url = format!("{}{}", base.trim_end_matches('/'), GREETING_PATH);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(transport)?;

    let window =
        web_sys::window().ok_or_else(|| GreetingError::Transport("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;
    check_status(response.status())?;

    let text = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    let body = text
        .as_string()
        .ok_or_else(|| GreetingError::Transport("response body is not text".to_string()))?;
    parse_response(&body)
}
