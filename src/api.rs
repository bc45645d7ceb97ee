//! Solver endpoints: `/solve` and `/populate`.
//!
//! Requests are first built as plain [`PreparedRequest`] values so their
//! shape can be checked without a browser, then handed to `fetch`.

use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::config;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("expected 4 sides from populate, got {0}")]
    PopulateLength(usize),
}

impl ApiError {
    /// True when the server answered but the payload had the wrong shape.
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Decode(_) | ApiError::PopulateLength(_))
    }
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
            .unwrap_or_else(|| format!("{:?}", value));
        ApiError::Transport(msg)
    }
}

/// Body of `POST /solve`. Field order is the wire order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRequest {
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NytSolution {
    #[serde(rename = "ourSolution")]
    pub our_solution: Vec<String>,
    /// Published sides for the day; the board never reads them.
    #[serde(default)]
    pub sides: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResponse {
    pub nyt_solution: NytSolution,
    pub two_word_solutions: Vec<Vec<String>>,
    pub three_word_solutions: Vec<Vec<String>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: Option<String>,
}

pub fn solve_request(base_url: &str, req: &SolveRequest) -> Result<PreparedRequest, ApiError> {
    let body = serde_json::to_string(req).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(PreparedRequest {
        method: Method::Post,
        url: config::endpoint(base_url, "solve"),
        headers: vec![
            ("Content-Type", "application/json"),
            ("Accept", "application/json"),
        ],
        body: Some(body),
    })
}

pub fn populate_request(base_url: &str) -> PreparedRequest {
    PreparedRequest {
        method: Method::Get,
        url: config::endpoint(base_url, "populate"),
        headers: Vec::new(),
        body: None,
    }
}

pub fn decode_solve(text: &str) -> Result<SolveResponse, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Sides come back as `[top, right, bottom, left]`; any other count is rejected whole.
pub fn decode_populate(text: &str) -> Result<[String; 4], ApiError> {
    let sides: Vec<String> =
        serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))?;
    <[String; 4]>::try_from(sides).map_err(|rest: Vec<String>| ApiError::PopulateLength(rest.len()))
}

async fn send(prepared: &PreparedRequest) -> Result<String, ApiError> {
    let window =
        web_sys::window().ok_or_else(|| ApiError::Transport("no global `window`".into()))?;
    let init = RequestInit::new();
    init.set_method(prepared.method.as_str());
    if let Some(body) = &prepared.body {
        init.set_body(&JsValue::from_str(body));
    }
    let request = Request::new_with_str_and_init(&prepared.url, &init)?;
    for (name, value) in &prepared.headers {
        request.headers().set(name, value)?;
    }
    let resp: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| ApiError::Decode("response body is not text".into()))
}

pub async fn solve(req: &SolveRequest) -> Result<SolveResponse, ApiError> {
    let prepared = solve_request(config::api_base_url(), req)?;
    let text = send(&prepared).await?;
    decode_solve(&text)
}

pub async fn populate() -> Result<[String; 4], ApiError> {
    let text = send(&populate_request(config::api_base_url())).await?;
    decode_populate(&text)
}
