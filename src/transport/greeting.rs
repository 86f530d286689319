//! Standalone greeting server: a handful of fixed paths answering with a greeting,
//! the current local time and the requested path. No envelope, no API key.

use axum::extract::OriginalUri;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use chrono::Local;
use serde::{Deserialize, Serialize};

const GREETINGS: &[(&str, &str)] = &[
    ("/", "Hello, welcome to the first endpoint"),
    ("/2", "Greetings from the second endpoint"),
    ("/3", "The third endpoint says hi"),
    ("/4", "You reached the fourth endpoint"),
    ("/5", "Last stop: the fifth endpoint"),
];

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Serialize, Deserialize, Debug)]
pub struct Greeting {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub url: String,
}

pub fn greeting_for(path: &str) -> Option<&'static str> {
    GREETINGS
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(_, message)| *message)
}

pub fn create_greeting_router() -> Router {
    Router::new().fallback(greet)
}

async fn greet(OriginalUri(uri): OriginalUri) -> Response {
    let url = uri.to_string();
    match greeting_for(uri.path()) {
        Some(message) => Json(Greeting {
            message: message.to_string(),
            time: Some(Local::now().format(TIME_FORMAT).to_string()),
            url,
        })
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(Greeting {
                message: "you are accessing an endpoint that was not found".to_string(),
                time: None,
                url,
            }),
        )
            .into_response(),
    }
}
