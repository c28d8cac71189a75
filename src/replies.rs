use serde::Serialize;
use warp::{
    http::StatusCode,
    reply::{self, Reply, Response},
};

/// Every response body is wrapped as `{ "success": bool, "data": ... }`.
#[derive(Clone, Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

/// Body of a failed lookup.
#[derive(Clone, Debug, Serialize)]
pub struct MessageReply {
    pub message: String,
}

/// Body of an error raised while handling a request.
#[derive(Clone, Debug, Serialize)]
pub struct ErrorReply {
    pub status: &'static str,
    pub message: String,
}

impl ErrorReply {
    pub fn new(message: impl Into<String>) -> ErrorReply {
        ErrorReply {
            status: "error",
            message: message.into(),
        }
    }
}

pub fn success<T: Serialize>(status: StatusCode, data: &T) -> Response {
    envelope(status, true, data)
}

pub fn failure<T: Serialize>(status: StatusCode, data: &T) -> Response {
    envelope(status, false, data)
}

fn envelope<T: Serialize>(status: StatusCode, success: bool, data: &T) -> Response {
    reply::with_status(reply::json(&Envelope { success, data }), status).into_response()
}
