use agora_application::error::{AppError, ErrorKind};
use agora_boundary as json;

pub const fn http_status(kind: ErrorKind) -> u16 {
    match kind {
        ErrorKind::Validation => 400,
        ErrorKind::Forbidden => 403,
        ErrorKind::NotFound => 404,
        ErrorKind::Conflict => 409,
        ErrorKind::Internal => 500,
    }
}

pub fn to_json(err: &AppError) -> json::Error {
    let kind = err.kind();
    let message = if kind == ErrorKind::Internal {
        // Don't leak internals
        "Internal error".to_string()
    } else {
        err.to_string()
    };
    json::Error {
        http_status: http_status(kind),
        message,
    }
}
