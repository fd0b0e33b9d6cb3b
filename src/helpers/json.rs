use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

/// JSON body of every error answered by the API.
#[derive(Debug, Serialize)]
pub struct JsonResponse {
    pub status: String,
    pub code: u16,
    pub message: String,
}

#[derive(Default)]
pub struct JsonResponseBuilder {
    message: Option<String>,
}

impl JsonResponse {
    pub fn build() -> JsonResponseBuilder {
        JsonResponseBuilder::default()
    }
}

impl JsonResponseBuilder {
    pub fn set_message<M: Into<String>>(mut self, message: M) -> Self {
        self.message = Some(message.into());
        self
    }

    fn into_response(self, status: StatusCode, fallback: &str) -> HttpResponse {
        let message = self
            .message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());

        HttpResponse::build(status).json(JsonResponse {
            status: "Error".to_string(),
            code: status.as_u16(),
            message,
        })
    }

    fn into_error<M: Into<String>>(
        self,
        status: StatusCode,
        fallback: &str,
        message: M,
    ) -> actix_web::Error {
        let message = message.into();
        let response = self.set_message(message.clone()).into_response(status, fallback);
        InternalError::from_response(message, response).into()
    }

    pub fn bad_request<M: Into<String>>(self, message: M) -> actix_web::Error {
        self.into_error(StatusCode::BAD_REQUEST, "Bad request", message)
    }

    pub fn not_found<M: Into<String>>(self, message: M) -> actix_web::Error {
        self.into_error(StatusCode::NOT_FOUND, "Not found", message)
    }

    pub fn internal_server_error<M: Into<String>>(self, message: M) -> actix_web::Error {
        self.into_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", message)
    }
}
