use api_types::error::{ErrorBody, FieldErrorView};
use axum::{
    Json,
    extract::rejection::PathRejection,
    http::StatusCode,
    response::IntoResponse,
};
use engine::{EngineError, ValidationErrors};

pub use server::{router, run_with_listener};

mod expenses;
mod server;

pub enum ServerError {
    Engine(EngineError),
    /// The request body or path could not be turned into handler input.
    Rejection(String),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn field_errors(errors: ValidationErrors) -> Vec<FieldErrorView> {
    errors
        .fields
        .into_iter()
        .map(|err| FieldErrorView {
            field: err.field.to_string(),
            reason: err.reason,
        })
        .collect()
}

fn body_for_engine_error(err: EngineError) -> ErrorBody {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            ErrorBody {
                error: "internal server error".to_string(),
                details: Vec::new(),
            }
        }
        EngineError::Validation(errors) => ErrorBody {
            error: "validation failed".to_string(),
            details: field_errors(errors),
        },
        EngineError::KeyNotFound(key) => ErrorBody {
            error: format!("{key} not found"),
            details: Vec::new(),
        },
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), body_for_engine_error(err)),
            ServerError::Rejection(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    error: message,
                    details: Vec::new(),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<ValidationErrors> for ServerError {
    fn from(value: ValidationErrors) -> Self {
        Self::Engine(EngineError::Validation(value))
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(value: serde_json::Error) -> Self {
        Self::Rejection(format!("invalid request body: {value}"))
    }
}

impl From<PathRejection> for ServerError {
    fn from(value: PathRejection) -> Self {
        Self::Rejection(value.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::ExpenseDraft;

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::KeyNotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn engine_validation_maps_to_422() {
        let errors = ExpenseDraft::new("", 1.0).unwrap_err();
        let res = ServerError::from(errors).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn engine_database_maps_to_500() {
        let err = EngineError::Database(engine_db_err());
        let res = ServerError::from(err).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn database_details_are_hidden() {
        let body = body_for_engine_error(EngineError::Database(engine_db_err()));
        assert_eq!(body.error, "internal server error");
        assert!(body.details.is_empty());
    }

    #[test]
    fn validation_body_lists_fields() {
        let errors = ExpenseDraft::new("bad!", -1.0).unwrap_err();
        let body = body_for_engine_error(EngineError::Validation(errors));
        let fields: Vec<_> = body.details.iter().map(|d| d.field.as_str()).collect();
        assert_eq!(fields, vec!["description", "amount"]);
    }

    #[test]
    fn unparsable_body_maps_to_422() {
        let err = serde_json::from_slice::<api_types::expense::ExpenseNew>(b"{").unwrap_err();
        let res = ServerError::from(err).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    fn engine_db_err() -> sea_orm::DbErr {
        sea_orm::DbErr::Custom("disk on fire".to_string())
    }
}
