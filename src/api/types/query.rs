//! Query string validation
//!
//! Read endpoints accept no query parameters except, optionally, the `env`
//! environment selector. Violations are reported per field, in the order the
//! offending keys appear.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Name of the environment selector parameter
pub const ENV_PARAM: &str = "env";

/// Maximum length of the environment selector, in characters
pub const MAX_ENV_LENGTH: usize = 255;

/// A single field-level validation problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub code: String,
    pub message: String,
    pub path: Vec<String>,
}

impl FieldError {
    pub fn new(code: &str, message: impl Into<String>, path: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            path,
        }
    }

    pub fn unrecognized_key(key: &str) -> Self {
        Self::new(
            "unrecognized_keys",
            format!("Unrecognized key: \"{}\"", key),
            vec![key.to_string()],
        )
    }
}

/// Options for [`require_empty_query`]
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryOptions {
    /// Accept the `env` selector
    pub with_env: bool,
}

/// Check that `pairs` holds no parameter beyond what `options` allows
pub fn require_empty_query(
    pairs: &[(String, String)],
    options: QueryOptions,
) -> Result<(), Vec<FieldError>> {
    let mut errors: Vec<FieldError> = Vec::new();
    let mut env_values: Vec<&str> = Vec::new();

    for (key, value) in pairs {
        if options.with_env && key == ENV_PARAM {
            env_values.push(value);
            continue;
        }

        if !errors.iter().any(|e| e.path.first() == Some(key)) {
            errors.push(FieldError::unrecognized_key(key));
        }
    }

    if let Some(env_error) = check_env(&env_values) {
        errors.push(env_error);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_env(values: &[&str]) -> Option<FieldError> {
    let path = vec![ENV_PARAM.to_string()];

    match values {
        [] => None,
        [value] if value.is_empty() => Some(FieldError::new(
            "too_small",
            "String must contain at least 1 character(s)",
            path,
        )),
        [value] if value.chars().count() > MAX_ENV_LENGTH => Some(FieldError::new(
            "too_big",
            format!("String must contain at most {} character(s)", MAX_ENV_LENGTH),
            path,
        )),
        [_] => None,
        _ => Some(FieldError::new(
            "invalid_type",
            "Expected string, received array",
            path,
        )),
    }
}

/// Extractor that rejects any query parameter other than `env`
#[derive(Debug, Clone, Default)]
pub struct EnvQuery {
    pub env: Option<String>,
}

impl<S> FromRequestParts<S> for EnvQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri).map_err(|e| {
            ApiError::invalid_query_params(vec![FieldError::new(
                "invalid_type",
                e.body_text(),
                Vec::new(),
            )])
        })?;

        require_empty_query(&pairs, QueryOptions { with_env: true })
            .map_err(ApiError::invalid_query_params)?;

        let env = pairs.into_iter().find(|(k, _)| k == ENV_PARAM).map(|(_, v)| v);

        Ok(Self { env })
    }
}
