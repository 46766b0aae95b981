use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub const TITLE_MIN_CHARS: usize = 1;
pub const TITLE_MAX_CHARS: usize = 200;

/// A single todo item as persisted and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Todo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request body for POST /todos
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TodoCreate {
    #[schema(min_length = 1, max_length = 200)]
    pub title: String,
}

/// Request body for PUT /todos/{id}; absent (or null) fields are left unchanged
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TodoUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(min_length = 1, max_length = 200)]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoCreate {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_title(&self.title)
    }
}

impl TodoUpdate {
    pub fn validate(&self) -> Result<(), ApiError> {
        match &self.title {
            Some(title) => validate_title(title),
            None => Ok(()),
        }
    }

    /// Applies the provided fields to `todo`
    pub fn apply_to(self, todo: &mut Todo) {
        if let Some(title) = self.title {
            todo.title = title;
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

/// Title length is counted in characters, not bytes.
pub fn validate_title(title: &str) -> Result<(), ApiError> {
    let len = title.chars().count();
    if len < TITLE_MIN_CHARS {
        return Err(ApiError::Validation(format!(
            "title must contain at least {} character",
            TITLE_MIN_CHARS
        )));
    }
    if len > TITLE_MAX_CHARS {
        return Err(ApiError::Validation(format!(
            "title must contain at most {} characters, got {}",
            TITLE_MAX_CHARS, len
        )));
    }
    Ok(())
}
