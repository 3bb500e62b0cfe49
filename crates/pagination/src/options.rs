use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Construction settings for a [`PaginationState`](crate::PaginationState).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_initial_page_size"))]
pub struct PaginationOptions {
    #[validate(range(min = 1, message = "initial_page must be >= 1"))]
    #[serde(default = "default_initial_page")]
    pub initial_page: u32,

    #[serde(default = "default_initial_page_size")]
    pub initial_page_size: u32,

    #[validate(custom(function = "validate_page_size_options"))]
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<u32>,

    #[serde(default)]
    pub total: u64,

    /// Notify scroll listeners with `scroll_target` after navigation.
    #[serde(default = "default_auto_scroll")]
    pub auto_scroll: bool,

    #[serde(default = "default_scroll_target")]
    pub scroll_target: String,
}

fn default_initial_page() -> u32 {
    1
}

fn default_initial_page_size() -> u32 {
    10
}

fn default_page_size_options() -> Vec<u32> {
    vec![10, 20, 50, 100]
}

fn default_auto_scroll() -> bool {
    true
}

fn default_scroll_target() -> String {
    "body".to_string()
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            initial_page: default_initial_page(),
            initial_page_size: default_initial_page_size(),
            page_size_options: default_page_size_options(),
            total: 0,
            auto_scroll: default_auto_scroll(),
            scroll_target: default_scroll_target(),
        }
    }
}

impl PaginationOptions {
    pub fn with_page(mut self, page: u32) -> Self {
        self.initial_page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.initial_page_size = page_size;
        self
    }

    pub fn with_page_size_options(mut self, options: impl Into<Vec<u32>>) -> Self {
        self.page_size_options = options.into();
        self
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.total = total;
        self
    }

    pub fn with_auto_scroll(mut self, auto_scroll: bool) -> Self {
        self.auto_scroll = auto_scroll;
        self
    }

    pub fn with_scroll_target(mut self, target: impl Into<String>) -> Self {
        self.scroll_target = target.into();
        self
    }
}

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_page_size_options(options: &[u32]) -> Result<(), ValidationError> {
    if options.is_empty() {
        return Err(validation_error(
            "empty_page_size_options",
            "page_size_options must not be empty",
        ));
    }
    if options.contains(&0) {
        return Err(validation_error(
            "zero_page_size",
            "page_size_options must only contain sizes > 0",
        ));
    }
    Ok(())
}

fn validate_initial_page_size(options: &PaginationOptions) -> Result<(), ValidationError> {
    if options.page_size_options.contains(&options.initial_page_size) {
        Ok(())
    } else {
        Err(validation_error(
            "initial_page_size_not_allowed",
            "initial_page_size must be one of page_size_options",
        ))
    }
}

/// Overrides applied by [`PaginationState::reset`](crate::PaginationState::reset).
///
/// Missing fields fall back to page 1, the initial page size and a total of 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetOptions {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub total: Option<u64>,
}
