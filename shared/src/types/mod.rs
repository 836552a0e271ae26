//! Common API types shared across the workspace.

mod pagination;
mod response;

pub use pagination::{PageMeta, PageQuery};
pub use response::{ApiError, ApiResponse, PaginatedResponse};
