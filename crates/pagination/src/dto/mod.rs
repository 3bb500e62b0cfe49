pub mod common;
pub mod page_info;
pub mod query;

pub use common::{PageRequest, PaginatedResponse, PaginationMeta};
pub use page_info::PageInfo;
pub use query::QueryParams;
