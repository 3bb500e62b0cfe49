pub mod dto;
pub mod error;
pub mod listener;
pub mod options;
pub mod range;
pub mod remote;
pub mod state;

pub use dto::{PageInfo, PageRequest, PaginatedResponse, PaginationMeta, QueryParams};
pub use error::{PaginationError, Result};
pub use options::{PaginationOptions, ResetOptions};
pub use remote::{MemorySource, PageSource, RemoteList};
pub use state::PaginationState;
