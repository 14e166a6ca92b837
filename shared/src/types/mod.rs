//! Type definitions module
//!
//! - `pagination` - Page wrapper for paginated list endpoints

pub mod pagination;

// Re-export commonly used types at module level
pub use pagination::Page;
