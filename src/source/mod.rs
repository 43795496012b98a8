pub mod dir;
pub mod json;
pub mod r#trait;

pub use dir::DirectorySource;
pub use json::JsonSource;
pub use r#trait::CountSource;
