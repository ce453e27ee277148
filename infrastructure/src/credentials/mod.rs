//! File-based AWS credential store.

mod json_file;

pub use json_file::{CREDENTIALS_FILE_NAME, JsonCredentialStore, expand_home};
