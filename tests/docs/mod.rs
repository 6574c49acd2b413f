//! Documentation source tests
//!
//! Doc files read from disk and fed through a full build.

pub mod tests_doc_files;
