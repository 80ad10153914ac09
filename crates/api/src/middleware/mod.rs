//! Request/response middleware.
//!
//! - [`pretty_json::pretty_json`] -- Indents JSON responses on `?pretty`.

pub mod pretty_json;
