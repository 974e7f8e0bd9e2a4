//! URL handling module
//!
//! Every location handed to the fetcher after the start URL comes from an
//! `href` found on a page. This module turns those hrefs into absolute URLs.

mod resolve;

pub use resolve::{resolve_link, LinkTarget};
