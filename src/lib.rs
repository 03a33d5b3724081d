//! WebFinger (RFC 7033) responder.
//!
//! [`Webfinger`] validates `GET /.well-known/webfinger` queries, asks a
//! [`Resolver`] for the resource, and narrows the links down to the
//! requested `rel`s.

pub mod config;
pub mod error;
pub mod filter;
pub mod jrd;
pub mod query;
pub mod resolver;
pub mod webfinger;

pub use error::Error;
pub use jrd::{Jrd, Link, ResourceDescriptor, JRD_CONTENT_TYPE};
pub use resolver::{Directory, Resolver};
pub use webfinger::{Webfinger, WEBFINGER_PATH};
