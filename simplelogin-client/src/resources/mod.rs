//! Resource operations, one module per API resource.
//!
//! Each operation is an inherent method on [`Client`](crate::Client) that builds
//! an [`ApiRequest`](crate::ApiRequest), runs it through the retry policy and
//! decodes the result. List operations come in a single-page form taking a
//! `page_id` and an `all_*` form that walks every page.

mod alias;
mod contact;
mod domain;
mod mailbox;
mod setting;
mod user;

pub use user::login;
