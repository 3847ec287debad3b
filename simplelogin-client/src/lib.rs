//! # simplelogin-client
//!
//! Typed async client for the [SimpleLogin](https://simplelogin.io) email alias
//! API.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use simplelogin_client::{AliasFilter, Client};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("your-api-key")?;
//!
//!     let stats = client.stats().await?;
//!     println!("{} aliases", stats.nb_alias);
//!
//!     for alias in client.list_all_aliases(&AliasFilter::default()).await? {
//!         println!("{} enabled={}", alias.email, alias.enabled);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Rate Limiting
//!
//! HTTP 429 responses are retried up to three attempts in total, waiting for the
//! `Retry-After` header (or one second), capped at thirty seconds. See
//! [`RetryPolicy`]. No other status is retried.
//!
//! ## Cancellation
//!
//! Every call races the client's [`CancellationToken`](tokio_util::sync::CancellationToken),
//! including the wait between rate-limit retries. [`login`] takes the token
//! directly:
//!
//! ```rust,no_run
//! # use simplelogin_client::Client;
//! # async fn example() -> simplelogin_client::Result<()> {
//! let token = tokio_util::sync::CancellationToken::new();
//! let client = Client::builder()
//!     .api_key("your-api-key")
//!     .cancellation_token(token.clone())
//!     .build()?;
//!
//! token.cancel();
//! assert!(client.stats().await.unwrap_err().is_expected());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, Error>`](Error). A response maps to
//! exactly one variant:
//!
//! - [`Error::Authentication`]: HTTP 401 without a service message
//! - [`Error::RateLimit`]: HTTP 429 seen by the decoder
//! - [`Error::Api`]: any other non-success status
//! - [`Error::Decode`]: success status with a body that does not parse
//! - [`Error::Transport`]: the request never produced a response
//! - [`Error::Validation`]: rejected locally, nothing was sent

mod client;
mod decode;
mod error;
mod http_client;
mod pagination;
mod resources;
mod retry;
mod types;
mod utils;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL};

pub use error::{Error, Result, TransportError, TransportErrorKind};

// Transport seam, for custom stacks and tests
pub use http_client::{ApiKey, ApiRequest, HttpMethod, RawResponse, ReqwestTransport, Transport};

pub use decode::{decode_empty, decode_json, map_error};
pub use pagination::collect_all_pages;
pub use resources::login;
pub use retry::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY, MAX_RETRY_DELAY, RetryPolicy};

pub use types::{
    Alias, AliasActivity, AliasFilter, AliasGenerator, AliasOptions, AliasSuffix, AliasUpdate,
    Contact, CreatedContact, CreatedMailbox, CustomDomain, DomainUpdate, Mailbox, NewCustomAlias,
    RandomAliasMode, RandomAliasSuffix, SenderFormat, Setting, SettingDomain, SettingUpdate,
    Stats, TrashAlias, UserInfo, UserInfoUpdate,
};
