//! cPanel UAPI client for cpmail.
//!
//! This crate provides the HTTP/JSON translation layer between cpmail and a
//! cPanel account's unified API (UAPI). It is a standalone library with no
//! dependencies on other cpmail crates.
//!
//! # Architecture
//!
//! - [`CpanelConfig`] resolves the endpoint URL and authorization header
//!   from connection settings (host, port, TLS, account, API token)
//! - [`UapiClient`] issues one authenticated request per call and unwraps
//!   the UAPI response envelope
//! - [`EmailApi`] exposes the typed Email-module operations (accounts,
//!   passwords, quotas, client settings, forwarders)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cpmail_uapi::{CpanelConfig, EmailApi, UapiClient};
//!
//! let config = CpanelConfig::from_env()?;
//! let api = EmailApi::new(UapiClient::new(config)?);
//!
//! let accounts = api.list_email_accounts("example.com").await?;
//! for account in accounts {
//!     println!("{}", account.email);
//! }
//! ```

pub mod client;
pub mod config;
pub mod email;
pub mod error;
pub mod types;

pub use client::UapiClient;
pub use config::CpanelConfig;
pub use email::{EmailApi, split_email};
pub use error::{Result, UapiError};
pub use types::{EmailAccount, Forwarder, UapiResponse};
