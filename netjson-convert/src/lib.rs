//! NetJSON to platform configuration conversion.
//!
//! This library turns a vendor-neutral NetJSON document (interfaces, radios,
//! routes, policy rules, VPN tunnels) into the intermediate block model of
//! `config-block-core`, one backend per target platform. Rendering the blocks
//! into literal configuration files is left to the caller.
//!
//! # Architecture
//!
//! ## Input
//!
//! - [`document`]: Read-only NetJSON document and typed subtree copies
//! - [`netjson`]: Typed NetJSON entities (interfaces, radios, routes, ...)
//! - [`schema`]: Per-backend structural schema and the validation seam
//!
//! ## Conversion
//!
//! - [`converter`]: The `Converter` trait and per-run diagnostics
//! - [`backend`]: Validate, then run converters in order and accumulate
//! - [`backends`]: OpenWrt, Raspbian and ZeroTier converter sets
//! - [`wifi`]: Encryption protocols, wireless modes and bands
//! - [`addr`]: Address/prefix parsing and netmask derivation
//! - [`timezones`]: Zone name to POSIX TZ table
//!
//! ## Support
//!
//! - [`settings`]: Embedded and file-based converter defaults
//! - [`error`]: Converter and backend errors
//! - [`report`]: Terminal-friendly colored output
//!
//! # Examples
//!
//! ```ignore
//! use netjson_convert::backend::{Backend, BackendKind};
//! use netjson_convert::document::Document;
//! use netjson_convert::settings::embedded_settings;
//!
//! let doc = Document::parse(br#"{"interfaces": [{"name": "eth0", "type": "ethernet"}]}"#)?;
//! let conversion = Backend::new(BackendKind::OpenWrt, &embedded_settings()).convert(&doc)?;
//! for block in conversion.intermediate.blocks("network") {
//!     println!("{block}");
//! }
//! ```

pub mod addr;
pub mod backend;
pub mod backends;
pub mod converter;
pub mod document;
pub mod error;
pub mod netjson;
pub mod report;
pub mod schema;
pub mod settings;
pub mod timezones;
pub mod wifi;
