//! Provider Type Registry System
//!
//! Provider types and data parsers register themselves at compile time with
//! the `linkme` crate, so configuration can refer to them by name without
//! the application naming any concrete type.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                   Provider Type Registration Flow                 │
//! ├──────────────────────────────────────────────────────────────────┤
//! │                                                                  │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDER_TYPES)]│
//! │                        static ENTRY: ProviderTypeEntry = ...     │
//! │                              ↓                                   │
//! │  2. Registry declares: #[linkme::distributed_slice]              │
//! │                        pub static PROVIDER_TYPES: [Entry] = [..] │
//! │                              ↓                                   │
//! │  3. Resolver queries:  PROVIDER_TYPES.iter()                     │
//! │                              ↓                                   │
//! │  4. Config selects:    type = "log-sms" → LogSmsProvider         │
//! │                                                                  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use plugboard_application::ports::registry::{PROVIDER_TYPES, ProviderTypeEntry};
//!
//! #[linkme::distributed_slice(PROVIDER_TYPES)]
//! static LOG_SMS: ProviderTypeEntry = ProviderTypeEntry {
//!     name: "log-sms",
//!     group: "sms",
//!     description: "Writes messages to the log",
//!     provider_type: LogSmsProvider::provider_type,
//! };
//! ```

pub mod data_parsers;
pub mod provider_types;

pub use data_parsers::{DATA_PARSERS, DataParserEntry};
pub use provider_types::{PROVIDER_TYPES, ProviderTypeEntry};
