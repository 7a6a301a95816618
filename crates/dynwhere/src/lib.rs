//! # dynwhere: Dynamic WHERE-Clause Rewriting
//!
//! Rewrites SQL templates containing named placeholders (`?field`) into
//! driver-ready queries with positional `?` markers and an ordered argument
//! list. Conditions whose parameters are missing or empty vanish from the
//! query instead of binding NULLs, so one template serves every filter
//! combination.
//!
//! ```
//! use dynwhere::{params, rewrite};
//!
//! let (sql, args) = rewrite(
//!     "SELECT * FROM users WHERE ?name AND ?age",
//!     &params! { "name" => "Jane", "age" => 25 },
//! );
//!
//! assert_eq!(sql, "SELECT * FROM users WHERE name = ? AND age = ?");
//! assert_eq!(args.len(), 2);
//! ```

pub mod params;
pub mod rewrite;

#[cfg(any(feature = "sqlite", feature = "mysql"))]
pub mod bind;

// Re-export the core surface
pub use params::Params;
pub use rewrite::rewrite;

/// Dynamic value type carried by [`Params`] and the bound argument list.
pub use serde_json::Value;
