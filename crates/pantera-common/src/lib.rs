//! Pantera-Common: Shared types used across the pantera-site crates.
//!
//! - **Error Handling**: the common error type and result alias
//! - **Keyboard Vocabulary**: roving-focus keys and shortcut modifiers
//!
//! # Examples
//!
//! ```
//! use pantera_common::{Error, Modifier, NavKey, Result};
//!
//! assert_eq!(NavKey::from_key("End"), Some(NavKey::Last));
//! assert_eq!(Modifier::Alt.to_string(), "Alt");
//!
//! fn example() -> Result<()> {
//!     Err(Error::missing_element("#btn-cassette"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod keys;

pub use error::{Error, Result};
pub use keys::{Modifier, NavKey};
