//! Values that may be absent, and views that expose an observable cell as one.
//!
//! [`Optional`] wraps an `Option<T>` and chains operations over it without
//! repeated presence checks. The reactive side ([`OptionalRef`] and
//! [`ReactiveOptional`]) is generic over the [`Cell`] capability so it can sit
//! on top of any host cell.
//!
//! ```
//! # use lacuna_optional::*;
//! let city = Optional::of(Some("  Oslo "))
//!     .map(str::trim)
//!     .filter(|city| !city.is_empty())
//!     .or_else("unknown");
//!
//! assert_eq!(city, "Oslo");
//! ```
pub use crate::error::{Error, Result};
pub use crate::future::{or_else_get_async, try_or_else_get_async};
pub use crate::optional::{IntoOptional, Optional};
pub use crate::path::{optional_path, try_optional_path};
pub use crate::reactive::{optional_ref, Cell, OptionalRef, ReactiveOptional};
pub use crate::report::{LogReport, Report};

mod error;
mod future;
mod optional;
mod path;
mod reactive;
mod report;
