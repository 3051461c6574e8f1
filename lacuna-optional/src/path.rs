use crate::{IntoOptional, Optional};

/// Read a nested field from a source that may be absent.
///
/// This is `Optional::of(source).flat_map(accessor)` in one call. The
/// accessor is never called when `source` is `None`, and a panicking
/// accessor is not turned into an absent value.
///
/// ```
/// # use lacuna_optional::*;
/// struct Address { city: Option<String> }
/// struct Profile { address: Option<Address> }
/// struct User { profile: Option<Profile> }
///
/// let user = User { profile: None };
/// let city = optional_path(Some(&user), |u| u.profile.as_ref()?.address.as_ref()?.city.clone());
/// assert!(city.is_empty());
/// ```
pub fn optional_path<S, F, U>(source: Option<S>, accessor: F) -> Optional<U::Item>
where
    F: FnOnce(S) -> U,
    U: IntoOptional,
{
    Optional::of(source).flat_map(accessor)
}

/// Like [`optional_path`] but for accessors that can fail.
///
/// An error from the accessor is returned as is, so a failed lookup stays
/// distinct from an absent value.
pub fn try_optional_path<S, F, U, E>(source: Option<S>, accessor: F) -> Result<Optional<U::Item>, E>
where
    F: FnOnce(S) -> Result<U, E>,
    U: IntoOptional,
{
    match source {
        Some(source) => accessor(source).map(IntoOptional::into_optional),
        None => Ok(Optional::empty()),
    }
}
