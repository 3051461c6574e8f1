use lacuna_optional::ReactiveOptional;

pub use crate::store::{
    clear_all_changes, clear_all_subs, drain_changes, track, Change, Changes, SubKey, Subscriber, Subscribers,
};
pub use crate::value::{Subscription, Unique, Value};

mod cell;
mod store;
mod value;

/// A [`ReactiveOptional`] backed by an observable [`Value`].
pub type OptionalState<T> = ReactiveOptional<Value<Option<T>>>;
