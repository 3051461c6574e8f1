pub use {
    lacuna_optional as optional, // optional
    lacuna_state as state,       // state
    lacuna_store as store,       // store
};

pub mod prelude {
    pub use crate::optional::{
        optional_path, optional_ref, or_else_get_async, try_optional_path, try_or_else_get_async, Cell,
        IntoOptional, LogReport, Optional, OptionalRef, ReactiveOptional, Report,
    };
    pub use crate::state::{OptionalState, Subscriber, Value};
}
