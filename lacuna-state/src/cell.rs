use lacuna_optional::Cell;

use crate::Value;

// Reads are tracked and writes notify subscribers, same as going through
// `to_ref` / `set` directly.
impl<T> Cell for Value<Option<T>> {
    type Item = T;

    fn new(initial: Option<T>) -> Self {
        Value::new(initial)
    }

    fn get(&self) -> Option<&T> {
        self.to_ref().as_ref()
    }

    fn set(&mut self, value: Option<T>) {
        Value::set(self, value);
    }
}

#[cfg(test)]
mod test {
    use lacuna_optional::{optional_ref, Optional, Report};

    use super::*;
    use crate::store::testing::drain_changes;
    use crate::{track, Change, OptionalState, Subscriber};

    #[test]
    fn view_write_notifies_subscribers() {
        let mut value = Value::<Option<u32>>::new(None);
        let _sub = value.subscribe(Subscriber::ONE);

        let mut view = optional_ref(&mut value);
        view.set(Optional::some(42));
        assert_eq!(view.get().copied(), Optional::some(42));

        assert_eq!(drain_changes(), vec![(vec![Subscriber::ONE], Change::Changed)]);
    }

    #[test]
    fn view_read_is_tracked() {
        let mut value = Value::new(Some("a"));
        let view = optional_ref(&mut value);
        let read = track(Subscriber::ZERO, || view.get().copied());

        assert_eq!(read, Optional::some("a"));
        assert!(value.subscribers().contains(Subscriber::ZERO));
    }

    #[test]
    fn container_round_trip() {
        let mut state = OptionalState::<u32>::empty();
        state.view().set(Optional::some(42));

        assert_eq!(state.view().get_cloned().into_option(), Some(42));
        assert_eq!(*state.cell().to_ref(), Some(42));
    }

    #[tokio::test]
    async fn set_async_notifies_once() {
        let mut state = OptionalState::new(Some("old".to_string()));
        let _sub = state.cell().subscribe(Subscriber::ONE);

        state
            .set_async(async { Ok::<_, std::io::Error>(Some("new".to_string())) })
            .await;

        assert_eq!(state.get().cloned(), Optional::some("new".to_string()));
        assert_eq!(drain_changes(), vec![(vec![Subscriber::ONE], Change::Changed)]);
    }

    #[tokio::test]
    async fn set_async_failure_empties_the_value() {
        struct Count(std::cell::Cell<usize>);

        impl Report for Count {
            fn report(&self, _: &dyn std::error::Error) {
                self.0.set(self.0.get() + 1);
            }
        }

        let mut state = lacuna_optional::ReactiveOptional::<Value<Option<&str>>, _>::with_reporter(
            Some("old"),
            Count(std::cell::Cell::new(0)),
        );
        let err = std::io::Error::other("connection reset");
        state.set_async(async move { Err(err) }).await;

        assert!(state.get().is_empty());
        assert_eq!(state.reporter().0.get(), 1);
    }
}
