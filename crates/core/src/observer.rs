/// Receives solver events and decides how the iteration should proceed.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures implement `Observer`, and `()` is a no-op observer.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O>(mut observer: O, events: &[usize]) -> Vec<&'static str>
    where
        O: Observer<usize, &'static str>,
    {
        events.iter().filter_map(|e| observer.observe(e)).collect()
    }

    #[test]
    fn unit_observer_never_acts() {
        assert!(drive((), &[1, 2, 3]).is_empty());
    }

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let actions = drive(
            |e: &usize| {
                seen.push(*e);
                (*e == 2).then_some("stop")
            },
            &[1, 2, 3],
        );

        assert_eq!(actions, vec!["stop"]);
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
