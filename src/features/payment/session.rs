//! The checkout outcome race. Three signal sources compete to resolve one
//! attempt: a provider message, the closure poll, and a deadline. The race is
//! written against injectable sources so it runs under host tests without a
//! browser window; `popup`/`flow` supply the real DOM-backed sources.

use crate::features::payment::messages::ProviderEvent;
use futures::future::{self, Future, FutureExt};
use futures::stream::{Stream, StreamExt};
use futures::{pin_mut, select_biased};

/// Terminal result of one checkout attempt, resolved exactly once.
#[derive(Clone, Debug, PartialEq)]
pub enum PaymentOutcome {
    Success,
    Failed(String),
    TimedOut,
}

/// Handle to the checkout popup window.
pub trait CheckoutHandle {
    fn is_closed(&self) -> bool;
    fn close(&self);
}

/// Awaits the first of three signals and returns exactly once; returning
/// drops the sources, which tears down their timers and listeners.
///
/// - A provider message resolves success or failure and closes the popup.
/// - A tick that observes the popup closed resolves success. This trusts the
///   user: closure is not a verified payment confirmation, but the provider
///   offers no queryable status from the client.
/// - The deadline force-closes the popup and resolves a timeout.
///
/// A message source that ends (listener torn down elsewhere) stops
/// contributing but does not resolve the race; the other two sources decide.
pub async fn await_outcome<H, M, T, D>(
    handle: &H,
    messages: M,
    ticks: T,
    deadline: D,
) -> PaymentOutcome
where
    H: CheckoutHandle,
    M: Stream<Item = ProviderEvent> + Unpin,
    T: Stream<Item = ()> + Unpin,
    D: Future<Output = ()>,
{
    let mut messages = messages;
    let provider = async move {
        match messages.next().await {
            Some(event) => event,
            None => future::pending::<ProviderEvent>().await,
        }
    };

    let mut ticks = ticks;
    let closure = async move {
        loop {
            match ticks.next().await {
                Some(()) => {
                    if handle.is_closed() {
                        return;
                    }
                }
                None => future::pending::<()>().await,
            }
        }
    };

    let provider = provider.fuse();
    let closure = closure.fuse();
    let deadline = deadline.fuse();
    pin_mut!(provider, closure, deadline);

    select_biased! {
        event = provider => match event {
            ProviderEvent::Success => {
                handle.close();
                PaymentOutcome::Success
            }
            ProviderEvent::Error(reason) => {
                handle.close();
                PaymentOutcome::Failed(reason)
            }
        },
        () = closure => PaymentOutcome::Success,
        () = deadline => {
            if !handle.is_closed() {
                handle.close();
            }
            PaymentOutcome::TimedOut
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use futures::executor::block_on;
    use futures::stream;
    use std::cell::Cell;

    /// Checkout handle whose closed state flips after a fixed number of
    /// `is_closed` polls, emulating the user closing the window mid-attempt.
    struct TestHandle {
        open_polls: Cell<u32>,
        close_calls: Cell<u32>,
    }

    impl TestHandle {
        fn open() -> Self {
            Self {
                open_polls: Cell::new(u32::MAX),
                close_calls: Cell::new(0),
            }
        }

        fn closing_after(polls: u32) -> Self {
            Self {
                open_polls: Cell::new(polls),
                close_calls: Cell::new(0),
            }
        }
    }

    impl CheckoutHandle for TestHandle {
        fn is_closed(&self) -> bool {
            let remaining = self.open_polls.get();
            if remaining == 0 {
                true
            } else {
                self.open_polls.set(remaining - 1);
                false
            }
        }

        fn close(&self) {
            self.close_calls.set(self.close_calls.get() + 1);
            self.open_polls.set(0);
        }
    }

    #[test]
    fn closed_popup_resolves_success_without_waiting_for_the_deadline() {
        let handle = TestHandle::closing_after(3);
        let (_message_tx, message_rx) = mpsc::unbounded::<ProviderEvent>();

        let outcome = block_on(await_outcome(
            &handle,
            message_rx,
            stream::repeat(()),
            future::pending::<()>(),
        ));

        assert_eq!(outcome, PaymentOutcome::Success);
        // The closure path never closes an already-closed window.
        assert_eq!(handle.close_calls.get(), 0);
    }

    #[test]
    fn provider_success_message_closes_the_popup_and_resolves_success() {
        let handle = TestHandle::open();
        let (message_tx, message_rx) = mpsc::unbounded();
        message_tx
            .unbounded_send(ProviderEvent::Success)
            .expect("send");
        let (_tick_tx, tick_rx) = mpsc::unbounded::<()>();

        let outcome = block_on(await_outcome(
            &handle,
            message_rx,
            tick_rx,
            future::pending::<()>(),
        ));

        assert_eq!(outcome, PaymentOutcome::Success);
        assert_eq!(handle.close_calls.get(), 1);
    }

    #[test]
    fn provider_error_message_carries_its_reason() {
        let handle = TestHandle::open();
        let (message_tx, message_rx) = mpsc::unbounded();
        message_tx
            .unbounded_send(ProviderEvent::Error("Card declined".to_string()))
            .expect("send");
        let (_tick_tx, tick_rx) = mpsc::unbounded::<()>();

        let outcome = block_on(await_outcome(
            &handle,
            message_rx,
            tick_rx,
            future::pending::<()>(),
        ));

        assert_eq!(outcome, PaymentOutcome::Failed("Card declined".to_string()));
        assert_eq!(handle.close_calls.get(), 1);
    }

    #[test]
    fn deadline_force_closes_the_popup_and_times_out() {
        let handle = TestHandle::open();
        let (_message_tx, message_rx) = mpsc::unbounded::<ProviderEvent>();
        let (_tick_tx, tick_rx) = mpsc::unbounded::<()>();

        let outcome = block_on(await_outcome(
            &handle,
            message_rx,
            tick_rx,
            future::ready(()),
        ));

        assert_eq!(outcome, PaymentOutcome::TimedOut);
        assert_eq!(handle.close_calls.get(), 1);
    }

    #[test]
    fn first_signal_wins_when_message_and_closure_race() {
        // Window already closed and a success message queued; the message is
        // polled first and the attempt still resolves exactly once.
        let handle = TestHandle::closing_after(0);
        let (message_tx, message_rx) = mpsc::unbounded();
        message_tx
            .unbounded_send(ProviderEvent::Success)
            .expect("send");

        let outcome = block_on(await_outcome(
            &handle,
            message_rx,
            stream::repeat(()),
            future::pending::<()>(),
        ));

        assert_eq!(outcome, PaymentOutcome::Success);
        assert_eq!(handle.close_calls.get(), 1);
    }

    #[test]
    fn ended_message_source_does_not_resolve_the_race() {
        let handle = TestHandle::closing_after(2);
        let (message_tx, message_rx) = mpsc::unbounded::<ProviderEvent>();
        drop(message_tx);

        let outcome = block_on(await_outcome(
            &handle,
            message_rx,
            stream::repeat(()),
            future::pending::<()>(),
        ));

        assert_eq!(outcome, PaymentOutcome::Success);
    }
}
