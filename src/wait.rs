use std::time::{Duration, Instant};

/// How long a blocking queue operation may wait.
///
/// A `Wait` is either unbounded, bounded by a deadline, or bounded by an
/// explicit cancel signal. It is checked before enrolling to wait and
/// continuously while waiting; a cancelled wait never leaves a partial side
/// effect (no value enqueued, no value consumed).
///
/// # Example
///
/// ```rust
/// use synckit::{BoundedQueue, Error, Wait};
/// use std::time::Duration;
///
/// let queue = BoundedQueue::new(1);
/// queue.try_offer("first");
///
/// // Queue is full; a deadline-bounded offer gives up instead of hanging.
/// let result = queue.offer(&Wait::timeout(Duration::from_millis(10)), "second");
/// assert_eq!(result, Err(Error::DeadlineExceeded));
/// ```
pub struct Wait {
    kind: WaitKind,
}

pub(crate) enum WaitKind {
    Forever,
    Deadline(Instant),
    Signal(flume::Receiver<()>),
}

impl Wait {
    /// Wait with no bound. The operation blocks until it completes.
    pub fn forever() -> Self {
        Self {
            kind: WaitKind::Forever,
        }
    }

    /// Wait until the given instant, then give up with
    /// [`Error::DeadlineExceeded`](crate::Error::DeadlineExceeded).
    pub fn deadline(at: Instant) -> Self {
        Self {
            kind: WaitKind::Deadline(at),
        }
    }

    /// Wait for at most the given duration, measured from now.
    pub fn timeout(after: Duration) -> Self {
        Self::deadline(Instant::now() + after)
    }

    /// Wait until explicitly cancelled through the returned handle.
    ///
    /// Cancellation makes the pending (and any later) operation on this
    /// `Wait` return [`Error::Cancelled`](crate::Error::Cancelled).
    /// Dropping the handle without calling
    /// [`cancel`](CancelHandle::cancel) also counts as cancellation.
    pub fn cancel() -> (CancelHandle, Self) {
        let (tx, rx) = flume::bounded(1);
        (
            CancelHandle { tx },
            Self {
                kind: WaitKind::Signal(rx),
            },
        )
    }

    pub(crate) fn kind(&self) -> &WaitKind {
        &self.kind
    }
}

/// Fires the cancel signal for a [`Wait`] created with [`Wait::cancel`].
pub struct CancelHandle {
    tx: flume::Sender<()>,
}

impl CancelHandle {
    /// Cancel the associated wait. Threads blocked on it wake with
    /// [`Error::Cancelled`](crate::Error::Cancelled).
    pub fn cancel(self) {
        // The buffered signal covers the racing waiter; dropping the sender
        // covers every waiter after that.
        let _ = self.tx.send(());
    }
}
