use crate::error::Error;
use crate::wait::{Wait, WaitKind};
use flume::{RecvTimeoutError, SendTimeoutError};

/// A fixed-capacity FIFO handoff between producers and consumers.
///
/// The capacity bound provides backpressure: once the queue holds
/// `capacity` elements, [`offer`](Self::offer) blocks (and
/// [`try_offer`](Self::try_offer) fails) until a consumer makes room.
/// Blocking operations take a [`Wait`] that bounds them by a deadline or an
/// explicit cancel signal; a cancelled offer never enqueues its value and a
/// cancelled poll never consumes one.
///
/// Share a queue between threads with `Arc`.
///
/// # Example
///
/// ```rust
/// use synckit::{BoundedQueue, Wait};
///
/// let queue = BoundedQueue::new(10);
/// queue.offer(&Wait::forever(), "job").unwrap();
/// assert_eq!(queue.poll(&Wait::forever()).unwrap(), "job");
/// ```
pub struct BoundedQueue<T> {
    tx: flume::Sender<T>,
    rx: flume::Receiver<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Create a queue holding at most `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. A zero-capacity queue is a
    /// misconfigured call site, not a recoverable condition.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "capacity cannot be less than 1");
        let (tx, rx) = flume::bounded(capacity);
        Self { tx, rx, capacity }
    }

    /// Enqueue a value, blocking while the queue is full.
    ///
    /// Returns `Ok(())` once the value is accepted, or the wait's
    /// cancellation outcome if the deadline or cancel signal fires first.
    /// On the error path the value was not enqueued.
    pub fn offer(&self, wait: &Wait, value: T) -> Result<(), Error> {
        match wait.kind() {
            WaitKind::Forever => match self.tx.send(value) {
                Ok(()) => Ok(()),
                // Both channel ends live inside self.
                Err(_) => unreachable!("queue channel disconnected"),
            },
            WaitKind::Deadline(at) => match self.tx.send_deadline(value, *at) {
                Ok(()) => Ok(()),
                Err(SendTimeoutError::Timeout(_)) => Err(Error::DeadlineExceeded),
                Err(SendTimeoutError::Disconnected(_)) => {
                    unreachable!("queue channel disconnected")
                }
            },
            WaitKind::Signal(cancel) => flume::Selector::new()
                .send(&self.tx, value, |result| match result {
                    Ok(()) => Ok(()),
                    Err(_) => unreachable!("queue channel disconnected"),
                })
                .recv(cancel, |_| Err(Error::Cancelled))
                .wait(),
        }
    }

    /// Enqueue without blocking. Returns `false` if the queue was at
    /// capacity at that instant (the value is dropped).
    pub fn try_offer(&self, value: T) -> bool {
        self.tx.try_send(value).is_ok()
    }

    /// Dequeue the oldest value, blocking while the queue is empty.
    ///
    /// Returns the value, or the wait's cancellation outcome if the
    /// deadline or cancel signal fires first. On the error path no value
    /// was consumed.
    pub fn poll(&self, wait: &Wait) -> Result<T, Error> {
        match wait.kind() {
            WaitKind::Forever => match self.rx.recv() {
                Ok(value) => Ok(value),
                Err(_) => unreachable!("queue channel disconnected"),
            },
            WaitKind::Deadline(at) => match self.rx.recv_deadline(*at) {
                Ok(value) => Ok(value),
                Err(RecvTimeoutError::Timeout) => Err(Error::DeadlineExceeded),
                Err(RecvTimeoutError::Disconnected) => {
                    unreachable!("queue channel disconnected")
                }
            },
            WaitKind::Signal(cancel) => flume::Selector::new()
                .recv(&self.rx, |result| match result {
                    Ok(value) => Ok(value),
                    Err(_) => unreachable!("queue channel disconnected"),
                })
                .recv(cancel, |_| Err(Error::Cancelled))
                .wait(),
        }
    }

    /// Dequeue without blocking. `None` means the queue was empty at that
    /// instant.
    pub fn try_poll(&self) -> Option<T> {
        self.rx.try_recv().ok()
    }

    /// Drain the queue until it is observed empty.
    ///
    /// Racy under concurrent producers: if offers keep arriving while the
    /// drain runs, it may run for an unbounded duration. It never blocks
    /// further offers; it only keeps consuming until an empty queue is seen.
    pub fn clear(&self) {
        while self.rx.try_recv().is_ok() {}
    }

    /// Instantaneous element count. Approximate under concurrency.
    pub fn size(&self) -> usize {
        self.rx.len()
    }

    /// Whether the queue looks empty. Approximate under concurrency.
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    /// The fixed capacity bound supplied at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many more elements fit right now. Approximate under concurrency.
    pub fn capacity_remaining(&self) -> usize {
        self.capacity - self.rx.len()
    }
}
