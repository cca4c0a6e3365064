//! Change notifications for presentation layers.

use crate::catalog::BookId;

/// A state mutation that just happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    /// A new account was registered.
    AccountRegistered { email: String },
    /// A session started.
    LoggedIn { email: String },
    /// The session ended (the cart was emptied with it).
    LoggedOut,
    /// The cart contents changed.
    CartChanged { len: usize },
    /// A like was added or removed.
    LikeToggled {
        book_id: BookId,
        liked: bool,
        count: usize,
    },
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StateChange)>;

/// Registered listeners, notified in subscription order.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Subscribers {
    pub(crate) fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub(crate) fn emit(&mut self, change: &StateChange) {
        tracing::trace!("Emitting {:?} to {} listeners", change, self.listeners.len());
        for (_, listener) in &mut self.listeners {
            listener(change);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
