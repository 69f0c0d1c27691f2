//! Synchronous change broadcast for the stores.

use std::fmt;

/// Token returned by [`ChangeSignal::subscribe`]; redeem it to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

/// An explicit list of registered callbacks fired after each applied
/// mutation.
///
/// Handlers run synchronously, in place, before the mutating call returns.
/// Invocation order across handlers is unspecified. Handlers must not call
/// back into the store that is emitting.
pub struct ChangeSignal {
    handlers: Vec<(u64, Box<dyn Fn()>)>,
    next_token: u64,
}

impl ChangeSignal {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            next_token: 1,
        }
    }

    /// Registers `handler` and returns the token that removes it again.
    pub fn subscribe(&mut self, handler: impl Fn() + 'static) -> Subscription {
        let token = self.next_token;
        self.next_token += 1;
        self.handlers.push((token, Box::new(handler)));
        Subscription(token)
    }

    /// Drops the handler behind `subscription`.
    ///
    /// Returns `false` when the token was already redeemed or never issued.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(token, _)| *token != subscription.0);
        self.handlers.len() != before
    }

    /// Invokes every registered handler once.
    pub fn emit(&self) {
        for (_, handler) in &self.handlers {
            handler();
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for ChangeSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChangeSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeSignal")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}
