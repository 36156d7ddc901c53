//! Signal/slot notification for Gridlock.
//!
//! A type-safe, Qt-inspired signal mechanism. State containers emit signals
//! when something observable happens, and connected slots (callbacks) are
//! invoked in response. Dispatch is always direct and synchronous: the
//! pattern lock is single-owner and driven from one thread (typically the
//! UI/event thread), so there is no queued or cross-thread delivery.
//!
//! # Example
//!
//! ```
//! use gridlock_core::Signal;
//!
//! let cleared = Signal::<()>::new();
//!
//! let conn_id = cleared.connect(|_| {
//!     println!("pattern cleared");
//! });
//!
//! cleared.emit(());
//! cleared.disconnect(conn_id);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection is
    /// explicitly disconnected or the signal is dropped.
    pub struct ConnectionId;
}

/// Internal storage for a single connection.
struct Connection<Args: 'static> {
    /// The slot function to invoke (Arc-wrapped so emission can run outside
    /// the connection table lock).
    slot: Arc<dyn Fn(&Args) + Send + Sync>,
}

/// A type-safe signal that can have multiple connected slots.
///
/// Slots receive the emitted arguments by reference and are invoked in
/// connection order. Connecting and disconnecting from within a slot is
/// allowed; the change takes effect on the next emission.
pub struct Signal<Args: 'static> {
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Connect a slot to this signal.
    ///
    /// Returns a [`ConnectionId`] that can be used to disconnect the slot.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let mut connections = self.connections.lock();
        connections.insert(Connection {
            slot: Arc::new(slot),
        })
    }

    /// Disconnect a previously connected slot.
    ///
    /// Returns `true` if the connection existed and was removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Number of currently connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Returns true if no slots are connected.
    pub fn is_empty(&self) -> bool {
        self.connections.lock().is_empty()
    }

    /// Emit the signal, invoking every connected slot with `args`.
    ///
    /// Slots are cloned out of the connection table before invocation, so a
    /// slot may freely connect or disconnect without deadlocking.
    pub fn emit(&self, args: Args) {
        let slots: Vec<Arc<dyn Fn(&Args) + Send + Sync>> = {
            let connections = self.connections.lock();
            connections.values().map(|c| Arc::clone(&c.slot)).collect()
        };

        for slot in slots {
            slot(&args);
        }
    }
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connection_count())
            .finish()
    }
}

static_assertions::assert_impl_all!(Signal<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_emit_invokes_connected_slots() {
        let signal = Signal::<i32>::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_a = count.clone();
        signal.connect(move |&v| {
            count_a.fetch_add(v as usize, Ordering::SeqCst);
        });
        let count_b = count.clone();
        signal.connect(move |&v| {
            count_b.fetch_add(v as usize, Ordering::SeqCst);
        });

        signal.emit(3);
        assert_eq!(count.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_disconnect_stops_delivery() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = count.clone();
        let id = signal.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.emit(());
        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));
        signal.emit(());

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_emit_with_no_connections_is_a_no_op() {
        let signal = Signal::<String>::new();
        assert!(signal.is_empty());
        signal.emit("nobody listening".to_string());
    }

    #[test]
    fn test_disconnect_all() {
        let signal = Signal::<()>::new();
        signal.connect(|_| {});
        signal.connect(|_| {});
        assert_eq!(signal.connection_count(), 2);

        signal.disconnect_all();
        assert!(signal.is_empty());
    }
}
