//! Page-wide resources that components borrow for a while.
//!
//! A component that needs to freeze page scrolling or listen for a key
//! outside its own focus acquires a guard from [`Host`]. Dropping the guard
//! releases the resource, so unmounting a component can never leak it.

use crossterm::event::KeyCode;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct Host {
    scroll_locks: Rc<Cell<usize>>,
    key_listeners: Rc<RefCell<Vec<(u64, KeyCode)>>>,
    next_listener: Rc<Cell<u64>>,
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspends page scrolling until the returned guard is dropped.
    pub fn lock_scroll(&self) -> ScrollLockGuard {
        self.scroll_locks.set(self.scroll_locks.get() + 1);
        ScrollLockGuard {
            locks: Rc::clone(&self.scroll_locks),
        }
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locks.get() > 0
    }

    /// Registers interest in `code` regardless of focus.
    pub fn listen(&self, code: KeyCode) -> KeyListener {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.key_listeners.borrow_mut().push((id, code));
        KeyListener {
            id,
            listeners: Rc::clone(&self.key_listeners),
        }
    }

    pub fn is_listening(&self, code: KeyCode) -> bool {
        self.key_listeners.borrow().iter().any(|(_, c)| *c == code)
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.key_listeners.borrow().len()
    }
}

/// Held while page scrolling must stay frozen.
#[derive(Debug)]
pub struct ScrollLockGuard {
    locks: Rc<Cell<usize>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.locks.set(self.locks.get().saturating_sub(1));
    }
}

/// A registered global key listener; unregisters on drop.
#[derive(Debug)]
pub struct KeyListener {
    id: u64,
    listeners: Rc<RefCell<Vec<(u64, KeyCode)>>>,
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        self.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_lock_lasts_as_long_as_guard() {
        let host = Host::new();
        assert!(!host.is_scroll_locked());

        let guard = host.lock_scroll();
        assert!(host.is_scroll_locked());

        drop(guard);
        assert!(!host.is_scroll_locked());
    }

    #[test]
    fn nested_locks_release_independently() {
        let host = Host::new();
        let outer = host.lock_scroll();
        let inner = host.lock_scroll();
        drop(inner);
        assert!(host.is_scroll_locked());
        drop(outer);
        assert!(!host.is_scroll_locked());
    }

    #[test]
    fn listener_unregisters_on_drop() {
        let host = Host::new();
        let esc = host.listen(KeyCode::Esc);
        let other = host.listen(KeyCode::Esc);
        assert_eq!(host.listener_count(), 2);

        drop(esc);
        assert!(host.is_listening(KeyCode::Esc));
        drop(other);
        assert!(!host.is_listening(KeyCode::Esc));
        assert_eq!(host.listener_count(), 0);
    }
}
