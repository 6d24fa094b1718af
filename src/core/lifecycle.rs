//! Bookkeeping for animation frames and controller attachment.

use std::cell::Cell;

/// The one outstanding frame request of a loop, if any.
///
/// A loop claims the token when it asks for a frame, releases it when the
/// frame is delivered and cancels it on shutdown. While the token is held
/// further claims do not issue a request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameToken {
    pending: Option<i32>,
}

impl FrameToken {
    pub const fn idle() -> Self {
        Self { pending: None }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    pub fn pending_id(&self) -> Option<i32> {
        self.pending
    }

    /// Run `request` only when no frame is outstanding and hold the id it
    /// returns. Returns whether a new frame was requested.
    pub fn claim(&mut self, request: impl FnOnce() -> Option<i32>) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = request();
        self.pending.is_some()
    }

    /// The frame fired; the loop may request another.
    #[inline]
    pub fn release(&mut self) {
        self.pending = None;
    }

    /// Drop the outstanding request, returning its id so the caller can
    /// cancel it with the browser.
    #[inline]
    pub fn cancel(&mut self) -> Option<i32> {
        self.pending.take()
    }
}

thread_local! {
    static ATTACHED: Cell<bool> = const { Cell::new(false) };
}

/// Proof that this thread holds the single controller slot. Dropping the
/// lease frees the slot.
#[derive(Debug)]
pub struct AttachLease {
    _private: (),
}

impl AttachLease {
    /// Take the slot, or `None` while another lease is alive.
    pub fn acquire() -> Option<Self> {
        ATTACHED.with(|slot| {
            if slot.replace(true) {
                None
            } else {
                Some(Self { _private: () })
            }
        })
    }

    pub fn is_held() -> bool {
        ATTACHED.with(Cell::get)
    }
}

impl Drop for AttachLease {
    fn drop(&mut self) {
        ATTACHED.with(|slot| slot.set(false));
    }
}
