//! Toast notification queue shared by every form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Forms produce `Notice` values; the app pushes them here and the `Toaster`
//! component renders and expires them.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Oldest toasts are dropped beyond this many.
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A user-facing message produced by a form operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, message: message.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a notice and return its id for later dismissal.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, notice });
        if self.items.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.items.len() - MAX_VISIBLE_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }
}
