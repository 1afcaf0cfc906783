//! Client-side state for the fleet forms.
//!
//! DESIGN
//! ======
//! Each form owns one plain state struct held in a single signal; `form`
//! carries the pieces they share. `toast` is app-level and provided through
//! context; `fleet` belongs to the host page.

pub mod driver_form;
pub mod fleet;
pub mod form;
pub mod toast;
pub mod truck_form;
