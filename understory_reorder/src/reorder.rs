// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reorder engine: map the proxy's position to a slot and move the item there.
//!
//! The engine reasons in slots only. It asks the host which slot covers the
//! proxy's center and, when that differs from the session's current slot and
//! the delegate agrees, relocates the item with a single batched mutation.
//! Calling it again with an unchanged proxy position does nothing.

use crate::host::{Batch, ReorderDelegate, ReorderHost, Slot};
use crate::proxy::TicketSource;
use crate::session::DragSession;

/// Result of [`evaluate_and_move`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MoveOutcome {
    /// The proxy is over its current slot, over no slot, or the session is terminating.
    Unchanged,
    /// The delegate refused the move; nothing changed.
    Denied {
        /// Slot the item occupies.
        from: Slot,
        /// Slot the proxy is over.
        to: Slot,
    },
    /// The item moved.
    Moved {
        /// Previous slot.
        from: Slot,
        /// New slot.
        to: Slot,
    },
}

/// Move the dragged item to the slot under the proxy's center, if permitted.
///
/// On a move the delegate sees `will_move`, the session's current slot and the
/// proxy's target frame are updated, the proxy is resized when the new slot's
/// size differs, the host applies one delete + insert batch, and the delegate
/// sees `did_move`.
pub fn evaluate_and_move<H, D>(
    session: &mut DragSession<H::Image>,
    host: &mut H,
    delegate: &mut D,
    tickets: &mut TicketSource,
) -> MoveOutcome
where
    H: ReorderHost + ?Sized,
    D: ReorderDelegate + ?Sized,
{
    if session.proxy.is_terminating() {
        return MoveOutcome::Unchanged;
    }
    let from = session.current_slot;
    let Some(to) = host.slot_at(session.proxy.position()) else {
        return MoveOutcome::Unchanged;
    };
    if to == from {
        return MoveOutcome::Unchanged;
    }
    if !delegate.can_move(from, to) {
        #[cfg(feature = "tracing")]
        tracing::trace!(?from, ?to, "move denied");
        return MoveOutcome::Denied { from, to };
    }
    let Some(frame) = host.frame_for_slot(to) else {
        return MoveOutcome::Unchanged;
    };

    delegate.will_move(from, to);
    session.current_slot = to;
    session.proxy.set_target_frame(frame);
    if let Some(animation) = session.proxy.resize(frame, tickets.next_ticket()) {
        host.animate_proxy(&animation);
    }
    host.perform_batch(&Batch::moving(from, to));
    delegate.did_move(from, to);

    #[cfg(feature = "tracing")]
    tracing::debug!(?from, ?to, "moved dragged item");
    MoveOutcome::Moved { from, to }
}
