// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session state machine.
//!
//! ## Overview
//!
//! [`ReorderController`] turns resolved gesture events into reorder behavior.
//! It owns the host, the delegate and at most one [`DragSession`].
//!
//! ```text
//! Idle --long press began--> Armed --pan changed--> Dragging
//!   ^                          |                       |
//!   |                          +--long press ended-----+--> Resolving
//!   +------------------terminal animation finished---------------+
//! ```
//!
//! ## Event sources
//!
//! - [`long_press`](ReorderController::long_press): begins a session, and
//!   resolves it on end or cancel.
//! - [`pan`](ReorderController::pan): moves the proxy; its end stops
//!   auto-scroll.
//! - [`tick`](ReorderController::tick): one auto-scroll frame, delivered by
//!   the host between [`ReorderHost::start_frame_ticks`] and
//!   [`ReorderHost::stop_frame_ticks`].
//! - [`animation_finished`](ReorderController::animation_finished): the host's
//!   report that a [`ProxyAnimation`](crate::proxy::ProxyAnimation) ended.
//!
//! Every entry point is a silent no-op when it does not apply: before
//! [`attach`](ReorderController::attach), without a session, or while the
//! session is resolving.

use kurbo::{Point, Vec2};

use crate::autoscroll::{self, TickOutcome};
use crate::axis::{Axis, AxisGeometry, overlaps};
use crate::config::ReorderConfig;
use crate::host::{Batch, NoDelegate, ReorderDelegate, ReorderHost, Slot};
use crate::proxy::{AnimationTicket, DragProxy, TicketSource};
use crate::reorder;
use crate::session::{DragSession, Resolution, SessionPhase};

/// Phase of a recognizer-delivered gesture.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum GesturePhase {
    /// The gesture was recognized.
    Began,
    /// The pointer moved.
    Changed,
    /// The pointer was released.
    Ended,
    /// The system cancelled the gesture.
    Cancelled,
}

/// Gestures the controller arbitrates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Gesture {
    /// Long press that picks an item up.
    LongPress,
    /// Pan that moves the picked-up item.
    Pan,
}

/// Externally visible state of the controller.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum DragState {
    /// No session.
    #[default]
    Idle,
    /// Item picked up; the pointer has not moved.
    Armed,
    /// Item following the pointer.
    Dragging,
    /// Released; waiting for the settle or dissolve animation.
    Resolving,
}

/// Drag-to-reorder controller for one host surface.
pub struct ReorderController<H: ReorderHost, D: ReorderDelegate = NoDelegate> {
    host: H,
    delegate: D,
    config: ReorderConfig,
    axis: Axis,
    tickets: TicketSource,
    session: Option<DragSession<H::Image>>,
    attached: bool,
}

impl<H: ReorderHost, D: ReorderDelegate> core::fmt::Debug for ReorderController<H, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReorderController")
            .field("state", &self.state())
            .field("axis", &self.axis)
            .field("config", &self.config)
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

impl<H: ReorderHost> ReorderController<H, NoDelegate> {
    /// Create a controller with the default delegate.
    pub fn new(host: H) -> Self {
        Self::with_delegate(host, NoDelegate)
    }
}

impl<H: ReorderHost, D: ReorderDelegate> ReorderController<H, D> {
    /// Create a controller with an application delegate.
    pub fn with_delegate(host: H, delegate: D) -> Self {
        Self {
            host,
            delegate,
            config: ReorderConfig::default(),
            axis: Axis::default(),
            tickets: TicketSource::new(),
            session: None,
            attached: false,
        }
    }

    /// Replace the configuration. Delegate overrides are re-applied on the next
    /// [`prepare_layout`](Self::prepare_layout).
    pub fn set_config(&mut self, config: ReorderConfig) {
        self.config = config;
    }

    /// Current configuration.
    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    /// Axis resolved by the last layout pass.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The host surface.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host surface, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The application delegate.
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// The application delegate, mutably.
    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// Tear down the controller, returning the host and delegate.
    pub fn into_parts(self) -> (H, D) {
        (self.host, self.delegate)
    }

    /// Called by the host once it is ready to deliver events.
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        self.prepare_layout();
    }

    /// Whether [`attach`](Self::attach) has been called.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Refresh the axis and delegate-provided configuration. Call once per layout pass.
    pub fn prepare_layout(&mut self) {
        self.axis = self.host.axis();
        if let Some(insets) = self.delegate.trigger_insets() {
            self.config.trigger_insets = insets;
        }
        if let Some(padding) = self.delegate.trigger_padding() {
            self.config.trigger_padding = padding;
        }
        if let Some(speed) = self.delegate.scroll_speed() {
            self.config.scroll_speed = speed;
        }
    }

    /// Current state.
    pub fn state(&self) -> DragState {
        match &self.session {
            None => DragState::Idle,
            Some(s) => match s.phase {
                SessionPhase::Armed => DragState::Armed,
                SessionPhase::Dragging => DragState::Dragging,
                SessionPhase::Resolving => DragState::Resolving,
            },
        }
    }

    /// The live session, if any.
    pub fn session(&self) -> Option<&DragSession<H::Image>> {
        self.session.as_ref()
    }

    /// The live proxy, if any.
    pub fn proxy(&self) -> Option<&DragProxy<H::Image>> {
        self.session.as_ref().map(DragSession::proxy)
    }

    /// Whether the host is currently asked to deliver frame ticks.
    pub fn is_auto_scrolling(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.scroll_state.is_engaged())
    }

    /// Opacity override for the in-list item at `slot`, while its proxy is being dragged.
    ///
    /// `None` means "no override": the slot is not the dragged item's slot, or
    /// the item has been removed.
    pub fn item_opacity(&mut self, slot: Slot) -> Option<f64> {
        let session = self.session.as_ref()?;
        if session.current_slot != slot || session.resolution == Some(Resolution::Remove) {
            return None;
        }
        Some(
            self.delegate
                .reordering_opacity(slot.section)
                .unwrap_or(self.config.reordering_opacity),
        )
    }

    /// Whether a recognizer for `gesture` at `location` should be allowed to begin.
    ///
    /// A long press is refused over an item the delegate will not let go of,
    /// while a session exists, or while the user is scrolling the surface. A
    /// pan is refused unless an item is picked up and not yet released.
    pub fn should_begin(&mut self, gesture: Gesture, location: Point) -> bool {
        if !self.attached {
            return false;
        }
        match gesture {
            Gesture::LongPress => {
                if self.session.is_some() || self.host.is_scrolling() {
                    return false;
                }
                match self.host.slot_at(location) {
                    Some(slot) => self.delegate.allow_pickup(slot),
                    None => true,
                }
            }
            Gesture::Pan => matches!(self.state(), DragState::Armed | DragState::Dragging),
        }
    }

    /// Deliver a long-press event at `location` (content coordinates).
    pub fn long_press(&mut self, phase: GesturePhase, location: Point) {
        if !self.attached {
            return;
        }
        match phase {
            GesturePhase::Began => self.begin(location),
            GesturePhase::Changed => {}
            GesturePhase::Ended | GesturePhase::Cancelled => self.resolve(true),
        }
    }

    /// Deliver a pan event with the pointer's total `translation` since the pan began.
    pub fn pan(&mut self, phase: GesturePhase, translation: Vec2) {
        if !self.attached {
            return;
        }
        match phase {
            GesturePhase::Began => {}
            GesturePhase::Changed => self.drag_to(translation),
            GesturePhase::Ended | GesturePhase::Cancelled => {
                if let Some(session) = self.session.as_mut() {
                    autoscroll::disengage(session, &mut self.host);
                }
            }
        }
    }

    /// Advance one auto-scroll frame.
    ///
    /// A tick that arrives without an engaged session stops the host's tick source.
    pub fn tick(&mut self) -> TickOutcome {
        match self.session.as_mut() {
            Some(session)
                if session.phase != SessionPhase::Resolving
                    && session.scroll_state.is_engaged() =>
            {
                autoscroll::tick(
                    session,
                    &mut self.host,
                    &mut self.delegate,
                    self.axis,
                    &self.config,
                    &mut self.tickets,
                )
            }
            _ => {
                self.host.stop_frame_ticks();
                TickOutcome::Idle
            }
        }
    }

    /// Cancel the current drag, settling the item back into its current slot.
    pub fn cancel_drag(&mut self) {
        self.resolve(false);
    }

    /// Report that the proxy animation identified by `ticket` has finished.
    ///
    /// Completion of the terminal (settle or dissolve) animation ends the
    /// session; repeated or unknown tickets are ignored.
    pub fn animation_finished(&mut self, ticket: AnimationTicket) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.proxy.complete(ticket) {
            return;
        }
        let slot = session.current_slot;
        let resolution = session.resolution;
        autoscroll::disengage(session, &mut self.host);
        self.session = None;
        self.host.invalidate_layout();
        if resolution == Some(Resolution::Restore) {
            self.delegate.did_end_drag(slot);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(?slot, ?resolution, "drag session finished");
    }

    fn begin(&mut self, location: Point) {
        if self.session.is_some() {
            #[cfg(feature = "tracing")]
            tracing::trace!("pickup rejected: a drag is already in progress");
            return;
        }
        let Some(slot) = self.host.slot_at(location) else {
            return;
        };
        if !self.delegate.allow_pickup(slot) {
            return;
        }
        let Some(frame) = self.host.frame_for_slot(slot) else {
            return;
        };

        self.delegate.will_begin_drag(slot);
        self.host.set_scrolls_to_top(false);
        let proxy = DragProxy::capture(&mut self.host, slot, frame, self.config.style);
        let mut session = DragSession::new(proxy);
        let lift = session.proxy.lift_in(self.tickets.next_ticket());
        self.session = Some(session);
        self.host.invalidate_layout();
        if let Some(animation) = lift {
            self.host.animate_proxy(&animation);
        }
        self.delegate.did_begin_drag(slot);

        #[cfg(feature = "tracing")]
        tracing::debug!(?slot, "drag session began");
    }

    fn drag_to(&mut self, translation: Vec2) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.phase == SessionPhase::Resolving {
            return;
        }
        session.phase = SessionPhase::Dragging;
        session.set_translation(translation);

        let geom = AxisGeometry::from_host(self.axis, &self.host);
        let removable = drops_outside(session, &geom, &mut self.delegate);
        session.proxy.set_removal_cue(removable);
        autoscroll::update_engagement(session, &mut self.host, &geom, &self.config);
        reorder::evaluate_and_move(
            session,
            &mut self.host,
            &mut self.delegate,
            &mut self.tickets,
        );
    }

    fn resolve(&mut self, allow_removal: bool) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.phase == SessionPhase::Resolving {
            return;
        }
        let geom = AxisGeometry::from_host(self.axis, &self.host);
        let remove = allow_removal && drops_outside(session, &geom, &mut self.delegate);
        let slot = session.current_slot;

        session.phase = SessionPhase::Resolving;
        self.host.set_scrolls_to_top(true);
        autoscroll::disengage(session, &mut self.host);

        let ticket = self.tickets.next_ticket();
        let animation = if remove {
            session.resolution = Some(Resolution::Remove);
            self.delegate.will_remove(slot);
            self.host.perform_batch(&Batch::removing(slot));
            self.delegate.did_remove(slot);
            #[cfg(feature = "tracing")]
            tracing::debug!(?slot, "dragged item removed");
            session.proxy.dissolve(ticket)
        } else {
            session.resolution = Some(Resolution::Restore);
            self.delegate.will_end_drag(slot);
            session.proxy.set_removal_cue(false);
            let frame = self
                .host
                .frame_for_slot(slot)
                .unwrap_or_else(|| session.proxy.target_frame());
            #[cfg(feature = "tracing")]
            tracing::debug!(?slot, "dragged item settling");
            session.proxy.settle_back(frame, ticket)
        };
        if let Some(animation) = animation {
            self.host.animate_proxy(&animation);
        }
    }
}

/// Whether dropping now would remove the item: the proxy is entirely outside
/// the container's visible bounds and the delegate permits removal.
fn drops_outside<I, D>(session: &DragSession<I>, geom: &AxisGeometry, delegate: &mut D) -> bool
where
    D: ReorderDelegate + ?Sized,
{
    !overlaps(geom.visible_rect(), session.proxy.frame()) && delegate.can_remove(session.current_slot)
}
