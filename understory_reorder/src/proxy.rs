// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag proxy: the floating stand-in for the item being dragged.
//!
//! ## Overview
//!
//! A [`DragProxy`] is created when an item is picked up. It samples the item's
//! appearance twice (normal and highlighted) through
//! [`ReorderHost::capture_appearance`] and from then on lives independently of
//! the list: the host may recycle, move or delete the source item while the
//! proxy keeps following the pointer.
//!
//! ## Animations
//!
//! The proxy does not animate itself. Each lifecycle operation updates the
//! proxy's model [`ProxyPresentation`] immediately and returns a
//! [`ProxyAnimation`] descriptor (old presentation → new presentation) that
//! the controller forwards to [`ReorderHost::animate_proxy`]. Hosts report
//! completion with the descriptor's [`AnimationTicket`].
//!
//! Terminal animations ([`settle_back`](DragProxy::settle_back) and
//! [`dissolve`](DragProxy::dissolve)) are accepted at most once per proxy, and
//! [`complete`](DragProxy::complete) reports the terminal completion at most
//! once. Session teardown hangs off that single `true`.

use kurbo::{Point, Rect};

use crate::config::ProxyStyle;
use crate::host::{ReorderHost, Slot};

/// Identifies one animation handed to the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AnimationTicket(u64);

impl AnimationTicket {
    /// Raw ticket value; unique per [`TicketSource`].
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Monotonic source of [`AnimationTicket`]s.
///
/// Owned by the controller so tickets stay unique across sessions; a late
/// completion from a finished session never matches a live one.
#[derive(Clone, Debug, Default)]
pub struct TicketSource {
    last: u64,
}

impl TicketSource {
    /// Create a fresh source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next ticket.
    pub fn next_ticket(&mut self) -> AnimationTicket {
        self.last = self.last.wrapping_add(1);
        AnimationTicket(self.last)
    }
}

/// What an animation does to the proxy.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AnimationKind {
    /// Pick-up: scale up, fade the highlight out, grow the shadow.
    Lift,
    /// Bounds change after a slot change.
    Resize,
    /// Drop back into the list at identity scale.
    Settle,
    /// Fade out after a removal.
    Dissolve,
}

impl AnimationKind {
    /// Whether completing this animation ends the session.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Settle | Self::Dissolve)
    }
}

/// Model values of the proxy's visual state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProxyPresentation {
    /// Unscaled bounds, positioned in content coordinates.
    pub frame: Rect,
    /// Uniform scale about the frame's center.
    pub scale: f64,
    /// Overall opacity.
    pub alpha: f64,
    /// Shadow opacity.
    pub shadow_opacity: f64,
    /// Opacity of the highlighted snapshot layered over the base snapshot.
    pub highlight_alpha: f64,
}

impl ProxyPresentation {
    /// The presentation of an item sitting in the list at `frame`.
    pub fn at_rest(frame: Rect) -> Self {
        Self {
            frame,
            scale: 1.0,
            alpha: 1.0,
            shadow_opacity: 0.0,
            highlight_alpha: 1.0,
        }
    }

    /// The on-screen frame, with scale applied.
    pub fn visual_frame(&self) -> Rect {
        Rect::from_center_size(self.frame.center(), self.frame.size() * self.scale)
    }

    /// Linear interpolation of every field.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| a * (1.0 - t) + b * t;
        Self {
            frame: Rect::new(
                mix(self.frame.x0, other.frame.x0),
                mix(self.frame.y0, other.frame.y0),
                mix(self.frame.x1, other.frame.x1),
                mix(self.frame.y1, other.frame.y1),
            ),
            scale: mix(self.scale, other.scale),
            alpha: mix(self.alpha, other.alpha),
            shadow_opacity: mix(self.shadow_opacity, other.shadow_opacity),
            highlight_alpha: mix(self.highlight_alpha, other.highlight_alpha),
        }
    }
}

/// Ease-in-out timing curve on `[0, 1]`.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// An animation request handed to [`ReorderHost::animate_proxy`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProxyAnimation {
    /// Ticket to report back on completion.
    pub ticket: AnimationTicket,
    /// What the animation does.
    pub kind: AnimationKind,
    /// Presentation at the start.
    pub from: ProxyPresentation,
    /// Presentation at the end.
    pub to: ProxyPresentation,
    /// Duration in seconds.
    pub duration: f64,
}

impl ProxyAnimation {
    /// Presentation at normalized time `t` (clamped to `[0, 1]`), eased.
    pub fn sample(&self, t: f64) -> ProxyPresentation {
        self.from.lerp(&self.to, ease_in_out(t))
    }
}

/// Lifecycle phase of a [`DragProxy`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ProxyPhase {
    /// Captured, not yet lifted.
    Resting,
    /// Lift animation in flight.
    Lifting,
    /// Following the pointer.
    Lifted,
    /// Settle animation in flight.
    Settling,
    /// Dissolve animation in flight.
    Dissolving,
    /// Terminal animation completed.
    Finished,
}

/// Snapshots of the source item.
#[derive(Clone, Debug)]
pub struct ProxyLayers<I> {
    /// Normal appearance.
    pub base: I,
    /// Highlighted appearance; dropped once the lift completes.
    pub highlighted: Option<I>,
}

/// Floating stand-in for the dragged item.
#[derive(Clone, Debug)]
pub struct DragProxy<I> {
    source_slot: Slot,
    layers: ProxyLayers<I>,
    presentation: ProxyPresentation,
    target_frame: Rect,
    style: ProxyStyle,
    phase: ProxyPhase,
    lift: Option<AnimationTicket>,
    terminal: Option<AnimationTicket>,
    removal_cue: bool,
}

impl<I> DragProxy<I> {
    /// Create a proxy resting at `frame` with pre-captured layers.
    pub fn new(source_slot: Slot, frame: Rect, layers: ProxyLayers<I>, style: ProxyStyle) -> Self {
        Self {
            source_slot,
            layers,
            presentation: ProxyPresentation::at_rest(frame),
            target_frame: frame,
            style,
            phase: ProxyPhase::Resting,
            lift: None,
            terminal: None,
            removal_cue: false,
        }
    }

    /// Capture both appearances of the item at `slot` and create a proxy over `frame`.
    ///
    /// This is the only point where the proxy samples the source item.
    pub fn capture<H>(host: &mut H, slot: Slot, frame: Rect, style: ProxyStyle) -> Self
    where
        H: ReorderHost<Image = I> + ?Sized,
    {
        let highlighted = host.capture_appearance(slot, true);
        let base = host.capture_appearance(slot, false);
        Self::new(
            slot,
            frame,
            ProxyLayers {
                base,
                highlighted: Some(highlighted),
            },
            style,
        )
    }

    /// The slot the item was picked up from.
    pub fn source_slot(&self) -> Slot {
        self.source_slot
    }

    /// Captured snapshots.
    pub fn layers(&self) -> &ProxyLayers<I> {
        &self.layers
    }

    /// Current model presentation.
    pub fn presentation(&self) -> &ProxyPresentation {
        &self.presentation
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> ProxyPhase {
        self.phase
    }

    /// Center of the proxy, in content coordinates.
    pub fn position(&self) -> Point {
        self.presentation.frame.center()
    }

    /// Move the proxy so its center is at `center`.
    pub fn set_position(&mut self, center: Point) {
        self.presentation.frame = Rect::from_center_size(center, self.presentation.frame.size());
    }

    /// On-screen frame, with the lift scale applied.
    pub fn frame(&self) -> Rect {
        self.presentation.visual_frame()
    }

    /// Layout frame of the slot the proxy will settle into.
    pub fn target_frame(&self) -> Rect {
        self.target_frame
    }

    /// Record the layout frame of the slot the proxy now belongs to.
    pub fn set_target_frame(&mut self, frame: Rect) {
        self.target_frame = frame;
    }

    /// Whether the removal cue is showing.
    pub fn removal_cue(&self) -> bool {
        self.removal_cue
    }

    /// Show or hide the removal cue. Returns `true` if it changed.
    pub fn set_removal_cue(&mut self, on: bool) -> bool {
        if self.removal_cue == on || self.is_terminating() {
            return false;
        }
        self.removal_cue = on;
        self.presentation.alpha = if on {
            self.style.removal_cue_alpha
        } else {
            1.0
        };
        true
    }

    /// Whether a terminal animation has been requested.
    pub fn is_terminating(&self) -> bool {
        matches!(
            self.phase,
            ProxyPhase::Settling | ProxyPhase::Dissolving | ProxyPhase::Finished
        )
    }

    fn animate(
        &mut self,
        kind: AnimationKind,
        to: ProxyPresentation,
        ticket: AnimationTicket,
    ) -> ProxyAnimation {
        let from = self.presentation;
        self.presentation = to;
        ProxyAnimation {
            ticket,
            kind,
            from,
            to,
            duration: self.style.duration,
        }
    }

    /// Lift the proxy out of the list.
    ///
    /// Only valid once, from [`ProxyPhase::Resting`].
    pub fn lift_in(&mut self, ticket: AnimationTicket) -> Option<ProxyAnimation> {
        if self.phase != ProxyPhase::Resting {
            return None;
        }
        let to = ProxyPresentation {
            scale: self.style.lift_scale,
            shadow_opacity: self.style.shadow_opacity,
            highlight_alpha: 0.0,
            ..self.presentation
        };
        self.phase = ProxyPhase::Lifting;
        self.lift = Some(ticket);
        Some(self.animate(AnimationKind::Lift, to, ticket))
    }

    /// Resize the proxy to `frame`'s size, keeping its center.
    ///
    /// Returns `None` when the size is unchanged or the proxy is terminating.
    pub fn resize(&mut self, frame: Rect, ticket: AnimationTicket) -> Option<ProxyAnimation> {
        if self.is_terminating() || self.presentation.frame.size() == frame.size() {
            return None;
        }
        let to = ProxyPresentation {
            frame: Rect::from_center_size(self.position(), frame.size()),
            ..self.presentation
        };
        Some(self.animate(AnimationKind::Resize, to, ticket))
    }

    /// Settle back into the list at `frame`, identity scale, no shadow.
    ///
    /// Returns `None` if a terminal animation was already requested.
    pub fn settle_back(&mut self, frame: Rect, ticket: AnimationTicket) -> Option<ProxyAnimation> {
        if self.is_terminating() {
            return None;
        }
        self.target_frame = frame;
        let to = ProxyPresentation {
            frame,
            scale: 1.0,
            shadow_opacity: 0.0,
            ..self.presentation
        };
        self.phase = ProxyPhase::Settling;
        self.terminal = Some(ticket);
        Some(self.animate(AnimationKind::Settle, to, ticket))
    }

    /// Fade out at identity scale.
    ///
    /// Returns `None` if a terminal animation was already requested.
    pub fn dissolve(&mut self, ticket: AnimationTicket) -> Option<ProxyAnimation> {
        if self.is_terminating() {
            return None;
        }
        // Start from full opacity regardless of the removal cue.
        self.presentation.alpha = 1.0;
        let to = ProxyPresentation {
            scale: 1.0,
            alpha: 0.0,
            ..self.presentation
        };
        self.phase = ProxyPhase::Dissolving;
        self.terminal = Some(ticket);
        Some(self.animate(AnimationKind::Dissolve, to, ticket))
    }

    /// Record the completion of the animation identified by `ticket`.
    ///
    /// Returns `true` exactly once: for the first completion of the pending
    /// terminal animation. Lift completions drop the highlighted layer; every
    /// other ticket is ignored.
    pub fn complete(&mut self, ticket: AnimationTicket) -> bool {
        if self.lift == Some(ticket) {
            self.lift = None;
            self.layers.highlighted = None;
            if self.phase == ProxyPhase::Lifting {
                self.phase = ProxyPhase::Lifted;
            }
            return false;
        }
        if self.terminal == Some(ticket) {
            self.terminal = None;
            self.phase = ProxyPhase::Finished;
            return true;
        }
        false
    }
}
