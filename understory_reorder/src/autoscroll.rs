// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-scroll driver: scroll the host while the proxy sits near an edge.
//!
//! ## Trigger zones
//!
//! Each edge of the viewport carries a band, [`TriggerZone`], that starts
//! `padding` in from the edge and extends `inset` further inward:
//!
//! ```text
//! offset     offset + pad_lead    offset + pad_lead + inset_lead
//!   |------------|=====================|  ...  |====================|------------|
//!                 leading zone                    trailing zone     offset + viewport
//! ```
//!
//! A proxy whose leading edge crosses into the leading band (or trailing edge
//! into the trailing band) engages scrolling in that direction. The speed is
//! proportional to how deep the edge has penetrated: zero at the inner
//! boundary of the band, full speed at the container edge.
//!
//! ## Tick lifecycle
//!
//! [`update_engagement`] runs on every pointer move and is the only place that
//! starts the host's frame ticks; [`disengage`] stops them. [`tick`] advances
//! the scroll offset and the session anchor by the same amount so the proxy
//! stays under the pointer, then re-runs the reorder engine.

use crate::axis::{Axis, AxisGeometry};
use crate::config::ReorderConfig;
use crate::host::{ReorderDelegate, ReorderHost};
use crate::proxy::TicketSource;
use crate::reorder::{MoveOutcome, evaluate_and_move};
use crate::session::{DragSession, ScrollState};

/// Leading and trailing trigger bands for one scroll position, as scalars on the axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriggerZone {
    /// Container-side limit of the leading band.
    pub leading_edge: f64,
    /// Inner limit of the leading band.
    pub leading_boundary: f64,
    /// Inner limit of the trailing band.
    pub trailing_boundary: f64,
    /// Container-side limit of the trailing band.
    pub trailing_edge: f64,
}

impl TriggerZone {
    /// Compute the bands for the current scroll position.
    pub fn compute(geom: &AxisGeometry, config: &ReorderConfig) -> Self {
        let (pad_lead, pad_trail) = geom.insets_along(config.trigger_padding);
        let (inset_lead, inset_trail) = geom.insets_along(config.trigger_insets);
        let leading_edge = geom.offset() + pad_lead;
        let trailing_edge = geom.offset() + geom.viewport_length() - pad_trail;
        Self {
            leading_edge,
            leading_boundary: leading_edge + inset_lead,
            trailing_boundary: trailing_edge - inset_trail,
            trailing_edge,
        }
    }

    /// Depth of the leading band.
    pub fn leading_depth(&self) -> f64 {
        self.leading_boundary - self.leading_edge
    }

    /// Depth of the trailing band.
    pub fn trailing_depth(&self) -> f64 {
        self.trailing_edge - self.trailing_boundary
    }

    /// Scroll direction for a proxy spanning `leading..trailing` on the axis.
    ///
    /// The leading band wins when the proxy touches both.
    pub fn engagement(&self, leading: f64, trailing: f64) -> ScrollState {
        if leading <= self.leading_boundary {
            ScrollState::ToLeading
        } else if trailing >= self.trailing_boundary {
            ScrollState::ToTrailing
        } else {
            ScrollState::Idle
        }
    }

    /// How far the proxy's relevant edge has penetrated the band for `state`, in `[0, 1]`.
    ///
    /// `0` at the band's inner boundary, `1` at (or beyond) the container edge.
    pub fn percentage(&self, state: ScrollState, leading: f64, trailing: f64) -> f64 {
        let (remaining, depth, crossed) = match state {
            ScrollState::Idle => return 0.0,
            ScrollState::ToLeading => (
                leading - self.leading_edge,
                self.leading_depth(),
                leading <= self.leading_boundary,
            ),
            ScrollState::ToTrailing => (
                self.trailing_edge - trailing,
                self.trailing_depth(),
                trailing >= self.trailing_boundary,
            ),
        };
        if depth <= 0.0 {
            return if crossed { 1.0 } else { 0.0 };
        }
        (1.0 - remaining / depth).clamp(0.0, 1.0)
    }
}

/// Signed scroll distance for one tick.
pub fn scroll_rate(state: ScrollState, speed: f64, percentage: f64) -> f64 {
    state.sign() * speed * percentage.clamp(0.0, 1.0)
}

/// Limit `rate` so the resulting offset stays within the scrollable range.
///
/// Returns `0` when the content (with insets) fits in the viewport, or when
/// the offset is already beyond the limit `rate` points toward.
pub fn clamp_rate(geom: &AxisGeometry, rate: f64) -> f64 {
    if !geom.is_scrollable() {
        return 0.0;
    }
    let offset = geom.offset();
    let clamped = if offset + rate <= geom.min_offset() {
        geom.min_offset() - offset
    } else if offset + rate >= geom.max_offset() {
        geom.max_offset() - offset
    } else {
        rate
    };
    // Past a limit (the content shrank): never scroll backwards, never faster than `rate`.
    if clamped * rate < 0.0 {
        0.0
    } else if rate > 0.0 {
        clamped.min(rate)
    } else {
        clamped.max(rate)
    }
}

/// Re-evaluate engagement for the proxy's current frame.
///
/// Starts the host's frame ticks when scrolling engages and stops them when it
/// disengages; a direction change keeps the ticks running. Content that fits
/// in the viewport never engages.
pub fn update_engagement<H>(
    session: &mut DragSession<H::Image>,
    host: &mut H,
    geom: &AxisGeometry,
    config: &ReorderConfig,
) -> ScrollState
where
    H: ReorderHost + ?Sized,
{
    let next = if geom.is_scrollable() {
        let zone = TriggerZone::compute(geom, config);
        let frame = session.proxy.frame();
        zone.engagement(geom.leading_edge(frame), geom.trailing_edge(frame))
    } else {
        ScrollState::Idle
    };
    let was = session.scroll_state;
    session.scroll_state = next;
    match (was.is_engaged(), next.is_engaged()) {
        (false, true) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(direction = ?next, "auto-scroll engaged");
            host.start_frame_ticks();
        }
        (true, false) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("auto-scroll disengaged");
            host.stop_frame_ticks();
        }
        _ => {}
    }
    next
}

/// Stop auto-scrolling for `session`.
pub fn disengage<H>(session: &mut DragSession<H::Image>, host: &mut H)
where
    H: ReorderHost + ?Sized,
{
    if session.scroll_state.is_engaged() {
        host.stop_frame_ticks();
    }
    session.scroll_state = ScrollState::Idle;
}

/// Result of one auto-scroll [`tick`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// Nothing to do: no engaged session.
    Idle,
    /// Engaged, but the content fits in the viewport.
    Unscrollable,
    /// Scrolled by `delta` along the axis (possibly `0` at a content edge).
    Scrolled {
        /// Signed scroll distance applied.
        delta: f64,
        /// What the reorder engine did afterwards.
        moved: MoveOutcome,
    },
}

/// Advance one frame of auto-scroll.
pub fn tick<H, D>(
    session: &mut DragSession<H::Image>,
    host: &mut H,
    delegate: &mut D,
    axis: Axis,
    config: &ReorderConfig,
    tickets: &mut TicketSource,
) -> TickOutcome
where
    H: ReorderHost + ?Sized,
    D: ReorderDelegate + ?Sized,
{
    let state = session.scroll_state;
    if !state.is_engaged() {
        return TickOutcome::Idle;
    }
    let geom = AxisGeometry::from_host(axis, host);
    if !geom.is_scrollable() {
        return TickOutcome::Unscrollable;
    }
    let zone = TriggerZone::compute(&geom, config);
    let frame = session.proxy.frame();
    let percentage = zone.percentage(state, geom.leading_edge(frame), geom.trailing_edge(frame));
    let rate = clamp_rate(&geom, scroll_rate(state, config.scroll_speed, percentage));

    let delta = geom.vector(rate);
    host.set_scroll_offset(host.scroll_offset() + delta);
    session.shift_anchor(delta);

    let moved = evaluate_and_move(session, host, delegate, tickets);
    TickOutcome::Scrolled { delta: rate, moved }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Slot;
    use crate::proxy::DragProxy;
    use crate::test_support::{ListHost, RecordingDelegate};
    use kurbo::{Insets, Point, Size, Vec2};

    fn approx(a: f64, b: f64) -> bool {
        let d = a - b;
        d < 1e-9 && d > -1e-9
    }

    fn geom(offset: f64, content: f64, viewport: f64) -> AxisGeometry {
        AxisGeometry::new(
            Axis::Primary,
            Vec2::new(0.0, offset),
            Insets::ZERO,
            Size::new(300.0, content),
            Size::new(300.0, viewport),
        )
    }

    fn zone_with_depth(depth: f64) -> TriggerZone {
        let config = ReorderConfig {
            trigger_insets: Insets::uniform(depth),
            ..ReorderConfig::default()
        };
        TriggerZone::compute(&geom(0.0, 1000.0, 400.0), &config)
    }

    fn pick(host: &mut ListHost, item: usize) -> DragSession<(Slot, bool)> {
        let slot = Slot::new(0, item);
        let frame = host.frame_for_slot(slot).unwrap();
        DragSession::new(DragProxy::capture(
            host,
            slot,
            frame,
            ReorderConfig::default().style,
        ))
    }

    #[test]
    fn zone_bands_use_padding_and_independent_insets() {
        let config = ReorderConfig {
            trigger_insets: Insets::new(0.0, 40.0, 0.0, 60.0),
            trigger_padding: Insets::new(0.0, 5.0, 0.0, 10.0),
            ..ReorderConfig::default()
        };
        let z = TriggerZone::compute(&geom(100.0, 1000.0, 300.0), &config);
        assert_eq!(z.leading_edge, 105.0);
        assert_eq!(z.leading_boundary, 145.0);
        assert_eq!(z.trailing_edge, 390.0);
        assert_eq!(z.trailing_boundary, 330.0);
        assert_eq!(z.leading_depth(), 40.0);
        assert_eq!(z.trailing_depth(), 60.0);
    }

    #[test]
    fn engagement_by_edge() {
        let z = zone_with_depth(100.0);
        assert_eq!(z.engagement(90.0, 140.0), ScrollState::ToLeading);
        assert_eq!(z.engagement(100.0, 150.0), ScrollState::ToLeading);
        assert_eq!(z.engagement(150.0, 200.0), ScrollState::Idle);
        assert_eq!(z.engagement(260.0, 310.0), ScrollState::ToTrailing);
    }

    #[test]
    fn percentage_is_zero_at_boundary_and_one_at_edge() {
        let z = zone_with_depth(100.0);
        assert_eq!(z.percentage(ScrollState::ToLeading, 100.0, 150.0), 0.0);
        assert_eq!(z.percentage(ScrollState::ToLeading, 0.0, 50.0), 1.0);
        assert_eq!(z.percentage(ScrollState::ToLeading, 50.0, 100.0), 0.5);
        assert_eq!(z.percentage(ScrollState::ToTrailing, 250.0, 300.0), 0.0);
        assert_eq!(z.percentage(ScrollState::ToTrailing, 350.0, 400.0), 1.0);
        assert_eq!(z.percentage(ScrollState::ToTrailing, 400.0, 450.0), 1.0);
        assert_eq!(z.percentage(ScrollState::Idle, 0.0, 50.0), 0.0);
    }

    #[test]
    fn zero_depth_zone_is_all_or_nothing() {
        let z = zone_with_depth(0.0);
        assert_eq!(z.percentage(ScrollState::ToLeading, 0.0, 50.0), 1.0);
        assert_eq!(z.percentage(ScrollState::ToLeading, 10.0, 60.0), 0.0);
    }

    #[test]
    fn rate_follows_direction_and_percentage() {
        assert_eq!(scroll_rate(ScrollState::ToLeading, 10.0, 0.5), -5.0);
        assert_eq!(scroll_rate(ScrollState::ToTrailing, 10.0, 2.0), 10.0);
        assert_eq!(scroll_rate(ScrollState::Idle, 10.0, 1.0), 0.0);
    }

    #[test]
    fn clamp_stops_at_content_edges() {
        // Content 1000, viewport 300: offsets in [0, 700].
        assert_eq!(clamp_rate(&geom(650.0, 1000.0, 300.0), 10.0), 10.0);
        assert_eq!(clamp_rate(&geom(695.0, 1000.0, 300.0), 10.0), 5.0);
        assert_eq!(clamp_rate(&geom(700.0, 1000.0, 300.0), 10.0), 0.0);
        assert_eq!(clamp_rate(&geom(4.0, 1000.0, 300.0), -10.0), -4.0);
        // Nothing to scroll.
        assert_eq!(clamp_rate(&geom(0.0, 300.0, 300.0), 10.0), 0.0);
        assert_eq!(clamp_rate(&geom(0.0, 200.0, 300.0), -10.0), 0.0);
    }

    #[test]
    fn clamp_accounts_for_insets() {
        let g = AxisGeometry::new(
            Axis::Primary,
            Vec2::new(0.0, -10.0),
            Insets::new(0.0, 20.0, 0.0, 30.0),
            Size::new(300.0, 1000.0),
            Size::new(300.0, 300.0),
        );
        assert_eq!(clamp_rate(&g, -15.0), -10.0);
        let end = AxisGeometry::new(
            Axis::Primary,
            Vec2::new(0.0, 725.0),
            Insets::new(0.0, 20.0, 0.0, 30.0),
            Size::new(300.0, 1000.0),
            Size::new(300.0, 300.0),
        );
        assert_eq!(clamp_rate(&end, 10.0), 5.0);
    }

    #[test]
    fn engagement_starts_and_stops_ticks_once() {
        let mut host = ListHost::vertical(20);
        let config = ReorderConfig::default();
        let mut session = pick(&mut host, 3);

        // Row 3 spans 150..200 in a 400 viewport: idle.
        let g = AxisGeometry::from_host(Axis::Primary, &host);
        assert_eq!(
            update_engagement(&mut session, &mut host, &g, &config),
            ScrollState::Idle
        );
        assert!(!host.ticking);

        session.set_translation(Vec2::new(0.0, 150.0));
        for _ in 0..3 {
            assert_eq!(
                update_engagement(&mut session, &mut host, &g, &config),
                ScrollState::ToTrailing
            );
        }
        assert!(host.ticking);
        assert_eq!(host.tick_starts, 1);

        session.set_translation(Vec2::ZERO);
        let _ = update_engagement(&mut session, &mut host, &g, &config);
        assert!(!host.ticking);
        assert_eq!(session.scroll_state(), ScrollState::Idle);
    }

    #[test]
    fn tick_keeps_proxy_pinned_under_pointer() {
        let mut host = ListHost::vertical(20);
        let mut delegate = RecordingDelegate::default();
        let mut tickets = TicketSource::new();
        let config = ReorderConfig::default();
        let mut session = pick(&mut host, 3);

        // Center 325: frame 300..350 reaches 50 into the trailing band.
        session.set_translation(Vec2::new(0.0, 150.0));
        let g = AxisGeometry::from_host(Axis::Primary, &host);
        let _ = update_engagement(&mut session, &mut host, &g, &config);
        let before = session.proxy().position().y - host.offset.y;

        let out = tick(
            &mut session,
            &mut host,
            &mut delegate,
            Axis::Primary,
            &config,
            &mut tickets,
        );
        let TickOutcome::Scrolled { delta, .. } = out else {
            panic!("expected a scroll, got {out:?}");
        };
        assert!(approx(delta, 5.0));
        assert!(approx(host.offset.y, 5.0));
        assert!(approx(session.proxy().position().y - host.offset.y, before));
        assert_eq!(session.proxy().position().x, 150.0);
    }

    #[test]
    fn tick_without_engagement_is_idle() {
        let mut host = ListHost::vertical(20);
        let mut delegate = RecordingDelegate::default();
        let mut tickets = TicketSource::new();
        let mut session = pick(&mut host, 3);
        let out = tick(
            &mut session,
            &mut host,
            &mut delegate,
            Axis::Primary,
            &ReorderConfig::default(),
            &mut tickets,
        );
        assert_eq!(out, TickOutcome::Idle);
        assert_eq!(host.offset, Vec2::ZERO);
    }

    #[test]
    fn short_content_never_engages() {
        let mut host = ListHost::vertical(4);
        let mut delegate = RecordingDelegate::default();
        let mut tickets = TicketSource::new();
        let config = ReorderConfig::default();
        let mut session = pick(&mut host, 3);
        let g = AxisGeometry::from_host(Axis::Primary, &host);
        // Row 0 region is inside the leading band.
        session.set_translation(Vec2::new(0.0, -150.0));
        assert_eq!(
            update_engagement(&mut session, &mut host, &g, &config),
            ScrollState::Idle
        );
        assert!(!host.ticking);
        assert_eq!(host.tick_starts, 0);
        let out = tick(
            &mut session,
            &mut host,
            &mut delegate,
            Axis::Primary,
            &config,
            &mut tickets,
        );
        assert_eq!(out, TickOutcome::Idle);
        assert_eq!(host.offset, Vec2::ZERO);
        assert_eq!(session.proxy().position(), Point::new(150.0, 25.0));
    }

    #[test]
    fn content_shrinking_under_engaged_scroll_is_unscrollable() {
        let mut host = ListHost::vertical(20);
        let mut delegate = RecordingDelegate::default();
        let mut tickets = TicketSource::new();
        let config = ReorderConfig::default();
        let mut session = pick(&mut host, 3);
        session.set_translation(Vec2::new(0.0, 150.0));
        let g = AxisGeometry::from_host(Axis::Primary, &host);
        assert_eq!(
            update_engagement(&mut session, &mut host, &g, &config),
            ScrollState::ToTrailing
        );

        host.items.truncate(4);
        let out = tick(
            &mut session,
            &mut host,
            &mut delegate,
            Axis::Primary,
            &config,
            &mut tickets,
        );
        assert_eq!(out, TickOutcome::Unscrollable);
        assert_eq!(host.offset, Vec2::ZERO);
    }

    #[test]
    fn offset_past_limit_never_scrolls_backwards() {
        // Content 1000, viewport 300: max offset 700, already at 750.
        let past = geom(750.0, 1000.0, 300.0);
        assert_eq!(clamp_rate(&past, 10.0), 0.0);
        // Scrolling back toward the range is still allowed, up to the limit.
        assert_eq!(clamp_rate(&past, -10.0), -10.0);
        let before = geom(-20.0, 1000.0, 300.0);
        assert_eq!(clamp_rate(&before, -5.0), 0.0);
        assert_eq!(clamp_rate(&before, 5.0), 5.0);
    }
}
