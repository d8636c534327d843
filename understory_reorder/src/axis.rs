// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis adapter: project the host's 2-D scroll state onto the scrolling axis.
//!
//! ## Overview
//!
//! Everything downstream of the host (trigger zones, scroll clamping, edge
//! tests) reasons about a single scalar axis. [`AxisGeometry`] is a snapshot
//! of the host's offset, insets, content size and viewport size, taken once
//! per event, and answers every question in scalar form.
//!
//! Swapping a vertical list for a horizontal one is a matter of changing the
//! [`Axis`] passed to [`AxisGeometry::new`]; no other module reads `x` or `y`
//! directly.

use kurbo::{Insets, Point, Rect, Size, Vec2};

use crate::host::ReorderHost;

/// Scrolling axis of the host surface.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Vertical scrolling; leading is the top edge.
    #[default]
    Primary,
    /// Horizontal scrolling; leading is the left edge.
    Cross,
}

impl Axis {
    /// Whether this axis scrolls vertically.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Primary)
    }

    /// Component of `v` along this axis.
    #[inline]
    pub fn along(self, v: Vec2) -> f64 {
        match self {
            Self::Primary => v.y,
            Self::Cross => v.x,
        }
    }

    /// Coordinate of `p` along this axis.
    #[inline]
    pub fn point_along(self, p: Point) -> f64 {
        self.along(p.to_vec2())
    }

    /// Extent of `s` along this axis.
    #[inline]
    pub fn size_along(self, s: Size) -> f64 {
        match self {
            Self::Primary => s.height,
            Self::Cross => s.width,
        }
    }

    /// A vector of length `scalar` pointing along this axis.
    #[inline]
    pub fn vector(self, scalar: f64) -> Vec2 {
        match self {
            Self::Primary => Vec2::new(0.0, scalar),
            Self::Cross => Vec2::new(scalar, 0.0),
        }
    }

    /// The leading (top or left) component of `insets`.
    #[inline]
    pub fn leading_of(self, insets: Insets) -> f64 {
        match self {
            Self::Primary => insets.y0,
            Self::Cross => insets.x0,
        }
    }

    /// The trailing (bottom or right) component of `insets`.
    #[inline]
    pub fn trailing_of(self, insets: Insets) -> f64 {
        match self {
            Self::Primary => insets.y1,
            Self::Cross => insets.x1,
        }
    }

    /// Leading edge of `rect` along this axis.
    #[inline]
    pub fn leading_edge(self, rect: Rect) -> f64 {
        match self {
            Self::Primary => rect.y0,
            Self::Cross => rect.x0,
        }
    }

    /// Trailing edge of `rect` along this axis.
    #[inline]
    pub fn trailing_edge(self, rect: Rect) -> f64 {
        match self {
            Self::Primary => rect.y1,
            Self::Cross => rect.x1,
        }
    }
}

/// Read-only projection of the host's scroll state onto one [`Axis`].
///
/// Offsets, sizes and rectangles are in the host's content coordinates: the
/// visible part of the content is [`visible_rect`](Self::visible_rect).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisGeometry {
    axis: Axis,
    offset: Vec2,
    insets: Insets,
    content: Size,
    viewport: Size,
}

impl AxisGeometry {
    /// Build a snapshot from raw 2-D values.
    pub fn new(axis: Axis, offset: Vec2, insets: Insets, content: Size, viewport: Size) -> Self {
        Self {
            axis,
            offset,
            insets,
            content,
            viewport,
        }
    }

    /// Snapshot the current state of `host`.
    pub fn from_host<H: ReorderHost + ?Sized>(axis: Axis, host: &H) -> Self {
        Self::new(
            axis,
            host.scroll_offset(),
            host.content_insets(),
            host.content_size(),
            host.viewport_size(),
        )
    }

    /// The axis this snapshot projects onto.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Scroll offset along the axis.
    pub fn offset(&self) -> f64 {
        self.axis.along(self.offset)
    }

    /// Content inset at the leading edge.
    pub fn inset_leading(&self) -> f64 {
        self.axis.leading_of(self.insets)
    }

    /// Content inset at the trailing edge.
    pub fn inset_trailing(&self) -> f64 {
        self.axis.trailing_of(self.insets)
    }

    /// Total content length, excluding insets.
    pub fn content_length(&self) -> f64 {
        self.axis.size_along(self.content)
    }

    /// Length of the visible viewport.
    pub fn viewport_length(&self) -> f64 {
        self.axis.size_along(self.viewport)
    }

    /// Leading edge of `rect`.
    pub fn leading_edge(&self, rect: Rect) -> f64 {
        self.axis.leading_edge(rect)
    }

    /// Trailing edge of `rect`.
    pub fn trailing_edge(&self, rect: Rect) -> f64 {
        self.axis.trailing_edge(rect)
    }

    /// Component of `v` along the axis.
    pub fn along(&self, v: Vec2) -> f64 {
        self.axis.along(v)
    }

    /// Lift a scalar back into a vector on the axis.
    pub fn vector(&self, scalar: f64) -> Vec2 {
        self.axis.vector(scalar)
    }

    /// Leading and trailing components of an arbitrary `insets` value.
    pub fn insets_along(&self, insets: Insets) -> (f64, f64) {
        (self.axis.leading_of(insets), self.axis.trailing_of(insets))
    }

    /// The container's visible bounds, in content coordinates.
    pub fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(self.offset.to_point(), self.viewport)
    }

    /// Smallest reachable scroll offset.
    pub fn min_offset(&self) -> f64 {
        -self.inset_leading()
    }

    /// Largest reachable scroll offset.
    pub fn max_offset(&self) -> f64 {
        self.content_length() + self.inset_trailing() - self.viewport_length()
    }

    /// Whether the content (with insets) is longer than the viewport.
    pub fn is_scrollable(&self) -> bool {
        self.content_length() + self.inset_leading() + self.inset_trailing()
            > self.viewport_length()
    }
}

/// Whether two rectangles share any interior area.
///
/// Rectangles that only touch along an edge do not overlap.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}
