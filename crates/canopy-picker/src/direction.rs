//! Dropdown placement resolution.
//!
//! Fixed placement modes resolve immediately. Auto mode needs on-screen
//! geometry, which only the presentation layer can supply, so each open
//! issues a [`MeasureRequest`] tagged with the open cycle; the answer is
//! applied only if the picker has not been reopened in the meantime. This is
//! the one asynchronous edge of the engine.

use std::future::Future;

use tracing::{debug, trace};

/// The configured placement mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownDirection {
    /// Platform default placement, below the trigger.
    #[default]
    Default,
    /// Always above the trigger.
    Top,
    /// Always below the trigger.
    Bottom,
    /// Measure the viewport on open and pick whichever side fits.
    Auto,
}

/// The placement actually used for the current open cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedDirection {
    /// List rendered above the trigger.
    Top,
    /// List rendered below the trigger.
    Bottom,
}

/// On-screen geometry of the trigger, in the viewport's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMeasurement {
    /// Vertical position of the trigger's top edge.
    pub anchor_y: f32,
    /// Height of the trigger.
    pub anchor_height: f32,
    /// Total visible viewport height.
    pub viewport_height: f32,
}

/// A pending measurement, valid for one open cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureRequest {
    cycle: u64,
}

/// Resolves the live placement for one picker instance.
#[derive(Debug)]
pub struct DirectionResolver {
    configured: DropdownDirection,
    max_height: f32,
    bottom_offset: f32,
    /// Last auto-mode resolution; placements default downward.
    resolved: ResolvedDirection,
    open_cycle: u64,
}

impl DirectionResolver {
    /// Create a resolver for the given mode and list geometry.
    pub fn new(configured: DropdownDirection, max_height: f32, bottom_offset: f32) -> Self {
        Self {
            configured,
            max_height,
            bottom_offset,
            resolved: ResolvedDirection::Bottom,
            open_cycle: 0,
        }
    }

    /// The configured placement mode.
    pub fn configured(&self) -> DropdownDirection {
        self.configured
    }

    /// Start a new open cycle.
    ///
    /// Invalidates any measurement still in flight from a previous cycle.
    /// Returns a request only in auto mode; fixed modes need no measurement.
    pub fn begin_open(&mut self) -> Option<MeasureRequest> {
        self.open_cycle += 1;
        match self.configured {
            DropdownDirection::Auto => Some(MeasureRequest {
                cycle: self.open_cycle,
            }),
            _ => None,
        }
    }

    /// Apply a finished measurement.
    ///
    /// A request from a superseded open cycle is discarded without touching
    /// the resolved placement.
    pub fn complete(&mut self, request: MeasureRequest, measurement: ViewportMeasurement) {
        if request.cycle != self.open_cycle {
            trace!(
                target: "canopy_picker::direction",
                stale = request.cycle,
                current = self.open_cycle,
                "discarding measurement from superseded open cycle"
            );
            return;
        }
        let bottom_edge = measurement.anchor_y
            + measurement.anchor_height
            + self.max_height
            + self.bottom_offset;
        self.resolved = if bottom_edge <= measurement.viewport_height {
            ResolvedDirection::Bottom
        } else {
            ResolvedDirection::Top
        };
        trace!(
            target: "canopy_picker::direction",
            resolved = ?self.resolved,
            "applied viewport measurement"
        );
    }

    /// Record a failed measurement, degrading to downward placement.
    ///
    /// Stale requests are discarded as in [`complete`](Self::complete).
    pub fn fail(&mut self, request: MeasureRequest) {
        if request.cycle != self.open_cycle {
            return;
        }
        debug!(
            target: "canopy_picker::direction",
            "viewport measurement failed, falling back to downward placement"
        );
        self.resolved = ResolvedDirection::Bottom;
    }

    /// The placement for the current open cycle.
    pub fn direction(&self) -> ResolvedDirection {
        match self.configured {
            DropdownDirection::Top => ResolvedDirection::Top,
            DropdownDirection::Bottom | DropdownDirection::Default => ResolvedDirection::Bottom,
            DropdownDirection::Auto => self.resolved,
        }
    }

    /// Open, await the caller's measurement, and resolve in one step.
    ///
    /// Fixed modes return without polling `measure`. In auto mode the future
    /// supplies the trigger geometry; an error degrades to downward
    /// placement. The cycle guard still applies if the resolver is reopened
    /// while the future is pending elsewhere.
    pub async fn resolve_with<Fut, E>(&mut self, measure: Fut) -> ResolvedDirection
    where
        Fut: Future<Output = Result<ViewportMeasurement, E>>,
    {
        if let Some(request) = self.begin_open() {
            match measure.await {
                Ok(measurement) => self.complete(request, measurement),
                Err(_) => self.fail(request),
            }
        }
        self.direction()
    }
}
