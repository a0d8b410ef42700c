// ABOUTME: Boundary to the front-end that owns drag interaction.
// ABOUTME: One synchronous request per render pass, answered with updated ratios or nothing.

#[cfg(any(test, feature = "testing"))]
use std::collections::VecDeque;

use colsplit_core::Gap;
use serde::Serialize;

/// What the front-end needs to draw resize handles over a row of columns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResizeRequest {
    pub ratios: Vec<f64>,
    pub labels: Vec<String>,
    pub gap: Gap,
    pub border: bool,
    /// Only sent by the legacy entry point, which leaves floors to the front-end
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_widths: Option<Vec<f64>>,
}

/// Source of drag results for a widget instance.
///
/// `default` is the currently persisted vector; implementations that have
/// nothing new to report return `None`.
pub trait ResizeSource {
    fn request_resize(
        &mut self,
        key: &str,
        request: &ResizeRequest,
        default: &[f64],
    ) -> Option<Vec<f64>>;
}

impl<R: ResizeSource + ?Sized> ResizeSource for &mut R {
    fn request_resize(
        &mut self,
        key: &str,
        request: &ResizeRequest,
        default: &[f64],
    ) -> Option<Vec<f64>> {
        (**self).request_resize(key, request, default)
    }
}

/// Front-end that never reports a drag
#[derive(Debug, Default, Clone, Copy)]
pub struct NoResize;

impl ResizeSource for NoResize {
    fn request_resize(&mut self, _: &str, _: &ResizeRequest, _: &[f64]) -> Option<Vec<f64>> {
        None
    }
}

/// Replays queued drag results, one per request, and records what it was asked.
/// Test helper, enabled by the `testing` feature.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Default, Clone)]
pub struct ScriptedResize {
    reports: VecDeque<Option<Vec<f64>>>,
    requests: Vec<(String, ResizeRequest)>,
}

#[cfg(any(test, feature = "testing"))]
impl ScriptedResize {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a completed drag
    pub fn push(&mut self, ratios: Vec<f64>) -> &mut Self {
        self.reports.push_back(Some(ratios));
        self
    }

    /// Queue a pass with nothing to report
    pub fn push_idle(&mut self) -> &mut Self {
        self.reports.push_back(None);
        self
    }

    pub fn requests(&self) -> &[(String, ResizeRequest)] {
        &self.requests
    }
}

#[cfg(any(test, feature = "testing"))]
impl ResizeSource for ScriptedResize {
    fn request_resize(
        &mut self,
        key: &str,
        request: &ResizeRequest,
        _default: &[f64],
    ) -> Option<Vec<f64>> {
        self.requests.push((key.to_string(), request.clone()));
        self.reports.pop_front().flatten()
    }
}
