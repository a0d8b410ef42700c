// ABOUTME: Render-pass orchestration for adjustable columns.
// ABOUTME: Validates the spec, consults the front-end, merges state and sizes the containers.

use colsplit_core::{ColumnsConfig, DisplayOptions, Gap, VerticalAlignment, WidthStore};

use crate::widths::{
    apply_minimum_widths, load_or_seed, merge_resize, primitive_sizes, validate_report,
};
use crate::{
    normalize, resolve_labels, resolve_min_widths, ColumnLayout, LayoutError, LayoutSpec,
    LegacySpec, ResizeRequest, ResizeSource,
};

/// Per-call options; unset display hints fall back to the configured defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnOptions {
    pub gap: Option<Gap>,
    pub vertical_alignment: Option<VerticalAlignment>,
    pub border: Option<bool>,
    pub labels: Option<Vec<String>>,
    pub min_widths: Option<Vec<f64>>,
    pub return_widths: bool,
    pub instance_key: Option<String>,
}

impl ColumnOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gap(mut self, gap: Gap) -> Self {
        self.gap = Some(gap);
        self
    }

    pub fn vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = Some(alignment);
        self
    }

    pub fn border(mut self, border: bool) -> Self {
        self.border = Some(border);
        self
    }

    pub fn labels<I, T>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn min_widths(mut self, fractions: Vec<f64>) -> Self {
        self.min_widths = Some(fractions);
        self
    }

    pub fn return_widths(mut self, return_widths: bool) -> Self {
        self.return_widths = return_widths;
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.instance_key = Some(key.into());
        self
    }

    fn display(&self, defaults: &DisplayOptions) -> DisplayOptions {
        DisplayOptions {
            gap: self.gap.unwrap_or(defaults.gap),
            vertical_alignment: self.vertical_alignment.unwrap_or(defaults.vertical_alignment),
            border: self.border.unwrap_or(defaults.border),
        }
    }
}

/// Output of one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct RenderResult<C> {
    pub containers: Vec<C>,
    /// Live ratio vector, present when `return_widths` was set
    pub widths: Option<Vec<f64>>,
    /// Instance key the state was read from and written to
    pub key: String,
    /// A resize was merged this pass; render again to show settled content
    pub needs_rerender: bool,
}

/// Output of the legacy entry point
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyResult<C> {
    pub widths: Vec<f64>,
    pub columns: Vec<C>,
    /// Raw report from the front-end this pass, if any
    pub component_value: Option<Vec<f64>>,
}

/// Width reconciler bound to one session's store, front-end and layout primitive
pub struct Reconciler<S, R, L> {
    store: S,
    source: R,
    layout: L,
    config: ColumnsConfig,
    position: usize,
}

impl<S, R, L> Reconciler<S, R, L>
where
    S: WidthStore,
    R: ResizeSource,
    L: ColumnLayout,
{
    pub fn new(store: S, source: R, layout: L) -> Self {
        Self::with_config(store, source, layout, ColumnsConfig::default())
    }

    pub fn with_config(store: S, source: R, layout: L, config: ColumnsConfig) -> Self {
        Self {
            store,
            source,
            layout,
            config,
            position: 0,
        }
    }

    pub fn config(&self) -> &ColumnsConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }

    /// Start a new render pass; generated instance keys restart from zero
    pub fn begin_pass(&mut self) {
        self.position = 0;
    }

    fn instance_key(&mut self, explicit: Option<&str>) -> String {
        let position = self.position;
        self.position += 1;
        match explicit {
            Some(key) => key.to_string(),
            None => format!("{}-{}", self.config.auto_key_prefix, position),
        }
    }

    /// Render a row of adjustable columns.
    ///
    /// All validation happens before the store or the front-end is touched.
    pub fn render(
        &mut self,
        spec: impl Into<LayoutSpec>,
        options: &ColumnOptions,
    ) -> Result<RenderResult<L::Container>, LayoutError> {
        let initial = normalize(&spec.into())?;
        let count = initial.len();
        let labels = resolve_labels(options.labels.as_deref(), count)?;
        let min_widths =
            resolve_min_widths(options.min_widths.as_deref(), count, self.config.min_width)?;
        let display = options.display(&self.config.display);
        let key = self.instance_key(options.instance_key.as_deref());

        let current = load_or_seed(&mut self.store, &key, &initial);
        let request = ResizeRequest {
            ratios: current.clone(),
            labels,
            gap: display.gap,
            border: display.border,
            min_widths: None,
        };
        let reported = validate_report(
            self.source.request_resize(&key, &request, &current),
            count,
        );
        let merge = merge_resize(&mut self.store, &key, &current, reported.as_deref());
        let needs_rerender = merge.needs_rerender();
        let ratios = merge.into_ratios();

        let sizes = primitive_sizes(
            &apply_minimum_widths(&ratios, &min_widths),
            self.config.collapse_epsilon,
        );
        let containers = self.layout.columns(&sizes, &display);

        Ok(RenderResult {
            containers,
            widths: options.return_widths.then_some(ratios),
            key,
            needs_rerender,
        })
    }

    /// Legacy entry point: floors are forwarded to the front-end and sizes
    /// only get the collapse epsilon.
    pub fn render_legacy(
        &mut self,
        spec: impl Into<LegacySpec>,
        key: Option<&str>,
    ) -> Result<LegacyResult<L::Container>, LayoutError> {
        let (widths, min_widths) = spec.into().into_parts();
        let initial = normalize(&LayoutSpec::Weights(widths))?;
        let count = initial.len();
        let min_widths = resolve_min_widths(
            min_widths.as_deref(),
            count,
            self.config.legacy_min_width,
        )?;
        let labels = resolve_labels(None, count)?;
        let display = self.config.display;
        let key = self.instance_key(key);

        let current = load_or_seed(&mut self.store, &key, &initial);
        let request = ResizeRequest {
            ratios: current.clone(),
            labels,
            gap: display.gap,
            border: display.border,
            min_widths: Some(min_widths),
        };
        let component_value = self.source.request_resize(&key, &request, &current);
        let reported = validate_report(component_value.clone(), count);
        let widths = merge_resize(&mut self.store, &key, &current, reported.as_deref())
            .into_ratios();

        let sizes = primitive_sizes(&widths, self.config.collapse_epsilon);
        let columns = self.layout.columns(&sizes, &display);

        Ok(LegacyResult {
            widths,
            columns,
            component_value,
        })
    }
}
