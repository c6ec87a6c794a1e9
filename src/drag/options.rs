//! Drag configuration: host callbacks, suppliers and tunables.
//!
//! Every slot is optional. Absent hooks are skipped, absent suppliers
//! yield no guides, and absent tunables fall back to the crate defaults.
//! [`DragOptions::merge`] overlays a patch the same way, slot by slot.

use std::fmt;

use crate::constants::{DEFAULT_MOVE_BUDGET_MS, DEFAULT_SCALE, SNAP_THRESHOLD};
use crate::drag::DragView;
use crate::geometry::{Point, Position};
use crate::guides::Guide;
use crate::input::{Modifier, PointerEvent, PointerReader, SharedScope, SharedTarget};
use crate::settings::DragSettings;

/// Lifecycle hook: the triggering event plus read access to the controller
pub type DragHook = Box<dyn FnMut(&PointerEvent, &DragView<'_>)>;

/// Host sink receiving every position write
pub type PositionSink = Box<dyn FnMut(Position)>;

/// Host source for the baseline position
pub type PositionSource = Box<dyn FnMut() -> Point>;

/// Host supplier of guide descriptors, invoked once per session
pub type GuideSupplier = Box<dyn FnMut() -> Vec<Guide>>;

/// Multiplier applied to the delta as the last transform.
pub enum Scale {
    Fixed(f32),
    /// Re-evaluated on every move
    Dynamic(Box<dyn Fn() -> f32>),
}

impl Scale {
    pub fn value(&self) -> f32 {
        match self {
            Scale::Fixed(value) => *value,
            Scale::Dynamic(provider) => provider(),
        }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale::Fixed(DEFAULT_SCALE)
    }
}

impl From<f32> for Scale {
    fn from(value: f32) -> Self {
        Scale::Fixed(value)
    }
}

impl fmt::Debug for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scale::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Scale::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Options for a [`Dragger`](crate::drag::Dragger).
#[derive(Default)]
pub struct DragOptions {
    pub on_start: Option<DragHook>,
    pub on_drag: Option<DragHook>,
    pub on_end: Option<DragHook>,
    pub set_position: Option<PositionSink>,
    pub get_position: Option<PositionSource>,
    pub get_pointer_position: Option<PointerReader>,
    pub get_guides_static: Option<GuideSupplier>,
    pub get_guides_target: Option<GuideSupplier>,
    pub scale: Option<Scale>,
    /// Extra document to listen on besides the controller's own
    pub listener_scope: Option<SharedScope>,
    /// Element whose style mirrors every position write
    pub target: Option<SharedTarget>,
    pub snap_threshold: Option<f32>,
    pub axis_lock_modifier: Option<Modifier>,
    pub move_budget_ms: Option<f64>,
}

/// Replace each slot of `$dst` that is set in `$src`
macro_rules! merge_slots {
    ($dst:ident, $src:ident; $($field:ident),+ $(,)?) => {
        $(
            if $src.$field.is_some() {
                $dst.$field = $src.$field;
            }
        )+
    };
}

impl DragOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed tunables from persisted settings
    pub fn from_settings(settings: &DragSettings) -> Self {
        Self {
            scale: Some(Scale::Fixed(settings.scale)),
            snap_threshold: Some(settings.snap_threshold),
            axis_lock_modifier: Some(settings.axis_lock_modifier),
            move_budget_ms: Some(settings.move_budget_ms),
            ..Self::default()
        }
    }

    /// Overlay `patch`: set slots replace, unset slots keep the current value.
    pub fn merge(&mut self, patch: DragOptions) {
        let this = self;
        merge_slots!(this, patch;
            on_start,
            on_drag,
            on_end,
            set_position,
            get_position,
            get_pointer_position,
            get_guides_static,
            get_guides_target,
            scale,
            listener_scope,
            target,
            snap_threshold,
            axis_lock_modifier,
            move_budget_ms,
        );
    }

    pub fn on_start<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&PointerEvent, &DragView<'_>) + 'static,
    {
        self.on_start = Some(Box::new(hook));
        self
    }

    pub fn on_drag<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&PointerEvent, &DragView<'_>) + 'static,
    {
        self.on_drag = Some(Box::new(hook));
        self
    }

    pub fn on_end<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&PointerEvent, &DragView<'_>) + 'static,
    {
        self.on_end = Some(Box::new(hook));
        self
    }

    pub fn with_position_sink(mut self, sink: impl FnMut(Position) + 'static) -> Self {
        self.set_position = Some(Box::new(sink));
        self
    }

    pub fn with_position_source(mut self, source: impl FnMut() -> Point + 'static) -> Self {
        self.get_position = Some(Box::new(source));
        self
    }

    pub fn with_pointer_reader(mut self, reader: impl Fn(&PointerEvent) -> Point + 'static) -> Self {
        self.get_pointer_position = Some(Box::new(reader));
        self
    }

    pub fn with_static_guides(mut self, supplier: impl FnMut() -> Vec<Guide> + 'static) -> Self {
        self.get_guides_static = Some(Box::new(supplier));
        self
    }

    pub fn with_target_guides(mut self, supplier: impl FnMut() -> Vec<Guide> + 'static) -> Self {
        self.get_guides_target = Some(Box::new(supplier));
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Some(Scale::Fixed(scale));
        self
    }

    pub fn with_dynamic_scale(mut self, provider: impl Fn() -> f32 + 'static) -> Self {
        self.scale = Some(Scale::Dynamic(Box::new(provider)));
        self
    }

    pub fn with_listener_scope(mut self, scope: SharedScope) -> Self {
        self.listener_scope = Some(scope);
        self
    }

    pub fn with_target(mut self, target: SharedTarget) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_snap_threshold(mut self, threshold: f32) -> Self {
        self.snap_threshold = Some(threshold);
        self
    }

    pub fn with_axis_lock_modifier(mut self, modifier: Modifier) -> Self {
        self.axis_lock_modifier = Some(modifier);
        self
    }

    pub fn with_move_budget_ms(mut self, budget_ms: f64) -> Self {
        self.move_budget_ms = Some(budget_ms);
        self
    }

    /// Current scale, evaluating a dynamic provider
    pub fn scale_value(&self) -> f32 {
        self.scale.as_ref().map_or(DEFAULT_SCALE, Scale::value)
    }

    pub fn snap_threshold_value(&self) -> f32 {
        self.snap_threshold.unwrap_or(SNAP_THRESHOLD)
    }

    pub fn axis_lock_modifier_value(&self) -> Modifier {
        self.axis_lock_modifier.unwrap_or_default()
    }

    pub fn move_budget_ms_value(&self) -> f64 {
        self.move_budget_ms.unwrap_or(DEFAULT_MOVE_BUDGET_MS)
    }
}

impl fmt::Debug for DragOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragOptions")
            .field("on_start", &self.on_start.is_some())
            .field("on_drag", &self.on_drag.is_some())
            .field("on_end", &self.on_end.is_some())
            .field("set_position", &self.set_position.is_some())
            .field("get_position", &self.get_position.is_some())
            .field("get_pointer_position", &self.get_pointer_position.is_some())
            .field("get_guides_static", &self.get_guides_static.is_some())
            .field("get_guides_target", &self.get_guides_target.is_some())
            .field("scale", &self.scale)
            .field("listener_scope", &self.listener_scope.as_ref().map(|s| s.id()))
            .field("target", &self.target.is_some())
            .field("snap_threshold", &self.snap_threshold)
            .field("axis_lock_modifier", &self.axis_lock_modifier)
            .field("move_budget_ms", &self.move_budget_ms)
            .finish()
    }
}
