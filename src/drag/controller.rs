//! The drag session controller.
//!
//! ## Performance Notes
//!
//! `drag` is called for every pointer move while a session runs. Key points:
//! - Early exit when idle
//! - Guide sets are validated once at start, never per move
//! - Each move is timed against the configured budget
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::drag::session::{DragView, Session};
use crate::drag::options::DragOptions;
use crate::geometry::{Axis, Delta, Point, Position};
use crate::guides::{GuideId, GuideLock, GuideRole, GuideSet};
use crate::input::{
    DragState, ListenerSet, PointerEvent, PointerEventKind, SharedScope, read_pointer,
};
use crate::perf::MoveStats;
use crate::profile_scope;

/// Tracks a pointer from press to release and turns its movement into
/// position writes, with optional axis locking and guide snapping.
///
/// The host feeds events in: [`start`](Self::start) on press,
/// [`drag`](Self::drag) on move, [`stop`](Self::stop) on release. All three
/// are synchronous; hooks run inline.
pub struct Dragger {
    options: DragOptions,
    /// Patches received mid-session, applied once the session ends
    pending: Option<DragOptions>,
    /// The controller's own document
    document: Option<SharedScope>,
    session: Session,
    listeners: ListenerSet,
    stats: MoveStats,
}

impl Dragger {
    pub fn new(options: DragOptions) -> Self {
        let stats = MoveStats::new(options.move_budget_ms_value());
        Self {
            options,
            pending: None,
            document: None,
            session: Session::default(),
            listeners: ListenerSet::new(),
            stats,
        }
    }

    /// Set the document listeners are attached to by default
    pub fn with_document(mut self, document: SharedScope) -> Self {
        self.document = Some(document);
        self
    }

    /// Overlay option slots set in `patch`.
    ///
    /// Options are frozen for a running session: a patch received while
    /// dragging is held back (merged with any later ones) and takes effect
    /// when the session stops.
    pub fn set_options(&mut self, patch: DragOptions) {
        if self.session.state.is_dragging() {
            debug!("Options patched mid-session, deferring until stop");
            self.pending.get_or_insert_with(DragOptions::new).merge(patch);
            return;
        }
        self.apply_options(patch);
    }

    /// Whether a patch is waiting for the running session to end
    pub fn has_pending_options(&self) -> bool {
        self.pending.is_some()
    }

    pub fn options(&self) -> &DragOptions {
        &self.options
    }

    /// Begin a session from a press event.
    ///
    /// Starting while a session is active stops that session first.
    pub fn start(&mut self, event: &PointerEvent) {
        profile_scope!("drag_start");

        if self.session.state.is_dragging() {
            warn!("Drag started while a session was active, stopping it first");
            self.stop(event);
        }

        self.listeners = ListenerSet::acquire(self.listener_scopes());

        let start_pointer = read_pointer(event, self.options.get_pointer_position.as_ref());
        self.session.begin(
            start_pointer,
            self.options.snap_threshold_value(),
            self.options.axis_lock_modifier_value(),
        );

        if let Some(on_start) = self.options.on_start.as_mut() {
            on_start(event, &DragView::new(&self.session));
        }

        let start_position = self.resolve_start_position();
        self.session.state.set_start_position(start_position);

        self.session.guides_static = self
            .options
            .get_guides_static
            .as_mut()
            .map(|supplier| GuideSet::from_guides(GuideRole::Static, supplier()))
            .unwrap_or_else(|| GuideSet::new(GuideRole::Static));
        self.session.guides_target = self
            .options
            .get_guides_target
            .as_mut()
            .map(|supplier| GuideSet::from_guides(GuideRole::Target, supplier()))
            .unwrap_or_else(|| GuideSet::new(GuideRole::Target));

        debug!(
            pointer = ?start_pointer,
            position = ?start_position,
            static_guides = self.session.guides_static.len(),
            target_guides = self.session.guides_target.len(),
            scopes = self.listeners.len(),
            "Drag started"
        );

        self.drag(event);
    }

    /// Process a move event. Returns false (and does nothing) when idle.
    ///
    /// A move reporting no pressed buttons ends the session: the release
    /// happened somewhere no up event reached us.
    pub fn drag(&mut self, event: &PointerEvent) -> bool {
        if !self.session.state.is_dragging() {
            trace!("Ignoring move outside a drag session");
            return false;
        }
        profile_scope!("drag_move");
        let started = Instant::now();

        let current = read_pointer(event, self.options.get_pointer_position.as_ref());
        let held = event.modifiers.is_held(self.session.axis_lock_modifier);
        let scale = self.options.scale_value();

        self.session.delta = self.session.resolve_delta(current, held, scale);
        self.write_position(false);
        self.session.current_pointer = Some(current);
        trace!(pointer = ?current, delta = ?self.session.delta, "Drag move");

        if let Some(on_drag) = self.options.on_drag.as_mut() {
            on_drag(event, &DragView::new(&self.session));
        }

        self.stats.record(started.elapsed());

        if event.no_buttons_pressed() {
            debug!("Move without pressed buttons, ending drag");
            self.stop(event);
        }
        true
    }

    /// End the session. Returns false (and does nothing) when idle, so the
    /// end hook fires at most once per start.
    pub fn stop(&mut self, event: &PointerEvent) -> bool {
        if !self.session.state.is_dragging() {
            trace!("Ignoring stop outside a drag session");
            return false;
        }

        self.listeners.release();
        self.session.state.set_locked_axis(None);
        self.write_position(true);

        debug!(
            delta = ?self.session.delta,
            position = ?self.session.position,
            "Drag stopped"
        );

        if let Some(on_end) = self.options.on_end.as_mut() {
            on_end(event, &DragView::new(&self.session));
        }

        self.session.finish();
        if let Some(patch) = self.pending.take() {
            self.apply_options(patch);
        }
        true
    }

    /// Route an event by kind: press starts, move drags, release stops.
    pub fn handle_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => {
                self.start(event);
                true
            }
            PointerEventKind::Move => self.drag(event),
            PointerEventKind::Up => self.stop(event),
        }
    }

    /// Read access to controller state
    pub fn view(&self) -> DragView<'_> {
        DragView::new(&self.session)
    }

    pub fn state(&self) -> DragState {
        self.session.state
    }

    pub fn is_dragging(&self) -> bool {
        self.session.state.is_dragging()
    }

    pub fn delta(&self) -> Delta {
        self.session.delta
    }

    pub fn position(&self) -> Option<Position> {
        self.session.position
    }

    pub fn locked_axis(&self) -> Option<Axis> {
        self.session.state.locked_axis()
    }

    pub fn start_pointer(&self) -> Option<Point> {
        self.session.state.start_pointer()
    }

    pub fn start_position(&self) -> Option<Point> {
        self.session.state.start_position()
    }

    pub fn current_pointer(&self) -> Option<Point> {
        self.session.current_pointer
    }

    pub fn guide_lock(&self, axis: Axis) -> Option<GuideLock> {
        self.session.locks.get(axis)
    }

    pub fn is_guide_active(&self, guide: GuideId) -> bool {
        self.session.locks.is_active(guide)
    }

    pub fn static_guides(&self) -> &GuideSet {
        &self.session.guides_static
    }

    pub fn target_guides(&self) -> &GuideSet {
        &self.session.guides_target
    }

    /// Listeners held by the running session
    pub fn listeners(&self) -> &ListenerSet {
        &self.listeners
    }

    pub fn move_stats(&self) -> &MoveStats {
        &self.stats
    }

    fn apply_options(&mut self, patch: DragOptions) {
        self.options.merge(patch);
        self.stats.set_budget(self.options.move_budget_ms_value());
    }

    /// Own document, the target's owning document, then the extra scope.
    /// Duplicates are dropped when the listeners are acquired.
    fn listener_scopes(&self) -> Vec<SharedScope> {
        let owner = self.options.target.as_ref().and_then(|t| t.owner_scope());
        self.document
            .iter()
            .cloned()
            .chain(owner)
            .chain(self.options.listener_scope.iter().cloned())
            .collect()
    }

    /// Host getter first, then the target's style, else the origin.
    fn resolve_start_position(&mut self) -> Point {
        if let Some(get_position) = self.options.get_position.as_mut() {
            return get_position();
        }
        if let Some(target) = &self.options.target {
            let (x, y) = target.style_offset();
            if x.is_none() || y.is_none() {
                debug!(?x, ?y, "Target style not fully positioned, using 0 for missing axes");
            }
            return Point::new(x.unwrap_or(0.0), y.unwrap_or(0.0));
        }
        Point::default()
    }

    /// Write start position + delta to the sink and to the target's style.
    fn write_position(&mut self, end: bool) {
        let Some(base) = self.session.state.start_position() else {
            return;
        };
        let position = Position::offset(base, self.session.delta, end);
        self.session.position = Some(position);

        if let Some(set_position) = self.options.set_position.as_mut() {
            set_position(position);
        }
        if let Some(target) = &self.options.target {
            target.write_style_offset(position.point());
        }
    }
}

impl std::fmt::Debug for Dragger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dragger")
            .field("state", &self.session.state)
            .field("delta", &self.session.delta)
            .field("position", &self.session.position)
            .field("options", &self.options)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}
