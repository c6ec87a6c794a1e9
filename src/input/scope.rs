//! Listener scopes - where move/release listeners are registered.
//!
//! A scope is the host's notion of a document: the surface that delivers
//! move and release events while a drag is running. The controller acquires
//! listeners on every relevant scope at session start through a
//! [`ListenerSet`] and releases them when the session ends, or when the set
//! is dropped.

use crate::input::event::PointerEventKind;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

/// Global counter for unique scope ids
static SCOPE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Kinds a drag session listens for on each scope
pub const SESSION_EVENTS: [PointerEventKind; 2] = [PointerEventKind::Move, PointerEventKind::Up];

/// Identity of a listener scope, used for deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u64);

impl ScopeId {
    /// Allocate a fresh process-unique id
    pub fn next() -> Self {
        Self(SCOPE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// A surface on which pointer listeners can be registered.
///
/// Both operations must be idempotent: attaching an attached kind or
/// detaching a detached one is a no-op.
pub trait ListenerScope: Send + Sync {
    fn id(&self) -> ScopeId;
    fn attach(&self, kind: PointerEventKind);
    fn detach(&self, kind: PointerEventKind);
}

/// Shared handle to a scope
pub type SharedScope = Arc<dyn ListenerScope>;

/// A basic document scope that records which event kinds are wanted.
///
/// Hosts route an incoming event to the controller only while
/// [`Document::is_listening`] reports true for its kind.
pub struct Document {
    id: ScopeId,
    listening: Mutex<HashSet<PointerEventKind>>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            id: ScopeId::next(),
            listening: Mutex::new(HashSet::new()),
        }
    }

    /// Create a shared handle
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn is_listening(&self, kind: PointerEventKind) -> bool {
        self.listening.lock().contains(&kind)
    }

    /// True when no kind is attached
    pub fn is_idle(&self) -> bool {
        self.listening.lock().is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl ListenerScope for Document {
    fn id(&self) -> ScopeId {
        self.id
    }

    fn attach(&self, kind: PointerEventKind) {
        self.listening.lock().insert(kind);
    }

    fn detach(&self, kind: PointerEventKind) {
        self.listening.lock().remove(&kind);
    }
}

/// Listeners held for one drag session.
///
/// Scopes are deduplicated by id and attached exactly once. Listeners are
/// detached by [`ListenerSet::release`] or on drop, whichever comes first.
#[derive(Default)]
pub struct ListenerSet {
    attached: Vec<SharedScope>,
}

impl ListenerSet {
    /// An empty set holding no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach session listeners on every distinct scope.
    pub fn acquire<I>(scopes: I) -> Self
    where
        I: IntoIterator<Item = SharedScope>,
    {
        let mut seen = HashSet::new();
        let mut attached = Vec::new();

        for scope in scopes {
            if !seen.insert(scope.id()) {
                continue;
            }
            for kind in SESSION_EVENTS {
                scope.attach(kind);
            }
            trace!(scope = ?scope.id(), "Attached drag listeners");
            attached.push(scope);
        }

        Self { attached }
    }

    /// Detach everything acquired. Safe to call repeatedly.
    pub fn release(&mut self) {
        for scope in self.attached.drain(..) {
            for kind in SESSION_EVENTS {
                scope.detach(kind);
            }
            trace!(scope = ?scope.id(), "Detached drag listeners");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    /// Ids of the scopes currently attached, in acquisition order
    pub fn scope_ids(&self) -> Vec<ScopeId> {
        self.attached.iter().map(|scope| scope.id()).collect()
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.release();
    }
}
