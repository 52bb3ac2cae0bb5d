//! Auto-cycle driver
//!
//! The driver never selects tabs directly: each tick clicks the next
//! header, so timer and user share the controller's click path.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::time::Instant;
use uuid::Uuid;

use vtabs_dom::{Document, EventKind, NodeId, SharedDocument};
use vtabs_widget::hooks;

use crate::error::CycleError;
use crate::timer::RepeatingTask;
use crate::Result;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

/// Click the header after the active one and return its index.
///
/// With no active header the scan yields -1, so the rotation restarts at 0.
pub fn advance(document: &mut Document, headers: &[NodeId]) -> Option<usize> {
    if headers.is_empty() {
        return None;
    }

    let active = headers
        .iter()
        .position(|&h| document.has_class(h, hooks::ACTIVE))
        .map_or(-1, |i| i as isize);
    let next = (active + 1).rem_euclid(headers.len() as isize) as usize;

    document.click(headers[next]);
    Some(next)
}

struct Driver {
    id: String,
    locator: String,
    container: NodeId,
    headers: Arc<[NodeId]>,
    interval: Duration,
    document: Weak<Mutex<Document>>,
    runtime: Handle,
    timer: RepeatingTask,
    cancelled: AtomicBool,
    started_at: Instant,
}

impl Driver {
    fn start(&self) -> bool {
        let document = Weak::clone(&self.document);
        let headers = Arc::clone(&self.headers);
        let id = self.id.clone();

        self.timer.start(&self.runtime, self.interval, move |ticket| {
            let Some(document) = document.upgrade() else {
                tracing::debug!(cycle_id = %id, "Document dropped, stopping auto-cycle");
                return ControlFlow::Break(());
            };
            let mut doc = document.lock();
            // A hover or cancel may have landed while this tick waited for the lock
            if !ticket.is_live() {
                tracing::trace!(cycle_id = %id, "Stale auto-cycle tick dropped");
                return ControlFlow::Break(());
            }
            let next = advance(&mut doc, &headers);
            tracing::trace!(cycle_id = %id, next = ?next, "Auto-cycle tick");
            ControlFlow::Continue(())
        })
    }

    fn pause(&self) {
        if self.cancelled.load(Ordering::SeqCst) {
            return;
        }
        if self.timer.stop() {
            tracing::debug!(cycle_id = %self.id, "Auto-cycle paused");
        }
    }

    fn resume(&self) {
        if self.cancelled.load(Ordering::SeqCst) {
            return;
        }
        if self.start() {
            tracing::debug!(cycle_id = %self.id, "Auto-cycle resumed");
        }
    }
}

/// Handle to a running auto-cycle.
///
/// Dropping the handle leaves the rotation running; call
/// [`CycleHandle::cancel`] to stop it.
#[derive(Clone)]
pub struct CycleHandle {
    driver: Arc<Driver>,
}

impl CycleHandle {
    /// Stop the rotation. Hover no longer restarts it. Safe to call repeatedly.
    pub fn cancel(&self) {
        if self.driver.cancelled.swap(true, Ordering::SeqCst) {
            return;
        }
        self.driver.timer.stop();
        tracing::info!(
            cycle_id = %self.driver.id,
            container = %self.driver.locator,
            ran_for_ms = self.driver.started_at.elapsed().as_millis() as u64,
            "Auto-cycle cancelled"
        );
    }

    pub fn is_running(&self) -> bool {
        self.driver.timer.is_running()
    }

    pub fn is_cancelled(&self) -> bool {
        self.driver.cancelled.load(Ordering::SeqCst)
    }

    pub fn id(&self) -> &str {
        &self.driver.id
    }

    pub fn interval(&self) -> Duration {
        self.driver.interval
    }

    pub fn container(&self) -> NodeId {
        self.driver.container
    }

    /// Headers collected when the cycle was set up
    pub fn headers(&self) -> &[NodeId] {
        &self.driver.headers
    }
}

impl std::fmt::Debug for CycleHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CycleHandle")
            .field("id", &self.driver.id)
            .field("locator", &self.driver.locator)
            .field("interval", &self.driver.interval)
            .field("running", &self.is_running())
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

/// Rotate the tabs under `locator` every `interval`.
///
/// Headers are collected once, now. Hovering the container pauses the
/// rotation and leaving it starts a fresh timer unless one is running.
/// Must be called from within a Tokio runtime; timers run on that runtime.
pub fn auto_cycle(document: &SharedDocument, locator: &str, interval: Duration) -> Result<CycleHandle> {
    let mut doc = document.lock();

    let container = doc
        .find(locator)?
        .ok_or_else(|| CycleError::ContainerNotFound(locator.to_string()))?;
    let headers = doc.query_selector_all(container, hooks::ITEM_SELECTOR)?;
    if headers.is_empty() {
        return Err(CycleError::NoTabs(locator.to_string()));
    }
    if interval.is_zero() {
        return Err(CycleError::InvalidInterval);
    }
    let runtime = Handle::try_current().map_err(|_| CycleError::NoRuntime)?;

    let driver = Arc::new(Driver {
        id: Uuid::new_v4().to_string(),
        locator: locator.to_string(),
        container,
        headers: headers.into(),
        interval,
        document: Arc::downgrade(document),
        runtime,
        timer: RepeatingTask::new(),
        cancelled: AtomicBool::new(false),
        started_at: Instant::now(),
    });

    let on_enter = Arc::clone(&driver);
    doc.add_event_listener(container, EventKind::PointerEnter, move |_, _| on_enter.pause());
    let on_leave = Arc::clone(&driver);
    doc.add_event_listener(container, EventKind::PointerLeave, move |_, _| on_leave.resume());
    drop(doc);

    driver.start();

    tracing::info!(
        cycle_id = %driver.id,
        container = %locator,
        tabs = driver.headers.len(),
        interval_ms = interval.as_millis() as u64,
        "Auto-cycle started"
    );

    Ok(CycleHandle { driver })
}
