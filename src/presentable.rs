// SPDX-License-Identifier: MPL-2.0
//! The capability contract between the queue and displayable banners.
//!
//! The queue never depends on a concrete banner type. Anything that can be
//! shown, hidden without losing state, and torn down satisfies [`Presentable`]
//! and can be queued.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Lifecycle capability a banner must provide to be managed by the queue.
///
/// The queue calls these in a fixed pattern: `show` when an item reaches the
/// front of an otherwise idle queue, `suspend` when a front insertion demotes
/// it, `resume` when it becomes frontmost again, and `dismiss` during a
/// silencing cascade. Implementations own all rendering and animation; the
/// queue only sequences the calls.
pub trait Presentable {
    /// Makes the banner visible now.
    ///
    /// `place_on_queue` is always `false` when invoked by the queue itself:
    /// the queue has already decided this banner's slot and the banner must
    /// not re-enqueue itself in response.
    fn show(&mut self, place_on_queue: bool);

    /// Hides the banner without discarding its state.
    fn suspend(&mut self);

    /// Restores a suspended banner to its previous visual state.
    fn resume(&mut self);

    /// Permanently removes the banner from the display.
    fn dismiss(&mut self);

    /// Whether the banner is currently suspended.
    fn is_suspended(&self) -> bool;

    /// Whether the banner is currently attached to a display surface.
    ///
    /// The silencing cascade only calls [`dismiss`](Presentable::dismiss) on
    /// attached banners; queued-but-never-shown banners are dropped silently.
    fn is_attached_to_display(&self) -> bool;
}

/// Shared handle to a queued banner.
///
/// Banners are shared between the queue and the presentation layer, so the
/// queue holds reference-counted handles rather than owning the banners
/// outright. `Rc` keeps the handle `!Send`, which encodes the queue's
/// single-thread confinement contract in the type system.
pub type SharedBanner = Rc<RefCell<dyn Presentable>>;

/// Where a new banner is placed relative to the existing queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueuePosition {
    /// Append behind any waiting banners; shown only once the queue drains
    /// down to it.
    #[default]
    Back,
    /// Displayed immediately, demoting the currently active banner to a
    /// suspended state behind it.
    Front,
}
