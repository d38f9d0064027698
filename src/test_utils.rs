// SPDX-License-Identifier: MPL-2.0
//! Test utilities for exercising the queue without a real display.
//!
//! [`RecordingBanner`] is a [`Presentable`] implementation that records every
//! lifecycle call it receives. The crate's own tests are built on it, and
//! downstream crates can use it to test their queue-driving code without
//! standing up a windowing stack.

use crate::presentable::Presentable;
use std::cell::RefCell;
use std::rc::Rc;

/// A single lifecycle call received by a [`RecordingBanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerEvent {
    /// `show` was called with the given `place_on_queue` flag.
    Show { place_on_queue: bool },
    /// `suspend` was called.
    Suspend,
    /// `resume` was called.
    Resume,
    /// `dismiss` was called.
    Dismiss,
}

/// A banner stand-in that records lifecycle calls and tracks the observable
/// state the queue consults.
///
/// `show` attaches the banner to the (imaginary) display, `dismiss` detaches
/// it, and `suspend`/`resume` toggle the suspension flag, matching how a real
/// banner's window attachment behaves.
#[derive(Debug, Default)]
pub struct RecordingBanner {
    events: Vec<BannerEvent>,
    suspended: bool,
    attached: bool,
}

impl RecordingBanner {
    /// Creates a fresh banner with no recorded events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a banner already wrapped in the shared handle the queue
    /// expects, while leaving the caller a typed handle for inspection.
    #[must_use]
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// All lifecycle calls received so far, in order.
    #[must_use]
    pub fn events(&self) -> &[BannerEvent] {
        &self.events
    }

    /// Number of `show` calls received.
    #[must_use]
    pub fn show_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, BannerEvent::Show { .. }))
            .count()
    }
}

impl Presentable for RecordingBanner {
    fn show(&mut self, place_on_queue: bool) {
        self.attached = true;
        self.events.push(BannerEvent::Show { place_on_queue });
    }

    fn suspend(&mut self) {
        self.suspended = true;
        self.events.push(BannerEvent::Suspend);
    }

    fn resume(&mut self) {
        self.suspended = false;
        self.events.push(BannerEvent::Resume);
    }

    fn dismiss(&mut self) {
        self.attached = false;
        self.events.push(BannerEvent::Dismiss);
    }

    fn is_suspended(&self) -> bool {
        self.suspended
    }

    fn is_attached_to_display(&self) -> bool {
        self.attached
    }
}
