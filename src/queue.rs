// SPDX-License-Identifier: MPL-2.0
//! Banner queue state machine.
//!
//! [`BannerQueue`] keeps an ordered sequence of [`SharedBanner`] handles and
//! guarantees that at most one of them is visible at a time. Advancement is
//! caller-driven: a presented banner invokes [`BannerQueue::show_next`] when
//! its dismissal completes, which pops it and presents its successor.
//!
//! All operations are synchronous and expected to run on the UI thread. The
//! queue holds no locks and schedules nothing itself; `Rc`-based handles make
//! the type `!Send`, so cross-thread use is rejected at compile time.

use crate::config::QueueConfig;
use crate::presentable::{QueuePosition, SharedBanner};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Ordered queue of notification banners with single-visible discipline.
///
/// The front of the queue (index 0) is always the currently active banner, or
/// the one about to become active. Construct independent instances freely;
/// each owns its own sequence and policy flags.
#[derive(Default)]
pub struct BannerQueue {
    /// Queued banners, frontmost first.
    items: VecDeque<SharedBanner>,
    /// When set, every addition clears the queue and is displayed directly.
    is_exclusive: bool,
    /// When set, all display activity is torn down and additions are ignored.
    is_silenced: bool,
}

impl BannerQueue {
    /// Creates a new empty queue with default policy flags.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a queue with the policy flags taken from `config`.
    ///
    /// Note that constructing with `silenced = true` starts the queue in the
    /// suppressed state without running a dismissal cascade; there is nothing
    /// to dismiss yet.
    #[must_use]
    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            items: VecDeque::new(),
            is_exclusive: config.exclusive,
            is_silenced: config.silenced,
        }
    }

    /// Adds a banner to the queue.
    ///
    /// With [`QueuePosition::Back`] the banner waits its turn and is only
    /// shown immediately when the queue was empty. With
    /// [`QueuePosition::Front`] the banner is shown right away and the
    /// previously active banner is suspended behind it.
    ///
    /// While the queue is silenced this is a no-op: the banner is neither
    /// queued nor shown.
    pub fn add_banner(&mut self, banner: SharedBanner, position: QueuePosition) {
        if self.is_silenced {
            trace!("queue silenced, dropping banner");
            return;
        }

        if self.is_exclusive {
            // Exclusive additions replace everything currently on screen and
            // bypass the queue: the banner is displayed but never tracked in
            // `items`, so `show_next` will not advance past it. See the
            // `set_exclusive` docs for the implications.
            self.dismiss_all_banners();
            banner.borrow_mut().show(false);
            debug!("exclusive banner shown, queue cleared");
            return;
        }

        match position {
            QueuePosition::Back => {
                self.items.push_back(banner);
                if self.items.len() == 1 {
                    self.items[0].borrow_mut().show(false);
                }
                debug!(len = self.items.len(), "banner appended");
            }
            QueuePosition::Front => {
                banner.borrow_mut().show(false);
                if let Some(current) = self.items.front() {
                    current.borrow_mut().suspend();
                }
                self.items.push_front(banner);
                debug!(len = self.items.len(), "banner pushed to front");
            }
        }
    }

    /// Advances the queue after the currently active banner has finished.
    ///
    /// Pops the finished banner and presents its successor: a banner that was
    /// suspended by a front insertion is resumed, one that has never been
    /// shown is shown. `callback` receives `true` when the queue is empty
    /// afterwards and `false` when another banner took over.
    ///
    /// While the queue is silenced this is a no-op and `callback` is not
    /// invoked at all.
    pub fn show_next(&mut self, callback: impl FnOnce(bool)) {
        if self.is_silenced {
            trace!("queue silenced, ignoring advancement");
            return;
        }

        if !self.items.is_empty() {
            self.items.pop_front();
        }

        let Some(next) = self.items.front() else {
            debug!("queue drained");
            callback(true);
            return;
        };

        {
            let mut next = next.borrow_mut();
            if next.is_suspended() {
                next.resume();
            } else {
                next.show(false);
            }
        }
        debug!(len = self.items.len(), "next banner presented");
        callback(false);
    }

    /// The number of banners currently on the queue.
    #[must_use]
    pub fn number_of_banners(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue holds no banners.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether exclusive mode is active.
    #[must_use]
    pub fn is_exclusive(&self) -> bool {
        self.is_exclusive
    }

    /// Enables or disables exclusive mode.
    ///
    /// While exclusive, every [`add_banner`](Self::add_banner) call first
    /// dismisses everything on screen and then displays the new banner
    /// directly, without inserting it into the queue. The displayed banner is
    /// therefore invisible to [`show_next`](Self::show_next) and
    /// [`number_of_banners`](Self::number_of_banners). This mirrors the
    /// long-standing behavior of the original implementation; callers that
    /// need the exclusive banner tracked must manage it themselves.
    pub fn set_exclusive(&mut self, exclusive: bool) {
        self.is_exclusive = exclusive;
    }

    /// Whether the queue is silenced.
    #[must_use]
    pub fn is_silenced(&self) -> bool {
        self.is_silenced
    }

    /// Silences or un-silences the queue.
    ///
    /// Silencing dismisses every banner currently attached to a display,
    /// clears the queue, and suppresses all further additions until the flag
    /// is cleared again. Un-silencing resumes normal operation with an empty
    /// queue; previously silenced banners are gone, not replayed.
    pub fn set_silenced(&mut self, silenced: bool) {
        self.is_silenced = silenced;
        if silenced {
            debug!("queue silenced");
            self.dismiss_all_banners();
        }
    }

    /// Dismisses every attached banner and clears the queue.
    ///
    /// Banners that were queued but never shown are dropped without a
    /// `dismiss` call.
    fn dismiss_all_banners(&mut self) {
        for item in &self.items {
            let mut banner = item.borrow_mut();
            if banner.is_attached_to_display() {
                banner.dismiss();
            }
        }
        self.items.clear();
    }
}

impl std::fmt::Debug for BannerQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BannerQueue")
            .field("len", &self.items.len())
            .field("is_exclusive", &self.is_exclusive)
            .field("is_silenced", &self.is_silenced)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentable::Presentable;
    use crate::test_utils::{BannerEvent, RecordingBanner};

    #[test]
    fn new_queue_is_empty() {
        let queue = BannerQueue::new();
        assert_eq!(queue.number_of_banners(), 0);
        assert!(queue.is_empty());
        assert!(!queue.is_exclusive());
        assert!(!queue.is_silenced());
    }

    #[test]
    fn first_back_addition_is_shown_immediately() {
        let mut queue = BannerQueue::new();
        let banner = RecordingBanner::shared();

        queue.add_banner(banner.clone(), QueuePosition::Back);

        assert_eq!(
            banner.borrow().events(),
            [BannerEvent::Show {
                place_on_queue: false
            }]
        );
        assert_eq!(queue.number_of_banners(), 1);
    }

    #[test]
    fn back_addition_behind_active_banner_waits_silently() {
        let mut queue = BannerQueue::new();
        let first = RecordingBanner::shared();
        let second = RecordingBanner::shared();

        queue.add_banner(first, QueuePosition::Back);
        queue.add_banner(second.clone(), QueuePosition::Back);

        assert!(second.borrow().events().is_empty());
        assert_eq!(queue.number_of_banners(), 2);
    }

    #[test]
    fn front_addition_shows_itself_and_suspends_active_banner() {
        let mut queue = BannerQueue::new();
        let active = RecordingBanner::shared();
        let urgent = RecordingBanner::shared();

        queue.add_banner(active.clone(), QueuePosition::Back);
        queue.add_banner(urgent.clone(), QueuePosition::Front);

        assert_eq!(
            urgent.borrow().events(),
            [BannerEvent::Show {
                place_on_queue: false
            }]
        );
        assert_eq!(
            active.borrow().events(),
            [
                BannerEvent::Show {
                    place_on_queue: false
                },
                BannerEvent::Suspend,
            ]
        );
        assert!(active.borrow().is_suspended());
        assert_eq!(queue.number_of_banners(), 2);
    }

    #[test]
    fn front_addition_into_empty_queue_suspends_nothing() {
        let mut queue = BannerQueue::new();
        let banner = RecordingBanner::shared();

        queue.add_banner(banner.clone(), QueuePosition::Front);

        assert_eq!(
            banner.borrow().events(),
            [BannerEvent::Show {
                place_on_queue: false
            }]
        );
        assert_eq!(queue.number_of_banners(), 1);
    }

    #[test]
    fn show_next_pops_and_shows_unsuspended_successor() {
        let mut queue = BannerQueue::new();
        let first = RecordingBanner::shared();
        let second = RecordingBanner::shared();
        queue.add_banner(first, QueuePosition::Back);
        queue.add_banner(second.clone(), QueuePosition::Back);

        let mut observed = None;
        queue.show_next(|is_empty| observed = Some(is_empty));

        assert_eq!(observed, Some(false));
        assert_eq!(
            second.borrow().events(),
            [BannerEvent::Show {
                place_on_queue: false
            }]
        );
        assert_eq!(queue.number_of_banners(), 1);
    }

    #[test]
    fn show_next_resumes_suspended_successor() {
        let mut queue = BannerQueue::new();
        let demoted = RecordingBanner::shared();
        let urgent = RecordingBanner::shared();
        queue.add_banner(demoted.clone(), QueuePosition::Back);
        queue.add_banner(urgent, QueuePosition::Front);

        let mut observed = None;
        queue.show_next(|is_empty| observed = Some(is_empty));

        assert_eq!(observed, Some(false));
        assert_eq!(demoted.borrow().events().last(), Some(&BannerEvent::Resume));
        assert!(!demoted.borrow().is_suspended());
        assert_eq!(queue.number_of_banners(), 1);
    }

    #[test]
    fn show_next_on_last_banner_reports_empty() {
        let mut queue = BannerQueue::new();
        let only = RecordingBanner::shared();
        queue.add_banner(only.clone(), QueuePosition::Back);

        let mut observed = None;
        queue.show_next(|is_empty| observed = Some(is_empty));

        assert_eq!(observed, Some(true));
        assert!(queue.is_empty());
        // The popped banner receives no further calls.
        assert_eq!(only.borrow().events().len(), 1);
    }

    #[test]
    fn show_next_on_empty_queue_reports_empty_immediately() {
        let mut queue = BannerQueue::new();

        let mut observed = None;
        queue.show_next(|is_empty| observed = Some(is_empty));

        assert_eq!(observed, Some(true));
    }

    #[test]
    fn silencing_dismisses_attached_banners_and_clears_queue() {
        let mut queue = BannerQueue::new();
        let shown = RecordingBanner::shared();
        let waiting = RecordingBanner::shared();
        queue.add_banner(shown.clone(), QueuePosition::Back);
        queue.add_banner(waiting.clone(), QueuePosition::Back);

        queue.set_silenced(true);

        assert_eq!(shown.borrow().events().last(), Some(&BannerEvent::Dismiss));
        // Never shown, never attached, so no dismiss call either.
        assert!(waiting.borrow().events().is_empty());
        assert_eq!(queue.number_of_banners(), 0);
        assert!(queue.is_silenced());
    }

    #[test]
    fn silenced_queue_swallows_additions() {
        let mut queue = BannerQueue::new();
        queue.set_silenced(true);
        let banner = RecordingBanner::shared();

        queue.add_banner(banner.clone(), QueuePosition::Back);

        assert!(banner.borrow().events().is_empty());
        assert_eq!(queue.number_of_banners(), 0);
    }

    #[test]
    fn silenced_show_next_does_not_invoke_callback() {
        let mut queue = BannerQueue::new();
        queue.set_silenced(true);

        let mut invoked = false;
        queue.show_next(|_| invoked = true);

        assert!(!invoked);
    }

    #[test]
    fn unsilencing_resumes_with_empty_queue() {
        let mut queue = BannerQueue::new();
        let old = RecordingBanner::shared();
        queue.add_banner(old, QueuePosition::Back);
        queue.set_silenced(true);
        queue.set_silenced(false);

        let fresh = RecordingBanner::shared();
        queue.add_banner(fresh.clone(), QueuePosition::Back);

        assert_eq!(queue.number_of_banners(), 1);
        assert_eq!(fresh.borrow().events().len(), 1);
    }

    #[test]
    fn exclusive_addition_dismisses_queue_and_shows_untracked() {
        let mut queue = BannerQueue::new();
        let shown = RecordingBanner::shared();
        queue.add_banner(shown.clone(), QueuePosition::Back);

        queue.set_exclusive(true);
        let exclusive = RecordingBanner::shared();
        queue.add_banner(exclusive.clone(), QueuePosition::Back);

        assert_eq!(shown.borrow().events().last(), Some(&BannerEvent::Dismiss));
        assert_eq!(
            exclusive.borrow().events(),
            [BannerEvent::Show {
                place_on_queue: false
            }]
        );
        // The exclusive banner bypasses the queue entirely.
        assert_eq!(queue.number_of_banners(), 0);
    }

    #[test]
    fn with_config_applies_policy_flags() {
        let queue = BannerQueue::with_config(QueueConfig {
            exclusive: true,
            silenced: false,
        });
        assert!(queue.is_exclusive());
        assert!(!queue.is_silenced());
    }

    #[test]
    fn queue_constructed_silenced_swallows_additions() {
        let mut queue = BannerQueue::with_config(QueueConfig {
            exclusive: false,
            silenced: true,
        });
        let banner = RecordingBanner::shared();

        queue.add_banner(banner.clone(), QueuePosition::Back);

        assert!(banner.borrow().events().is_empty());
        assert!(queue.is_empty());
    }
}
