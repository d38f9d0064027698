// SPDX-License-Identifier: MPL-2.0
//! `banner_queue` is an ordered queue controller for transient on-screen
//! notification banners.
//!
//! It guarantees that only one banner occupies the display surface at a time
//! while others wait their turn, can jump the line, or are suppressed
//! entirely. Rendering, animation, and window attachment stay with the banner
//! implementations; the queue drives them through the narrow [`Presentable`]
//! capability.
//!
//! # Components
//!
//! - [`presentable`] - The [`Presentable`] capability contract and
//!   [`QueuePosition`]
//! - [`queue`] - [`BannerQueue`], the ordering and visibility state machine
//! - [`config`] - Persistable [`QueueConfig`] policy flags
//! - [`test_utils`] - [`RecordingBanner`](test_utils::RecordingBanner) test
//!   double
//!
//! # Usage
//!
//! ```
//! use banner_queue::{BannerQueue, QueuePosition};
//! use banner_queue::test_utils::RecordingBanner;
//!
//! let mut queue = BannerQueue::new();
//!
//! // The first banner is shown immediately; later ones wait.
//! let first = RecordingBanner::shared();
//! let second = RecordingBanner::shared();
//! queue.add_banner(first, QueuePosition::Back);
//! queue.add_banner(second, QueuePosition::Back);
//! assert_eq!(queue.number_of_banners(), 2);
//!
//! // When a banner finishes it advances the queue itself.
//! queue.show_next(|is_empty| assert!(!is_empty));
//! ```
//!
//! # Design Considerations
//!
//! - Single-threaded by construction: banner handles are `Rc`-based, so a
//!   queue cannot leave the thread it was created on.
//! - No global instance: construct queues where you need them; tests get
//!   isolated instances for free.
//! - Queue operations never fail. Additions to a silenced queue and
//!   advancement of a silenced or empty queue are defined no-ops, not errors.

#![doc(html_root_url = "https://docs.rs/banner_queue/0.1.0")]

pub mod config;
pub mod error;
pub mod presentable;
pub mod queue;
pub mod test_utils;

pub use config::QueueConfig;
pub use error::{Error, Result};
pub use presentable::{Presentable, QueuePosition, SharedBanner};
pub use queue::BannerQueue;
