//! # Display Info
//! Typed, immutable snapshots of a display's configuration as reported by the platform's
//! display subsystem, and the plumbing to hold, poll, and record them.
//!

#![warn(missing_docs)]

extern crate alloc;

pub use display_cache::DisplayInfoCache;
pub use display_flags::DisplayFlags;
pub use display_info::{DisplayChanges, DisplayInfo};
pub use display_state::DisplayState;
pub use geom::Size;
pub use power_mode::DisplayPowerMode;
pub use provider::{DisplayInfoProvider, ProviderError, StaticProvider, poll};
pub use snapshot_file::{LoadError, SaveError, SnapshotFile};

mod display_cache;
mod display_flags;
mod display_info;
mod display_state;
mod geom;
mod power_mode;
mod provider;
mod snapshot_file;
