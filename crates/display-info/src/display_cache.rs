use parking_lot::Mutex;
use tracing::debug;

use crate::{DisplayChanges, DisplayInfo};

/// Holds the latest snapshot of a display, shared between the thread polling the platform and
/// the threads reading the snapshot.
#[derive(Debug)]
pub struct DisplayInfoCache {
    display_info: Mutex<DisplayInfo>,
}

impl DisplayInfoCache {
    /// Create a new cache holding `initial`.
    pub fn new(initial: DisplayInfo) -> Self {
        Self {
            display_info: Mutex::new(initial),
        }
    }

    /// Returns a copy of the cached snapshot.
    pub fn get(&self) -> DisplayInfo {
        *self.display_info.lock()
    }

    /// Replaces the cached snapshot with `display_info` and returns what changed.
    pub fn replace(&self, display_info: DisplayInfo) -> DisplayChanges {
        let previous = {
            let mut cached = self.display_info.lock();
            core::mem::replace(&mut *cached, display_info)
        };

        let changes = display_info.changes_from(&previous);
        if !changes.is_empty() {
            debug!("Display changed ({changes}): {previous} -> {display_info}");
        }

        changes
    }
}

impl Default for DisplayInfoCache {
    fn default() -> Self {
        Self::new(DisplayInfo::default())
    }
}
