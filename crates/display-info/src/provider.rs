use alloc::collections::BTreeMap;

use thiserror::Error;
use tracing::trace;

use crate::{DisplayChanges, DisplayInfo, DisplayInfoCache};

/// A source of display snapshots, usually the platform's display subsystem.
pub trait DisplayInfoProvider {
    /// Query the current snapshot of a display.
    fn display_info(&self, display_id: i32) -> Result<DisplayInfo, ProviderError>;

    /// The ids of the displays this provider knows about, in ascending order.
    fn display_ids(&self) -> Result<Box<[i32]>, ProviderError>;
}

/// Errors returned by a [`DisplayInfoProvider`].
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No display with the id exists.
    #[error("No display with id {0}")]
    UnknownDisplay(i32),
}

/// A provider serving fixed snapshots, such as ones recorded to a [`crate::SnapshotFile`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticProvider {
    displays: BTreeMap<i32, DisplayInfo>,
}

impl StaticProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the snapshot served for `display_id`, returns the snapshot it replaced.
    pub fn insert(&mut self, display_id: i32, display_info: DisplayInfo) -> Option<DisplayInfo> {
        self.displays.insert(display_id, display_info)
    }

    /// Stops serving `display_id`, returns the snapshot it was serving.
    pub fn remove(&mut self, display_id: i32) -> Option<DisplayInfo> {
        self.displays.remove(&display_id)
    }

    /// Iterate over the served snapshots in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, DisplayInfo)> + '_ {
        self.displays.iter().map(|(id, info)| (*id, *info))
    }

    /// The number of served displays.
    pub fn len(&self) -> usize {
        self.displays.len()
    }

    /// Returns whether no displays are served.
    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }
}

impl FromIterator<(i32, DisplayInfo)> for StaticProvider {
    fn from_iter<T: IntoIterator<Item = (i32, DisplayInfo)>>(iter: T) -> Self {
        Self {
            displays: iter.into_iter().collect(),
        }
    }
}

impl DisplayInfoProvider for StaticProvider {
    fn display_info(&self, display_id: i32) -> Result<DisplayInfo, ProviderError> {
        self.displays
            .get(&display_id)
            .copied()
            .ok_or(ProviderError::UnknownDisplay(display_id))
    }

    fn display_ids(&self) -> Result<Box<[i32]>, ProviderError> {
        Ok(self.displays.keys().copied().collect())
    }
}

/// Query `provider` for the current snapshot of `display_id` and replace the cached snapshot
/// with it. The cache is untouched if the query fails.
pub fn poll<P: DisplayInfoProvider + ?Sized>(
    provider: &P,
    display_id: i32,
    cache: &DisplayInfoCache,
) -> Result<DisplayChanges, ProviderError> {
    let display_info = provider.display_info(display_id)?;
    trace!("Polled display {display_id}: {display_info}");

    Ok(cache.replace(display_info))
}
