use alloc::collections::{BTreeMap, btree_map::Entry};
use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info_span};
use utilities::DebugTime;

use crate::{DisplayInfo, DisplayInfoProvider, ProviderError, StaticProvider};

/// Recorded display snapshots keyed by display id, stored as TOML:
///
/// ```toml
/// [[display]]
/// id = 0
/// logical_width = 1080
/// logical_height = 2400
/// logical_density_dpi = 420
/// rotation = 1
/// layer_stack = 0
/// flags = 16
/// state = "STATE_ON"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotFile {
    displays: BTreeMap<i32, DisplayInfo>,
}

/// Errors from loading a [`SnapshotFile`].
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum LoadError {
    #[error("Failed to open snapshot file:\n{0}")]
    OpenFile(#[source] io::Error),

    #[error("Failed to read snapshot file:\n{0}")]
    ReadFile(#[source] io::Error),

    #[error("Failed to deserialize snapshots:\n{0}")]
    Deserialize(#[from] toml::de::Error),

    #[error("Display {0} is recorded more than once")]
    DuplicateDisplay(i32),
}

/// Errors from saving a [`SnapshotFile`].
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum SaveError {
    #[error("Failed to serialize snapshots:\n{0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write file:\n{0}")]
    Write(#[from] io::Error),
}

#[derive(Serialize, Deserialize)]
struct SnapshotFileRepr {
    #[serde(default, rename = "display")]
    displays: Vec<SnapshotEntry>,
}

#[derive(Serialize, Deserialize)]
struct SnapshotEntry {
    id: i32,
    #[serde(flatten)]
    display_info: DisplayInfo,
}

impl SnapshotFile {
    /// Create an empty snapshot file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current snapshot of every display `provider` knows about.
    pub fn capture<P: DisplayInfoProvider + ?Sized>(provider: &P) -> Result<Self, ProviderError> {
        let mut displays = BTreeMap::new();
        for display_id in provider.display_ids()? {
            displays.insert(display_id, provider.display_info(display_id)?);
        }

        Ok(Self { displays })
    }

    /// Parse a snapshot file from TOML.
    pub fn from_toml_str(contents: &str) -> Result<Self, LoadError> {
        let repr: SnapshotFileRepr = toml::from_str(contents)?;

        let mut displays = BTreeMap::new();
        for entry in repr.displays {
            match displays.entry(entry.id) {
                Entry::Vacant(vacant) => {
                    vacant.insert(entry.display_info);
                }
                Entry::Occupied(_) => return Err(LoadError::DuplicateDisplay(entry.id)),
            }
        }

        Ok(Self { displays })
    }

    /// Load a snapshot file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let _span = info_span!("LoadSnapshotFile", path = %path.display()).entered();
        let _timer = DebugTime::start("Load snapshot file");

        let mut file = fs::File::open(path).map_err(LoadError::OpenFile)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(LoadError::ReadFile)?;

        let snapshots = Self::from_toml_str(&contents)?;
        debug!("Loaded {} display snapshots", snapshots.len());

        Ok(snapshots)
    }

    /// Serialize the snapshots to TOML, ordered by display id.
    pub fn to_toml_string(&self) -> Result<String, SaveError> {
        let repr = SnapshotFileRepr {
            displays: self
                .iter()
                .map(|(id, display_info)| SnapshotEntry { id, display_info })
                .collect(),
        };

        Ok(toml::to_string_pretty(&repr)?)
    }

    /// Write the snapshots to disk.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SaveError> {
        let toml_string = self.to_toml_string()?;

        fs::write(path, toml_string.as_bytes())?;
        Ok(())
    }

    /// Record a snapshot for `display_id`, returns the snapshot it replaced.
    pub fn record(&mut self, display_id: i32, display_info: DisplayInfo) -> Option<DisplayInfo> {
        self.displays.insert(display_id, display_info)
    }

    /// The snapshot recorded for `display_id`.
    pub fn get(&self, display_id: i32) -> Option<DisplayInfo> {
        self.displays.get(&display_id).copied()
    }

    /// Iterate over the recorded snapshots in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, DisplayInfo)> + '_ {
        self.displays.iter().map(|(id, info)| (*id, *info))
    }

    /// The number of recorded displays.
    pub fn len(&self) -> usize {
        self.displays.len()
    }

    /// Returns whether no displays are recorded.
    pub fn is_empty(&self) -> bool {
        self.displays.is_empty()
    }

    /// Serve the recorded snapshots through a [`StaticProvider`].
    pub fn into_provider(self) -> StaticProvider {
        self.displays.into_iter().collect()
    }
}
