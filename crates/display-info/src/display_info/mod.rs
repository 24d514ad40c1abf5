mod changes;

use core::fmt::Display;

use serde::{Deserialize, Serialize};

pub use changes::DisplayChanges;

use crate::{DisplayFlags, DisplayState, Size};

/// A point-in-time snapshot of a display's configuration.
///
/// Snapshots are never patched, a newer snapshot replaces the old one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "DisplayInfoFields", into = "DisplayInfoFields")]
pub struct DisplayInfo {
    logical_size: Size,
    logical_density_dpi: i32,
    rotation: i32,
    layer_stack: i32,
    flags: DisplayFlags,
    state: DisplayState,
}

impl DisplayInfo {
    /// Create a new snapshot.
    ///
    /// Negative dimensions are clamped to zero and `rotation` is reduced to `0..=3`.
    pub fn new(
        logical_width: i32,
        logical_height: i32,
        logical_density_dpi: i32,
        rotation: i32,
        layer_stack: i32,
        flags: DisplayFlags,
        state: DisplayState,
    ) -> Self {
        Self {
            logical_size: Size::new(logical_width.max(0), logical_height.max(0)),
            logical_density_dpi,
            rotation: rotation.rem_euclid(4),
            layer_stack,
            flags,
            state,
        }
    }

    /// Create a new snapshot from the raw flag bits and state code reported by the platform.
    pub fn from_raw(
        logical_width: i32,
        logical_height: i32,
        logical_density_dpi: i32,
        rotation: i32,
        layer_stack: i32,
        flags: i32,
        state: i32,
    ) -> Self {
        Self::new(
            logical_width,
            logical_height,
            logical_density_dpi,
            rotation,
            layer_stack,
            DisplayFlags::from_bits(flags),
            DisplayState::from_raw(state),
        )
    }

    /// The size in the display's current orientation.
    pub fn logical_size(&self) -> Size {
        self.logical_size
    }

    /// The pixel density in dots per inch.
    pub fn logical_density_dpi(&self) -> i32 {
        self.logical_density_dpi
    }

    /// Quarter-turns applied to the natural orientation, always in `0..=3`.
    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    /// The layer stack content for this display is assigned to.
    pub fn layer_stack(&self) -> i32 {
        self.layer_stack
    }

    /// The display's flags.
    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    /// The display's power and rendering state.
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Returns the display dimensions in the natural orientation.
    pub fn natural_size(&self) -> Size {
        self.logical_size.rotated(-self.rotation)
    }

    /// Returns whether the display is actively on. Only [`DisplayState::On`] and
    /// [`DisplayState::Vr`] count, dozing and suspended displays do not.
    pub fn is_on(&self) -> bool {
        matches!(self.state, DisplayState::On | DisplayState::Vr)
    }

    /// Returns whether the display is round.
    pub fn is_round(&self) -> bool {
        self.flags.contains(DisplayFlags::ROUND)
    }

    /// Render every field for logs.
    pub fn to_debug_string(&self) -> String {
        self.to_string()
    }

    /// Returns which aspects of the display differ from `previous`.
    pub fn changes_from(&self, previous: &Self) -> DisplayChanges {
        DisplayChanges {
            geometry: self.logical_size != previous.logical_size
                || self.rotation != previous.rotation,
            density: self.logical_density_dpi != previous.logical_density_dpi,
            layer_stack: self.layer_stack != previous.layer_stack,
            flags: self.flags != previous.flags,
            state: self.state != previous.state,
            power: self.is_on() != previous.is_on(),
        }
    }
}

impl Display for DisplayInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "DisplayInfo {{logical_size: {}, logical_density_dpi: {}, rotation: {}, layer_stack: {}, flags: {}, state: {}}}",
            self.logical_size,
            self.logical_density_dpi,
            self.rotation,
            self.layer_stack,
            self.flags,
            self.state
        )
    }
}

/// The serialized form of a [`DisplayInfo`], deserializing goes through [`DisplayInfo::new`].
#[derive(Serialize, Deserialize)]
struct DisplayInfoFields {
    logical_width: i32,
    logical_height: i32,
    logical_density_dpi: i32,
    #[serde(default)]
    rotation: i32,
    #[serde(default)]
    layer_stack: i32,
    #[serde(default)]
    flags: DisplayFlags,
    #[serde(default)]
    state: DisplayState,
}

impl From<DisplayInfoFields> for DisplayInfo {
    fn from(fields: DisplayInfoFields) -> Self {
        Self::new(
            fields.logical_width,
            fields.logical_height,
            fields.logical_density_dpi,
            fields.rotation,
            fields.layer_stack,
            fields.flags,
            fields.state,
        )
    }
}

impl From<DisplayInfo> for DisplayInfoFields {
    fn from(info: DisplayInfo) -> Self {
        Self {
            logical_width: info.logical_size.width,
            logical_height: info.logical_size.height,
            logical_density_dpi: info.logical_density_dpi,
            rotation: info.rotation,
            layer_stack: info.layer_stack,
            flags: info.flags,
            state: info.state,
        }
    }
}
