use core::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

use crate::DisplayPowerMode;

/// The power and rendering state of a display, using the platform's numeric codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum DisplayState {
    /// The state could not be determined.
    #[default]
    Unknown = 0,

    /// The display is off.
    Off = 1,

    /// The display is on.
    On = 2,

    /// The display is dozing in a low power state, it may still show content.
    Doze = 3,

    /// The display is dozing and the CPU is not updating it.
    DozeSuspend = 4,

    /// The display is on and optimized for VR mode.
    Vr = 5,

    /// The display is on but the CPU is not updating it.
    OnSuspend = 6,
}

impl DisplayState {
    /// Every state, in code order.
    pub const ALL: [Self; 7] = [
        Self::Unknown,
        Self::Off,
        Self::On,
        Self::Doze,
        Self::DozeSuspend,
        Self::Vr,
        Self::OnSuspend,
    ];

    /// Convert a platform state code, unrecognised codes become [`DisplayState::Unknown`].
    pub const fn from_raw(code: i32) -> Self {
        match code {
            1 => Self::Off,
            2 => Self::On,
            3 => Self::Doze,
            4 => Self::DozeSuspend,
            5 => Self::Vr,
            6 => Self::OnSuspend,
            _ => Self::Unknown,
        }
    }

    /// The platform state code.
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// The platform's name for this state.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "STATE_UNKNOWN",
            Self::Off => "STATE_OFF",
            Self::On => "STATE_ON",
            Self::Doze => "STATE_DOZE",
            Self::DozeSuspend => "STATE_DOZE_SUSPEND",
            Self::Vr => "STATE_VR",
            Self::OnSuspend => "STATE_ON_SUSPEND",
        }
    }

    /// Look up a state by its platform name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.name() == name)
    }

    /// The power mode that puts a display into this state, `None` for
    /// [`DisplayState::Unknown`].
    pub const fn power_mode(self) -> Option<DisplayPowerMode> {
        match self {
            Self::Unknown => None,
            Self::Off => Some(DisplayPowerMode::Off),
            Self::On | Self::Vr => Some(DisplayPowerMode::Normal),
            Self::Doze => Some(DisplayPowerMode::Doze),
            Self::DozeSuspend => Some(DisplayPowerMode::DozeSuspend),
            Self::OnSuspend => Some(DisplayPowerMode::OnSuspend),
        }
    }
}

impl Display for DisplayState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for DisplayState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A state as written in a snapshot file, either the platform code or its name.
#[derive(Deserialize)]
#[serde(untagged)]
enum StateRepr {
    Code(i32),
    Name(String),
}

impl<'de> Deserialize<'de> for DisplayState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match StateRepr::deserialize(deserializer)? {
            StateRepr::Code(code) => Ok(Self::from_raw(code)),
            StateRepr::Name(name) => Self::from_name(&name)
                .ok_or_else(|| D::Error::custom(format!("unknown display state `{name}`"))),
        }
    }
}
