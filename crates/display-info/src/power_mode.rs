/// Power modes a display can be asked to enter, using the platform's numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum DisplayPowerMode {
    /// Turned off.
    Off = 0,

    /// Low power, may still show content.
    Doze = 1,

    /// Fully on.
    Normal = 2,

    /// Low power and not updated by the CPU.
    DozeSuspend = 3,

    /// On but not updated by the CPU.
    OnSuspend = 4,
}

impl DisplayPowerMode {
    /// Convert a platform power mode code.
    pub const fn from_raw(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Off),
            1 => Some(Self::Doze),
            2 => Some(Self::Normal),
            3 => Some(Self::DozeSuspend),
            4 => Some(Self::OnSuspend),
            _ => None,
        }
    }

    /// The platform power mode code.
    pub const fn as_raw(self) -> i32 {
        self as i32
    }
}
