use core::fmt::Display;

/// The aspects that differ between two snapshots of the same display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayChanges {
    /// The logical size or rotation changed.
    pub geometry: bool,

    /// The density changed.
    pub density: bool,

    /// The layer stack changed.
    pub layer_stack: bool,

    /// The flags changed.
    pub flags: bool,

    /// The state changed.
    pub state: bool,

    /// The display turned on or off, see [`crate::DisplayInfo::is_on`].
    pub power: bool,
}

impl DisplayChanges {
    /// Returns whether nothing changed.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns whether anything consuming the display's content must be restarted, this is the
    /// case when the geometry changes or the display turns on or off.
    pub fn requires_restart(&self) -> bool {
        self.geometry || self.power
    }

    fn names(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.geometry, "geometry"),
            (self.density, "density"),
            (self.layer_stack, "layer_stack"),
            (self.flags, "flags"),
            (self.state, "state"),
            (self.power, "power"),
        ]
        .into_iter()
        .filter_map(|(changed, name)| changed.then_some(name))
    }
}

impl Display for DisplayChanges {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }

        for (index, name) in self.names().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }

        Ok(())
    }
}
