/// Physical orientation of the device, classified from one accelerometer
/// packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Upright portrait.
    Normal,
    /// Rotated 90° counter-clockwise.
    Left,
    /// Rotated 90° clockwise.
    Right,
    /// Upside down. Defined for the apply path but not produced by the
    /// current classification table.
    Inverted,
    /// No complete packet in the block, or the axis readings matched no
    /// known orientation.
    Indeterminate,
}

impl Orientation {
    /// The `xrandr -o` argument for this orientation. `None` for
    /// `Indeterminate`, which is never applied.
    pub fn xrandr_arg(self) -> Option<&'static str> {
        match self {
            Orientation::Normal => Some("normal"),
            Orientation::Left => Some("left"),
            Orientation::Right => Some("right"),
            Orientation::Inverted => Some("inverted"),
            Orientation::Indeterminate => None,
        }
    }

    /// True for any of the four concrete orientations.
    pub fn is_determinate(self) -> bool {
        !matches!(self, Orientation::Indeterminate)
    }
}
