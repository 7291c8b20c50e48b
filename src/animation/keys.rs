/// Keyboard commands understood by the polygon animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    /// Reverses the rotation direction.
    ToggleDirection,
    /// Moves the pivot to the current position of vertex `index`.
    SelectPivot(usize),
}

impl KeyCommand {
    /// Maps a key identifier to a command.
    ///
    /// `a` toggles direction; `r`, `g`, `b` and `w` pick vertex 5, 0, 1 and 2
    /// as pivot. Other keys are ignored.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'a' => Some(Self::ToggleDirection),
            'r' => Some(Self::SelectPivot(5)),
            'g' => Some(Self::SelectPivot(0)),
            'b' => Some(Self::SelectPivot(1)),
            'w' => Some(Self::SelectPivot(2)),
            _ => None,
        }
    }
}
