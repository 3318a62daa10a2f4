/// Owner of the current slide index.
///
/// Controlled carousels render whatever the controller last supplied and only
/// request changes; uncontrolled carousels own and clamp the index
/// themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SlideIndexOwner {
    Controlled { value: usize },
    Uncontrolled { store: usize },
}

impl SlideIndexOwner {
    pub(super) fn new(controlled: Option<usize>, initial: usize) -> Self {
        match controlled {
            Some(value) => Self::Controlled { value },
            None => Self::Uncontrolled { store: initial },
        }
    }

    #[must_use]
    pub(super) fn is_controlled(self) -> bool {
        matches!(self, Self::Controlled { .. })
    }

    /// Index as last supplied or stored, before clamping.
    #[must_use]
    pub(super) fn raw(self) -> usize {
        match self {
            Self::Controlled { value } => value,
            Self::Uncontrolled { store } => store,
        }
    }

    /// Index used for rendering: clamped into range whenever slides exist,
    /// passed through unclamped when there are none.
    #[must_use]
    pub(super) fn effective(self, slide_count: usize) -> usize {
        let raw = self.raw();
        if slide_count == 0 {
            raw
        } else {
            raw.min(slide_count - 1)
        }
    }

    /// Stores a committed index; controlled owners ignore the store and wait
    /// for the controller to supply the next value.
    pub(super) fn store(&mut self, index: usize) {
        if let Self::Uncontrolled { store } = self {
            *store = index;
        }
    }

    /// Adopts the next controller-supplied value.
    pub(super) fn set_controlled(&mut self, value: usize) {
        *self = Self::Controlled { value };
    }
}
