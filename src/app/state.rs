/// Hover highlight of the drop area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropZone {
    #[default]
    Resting,
    Hovered,
}

impl DropZone {
    /// Follows the hovered-files list reported for this frame.
    pub fn track_hover(self, files_hovering: bool) -> Self {
        if files_hovering {
            Self::Hovered
        } else {
            Self::Resting
        }
    }

    pub fn dropped(self) -> Self {
        Self::Resting
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Hovered)
    }
}

#[derive(Debug)]
pub struct ViewState {
    pub drop_zone: DropZone,
    pub show_help: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            drop_zone: DropZone::default(),
            show_help: true,
        }
    }
}

impl ViewState {
    pub fn clear(&mut self) {
        *self = ViewState {
            show_help: self.show_help,
            ..ViewState::default()
        };
    }
}
