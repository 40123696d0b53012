//! What the user is pointing at, what they picked, and what the camera is chasing.

use crate::bodies::{Pick, Point};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
    /// Under the pointer right now. Recomputed on every pointer move.
    pub hovered: Option<Pick>,
    /// Stays until the detail panel is closed
    pub selected: Option<Pick>,
    /// Followed by name, since the target moves and gets looked up again every frame
    pub following: Option<String>,
    /// Screen position of the last hover, for the tooltip
    pub cursor: Point,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_following(&self, name: &str) -> bool {
        self.following.as_deref() == Some(name)
    }

    /// Forget anything that lives on body `idx`.
    pub fn forget_body(&mut self, idx: usize, names: &[&str]) {
        if self.hovered.map(Pick::body_index) == Some(idx) {
            self.hovered = None;
        }
        if self.selected.map(Pick::body_index) == Some(idx) {
            self.selected = None;
        }
        if let Some(name) = self.following.as_deref() {
            if names.contains(&name) {
                self.following = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forgetting_a_body_drops_its_moons_too() {
        let mut sel = SelectionState::new();
        sel.hovered = Some(Pick::Satellite(3, 0));
        sel.selected = Some(Pick::Body(2));
        sel.following = Some("Moon".to_string());
        sel.forget_body(3, &["Earth", "Moon"]);
        assert_eq!(sel.hovered, None);
        assert_eq!(sel.selected, Some(Pick::Body(2)));
        assert_eq!(sel.following, None);
    }
}
