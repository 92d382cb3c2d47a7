pub const REVEAL_SELECTOR: &str = ".fade-in, .slide-up, .slide-in-left, .slide-in-right";
pub const VISIBLE_CLASS: &str = "visible";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    Reveal,
    Ignore,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    revealed: bool,
}

impl Reveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, intersecting: bool) -> RevealAction {
        if self.revealed || !intersecting {
            return RevealAction::Ignore;
        }
        self.revealed = true;
        RevealAction::Reveal
    }
}
