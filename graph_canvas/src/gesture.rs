use strum_macros::Display;

/// How a click on a node should be interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Click {
    /// No pointer-down on this node since the last drag.
    Ignored,
    Single,
    Double,
}

/// Per-node gesture bookkeeping, driven only by [`crate::interaction::Interaction`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureState {
    pointer_down: bool,
    /// Time of the last click that selected this node.
    last_click_time: Option<f64>,
}

impl GestureState {
    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    pub fn last_click_time(&self) -> Option<f64> {
        self.last_click_time
    }

    pub fn pointer_down(&mut self) {
        self.pointer_down = true;
    }

    /// A drag moved the node; the click that ends it must not count.
    pub fn dragged(&mut self) {
        self.pointer_down = false;
    }

    pub fn record_selection(&mut self, now: f64) {
        self.last_click_time = Some(now);
    }

    pub fn classify_click(&self, now: f64, double_click_window: f64) -> Click {
        if !self.pointer_down {
            return Click::Ignored;
        }

        match self.last_click_time {
            Some(last) if now - last <= double_click_window => Click::Double,
            _ => Click::Single,
        }
    }
}
