use serde::{Deserialize, Serialize};

/// Whether the back/forward controls should be enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    pub can_go_back: bool,
    pub can_go_forward: bool,
}
