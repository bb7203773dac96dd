/// What a component asks the form to do after handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Focus movement (tab order)
    FocusNext,
    FocusPrevious,

    // Form operations
    Submit,
    Reset,

    // UI operations
    ToggleLogs,

    // App control
    Quit,
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
