use super::accessibility::Accessibility;
use super::actions::Action;
use super::listeners::DocumentEvent;
use crate::form::{FieldName, FormContext};
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// A form field bound to one entry of the [`FormContext`]
pub trait Component {
    /// Field this component reads and writes
    fn field(&self) -> FieldName;

    /// Unique id used to route document-level events back to this component
    fn id(&self) -> String;

    fn handle_key_events(&mut self, key: KeyEvent, ctx: &mut FormContext) -> Action;

    fn handle_mouse_events(&mut self, _mouse: MouseEvent, _ctx: &mut FormContext) -> Action {
        Action::None
    }

    /// Called for every document-level event this component subscribed to
    fn handle_document_event(&mut self, _event: &DocumentEvent, _ctx: &mut FormContext) {}

    /// Rows needed to draw the field (label, input and error line)
    fn height(&self, ctx: &FormContext) -> u16;

    /// Whether a screen cell belongs to this component's last rendered area
    fn contains(&self, column: u16, row: u16) -> bool;

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &FormContext, focused: bool);

    /// Popups drawn after every field so they sit on top
    fn render_overlay(&mut self, _f: &mut Frame, _ctx: &FormContext) {}

    fn accessibility(&self, ctx: &FormContext) -> Accessibility;

    // Optional lifecycle methods
    fn on_focus(&mut self, _ctx: &mut FormContext) {}
    fn on_blur(&mut self, _ctx: &mut FormContext) {}

    /// Drop any rendered anchors; called when the field leaves the screen
    fn unmount(&mut self) {}
}

/// Shared hit test for rectangles recorded during render
pub fn rect_contains(rect: Option<Rect>, column: u16, row: u16) -> bool {
    rect.is_some_and(|r| column >= r.x && column < r.x.saturating_add(r.width) && row >= r.y && row < r.y.saturating_add(r.height))
}
