use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use regform::constants::{ACCOUNT_TYPES, ERROR_REQUIRED};
use regform::ui::components::{FieldProps, SelectInput, TextInput};
use regform::ui::core::{Action, Component};
use regform::{FieldError, FieldName, FormContext};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn text(ctx: &FormContext, name: FieldName) -> String {
    ctx.get_value(name).unwrap().text().to_string()
}

#[test]
fn test_text_input_editing() {
    let mut ctx = FormContext::registration();
    let mut input = TextInput::new(FieldProps::new("register", FieldName::Username, "Username"));

    for c in "adx".chars() {
        input.handle_key_events(key(KeyCode::Char(c)), &mut ctx);
    }
    input.handle_key_events(key(KeyCode::Backspace), &mut ctx);
    input.handle_key_events(key(KeyCode::Char('a')), &mut ctx);
    assert_eq!(text(&ctx, FieldName::Username), "ada");
    assert_eq!(input.cursor_position(), 3);

    input.handle_key_events(key(KeyCode::Home), &mut ctx);
    input.handle_key_events(key(KeyCode::Char('L')), &mut ctx);
    assert_eq!(text(&ctx, FieldName::Username), "Lada");

    input.handle_key_events(key(KeyCode::Delete), &mut ctx);
    assert_eq!(text(&ctx, FieldName::Username), "Lda");

    input.handle_key_events(key(KeyCode::End), &mut ctx);
    input.handle_key_events(key(KeyCode::Left), &mut ctx);
    input.handle_key_events(key(KeyCode::Backspace), &mut ctx);
    assert_eq!(text(&ctx, FieldName::Username), "La");
    assert_eq!(input.cursor_position(), 1);
}

#[test]
fn test_text_input_actions() {
    let mut ctx = FormContext::registration();
    let mut input = TextInput::new(FieldProps::new("register", FieldName::Place, "Place"));
    assert_eq!(input.handle_key_events(key(KeyCode::Tab), &mut ctx), Action::FocusNext);
    assert_eq!(
        input.handle_key_events(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT), &mut ctx),
        Action::FocusPrevious
    );
    assert_eq!(input.handle_key_events(key(KeyCode::Enter), &mut ctx), Action::Submit);

    let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
    assert_eq!(input.handle_key_events(ctrl_s, &mut ctx), Action::None);
    assert_eq!(text(&ctx, FieldName::Place), "");
}

#[test]
fn test_text_input_focus_moves_cursor_to_end() {
    let mut ctx = FormContext::registration();
    ctx.set_value(FieldName::Place, Some("Springfield".to_string())).unwrap();
    let mut input = TextInput::new(FieldProps::new("register", FieldName::Place, "Place"));
    input.on_focus(&mut ctx);
    assert_eq!(input.cursor_position(), 11);
}

#[test]
fn test_masked_input_hides_text() {
    let mut ctx = FormContext::registration();
    let mut input = TextInput::new(FieldProps::new("register", FieldName::Password, "Password")).masked();
    for c in "hunter22".chars() {
        input.handle_key_events(key(KeyCode::Char(c)), &mut ctx);
    }
    assert_eq!(text(&ctx, FieldName::Password), "hunter22");

    let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
    terminal
        .draw(|f| input.render(f, Rect::new(0, 0, 30, 3), &ctx, false))
        .unwrap();
    let buffer = terminal.backend().buffer();
    let row: String = (0..30).map(|x| buffer[(x, 1)].symbol().to_string()).collect();
    assert!(!row.contains("hunter"));
    assert!(row.contains("••••••••"));
}

#[test]
fn test_text_input_accessibility() {
    let mut ctx = FormContext::registration();
    let input = TextInput::new(FieldProps::new("register", FieldName::Email, "Email"));

    let a11y = input.accessibility(&ctx);
    assert_eq!(a11y.container_class, "register-emailContainer");
    assert_eq!(a11y.input_id, "register-emailId");
    assert_eq!(a11y.aria("aria-required"), Some("true"));
    assert!(a11y.error_region.is_none());

    ctx.set_errors(FieldName::Email, vec![FieldError::new(ERROR_REQUIRED)]).unwrap();
    let a11y = input.accessibility(&ctx);
    assert_eq!(a11y.aria("aria-describedby"), Some("email-errorMsg-id"));
    assert_eq!(a11y.error_region.unwrap().message, ERROR_REQUIRED);
}

#[test]
fn test_select_input_cycles() {
    let mut ctx = FormContext::registration();
    let mut select = SelectInput::new(FieldProps::new("register", FieldName::AccountType, "Account type"), ACCOUNT_TYPES);
    assert_eq!(select.options().len(), 3);

    select.handle_key_events(key(KeyCode::Right), &mut ctx);
    assert_eq!(text(&ctx, FieldName::AccountType), "Personal");
    select.handle_key_events(key(KeyCode::Char(' ')), &mut ctx);
    assert_eq!(text(&ctx, FieldName::AccountType), "Business");
    select.handle_key_events(key(KeyCode::Right), &mut ctx);
    select.handle_key_events(key(KeyCode::Right), &mut ctx);
    assert_eq!(text(&ctx, FieldName::AccountType), "Personal");

    select.handle_key_events(key(KeyCode::Left), &mut ctx);
    assert_eq!(text(&ctx, FieldName::AccountType), "Education");

    select.handle_key_events(key(KeyCode::Backspace), &mut ctx);
    assert_eq!(ctx.get_value(FieldName::AccountType).unwrap().value, None);
}

#[test]
fn test_select_input_click_cycles() {
    let mut ctx = FormContext::registration();
    let mut select = SelectInput::new(FieldProps::new("register", FieldName::AccountType, "Account type"), ACCOUNT_TYPES);

    let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
    terminal
        .draw(|f| select.render(f, Rect::new(0, 0, 40, 3), &ctx, true))
        .unwrap();

    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 3,
        row: 1,
        modifiers: KeyModifiers::NONE,
    };
    assert!(select.contains(3, 1));
    select.handle_mouse_events(click, &mut ctx);
    assert_eq!(text(&ctx, FieldName::AccountType), "Personal");
    assert_eq!(select.accessibility(&ctx).role, Some("radiogroup"));
}
