use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TuiAction {
    Quit,
    NewReport,
    CycleFilter,
    ToggleSort,
    MoveSelectionUp,
    MoveSelectionDown,
    ToggleDetails,
    ToggleHelp,
}

/// Browse-mode key map. Form mode consumes raw key events instead (text
/// entry needs every character).
pub fn key_to_action(key: KeyCode) -> Option<TuiAction> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(TuiAction::Quit),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(TuiAction::NewReport),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(TuiAction::CycleFilter),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(TuiAction::ToggleSort),
        KeyCode::Up => Some(TuiAction::MoveSelectionUp),
        KeyCode::Down => Some(TuiAction::MoveSelectionDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(TuiAction::ToggleDetails),
        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => Some(TuiAction::ToggleHelp),
        _ => None,
    }
}
