// Project input form: three text fields, validation, and submission

use crate::engine::{ProjectId, ProjectStore, Validatable, validate};
use crate::ui::component::{Component, Placement};
use crate::ui::components::render_button;
use crate::ui::constants::{DESCRIPTION_MIN_LENGTH, INVALID_INPUT_NOTICE, PEOPLE_MAX, PEOPLE_MIN};
use crate::ui::focus::FormFocus;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::fmt;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    People,
}

impl FormField {
    pub const ALL: [FormField; 3] = [Self::Title, Self::Description, Self::People];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::People => "People",
        }
    }

    pub fn focus(&self) -> FormFocus {
        match self {
            Self::Title => FormFocus::Title,
            Self::Description => FormFocus::Description,
            Self::People => FormFocus::People,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("{}", INVALID_INPUT_NOTICE)]
    InvalidInput { failed: Vec<FormField> },
}

/// Single-line editable text with a character cursor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        let pos = self.cursor.min(self.char_count());
        let idx = self.byte_index(pos);
        self.value.insert(idx, c);
        self.cursor = pos + 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let idx = self.byte_index(self.cursor - 1);
        self.value.remove(idx);
        self.cursor -= 1;
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let idx = self.byte_index(self.cursor);
            self.value.remove(idx);
        }
    }

    /// Delete the word before the cursor (Ctrl+Backspace)
    pub fn delete_word_back(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        let mut new_pos = self.cursor.min(chars.len());
        // Skip trailing whitespace first
        while new_pos > 0 && chars[new_pos - 1].is_whitespace() {
            new_pos -= 1;
        }
        while new_pos > 0 && !chars[new_pos - 1].is_whitespace() {
            new_pos -= 1;
        }
        let mut new_string: String = chars.iter().take(new_pos).collect();
        new_string.extend(chars.iter().skip(self.cursor));
        self.value = new_string;
        self.cursor = new_pos;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Value with a `|` marker at the cursor, for the focused field
    fn with_cursor(&self) -> String {
        let chars: Vec<char> = self.value.chars().collect();
        let pos = self.cursor.min(chars.len());
        let before: String = chars.iter().take(pos).collect();
        let after: String = chars.iter().skip(pos).collect();
        format!("{}|{}", before, after)
    }
}

/// Parse the people field the way a numeric form input does:
/// blank is zero, `0x`/`0o`/`0b` prefixes select a radix, and anything
/// unparseable is NaN.
pub fn parse_people(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let lower = trimmed.to_ascii_lowercase();
    let radix = [("0x", 16), ("0o", 8), ("0b", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| lower.strip_prefix(prefix).map(|digits| (digits, radix)));

    match radix {
        Some((digits, radix)) => parse_radix(digits, radix),
        None => trimmed.parse::<f64>().unwrap_or(f64::NAN),
    }
}

// Prefixed literals carry no sign and need at least one digit
fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return f64::NAN;
    }
    u64::from_str_radix(digits, radix)
        .map(|n| n as f64)
        .unwrap_or(f64::NAN)
}

#[derive(Debug, Clone, Default)]
pub struct InputForm {
    title: TextField,
    description: TextField,
    people: TextField,
    focus: FormFocus,
}

impl InputForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-filled form, as if the user had typed each value
    pub fn with_values(title: &str, description: &str, people: &str) -> Self {
        Self {
            title: TextField::new(title),
            description: TextField::new(description),
            people: TextField::new(people),
            focus: FormFocus::default(),
        }
    }

    pub fn field(&self, field: FormField) -> &TextField {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::People => &self.people,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut TextField {
        match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::People => &mut self.people,
        }
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: FormFocus) {
        self.focus = focus;
    }

    /// The text field under focus, if focus is on a field
    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            FormFocus::Title => Some(&mut self.title),
            FormFocus::Description => Some(&mut self.description),
            FormFocus::People => Some(&mut self.people),
            FormFocus::SubmitButton => None,
        }
    }

    /// Number of fields holding text that a submit would consume
    pub fn filled_fields(&self) -> usize {
        FormField::ALL
            .iter()
            .filter(|f| !self.field(**f).is_empty())
            .count()
    }

    pub fn has_input(&self) -> bool {
        self.filled_fields() > 0
    }

    fn gather_user_input(&self) -> Result<(String, String, u32), SubmitError> {
        let entered_title = self.title.value();
        let entered_description = self.description.value();
        let entered_people = parse_people(self.people.value());

        let checks = [
            (FormField::Title, Validatable::new(entered_title).required()),
            (
                FormField::Description,
                Validatable::new(entered_description)
                    .required()
                    .min_length(DESCRIPTION_MIN_LENGTH),
            ),
            (
                FormField::People,
                Validatable::new(entered_people)
                    .required()
                    .min(PEOPLE_MIN)
                    .max(PEOPLE_MAX),
            ),
        ];

        let mut failed: Vec<FormField> = Vec::new();
        for (field, check) in &checks {
            if !validate(check) {
                warn!(field = %field, rules = ?check.failures(), "field failed validation");
                failed.push(*field);
            }
        }

        // Team size is a whole number of people
        if !failed.contains(&FormField::People) && entered_people.fract() != 0.0 {
            warn!(field = %FormField::People, value = entered_people, "team size is not whole");
            failed.push(FormField::People);
        }

        if !failed.is_empty() {
            return Err(SubmitError::InvalidInput { failed });
        }

        Ok((
            entered_title.to_string(),
            entered_description.to_string(),
            entered_people as u32,
        ))
    }

    fn clear_inputs(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }

    /// Validate all fields and, if every one passes, add the project and
    /// clear the form. On failure nothing is added and the fields are kept.
    pub fn submit(&mut self, store: &mut ProjectStore) -> Result<ProjectId, SubmitError> {
        let (title, description, people) = self.gather_user_input()?;
        let id = store.add_project(&title, &description, people).id;
        info!(%id, "form submitted");
        self.clear_inputs();
        Ok(id)
    }

    fn render_field(&self, frame: &mut Frame, field: FormField, area: Rect) {
        let focused = self.focus == field.focus();
        let text_field = self.field(field);

        let (text, style) = if focused {
            (
                text_field.with_cursor(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (text_field.value().to_string(), Style::default().fg(Color::Green))
        };

        let line = Line::from(vec![
            Span::raw(format!("{:<13}", format!("{}:", field.label()))),
            Span::styled(text, style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

impl Component for InputForm {
    fn configure(&mut self, _store: &mut ProjectStore) {
        // Submission is driven by the event loop; start with the first field focused
        self.focus = FormFocus::Title;
    }

    fn render_content(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" New Project ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut y = inner.y;
        for field in FormField::ALL {
            if y >= inner.bottom() {
                return;
            }
            let row = Rect {
                x: inner.x,
                y,
                width: inner.width,
                height: 1,
            };
            self.render_field(frame, field, row);
            y += 1;
        }

        // Blank line, then the button
        y += 1;
        if y < inner.bottom() {
            let row = Rect {
                x: inner.x,
                y,
                width: inner.width,
                height: 1,
            };
            render_button(
                " Add Project",
                "Enter",
                self.focus == FormFocus::SubmitButton,
                row,
                frame.buffer_mut(),
            );
        }
    }

    fn placement(&self) -> Placement {
        Placement::Start
    }

    fn constraint(&self) -> Constraint {
        Constraint::Length(7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_editing() {
        let mut field = TextField::default();
        for c in "helo".chars() {
            field.insert(c);
        }
        field.move_left();
        field.insert('l');
        assert_eq!(field.value(), "hello");
        assert_eq!(field.cursor(), 4);

        field.move_end();
        field.backspace();
        assert_eq!(field.value(), "hell");

        field.move_home();
        field.delete();
        assert_eq!(field.value(), "ell");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_text_field_handles_multibyte() {
        let mut field = TextField::new("héllo");
        field.move_home();
        field.move_right();
        field.move_right();
        field.backspace();
        assert_eq!(field.value(), "hllo");
    }

    #[test]
    fn test_delete_word_back() {
        let mut field = TextField::new("design the api  ");
        field.delete_word_back();
        assert_eq!(field.value(), "design the ");
        assert_eq!(field.cursor(), 11);
    }

    #[test]
    fn test_parse_people() {
        assert_eq!(parse_people(" 3 "), 3.0);
        assert_eq!(parse_people(""), 0.0);
        assert!(parse_people("three").is_nan());
        assert_eq!(parse_people("0x5"), 5.0);
        assert_eq!(parse_people("0B11"), 3.0);
        assert_eq!(parse_people("0o17"), 15.0);
        assert!(parse_people("0x").is_nan());
        assert!(parse_people("0x+5").is_nan());
        assert!(parse_people("-0x5").is_nan());
    }

    #[test]
    fn test_filled_fields_counts_non_empty() {
        assert_eq!(InputForm::new().filled_fields(), 0);
        assert!(!InputForm::new().has_input());

        let form = InputForm::with_values("draft", "", "3");
        assert_eq!(form.filled_fields(), 2);
        assert!(form.has_input());
    }

    #[test]
    fn test_fractional_people_is_invalid() {
        let mut store = ProjectStore::new();
        let mut form = InputForm::with_values("Build API", "Design and implement", "3.5");
        let err = form.submit(&mut store).unwrap_err();
        assert_eq!(
            err,
            SubmitError::InvalidInput {
                failed: vec![FormField::People]
            }
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_error_displays_notice_text() {
        let err = SubmitError::InvalidInput {
            failed: vec![FormField::Title],
        };
        assert_eq!(err.to_string(), "Invalid input");
    }

    #[test]
    fn test_all_failed_fields_reported() {
        let mut store = ProjectStore::new();
        let mut form = InputForm::with_values(" ", "shrt", "0");
        match form.submit(&mut store) {
            Err(SubmitError::InvalidInput { failed }) => {
                assert_eq!(failed, FormField::ALL.to_vec());
            }
            Ok(_) => panic!("expected invalid input"),
        }
    }
}
