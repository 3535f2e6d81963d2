// Focus management for the input form

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    #[default]
    Title,
    Description,
    People,
    SubmitButton,
}

impl FormFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::People,
            Self::People => Self::SubmitButton,
            Self::SubmitButton => Self::Title, // Wrap around
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Title => Self::SubmitButton, // Wrap around
            Self::Description => Self::Title,
            Self::People => Self::Description,
            Self::SubmitButton => Self::People,
        }
    }

    /// Text fields accept character input; the button does not
    pub fn is_text_input(&self) -> bool {
        !matches!(self, Self::SubmitButton)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_both_ways() {
        let mut focus = FormFocus::default();
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, FormFocus::Title);
        assert_eq!(FormFocus::Title.previous(), FormFocus::SubmitButton);
        assert_eq!(FormFocus::SubmitButton.previous().previous(), FormFocus::Description);
    }

    #[test]
    fn test_only_button_is_not_text_input() {
        assert!(FormFocus::Title.is_text_input());
        assert!(FormFocus::Description.is_text_input());
        assert!(FormFocus::People.is_text_input());
        assert!(!FormFocus::SubmitButton.is_text_input());
    }
}
