/// Per-field keystroke constraint, applied before a character is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharPolicy {
    #[default]
    Free,
    /// Letters and spaces only.
    Letters,
    /// Digits only, optionally capped at `max` characters.
    Digits { max: Option<usize> },
}

impl CharPolicy {
    pub fn accepts(&self, ch: char, current_len: usize) -> bool {
        match self {
            CharPolicy::Free => true,
            CharPolicy::Letters => ch.is_alphabetic() || ch == ' ',
            CharPolicy::Digits { max } => {
                ch.is_ascii_digit() && max.map_or(true, |m| current_len < m)
            }
        }
    }

    /// Filters a whole value through the policy, so programmatic values obey
    /// the same constraint as keystrokes.
    pub fn normalize(&self, value: &str) -> String {
        match self {
            CharPolicy::Free => value.to_string(),
            CharPolicy::Letters => value
                .chars()
                .filter(|c| c.is_alphabetic() || *c == ' ')
                .collect(),
            CharPolicy::Digits { max } => {
                let digits = value.chars().filter(char::is_ascii_digit);
                match max {
                    Some(m) => digits.take(*m).collect(),
                    None => digits.collect(),
                }
            }
        }
    }
}
