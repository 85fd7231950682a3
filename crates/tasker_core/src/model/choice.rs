/// A closed set of menu-selectable members, each with a stable numeric code.
///
/// `CHOICES` fixes one ordering for display and parsing, so the codes shown
/// on screen and the codes accepted from the user can never drift apart.
pub trait Choice: Copy + Sized + 'static {
    const CHOICES: &'static [Self];

    fn code(self) -> u8;

    fn label(self) -> &'static str;

    /// Matches the raw input line against each code's decimal form.
    ///
    /// The comparison is string-exact: `"1"` selects the first member,
    /// `" 1"` or `"01"` select nothing.
    fn from_input(input: &str) -> Option<Self> {
        Self::CHOICES
            .iter()
            .copied()
            .find(|choice| choice.code().to_string() == input)
    }

    fn option_lines() -> Vec<String> {
        Self::CHOICES
            .iter()
            .map(|choice| format!("{} - {}", choice.code(), choice.label()))
            .collect()
    }
}
