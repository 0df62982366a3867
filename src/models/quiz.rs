/// Which questions a quiz turn may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    AnyCategory,
    Category(i32),
}

impl QuizScope {
    /// Category filter in the text form questions store it in, if any.
    pub fn category_key(&self) -> Option<String> {
        match self {
            QuizScope::AnyCategory => None,
            QuizScope::Category(id) => Some(id.to_string()),
        }
    }
}
