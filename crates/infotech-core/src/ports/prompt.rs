//! Interactive prompt trait.

/// Asks the user questions on behalf of a handler.
pub trait Prompter: Send {
    /// Ask for a line of text. An empty answer returns `default` when given.
    fn ask(&mut self, question: &str, default: Option<&str>) -> anyhow::Result<String>;

    /// Ask a yes/no question. Empty input counts as "no".
    fn confirm(&mut self, question: &str) -> anyhow::Result<bool>;
}
