/// Port for asking the user to pick one value from a fixed list.
///
/// Implementations return the chosen option, or `None` when the user
/// cancelled or no answer could be obtained. Failing to answer is never an
/// error for the caller: the field it was asking about simply stays unset.
///
/// # Examples
///
/// ```
/// use describe_action::domain::ports::TypePrompt;
///
/// struct AlwaysFirst;
///
/// impl TypePrompt for AlwaysFirst {
///     fn select_one(&mut self, _message: &str, options: &[&str]) -> Option<String> {
///         options.first().map(|option| (*option).to_string())
///     }
/// }
///
/// let mut prompt = AlwaysFirst;
/// assert_eq!(prompt.select_one("Pick", &["a", "b"]), Some("a".to_string()));
/// ```
pub trait TypePrompt {
    /// Present `message` with `options` and return the selected option.
    fn select_one(&mut self, message: &str, options: &[&str]) -> Option<String>;
}

impl<P: TypePrompt + ?Sized> TypePrompt for &mut P {
    fn select_one(&mut self, message: &str, options: &[&str]) -> Option<String> {
        (**self).select_one(message, options)
    }
}
