/// The core trait for defining components in magbranch.
///
/// A `Component` takes an input and produces an output. Components should be
/// deterministic, always producing the same result for a given input, and
/// must not perform I/O or mutate shared state.
///
/// ## Implementing `Component`
///
/// To define a `Component`, implement the [`call()`] method, which takes
/// an input and returns either an output or an error.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use magbranch_core::Component;
///
/// struct Doubler;
///
/// impl Component for Doubler {
///     type Input = f64;
///     type Output = f64;
///     type Error = Infallible;
///
///     fn call(&self, input: f64) -> Result<f64, Self::Error> {
///         Ok(input * 2.0)
///     }
/// }
///
/// assert_eq!(Doubler.call(21.0).unwrap(), 42.0);
/// ```
///
/// [`call()`]: Component::call
pub trait Component {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the component with the given input and returns a result.
    ///
    /// This is the only method required when implementing `Component`.
    ///
    /// # Errors
    ///
    /// Each component defines its own `Error` type, allowing it to determine
    /// what constitutes a failure within its domain.
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}
