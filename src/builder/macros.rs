//! Macros for ergonomic lexer model construction.

/// Declare a whole lexer model as a transition table.
///
/// Each row reads `from => to on condition` with an optional
/// `, do [actions]`. Rows are added in the order written, so earlier rows
/// take precedence within a state. Evaluates to
/// `Result<LexerModel, ModelError>`.
///
/// # Example
///
/// ```
/// use lexspec::lexer_model;
///
/// let model = lexer_model! {
///     states: 2;
///     0 => 0 on [" ", "\t"];
///     0 => 0 on "+", do ["B", "A", "E:PLUS"];
///     0 => 1 on "0-9", do ["B", "A"];
///     1 => 1 on "0-9", do ["A"];
///     1 => 0 on "else", do ["E:NUM", "F"];
/// }
/// .unwrap();
///
/// assert_eq!(model.num_states(), 2);
/// assert_eq!(model.transitions(1).unwrap().len(), 2);
/// ```
#[macro_export]
macro_rules! lexer_model {
    (
        states: $num_states:expr;
        $(
            $from:expr => $to:tt on $condition:expr $(, do [$($action:expr),* $(,)?])?;
        )*
    ) => {
        (|| -> ::core::result::Result<$crate::core::LexerModel, $crate::builder::ModelError> {
            #[allow(unused_mut)]
            let mut builder = $crate::builder::LexerModelBuilder::new($num_states);
            $(
                let actions: &[&str] = &[$($($action),*)?];
                builder.add_transition($from, $to, $condition, actions.iter().copied())?;
            )*
            builder.build()
        })()
    };
}
