/// Configuration options for the JSON parser.
///
/// # Default
///
/// No depth limit, and exactly one JSON value per input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum nesting depth of arrays and objects.
    ///
    /// The dispatcher recurses once per nested container, so deeply nested
    /// input can exhaust the stack. Setting a limit turns that into an
    /// [`ErrorKind::DepthLimitExceeded`] error instead. A top-level container
    /// has depth 1; scalars do not count.
    ///
    /// # Default
    ///
    /// `None` (unbounded)
    ///
    /// [`ErrorKind::DepthLimitExceeded`]: crate::ErrorKind::DepthLimitExceeded
    pub max_depth: Option<usize>,

    /// Whether to parse multiple JSON values from a single input buffer.
    ///
    /// When `true`, iterating a [`Parser`] yields every value in the buffer
    /// instead of rejecting bytes after the first one. This supports JSON
    /// Lines (JSONL), newline-delimited JSON (ND-JSON), and arbitrary
    /// concatenation of JSON values.
    ///
    /// # Examples
    ///
    /// ```json
    /// {}{}{}
    /// ```
    ///
    /// ```json
    /// 123 45 678 9
    /// ```
    ///
    /// Single-value entry points such as [`parse`] ignore this option.
    ///
    /// # Default
    ///
    /// `false`
    ///
    /// [`Parser`]: crate::Parser
    /// [`parse`]: crate::parse
    pub allow_multiple_json_values: bool,
}
