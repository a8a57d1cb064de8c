use crate::generator::generator::DEFAULT_INDENT;

/// Options for a single compile.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerConfig {
    /// Name recorded in positions and shown in rendered diagnostics.
    pub file_name: String,
    /// Stop after type checking; nothing is generated.
    pub check_only: bool,
    /// Spaces before each generated declaration.
    pub indent: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        CompilerConfig {
            file_name: String::from("stdin"),
            check_only: false,
            indent: DEFAULT_INDENT,
        }
    }
}

impl CompilerConfig {
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_check_only(mut self, check_only: bool) -> Self {
        self.check_only = check_only;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
