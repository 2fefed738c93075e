#[derive(Debug)]
/// Represents all errors that can occur while firing a matched capability.
///
/// These are reported to the error stream by the registry and never abort
/// the rest of the pipeline; the display strings below are part of the
/// console output contract.
pub enum DispatchError {
    /// The dynamic library could not be opened.
    ModuleLoadFailed {
        /// The loader's description of the failure.
        reason: String,
    },
    /// The library was opened but the entry symbol was not found in it.
    SymbolNotFound {
        /// The loader's description of the failure.
        reason: String,
    },
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ModuleLoadFailed { reason } => write!(f, "Error loading module: {reason}"),

            Self::SymbolNotFound { reason } => {
                write!(f, "Function not found in module: {reason}")
            },
        }
    }
}

impl std::error::Error for DispatchError {}
