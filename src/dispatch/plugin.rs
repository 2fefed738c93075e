use crate::error::DispatchError;

/// Result type used by dispatch capabilities.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// A named action fired when its name matches an input filename.
///
/// Plugins and modules both implement this interface; the registry stores
/// them as trait objects and scans them in registration order.
pub trait Capability {
    /// The name matched as a substring of the input filename.
    fn name(&self) -> &str;

    /// Invokes the capability for the given input filename.
    ///
    /// # Errors
    /// Returns a `DispatchError` if the capability cannot complete. The
    /// registry reports the failure to the error stream and the run
    /// continues.
    fn invoke(&self, filename: &str) -> DispatchResult<()>;
}

/// A plugin that announces itself on standard output.
///
/// This is the built-in plugin every default registry carries; its two
/// output lines are part of the console output contract.
pub struct PrintPlugin {
    name: String,
}

impl PrintPlugin {
    /// Creates a print plugin with the given match name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }
}

impl Capability for PrintPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn invoke(&self, filename: &str) -> DispatchResult<()> {
        println!("Plugin: {}", self.name);
        println!("Executing BlueDOG code from file: {filename}");

        Ok(())
    }
}
