use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};

use crate::{
    dispatch::plugin::{Capability, DispatchResult},
    error::DispatchError,
};

/// The entry-point symbol resolved in every loaded module library.
const MODULE_ENTRY_SYMBOL: &[u8] = b"module_function";

/// A module backed by a dynamic library on disk.
///
/// Loading is a single transactional operation per invocation: the library
/// is opened, the entry symbol is resolved and called with no arguments, and
/// the handle is released before the call returns. Release happens on every
/// exit path, symbol-resolution failure included.
pub struct SharedModule {
    name:         String,
    library_path: PathBuf,
}

impl SharedModule {
    /// Creates a module whose library path is the module name itself.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self { name:         name.to_string(),
               library_path: PathBuf::from(name), }
    }

    /// Creates a module that loads a fixed library path, regardless of the
    /// matched name.
    #[must_use]
    pub fn with_library(name: &str, library_path: impl AsRef<Path>) -> Self {
        Self { name:         name.to_string(),
               library_path: library_path.as_ref().to_path_buf(), }
    }
}

impl Capability for SharedModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn invoke(&self, filename: &str) -> DispatchResult<()> {
        println!("Module: {}", self.name);
        println!("Loading module from file: {filename}");

        // SAFETY: opening a library runs its initialization routines. The
        // path comes from registry configuration, never from source text.
        let library = unsafe { Library::new(&self.library_path) }.map_err(|e| {
                          DispatchError::ModuleLoadFailed { reason: e.to_string() }
                      })?;

        // SAFETY: the entry point takes no arguments and returns nothing;
        // the declared type must match the symbol in the loaded library.
        let entry: Symbol<unsafe extern "C" fn()> =
            unsafe { library.get(MODULE_ENTRY_SYMBOL) }.map_err(|e| {
                DispatchError::SymbolNotFound { reason: e.to_string() }
            })?;

        // SAFETY: the symbol stays valid for the call; `library` outlives it.
        unsafe { entry() };

        // `library` drops here, releasing the handle. The `?` exits above
        // drop it the same way.
        Ok(())
    }
}
