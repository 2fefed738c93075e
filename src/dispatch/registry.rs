use crate::dispatch::plugin::Capability;

/// The ordered lookup table of plugins and modules matched against input
/// filenames.
///
/// Registration order is significant: within each list, the first entry
/// whose name is a substring of the filename fires, and scanning stops
/// there. The registry is read-only for the duration of a run.
pub struct Registry {
    plugins: Vec<Box<dyn Capability>>,
    modules: Vec<Box<dyn Capability>>,
}

#[allow(clippy::new_without_default)]
impl Registry {
    /// Creates an empty registry with no plugins or modules.
    #[must_use]
    pub fn new() -> Self {
        Self { plugins: Vec::new(),
               modules: Vec::new(), }
    }

    /// Appends a plugin to the end of the plugin scan order.
    pub fn register_plugin(&mut self, plugin: Box<dyn Capability>) {
        self.plugins.push(plugin);
    }

    /// Appends a module to the end of the module scan order.
    pub fn register_module(&mut self, module: Box<dyn Capability>) {
        self.modules.push(module);
    }

    /// Fires at most one plugin and at most one module for `filename`.
    ///
    /// Each list is scanned in registration order and the first entry whose
    /// name is a substring of `filename` is invoked; no further entries are
    /// considered. A failed invocation is reported to the error stream and
    /// does not affect the rest of the run. No match at all is silence, not
    /// an error.
    pub fn dispatch(&self, filename: &str) {
        if let Some(plugin) = Self::first_match(&self.plugins, filename)
           && let Err(e) = plugin.invoke(filename)
        {
            eprintln!("{e}");
        }

        if let Some(module) = Self::first_match(&self.modules, filename)
           && let Err(e) = module.invoke(filename)
        {
            eprintln!("{e}");
        }
    }

    fn first_match<'a>(entries: &'a [Box<dyn Capability>],
                       filename: &str)
                       -> Option<&'a dyn Capability> {
        entries.iter()
               .find(|entry| filename.contains(entry.name()))
               .map(|entry| entry.as_ref())
    }
}
