/// The module capability backed by a dynamic library.
///
/// A matched module opens a dynamic library, resolves a conventionally named
/// entry symbol, invokes it, and releases the handle before returning,
/// whatever the outcome.
///
/// # Responsibilities
/// - Performs the transactional load-resolve-invoke-release sequence.
/// - Keeps the library path configurable rather than hardcoded.
/// - Confines all unsafe dynamic-loading calls to one module.
pub mod module;
/// The capability interface and the built-in print plugin.
///
/// A capability is a named action fired when its name matches the input
/// filename. Plugins and modules both implement the same interface and are
/// stored as trait objects in the registry.
///
/// # Responsibilities
/// - Defines the `Capability` trait shared by plugins and modules.
/// - Provides `PrintPlugin`, the plugin that announces itself on standard
///   output.
pub mod plugin;
/// The ordered lookup table matched against input filenames.
///
/// The registry holds the plugin and module lists in registration order and
/// fires at most one of each per run, first match wins.
///
/// # Responsibilities
/// - Stores capabilities in the order the caller registered them.
/// - Scans each list independently and stops at the first substring match.
/// - Reports failed invocations to the error stream without aborting.
pub mod registry;

pub use module::SharedModule;
pub use plugin::{Capability, PrintPlugin};
pub use registry::Registry;
