use std::{fs, path::PathBuf};

use bluedog::{
    dispatch::{PrintPlugin, Registry, SharedModule},
    execute,
};
use clap::Parser;

/// The match name of the plugin every default registry carries.
const DEFAULT_PLUGIN_NAME: &str = "print_plugin";

/// The match name (and default library path) of the built-in module.
const DEFAULT_MODULE_NAME: &str = "my_module.so";

/// bluedog is a miniature interpreter for the BlueDOG toy language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The BlueDOG source file to execute.
    file: String,

    /// Loads the built-in module from this library path instead of treating
    /// its name as the path.
    #[arg(long)]
    module_library: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let script = fs::read_to_string(&args.file).unwrap_or_else(|_| {
                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                               &args.file);
                     std::process::exit(1);
                 });

    let registry = default_registry(args.module_library);

    match execute(&script, &args.file, &registry) {
        Ok(result) => println!("Result: {result}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Builds the registry every run starts from.
///
/// The default registry carries one print plugin and one shared module. When
/// `module_library` is given, the module loads that path; otherwise its name
/// doubles as the library path.
fn default_registry(module_library: Option<PathBuf>) -> Registry {
    let mut registry = Registry::new();

    registry.register_plugin(Box::new(PrintPlugin::new(DEFAULT_PLUGIN_NAME)));

    let module = match module_library {
        Some(path) => SharedModule::with_library(DEFAULT_MODULE_NAME, path),
        None => SharedModule::new(DEFAULT_MODULE_NAME),
    };
    registry.register_module(Box::new(module));

    registry
}
