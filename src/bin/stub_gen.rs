//! Generates `.pyi` stubs for the Python bindings.
//!
//! Run with `cargo run --bin stub_gen --features python`; the stub ends up in
//! `python/<module>/<module>.pyi`.

use pyo3_stub_gen::Result;
use std::fs;
use std::path::{Path, PathBuf};
use wordfilter::pymodule::stub_info;

fn main() -> Result<()> {
    let stub = stub_info()?;
    stub.generate()?;

    for module_name in stub.modules.keys() {
        let generated = PathBuf::from(format!("{module_name}.pyi"));
        if !generated.exists() {
            continue;
        }
        let package = Path::new("python").join(module_name);
        fs::create_dir_all(&package)?;
        fs::rename(&generated, package.join(&generated))?;
    }
    Ok(())
}
