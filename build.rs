//! Embeds build metadata shown by `glowctl version`.

use vergen_gix::{BuildBuilder, CargoBuilder, Emitter, GixBuilder, RustcBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // VERGEN_BUILD_TIMESTAMP
    let build = BuildBuilder::default().build_timestamp(true).build()?;
    // VERGEN_CARGO_TARGET_TRIPLE
    let cargo = CargoBuilder::default().target_triple(true).build()?;
    // VERGEN_GIT_SHA, VERGEN_GIT_DIRTY
    let gix = GixBuilder::default().sha(true).dirty(true).build()?;
    // VERGEN_RUSTC_SEMVER
    let rustc = RustcBuilder::default().semver(true).build()?;

    Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&cargo)?
        .add_instructions(&gix)?
        .add_instructions(&rustc)?
        .emit()?;

    Ok(())
}
