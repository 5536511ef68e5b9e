//! Assets compiled into the binary.
//!
//! Lookup is by suffix so a logical name like `reload_icon.png` matches
//! whatever prefix the packaging gives the entry.

use bevy::prelude::*;

/// A named byte blob shipped with the program.
#[derive(Debug)]
pub struct BundledAsset {
    pub id: &'static str,
    pub bytes: &'static [u8],
}

/// Every asset embedded in the binary.
pub static BUNDLED_ASSETS: &[BundledAsset] = &[BundledAsset {
    id: "decal_loader/bundled/reload_icon.png",
    bytes: include_bytes!("../../assets/bundled/reload_icon.png"),
}];

/// First bundled asset whose id ends with `logical_name`.
pub fn find_bundled(
    table: &'static [BundledAsset],
    logical_name: &str,
) -> Option<&'static BundledAsset> {
    table.iter().find(|asset| asset.id.ends_with(logical_name))
}

/// Log the available ids after a failed lookup.
pub fn log_available(table: &[BundledAsset]) {
    info!("Available bundled assets:");
    for asset in table {
        info!("- {}", asset.id);
    }
}
