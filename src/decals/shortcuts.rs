use bevy::prelude::*;

use super::source::DecalSource;
use super::ReloadDecals;
use crate::host::DecalPanel;

/// F5 reloads every decal panel, F6 opens the decal directory.
pub fn handle_decal_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    panels: Query<Entity, With<DecalPanel>>,
    source: Res<DecalSource>,
    mut reloads: MessageWriter<ReloadDecals>,
) {
    if keyboard.just_pressed(KeyCode::F5) {
        info!("Reloading decals (F5)...");
        for panel in panels.iter() {
            reloads.write(ReloadDecals { panel });
        }
    }

    if keyboard.just_pressed(KeyCode::F6) {
        open_decals_folder(&source);
    }
}

fn open_decals_folder(source: &DecalSource) {
    if let Err(e) = source.ensure_dir() {
        warn!("{}", e);
        return;
    }
    match open::that(source.dir()) {
        Ok(()) => info!("Opened decal directory {:?}", source.dir()),
        Err(e) => warn!("Failed to open decal directory {:?}: {}", source.dir(), e),
    }
}
