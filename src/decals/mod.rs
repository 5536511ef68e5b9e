mod bundled;
mod decode;
mod error;
mod registry;
mod reload;
mod shortcuts;
mod source;
mod synchronize;
mod tooltip;

#[cfg(test)]
mod test_support;

use bevy::prelude::*;

use crate::config::{AppConfig, ConfigLoaded};
use registry::GeneratedControls;
use source::DecalSource;
use tooltip::TooltipFontCache;

/// Sent by the host once a decal panel is ready to receive controls.
#[derive(Message, Debug, Clone, Copy)]
pub struct PanelReady {
    pub panel: Entity,
}

/// Request a fresh synchronization pass for a panel.
#[derive(Message, Debug, Clone, Copy)]
pub struct ReloadDecals {
    pub panel: Entity,
}

/// System set containing every decal loader system (runs in `Update`).
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecalSystems;

pub struct DecalLoaderPlugin;

impl Plugin for DecalLoaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GeneratedControls>()
            .init_resource::<TooltipFontCache>()
            .add_message::<PanelReady>()
            .add_message::<ReloadDecals>()
            .add_systems(Startup, init_decal_source.after(ConfigLoaded))
            .add_systems(
                Update,
                (
                    reload::handle_reload_clicks,
                    shortcuts::handle_decal_shortcuts,
                    synchronize::synchronize_panels,
                    tooltip::update_tooltips,
                    tooltip::despawn_orphaned_tooltip_labels,
                )
                    .chain()
                    .in_set(DecalSystems),
            );
    }
}

/// Point the decal source at the configured directory and make sure it exists.
fn init_decal_source(mut commands: Commands, config: Res<AppConfig>) {
    let source = DecalSource::new(config.decals_dir());
    if let Err(e) = source.ensure_dir() {
        error!("{}", e);
    }
    commands.insert_resource(source);
}
