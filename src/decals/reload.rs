//! The trailing "reload" control appended after every pass.

use bevy::prelude::*;

use super::decode::decode_image;
use super::source::{AssetOrigin, DecalSource};
use super::tooltip::Tooltip;
use super::ReloadDecals;
use crate::constants::{RELOAD_CONTROL_NAME, RELOAD_ICON_NAME, RELOAD_LABEL, RELOAD_TOOLTIP_TEXT};
use crate::host::{DecalButton, DecalPanel};
use crate::theme;

/// Click action of the reload control.
#[derive(Component, Debug, Clone, Copy)]
pub struct ReloadAction {
    pub panel: Entity,
}

/// Build the reload control from the panel's template.
///
/// Returns the control entity and whether a real icon was found.
pub fn spawn_reload_control(
    commands: &mut Commands,
    images: &mut Assets<Image>,
    source: &DecalSource,
    panel_entity: Entity,
    panel: &DecalPanel,
) -> (Entity, bool) {
    let instance = panel.template.instantiate(commands, panel_entity);

    // Keep only the text label and drop the decal binding. Which children
    // are non-text is the template's call, see `non_text_children`.
    for &child in instance.non_text_children() {
        commands.entity(child).despawn();
    }
    commands.entity(instance.root).remove::<DecalButton>();

    let icon = source.resolve(RELOAD_ICON_NAME).and_then(|resolved| {
        match &resolved.origin {
            AssetOrigin::Disk(path) => debug!("Reload icon read from {:?}", path),
            AssetOrigin::Bundled { id, materialized } => debug!(
                "Reload icon taken from bundled {} (written to disk: {})",
                id, materialized
            ),
        }
        decode_image(&resolved.bytes)
    });
    let has_icon = icon.is_some();

    let image_node = match icon {
        Some(decoded) => ImageNode::new(images.add(decoded.into_bevy_image())),
        None => ImageNode {
            color: theme::RELOAD_ERROR_TINT,
            ..default()
        },
    };

    commands.entity(instance.root).insert((
        image_node,
        Name::new(RELOAD_CONTROL_NAME),
        ReloadAction {
            panel: panel_entity,
        },
        Tooltip::new(RELOAD_TOOLTIP_TEXT),
    ));
    commands
        .entity(instance.label)
        .insert(Text::new(RELOAD_LABEL));

    (instance.root, has_icon)
}

/// Pressing the reload control requests a new pass for its panel.
pub fn handle_reload_clicks(
    query: Query<(&Interaction, &ReloadAction), Changed<Interaction>>,
    mut reloads: MessageWriter<ReloadDecals>,
) {
    for (interaction, action) in query.iter() {
        if *interaction == Interaction::Pressed {
            info!("Reloading decals...");
            reloads.write(ReloadDecals {
                panel: action.panel,
            });
        }
    }
}
