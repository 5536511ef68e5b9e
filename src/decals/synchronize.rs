//! Rebuilds a panel's generated controls from the decal directory.

use std::path::{Path, PathBuf};

use bevy::prelude::*;

use super::decode::decode_file;
use super::registry::{ControlKind, GeneratedControl, GeneratedControls};
use super::reload::spawn_reload_control;
use super::source::DecalSource;
use super::{PanelReady, ReloadDecals};
use crate::constants::{DECAL_CONTROL_PREFIX, DECAL_EXTENSION, RELOAD_ICON_NAME};
use crate::host::{DecalButton, DecalPanel};

/// Outcome of one synchronization pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Controls from the previous pass that were despawned
    pub cleared: usize,
    /// Decal files turned into controls
    pub loaded: usize,
    /// Decal files that failed to decode
    pub skipped: usize,
    /// Whether the reload control got a real icon
    pub reload_icon: bool,
}

/// Decal files in `dir`, in directory enumeration order.
///
/// Only regular files with a `png` extension (any case) are listed, and the
/// reserved reload icon is left out in any case spelling.
pub fn list_decal_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Failed to read decal directory {:?}: {}", dir, e);
            return Vec::new();
        }
    };

    entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(DECAL_EXTENSION))
        })
        .filter(|path| !is_reserved_name(path))
        .collect()
}

/// Whether `path` is the reload icon, compared without regard to case.
fn is_reserved_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.eq_ignore_ascii_case(RELOAD_ICON_NAME))
}

/// Display name of a decal: the file stem.
pub fn decal_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// Run one full pass for `panel_entity`: clear, scan, rebuild, append reload.
pub fn synchronize_panel(
    commands: &mut Commands,
    registry: &mut GeneratedControls,
    images: &mut Assets<Image>,
    source: &DecalSource,
    panel_entity: Entity,
    panel: &DecalPanel,
) -> SyncReport {
    let mut report = SyncReport {
        cleared: registry.clear(commands),
        ..default()
    };

    if let Err(e) = source.ensure_dir() {
        error!("{}", e);
    }

    info!("Loading decals from {:?}...", source.dir());

    for path in list_decal_files(source.dir()) {
        let Some(decoded) = decode_file(&path) else {
            warn!("Skipping {:?}: not a decodable image", path);
            report.skipped += 1;
            continue;
        };

        let name = decal_name(&path);
        debug!(
            "Decoded decal {} ({}x{})",
            name,
            decoded.width(),
            decoded.height()
        );
        let handle = images.add(decoded.into_bevy_image());

        let instance = panel.template.instantiate(commands, panel_entity);
        let mut binding = DecalButton::default();
        binding.bind(handle.clone(), panel.placer);

        commands.entity(instance.root).insert((
            binding,
            ImageNode::new(handle),
            Name::new(format!("{}{}", DECAL_CONTROL_PREFIX, name)),
        ));
        commands.entity(instance.label).insert(Text::new(name.clone()));

        registry.append(GeneratedControl {
            entity: instance.root,
            kind: ControlKind::Decal { name, source: path },
        });
        report.loaded += 1;
    }

    let (reload, has_icon) = spawn_reload_control(commands, images, source, panel_entity, panel);
    registry.append(GeneratedControl {
        entity: reload,
        kind: ControlKind::Reload,
    });
    report.reload_icon = has_icon;

    report
}

/// Runs a pass for every panel that became ready or asked for a reload.
pub fn synchronize_panels(
    mut ready: MessageReader<PanelReady>,
    mut reloads: MessageReader<ReloadDecals>,
    mut commands: Commands,
    mut registry: ResMut<GeneratedControls>,
    mut images: ResMut<Assets<Image>>,
    source: Res<DecalSource>,
    panels: Query<&DecalPanel>,
) {
    let mut requested: Vec<Entity> = ready
        .read()
        .map(|m| m.panel)
        .chain(reloads.read().map(|m| m.panel))
        .collect();
    // Several requests in one frame collapse into one pass per panel
    requested.sort();
    requested.dedup();

    for panel_entity in requested {
        let Ok(panel) = panels.get(panel_entity) else {
            warn!("Decal panel {:?} no longer exists", panel_entity);
            continue;
        };

        let report = synchronize_panel(
            &mut commands,
            &mut registry,
            &mut images,
            &source,
            panel_entity,
            panel,
        );

        info!(
            "Loaded {} decal(s), skipped {}, replaced {} control(s)",
            report.loaded, report.skipped, report.cleared
        );
        if !report.reload_icon {
            warn!("Reload icon unavailable, showing error tint");
        }
    }
}
