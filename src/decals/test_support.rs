//! Helpers shared by the decal tests.

use std::io::Cursor;
use std::path::Path;

use bevy::prelude::*;
use image::{ImageFormat, Rgba, RgbaImage};

use super::bundled::BundledAsset;
use super::registry::GeneratedControls;
use super::source::DecalSource;
use super::synchronize::synchronize_panels;
use super::{PanelReady, ReloadDecals};
use crate::host::{ControlTemplate, DecalPanel, DecalPlacer};

/// Encode a solid-color PNG.
pub fn png_bytes(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(color));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

/// Write a solid-color PNG into `dir`.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
    std::fs::write(dir.join(name), png_bytes(width, height, [200, 100, 50, 255])).unwrap();
}

/// Headless app with just enough wiring to run synchronization passes.
pub fn sync_app(dir: &Path, bundled: &'static [BundledAsset]) -> App {
    let mut app = App::new();
    app.init_resource::<Assets<Image>>()
        .init_resource::<GeneratedControls>()
        .add_message::<PanelReady>()
        .add_message::<ReloadDecals>()
        .insert_resource(DecalSource::new(dir.to_path_buf()).with_bundled(bundled))
        .add_systems(Update, synchronize_panels);
    app
}

/// Spawn a panel with a default template and its placer.
pub fn spawn_panel(app: &mut App) -> Entity {
    let world = app.world_mut();
    let placer = world.spawn(DecalPlacer::default()).id();
    world
        .spawn((
            Node::default(),
            DecalPanel {
                template: ControlTemplate::default(),
                placer,
            },
        ))
        .id()
}

/// Ask for a reload of `panel` and run one frame.
pub fn reload(app: &mut App, panel: Entity) {
    app.world_mut().write_message(ReloadDecals { panel });
    app.update();
}
