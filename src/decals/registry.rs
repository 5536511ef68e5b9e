//! The set of controls created by the decal loader.

use std::path::PathBuf;

use bevy::prelude::*;

/// What a generated control is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    /// A decal image loaded from `source`
    Decal { name: String, source: PathBuf },
    /// The trailing reload control
    Reload,
}

#[derive(Debug, Clone)]
pub struct GeneratedControl {
    pub entity: Entity,
    pub kind: ControlKind,
}

/// Ordered list of every live generated control.
///
/// Appended to during a synchronization pass and cleared at the start of the
/// next one. Only the synchronizer mutates it.
#[derive(Resource, Default, Debug)]
pub struct GeneratedControls {
    controls: Vec<GeneratedControl>,
}

impl GeneratedControls {
    /// Despawn every held control (with its children) and empty the list.
    /// Returns how many controls were despawned.
    pub fn clear(&mut self, commands: &mut Commands) -> usize {
        let count = self.controls.len();
        for control in self.controls.drain(..) {
            if let ControlKind::Decal { name, source } = &control.kind {
                debug!("Removing decal control {} ({:?})", name, source);
            }
            // The host may already have torn the panel down
            if let Ok(mut entity) = commands.get_entity(control.entity) {
                entity.despawn();
            }
        }
        count
    }

    pub fn append(&mut self, control: GeneratedControl) {
        self.controls.push(control);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedControl> {
        self.controls.iter()
    }

    #[cfg(test)]
    pub fn entities(&self) -> Vec<Entity> {
        self.controls.iter().map(|c| c.entity).collect()
    }

    /// Kinds in order, for comparing the composition of two passes.
    #[cfg(test)]
    pub fn kinds(&self) -> Vec<ControlKind> {
        self.controls.iter().map(|c| c.kind.clone()).collect()
    }
}
