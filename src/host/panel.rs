//! The host's decal panel and the template its controls are built from.

use bevy::prelude::*;

use crate::constants::CONTROL_SIZE;
use crate::theme;

/// A panel that hosts decal controls. Generated controls are spawned as its
/// children.
#[derive(Component, Debug, Clone)]
pub struct DecalPanel {
    pub template: ControlTemplate,
    /// Entity carrying the `DecalPlacer` that receives selected decals
    pub placer: Entity,
}

/// Placement handler: remembers which decal the user picked.
#[derive(Component, Debug, Default)]
pub struct DecalPlacer {
    pub active: Option<Handle<Image>>,
    pub active_name: Option<String>,
}

/// Binding between a control and the decal it places.
///
/// Spawned unbound by the template; `bind` fills both slots.
#[derive(Component, Debug, Default, Clone)]
pub struct DecalButton {
    pub image: Option<Handle<Image>>,
    pub placer: Option<Entity>,
}

impl DecalButton {
    pub fn bind(&mut self, image: Handle<Image>, placer: Entity) {
        self.image = Some(image);
        self.placer = Some(placer);
    }

    #[cfg(test)]
    pub fn is_bound(&self) -> bool {
        self.image.is_some() && self.placer.is_some()
    }
}

/// Non-text decoration spawned with every control (the selection frame).
#[derive(Component, Debug)]
pub struct ControlFrame;

/// Text label of a control.
#[derive(Component, Debug)]
pub struct ControlLabel;

/// Entities spawned by one `ControlTemplate::instantiate` call.
#[derive(Debug, Clone)]
pub struct TemplateInstance {
    pub root: Entity,
    pub label: Entity,
    non_text_children: Vec<Entity>,
}

impl TemplateInstance {
    /// Every child of `root` without a `Text` component.
    ///
    /// `instantiate` must record each such child here. Callers that strip a
    /// control down to its label rely on this list being complete.
    pub fn non_text_children(&self) -> &[Entity] {
        &self.non_text_children
    }
}

/// Recipe for a panel control.
#[derive(Debug, Clone)]
pub struct ControlTemplate {
    pub size: f32,
    pub label_font_size: f32,
}

impl Default for ControlTemplate {
    fn default() -> Self {
        Self {
            size: CONTROL_SIZE,
            label_font_size: 11.0,
        }
    }
}

impl ControlTemplate {
    /// Spawn a fresh control under `parent` with an empty bitmap slot and an
    /// unbound `DecalButton`.
    pub fn instantiate(&self, commands: &mut Commands, parent: Entity) -> TemplateInstance {
        let root = commands
            .spawn((
                Button,
                Node {
                    width: Val::Px(self.size),
                    height: Val::Px(self.size),
                    flex_direction: FlexDirection::Column,
                    justify_content: JustifyContent::FlexEnd,
                    align_items: AlignItems::Center,
                    flex_shrink: 0.0,
                    ..default()
                },
                BackgroundColor(theme::CONTROL_BACKGROUND),
                ImageNode::default(),
                DecalButton::default(),
                ChildOf(parent),
            ))
            .id();

        let frame = commands
            .spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(0.0),
                    right: Val::Px(0.0),
                    top: Val::Px(0.0),
                    bottom: Val::Px(0.0),
                    border: UiRect::all(Val::Px(1.0)),
                    ..default()
                },
                BorderColor::all(theme::CONTROL_FRAME),
                ControlFrame,
                ChildOf(root),
            ))
            .id();

        let label = commands
            .spawn((
                Text::new(""),
                TextFont {
                    font_size: self.label_font_size,
                    ..default()
                },
                TextColor(theme::CONTROL_LABEL),
                ControlLabel,
                ChildOf(root),
            ))
            .id();

        TemplateInstance {
            root,
            label,
            non_text_children: vec![frame],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_decal_button_binding() {
        let mut button = DecalButton::default();
        assert!(!button.is_bound());

        button.bind(Handle::default(), Entity::PLACEHOLDER);
        assert!(button.is_bound());
    }

    #[test]
    fn test_instantiate_spawns_label_and_frame() {
        let mut world = World::new();
        let parent = world.spawn(Node::default()).id();

        let instance = world
            .run_system_once(move |mut commands: Commands| {
                ControlTemplate::default().instantiate(&mut commands, parent)
            })
            .unwrap();

        assert_eq!(world.get::<ChildOf>(instance.root).map(|c| c.parent()), Some(parent));
        assert_eq!(world.get::<Children>(instance.root).map(|c| c.len()), Some(2));
        assert!(world.get::<Text>(instance.label).is_some());
        assert!(world.get::<ControlFrame>(instance.non_text_children()[0]).is_some());
        assert!(!world.get::<DecalButton>(instance.root).unwrap().is_bound());
    }

    #[test]
    fn test_non_text_children_covers_every_non_text_child() {
        let mut world = World::new();
        let parent = world.spawn(Node::default()).id();

        let instance = world
            .run_system_once(move |mut commands: Commands| {
                ControlTemplate::default().instantiate(&mut commands, parent)
            })
            .unwrap();

        let children: Vec<Entity> = world
            .get::<Children>(instance.root)
            .map(|c| c.to_vec())
            .unwrap_or_default();
        let recorded = instance.non_text_children();

        for child in &children {
            let is_text = world.get::<Text>(*child).is_some();
            assert_eq!(recorded.contains(child), !is_text);
        }
        assert!(recorded.iter().all(|e| children.contains(e)));
        assert!(!recorded.contains(&instance.label));
    }
}
