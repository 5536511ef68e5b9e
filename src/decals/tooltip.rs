//! Hover tooltip for generated controls.
//!
//! The floating label is created on the first hover, hidden (not despawned)
//! when the pointer leaves, and despawned once its owner is gone.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::{TOOLTIP_FONT_SIZE, TOOLTIP_HEIGHT, TOOLTIP_OFFSET, TOOLTIP_WIDTH};
use crate::theme;

/// Attach to any `Interaction` entity to show `text` while hovered.
#[derive(Component, Debug)]
pub struct Tooltip {
    pub text: String,
    label: Option<Entity>,
    visible: bool,
}

impl Tooltip {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: None,
            visible: false,
        }
    }

    /// The floating label, once created.
    #[cfg(test)]
    pub fn label(&self) -> Option<Entity> {
        self.label
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Marker on the floating label node.
#[derive(Component, Debug)]
pub struct TooltipLabel {
    pub owner: Entity,
}

/// Font shared by every tooltip, resolved on first use.
#[derive(Resource, Default, Debug)]
pub struct TooltipFontCache {
    font: Option<Handle<Font>>,
}

impl TooltipFontCache {
    /// The cached font, or the first custom font already in use by some text,
    /// or Bevy's built-in font.
    pub fn get_or_resolve<'a>(
        &mut self,
        in_use: impl IntoIterator<Item = &'a TextFont>,
    ) -> Handle<Font> {
        if let Some(font) = &self.font {
            return font.clone();
        }

        let builtin = Handle::<Font>::default();
        let font = in_use
            .into_iter()
            .map(|text_font| text_font.font.clone())
            .find(|font| *font != builtin)
            .unwrap_or(builtin);
        debug!("Resolved tooltip font: {:?}", font);

        self.font = Some(font.clone());
        font
    }

    #[cfg(test)]
    pub fn is_resolved(&self) -> bool {
        self.font.is_some()
    }
}

/// Top-left corner of the label for a pointer at `cursor`.
pub fn tooltip_position(cursor: Vec2) -> Vec2 {
    cursor + Vec2::new(TOOLTIP_OFFSET.0, TOOLTIP_OFFSET.1)
}

fn spawn_tooltip_label(
    commands: &mut Commands,
    owner: Entity,
    text: &str,
    font: Handle<Font>,
    position: Vec2,
) -> Entity {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(position.x),
                top: Val::Px(position.y),
                width: Val::Px(TOOLTIP_WIDTH),
                height: Val::Px(TOOLTIP_HEIGHT),
                padding: UiRect::all(Val::Px(5.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(theme::TOOLTIP_BACKGROUND),
            GlobalZIndex(i32::MAX),
            Visibility::Visible,
            Name::new("CustomTooltip"),
            TooltipLabel { owner },
        ))
        .with_child((
            Text::new(text),
            TextFont {
                font,
                font_size: TOOLTIP_FONT_SIZE,
                ..default()
            },
            TextColor(theme::TOOLTIP_TEXT),
        ))
        .id()
}

/// Pointer enter (`Hovered`/`Pressed`) shows the label, pointer exit hides it.
pub fn update_tooltips(
    mut commands: Commands,
    mut tooltips: Query<(Entity, &Interaction, &mut Tooltip), Changed<Interaction>>,
    mut labels: Query<(&mut Node, &mut Visibility), With<TooltipLabel>>,
    fonts: Query<&TextFont>,
    mut font_cache: ResMut<TooltipFontCache>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let cursor = windows.single().ok().and_then(|w| w.cursor_position());

    for (owner, interaction, mut tooltip) in tooltips.iter_mut() {
        if *interaction == Interaction::None {
            if tooltip.visible
                && let Some(label) = tooltip.label
                && let Ok((_, mut visibility)) = labels.get_mut(label)
            {
                *visibility = Visibility::Hidden;
            }
            tooltip.visible = false;
            continue;
        }

        let existing = match tooltip.label {
            Some(label) => labels.get_mut(label).ok(),
            None => None,
        };
        match existing {
            Some((mut node, mut visibility)) => {
                if let Some(cursor) = cursor {
                    let position = tooltip_position(cursor);
                    node.left = Val::Px(position.x);
                    node.top = Val::Px(position.y);
                }
                *visibility = Visibility::Visible;
            }
            None => {
                let font = font_cache.get_or_resolve(fonts.iter());
                let position = tooltip_position(cursor.unwrap_or(Vec2::ZERO));
                let label =
                    spawn_tooltip_label(&mut commands, owner, &tooltip.text, font, position);
                tooltip.label = Some(label);
            }
        }
        tooltip.visible = true;
    }
}

/// Despawn labels whose owning control is gone, whatever their visibility.
pub fn despawn_orphaned_tooltip_labels(
    mut commands: Commands,
    labels: Query<(Entity, &TooltipLabel)>,
    owners: Query<&Tooltip>,
) {
    for (entity, label) in labels.iter() {
        let owned = owners
            .get(label.owner)
            .is_ok_and(|tooltip| tooltip.label == Some(entity));
        if !owned {
            commands.entity(entity).despawn();
        }
    }
}
