//! Minimal host application the decal loader plugs into.
//!
//! Spawns a tool strip panel with a placement handler, announces the panel
//! once it exists, and reacts to decal selection. None of this is rebuilt by
//! the loader; it only consumes `DecalPanel` and writes into `DecalPlacer`.

mod panel;

pub use panel::{ControlTemplate, DecalButton, DecalPanel, DecalPlacer};

use bevy::prelude::*;

use crate::decals::{DecalSystems, PanelReady};
use crate::theme;

/// Preview node showing the decal currently held by the placer.
#[derive(Component)]
struct DecalPreview;

pub struct DemoHostPlugin;

impl Plugin for DemoHostPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_demo_panel).add_systems(
            Update,
            (
                announce_panel_ready.before(DecalSystems),
                (log_button_clicks, select_decal_on_press, update_preview)
                    .chain()
                    .after(DecalSystems),
            ),
        );
    }
}

/// Spawn the UI camera, the placer and a bottom tool strip panel.
fn spawn_demo_panel(mut commands: Commands) {
    commands.spawn(Camera2d);

    let placer = commands
        .spawn((DecalPlacer::default(), Name::new("DecalPlacer")))
        .id();

    let root = commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::SpaceBetween,
                ..default()
            },
            Name::new("Canvas"),
        ))
        .id();

    commands.spawn((
        Node {
            width: Val::Px(160.0),
            height: Val::Px(160.0),
            margin: UiRect::all(Val::Px(16.0)),
            border: UiRect::all(Val::Px(2.0)),
            ..default()
        },
        BorderColor::all(theme::PREVIEW_BORDER),
        ImageNode::default(),
        Visibility::Hidden,
        DecalPreview,
        Name::new("DecalPreview"),
        ChildOf(root),
    ));

    commands.spawn((
        Node {
            width: Val::Percent(100.0),
            padding: UiRect::all(Val::Px(8.0)),
            column_gap: Val::Px(8.0),
            overflow: Overflow::scroll_x(),
            ..default()
        },
        BackgroundColor(theme::PANEL_BACKGROUND),
        DecalPanel {
            template: ControlTemplate::default(),
            placer,
        },
        Name::new("DecalButtonPanel"),
        ChildOf(root),
    ));
}

/// Tell the loader about every newly spawned panel, once.
fn announce_panel_ready(
    panels: Query<Entity, Added<DecalPanel>>,
    mut ready: MessageWriter<PanelReady>,
) {
    for panel in panels.iter() {
        debug!("Decal panel {:?} ready", panel);
        ready.write(PanelReady { panel });
    }
}

/// Log every pressed button by name.
fn log_button_clicks(query: Query<(Entity, &Interaction, Option<&Name>), Changed<Interaction>>) {
    for (entity, interaction, name) in query.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match name {
            Some(name) => info!("Button clicked: {}", name),
            None => info!("Button clicked: {:?}", entity),
        }
    }
}

/// Pressing a bound decal control hands its image to the placer.
fn select_decal_on_press(
    buttons: Query<(&Interaction, &DecalButton, Option<&Name>), Changed<Interaction>>,
    mut placers: Query<&mut DecalPlacer>,
) {
    for (interaction, button, name) in buttons.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let (Some(image), Some(placer)) = (&button.image, button.placer) else {
            continue;
        };
        let Ok(mut placer) = placers.get_mut(placer) else {
            warn!("Decal control points at a missing placer");
            continue;
        };

        placer.active = Some(image.clone());
        placer.active_name = name.map(|n| n.to_string());
        info!("Selected decal {:?}", placer.active_name);
    }
}

fn update_preview(
    placers: Query<&DecalPlacer, Changed<DecalPlacer>>,
    mut previews: Query<(&mut ImageNode, &mut Visibility), With<DecalPreview>>,
) {
    let Some(placer) = placers.iter().next() else {
        return;
    };
    for (mut image, mut visibility) in previews.iter_mut() {
        match &placer.active {
            Some(handle) => {
                image.image = handle.clone();
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Resource, Default)]
    struct Announced(Vec<Entity>);

    fn collect_ready(mut ready: MessageReader<PanelReady>, mut announced: ResMut<Announced>) {
        announced.0.extend(ready.read().map(|m| m.panel));
    }

    #[test]
    fn test_panel_ready_sent_once_per_panel() {
        let mut app = App::new();
        app.add_message::<PanelReady>()
            .init_resource::<Announced>()
            .add_systems(Update, (announce_panel_ready, collect_ready).chain());

        let placer = app.world_mut().spawn(DecalPlacer::default()).id();
        let panel = app
            .world_mut()
            .spawn(DecalPanel {
                template: ControlTemplate::default(),
                placer,
            })
            .id();

        app.update();
        app.update();
        app.update();

        assert_eq!(app.world().resource::<Announced>().0, vec![panel]);
    }

    #[test]
    fn test_pressing_decal_selects_it() {
        let mut app = App::new();
        app.add_systems(Update, select_decal_on_press);

        let placer = app.world_mut().spawn(DecalPlacer::default()).id();
        let image = Assets::<Image>::default().reserve_handle();
        let mut binding = DecalButton::default();
        binding.bind(image.clone(), placer);
        let button = app
            .world_mut()
            .spawn((Interaction::None, binding, Name::new("CustomDecal_star")))
            .id();
        app.update();

        *app.world_mut().get_mut::<Interaction>(button).unwrap() = Interaction::Pressed;
        app.update();

        let placer = app.world().get::<DecalPlacer>(placer).unwrap();
        assert_eq!(placer.active, Some(image));
        assert_eq!(placer.active_name.as_deref(), Some("CustomDecal_star"));
    }

    #[test]
    fn test_pressing_unbound_control_does_nothing() {
        let mut app = App::new();
        app.add_systems(Update, select_decal_on_press);

        let placer = app.world_mut().spawn(DecalPlacer::default()).id();
        let button = app
            .world_mut()
            .spawn((Interaction::None, DecalButton::default()))
            .id();
        app.update();

        *app.world_mut().get_mut::<Interaction>(button).unwrap() = Interaction::Pressed;
        app.update();

        assert!(app.world().get::<DecalPlacer>(placer).unwrap().active.is_none());
    }
}
