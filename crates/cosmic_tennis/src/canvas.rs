//! Presents the per-frame [`Scene`] through pooled Bevy entities.
//!
//! The scene is in screen space (origin top-left, y down); the 2D camera is
//! centered with y up. Rects become sprites, circles share one unit mesh
//! scaled by radius, text becomes absolutely positioned UI nodes. Draw order
//! maps to z so later commands land on top.

use std::collections::HashMap;

use bevy::prelude::*;
use tennis_sim::{Scene, Shape, scene};

use crate::ActiveGame;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// z distance between consecutive draw commands.
const Z_STEP: f32 = 0.01;

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct CanvasPlugin;

impl Plugin for CanvasPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_canvas)
            .add_systems(Update, present_scene);
    }
}

#[derive(Component)]
struct CanvasRect;

#[derive(Component)]
struct CanvasCircle;

#[derive(Component)]
struct CanvasText;

/// Entity pools, grown on demand and never shrunk. Slots past the current
/// frame's usage are hidden.
#[derive(Resource)]
struct Canvas {
    surface: Vec2,
    unit_circle: Handle<Mesh>,
    materials: HashMap<scene::Color, Handle<ColorMaterial>>,
    rects: Vec<Entity>,
    circles: Vec<Entity>,
    texts: Vec<(Entity, f32)>,
}

impl Canvas {
    fn material(
        &mut self,
        color: scene::Color,
        assets: &mut Assets<ColorMaterial>,
    ) -> Handle<ColorMaterial> {
        self.materials
            .entry(color)
            .or_insert_with(|| assets.add(ColorMaterial::from_color(to_bevy_color(color))))
            .clone()
    }
}

fn setup_canvas(
    mut commands: Commands,
    game: Res<ActiveGame>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    commands.spawn(Camera2d);

    let config = game.config();
    commands.insert_resource(Canvas {
        surface: Vec2::new(config.screen_width, config.screen_height),
        unit_circle: meshes.add(Circle::new(1.0)),
        materials: HashMap::new(),
        rects: Vec::new(),
        circles: Vec::new(),
        texts: Vec::new(),
    });
}

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

type RectQuery<'w, 's> = Query<
    'w,
    's,
    (&'static mut Sprite, &'static mut Transform, &'static mut Visibility),
    (With<CanvasRect>, Without<CanvasCircle>, Without<CanvasText>),
>;

type CircleQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static mut MeshMaterial2d<ColorMaterial>,
        &'static mut Transform,
        &'static mut Visibility,
    ),
    (With<CanvasCircle>, Without<CanvasRect>, Without<CanvasText>),
>;

type TextQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static mut Text,
        &'static mut TextColor,
        &'static mut Node,
        &'static mut Visibility,
    ),
    (With<CanvasText>, Without<CanvasRect>, Without<CanvasCircle>),
>;

#[derive(Default)]
struct Usage {
    rects: usize,
    circles: usize,
    texts: usize,
}

#[allow(clippy::too_many_arguments)]
fn present_scene(
    mut commands: Commands,
    game: Res<ActiveGame>,
    time: Res<Time>,
    mut canvas: ResMut<Canvas>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut rects: RectQuery,
    mut circles: CircleQuery,
    mut texts: TextQuery,
) {
    let scene = Scene::compose(&game, time.elapsed());
    let surface = canvas.surface;
    let mut used = Usage::default();

    for (index, command) in scene.commands().iter().enumerate() {
        let z = index as f32 * Z_STEP;
        match &command.shape {
            Shape::Rect { rect, color } => {
                let slot = used.rects;
                used.rects += 1;
                let center = to_world(
                    rect.x + rect.width / 2.0,
                    rect.y + rect.height / 2.0,
                    surface,
                );
                let transform = Transform::from_xyz(center.x, center.y, z);
                let size = Vec2::new(rect.width, rect.height);
                let color = to_bevy_color(*color);

                match canvas.rects.get(slot) {
                    Some(&entity) => {
                        if let Ok((mut sprite, mut current, mut visibility)) = rects.get_mut(entity) {
                            sprite.color = color;
                            sprite.custom_size = Some(size);
                            *current = transform;
                            visibility.set_if_neq(Visibility::Visible);
                        }
                    }
                    None => {
                        let entity = commands
                            .spawn((
                                CanvasRect,
                                Sprite {
                                    color,
                                    custom_size: Some(size),
                                    ..default()
                                },
                                transform,
                                Visibility::Visible,
                            ))
                            .id();
                        canvas.rects.push(entity);
                    }
                }
            }
            Shape::Circle {
                center,
                radius,
                color,
            } => {
                let slot = used.circles;
                used.circles += 1;
                let center = to_world(center.x, center.y, surface);
                let transform = Transform::from_xyz(center.x, center.y, z)
                    .with_scale(Vec3::new(*radius, *radius, 1.0));
                let material = canvas.material(*color, &mut materials);

                match canvas.circles.get(slot) {
                    Some(&entity) => {
                        if let Ok((mut current_material, mut current, mut visibility)) =
                            circles.get_mut(entity)
                        {
                            if current_material.0 != material {
                                current_material.0 = material;
                            }
                            *current = transform;
                            visibility.set_if_neq(Visibility::Visible);
                        }
                    }
                    None => {
                        let entity = commands
                            .spawn((
                                CanvasCircle,
                                Mesh2d(canvas.unit_circle.clone()),
                                MeshMaterial2d(material),
                                transform,
                                Visibility::Visible,
                            ))
                            .id();
                        canvas.circles.push(entity);
                    }
                }
            }
            Shape::Text {
                content,
                origin,
                size,
                color,
            } => {
                let slot = used.texts;
                used.texts += 1;
                let color = to_bevy_color(*color);

                match canvas.texts.get(slot).copied() {
                    Some((entity, font_size)) => {
                        if let Ok((mut text, mut text_color, mut node, mut visibility)) =
                            texts.get_mut(entity)
                        {
                            if **text != *content {
                                **text = content.clone();
                            }
                            text_color.0 = color;
                            node.left = Val::Px(origin.x);
                            node.top = Val::Px(origin.y);
                            visibility.set_if_neq(Visibility::Visible);
                        }
                        if font_size != *size {
                            commands
                                .entity(entity)
                                .insert(TextFont::from_font_size(*size));
                            canvas.texts[slot].1 = *size;
                        }
                    }
                    None => {
                        let entity = commands
                            .spawn((
                                CanvasText,
                                Text::new(content.clone()),
                                TextFont::from_font_size(*size),
                                TextColor(color),
                                Node {
                                    position_type: PositionType::Absolute,
                                    top: Val::Px(origin.y),
                                    left: Val::Px(origin.x),
                                    ..default()
                                },
                                Visibility::Visible,
                            ))
                            .id();
                        canvas.texts.push((entity, *size));
                    }
                }
            }
        }
    }

    for &entity in canvas.rects.iter().skip(used.rects) {
        if let Ok((_, _, mut visibility)) = rects.get_mut(entity) {
            visibility.set_if_neq(Visibility::Hidden);
        }
    }
    for &entity in canvas.circles.iter().skip(used.circles) {
        if let Ok((_, _, mut visibility)) = circles.get_mut(entity) {
            visibility.set_if_neq(Visibility::Hidden);
        }
    }
    for &(entity, _) in canvas.texts.iter().skip(used.texts) {
        if let Ok((_, _, _, mut visibility)) = texts.get_mut(entity) {
            visibility.set_if_neq(Visibility::Hidden);
        }
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Screen space (top-left origin, y down) to world space (centered, y up).
fn to_world(x: f32, y: f32, surface: Vec2) -> Vec2 {
    Vec2::new(x - surface.x / 2.0, surface.y / 2.0 - y)
}

fn to_bevy_color(color: scene::Color) -> Color {
    Color::srgb_u8(color.r, color.g, color.b)
}
