//! Frame drawing.
//!
//! [`render_system`] is exclusive: it takes the Raylib handle, thread and
//! [`RenderTarget`] out of the world for the duration of the frame so the
//! world can still be queried while drawing. The level is painted into the
//! canvas texture in z order under the 2D camera, the glitch overlay copies
//! blocks of that canvas around, and the canvas is finally scaled into the
//! window with letterboxing.

use std::ffi::CString;

use bevy_ecs::prelude::*;
use raylib::ffi;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::drawable::{
    BUTTON_FONT_SIZE, BUTTON_HEIGHT, BUTTON_RAISE, Drawable, Handle, MENU_HEIGHT, POINTER_HEIGHT,
    POINTER_WIDTH, RANGE_HEIGHT, RANGE_WIDTH,
};
use crate::components::glitcher::{GlitchBlock, Glitcher};
use crate::components::mapposition::MapPosition;
use crate::components::rotation::QuarterTurns;
use crate::components::sprite::Sprite;
use crate::components::trail::{Trail, TrailSegment};
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::fontstore::{FontStore, MAIN_FONT};
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::level::LevelState;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;

pub const ENDING_TEXT: &str = "THE END\n\nTHANKS FOR PLAYING";
const ENDING_FONT_SIZE: f32 = 40.0;
const LINE: f32 = 3.0;
const TEXT_SPACING: f32 = 1.0;

/// Borrowed view of whichever font is in use this frame.
struct FontRef(ffi::Font);

impl AsRef<ffi::Font> for FontRef {
    fn as_ref(&self) -> &ffi::Font {
        &self.0
    }
}

enum Paint {
    Shape {
        pos: Vector2,
        turns: QuarterTurns,
        drawable: Drawable,
    },
    Handle {
        center: Vector2,
        size: Vector2,
    },
    Trail {
        segments: Vec<TrailSegment>,
        color: Color,
    },
    Sprite {
        pos: Vector2,
        sprite: Sprite,
    },
}

fn collect_paint(world: &mut World) -> Vec<(i32, Paint)> {
    let mut items = Vec::new();

    let mut shapes = world.query::<(&MapPosition, &Drawable, Option<&QuarterTurns>, &ZIndex)>();
    for (p, drawable, turns, z) in shapes.iter(world) {
        items.push((
            z.0,
            Paint::Shape {
                pos: p.pos,
                turns: turns.copied().unwrap_or_default(),
                drawable: drawable.clone(),
            },
        ));
    }

    let mut handles = world.query::<(&MapPosition, &Handle, &BoxCollider)>();
    for (p, handle, collider) in handles.iter(world) {
        items.push((
            handle.z,
            Paint::Handle {
                center: collider.center(p.pos),
                size: handle.size,
            },
        ));
    }

    let mut trails = world.query::<&Trail>();
    for trail in trails.iter(world) {
        items.push((
            trail.z,
            Paint::Trail {
                segments: trail.segments().collect(),
                color: trail.color,
            },
        ));
    }

    let mut sprites = world.query::<(&MapPosition, &Sprite, &ZIndex)>();
    for (p, sprite, z) in sprites.iter(world) {
        items.push((
            z.0,
            Paint::Sprite {
                pos: p.pos,
                sprite: sprite.clone(),
            },
        ));
    }

    items.sort_by_key(|(z, _)| *z);
    items
}

/// Blocks to paste this frame and whether the canvas must be captured first.
fn glitch_state(world: &mut World) -> (bool, Vec<GlitchBlock>) {
    let mut glitchers = world.query::<&Glitcher>();
    let mut capture = false;
    let mut blocks = Vec::new();
    for glitcher in glitchers.iter(world) {
        if !glitcher.active {
            continue;
        }
        capture |= glitcher.capture_pending;
        blocks.extend(glitcher.blocks.iter().copied());
    }
    (capture, blocks)
}

fn debug_boxes(world: &mut World) -> Vec<Rectangle> {
    let mut colliders = world.query::<(&BoxCollider, &MapPosition)>();
    colliders
        .iter(world)
        .map(|(collider, position)| {
            let (x, y, w, h) = collider.get_aabb(position.pos);
            Rectangle::new(x, y, w, h)
        })
        .collect()
}

pub fn render_system(world: &mut World) {
    let rl = world.remove_non_send_resource::<RaylibHandle>();
    let th = world.remove_non_send_resource::<RaylibThread>();
    let target = world.remove_non_send_resource::<RenderTarget>();

    match (rl, th, target) {
        (Some(mut rl), Some(th), Some(mut target)) => {
            draw_frame(world, &mut rl, &th, &mut target);
            world.insert_non_send_resource(target);
            world.insert_non_send_resource(th);
            world.insert_non_send_resource(rl);
        }
        (rl, th, target) => {
            if let Some(rl) = rl {
                world.insert_non_send_resource(rl);
            }
            if let Some(th) = th {
                world.insert_non_send_resource(th);
            }
            if let Some(target) = target {
                world.insert_non_send_resource(target);
            }
        }
    }
}

fn draw_frame(
    world: &mut World,
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    target: &mut RenderTarget,
) {
    let items = collect_paint(world);
    let (capture, blocks) = glitch_state(world);
    let debug = world.contains_resource::<DebugMode>();
    let boxes = if debug { debug_boxes(world) } else { Vec::new() };
    let entity_count = world.query::<Entity>().iter(world).count();

    let camera = world.resource::<Camera2DRes>().0;
    let window = *world.resource::<WindowSize>();
    let ending = world
        .get_resource::<GameState>()
        .is_some_and(|s| matches!(s.get(), GameStates::Ending));
    let level = world.get_resource::<LevelState>().map(|l| l.current());

    let default_font = rl.get_font_default();
    let font = FontRef(
        match world
            .get_non_send_resource::<FontStore>()
            .and_then(|f| f.get(MAIN_FONT))
        {
            Some(f) => *f.as_ref(),
            None => *default_font.as_ref(),
        },
    );
    let textures = world.get_non_send_resource::<TextureStore>();

    let canvas_size = Vector2::new(target.game_width as f32, target.game_height as f32);
    let canvas_src = target.source_rect();
    let letterbox = window.calculate_letterbox(target.game_width, target.game_height);
    let pastes: Vec<(Rectangle, Rectangle)> = blocks
        .iter()
        .map(|b| {
            (
                target.block_source(b.source.x, b.source.y, b.size.x, b.size.y),
                Rectangle::new(b.dest.x, b.dest.y, b.size.x, b.size.y),
            )
        })
        .collect();

    let mut d = rl.begin_drawing(th);
    d.clear_background(Color::BLACK);

    {
        let mut canvas = d.begin_texture_mode(th, &mut target.texture);
        canvas.clear_background(Color::BLACK);
        {
            let mut d2 = canvas.begin_mode2D(camera);
            for (_, item) in &items {
                paint(&mut d2, &font, textures, item);
            }
            for r in &boxes {
                d2.draw_rectangle_lines_ex(*r, 1.0, Color::RED);
            }
        }
        if ending {
            centered_text(
                &mut canvas,
                &font,
                ENDING_TEXT,
                canvas_size * 0.5,
                ENDING_FONT_SIZE,
                0.0,
                Color::WHITE,
            );
        }
    }

    if capture {
        let mut snap = d.begin_texture_mode(th, &mut target.snapshot);
        snap.clear_background(Color::BLACK);
        snap.draw_texture_rec(&target.texture, canvas_src, Vector2::zero(), Color::WHITE);
    }
    if !pastes.is_empty() {
        let mut canvas = d.begin_texture_mode(th, &mut target.texture);
        for (src, dest) in &pastes {
            canvas.draw_texture_pro(
                &target.snapshot,
                *src,
                *dest,
                Vector2::zero(),
                0.0,
                Color::WHITE,
            );
        }
    }

    d.draw_texture_pro(
        &target.texture,
        canvas_src,
        letterbox,
        Vector2::zero(),
        0.0,
        Color::WHITE,
    );

    if debug {
        let fps = d.get_fps();
        let text = format!(
            "FPS: {} | Level: {} | Entities: {}",
            fps,
            level.map_or_else(|| "-".to_string(), |l| l.to_string()),
            entity_count
        );
        d.draw_text(&text, 10, 10, 10, Color::YELLOW);
        let cam_text = format!("Camera: ({:.1}, {:.1})", camera.target.x, camera.target.y);
        d.draw_text(&cam_text, 10, 24, 10, Color::YELLOW);
    }
}

fn paint<D: RaylibDraw>(d: &mut D, font: &FontRef, textures: Option<&TextureStore>, item: &Paint) {
    match item {
        Paint::Shape {
            pos,
            turns,
            drawable,
        } => paint_shape(d, font, *pos, *turns, drawable),
        Paint::Handle { center, size } => {
            d.draw_rectangle_rec(centered_rect(*center, *size), Color::WHITE);
        }
        Paint::Trail { segments, color } => {
            for seg in segments {
                let c = with_alpha(*color, seg.alpha);
                d.draw_line_ex(seg.from, seg.to, seg.width, c);
                d.draw_circle_v(seg.from, seg.width * 0.5, c);
            }
        }
        Paint::Sprite { pos, sprite } => paint_sprite(d, textures, *pos, sprite),
    }
}

fn paint_shape<D: RaylibDraw>(
    d: &mut D,
    font: &FontRef,
    pos: Vector2,
    turns: QuarterTurns,
    drawable: &Drawable,
) {
    match drawable {
        Drawable::Button {
            width,
            text,
            pressed,
        } => {
            let size = turns.rotate_size(Vector2::new(*width, BUTTON_HEIGHT));
            framed_box(d, pos, size);
            let top = if *pressed {
                pos
            } else {
                pos + turns.rotate(Vector2::new(0.0, -BUTTON_RAISE))
            };
            framed_box(d, top, size);
            if !text.is_empty() {
                centered_text(d, font, text, top, BUTTON_FONT_SIZE, turns.degrees(), Color::WHITE);
            }
        }
        Drawable::ButtonMenu => {
            framed_box(d, pos, drawable.size(turns));
            let h = MENU_HEIGHT;
            let ok = Vector2::new(-h * 0.45, 0.0);
            let no = Vector2::new(h * 0.45, 0.0);
            square(d, pos + turns.rotate(ok), h * 0.35);
            let r = h * 0.25;
            stroke(
                d,
                pos,
                turns,
                &[
                    ok + Vector2::new(-r, 0.0),
                    ok + Vector2::new(-r * 0.3, r * 0.8),
                    ok + Vector2::new(r, -r * 0.8),
                ],
            );
            square(d, pos + turns.rotate(no), h * 0.35);
            stroke(d, pos, turns, &[no + Vector2::new(-r, -r), no + Vector2::new(r, r)]);
            stroke(d, pos, turns, &[no + Vector2::new(r, -r), no + Vector2::new(-r, r)]);
        }
        Drawable::MusicRange => {
            let (w, h) = (RANGE_WIDTH, RANGE_HEIGHT);
            stroke(d, pos, turns, &[Vector2::new(-w * 0.25, 0.0), Vector2::new(w * 0.4, 0.0)]);
            for x in [-w * 0.25, w * 0.4] {
                stroke(d, pos, turns, &[Vector2::new(x, -h * 0.1), Vector2::new(x, h * 0.1)]);
            }
            // note glyph
            let x = -w * 0.35;
            let r = h * 0.3;
            d.draw_circle_v(
                pos + turns.rotate(Vector2::new(x - r * 0.45, r)),
                r * 0.5,
                Color::WHITE,
            );
            stroke(
                d,
                pos,
                turns,
                &[
                    Vector2::new(x, r),
                    Vector2::new(x, -r),
                    Vector2::new(x + r * 0.5, -r * 0.5),
                ],
            );
        }
        Drawable::Pointer => paint_pointer(d, pos),
        Drawable::Title { text, font_size } => {
            centered_text(d, font, text, pos, *font_size, 0.0, Color::WHITE);
        }
    }
}

fn paint_pointer<D: RaylibDraw>(d: &mut D, pos: Vector2) {
    let (w, h) = (POINTER_WIDTH, POINTER_HEIGHT);
    let outline = [
        Vector2::new(0.0, -h * 0.5),
        Vector2::new(-w * 0.5, 0.0),
        Vector2::new(-w * 0.1, 0.0),
        Vector2::new(-w * 0.1, h * 0.5),
        Vector2::new(w * 0.1, h * 0.5),
        Vector2::new(w * 0.1, 0.0),
        Vector2::new(w * 0.5, 0.0),
    ];
    let angle = -std::f32::consts::FRAC_PI_4;
    let pts: Vec<Vector2> = outline.iter().map(|p| pos + rotated(*p, angle)).collect();

    fill_triangle(d, pts[0], pts[1], pts[6], Color::BLACK);
    fill_triangle(d, pts[2], pts[3], pts[4], Color::BLACK);
    fill_triangle(d, pts[2], pts[4], pts[5], Color::BLACK);
    for i in 0..pts.len() {
        let next = pts[(i + 1) % pts.len()];
        d.draw_line_ex(pts[i], next, LINE, Color::WHITE);
    }
}

fn paint_sprite<D: RaylibDraw>(
    d: &mut D,
    textures: Option<&TextureStore>,
    pos: Vector2,
    sprite: &Sprite,
) {
    let dest = Rectangle::new(pos.x, pos.y, sprite.width, sprite.height);
    let origin = Vector2::new(sprite.width * 0.5, sprite.height * 0.5);
    match textures.and_then(|t| t.get(&sprite.tex_key)) {
        Some(tex) => {
            let width = if sprite.flip_h {
                -sprite.frame_size.x
            } else {
                sprite.frame_size.x
            };
            let src = Rectangle::new(sprite.offset.x, sprite.offset.y, width, sprite.frame_size.y);
            d.draw_texture_pro(tex, src, dest, origin, 0.0, Color::WHITE);
        }
        None => {
            d.draw_rectangle_lines_ex(
                centered_rect(pos, Vector2::new(sprite.width, sprite.height)),
                LINE,
                Color::WHITE,
            );
        }
    }
}

fn centered_rect(center: Vector2, size: Vector2) -> Rectangle {
    Rectangle::new(
        center.x - size.x * 0.5,
        center.y - size.y * 0.5,
        size.x,
        size.y,
    )
}

fn framed_box<D: RaylibDraw>(d: &mut D, center: Vector2, size: Vector2) {
    let rect = centered_rect(center, size);
    d.draw_rectangle_rec(rect, Color::BLACK);
    d.draw_rectangle_lines_ex(rect, LINE, Color::WHITE);
}

fn square<D: RaylibDraw>(d: &mut D, center: Vector2, r: f32) {
    d.draw_rectangle_lines_ex(
        centered_rect(center, Vector2::new(r * 2.0, r * 2.0)),
        LINE,
        Color::WHITE,
    );
}

/// Polyline through `points`, given in the shape's unrotated frame.
fn stroke<D: RaylibDraw>(d: &mut D, pos: Vector2, turns: QuarterTurns, points: &[Vector2]) {
    for pair in points.windows(2) {
        d.draw_line_ex(
            pos + turns.rotate(pair[0]),
            pos + turns.rotate(pair[1]),
            LINE,
            Color::WHITE,
        );
    }
}

fn rotated(v: Vector2, angle: f32) -> Vector2 {
    let (s, c) = angle.sin_cos();
    Vector2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Raylib culls clockwise triangles; order the vertices first.
fn fill_triangle<D: RaylibDraw>(d: &mut D, a: Vector2, b: Vector2, c: Vector2, color: Color) {
    let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    if cross > 0.0 {
        d.draw_triangle(a, c, b, color);
    } else {
        d.draw_triangle(a, b, c, color);
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color::new(
        color.r,
        color.g,
        color.b,
        (color.a as f32 * alpha.clamp(0.0, 1.0)) as u8,
    )
}

fn text_size(font: &FontRef, text: &str, size: f32) -> Vector2 {
    let Ok(c_text) = CString::new(text) else {
        return Vector2::zero();
    };
    let measured = unsafe { ffi::MeasureTextEx(font.0, c_text.as_ptr(), size, TEXT_SPACING) };
    Vector2::new(measured.x, measured.y)
}

fn centered_text<D: RaylibDraw>(
    d: &mut D,
    font: &FontRef,
    text: &str,
    center: Vector2,
    size: f32,
    rotation: f32,
    color: Color,
) {
    let measured = text_size(font, text, size);
    d.draw_text_pro(
        font,
        text,
        center,
        measured * 0.5,
        rotation,
        size,
        TEXT_SPACING,
        color,
    );
}
