use nannou::prelude::*;

use crate::animator::TrailAnimator;
use crate::canvas::{DisplayList, DrawCommand, Hsb};

// 画面サイズ / Window size
const WINDOW_WIDTH: u32 = 1200;
const WINDOW_HEIGHT: u32 = 800;

// フレームレート表示の幅 / Width of the frame-rate text box
const TEXT_BOX_WIDTH: f32 = 200.0;

/// Entry point for the ribbon trail.
///
/// Drag with the left mouse button to draw; releasing the button fades the
/// trail out. `R` restarts, `S` stops or resumes, `C` fades the trail.
pub fn run() {
    nannou::app(model).update(update).run();
}

// モデル / Model
// アニメーターと、update で記録して view で再生する描画コマンド列
// The animator plus the draw commands recorded in `update` and replayed in `view`.
struct Model {
    animator: TrailAnimator,
    frame: DisplayList,
}

fn now(app: &App) -> f64 {
    app.duration.since_start.as_secs_f64()
}

fn model(app: &App) -> Model {
    // ディスプレイのリフレッシュに同期 / Sync to the display refresh.
    app.set_loop_mode(LoopMode::RefreshSync);

    app.new_window()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Ribbon Trail")
        .view(view)
        .mouse_pressed(mouse_pressed)
        .mouse_moved(mouse_moved)
        .mouse_released(mouse_released)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    let mut animator = TrailAnimator::default();
    animator.start(now(app));

    Model {
        animator,
        frame: DisplayList::new(),
    }
}

// 更新 / Update
// 停止中は最後のフレームをそのまま表示する
// While stopped, the last recorded frame stays on screen.
fn update(app: &App, model: &mut Model, _update: Update) {
    if model.animator.is_running() {
        model.animator.frame_handler(now(app), &mut model.frame);
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model
            .animator
            .seed_anchor(app.mouse.x as f64, app.mouse.y as f64);
    }
}

fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    if app.mouse.buttons.left().is_down() {
        model.animator.add_point(pos.x as f64, pos.y as f64);
    }
}

fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.animator.request_clean();
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::R => model.animator.start(now(app)),
        Key::S if model.animator.is_running() => model.animator.stop(),
        Key::S => model.animator.resume(now(app)),
        Key::C => model.animator.request_clean(),
        _ => {}
    }
}

// 描画 / Render
// 記録したコマンドを順に nannou の Draw へ流す
// Replay the recorded commands onto nannou's `Draw`.
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let wr = app.window_rect();

    for command in model.frame.commands() {
        match command {
            DrawCommand::Clear => {
                draw.background().color(BLACK);
            }
            DrawCommand::Line {
                from,
                to,
                width,
                color,
            } => {
                let (h, s, v) = hsv_of(color);
                draw.line()
                    .start(pt2(from.x as f32, from.y as f32))
                    .end(pt2(to.x as f32, to.y as f32))
                    .weight(*width as f32)
                    .hsv(h, s, v);
            }
            DrawCommand::Dot {
                at,
                diameter,
                color,
            } => {
                let (h, s, v) = hsv_of(color);
                let d = *diameter as f32;
                draw.ellipse()
                    .x_y(at.x as f32, at.y as f32)
                    .w_h(d, d)
                    .hsv(h, s, v);
            }
            DrawCommand::Text {
                text,
                at,
                size,
                color,
            } => {
                // 左上からのオフセットを中心原点の座標へ変換
                // Offsets are from the top-left corner; nannou's origin is the centre.
                let x = wr.left() + at.x as f32 + TEXT_BOX_WIDTH * 0.5;
                let y = wr.top() - at.y as f32;
                let (h, s, v) = hsv_of(color);
                draw.text(text)
                    .x_y(x, y)
                    .w(TEXT_BOX_WIDTH)
                    .left_justify()
                    .font_size(*size)
                    .hsv(h, s, v);
            }
        }
    }

    draw.to_frame(app, &frame).unwrap();
}

fn hsv_of(color: &Hsb) -> (f32, f32, f32) {
    (
        color.hue_turns() as f32,
        color.saturation as f32,
        color.brightness as f32,
    )
}
