use std::f64::consts::{PI, TAU};

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use shared::labels;
use shared::sectors::{color_for, slice_angle, Sector};

use crate::config;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub rotation: f64,
    pub pulse: f64,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    // Latest props, readable from the resize listener without going stale.
    let latest = use_mut_ref(|| (0.0_f64, 1.0_f64));
    *latest.borrow_mut() = (props.rotation, props.pulse);

    // HiDPI fitting at mount and on every window resize. A resize mid-spin
    // redraws at whatever angle is current.
    {
        let canvas_ref = canvas_ref.clone();
        let latest = latest.clone();
        use_effect_with((), move |_| {
            let listener = canvas_ref.cast::<HtmlCanvasElement>().map(|canvas| {
                fit_hidpi(&canvas);
                let (rotation, pulse) = *latest.borrow();
                draw_wheel(&canvas, &config::SECTORS, rotation, pulse);

                let window = gloo_utils::window();
                EventListener::new(&window, "resize", move |_| {
                    fit_hidpi(&canvas);
                    let (rotation, pulse) = *latest.borrow();
                    draw_wheel(&canvas, &config::SECTORS, rotation, pulse);
                })
            });
            move || drop(listener)
        });
    }

    // Redraw whenever the controller advances the animation.
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((props.rotation, props.pulse), move |&(rotation, pulse)| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                draw_wheel(&canvas, &config::SECTORS, rotation, pulse);
            }
            || ()
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            width="450"
            height="450"
            class="w-full max-w-[450px] h-auto rounded-full shadow-lg transition-all duration-300"
        />
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> CanvasRenderingContext2d {
    canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<CanvasRenderingContext2d>()
        .unwrap()
}

fn device_ratio() -> f64 {
    gloo_utils::window().device_pixel_ratio().max(1.0)
}

/// Sizes the backing store to physical pixels while keeping every drawing
/// call in logical (CSS) coordinates via the device-scale transform.
fn fit_hidpi(canvas: &HtmlCanvasElement) {
    let ratio = device_ratio();
    let width = if canvas.client_width() > 0 {
        canvas.client_width() as f64
    } else {
        canvas.width() as f64
    };
    let height = if canvas.client_height() > 0 {
        canvas.client_height() as f64
    } else {
        canvas.height() as f64
    };
    let size = width.min(height);

    let style = canvas.style();
    let _ = style.set_property("width", &format!("{}px", size));
    let _ = style.set_property("height", &format!("{}px", size));
    canvas.set_width((size * ratio).round() as u32);
    canvas.set_height((size * ratio).round() as u32);

    let context = context_2d(canvas);
    let _ = context.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0);
}

/// Draws the whole wheel for one frame. Pure function of its inputs; all
/// animation state lives in the controller.
fn draw_wheel(canvas: &HtmlCanvasElement, sectors: &[Sector], rotation: f64, pulse: f64) {
    let context = context_2d(canvas);
    let size = (canvas.width() as f64).min(canvas.height() as f64) / device_ratio();
    let radius = size / 2.0 - 10.0;
    let center = size / 2.0;

    context.clear_rect(0.0, 0.0, size, size);
    context.save();
    let _ = context.translate(center, center);
    let _ = context.rotate(rotation);

    let count = sectors.len();
    let slice = slice_angle(count);

    for (i, sector) in sectors.iter().enumerate() {
        // Wedge
        context.begin_path();
        context.move_to(0.0, 0.0);
        let _ = context.arc(0.0, 0.0, radius, i as f64 * slice, (i + 1) as f64 * slice);
        context.close_path();
        context.set_fill_style_str(&color_for(i, count));
        context.fill();

        // Separator
        context.set_stroke_style_str("rgba(0, 0, 0, 0.35)");
        context.set_line_width(2.0);
        context.stroke();

        // Label along the wedge bisector; it rotates with the wheel.
        context.save();
        let _ = context.rotate(i as f64 * slice + slice / 2.0);
        let label_radius = radius * 0.65;
        let arc_width = (radius * 0.9 - 24.0).min(label_radius * slice * 0.9);
        let _ = context.translate(label_radius, 0.0);
        draw_label(&context, &sector.label, arc_width);
        context.restore();
    }

    draw_center_ornament(&context, rotation, pulse);
    context.restore();

    draw_pointer(&context, center, radius);
}

/// Center ornament, counter-rotated against the wheel so it stays upright,
/// with its radius breathing to the pulse factor while spinning.
fn draw_center_ornament(context: &CanvasRenderingContext2d, rotation: f64, pulse: f64) {
    context.save();
    let _ = context.rotate(-rotation);

    let radius = 34.0 * pulse;
    context.begin_path();
    let _ = context.arc(0.0, 0.0, radius, 0.0, TAU);
    context.set_fill_style_str("#0ea5e9");
    context.fill();
    context.set_line_width(4.0);
    context.set_stroke_style_str("rgba(255, 255, 255, 0.65)");
    context.stroke();

    let star_points = 8;
    let outer = radius * 0.7;
    let inner = radius * 0.3;
    context.begin_path();
    context.set_fill_style_str("#ffffff");
    for i in 0..star_points * 2 {
        let angle = i as f64 * PI / star_points as f64;
        let r = if i % 2 == 0 { outer } else { inner };
        let x = r * angle.cos();
        let y = r * angle.sin();
        if i == 0 {
            context.move_to(x, y);
        } else {
            context.line_to(x, y);
        }
    }
    context.close_path();
    context.fill();

    context.restore();
}

/// Fixed pointer at the top of the wheel, drawn outside the rotated frame.
/// Its tip marks the angle the resolver reads the outcome from.
fn draw_pointer(context: &CanvasRenderingContext2d, center: f64, radius: f64) {
    context.begin_path();
    context.move_to(center, center - radius + 18.0);
    context.line_to(center - 12.0, center - radius - 8.0);
    context.line_to(center + 12.0, center - radius - 8.0);
    context.close_path();
    context.set_fill_style_str("#f59e0b");
    context.fill();
    context.set_stroke_style_str("#e69500");
    context.set_line_width(1.5);
    context.stroke();
}

/// Fits and renders one sector label, centered on the current origin, with
/// outline, fill and a soft shadow for contrast on any sector color.
fn draw_label(context: &CanvasRenderingContext2d, label: &str, max_width: f64) {
    let layout = labels::fit_label(label, max_width, |text, font_px| {
        context.set_font(&format!("bold {}px system-ui, sans-serif", font_px));
        context
            .measure_text(text)
            .map(|metrics| metrics.width())
            .unwrap_or(f64::INFINITY)
    });

    let font_px = layout.font_px;
    context.set_font(&format!("bold {}px system-ui, sans-serif", font_px));
    context.set_line_join("round");
    context.set_text_align("center");
    context.set_text_baseline("middle");

    context.set_shadow_color("rgba(0, 0, 0, 0.3)");
    context.set_shadow_blur((font_px as f64 * 0.2).round().max(1.0));

    context.set_stroke_style_str("rgba(0, 0, 0, 0.9)");
    context.set_fill_style_str("#ffffff");
    context.set_line_width((font_px as f64 * 0.07).round().max(1.0));

    match layout.lines.as_slice() {
        [line] => {
            let _ = context.stroke_text(line, 0.0, 0.0);
            let _ = context.fill_text(line, 0.0, 0.0);
        }
        [first, second] => {
            let line_height = labels::line_height(font_px);
            let _ = context.stroke_text(first, 0.0, -line_height / 2.0);
            let _ = context.fill_text(first, 0.0, -line_height / 2.0);
            let _ = context.stroke_text(second, 0.0, line_height / 2.0);
            let _ = context.fill_text(second, 0.0, line_height / 2.0);
        }
        _ => {}
    }

    context.set_shadow_blur(0.0);
}
