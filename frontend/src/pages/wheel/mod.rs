mod spin_button;
mod wheel_canvas;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::{KeyboardEvent, MouseEvent, PointerEvent};
use yew::prelude::*;

use shared::resolve::resolve_index;
use shared::sectors::Sector;
use shared::spin::WheelState;

use crate::components::PrizeModal;
use crate::config;
use crate::styles;
use spin_button::SpinButton;
use wheel_canvas::WheelCanvas;

#[function_component(WheelPage)]
pub fn wheel_page() -> Html {
    // Authoritative rotation state, owned by this controller and threaded
    // into the renderer every frame and into the resolver once at spin end.
    let wheel = use_mut_ref(WheelState::new);

    // Mirrors of the animated values that drive re-rendering.
    let rotation = use_state(|| 0.0_f64);
    let pulse = use_state(|| 1.0_f64);
    let is_spinning = use_state(|| false);
    let outcome = use_state(|| None::<Sector>);

    let start_spin = {
        let wheel = wheel.clone();
        let rotation = rotation.clone();
        let pulse = pulse.clone();
        let is_spinning = is_spinning.clone();
        let outcome = outcome.clone();

        Callback::from(move |_: ()| {
            let mut rng = SmallRng::from_entropy();
            // Activations while a spin is in flight are silently dropped.
            let trajectory = match wheel.borrow_mut().begin_spin(&mut rng) {
                Some(trajectory) => trajectory,
                None => return,
            };

            is_spinning.set(true);
            outcome.set(None);

            let start_time = js_sys::Date::now();
            let wheel = wheel.clone();
            let rotation = rotation.clone();
            let pulse = pulse.clone();
            let is_spinning = is_spinning.clone();
            let outcome = outcome.clone();

            // Keep the frame closure alive across ticks by handing it a
            // reference to itself.
            let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
            let g = f.clone();

            *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let elapsed = js_sys::Date::now() - start_time;
                let frame = trajectory.frame_at(elapsed);

                wheel.borrow_mut().angle = frame.angle;
                rotation.set(frame.angle);
                pulse.set(frame.pulse);

                if !frame.done {
                    if let Some(window) = web_sys::window() {
                        let _ = window.request_animation_frame(
                            f.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                        );
                    }
                } else {
                    wheel.borrow_mut().settle(frame.angle);
                    is_spinning.set(false);

                    let sectors = &*config::SECTORS;
                    let index = resolve_index(frame.angle, sectors.len());
                    let sector = sectors[index].clone();
                    log::debug!(
                        "wheel settled at {:.3}, sector {} ({})",
                        frame.angle,
                        index,
                        sector.label
                    );
                    outcome.set(Some(sector));
                }
            }) as Box<dyn FnMut()>));

            if let Some(window) = web_sys::window() {
                let _ = window.request_animation_frame(
                    g.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                );
            }
        })
    };

    // Keyboard activation: Enter and Space spin the wheel.
    {
        let start_spin = start_spin.clone();
        use_effect_with((), move |_| {
            let window = gloo_utils::window();
            let listener = EventListener::new(&window, "keydown", move |event| {
                let event = event.dyn_ref::<KeyboardEvent>().unwrap_throw();
                if event.code() == "Enter" || event.code() == "Space" {
                    event.prevent_default();
                    start_spin.emit(());
                }
            });
            move || drop(listener)
        });
    }

    let on_pointer_down = {
        let start_spin = start_spin.clone();
        Callback::from(move |_: PointerEvent| start_spin.emit(()))
    };

    let on_button_click = {
        let start_spin = start_spin.clone();
        Callback::from(move |_: MouseEvent| start_spin.emit(()))
    };

    let on_modal_close = {
        let outcome = outcome.clone();
        Callback::from(move |_: ()| outcome.set(None))
    };

    html! {
        <div class="container mx-auto px-4 py-8">
            <h1 class={styles::TEXT_H1}>
                <span class="bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500">{"Prize Wheel"}</span>
            </h1>

            <div class={styles::CARD}>
                <div
                    class="relative mx-auto mb-8 flex justify-center items-center cursor-pointer"
                    onpointerdown={on_pointer_down}
                >
                    <div class="w-full max-w-[450px] mx-auto">
                        <WheelCanvas rotation={*rotation} pulse={*pulse} />
                    </div>
                </div>

                <div class="flex justify-center mt-4">
                    <div class="w-full max-w-[300px]">
                        <SpinButton is_spinning={*is_spinning} onclick={on_button_click} />
                    </div>
                </div>

                <p class={classes!("mt-6", "text-center", styles::TEXT_BODY)}>
                    {"Tap the wheel or press Enter or Space to spin."}
                </p>
            </div>

            if let Some(sector) = &*outcome {
                <PrizeModal sector={sector.clone()} on_close={on_modal_close} />
            }
        </div>
    }
}
