use gloo_events::EventListener;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use shared::sectors::Sector;

#[derive(Properties, PartialEq)]
pub struct PrizeModalProps {
    pub sector: Sector,
    pub on_close: Callback<()>,
}

/// Dialog shown once per completed spin with the resolved outcome. Closes on
/// the button, a backdrop click or Escape.
#[function_component(PrizeModal)]
pub fn prize_modal(props: &PrizeModalProps) -> Html {
    let card_ref = use_node_ref();

    // Lock page scrolling while the dialog is open.
    use_effect_with((), move |_| {
        let body = gloo_utils::body();
        let _ = body.style().set_property("overflow", "hidden");
        move || {
            let _ = body.style().set_property("overflow", "");
        }
    });

    // Move focus onto the card so Escape works right away.
    {
        let card_ref = card_ref.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                if let Some(card) = card_ref.cast::<HtmlElement>() {
                    let _ = card.focus();
                }
            });
            || ()
        });
    }

    {
        let on_close = props.on_close.clone();
        use_effect_with((), move |_| {
            let window = gloo_utils::window();
            let listener = EventListener::new(&window, "keydown", move |event| {
                let event = event.dyn_ref::<KeyboardEvent>().unwrap_throw();
                if event.key() == "Escape" {
                    on_close.emit(());
                }
            });
            move || drop(listener)
        });
    }

    let (title, subtitle) = if props.sector.is_win {
        (props.sector.label.clone(), "Congratulations!".to_string())
    } else {
        ("No win".to_string(), "Try again!".to_string())
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_button_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            class="fixed inset-0 z-[1100] bg-black/90 backdrop-blur-md overflow-y-auto"
            onclick={on_backdrop_click}
            role="dialog"
            aria-modal="true"
        >
            <div class="flex min-h-full items-end justify-center p-4 text-center sm:items-center sm:p-0">
                <div
                    ref={card_ref}
                    tabindex="-1"
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                    class="relative transform overflow-hidden rounded-lg bg-gray-900 text-center shadow-xl transition-all sm:my-8 sm:w-full sm:max-w-md focus:outline-none"
                >
                    <div class="p-8">
                        if props.sector.is_win {
                            <div class="text-5xl mb-4">{"\u{1F389}"}</div>
                        } else {
                            <div class="text-5xl mb-4">{"\u{1F615}"}</div>
                        }
                        <h3 class="text-2xl font-semibold text-white mb-2">{title}</h3>
                        <p class="text-gray-400">{subtitle}</p>
                    </div>

                    <div class="bg-gray-800 px-4 py-3 sm:flex sm:flex-row-reverse sm:px-6">
                        <button
                            type="button"
                            onclick={on_button_click}
                            class="inline-flex w-full justify-center rounded-lg px-4 py-2 text-sm font-semibold text-white bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 sm:w-auto transition-all duration-300"
                        >
                            {"Close"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
