pub mod styles;
pub mod components;
pub mod pages;
pub mod config;

use yew::prelude::*;

use crate::pages::wheel::WheelPage;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class={styles::CONTAINER}>
            <WheelPage />
        </div>
    }
}
