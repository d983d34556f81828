//! Background layer that drifts with the page scroll.

use leptos::html::Div;
use leptos::prelude::*;

use crate::consts::PARALLAX_SPEED;
use crate::util::parallax::{translate_y, use_parallax};

#[component]
pub fn ParallaxLayer(
    #[prop(default = PARALLAX_SPEED)] speed: f64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let offset = use_parallax(target, speed);

    view! {
        <div node_ref=target class=format!("parallax {class}") style:transform=move || translate_y(offset.get())>
            {children()}
        </div>
    }
}
