//! Public landing page.

use leptos::prelude::*;

use crate::components::Card;
use crate::components::parallax_layer::ParallaxLayer;
use crate::components::reveal::{Reveal, StaggeredCards};
use crate::components::swipe_carousel::SwipeCarousel;
use crate::consts::AUTH_ROUTE;

fn featured_instructors() -> Vec<Card> {
    vec![
        Card::new("Marine biology specialists", "Learn to read the reef with instructors trained in marine science."),
        Card::new("Technical diving", "Trimix, sidemount and cave courses with certified tech instructors."),
        Card::new("First breaths", "Patient open-water instructors for your very first descent."),
        Card::new("Underwater photography", "Dial in buoyancy and light with working photographers."),
    ]
}

fn featured_resorts() -> Vec<Card> {
    vec![
        Card::new("Liveaboards", "Week-long trips to remote walls and pinnacles."),
        Card::new("House reefs", "Shore entries minutes from your room, day or night."),
        Card::new("Cold water", "Kelp forests, fjords and drysuit-ready operators."),
    ]
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="hero">
                <ParallaxLayer class="hero__backdrop">
                    <div class="hero__waves" aria-hidden="true"></div>
                </ParallaxLayer>
                <div class="hero__content">
                    <h1>"Find your next dive"</h1>
                    <p>"Instructors and resorts, reviewed by divers."</p>
                    <a class="hero__cta" href=AUTH_ROUTE>
                        "Sign in"
                    </a>
                </div>
            </section>

            <Reveal class="home-section">
                <h2>"Dive with the right instructor"</h2>
            </Reveal>
            <StaggeredCards cards=featured_instructors()/>

            <Reveal class="home-section" restartable=true>
                <h2>"Stay where the diving is"</h2>
            </Reveal>
            <SwipeCarousel slides=featured_resorts()/>
        </div>
    }
}
