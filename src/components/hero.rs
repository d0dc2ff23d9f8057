use yew::prelude::*;

use super::scroll_callback;
use crate::catalog::{
    ARTISTS_ANCHOR, FEATURED_WORK, HERO_IMAGE, MARQUEE_REPEAT, MARQUEE_WORDS, SERVICES_ANCHOR, TAGLINE,
};

fn marquee() -> Html {
    html! {
        <div class="marquee">
          <div class="marquee-track">
            { for (0..MARQUEE_REPEAT).map(|i| html! {
                <div key={i} class="marquee-group">
                  { for MARQUEE_WORDS.iter().map(|w| html! {
                      <>
                        <span class="marquee-word">{ *w }</span>
                        <span class="marquee-star">{ "★" }</span>
                      </>
                  }) }
                </div>
            }) }
          </div>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <header class="hero">
          <div class="container hero-grid">
            <div class="hero-copy fade-in-left">
              <h1 class="hero-title">
                <span class="hero-line">{ "Your Bike" }</span>
                <span class="hero-line hero-line-inverted">{ "Is A Canvas" }</span>
              </h1>
              <p class="hero-tagline">{ TAGLINE }</p>
              <div class="row">
                <button class="brutal-btn" onclick={scroll_callback(SERVICES_ANCHOR)}>{ "Book an Artist" }</button>
                <button class="ghost-btn" onclick={scroll_callback(ARTISTS_ANCHOR)}>{ "View Gallery" }</button>
              </div>
            </div>
            <div class="hero-art fade-in-scale">
              <div class="brutal-border tilt-right">
                <img src={HERO_IMAGE} alt="Customized Bike" referrerpolicy="no-referrer" />
              </div>
              <div class="featured-badge brutal-border tilt-left">
                <p>{ FEATURED_WORK }</p>
              </div>
            </div>
          </div>
          { marquee() }
        </header>
    }
}
