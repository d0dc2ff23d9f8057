use yew::prelude::*;

use super::icon;
use crate::catalog::{Artist, Icon, ARTISTS, ARTISTS_ANCHOR};

fn artist_card(artist: &Artist) -> Html {
    html! {
        <div key={artist.name} class="artist-card fade-in-scale">
          <div class="artist-portrait">
            <div class="avatar brutal-border">
              <img src={artist.image} alt={artist.name} referrerpolicy="no-referrer" />
            </div>
            <div class="avatar-badge brutal-border">{ icon(Icon::Star, "neon") }</div>
          </div>
          <h3>{ artist.name }</h3>
          <p class="mono bold muted">{ artist.specialty }</p>
          <div class="rating">
            <span class="bold">{ artist.rating_label() }</span>
            <span class="muted">{ artist.reviews_label() }</span>
          </div>
        </div>
    }
}

#[function_component(ArtistsSection)]
pub fn artists_section() -> Html {
    html! {
        <section id={ARTISTS_ANCHOR} class="section section-white">
          <div class="container">
            <div class="center section-head-stacked">
              <h2 class="section-title">{ "Meet the Artisans" }</h2>
              <p class="section-sub">{ "Vetted professionals with a passion for two wheels." }</p>
            </div>
            <div class="grid grid-3">
              { for ARTISTS.iter().map(artist_card) }
            </div>
          </div>
        </section>
    }
}
