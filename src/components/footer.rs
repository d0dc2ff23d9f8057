use yew::prelude::*;

use super::icon;
use crate::catalog::{Icon, BRAND, COPYRIGHT, FOOTER_BLURB, FOOTER_LINKS};

// Newsletter signup is display-only; nothing is submitted.
#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
          <div class="container footer-grid">
            <div class="footer-about">
              <div class="brand">
                { icon(Icon::Bike, "neon") }
                <span class="brand-name">{ BRAND }</span>
              </div>
              <p class="muted">{ FOOTER_BLURB }</p>
            </div>
            <div>
              <h4 class="footer-h">{ "Links" }</h4>
              <ul class="footer-links">
                { for FOOTER_LINKS.iter().map(|l| html! { <li key={*l}><a href="#">{ *l }</a></li> }) }
              </ul>
            </div>
            <div>
              <h4 class="footer-h">{ "Newsletter" }</h4>
              <div class="newsletter">
                <input type="email" placeholder="EMAIL@EXAMPLE.COM" />
                <button type="button">{ "Join" }</button>
              </div>
            </div>
          </div>
          <div class="container footer-bottom">
            <p>{ COPYRIGHT }</p>
            <div class="row">
              <a href="#">{ "Privacy Policy" }</a>
              <a href="#">{ "Terms of Service" }</a>
            </div>
          </div>
        </footer>
    }
}
