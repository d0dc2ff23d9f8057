use yew::prelude::*;

use crate::catalog::{PROCESS_ANCHOR, PROCESS_STEPS};

#[function_component(ProcessSection)]
pub fn process_section() -> Html {
    html! {
        <section id={PROCESS_ANCHOR} class="section section-neon">
          <div class="container">
            <h2 class="section-title center">{ "The Process" }</h2>
            <div class="grid grid-3">
              { for PROCESS_STEPS.iter().map(|p| html! {
                  <div key={p.label} class="process-card brutal-border">
                    <span class="process-label">{ p.label }</span>
                    <h3>{ p.title }</h3>
                    <p>{ p.description }</p>
                  </div>
              }) }
            </div>
          </div>
        </section>
    }
}
