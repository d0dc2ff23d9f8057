use yew::prelude::*;

use super::icon;
use crate::catalog::{Service, SERVICES, SERVICES_ANCHOR};

#[derive(Properties, PartialEq)]
pub struct ServicesSectionProps {
    /// Receives the id of the service whose "Book Now" was clicked.
    pub on_book: Callback<String>,
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: &'static Service,
    index: usize,
    on_book: Callback<String>,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = props.service;
    let onclick = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(service.id.to_string()))
    };
    // staggered entrance, same as the card order
    let style = format!("animation-delay: {}ms;", props.index * 100);

    html! {
        <div class="service-card brutal-border fade-in-up" {style}>
          <div class="service-image">
            <img src={service.image} alt={service.title} referrerpolicy="no-referrer" />
          </div>
          <div class="service-body">
            <div class="service-icon brutal-border">{ icon(service.icon, "") }</div>
            <h3>{ service.title }</h3>
            <p class="service-desc">{ service.description }</p>
            <div class="service-foot">
              <span class="mono bold">{ service.price }</span>
              <button class="link-btn" {onclick}>{ "Book Now" }</button>
            </div>
          </div>
        </div>
    }
}

#[function_component(ServicesSection)]
pub fn services_section(props: &ServicesSectionProps) -> Html {
    html! {
        <section id={SERVICES_ANCHOR} class="section section-grey">
          <div class="container">
            <div class="section-head">
              <div>
                <h2 class="section-title">{ "Our Services" }</h2>
                <p class="section-sub">{ "Choose your style. Our artists bring the studio to your garage." }</p>
              </div>
              <div class="pill brutal-border">{ format!("{} Styles Available", SERVICES.len()) }</div>
            </div>
            <div class="grid grid-4">
              { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                  <ServiceCard key={service.id} {service} {index} on_book={props.on_book.clone()} />
              }) }
            </div>
          </div>
        </section>
    }
}
