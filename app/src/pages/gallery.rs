use beehive_core::Route;
use beehive_ui::{GalleryWall, Reveal};
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! {
      <Title text=Route::Gallery.title() />
      <div class="page page-gallery">
        <section class="gallery-hero dark torn-bottom">
          <div class="gallery-hero-columns" aria-hidden="true">
            {(0..6).map(|_| view! { <div class="gallery-hero-column"></div> }).collect_view()}
          </div>
          <div class="gallery-hero-text">
            <Reveal on_load=true>
              <span class="eyebrow ruled">"Highland Chronicles"</span>
              <h1 class="editorial-title">
                "ARTISANAL " <br /> <span class="accent script">"Fragments"</span>
              </h1>
            </Reveal>
            <Reveal on_load=true delay_ms=500>
              <p class="hero-subtitle">
                "A curated visual narrative of our coffee-scented sanctuaries, captured in the heart of Wayanad."
              </p>
            </Reveal>
          </div>
        </section>

        <section class="gallery-wall">
          <GalleryWall />
        </section>

        <section class="cta dark torn-top">
          <Reveal>
            <span class="cta-icon" aria-hidden="true">"📷"</span>
            <h2>"Your lens " <br /> <span class="accent script">"awaits the Hive."</span></h2>
            <a href=Route::Booking.path() class="btn btn-light">
              "BOOK YOUR STAY"
            </a>
          </Reveal>
        </section>
      </div>
    }
}
