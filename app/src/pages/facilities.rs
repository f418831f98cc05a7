use beehive_core::{Route, catalog::FACILITIES, trigger::Distance};
use beehive_ui::{FallbackImg, Parallax, Reveal, stagger};
use leptos::prelude::*;
use leptos_meta::Title;

const TRAVELLER_TAGS: [&str; 4] = ["Groups", "Families", "Backpackers", "Couples"];

#[component]
pub fn FacilitiesPage() -> impl IntoView {
    view! {
      <Title text=Route::Facilities.title() />
      <div class="page page-facilities">
        <section class="page-hero dark">
          <Parallax distance=Distance::Percent(15.0) from_top=true class="page-hero-media">
            <FallbackImg
              src="https://beehivewayanad.com/images/resort.jpg"
              alt="Beehive Resort Background"
              eager=true
            />
          </Parallax>
          <div class="page-hero-text">
            <Reveal on_load=true>
              <span class="eyebrow">"Premium Sanctuaries"</span>
            </Reveal>
            <Reveal on_load=true delay_ms=100>
              <h1>"LIVE IN " <br /> <span class="accent">"STYLE"</span></h1>
            </Reveal>
            <Reveal on_load=true delay_ms=200>
              <p>
                "Set on " <strong>"six acres of coffee plantation"</strong>
                ", Beehive provides the finest resort experiences with ultimate privacy and comfort."
              </p>
            </Reveal>
          </div>
        </section>

        <section class="facilities-rooms">
          <div class="facilities-images">
            <FallbackImg src="https://beehivewayanad.com/images/Rooms1.png" alt="Hive Interior" />
            <FallbackImg src="https://beehivewayanad.com/images/f3.png" alt="Detail View" />
          </div>
          <div class="facilities-list">
            <Reveal>
              <h2>"In-Room " <br /> <span class="accent">"Facilities"</span></h2>
              <p>
                "Experience an authentic coffee plantation retreat where every detail is designed for your relaxation."
              </p>
            </Reveal>
            <ul class="amenities">
              {FACILITIES
                .iter()
                .enumerate()
                .map(|(i, item)| {
                  view! {
                    <li>
                      <Reveal at=0.9 delay_ms=stagger(i, 50) class="amenity">
                        <span class="check" aria-hidden="true">"✓"</span>
                        <span>{*item}</span>
                      </Reveal>
                    </li>
                  }
                })
                .collect_view()}
            </ul>
          </div>
        </section>

        <section class="facilities-highlights">
          <Reveal class="section-heading">
            <h3 class="eyebrow">"The Atmosphere"</h3>
            <h2>"Resort " <span class="accent">"Highlights"</span></h2>
            <p>
              "A curated collection of views from our six-acre coffee estate sanctuary in the heart of Wayanad highlands."
            </p>
          </Reveal>
          <div class="highlights-grid">
            <Reveal at=0.9 class="highlight highlight-main">
              <FallbackImg src="https://beehivewayanad.com/images/f1.png" alt="Cottage Exterior" />
              <span class="highlight-label">"VILLA EXTERIOR"</span>
            </Reveal>
            <Reveal at=0.9 delay_ms=50 class="highlight">
              <FallbackImg src="https://beehivewayanad.com/images/f3.png" alt="Resort Pathway" />
              <p class="highlight-label">"Garden Trails & Coffee Walks"</p>
            </Reveal>
            <Reveal at=0.9 delay_ms=100 class="highlight">
              <FallbackImg src="https://beehivewayanad.com/images/f4.png" alt="Evening Atmosphere" />
              <p class="highlight-label">"Golden Hour Magic"</p>
            </Reveal>
            <Reveal at=0.9 delay_ms=150 class="highlight highlight-wide">
              <FallbackImg src="https://beehivewayanad.com/images/f2.png" alt="Pond View" />
              <h4 class="highlight-label">"Natural Pond Haven"</h4>
            </Reveal>
          </div>
        </section>

        <section class="facilities-groups">
          <Reveal>
            <h2>"Space for the " <br /> <span class="accent">"Whole Colony"</span></h2>
            <p>
              "Whether you're a couple looking for a " <strong>"private cottage"</strong>
              " or a group needing a " <strong>"large villa"</strong>
              ", our design caters to every traveler's heartbeat."
            </p>
            <div class="tags">
              {TRAVELLER_TAGS.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
            </div>
          </Reveal>
        </section>
      </div>
    }
}
