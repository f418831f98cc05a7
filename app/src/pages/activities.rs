use beehive_core::{Route, catalog::ACTIVITIES, trigger::Distance};
use beehive_ui::{FallbackImg, Parallax, Reveal};
use leptos::prelude::*;
use leptos_meta::Title;

use super::Stars;

const CAMPFIRE_PERKS: [(&str, &str); 4] = [
    ("🍢", "Barbeque Dinner"),
    ("⛺", "Outdoor Tents"),
    ("🎵", "Music Setup"),
    ("🛡", "Safe Environment"),
];

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    view! {
      <Title text=Route::Activities.title() />
      <div class="page page-activities">
        <section class="page-hero dark torn-bottom centered">
          <div class="page-hero-media dim">
            <FallbackImg
              src="https://beehivewayanad.com/images/horse-ride.png"
              alt="Activities"
              eager=true
            />
          </div>
          <div class="page-hero-text">
            <Reveal on_load=true>
              <h2 class="script">"Energetic"</h2>
            </Reveal>
            <Reveal on_load=true delay_ms=150>
              <h1>"Life " <span class="accent">"at Hive"</span></h1>
            </Reveal>
            <Reveal on_load=true delay_ms=300>
              <p>
                "From morning rides to starry campfires, every hour at Beehive is an opportunity to connect with the wild."
              </p>
            </Reveal>
          </div>
        </section>

        <section class="activities-grid-section">
          <Parallax distance=Distance::Pixels(-100.0) class="float-icon">
            <span aria-hidden="true">"🎨"</span>
          </Parallax>
          <div class="activities-grid">
            {ACTIVITIES
              .iter()
              .map(|act| {
                view! {
                  <Reveal at=0.9 motion="zoom" class="act-card">
                    <div class="act-image">
                      <FallbackImg src=act.image alt=act.name />
                      <p class="act-overlay">"Discover More →"</p>
                    </div>
                    <div class="act-body">
                      <h4>{act.name}</h4>
                      <p>{act.description}</p>
                      <Stars />
                    </div>
                  </Reveal>
                }
              })
              .collect_view()}
          </div>
        </section>

        <section class="campfire dark torn-top">
          <Reveal motion="left" class="campfire-visual">
            <FallbackImg src="https://beehivewayanad.com/images/Campfire.png" alt="Campfire" />
            <span class="campfire-badge" aria-hidden="true">"🎵"</span>
          </Reveal>
          <Reveal motion="right" class="campfire-text">
            <h3 class="script">"Cozy Vibes"</h3>
            <h2>"Campfire & " <span class="accent">"Melody"</span></h2>
            <p>
              "As the sun dips below the Western Ghats, the Hive comes alive with the crackle of flame and the rhythm of music. Perfect for friends, families, and late-night stories."
            </p>
            <ul class="campfire-perks">
              {CAMPFIRE_PERKS
                .into_iter()
                .map(|(icon, name)| {
                  view! {
                    <li>
                      <span class="perk-icon" aria-hidden="true">{icon}</span>
                      <span>{name}</span>
                    </li>
                  }
                })
                .collect_view()}
            </ul>
          </Reveal>
        </section>
      </div>
    }
}
