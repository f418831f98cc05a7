use beehive_core::{
    Route,
    catalog::{DESTINATIONS, Destination},
    trigger::Distance,
};
use beehive_ui::{FallbackImg, Parallax, Reveal};
use leptos::prelude::*;
use leptos_meta::Title;

/// Cards alternate sides; odd positions slide in from the left.
fn card_side(index: usize) -> (&'static str, &'static str) {
    if index % 2 == 0 { ("odd", "left") } else { ("even", "right") }
}

#[component]
pub fn DestinationsPage() -> impl IntoView {
    view! {
      <Title text=Route::Destinations.title() />
      <div class="page page-destinations">
        <section class="page-hero dark torn-bottom">
          <div class="page-hero-media dim">
            <FallbackImg
              src="https://beehivewayanad.com/images/tour-places-wayanad.png"
              alt="Wayanad"
              eager=true
            />
          </div>
          <div class="page-hero-text">
            <Reveal on_load=true>
              <h2 class="script">"Wanderer's"</h2>
            </Reveal>
            <Reveal on_load=true delay_ms=150>
              <h1>"The " <span class="accent">"Circuit"</span></h1>
            </Reveal>
            <Reveal on_load=true delay_ms=300>
              <p>
                "Explore the soul of Wayanad from the center of its most iconic heritage sites."
              </p>
            </Reveal>
          </div>
        </section>

        <section class="destinations-list">
          {DESTINATIONS
            .iter()
            .enumerate()
            .map(|(i, dest)| view! { <DestinationCard index=i dest=dest /> })
            .collect_view()}
        </section>

        <section class="cta cta-amber torn-top">
          <Reveal>
            <span class="cta-icon" aria-hidden="true">"🧭"</span>
            <h2>"Ready to roam?"</h2>
            <p>
              "Wayanad is a district of curves, peaks, and ancient secrets. Begin your journey at the Hive and let the mountains guide your path."
            </p>
            <a href=Route::Booking.path() class="btn btn-dark">
              "BOOK YOUR BASECAMP"
            </a>
          </Reveal>
        </section>
      </div>
    }
}

#[component]
fn DestinationCard(index: usize, dest: &'static Destination) -> impl IntoView {
    let (parity, motion) = card_side(index);

    view! {
      <Reveal at=0.85 motion=motion class=format!("dest-card {parity}")>
        <div class="dest-media">
          <Parallax distance=Distance::Pixels(-40.0) class="dest-frame">
            <FallbackImg src=dest.image alt=dest.name />
          </Parallax>
          {dest
            .distance
            .map(|distance| {
              view! {
                <div class="dest-distance">
                  <span class="pin" aria-hidden="true">"📍"</span>
                  <div>
                    <p class="eyebrow">"Distance"</p>
                    <p class="dest-distance-value">{distance}</p>
                  </div>
                </div>
              }
            })}
        </div>
        <div class="dest-body">
          <p class="dest-site">{format!("Site {:02}", index + 1)}</p>
          <h2>{dest.name}</h2>
          <p>{dest.description}</p>
          <a href=dest.directions_url() target="_blank" rel="noreferrer" class="btn btn-dark">
            "GET DIRECTIONS ↗"
          </a>
        </div>
      </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_alternate_sides() {
        assert_eq!(card_side(0), ("odd", "left"));
        assert_eq!(card_side(1), ("even", "right"));
        assert_eq!(card_side(4), ("odd", "left"));
    }
}
