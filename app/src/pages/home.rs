use beehive_core::{
    Route,
    catalog::{DESTINATIONS, Destination},
    trigger::Distance,
};
use beehive_ui::{FallbackImg, Parallax, Reveal, stagger};
use leptos::{html::Div, prelude::*};
use leptos_meta::Title;

use super::Stars;

struct Step {
    number: &'static str,
    title: &'static str,
    description: &'static str,
    tone: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        number: "01",
        title: "Pick Destination",
        description: "Explore hundreds of world class destinations through our portal.",
        tone: "emerald",
    },
    Step {
        number: "02",
        title: "Secure Payment",
        description: "Simple and fast secure payments through our trusted gateways.",
        tone: "amber",
    },
    Step {
        number: "03",
        title: "Enjoy The Hive",
        description: "Pack your bags and start your trip into the wild beauty of Wayanad.",
        tone: "sky",
    },
];

/// Horizontal offset the trending carousel moves to: half a view width in
/// `direction` (-1 left, 1 right).
fn carousel_target(scroll_left: i32, client_width: i32, direction: f64) -> f64 {
    f64::from(scroll_left) + direction * f64::from(client_width) / 2.0
}

fn scroll_carousel(track: NodeRef<Div>, direction: f64) {
    let Some(track) = track.get_untracked() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_left(carousel_target(track.scroll_left(), track.client_width(), direction));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    track.scroll_to_with_scroll_to_options(&options);
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
      <Title text=Route::Home.title() />
      <div class="page page-home">
        <Hero />
        <BookingSteps />
        <Trending />
        <Testimonial />
        <Newsletter />
      </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
      <section class="home-hero">
        <div class="home-hero-text">
          <Reveal on_load=true>
            <h2 class="script">"Escape to"</h2>
          </Reveal>
          <Reveal on_load=true delay_ms=200>
            <h1>"The " <span class="accent">"World"</span> <br /> "with Hive"</h1>
          </Reveal>
          <Reveal on_load=true delay_ms=400>
            <p>
              "Experience the untamed highlands and lush coffee estates of Wayanad. Your gateway to an artisanal stay."
            </p>
          </Reveal>
          <Reveal on_load=true delay_ms=600>
            <a href=Route::Booking.path() class="btn btn-primary">
              "START YOUR TRIP"
            </a>
          </Reveal>
        </div>
        <Reveal on_load=true motion="right" class="home-hero-visual">
          <Parallax distance=Distance::Percent(20.0) from_top=true class="home-hero-frame">
            <FallbackImg
              src="https://beehivewayanad.com/images/banner5.png"
              alt="Wayanad Hills"
              eager=true
            />
          </Parallax>
          <div class="offer-badge">
            <span>"Get up to"</span>
            <strong>"60%"</strong>
            <span>"Off"</span>
          </div>
        </Reveal>
      </section>
    }
}

#[component]
fn BookingSteps() -> impl IntoView {
    view! {
      <section class="home-steps">
        <Reveal class="section-heading">
          <h3 class="eyebrow">"Easy Steps"</h3>
          <h2>"For Your " <span class="accent">"Bookings"</span></h2>
        </Reveal>
        <div class="steps-grid">
          {STEPS
            .iter()
            .enumerate()
            .map(|(i, step)| {
              view! {
                <Reveal delay_ms=stagger(i, 150) class=format!("step-card tone-{}", step.tone)>
                  <span class="step-number">{step.number}</span>
                  <h4>{step.title}</h4>
                  <p>{step.description}</p>
                  <span class="step-foot">"Fast Process"</span>
                </Reveal>
              }
            })
            .collect_view()}
        </div>
      </section>
    }
}

#[component]
fn Trending() -> impl IntoView {
    let track = NodeRef::<Div>::new();

    view! {
      <section class="home-trending">
        <Reveal class="section-heading split">
          <div>
            <h3 class="eyebrow">"Trending"</h3>
            <h2>"Popular Places"</h2>
          </div>
          <div class="carousel-controls">
            <button
              class="carousel-arrow prev"
              aria-label="Scroll left"
              on:click=move |_| scroll_carousel(track, -1.0)
            >
              "←"
            </button>
            <button
              class="carousel-arrow next"
              aria-label="Scroll right"
              on:click=move |_| scroll_carousel(track, 1.0)
            >
              "→"
            </button>
          </div>
        </Reveal>
        <div node_ref=track class="carousel-track">
          {DESTINATIONS.iter().map(|dest| view! { <TrendingCard dest=dest /> }).collect_view()}
        </div>
      </section>
    }
}

#[component]
fn TrendingCard(dest: &'static Destination) -> impl IntoView {
    view! {
      <article class="trending-card">
        <div class="trending-image">
          <FallbackImg src=dest.image alt=dest.name />
          <span class="badge">{dest.distance_label()}</span>
        </div>
        <div class="trending-body">
          <Stars />
          <h4>{dest.name}</h4>
          <p>{dest.description}</p>
          <a href=Route::Destinations.path() class="link-arrow">
            "EXPLORE NOW →"
          </a>
        </div>
      </article>
    }
}

#[component]
fn Testimonial() -> impl IntoView {
    view! {
      <section class="home-testimonial">
        <Reveal>
          <h3 class="eyebrow">"What Our Guests Say"</h3>
          <h2>"Guest " <span class="accent">"Reviews"</span></h2>
          <div class="testimonial-card">
            <FallbackImg
              src="https://beehivewayanad.com/images/near-destination.jpg"
              alt="Happy Guest"
              class="testimonial-avatar"
            />
            <blockquote>
              "\"The BeeHive resort provided an incredible escape into nature. The coffee plantations and the cool breeze made it a spiritual experience.\""
            </blockquote>
            <h5>"Kevin Martin"</h5>
            <p class="muted">"Adventure Enthusiast"</p>
          </div>
        </Reveal>
      </section>
    }
}

#[component]
fn Newsletter() -> impl IntoView {
    view! {
      <section class="home-newsletter">
        <Reveal class="newsletter-card">
          <div>
            <h2>"Join the " <br /> <span class="accent">"Colony"</span></h2>
            <p>"Get exclusive travel guides direct to your inbox."</p>
          </div>
          <form class="newsletter-form" on:submit=|ev| ev.prevent_default()>
            <input type="email" placeholder="Your Email Address" />
            <button type="submit" class="btn btn-primary">
              "SUBSCRIBE"
            </button>
          </form>
        </Reveal>
      </section>
    }
}
