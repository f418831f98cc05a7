use beehive_core::{
    Route,
    catalog::{Package, SPECIAL_PACKAGES, TARIFFS, TariffPlan, display_price},
};
use beehive_ui::{FallbackImg, Reveal, stagger};
use leptos::prelude::*;
use leptos_meta::Title;

use super::Stars;

#[component]
pub fn TariffPage() -> impl IntoView {
    view! {
      <Title text=Route::Tariff.title() />
      <div class="page page-tariff">
        <Reveal on_load=true class="section-heading centered">
          <h3 class="script">"Price For"</h3>
          <h1>"Travel The World"</h1>
        </Reveal>

        <div class="tariff-grid">
          {TARIFFS
            .iter()
            .enumerate()
            .map(|(i, plan)| view! { <TariffCard plan=plan delay_ms=stagger(i, 100) /> })
            .collect_view()}
        </div>

        <section class="packages dark">
          <h2>"Holiday " <span class="accent">"Packages"</span></h2>
          <div class="packages-list">
            {SPECIAL_PACKAGES.iter().map(|pkg| view! { <PackageRow pkg=pkg /> }).collect_view()}
          </div>
        </section>
      </div>
    }
}

#[component]
fn TariffCard(plan: &'static TariffPlan, delay_ms: u32) -> impl IntoView {
    view! {
      <Reveal delay_ms=delay_ms class="tariff-card">
        <div class="tariff-image">
          <FallbackImg src=plan.image alt=plan.name />
          <div class="tariff-image-caption">
            <Stars />
            <h3>{plan.name}</h3>
          </div>
        </div>
        <div class="tariff-body">
          <p class="tariff-price">
            <span class="amount">{plan.display_price()}</span>
            <span class="unit">"/ Night"</span>
          </p>
          <ul class="checklist">
            {plan.detail_lines().map(|line| view! { <li>{line}</li> }).collect_view()}
            <li>{plan.capacity}</li>
          </ul>
          <a href=Route::Booking.path() class="btn btn-outline btn-block">
            "BOOK THIS PLAN"
          </a>
        </div>
      </Reveal>
    }
}

#[component]
fn PackageRow(pkg: &'static Package) -> impl IntoView {
    view! {
      <Reveal at=0.9 class="package-row">
        <div>
          <h4>{pkg.kind}</h4>
          <p>{pkg.inclusions}</p>
        </div>
        <div class="package-prices">
          <div>
            <p class="eyebrow">"2N / 3D"</p>
            <p class="amount">{display_price(pkg.price_2n3d)}</p>
          </div>
          <div>
            <p class="eyebrow">"3N / 4D"</p>
            <p class="amount">{display_price(pkg.price_3n4d)}</p>
          </div>
        </div>
      </Reveal>
    }
}
