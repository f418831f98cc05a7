//! One view per site route.

mod activities;
mod booking;
mod contact;
mod destinations;
mod facilities;
mod gallery;
mod home;
mod not_found;
mod tariff;

pub use activities::ActivitiesPage;
pub use booking::BookingPage;
pub use contact::ContactPage;
pub use destinations::DestinationsPage;
pub use facilities::FacilitiesPage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use tariff::TariffPage;

use leptos::prelude::*;

/// Five filled stars.
#[component]
fn Stars() -> impl IntoView {
    view! {
      <div class="stars" aria-label="5 stars">
        {(0..5).map(|_| view! { <span class="star" aria-hidden="true">"★"</span> }).collect_view()}
      </div>
    }
}
