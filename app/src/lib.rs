pub mod pages;

use beehive_core::Route as SiteRoute;
use beehive_ui::{Layout, SmoothScrollProvider};
use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use pages::{
    ActivitiesPage, BookingPage, ContactPage, DestinationsPage, FacilitiesPage, GalleryPage,
    HomePage, NotFound, TariffPage,
};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
      <Title text=SiteRoute::Home.title() />
      <Meta
        name="description"
        content="BeeHive Resort Wayanad: villas, cottages and tent stays on a six-acre coffee plantation in the Wayanad highlands."
      />

      <Router>
        <SmoothScrollProvider>
          <Layout>
            <Routes fallback=|| view! { <NotFound /> }>
              <Route path=StaticSegment(SiteRoute::Home.segment()) view=HomePage />
              <Route path=StaticSegment(SiteRoute::Facilities.segment()) view=FacilitiesPage />
              <Route path=StaticSegment(SiteRoute::Destinations.segment()) view=DestinationsPage />
              <Route path=StaticSegment(SiteRoute::Activities.segment()) view=ActivitiesPage />
              <Route path=StaticSegment(SiteRoute::Gallery.segment()) view=GalleryPage />
              <Route path=StaticSegment(SiteRoute::Tariff.segment()) view=TariffPage />
              <Route path=StaticSegment(SiteRoute::Booking.segment()) view=BookingPage />
              <Route path=StaticSegment(SiteRoute::Contact.segment()) view=ContactPage />
            </Routes>
          </Layout>
        </SmoothScrollProvider>
      </Router>
    }
}
