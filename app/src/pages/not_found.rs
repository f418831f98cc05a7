use beehive_core::Route;
use beehive_ui::Reveal;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
      <Title text="Page Not Found | BeeHive Resort Wayanad" />
      <div class="page page-not-found">
        <Reveal on_load=true class="section-heading centered">
          <h3 class="script">"Lost in the hills"</h3>
          <h1>"404"</h1>
          <p>"This trail doesn't lead anywhere. Head back to the Hive and start again."</p>
          <a href=Route::Home.path() class="btn btn-primary">
            "BACK TO HOME"
          </a>
        </Reveal>
      </div>
    }
}
