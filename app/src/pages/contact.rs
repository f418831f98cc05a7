use beehive_core::{ContactInfo, ContactMessage, InquiryForm, Route, catalog::CONTACT};
use beehive_ui::{
    FormErrorNote, Reveal, SuccessPanel, TextArea, TextField, bind_field, reset_form, stagger,
    submit_form,
};
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
      <Title text=Route::Contact.title() />
      <div class="page page-contact">
        <section class="page-hero dark torn-bottom centered">
          <div class="page-hero-text">
            <Reveal on_load=true>
              <h2 class="script">"Connect"</h2>
            </Reveal>
            <Reveal on_load=true delay_ms=150>
              <h1>"With " <span class="accent">"Hive"</span></h1>
            </Reveal>
            <Reveal on_load=true delay_ms=300>
              <p class="caps">"Your gateway to the Western Ghats starts here."</p>
            </Reveal>
          </div>
        </section>

        <section class="contact-body">
          <div class="contact-cards">
            <ContactCards />
          </div>
          <div class="contact-form">
            <MessageForm />
          </div>
        </section>

        <MapPanel />
      </div>
    }
}

#[component]
fn ContactCards() -> impl IntoView {
    view! {
      <Reveal on_load=true delay_ms=stagger(0, 150) class="contact-card">
        <span class="contact-icon" aria-hidden="true">"☎"</span>
        <h3>"Talk to Us"</h3>
        {CONTACT
          .phones
          .into_iter()
          .map(|phone| {
            view! {
              <p>
                <a href=ContactInfo::tel_href(phone)>{phone}</a>
              </p>
            }
          })
          .collect_view()}
      </Reveal>
      <Reveal on_load=true delay_ms=stagger(1, 150) class="contact-card">
        <span class="contact-icon" aria-hidden="true">"✉"</span>
        <h3>"Connect"</h3>
        <p class="break-all">
          <a href=CONTACT.mailto_href()>{CONTACT.email}</a>
        </p>
      </Reveal>
      <Reveal on_load=true delay_ms=stagger(2, 150) class="contact-card dark">
        <span class="contact-icon" aria-hidden="true">"📍"</span>
        <h3>"Meet Us"</h3>
        <p class="eyebrow">"Region"</p>
        <p>{CONTACT.region}</p>
        <p class="eyebrow">"Specific Location"</p>
        <p>{CONTACT.landmark}</p>
      </Reveal>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(InquiryForm::<ContactMessage>::new());
    let error = RwSignal::new(None::<String>);

    view! {
      <Show
        when=move || form.with(InquiryForm::is_submitted)
        fallback=move || {
          view! {
            <Reveal on_load=true delay_ms=450 class="form-card">
              <h2>"Drop a " <span class="accent">"Line"</span></h2>
              <form
                class="inquiry-form"
                on:submit=move |ev| {
                  ev.prevent_default();
                  submit_form(form, error);
                }
              >
                <div class="form-grid">
                  <TextField
                    label="Full Name"
                    name="name"
                    binding=bind_field(form, |f| &f.name, |f| &mut f.name)
                    placeholder="Your Name"
                    required=true
                  />
                  <TextField
                    label="Email Address"
                    name="email"
                    kind="email"
                    binding=bind_field(form, |f| &f.email, |f| &mut f.email)
                    placeholder="hello@wander.com"
                    required=true
                  />
                </div>
                <TextField
                  label="Subject"
                  name="subject"
                  binding=bind_field(form, |f| &f.subject, |f| &mut f.subject)
                  placeholder="How can we help?"
                  required=true
                />
                <TextArea
                  label="Your Message"
                  name="message"
                  binding=bind_field(form, |f| &f.message, |f| &mut f.message)
                  placeholder="Your story..."
                  required=true
                />
                <FormErrorNote error=error />
                <button type="submit" class="btn btn-dark">
                  "SUBMIT MESSAGE"
                </button>
              </form>
            </Reveal>
          }
        }
      >
        <SuccessPanel
          title="Message Sent!"
          message="We will reach back across the mountains to you shortly."
          action="SEND ANOTHER"
          on_reset=Callback::new(move |()| reset_form(form, error))
        />
      </Show>
    }
}

#[component]
fn MapPanel() -> impl IntoView {
    view! {
      <section class="contact-map torn-top">
        <iframe
          src=CONTACT.map_embed_url
          width="100%"
          height="100%"
          allowfullscreen=true
          {..leptos::attr::custom::custom_attribute("loading", "lazy")}
          title="Bee Hive Staycations Wayanad Location"
        ></iframe>
        <div class="map-card">
          <h4>"Visit the Hive"</h4>
          <p>
            "Find us in Meenagadi, the hub of Wayanad's natural beauty. We're situated near ABR Solar for easy navigation."
          </p>
          <a href=CONTACT.directions_url target="_blank" rel="noreferrer" class="link-arrow">
            "Get Directions →"
          </a>
        </div>
      </section>
    }
}
