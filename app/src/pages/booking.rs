use beehive_core::{
    BookingInquiry, InquiryForm, Route,
    form::{GuestOption, SuiteType},
};
use beehive_ui::{
    FormErrorNote, Reveal, SelectField, SuccessPanel, TextArea, TextField, bind_field,
    reset_form, submit_form,
};
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn BookingPage() -> impl IntoView {
    let form = RwSignal::new(InquiryForm::<BookingInquiry>::new());
    let error = RwSignal::new(None::<String>);

    view! {
      <Title text=Route::Booking.title() />
      <div class="page page-booking">
        <Show
          when=move || form.with(InquiryForm::is_submitted)
          fallback=move || view! { <BookingForm form=form error=error /> }
        >
          <div class="booking-success">
            <SuccessPanel
              title="Inquiry Received!"
              message="Your travel plans are winging their way to our concierge. We'll be in touch within 24 hours to secure your spot at the Hive."
              action="ANOTHER BOOKING"
              on_reset=Callback::new(move |()| reset_form(form, error))
            />
          </div>
        </Show>
      </div>
    }
}

#[component]
fn BookingForm(
    form: RwSignal<InquiryForm<BookingInquiry>>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let suites = SuiteType::ALL.map(|s| (s.value(), s.label())).to_vec();
    let guests = GuestOption::ALL.map(|g| (g.value(), g.label())).to_vec();

    view! {
      <section class="page-hero dark torn-bottom centered short">
        <div class="page-hero-text">
          <Reveal on_load=true>
            <h2 class="script">"Secure"</h2>
          </Reveal>
          <Reveal on_load=true delay_ms=150>
            <h1>"The " <span class="accent script">"Reservation"</span></h1>
          </Reveal>
        </div>
      </section>

      <section class="booking-form-section">
        <Reveal on_load=true delay_ms=200 class="form-card">
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
                name="full_name"
                binding=bind_field(form, |f| &f.full_name, |f| &mut f.full_name)
                placeholder="Adventurer Name"
                required=true
              />
              <TextField
                label="Mobile"
                name="mobile"
                kind="tel"
                binding=bind_field(form, |f| &f.mobile, |f| &mut f.mobile)
                placeholder="+91..."
                required=true
              />
              <div class="span-2">
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
                label="Check In"
                name="check_in"
                kind="date"
                binding=bind_field(form, |f| &f.check_in, |f| &mut f.check_in)
                required=true
              />
              <TextField
                label="Check Out"
                name="check_out"
                kind="date"
                binding=bind_field(form, |f| &f.check_out, |f| &mut f.check_out)
                required=true
              />
              <SelectField
                label="Suite Type"
                name="suite"
                options=suites
                selected=Signal::derive(move || form.with(|f| f.fields.suite.value()))
                on_change=Callback::new(move |value: String| {
                  if let Some(suite) = SuiteType::from_value(&value) {
                    form.update(|f| f.fields.suite = suite);
                  }
                })
              />
              <SelectField
                label="Guests"
                name="guests"
                options=guests
                selected=Signal::derive(move || form.with(|f| f.fields.guests.value()))
                on_change=Callback::new(move |value: String| {
                  if let Some(party) = GuestOption::from_value(&value) {
                    form.update(|f| f.fields.guests = party);
                  }
                })
              />
            </div>
            <TextArea
              label="Special Notes"
              name="notes"
              binding=bind_field(form, |f| &f.notes, |f| &mut f.notes)
              placeholder="Any special requests?"
            />
            <FormErrorNote error=error />
            <button type="submit" class="btn btn-dark btn-block">
              "SUBMIT RESERVATION"
            </button>
          </form>
        </Reveal>
      </section>
    }
}
