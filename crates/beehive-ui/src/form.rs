//! Form building blocks for the inquiry pages.

use beehive_core::{Inquiry, InquiryForm};
use leptos::prelude::*;

/// Read and write access to one text field of a form held in a signal.
#[derive(Clone, Copy)]
pub struct FieldBinding {
    pub value: Signal<String>,
    pub on_input: Callback<String>,
}

/// Bind the text field selected by `get`/`set` on `form`.
pub fn bind_field<T>(
    form: RwSignal<InquiryForm<T>>,
    get: fn(&T) -> &String,
    set: fn(&mut T) -> &mut String,
) -> FieldBinding
where
    T: Inquiry + Send + Sync + 'static,
{
    FieldBinding {
        value: Signal::derive(move || form.with(|f| get(&f.fields).clone())),
        on_input: Callback::new(move |value: String| form.update(|f| *set(&mut f.fields) = value)),
    }
}

/// Labelled single-line input.
#[component]
pub fn TextField(
    label: &'static str,
    name: &'static str,
    binding: FieldBinding,
    /// Input type (`text`, `email`, `tel`, `date`).
    #[prop(default = "text")]
    kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let FieldBinding { value, on_input } = binding;

    view! {
      <label class="form-field">
        <span class="form-label">{label}</span>
        <input
          type=kind
          name=name
          placeholder=placeholder
          required=required
          prop:value=move || value.get()
          on:input=move |ev| on_input.run(event_target_value(&ev))
        />
      </label>
    }
}

/// Labelled multi-line input.
#[component]
pub fn TextArea(
    label: &'static str,
    name: &'static str,
    binding: FieldBinding,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    let FieldBinding { value, on_input } = binding;

    view! {
      <label class="form-field">
        <span class="form-label">{label}</span>
        <textarea
          name=name
          rows=rows
          placeholder=placeholder
          required=required
          prop:value=move || value.get()
          on:input=move |ev| on_input.run(event_target_value(&ev))
        ></textarea>
      </label>
    }
}

/// Labelled `<select>` over `(value, label)` options.
#[component]
pub fn SelectField(
    label: &'static str,
    name: &'static str,
    options: Vec<(&'static str, &'static str)>,
    /// Value of the selected option.
    selected: Signal<&'static str>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
      <label class="form-field">
        <span class="form-label">{label}</span>
        <select name=name on:change=move |ev| on_change.run(event_target_value(&ev))>
          {options
            .into_iter()
            .map(|(value, text)| {
              view! {
                <option value=value selected=move || selected.get() == value>
                  {text}
                </option>
              }
            })
            .collect_view()}
        </select>
      </label>
    }
}

/// Message shown under a form whose submission was rejected.
#[component]
pub fn FormErrorNote(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
      <Show when=move || error.with(Option::is_some)>
        <p class="form-error" role="alert">
          {move || error.get().unwrap_or_default()}
        </p>
      </Show>
    }
}

/// Success view replacing a submitted form.
#[component]
pub fn SuccessPanel(
    title: &'static str,
    message: &'static str,
    action: &'static str,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
      <div class="form-success" role="status">
        <div class="form-success-icon" aria-hidden="true">"✓"</div>
        <h2>{title}</h2>
        <p>{message}</p>
        <button class="btn btn-dark" on:click=move |_| on_reset.run(())>
          {action}
        </button>
      </div>
    }
}

/// Submit `form`, recording a rejection in `error`.
pub fn submit_form<T>(form: RwSignal<InquiryForm<T>>, error: RwSignal<Option<String>>)
where
    T: Inquiry + Send + Sync + 'static,
{
    let result = form.try_update(InquiryForm::submit);
    match result {
        Some(Err(err)) => {
            log::warn!("{} form not submitted: {err}", T::KIND);
            error.set(Some(err.to_string()));
        }
        Some(Ok(())) => {
            log::info!("{} form submitted", T::KIND);
            error.set(None);
        }
        None => {}
    }
}

/// Reset `form` to a blank idle state.
pub fn reset_form<T>(form: RwSignal<InquiryForm<T>>, error: RwSignal<Option<String>>)
where
    T: Inquiry + Send + Sync + 'static,
{
    form.update(InquiryForm::reset);
    error.set(None);
}

#[cfg(test)]
mod tests {
    use beehive_core::ContactMessage;

    use super::*;

    #[test]
    fn test_bound_field_reads_and_writes() {
        let owner = Owner::new();
        owner.set();

        let form = RwSignal::new(InquiryForm::<ContactMessage>::new());
        let binding = bind_field(form, |f| &f.email, |f| &mut f.email);

        binding.on_input.run("hive@example.com".to_string());
        assert_eq!(binding.value.get_untracked(), "hive@example.com");
        assert_eq!(form.with_untracked(|f| f.fields.email.clone()), "hive@example.com");
    }

    #[test]
    fn test_submit_and_reset_record_errors() {
        let owner = Owner::new();
        owner.set();

        let form = RwSignal::new(InquiryForm::<ContactMessage>::new());
        let error = RwSignal::new(None);

        submit_form(form, error);
        assert!(error.get_untracked().is_some_and(|e| e.contains("name")));
        assert!(!form.with_untracked(InquiryForm::is_submitted));

        form.update(|f| {
            f.fields.name = "Ravi".to_string();
            f.fields.email = "ravi@example.com".to_string();
            f.fields.subject = "Hello".to_string();
            f.fields.message = "See you in May".to_string();
        });
        submit_form(form, error);
        assert_eq!(error.get_untracked(), None);
        assert!(form.with_untracked(InquiryForm::is_submitted));

        reset_form(form, error);
        assert!(!form.with_untracked(InquiryForm::is_submitted));
    }
}
