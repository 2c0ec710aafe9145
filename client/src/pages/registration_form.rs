//! Registration form page: event information, the sectioned entry form, and
//! the submit flow.

use leptos::prelude::*;

use crate::components::busy_overlay::BusyOverlay;
use crate::components::form_field::{FormField, SectionTitle};
use crate::net::config::ApiConfig;
use crate::state::form::{FormState, SUBMITTING_MESSAGE};
use crate::state::form_layout::FORM_SECTIONS;
use crate::state::toast::ToastState;

#[component]
pub fn RegistrationFormPage() -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(FormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(snapshot) = form.try_update(FormState::begin_submit) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::submit_registration(&api, &snapshot).await;
                if let Err(e) = &outcome {
                    log::warn!("registration submit failed: {e}");
                }
                if let Some((kind, message)) = form.try_update(|f| f.finish_submit(&outcome)) {
                    crate::components::toaster::notify(toasts, kind, message);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, snapshot, toasts);
        }
    };

    let sections = FORM_SECTIONS
        .iter()
        .map(|section| {
            let fields = section
                .fields
                .iter()
                .map(|spec| {
                    let field = spec.field;
                    let value = Signal::derive(move || form.with(|f| f.draft.get(field).to_owned()));
                    let on_input = Callback::new(move |v: String| form.update(|f| f.set_field(field, v)));
                    view! { <FormField spec=*spec value=value on_input=on_input/> }
                })
                .collect_view();
            view! {
                <div class="form-section">
                    <SectionTitle>{section.title}</SectionTitle>
                    <div class="form-grid">{fields}</div>
                </div>
            }
        })
        .collect_view();

    let submitting = Signal::derive(move || form.with(|f| f.submitting));

    view! {
        <div class="page page--form">
            <header class="event-header">
                <h1>"DAR TIME TRIALS (DRAG RACE)"</h1>
                <div class="event-info">
                    <h2>"Registration Information"</h2>
                    <p class="event-info__label">"Entry Fee:"</p>
                    <p>"TSH 60,000 (Tanzania Citizen) / USD 40.00 (Foreigner/EA)"</p>
                    <p class="event-info__note">"Includes TSH 10,000 Temporary Competition license"</p>
                    <div class="event-info__payment">
                        <p class="event-info__label">"Payment Details:"</p>
                        <p>"Lapa Tigo #: " <span class="mono">"7757960"</span></p>
                        <p>"VodaCom #: " <span class="mono">"57983245"</span></p>
                    </div>
                </div>
            </header>

            <form class="registration-form" on:submit=on_submit>
                {sections}
                <div class="registration-form__footer">
                    <p class="registration-form__confirm">
                        "By submitting this form, you confirm that all provided information is accurate and complete."
                    </p>
                    <button class="button button--primary" type="submit">"Submit Registration"</button>
                </div>
                <BusyOverlay visible=submitting message=SUBMITTING_MESSAGE/>
            </form>
        </div>
    }
}
