//! Labeled input rendered from a `FieldSpec`, plus the section heading used
//! to group inputs.

use leptos::prelude::*;

use crate::state::form_layout::FieldSpec;

/// One labeled, required input bound to a single registration field.
#[component]
pub fn FormField(spec: FieldSpec, #[prop(into)] value: Signal<String>, on_input: Callback<String>) -> impl IntoView {
    let key = spec.field.key();
    let has_icon = spec.icon.is_some();

    view! {
        <div class="form-field" class:form-field--wide=spec.full_width>
            <label class="form-field__label" for=key>{spec.label}</label>
            <div class="form-field__control">
                {spec.icon.map(|icon| view! {
                    <span class="form-field__icon" aria-hidden="true">{icon.glyph()}</span>
                })}
                <input
                    class="form-field__input"
                    class:form-field__input--with-icon=has_icon
                    type=spec.input_type.as_str()
                    id=key
                    name=key
                    placeholder=spec.placeholder
                    required=true
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </div>
        </div>
    }
}

#[component]
pub fn SectionTitle(children: Children) -> impl IntoView {
    view! {
        <h3 class="section-title">{children()}</h3>
    }
}
