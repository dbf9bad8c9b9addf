use crate::models::booking::BookingField;
use crate::state::booking::BookingFormState;
use leptos::*;

/// Labelled, required input bound to one booking field.
#[component]
pub fn FormField(field: BookingField, state: RwSignal<BookingFormState>) -> impl IntoView {
    let name = field.name();
    let label = field.label();
    let input_type = field.input_type();
    let placeholder = field.placeholder();
    let value = move || state.with(|s| s.data.get(field).to_string());

    let handle_input = move |e: web_sys::Event| {
        let new_value = event_target_value(&e);
        state.update(|s| s.edit(field, new_value));
    };

    view! {
        <div>
            <label for=name>{ label }</label>
            <input
                type=input_type
                id=name
                name=name
                prop:value=value
                on:input=handle_input
                class="border p-2 w-full mt-2"
                placeholder=placeholder
                required=true
            />
        </div>
    }
}
