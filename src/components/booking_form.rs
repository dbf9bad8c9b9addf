/// Contact, payment and billing form that posts a booking to the backend.
use crate::api::use_backend;
use crate::components::form_field::FormField;
use crate::models::booking::BookingField;
use crate::state::booking::{submit_booking, BookingFormState, CONFIRMATION_MESSAGE};
use crate::utils::leptos_owner::{current_owner, with_owner_safe};
use crate::utils::notify;
use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
pub fn BookingForm(
    /// Clear the CVV after a failed attempt instead of keeping everything for a resubmit.
    #[prop(optional)]
    clear_cvv_on_failure: bool,
    /// Called once a booking is confirmed. Defaults to a browser alert.
    #[prop(optional, into)]
    on_confirmed: Option<Callback<()>>,
) -> impl IntoView {
    let state = create_rw_signal(BookingFormState::new(clear_cvv_on_failure));
    let backend = use_backend();
    let owner = current_owner("BookingForm");

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // The button is disabled while loading, but a form can still be submitted with Enter.
        let Some(ticket) = state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };
        let backend = backend.clone();
        spawn_local(async move {
            let result = submit_booking(&*backend, &ticket).await;
            let confirmed = result.is_ok();
            with_owner_safe(owner, "BookingForm submit", || {
                state.update(|s| s.finish_submit(result));
                if confirmed {
                    match on_confirmed {
                        Some(callback) => callback.call(()),
                        None => notify::alert(CONFIRMATION_MESSAGE),
                    }
                }
            });
        });
    };

    view! {
        <div class="bg-white p-6 shadow-md rounded-lg">
            <h2 class="text-xl font-semibold">{ "Contact Detail" }</h2>
            <form on:submit=handle_submit>
                <div class="grid grid-cols-2 gap-4">
                    <FormField field=BookingField::FirstName state=state />
                    <FormField field=BookingField::LastName state=state />
                </div>
                <div class="grid grid-cols-2 gap-4 mt-4">
                    <FormField field=BookingField::Email state=state />
                    <FormField field=BookingField::PhoneNumber state=state />
                </div>

                <h2 class="text-xl font-semibold mt-6">{ "Pay with" }</h2>
                <div class="mt-4">
                    <FormField field=BookingField::CardNumber state=state />
                </div>
                <div class="grid grid-cols-2 gap-4 mt-4">
                    <FormField field=BookingField::ExpirationDate state=state />
                    <FormField field=BookingField::Cvv state=state />
                </div>

                <h2 class="text-xl font-semibold mt-6">{ "Billing Address" }</h2>
                <div class="mt-4">
                    <FormField field=BookingField::BillingAddress state=state />
                </div>

                <button
                    type="submit"
                    class="mt-6 bg-green-500 text-white py-2 px-4 rounded-md w-full"
                    disabled=move || state.with(|s| s.submit_disabled())
                >
                    { move || state.with(|s| s.submit_label()) }
                </button>
                { move || state.with(|s| s.error.clone()).map(|message| view! {
                    <p class="text-red-500 mt-2">{ message }</p>
                }) }
                { move || state.with(|s| s.success).then(|| view! {
                    <p class="text-green-500 mt-2">{ CONFIRMATION_MESSAGE }</p>
                }) }
            </form>
        </div>
    }
}
