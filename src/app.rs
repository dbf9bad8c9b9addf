/// Application shell for Staybook.
/// Hosts the review section and the booking form on a property page; the two share nothing.
use crate::api::{ApiConfig, BackendHandle, HttpBackend};
use crate::components::{booking_form::BookingForm, review_section::ReviewSection};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    // Backend used by every component below; tests mount components with their own.
    provide_context(BackendHandle::new(HttpBackend::new(ApiConfig::default())));

    view! {
        <Stylesheet id="leptos" href="/pkg/staybook.css" />
        <Title text="Staybook" />
        <Router>
            <main>
                <Routes>
                    <Route path="" view=HomePage />
                    <Route path="/properties/:id" view=PropertyPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div>
            <h1>{ "Staybook" }</h1>
            <p>{ "Open a property to read its reviews and book a stay." }</p>
        </div>
    }
}

#[component]
fn PropertyPage() -> impl IntoView {
    let params = use_params_map();
    let property_id =
        Signal::derive(move || params.with(|p| p.get("id").cloned().unwrap_or_default()));

    view! {
        <div class="grid grid-cols-2 gap-8">
            <ReviewSection property_id=property_id />
            <BookingForm />
        </div>
    }
}
