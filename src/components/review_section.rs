use crate::api::use_backend;
use crate::models::review::Review;
use crate::state::reviews::{ReviewsState, ReviewsView};
use crate::utils::leptos_owner::{current_owner, with_owner_safe};
use leptos::*;

/// Fetches and lists the reviews of one property. Re-fetches whenever `property_id` changes;
/// responses for a property that is no longer shown are dropped.
#[component]
pub fn ReviewSection(#[prop(into)] property_id: MaybeSignal<String>) -> impl IntoView {
    let state = create_rw_signal(ReviewsState::default());
    let backend = use_backend();
    let owner = current_owner("ReviewSection");

    create_effect(move |_| {
        let property_id = property_id.get();
        let Some(ticket) = state.try_update(|s| s.request(&property_id)).flatten() else {
            return;
        };
        let backend = backend.clone();
        spawn_local(async move {
            let result = backend.fetch_reviews(&ticket.property_id).await;
            with_owner_safe(owner, "ReviewSection fetch", || {
                state.update(|s| {
                    s.resolve(&ticket, result);
                })
            });
        });
    });

    view! { <ReviewsBody content=Signal::derive(move || state.with(ReviewsState::view)) /> }
}

/// Placeholder or list for the current review state.
#[component]
pub fn ReviewsBody(#[prop(into)] content: Signal<ReviewsView>) -> impl IntoView {
    move || match content.get() {
        ReviewsView::Loading => view! { <p>{ "Loading reviews..." }</p> }.into_view(),
        ReviewsView::Error(message) => view! { <p class="text-red-500">{ message }</p> }.into_view(),
        ReviewsView::Empty => view! { <p>{ "No reviews yet." }</p> }.into_view(),
        ReviewsView::List(reviews) => view! {
            <div class="mt-8">
                <h3 class="text-2xl font-semibold">{ "Reviews" }</h3>
                <For
                    each=move || reviews.clone()
                    key=|review| review.id.clone()
                    children=|review| view! { <ReviewCard review=review /> }
                />
            </div>
        }
        .into_view(),
    }
}

#[component]
pub fn ReviewCard(review: Review) -> impl IntoView {
    let header = review.header().map(|header| {
        let alt = header.name.clone();
        let rating = header
            .rating_label()
            .map(|label| view! { <p class="text-yellow-500">{ label }</p> });
        view! {
            <div class="flex items-center">
                <img src=header.avatar alt=alt class="w-12 h-12 rounded-full mr-4" />
                <div>
                    <p class="font-bold">{ header.name }</p>
                    { rating }
                </div>
            </div>
        }
    });

    view! {
        <div class="border-b pb-4 mb-4">
            { header }
            <p>{ review.comment }</p>
        </div>
    }
}
