use leptos::{error::Errors, prelude::*};

const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Fallback for the page-level error boundary.
#[component]
pub fn ErrorPage(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let message = {
        let errors = errors.clone();
        move || {
            errors
                .get()
                .into_iter()
                .map(|(_, e)| e.to_string())
                .find(|m| !m.is_empty())
                .unwrap_or_else(|| UNEXPECTED_ERROR.to_string())
        }
    };

    Effect::new({
        let errors = errors.clone();
        move |_| {
            for (_, e) in errors.get() {
                log::error!("Application error: {e}");
            }
        }
    });

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center p-8 bg-gray-50">
            <div class="w-full max-w-md p-8 bg-white rounded-lg shadow-md">
                <h2 class="text-2xl font-bold text-red-600 mb-4">"Something went wrong"</h2>
                <p class="text-gray-700 mb-6">{message}</p>
                <button
                    class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 transition-colors"
                    on:click=move |_| errors.set(Errors::default())
                >
                    "Try again"
                </button>
            </div>
        </div>
    }
}
