use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <div class="flex flex-row justify-center p-4 space-x-2 text-gray-400">
            <span>"imagegen"</span>
            <span>"•"</span>
            <a
                href="https://replicate.com"
                class="font-bold"
                target="_blank"
                rel="noopener noreferrer"
            >
                "powered by replicate"
            </a>
        </div>
    }
}
