use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::client::{request_image, ViewState};
use crate::components::ui::button::{Button, ButtonVariant, LinkButton};
use crate::types::{clamp_guidance_scale, DEFAULT_GUIDANCE_SCALE};

#[component]
pub fn ImageGenerator() -> impl IntoView {
    let (prompt, set_prompt) = signal(String::new());
    let (guidance_scale, set_guidance_scale) = signal(DEFAULT_GUIDANCE_SCALE);
    let view_state = RwSignal::new(ViewState::Idle);

    let is_loading = Signal::derive(move || view_state.with(ViewState::is_loading));
    let submit_disabled =
        Signal::derive(move || is_loading.get() || prompt.with(|p| p.trim().is_empty()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let request = view_state
            .try_update(|state| state.begin(&prompt.get_untracked(), guidance_scale.get_untracked()))
            .flatten();
        let Some(request) = request else {
            return;
        };

        spawn_local(async move {
            let outcome = request_image(&request).await;
            view_state.update(|state| state.resolve(outcome));
        });
    };

    let status_view = move || {
        view_state.with(|state| match state {
            ViewState::Idle => ().into_any(),
            ViewState::Loading { .. } => view! {
                <div class="mt-8 text-center">
                    <div class="inline-block h-8 w-8 animate-spin rounded-full border-4 border-solid border-blue-600 border-r-transparent"></div>
                    <p class="mt-2 text-gray-600">
                        "Generating your image... This may take up to 30 seconds."
                    </p>
                </div>
            }
            .into_any(),
            ViewState::Error(message) => view! {
                <div class="mt-4 p-3 bg-red-100 text-red-700 rounded-md">{message.clone()}</div>
            }
            .into_any(),
            ViewState::Success { image_url, prompt } => {
                let alt = if prompt.trim().is_empty() {
                    "Generated image".to_string()
                } else {
                    prompt.clone()
                };
                view! {
                    <div class="mt-8">
                        <h2 class="text-xl font-semibold mb-3 text-gray-900">"Generated Image"</h2>
                        <div class="relative w-full aspect-square overflow-hidden rounded-lg border border-gray-200">
                            <img
                                src=image_url.clone()
                                alt=alt
                                class="w-full h-full object-contain"
                                on:error=move |_| view_state.update(ViewState::image_failed)
                            />
                        </div>
                        <div class="mt-4">
                            <LinkButton
                                variant=ButtonVariant::Outline
                                href=image_url.clone()
                                target="_blank"
                            >
                                "View Full Image"
                            </LinkButton>
                        </div>
                    </div>
                }
                .into_any()
            }
        })
    };

    view! {
        <main class="flex min-h-screen flex-col items-center p-8 bg-gray-50">
            <h1 class="text-4xl font-bold mb-8 text-center text-gray-900">"AI Image Generator"</h1>
            <p class="text-gray-600 mb-8 text-center max-w-2xl">
                "Create beautiful images with the power of AI using the FLUX.1 Schnell model.
                Simply enter a detailed prompt describing what you want to see."
            </p>

            <div class="w-full max-w-3xl p-6 bg-white rounded-lg shadow-md">
                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label for="prompt" class="block text-sm font-medium text-gray-700 mb-1">
                            "Image Prompt"
                        </label>
                        <textarea
                            id="prompt"
                            class="w-full px-4 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 text-gray-800"
                            placeholder="Describe the image you want to generate..."
                            rows="3"
                            required
                            prop:value=move || prompt.get()
                            on:input=move |ev| set_prompt.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div>
                        <label for="guidance" class="block text-sm font-medium text-gray-700 mb-1">
                            "Guidance Scale: " {move || guidance_scale.get().to_string()}
                        </label>
                        <input
                            id="guidance"
                            type="range"
                            min="1"
                            max="20"
                            step="0.1"
                            class="w-full"
                            prop:value=move || guidance_scale.get().to_string()
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                                    set_guidance_scale.set(clamp_guidance_scale(value));
                                }
                            }
                        />
                        <p class="text-xs text-gray-500 mt-1">
                            "Higher values make the image more closely match your prompt (recommended: 7-9)"
                        </p>
                    </div>

                    <Button submit=true full_width=true disabled=submit_disabled>
                        {move || if is_loading.get() { "Generating..." } else { "Generate Image" }}
                    </Button>
                </form>

                {status_view}
            </div>
        </main>
    }
}
