use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::{use_auth, AuthState};
use crate::components::ui::button::{Button, ButtonVariant};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;
    let navigate = use_navigate();

    Effect::new(move |_| {
        if state.with(AuthState::should_leave_login) {
            navigate("/", Default::default());
        }
    });

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center p-8 bg-gray-50">
            <div class="w-full max-w-md p-8 bg-white rounded-lg shadow-md text-center">
                <h1 class="text-3xl font-bold mb-6 text-gray-900">"AI Image Generator"</h1>
                <p class="text-gray-600 mb-8">
                    "Create stunning images with the power of AI using the Flux Schnell model.
                    Log in to get started."
                </p>

                <div class="flex justify-center mb-8">
                    <img
                        src="https://placehold.co/300x300/9ca3af/ffffff?text=AI+Image+Generator"
                        alt="AI Generated Art"
                        width="300"
                        height="300"
                        class="rounded-lg shadow-md"
                    />
                </div>

                <Button
                    variant=ButtonVariant::Outline
                    full_width=true
                    on_click=Callback::new(move |_| auth.sign_in_with_google())
                >
                    <svg class="w-5 h-5 mr-2" viewBox="0 0 24 24">
                        <path
                            fill="#4285F4"
                            d="M22.56 12.25c0-.78-.07-1.53-.2-2.25H12v4.26h5.92c-.26 1.37-1.04 2.53-2.21 3.31v2.77h3.57c2.08-1.92 3.28-4.74 3.28-8.09z"
                        ></path>
                        <path
                            fill="#34A853"
                            d="M12 23c2.97 0 5.46-.98 7.28-2.66l-3.57-2.77c-.98.66-2.23 1.06-3.71 1.06-2.86 0-5.29-1.93-6.16-4.53H2.18v2.84C3.99 20.53 7.7 23 12 23z"
                        ></path>
                        <path
                            fill="#FBBC05"
                            d="M5.84 14.09c-.22-.66-.35-1.36-.35-2.09s.13-1.43.35-2.09V7.07H2.18C1.43 8.55 1 10.22 1 12s.43 3.45 1.18 4.93l2.85-2.22.81-.62z"
                        ></path>
                        <path
                            fill="#EA4335"
                            d="M12 5.38c1.62 0 3.06.56 4.21 1.64l3.15-3.15C17.45 2.09 14.97 1 12 1 7.7 1 3.99 3.47 2.18 7.07l3.66 2.84c.87-2.6 3.3-4.53 6.16-4.53z"
                        ></path>
                    </svg>
                    "Sign in with Google"
                </Button>

                <div class="mt-6 text-center">
                    <a href="/" class="text-sm text-blue-600 hover:text-blue-700">
                        "Back to the generator"
                    </a>
                </div>
            </div>
        </div>
    }
    .into_any()
}
