use leptos::prelude::*;

use crate::auth::use_auth;
use crate::components::ui::button::{Button, ButtonSize, ButtonVariant, LinkButton};

#[component]
pub fn AuthNav() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state;

    view! {
        <div class="items-end pr-4 flex space-x-4">
            {move || match state.get().user() {
                Some(user) => {
                    let auth = auth.clone();
                    view! {
                        <span class="text-gray-700">{user.label()}</span>
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Small
                            on_click=Callback::new(move |_| auth.sign_out())
                        >
                            "Sign out"
                        </Button>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <LinkButton variant=ButtonVariant::Outline size=ButtonSize::Small href="/login">
                            "Sign in"
                        </LinkButton>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
