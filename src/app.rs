use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path, StaticSegment,
};

use crate::auth::AuthProvider;
use crate::components::auth_nav::AuthNav;
use crate::components::footer::Footer;
use crate::components::image_generator::ImageGenerator;
use crate::pages::error::ErrorPage;
use crate::pages::login::LoginPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/imagegen.css" />
        <Title text="AI Image Generator" />
        <AuthProvider>
            <Router>
                <ErrorBoundary fallback=|errors| view! { <ErrorPage errors /> }>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage />
                        <Route path=path!("login") view=LoginPage />
                    </Routes>
                </ErrorBoundary>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="w-full mx-auto bg-gray-50">
            <div class="flex justify-between items-center">
                <a href="/" class="text-2xl text-left text-gray-900 pl-4 p-4 font-bold">
                    "imagegen"
                </a>
                <AuthNav />
            </div>
            <ImageGenerator />
            <Footer />
        </div>
    }
}
