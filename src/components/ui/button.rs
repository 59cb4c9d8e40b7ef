use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonVariant {
    fn get_classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-blue-600 text-white \
                 hover:bg-blue-700 \
                 active:bg-blue-800 \
                 border border-blue-600"
            }
            ButtonVariant::Secondary => {
                "bg-gray-400 text-white \
                 border border-gray-400"
            }
            ButtonVariant::Outline => {
                "bg-white border border-gray-300 shadow-sm \
                 text-gray-800 \
                 hover:bg-gray-50 \
                 focus:ring-2 focus:ring-blue-500"
            }
        }
    }
}

impl ButtonSize {
    fn get_classes(&self) -> &'static str {
        match self {
            ButtonSize::Small => "px-2 py-1 text-xs",
            ButtonSize::Medium => "px-4 py-2 text-sm",
            ButtonSize::Large => "px-4 py-2 text-base",
        }
    }
}

fn combined_classes(
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    full_width: bool,
    class: &str,
) -> String {
    let variant = if disabled {
        ButtonVariant::Secondary
    } else {
        variant
    };
    let base_classes = "inline-flex items-center justify-center font-medium rounded-md transition-colors focus:outline-none";

    let disabled_classes = if disabled {
        "cursor-not-allowed"
    } else {
        "cursor-pointer"
    };

    let width_classes = if full_width { "w-full" } else { "" };

    format!(
        "{} {} {} {} {} {}",
        base_classes,
        variant.get_classes(),
        size.get_classes(),
        disabled_classes,
        width_classes,
        class
    )
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(into, default = false.into())] disabled: Signal<bool>,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] submit: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_click: Option<Callback<web_sys::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = move || combined_classes(variant, size, disabled.get(), full_width, &class);
    let button_type = if submit { "submit" } else { "button" };

    view! {
        <button
            type=button_type
            class=classes
            disabled=move || disabled.get()
            on:click=move |ev| {
                if !disabled.get_untracked() {
                    if let Some(handler) = on_click {
                        handler.run(ev);
                    }
                }
            }
        >

            {children()}
        </button>
    }
}

#[component]
pub fn LinkButton(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    #[prop(into)] href: String,
    #[prop(optional, into)] target: String,
    children: Children,
) -> impl IntoView {
    let combined_classes = format!("{} no-underline", combined_classes(variant, size, false, false, &class));
    let rel = (target == "_blank").then_some("noopener noreferrer");

    view! {
        <a class=combined_classes href=href target=target rel=rel>
            {children()}
        </a>
    }
}

impl Default for ButtonVariant {
    fn default() -> Self {
        ButtonVariant::Primary
    }
}

impl Default for ButtonSize {
    fn default() -> Self {
        ButtonSize::Medium
    }
}
