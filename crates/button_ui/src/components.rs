//! Leptos button primitives driven by [`ButtonConfig`] and the context style sheet.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::{ButtonConfig, ButtonShape, ButtonSize, ButtonStyles, ButtonType};

/// Makes `styles` the style sheet for every [`Button`] rendered below the current owner.
pub fn provide_button_styles(styles: ButtonStyles) {
    provide_context(styles);
}

/// Style sheet provided by the nearest ancestor, or the built-in one.
pub fn use_button_styles() -> ButtonStyles {
    use_context::<ButtonStyles>().unwrap_or_default()
}

fn merge_layout_class(base: String, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base,
    }
}

fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[component]
/// Shared button primitive accepting exactly a shape, a size, and a semantic type.
pub fn Button(
    #[prop(default = ButtonShape::Pill)] shape: ButtonShape,
    #[prop(default = ButtonSize::Small)] size: ButtonSize,
    #[prop(default = ButtonType::Button)] button_type: ButtonType,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let config = ButtonConfig::new(shape, size, button_type);
    let styles = use_button_styles();
    view! {
        <button
            type=config.button_type.token()
            class=move || merge_layout_class(styles.class_for(config, disabled.get()), layout_class)
            id=id
            aria-label=move || aria_label.get()
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-shape=config.shape.token()
            data-ui-size=config.size.token()
            data-ui-type=config.button_type.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Every valid button configuration, one labelled [`Button`] each.
pub fn ButtonGallery(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-button-gallery".to_string(), layout_class)
            role="group"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="button-gallery"
        >
            {ButtonConfig::all()
                .map(|config| {
                    let label = config.to_string();
                    view! {
                        <Button
                            shape=config.shape
                            size=config.size
                            button_type=config.button_type
                            title=label.clone()
                        >
                            {label}
                        </Button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("a b".to_string(), Some("grow")), "a b grow");
        assert_eq!(merge_layout_class("a b".to_string(), Some("")), "a b");
        assert_eq!(merge_layout_class("a b".to_string(), None), "a b");
    }

    #[test]
    fn bool_tokens_are_attribute_strings() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }
}
