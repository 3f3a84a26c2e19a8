use crate::shared::assets::extension_asset_url;
use crate::shared::copy_action::{CopyAction, CopyIndicator};
use crate::shared::dom::COPY_BUTTON_CLASS;
use contracts::shared::config::IconConfig;
use leptos::prelude::*;

/// Icon URL for each indicator state
#[derive(Clone)]
struct IconUrls {
    copy: String,
    copied: String,
}

impl IconUrls {
    fn resolve(icons: &IconConfig) -> Self {
        Self {
            copy: extension_asset_url(&icons.copy),
            copied: extension_asset_url(&icons.copied),
        }
    }

    fn for_state(&self, state: CopyIndicator) -> String {
        match state {
            CopyIndicator::Idle => self.copy.clone(),
            CopyIndicator::Completed => self.copied.clone(),
        }
    }
}

/// Small icon button placed in list rows and board cards
#[component]
pub fn CopyButton(
    /// Behaviour on click
    action: CopyAction,
    icons: IconConfig,
) -> impl IntoView {
    let indicator = RwSignal::new(CopyIndicator::Idle);
    let urls = IconUrls::resolve(&icons);

    view! {
        <span class=COPY_BUTTON_CLASS style="margin-top: -2.5px; margin-right: 4px;">
            <img
                src=move || urls.for_state(indicator.get())
                style="width: 16px; height: 16px; cursor: copy;"
                on:click=move |_| action.trigger(move |state| indicator.set(state))
            />
        </span>
    }
}

/// Header-sized button used on issue and merge request detail pages
#[component]
pub fn LargeCopyButton(
    action: CopyAction,
    icons: IconConfig,
    /// Extra inline CSS appended after the defaults
    #[prop(optional, into)]
    style: Option<String>,
) -> impl IntoView {
    let indicator = RwSignal::new(CopyIndicator::Idle);
    let urls = IconUrls::resolve(&icons);
    let button_ref = NodeRef::<leptos::html::Button>::new();

    let style = format!(
        "margin-left: auto; margin-right: 12px; height: 32px; border-radius: 4px; border-color: #e5e5e5; {}",
        style.unwrap_or_default()
    );

    let on_state = move |state: CopyIndicator| {
        indicator.set(state);
        if state == CopyIndicator::Idle {
            // Drop the focus ring GitLab keeps on clicked buttons
            if let Some(button) = button_ref.get_untracked() {
                let _ = button.blur();
            }
        }
    };

    view! {
        <button
            type="button"
            class=format!("btn btn-default {}", COPY_BUTTON_CLASS)
            style=style
            node_ref=button_ref
            on:click=move |_| action.trigger(on_state)
        >
            <img
                src=move || urls.for_state(indicator.get())
                style="width: 16px; height: 16px; margin-top: -2.5px;"
            />
        </button>
    }
}
