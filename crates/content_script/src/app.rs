use crate::pages::{board, issue_details, merge_request_details, merge_request_list};
use crate::selection::key_observer::observe_modifier_keys;
use crate::selection::SelectionController;
use crate::shared::clipboard::{ClipboardSink, ClipboardWriter};
use crate::shared::copy_action::CopyContext;
use crate::shared::dom::{self, ContentError};
use crate::shared::timer::GlooTimer;
use contracts::shared::config::{load_config, ConfigError, ExtensionConfig, CONFIG_STORAGE_KEY};
use std::rc::Rc;

/// Configuration override stored in `localStorage`, if any
fn stored_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(CONFIG_STORAGE_KEY)
        .ok()?
}

pub fn load_stored_config() -> Result<ExtensionConfig, ConfigError> {
    load_config(stored_override().as_deref())
}

/// Wire the selection controller to the keyboard and add buttons to the page.
pub fn run(config: &ExtensionConfig) -> Result<(), ContentError> {
    let document = dom::document()?;
    let url = dom::current_url()?;

    let writer: Rc<dyn ClipboardSink> = Rc::new(ClipboardWriter::browser());
    let controller = Rc::new(
        SelectionController::new(Rc::clone(&writer)).with_separator(config.separator.clone()),
    );
    observe_modifier_keys(
        &document,
        Rc::clone(&controller),
        config.tracked_keys.clone(),
    )?;

    let ctx = CopyContext {
        controller,
        writer,
        timer: Rc::new(GlooTimer),
        reset_delay_ms: config.reset_delay_ms,
        icons: config.icons.clone(),
    };

    let integrations = [
        ("issue board", board::setup(&document, &ctx)),
        ("merge request list", merge_request_list::setup(&document, &ctx)),
        ("issue details", issue_details::setup(&document, &url, &ctx)),
        (
            "merge request details",
            merge_request_details::setup(&document, &url, &ctx),
        ),
    ];
    for (page, result) in integrations {
        if let Err(err) = result {
            log::error!("Failed to set up {}: {}", page, err);
        }
    }

    log::info!("Clipboard buttons ready");
    Ok(())
}
