//! Browser interop: localization, alerts, navigation and files.

use anyhow::anyhow;
use js_sys::{Function, Promise, Reflect};
use leptos::*;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader, FormData, HtmlFormElement};

use yplaces_core::{
    config::{PageConfig, CONFIG_ELEMENT_ID},
    message::Msg,
};

/// Field name of the picture in the multipart body.
const PHOTO_FIELD: &str = "file";

/// Translates `key` with the `gettext` function of the page.
///
/// Falls back to the key itself if no translation catalog is loaded.
pub fn gettext(key: &str) -> String {
    let window: JsValue = window().into();
    Reflect::get(&window, &JsValue::from_str("gettext"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .and_then(|f| f.call1(&JsValue::NULL, &JsValue::from_str(key)).ok())
        .and_then(|text| text.as_string())
        .unwrap_or_else(|| key.to_owned())
}

pub fn tr(msg: Msg) -> String {
    gettext(msg.key())
}

pub fn alert(msg: Msg) {
    if let Err(err) = window().alert_with_message(&tr(msg)) {
        log::warn!("Unable to show alert: {}", js_error(&err));
    }
}

pub fn navigate(path: &str) -> anyhow::Result<()> {
    window().location().set_href(path).map_err(|err| js_error(&err))
}

pub fn load_page_config() -> anyhow::Result<PageConfig> {
    let json = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .ok_or_else(|| anyhow!("No #{CONFIG_ELEMENT_ID} element found"))?;
    Ok(PageConfig::from_json(&json)?)
}

pub async fn read_as_data_url(file: &File) -> anyhow::Result<String> {
    let reader = FileReader::new().map_err(|err| js_error(&err))?;
    let loaded = Promise::new(&mut |resolve, reject| {
        let on_load = Closure::once_into_js(move || {
            _ = resolve.call0(&JsValue::NULL);
        });
        let on_error = Closure::once_into_js(move || {
            _ = reject.call1(&JsValue::NULL, &JsValue::from_str("Unable to read file"));
        });
        reader.set_onload(Some(on_load.unchecked_ref()));
        reader.set_onerror(Some(on_error.unchecked_ref()));
    });
    reader
        .read_as_data_url(file)
        .map_err(|err| js_error(&err))?;
    JsFuture::from(loaded).await.map_err(|err| js_error(&err))?;
    reader
        .result()
        .map_err(|err| js_error(&err))?
        .as_string()
        .ok_or_else(|| anyhow!("File reader returned no data URL"))
}

/// Collects all fields of `form` and appends the picture.
pub fn photo_form_data(form: &HtmlFormElement, file: &File) -> anyhow::Result<FormData> {
    let form_data = FormData::new_with_form(form).map_err(|err| js_error(&err))?;
    form_data
        .append_with_blob(PHOTO_FIELD, file)
        .map_err(|err| js_error(&err))?;
    Ok(form_data)
}

fn js_error(err: &JsValue) -> anyhow::Error {
    anyhow!(err
        .as_string()
        .unwrap_or_else(|| "unknown JS error".to_string()))
}
