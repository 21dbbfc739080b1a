//! Browser-side utilities shared by the pages.
//!
//! - **User Feedback**: transient toast notifications for actions that have
//!   no inline result, such as an export.
//! - **Downloads**: turning an exported CSV string into a file download.
//! - **Dates**: today's date as `YYYY-MM-DD` for export file names.

use common::view::{export_csv, export_file_name, CsvExport};
use gloo_console::error;
use js_sys::{Array, Date};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlElement, Url};

/// Displays `message` at the bottom of the page for three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(15, 23, 42, 0.9)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "6px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-size", "14px").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Offers `content` to the browser as a UTF-8 CSV file named `file_name`.
pub fn download_csv(file_name: &str, content: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;

    let parts = Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    Url::revoke_object_url(&url)
}

/// Exports `rows` as today's CSV file and reports the outcome in a toast.
pub fn export_rows<'a, R, I>(rows: I)
where
    R: CsvExport + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let file_name = export_file_name::<R>(&today_iso());
    let outcome = export_csv(rows)
        .map_err(|e| e.to_string())
        .and_then(|csv| download_csv(&file_name, &csv).map_err(|e| format!("{:?}", e)));

    match outcome {
        Ok(()) => show_toast(&format!("Archivo {} descargado", file_name)),
        Err(e) => {
            error!(format!("export of {} failed: {}", file_name, e));
            show_toast("No se pudo exportar el archivo");
        }
    }
}

/// Current UTC date, `YYYY-MM-DD`.
pub fn today_iso() -> String {
    String::from(Date::new_0().to_iso_string())
        .chars()
        .take(10)
        .collect()
}
