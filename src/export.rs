//! Delivering the exported PNG to the user.

use log::info;

use crate::error::DrawingResult;

/// Write the PNG next to the working directory and return where it went
#[cfg(not(target_arch = "wasm32"))]
pub fn save_png(png: &[u8], file_name: &str) -> DrawingResult<String> {
    let path = std::env::current_dir()?.join(file_name);
    std::fs::write(&path, png)?;
    info!("Saved {} bytes to {}", png.len(), path.display());
    Ok(path.display().to_string())
}

/// Offer the PNG as a browser download
#[cfg(target_arch = "wasm32")]
pub fn save_png(png: &[u8], file_name: &str) -> DrawingResult<String> {
    use crate::error::DrawingError;
    use wasm_bindgen::JsCast;

    let js_err = |err: wasm_bindgen::JsValue| DrawingError::Export(format!("{err:?}"));

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| DrawingError::Export("no document".into()))?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(png));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| DrawingError::Export("anchor cast failed".into()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).ok();
    info!("Offered {} bytes as {}", png.len(), file_name);
    Ok(file_name.to_owned())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_save_writes_file() {
        let name = format!("drawing_board_export_test_{}.png", std::process::id());
        let saved = save_png(&[1, 2, 3], &name).unwrap();
        assert_eq!(std::fs::read(&saved).unwrap(), vec![1, 2, 3]);
        std::fs::remove_file(&saved).unwrap();
    }
}
