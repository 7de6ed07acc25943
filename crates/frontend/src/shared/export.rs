/// Saving server-rendered export files through the browser
use contracts::shared::ExportRequest;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::shared::date_utils::format_stamp_for_filename;

/// Build the download file name for an export
///
/// Example: "Daftar Produk 07.03.2025 09.05 - Gudangin (Custom Export).xlsx".
/// The suffix marks exports narrowed to selected rows or to a date range.
pub fn export_file_name(
    list_label: &str,
    request: &ExportRequest,
    at: chrono::NaiveDateTime,
) -> String {
    let suffix = if request.is_scoped() {
        " (Custom Export)"
    } else if request.has_date_range() {
        " (Custom Range Export)"
    } else {
        ""
    };
    format!(
        "{} {} - Gudangin{}.{}",
        list_label,
        format_stamp_for_filename(at),
        suffix,
        request.format.extension()
    )
}

/// Save export bytes as a file and initiate the browser download
pub fn save_export(bytes: &[u8], mime: &str, filename: &str) -> Result<(), String> {
    let blob = create_binary_blob(bytes, mime)?;
    download_blob(&blob, filename)
}

/// Create a Blob holding the file bytes
fn create_binary_blob(bytes: &[u8], mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Initiate a browser download for the Blob
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    // Temporary hidden link, clicked and removed right away
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::ExportFormat;

    fn stamp() -> chrono::NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
    }

    #[test]
    fn test_plain_export_name() {
        let request = ExportRequest::new(ExportFormat::Xlsx);
        assert_eq!(
            export_file_name("Daftar Produk", &request, stamp()),
            "Daftar Produk 07.03.2025 09.05 - Gudangin.xlsx"
        );
    }

    #[test]
    fn test_scoped_export_name() {
        let mut request = ExportRequest::new(ExportFormat::Csv);
        request.ids = Some(vec!["a".into()]);
        assert_eq!(
            export_file_name("Daftar Produk", &request, stamp()),
            "Daftar Produk 07.03.2025 09.05 - Gudangin (Custom Export).csv"
        );
    }

    #[test]
    fn test_range_export_name() {
        let mut request = ExportRequest::new(ExportFormat::Xlsx);
        request.date_from = chrono::NaiveDate::from_ymd_opt(2025, 1, 1);
        assert_eq!(
            export_file_name("Daftar Produk", &request, stamp()),
            "Daftar Produk 07.03.2025 09.05 - Gudangin (Custom Range Export).xlsx"
        );
    }

    #[test]
    fn test_scoped_wins_over_range() {
        let mut request = ExportRequest::new(ExportFormat::Xlsx);
        request.ids = Some(vec!["a".into()]);
        request.date_from = chrono::NaiveDate::from_ymd_opt(2025, 1, 1);
        let name = export_file_name("Daftar Produk", &request, stamp());
        assert!(name.contains("(Custom Export)"));
    }
}
