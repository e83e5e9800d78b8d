//! PDF Download Helpers
//!
//! Turns report bytes from the backend into a browser download with the
//! documented filename pattern `case_<case_number>_<variant>_<date>.pdf`.

use chrono::NaiveDate;
use wasm_bindgen::JsCast;

/// Which report flavor was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportVariant {
    /// Existing endpoint, no activity detail
    Basic,
    /// Includes activities and content
    Detailed,
}

impl ReportVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Detailed => "detailed",
        }
    }

    pub fn detailed(self) -> bool {
        matches!(self, Self::Detailed)
    }
}

/// Case numbers come from the backend and may contain `/` or spaces;
/// everything outside `[A-Za-z0-9-]` becomes `_` in the filename.
fn sanitize(case_number: &str) -> String {
    case_number
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}

/// Build the download filename for one report
pub fn report_filename(case_number: &str, variant: ReportVariant, date: NaiveDate) -> String {
    format!(
        "case_{}_{}_{}.pdf",
        sanitize(case_number),
        variant.as_str(),
        date.format("%Y%m%d")
    )
}

/// Hand the PDF bytes to the browser as a named download.
///
/// Creates an object URL for a Blob, clicks a transient anchor, then
/// revokes the URL.
pub fn save_pdf(bytes: &[u8], filename: &str) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("blob creation failed: {:?}", e))?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("object URL failed: {:?}", e))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("anchor creation failed: {:?}", e))?
        .dyn_into()
        .map_err(|_| "anchor cast failed".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
    }

    #[test]
    fn filename_follows_documented_pattern() {
        let name = report_filename("CR-2025-001", ReportVariant::Basic, date());
        assert_eq!(name, "case_CR-2025-001_basic_20250630.pdf");
    }

    #[test]
    fn basic_and_detailed_filenames_differ() {
        let basic = report_filename("CR-2025-001", ReportVariant::Basic, date());
        let detailed = report_filename("CR-2025-001", ReportVariant::Detailed, date());
        assert_ne!(basic, detailed);
        assert!(detailed.contains("_detailed_"));
    }

    #[test]
    fn case_number_is_sanitized() {
        let name = report_filename("CR/2025 001", ReportVariant::Detailed, date());
        assert_eq!(name, "case_CR_2025_001_detailed_20250630.pdf");
    }
}
