use lopdf::Document as LopdfDocument;

/// Extract all text content from a PDF document
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        text.push_str(&page_text(doc, page_num as u32));
        text.push('\n');
    }
    text
}

/// Text of a single 1-based page, empty when extraction fails
pub fn page_text(doc: &LopdfDocument, page_num: u32) -> String {
    doc.extract_text(&[page_num]).unwrap_or_default()
}

/// Base font names from the resource dictionary of the first page
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = Vec::new();
    let Some(page_id) = doc.get_pages().get(&1).copied() else {
        return fonts;
    };
    let Ok(page_dict) = doc.get_dictionary(page_id) else {
        return fonts;
    };
    let Ok(resources) = page_dict.get(b"Resources") else {
        return fonts;
    };
    // Resources may be stored inline or as a reference
    let resources_dict = match resources.as_reference() {
        Ok(id) => doc.get_dictionary(id).ok(),
        Err(_) => resources.as_dict().ok(),
    };
    let Some(font_dict) = resources_dict.and_then(|r| r.get(b"Font").and_then(|f| f.as_dict()).ok()) else {
        return fonts;
    };
    for (_name, font) in font_dict.iter() {
        if let Ok(base_font) = font.as_dict().and_then(|d| d.get(b"BaseFont")).and_then(|b| b.as_name()) {
            fonts.push(String::from_utf8_lossy(base_font).to_string());
        }
    }
    fonts
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert that PDF does NOT contain specific text
#[macro_export]
macro_rules! assert_pdf_not_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            !extracted.contains($text),
            "PDF should NOT contain '{}', but it was found in:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF references a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should contain font matching '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}
