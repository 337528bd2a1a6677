use printpdf::image_crate::{Rgba, RgbaImage};
use rust_decimal_macros::dec;
use seller_proceeds::render::{Logo, PdfRenderer, StatementRenderer};
use seller_proceeds::worksheet::{
    WorksheetDraft, WorksheetService, WorksheetSettings, DISCLAIMER, TAX_NOTE, WORKSHEET_TITLE,
};

fn draft() -> WorksheetDraft {
    WorksheetDraft {
        name: "Jane Seller".to_string(),
        property: "418 Maple Ave".to_string(),
        selling_price: dec!(425000),
        mortgage_balance: dec!(212500.37),
        well_septic_inspection: dec!(475),
        well_septic_note: "buyer requested".to_string(),
        ..WorksheetDraft::default()
    }
}

/// Decoded content streams of every page in the document.
fn page_content(bytes: &[u8]) -> Vec<u8> {
    let document = lopdf::Document::load_mem(bytes).expect("pdf parses");
    let pages = document.get_pages();
    assert_eq!(pages.len(), 1, "worksheet fits on one page");
    pages
        .values()
        .flat_map(|page| document.get_page_content(*page).expect("page content"))
        .collect()
}

/// Whether `text` is drawn in `content`, as a literal or hex string.
fn shows_text(content: &[u8], text: &str) -> bool {
    let literal = text.as_bytes();
    let hex: String = literal.iter().map(|byte| format!("{byte:02x}")).collect();
    let lowered = String::from_utf8_lossy(content).to_lowercase();
    content.windows(literal.len()).any(|window| window == literal) || lowered.contains(&hex)
}

#[test]
fn pdf_draws_title_rows_and_totals() {
    let service = WorksheetService::default();
    let worksheet = service.prepare(draft()).expect("worksheet prepares");
    assert_eq!(worksheet.totals.total_selling_expense, dec!(31661));
    assert_eq!(worksheet.totals.approximate_proceeds, dec!(180838.63));

    let document = service.render_pdf(&worksheet).expect("pdf renders");
    let content = page_content(&document.bytes);

    for text in [
        WORKSHEET_TITLE,
        "Name:",
        "Jane Seller",
        "418 Maple Ave",
        "Selling Price",
        "$425,000.00",
        "$212,500.37",
        "buyer requested",
        "Total Selling Expense",
        "$31,661.00",
        "Approximate Proceeds to Seller",
        "$180,838.63",
        TAX_NOTE,
    ] {
        assert!(shows_text(&content, text), "missing {text:?} in page content");
    }

    let first_disclaimer_word = DISCLAIMER.split_whitespace().next().expect("disclaimer text");
    assert!(shows_text(&content, first_disclaimer_word));
}

#[test]
fn renders_pdf_without_logo() {
    let service = WorksheetService::new(WorksheetSettings {
        logo_path: Some("no-such-dir/logo.png".into()),
        ..WorksheetSettings::default()
    });
    let worksheet = service.prepare(draft()).expect("worksheet prepares");

    let document = service.render_pdf(&worksheet).expect("pdf renders");
    assert_eq!(document.file_name, "Seller_Cash_Proceeds_Jane_Seller.pdf");
    assert!(document.bytes.starts_with(b"%PDF"));
}

#[test]
fn renders_pdf_with_logo_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("logo.png");
    let mut image = RgbaImage::new(40, 10);
    for pixel in image.pixels_mut() {
        *pixel = Rgba([12, 80, 160, 255]);
    }
    image.save(&path).expect("logo written");

    let logo = Logo::load(&path).expect("logo loads");
    assert_eq!((logo.width_px, logo.height_px), (40, 10));

    let service = WorksheetService::new(WorksheetSettings {
        logo_path: Some(path),
        ..WorksheetSettings::default()
    });
    let worksheet = service.prepare(draft()).expect("worksheet prepares");
    let with_logo = service.render_pdf(&worksheet).expect("pdf renders");

    let without_logo = PdfRenderer::new(None)
        .render(&worksheet.statement())
        .expect("pdf renders");
    assert!(with_logo.bytes.starts_with(b"%PDF"));
    assert!(with_logo.bytes.len() > without_logo.len());
}

#[test]
fn corrupt_logo_is_skipped() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("logo.png");
    std::fs::write(&path, b"not really a png").expect("file written");

    assert!(Logo::load(&path).is_none());

    let service = WorksheetService::new(WorksheetSettings {
        logo_path: Some(path),
        ..WorksheetSettings::default()
    });
    let worksheet = service.prepare(draft()).expect("worksheet prepares");
    let document = service.render_pdf(&worksheet).expect("pdf renders");
    assert!(document.bytes.starts_with(b"%PDF"));
}
