//! PDF rendering — turns assembled `ReportData` into document bytes.
//!
//! Layout is deliberately plain: US letter, one text column, built-in
//! Helvetica. Line breaks and page breaks are decided with the static metric
//! table in `font_metrics`, so the wrap the renderer commits to is the wrap
//! the viewer shows.

pub mod font_metrics;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::errors::AppError;
use crate::report::assembler::ReportData;
use crate::render::font_metrics::HELVETICA;

// US letter with 20 mm margins.
const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;
const MARGIN_MM: f32 = 20.0;
const MM_PER_PT: f32 = 0.352_778;

const TITLE_PT: f32 = 20.0;
const SUBTITLE_PT: f32 = 12.0;
const HEADING_PT: f32 = 13.0;
const BODY_PT: f32 = 11.0;
const FOOTER_PT: f32 = 9.0;
const LINE_SPACING: f32 = 1.45;
const SECTION_GAP_MM: f32 = 6.0;

/// Renders report data to PDF bytes. Held in `AppState` as
/// `Arc<dyn ReportRenderer>` so router tests can stub it out.
pub trait ReportRenderer: Send + Sync {
    fn render(&self, report: &ReportData) -> Result<Vec<u8>, AppError>;
}

/// Production renderer over printpdf's built-in fonts.
pub struct PdfRenderer;

impl ReportRenderer for PdfRenderer {
    fn render(&self, report: &ReportData) -> Result<Vec<u8>, AppError> {
        render_pdf(report)
            .map_err(|e| AppError::Render(format!("Failed to render PDF report: {e}")))
    }
}

fn render_pdf(report: &ReportData) -> Result<Vec<u8>, printpdf::Error> {
    let title = format!("Career Guidance Report for {}", report.student_name);
    let (doc, page, layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");

    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut writer = PageWriter {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        y_mm: PAGE_HEIGHT_MM - MARGIN_MM,
    };

    writer.write_line("Career Guidance Report", TITLE_PT, &bold);
    writer.write_wrapped(
        &format!("Prepared for {}", report.student_name),
        SUBTITLE_PT,
        &regular,
    );
    writer.write_wrapped(
        &format!("Career Goal: {}", report.career_goal),
        SUBTITLE_PT,
        &regular,
    );
    writer.add_gap(SECTION_GAP_MM);

    for section in &report.sections {
        writer.add_gap(SECTION_GAP_MM / 2.0);
        writer.write_wrapped(&section.topic, HEADING_PT, &bold);
        writer.write_wrapped(&section.narrative, BODY_PT, &regular);
    }

    writer.add_gap(SECTION_GAP_MM);
    let generated = chrono::Utc::now().format("%B %e, %Y");
    writer.write_line(&format!("Generated on {generated}"), FOOTER_PT, &regular);

    doc.save_to_bytes()
}

/// Tracks the write cursor and opens a fresh page when a line would land
/// inside the bottom margin.
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y_mm: f32,
}

impl PageWriter<'_> {
    fn write_line(&mut self, text: &str, size_pt: f32, font: &IndirectFontRef) {
        let line_height = line_height_mm(size_pt);
        if self.y_mm - line_height < MARGIN_MM {
            let (page, layer) =
                self.doc
                    .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y_mm = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        self.y_mm -= line_height;
        self.layer
            .use_text(text, size_pt, Mm(MARGIN_MM), Mm(self.y_mm), font);
    }

    /// Word-wraps `text` at the usable column width for `size_pt` and writes
    /// each resulting line.
    fn write_wrapped(&mut self, text: &str, size_pt: f32, font: &IndirectFontRef) {
        for line in HELVETICA.wrap_text(text, column_width_em(size_pt)) {
            self.write_line(&line, size_pt, font);
        }
    }

    fn add_gap(&mut self, gap_mm: f32) {
        self.y_mm -= gap_mm;
    }
}

fn line_height_mm(size_pt: f32) -> f32 {
    size_pt * MM_PER_PT * LINE_SPACING
}

/// Usable column width in em units at the given font size.
fn column_width_em(size_pt: f32) -> f32 {
    (PAGE_WIDTH_MM - 2.0 * MARGIN_MM) / MM_PER_PT / size_pt
}
