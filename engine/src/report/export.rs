// Report exports: delimited text unconditionally, XLSX behind the `xlsx`
// feature (when the writer is unavailable the path is skipped with a
// visible warning, never an error).

use csv::WriterBuilder;
use shared::models::Row;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::settings::EngineSettings;
use crate::data::csv_loader;
use crate::error::EngineError;
use crate::report::summary::SummaryReport;

/// Two-column summary report: metric name; value.
pub fn write_summary_csv(
    path: &Path,
    summary: &SummaryReport,
    delimiter: u8,
) -> Result<(), EngineError> {
    let mut wtr = WriterBuilder::new().delimiter(delimiter).from_path(path)?;
    wtr.write_record(["Métrica", "Valor"])?;
    for (label, value) in &summary.metrics {
        wtr.write_record([label.as_str(), &value.to_string()])?;
    }
    wtr.flush()?;
    info!(path = %path.display(), metrics = summary.metrics.len(), "Wrote summary report");
    Ok(())
}

/// One XLSX workbook: a summary sheet plus the detailed filtered rows.
#[cfg(feature = "xlsx")]
pub fn write_xlsx(
    path: &Path,
    summary: &SummaryReport,
    rows: &[Row],
    settings: &EngineSettings,
) -> Result<(), EngineError> {
    use crate::data::columns;
    use rust_xlsxwriter::Workbook;

    let export = || -> Result<(), rust_xlsxwriter::XlsxError> {
        let mut workbook = Workbook::new();

        let sheet = workbook.add_worksheet();
        sheet.set_name(&settings.summary_sheet)?;
        sheet.write_string(0, 0, "Métrica")?;
        sheet.write_string(0, 1, "Valor")?;
        for (i, (label, value)) in summary.metrics.iter().enumerate() {
            let r = (i + 1) as u32;
            sheet.write_string(r, 0, label)?;
            sheet.write_number(r, 1, *value)?;
        }
        sheet.autofit();

        let sheet = workbook.add_worksheet();
        sheet.set_name(&settings.detail_sheet)?;
        for (c, header) in columns::output_header().iter().enumerate() {
            sheet.write_string(0, c as u16, *header)?;
        }
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in columns::row_to_record(row).iter().enumerate() {
                sheet.write_string((r + 1) as u32, c as u16, cell)?;
            }
        }

        workbook.save(path)?;
        Ok(())
    };

    export().map_err(|e| EngineError::ExportError(format!("{}: {}", path.display(), e)))?;
    info!(path = %path.display(), rows = rows.len(), "Wrote XLSX report");
    Ok(())
}

/// Without the writer the XLSX path is skipped; the CSV exports remain the
/// supported route.
#[cfg(not(feature = "xlsx"))]
pub fn write_xlsx(
    path: &Path,
    _summary: &SummaryReport,
    _rows: &[Row],
    _settings: &EngineSettings,
) -> Result<(), EngineError> {
    tracing::warn!(
        path = %path.display(),
        "XLSX export skipped: engine built without the 'xlsx' feature"
    );
    Ok(())
}

/// Server-side snapshot pair (summary + detailed rows), timestamped so
/// successive saves do not clobber each other.
pub fn write_snapshots(
    dir: &Path,
    summary: &SummaryReport,
    rows: &[Row],
    settings: &EngineSettings,
) -> Result<(PathBuf, PathBuf), EngineError> {
    let stamp = chrono::Local::now().format("%Y-%m-%dT%H-%M-%S");
    let summary_path = dir.join(format!("{}_resumido_{}.csv", settings.snapshot_prefix, stamp));
    let detail_path = dir.join(format!("{}_detalhado_{}.csv", settings.snapshot_prefix, stamp));
    write_summary_csv(&summary_path, summary, settings.delimiter_byte())?;
    csv_loader::write_rows_csv(&detail_path, rows, settings.delimiter_byte())?;
    Ok((summary_path, detail_path))
}
