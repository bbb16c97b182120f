use anyhow::{anyhow, Context as _, Result};
use chrono::{DateTime, Local};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::freee::{Deal, HEADERS};

pub const INCOME_DEALS_PREFIX: &str = "income_deals";
pub const EXPENSE_DEALS_PREFIX: &str = "expense_deals";

pub fn output_filename(prefix: &str, now: DateTime<Local>) -> String {
    format!("{}_{}.csv", prefix, now.format("%Y%m%d%H%M%S"))
}

/// Writes the deals to `<output_dir>/<prefix>_<timestamp>.csv` and returns the path of the new file.
pub fn save_deals(deals: &[Deal], output_dir: &Path, prefix: &str) -> Result<PathBuf> {
    let path = output_dir.join(output_filename(prefix, Local::now()));
    log::info!("Saving {} deals to {}...", deals.len(), path.display());

    // First write to temporary file so a failed write never leaves a partial csv behind
    let filename = path
        .file_name()
        .ok_or_else(|| anyhow!("Path has no filename"))?
        .to_str()
        .ok_or_else(|| anyhow!("Filename isn't valid utf-8"))?;
    let tmppath = path.with_file_name(format!("{}.temp", filename));
    let result = File::create(&tmppath)
        .with_context(|| format!("Failed to create {}", tmppath.display()))
        .and_then(|file| write(BufWriter::new(file), deals));
    if let Err(err) = result {
        let _ = std::fs::remove_file(&tmppath);
        return Err(err.context(format!("Failed to write {}", path.display())));
    }

    std::fs::rename(&tmppath, &path)
        .with_context(|| format!("Failed to move {} into place", tmppath.display()))?;

    log::info!("Saving {} deals...done", deals.len());
    Ok(path)
}

/// Writes the header row followed by one row per deal. The header is written even if there are no deals.
pub fn write(output_stream: impl Write, deals: &[Deal]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output_stream);
    writer.write_record(HEADERS)?;
    for deal in deals {
        writer.serialize(deal)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone as _};

    use super::*;
    use crate::freee::{DealKind, TaxCategory};

    const HEADER_ROW: &str = "収支区分,管理番号,発生日,決済期日,取引先コード,取引先,勘定科目,税区分,金額,税計算区分,税額,備考,品目,部門,メモタグ（複数指定可、カンマ区切り）,セグメント1,セグメント2,セグメント3,決済日,決済口座,決済金額\n";

    fn deals() -> Vec<Deal> {
        vec![
            Deal::settled_on_occurrence(
                DealKind::Income,
                NaiveDate::from_ymd_opt(2019, 9, 1).unwrap(),
                "売上高".to_string(),
                TaxCategory::TaxableSales8,
                5000,
                "8月分".to_string(),
                "事業主貸",
            ),
            Deal::settled_on_occurrence(
                DealKind::Expense,
                NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                "旅費交通費".to_string(),
                TaxCategory::TaxablePurchase10,
                -3000,
                "移動, 渋谷".to_string(),
                "事業主借",
            ),
        ]
    }

    fn write_to_string(deals: &[Deal]) -> String {
        let mut output = Vec::new();
        write(&mut output, deals).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn header_has_all_columns() {
        assert_eq!(21, HEADERS.len());
        assert_eq!(HEADER_ROW, write_to_string(&[]));
    }

    #[test]
    fn rows() {
        assert_eq!(
            format!(
                "{HEADER_ROW}\
                収入,,2019/09/01,,,,売上高,課税売上8%,5000,税込,,8月分,,,,,,,2019/09/01,事業主貸,5000\n\
                支出,,2020/01/01,,,,旅費交通費,課対仕入10%,-3000,税込,,\"移動, 渋谷\",,,,,,,2020/01/01,事業主借,-3000\n"
            ),
            write_to_string(&deals())
        );
    }

    #[test]
    fn filename() {
        let now = Local.with_ymd_and_hms(2020, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(
            "income_deals_20200304050607.csv",
            output_filename(INCOME_DEALS_PREFIX, now)
        );
        assert_eq!(
            "expense_deals_20200304050607.csv",
            output_filename(EXPENSE_DEALS_PREFIX, now)
        );
    }

    #[test]
    fn save_to_directory() {
        let tempdir = tempfile::tempdir().unwrap();

        let path = save_deals(&deals(), tempdir.path(), EXPENSE_DEALS_PREFIX).unwrap();

        assert_eq!(tempdir.path(), path.parent().unwrap());
        let filename = path.file_name().unwrap().to_str().unwrap();
        assert!(filename.starts_with("expense_deals_"));
        assert!(filename.ends_with(".csv"));
        assert_eq!(
            write_to_string(&deals()),
            std::fs::read_to_string(&path).unwrap()
        );
        // No leftover temporary file
        assert_eq!(1, std::fs::read_dir(tempdir.path()).unwrap().count());
    }

    #[test]
    fn save_to_missing_directory() {
        let tempdir = tempfile::tempdir().unwrap();
        let output_dir = tempdir.path().join("does-not-exist");

        assert!(save_deals(&deals(), &output_dir, INCOME_DEALS_PREFIX).is_err());
        assert!(!output_dir.exists());
    }
}
