//! CER/WER evaluation of OCR output against ground truth, row by row.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;

use crate::config::{EvalConfig, OutputFormat};
use crate::error::{EvalError, Result};
use crate::metrics::{character_error_rate, error_rate, word_error_rate};
use crate::normalization::khmer_normalize;
use crate::tokenizer::Tokenizer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalRecord {
    pub name: String,
    pub gt: String,
    pub ocr: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalResult {
    pub name: String,
    pub gt: String,
    pub ocr: String,
    pub gt_segmented: String,
    pub ocr_segmented: String,
    #[serde(rename = "CER")]
    pub cer: f64,
    #[serde(rename = "WER")]
    pub wer: f64,
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{FEFF}').trim() == name)
}

/// Reads evaluation rows from CSV with a header row. Empty or missing cells
/// read as empty strings. Without a name column, rows are named by their
/// 1-based position.
pub fn read_records<R: Read>(reader: R, config: &EvalConfig) -> Result<Vec<EvalRecord>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();

    let gt_idx = column_index(&headers, &config.gt_column)
        .ok_or_else(|| EvalError::MissingColumn(config.gt_column.clone()))?;
    let ocr_idx = column_index(&headers, &config.ocr_column)
        .ok_or_else(|| EvalError::MissingColumn(config.ocr_column.clone()))?;
    let name_idx = column_index(&headers, &config.name_column);
    if name_idx.is_none() {
        log::warn!("No `{}` column; naming rows by position", config.name_column);
    }

    let limit = config.limit.unwrap_or(usize::MAX);
    let mut records = Vec::new();
    for (row, rec) in rdr.records().take(limit).enumerate() {
        let rec = rec?;
        let cell = |idx: usize| rec.get(idx).unwrap_or("").to_string();
        records.push(EvalRecord {
            name: name_idx.map_or_else(|| (row + 1).to_string(), cell),
            gt: cell(gt_idx),
            ocr: cell(ocr_idx),
        });
    }
    Ok(records)
}

pub fn read_records_from_path(path: impl AsRef<Path>, config: &EvalConfig) -> Result<Vec<EvalRecord>> {
    let path = path.as_ref();
    let records = read_records(BufReader::new(File::open(path)?), config)?;
    log::info!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

pub fn evaluate_record(record: &EvalRecord, tokenizer: &dyn Tokenizer, config: &EvalConfig) -> EvalResult {
    let (gt_clean, ocr_clean) = if config.enable_normalization {
        (khmer_normalize(&record.gt), khmer_normalize(&record.ocr))
    } else {
        (record.gt.clone(), record.ocr.clone())
    };

    let gt_tokens = tokenizer.tokenize(&gt_clean);
    let ocr_tokens = tokenizer.tokenize(&ocr_clean);

    let (cer, wer) = if config.enable_normalization {
        (
            character_error_rate(&gt_clean, &ocr_clean),
            word_error_rate(&gt_tokens, &ocr_tokens),
        )
    } else {
        let gt_chars: Vec<char> = gt_clean.chars().collect();
        let ocr_chars: Vec<char> = ocr_clean.chars().collect();
        (error_rate(&gt_chars, &ocr_chars), error_rate(&gt_tokens, &ocr_tokens))
    };

    EvalResult {
        name: record.name.clone(),
        gt: record.gt.clone(),
        ocr: record.ocr.clone(),
        gt_segmented: gt_tokens.join(&config.separator),
        ocr_segmented: ocr_tokens.join(&config.separator),
        cer,
        wer,
    }
}

/// Evaluates every record, in parallel when `config.threads > 1`. Results
/// keep input order.
pub fn evaluate_batch(
    records: &[EvalRecord],
    tokenizer: &dyn Tokenizer,
    config: &EvalConfig,
) -> Result<Vec<EvalResult>> {
    if config.threads <= 1 {
        log::debug!("Evaluating {} records sequentially", records.len());
        return Ok(records.iter().map(|r| evaluate_record(r, tokenizer, config)).collect());
    }

    log::debug!("Evaluating {} records on {} threads", records.len(), config.threads);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(config.threads).build()?;
    Ok(pool.install(|| {
        records
            .par_iter()
            .map(|r| evaluate_record(r, tokenizer, config))
            .collect()
    }))
}

/// Writes results as CSV (with a UTF-8 BOM so spreadsheet tools pick the
/// right encoding) or as JSON Lines.
pub fn write_results<W: Write>(mut writer: W, results: &[EvalResult], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => {
            writer.write_all("\u{FEFF}".as_bytes())?;
            let mut wtr = csv::Writer::from_writer(writer);
            for r in results {
                wtr.serialize(r)?;
            }
            if results.is_empty() {
                wtr.write_record(["name", "gt", "ocr", "gt_segmented", "ocr_segmented", "CER", "WER"])?;
            }
            wtr.flush()?;
        }
        OutputFormat::Jsonl => {
            for r in results {
                serde_json::to_writer(&mut writer, r)?;
                writer.write_all(b"\n")?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

pub fn write_results_to_path(path: impl AsRef<Path>, results: &[EvalResult], format: OutputFormat) -> Result<()> {
    let path = path.as_ref();
    write_results(BufWriter::new(File::create(path)?), results, format)?;
    log::info!("Results saved to {}", path.display());
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub records: usize,
    pub mean_cer: f64,
    pub mean_wer: f64,
    /// Rows whose normalized texts matched exactly (CER of 0).
    pub exact_matches: usize,
}

impl Summary {
    pub fn from_results(results: &[EvalResult]) -> Self {
        let records = results.len();
        if records == 0 {
            return Summary { records, mean_cer: 0.0, mean_wer: 0.0, exact_matches: 0 };
        }
        let n = records as f64;
        Summary {
            records,
            mean_cer: results.iter().map(|r| r.cer).sum::<f64>() / n,
            mean_wer: results.iter().map(|r| r.wer).sum::<f64>() / n,
            exact_matches: results.iter().filter(|r| r.cer == 0.0).count(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records, mean CER {:.4}, mean WER {:.4}, {} exact matches",
            self.records, self.mean_cer, self.mean_wer, self.exact_matches
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::SyllableTokenizer;

    fn record(gt: &str, ocr: &str) -> EvalRecord {
        EvalRecord { name: "r".to_string(), gt: gt.to_string(), ocr: ocr.to_string() }
    }

    #[test]
    fn equivalent_orderings_score_zero() {
        let config = EvalConfig::default();
        let res = evaluate_record(&record("ខ្មែរ", "ខែ្មរ"), &SyllableTokenizer, &config);
        assert_eq!(res.cer, 0.0);
        assert_eq!(res.wer, 0.0);
        assert_eq!(res.gt_segmented, "ខ្មែ | រ");
        assert_eq!(res.ocr_segmented, res.gt_segmented);
        assert_eq!(res.ocr, "ខែ្មរ");
    }

    #[test]
    fn without_normalization_order_counts() {
        let config = EvalConfig { enable_normalization: false, ..EvalConfig::default() };
        let res = evaluate_record(&record("ខ្មែរ", "ខែ្មរ"), &SyllableTokenizer, &config);
        assert!(res.cer > 0.0);
    }

    #[test]
    fn reads_csv_with_missing_cells() {
        let csv = "name,gt,ocr\na,ក,ខ\nb,គ\n";
        let records = read_records(csv.as_bytes(), &EvalConfig::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], EvalRecord { name: "b".into(), gt: "គ".into(), ocr: String::new() });
    }

    #[test]
    fn missing_column_is_reported() {
        let err = read_records("name,gt\na,ក\n".as_bytes(), &EvalConfig::default()).unwrap_err();
        assert!(matches!(err, EvalError::MissingColumn(ref c) if c == "ocr"));
    }

    #[test]
    fn rows_without_name_column_are_numbered() {
        let csv = "\u{FEFF}gt,ocr\nក,ក\nខ,ខ\n";
        let records = read_records(csv.as_bytes(), &EvalConfig::default()).unwrap();
        assert_eq!(records[0].name, "1");
        assert_eq!(records[1].name, "2");
    }

    #[test]
    fn limit_caps_rows() {
        let config = EvalConfig { limit: Some(1), ..EvalConfig::default() };
        let records = read_records("gt,ocr\nក,ក\nខ,ខ\n".as_bytes(), &config).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn batch_keeps_order_across_threads() {
        let records: Vec<EvalRecord> = (0..50)
            .map(|i| EvalRecord { name: i.to_string(), gt: "ក".into(), ocr: "ខ".into() })
            .collect();
        let par = evaluate_batch(&records, &SyllableTokenizer, &EvalConfig::default()).unwrap();
        let config = EvalConfig { threads: 1, ..EvalConfig::default() };
        let seq = evaluate_batch(&records, &SyllableTokenizer, &config).unwrap();
        assert_eq!(par, seq);
        assert_eq!(par[49].name, "49");
    }

    #[test]
    fn csv_output_has_bom_and_header() {
        let res = evaluate_record(&record("ក", "ខ"), &SyllableTokenizer, &EvalConfig::default());
        let mut buf = Vec::new();
        write_results(&mut buf, &[res], OutputFormat::Csv).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("\u{FEFF}name,gt,ocr,gt_segmented,ocr_segmented,CER,WER"));
        assert!(text.contains("r,ក,ខ,ក,ខ,1.0,1.0"));
    }

    #[test]
    fn jsonl_output_one_object_per_line() {
        let res = evaluate_record(&record("ក", "ក"), &SyllableTokenizer, &EvalConfig::default());
        let mut buf = Vec::new();
        write_results(&mut buf, &[res.clone(), res], OutputFormat::Jsonl).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let v: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(v["CER"], 0.0);
    }

    #[test]
    fn summary_averages() {
        let config = EvalConfig::default();
        let results = vec![
            evaluate_record(&record("ក", "ក"), &SyllableTokenizer, &config),
            evaluate_record(&record("ក", "ខ"), &SyllableTokenizer, &config),
        ];
        let s = Summary::from_results(&results);
        assert_eq!(s.records, 2);
        assert_eq!(s.exact_matches, 1);
        assert!((s.mean_cer - 0.5).abs() < 1e-12);
        assert_eq!(Summary::from_results(&[]).records, 0);
    }
}
