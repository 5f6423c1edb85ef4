//! Integration tests for writing report artifacts: CSV tables, the word
//! cloud image and decoding of the input file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use bindo::analysis::morph::{MorphAnalyzer, Morpheme};
use bindo::config::{AnalysisConfig, AnalysisMode, WordCloudConfig};
use bindo::engine::AnalysisEngine;
use bindo::error::Result;
use bindo::export::ReportWriter;
use bindo::input::read_text_file;

fn noun_tagger() -> Arc<dyn MorphAnalyzer> {
    Arc::new(|text: &str| -> Result<Vec<Morpheme>> {
        Ok(text
            .split_whitespace()
            .map(|word| Morpheme::new(word, "NNG"))
            .collect())
    })
}

fn config_for(dir: &Path) -> AnalysisConfig {
    AnalysisConfig::default()
        .with_output_dir(dir)
        .with_wordcloud(WordCloudConfig {
            font_path: PathBuf::from("/nonexistent/NanumGothic.ttf"),
            ..Default::default()
        })
}

fn read_csv_rows(path: &Path) -> Vec<Vec<String>> {
    let text = fs::read_to_string(path).unwrap();
    let body = text.strip_prefix('\u{feff}').expect("CSV starts with a BOM");
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(body.as_bytes());
    reader
        .records()
        .map(|record| record.unwrap().iter().map(String::from).collect())
        .collect()
}

#[test]
fn test_morphological_artifacts_are_written() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path())
        .with_word_length(2, 15)
        .with_min_phrase_count(2)
        .with_top_n(2);
    let engine = AnalysisEngine::morphological(config.clone(), noun_tagger())?;
    let report = engine.run("가을 하늘 가을 하늘 가을 하늘 바람")?;

    let writer = ReportWriter::new(config, Path::new("poem.txt"))?;
    let paths = writer.write(&report)?;

    assert_eq!(
        paths.frequency_csv,
        temp_dir.path().join("poem.txt_word_frequency.csv")
    );
    assert_eq!(
        read_csv_rows(&paths.frequency_csv),
        vec![
            vec!["단어".to_string(), "빈도수".to_string()],
            vec!["가을".to_string(), "3".to_string()],
            vec!["하늘".to_string(), "3".to_string()],
        ]
    );

    let ngram_csv = paths.ngram_csv.expect("phrases are exported");
    assert_eq!(ngram_csv, temp_dir.path().join("poem.txt_ngram2_frequency.csv"));
    assert_eq!(
        read_csv_rows(&ngram_csv),
        vec![
            vec!["2-gram 표현".to_string(), "빈도수".to_string()],
            vec!["가을 하늘".to_string(), "3".to_string()],
            vec!["하늘 가을".to_string(), "2".to_string()],
        ]
    );
    Ok(())
}

#[test]
fn test_missing_font_still_writes_tables() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path());
    let engine = AnalysisEngine::morphological(config.clone(), noun_tagger())?;
    let report = engine.run("가을 하늘")?;

    let paths = ReportWriter::new(config, Path::new("poem.txt"))?.write(&report)?;

    assert!(paths.wordcloud.is_none());
    assert!(!temp_dir.path().join("poem.txt_wordcloud.png").exists());
    assert!(paths.frequency_csv.is_file());
    assert!(paths.summary_json.is_file());
    Ok(())
}

#[test]
fn test_wordcloud_png_is_rendered() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let font_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSansMono.ttf");
    let config = AnalysisConfig::default()
        .with_output_dir(temp_dir.path())
        .with_wordcloud(WordCloudConfig {
            font_path,
            ..Default::default()
        });
    let engine = AnalysisEngine::morphological(config.clone(), noun_tagger())?;
    let report = engine.run("rust cargo rust crate rust cargo borrow")?;

    let paths = ReportWriter::new(config, Path::new("notes.txt"))?.write(&report)?;

    let png = temp_dir.path().join("notes.txt_wordcloud.png");
    assert_eq!(paths.wordcloud, Some(png.clone()));
    assert!(png.is_file());

    let image = image::open(&png).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (800, 400));
    assert!(image.pixels().any(|pixel| pixel.0 != [255, 255, 255]));
    Ok(())
}

#[test]
fn test_empty_input_writes_header_only_tables() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("empty.txt");
    fs::write(&input, "").unwrap();
    let config = config_for(&temp_dir.path().join("out"));

    let text = read_text_file(&input)?;
    let engine = AnalysisEngine::morphological(config.clone(), noun_tagger())?;
    let report = engine.run(&text)?;
    let paths = ReportWriter::new(config, &input)?.write(&report)?;

    assert_eq!(read_csv_rows(&paths.frequency_csv).len(), 1);
    assert_eq!(read_csv_rows(paths.ngram_csv.as_ref().unwrap()).len(), 1);
    assert!(paths.wordcloud.is_none());

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&paths.summary_json).unwrap()).unwrap();
    assert_eq!(summary["total_tokens"], 0);
    assert_eq!(summary["words"], serde_json::json!([]));
    assert_eq!(summary["phrases"], serde_json::json!([]));
    Ok(())
}

#[test]
fn test_raw_mode_uses_raw_artifact_names() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path())
        .with_mode(AnalysisMode::RawText)
        .with_word_length(1, 10);
    let engine = AnalysisEngine::raw_text(config.clone())?;
    let report = engine.run("가을 하늘 공활한데 가을 하늘")?;

    let paths = ReportWriter::new(config, Path::new("anthem.txt"))?.write(&report)?;

    assert_eq!(
        paths.frequency_csv,
        temp_dir.path().join("anthem.txt_raw_text_frequency.csv")
    );
    assert!(paths.ngram_csv.is_none());
    assert_eq!(
        read_csv_rows(&paths.frequency_csv)[0],
        vec!["원문 단위".to_string(), "빈도수".to_string()]
    );
    Ok(())
}

#[test]
fn test_cp949_input_is_decoded() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("legacy.txt");
    let (encoded, _, _) = encoding_rs::EUC_KR.encode("가을 하늘 가을");
    fs::write(&input, &encoded).unwrap();

    let text = read_text_file(&input)?;
    let config = AnalysisConfig::default().with_word_length(1, 10);
    let report = AnalysisEngine::raw_text(config)?.run(&text)?;

    assert_eq!(report.words().get("가을"), 2);
    Ok(())
}
