//! Integration tests for the cleaning pipeline over real files.

use std::fs;

use tempfile::TempDir;

use channelpack::clean::{Cleaner, clean_file};
use channelpack::config::CleanConfig;

const FIXTURE: &str = "\
Channel Title,Channel Username,ID,Message,Date,Media Path,View Count
Zemen Express,@ZemenExpress,104,ሃላፊነት ያለው  ሽያጭ!! 🔥 https://t.me/ZemenExpress,2024-06-15T12:00:00+00:00,,5300
Zemen Express,@ZemenExpress,103,,2024-06-15T11:30:00+00:00,photos/@ZemenExpress_103.jpg,480
Neva Computer,@nevacomputer,88,Laptop ዋጋ 45000 ብር። ይደውሉ 0911,2024-06-14T10:00:00+00:00,,
Leyueqa,@Leyueqa,12,ዋጋ እና ጥራት ነው ዋናው፣ ዛሬ ይዘዙ,2024-06-13T09:00:00+00:00,photos/@Leyueqa_12.jpg,77
";

fn write_fixture(dir: &TempDir) -> std::path::PathBuf {
    let input = dir.path().join("telegram_data.csv");
    fs::write(&input, FIXTURE).unwrap();
    input
}

fn column<'a>(line: &'a str, index: usize) -> &'a str {
    line.split(',').nth(index).unwrap()
}

#[test]
fn output_has_one_row_per_input_row() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir);
    let output = dir.path().join("cleaned.csv");

    let summary = clean_file(&input, &output, &CleanConfig::new()).unwrap();
    assert_eq!(summary.rows, 4);

    let text = fs::read_to_string(&output).unwrap();
    // header + 4 data rows, ids unchanged and in input order
    let ids: Vec<&str> = text.lines().skip(1).map(|l| column(l, 2)).collect();
    assert_eq!(ids, vec!["104", "103", "88", "12"]);
}

#[test]
fn metadata_columns_pass_through_unchanged() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir);
    let output = dir.path().join("cleaned.csv");

    clean_file(&input, &output, &CleanConfig::new()).unwrap();
    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(column(lines[2], 5), "photos/@ZemenExpress_103.jpg");
    assert_eq!(column(lines[2], 6), "480");
    assert_eq!(column(lines[3], 4), "2024-06-14T10:00:00+00:00");
    // empty view count stays empty
    assert_eq!(column(lines[3], 6), "");
}

#[test]
fn messages_are_cleaned_and_normalized() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir);
    let output = dir.path().join("cleaned.csv");

    clean_file(&input, &output, &CleanConfig::new()).unwrap();
    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    // URL and emoji gone, ሃ folded to ሀ
    assert_eq!(column(lines[1], 3), "ሀላፊነት ያለው ሽያጭ");
    // empty stays empty, no error
    assert_eq!(column(lines[2], 3), "");
    // mixed-script text keeps word characters and Ethiopic punctuation
    assert_eq!(column(lines[3], 3), "Laptop ዋጋ 45000 ብር። ይደውሉ 0911");
}

#[test]
fn cleaning_an_already_clean_file_is_identity_on_text() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir);
    let first = dir.path().join("cleaned_once.csv");
    let second = dir.path().join("cleaned_twice.csv");

    clean_file(&input, &first, &CleanConfig::new()).unwrap();
    clean_file(&first, &second, &CleanConfig::new()).unwrap();

    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
}

#[test]
fn stopword_mode_emits_token_columns() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir);
    let output = dir.path().join("cleaned.csv");

    let config = CleanConfig::new().with_remove_stopwords(true);
    clean_file(&input, &output, &config).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].ends_with("Tokens,Filtered Tokens"));

    // the Leyueqa row drops እና and ነው from the filtered column
    let leyueqa = lines[4];
    assert!(leyueqa.contains("ዋጋ እና ጥራት ነው ዋናው፣ ዛሬ ይዘዙ"));
    assert!(leyueqa.contains("ዋጋ ጥራት ዋናው፣ ዛሬ ይዘዙ"));

    // the Message column itself is not stopword-filtered
    assert_eq!(column(leyueqa, 3), "ዋጋ እና ጥራት ነው ዋናው፣ ዛሬ ይዘዙ");
}

#[test]
fn cleaner_and_file_job_agree() {
    let dir = TempDir::new().unwrap();
    let input = write_fixture(&dir);
    let output = dir.path().join("cleaned.csv");

    clean_file(&input, &output, &CleanConfig::new()).unwrap();
    let text = fs::read_to_string(&output).unwrap();

    let cleaner = Cleaner::new(CleanConfig::new());
    let expected = cleaner
        .process(Some("ሃላፊነት ያለው  ሽያጭ!! 🔥 https://t.me/ZemenExpress"))
        .text;
    assert_eq!(column(text.lines().nth(1).unwrap(), 3), expected);
}
