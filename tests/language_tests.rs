use cipherforge::language::LanguageModel;
use cipherforge::CipherForgeError;
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn norvig_style_tsv() -> String {
    // Shape of ngrams-all.tsv: section headers followed by counts.
    let mut s = String::new();
    s.push_str("1-gram\t*/*\t1/*\n");
    s.push_str("E\t445200\t390500\n");
    s.push_str("T\t330500\t290100\n");
    s.push_str("A\t286500\t250400\n");
    s.push_str("O\t272300\t240000\n");
    s.push_str("2-gram\t*/*\t2/*\n");
    s.push_str("TH\t100272\t88000\n");
    s.push_str("HE\t86697\t75000\n");
    s.push_str("AT\t41700\t36000\n");
    s
}

#[test]
fn tsv_loader_skips_headers_and_ranks_letters() {
    let model = LanguageModel::from_ngram_reader(Cursor::new(norvig_style_tsv())).unwrap();

    let letters = model.letters_by_frequency();
    assert_eq!(&letters[..4], b"etao");
    // Unlisted letters rank after the counted ones, alphabetically.
    assert_eq!(letters[4], b'b');

    let freq_sum: f32 = model.frequencies().iter().sum();
    assert!((freq_sum - 100.0).abs() < 1e-2);
    assert!((model.bigram_matrix().sum() - 100.0).abs() < 1e-2);
}

#[test]
fn tsv_loader_reads_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", norvig_style_tsv()).unwrap();

    let model = LanguageModel::from_ngram_tsv(file.path()).unwrap();
    assert_eq!(model.letters_by_frequency()[0], b'e');
    assert!(model.letter_frequency(b'e') > model.letter_frequency(b't'));
}

#[test]
fn bigram_cells_reflect_the_counted_pairs() {
    let model = LanguageModel::from_ngram_reader(Cursor::new(norvig_style_tsv())).unwrap();
    let order = model.order();
    let m = model.bigram_matrix();

    let th = m.get(order.position_of(b't'), order.position_of(b'h'));
    let he = m.get(order.position_of(b'h'), order.position_of(b'e'));
    let at = m.get(order.position_of(b'a'), order.position_of(b't'));
    assert!(th > he && he > at);
    // Uncounted pair.
    assert_eq!(m.get(order.position_of(b'q'), order.position_of(b'z')), 0.0);
}

#[test]
fn missing_file_surfaces_io_error() {
    assert!(matches!(
        LanguageModel::from_ngram_tsv("no/such/ngrams.tsv"),
        Err(CipherForgeError::Io(_))
    ));
}

#[test]
fn letterless_table_is_degenerate() {
    // Bigrams but no monogram rows: no letter frequencies to rank.
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "2-gram\t*/*\nTH\t100\n").unwrap();
    assert!(matches!(
        LanguageModel::from_ngram_tsv(file.path()),
        Err(CipherForgeError::DegenerateModel(_))
    ));
}
