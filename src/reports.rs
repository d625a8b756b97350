use cipherforge::language::LanguageModel;
use cipherforge::text::SubstitutionMap;
use cipherforge::ALPHABET_LEN;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Table};

pub fn print_mapping_table(map: &SubstitutionMap) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let cipher_row: Vec<Cell> = (b'a'..=b'z')
        .map(|c| Cell::new(c as char).set_alignment(CellAlignment::Center))
        .collect();
    let plain_row: Vec<Cell> = (b'a'..=b'z')
        .map(|c| Cell::new(map.map(c) as char).set_alignment(CellAlignment::Center))
        .collect();

    table.add_row(cipher_row);
    table.add_row(plain_row);
    println!("\nKey (cipher over plain):\n{}", table);
}

pub fn print_frequency_table(model: &LanguageModel, observed: &[(u8, f32)]) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Reference"),
        Cell::new("%"),
        Cell::new("Observed"),
        Cell::new("%"),
    ]);

    let letters = model.letters_by_frequency();
    let freqs = model.frequencies();
    for i in 0..ALPHABET_LEN {
        let (obs_letter, obs_pct) = match observed.get(i) {
            Some(&(l, p)) => ((l as char).to_string(), format!("{:.2}", p)),
            None => (String::new(), String::new()),
        };
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(letters[i] as char).set_alignment(CellAlignment::Center),
            Cell::new(format!("{:.2}", freqs[i])).set_alignment(CellAlignment::Right),
            Cell::new(obs_letter).set_alignment(CellAlignment::Center),
            Cell::new(obs_pct).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("\nLetter frequencies:\n{}", table);
}
