#![allow(dead_code)]

use std::path::Path;

use rust_xlsxwriter::Workbook;

pub const TAXA_FIXTURE: &str = "tests/fixtures/inat_taxa.csv";

/// Column AW, where the Calscape export keeps the plant URL.
pub const URL_COL: u16 = 48;

/// (botanical name, common name) pairs written by [`write_calscape_xlsx`].
pub const PLANTS: &[(&str, &str)] = &[
    ("Calochortus albus", "White fairy lantern"),
    ("Calochortus venustus", "Butterfly mariposa lily"),
    ("Fritillaria affinis", "Checker lily"),
    ("Iris douglasiana", "Douglas iris"),
    ("Iris douglasiana 'Canyon Snow'", "Canyon Snow iris"),
    ("Sisyrinchium bellum", "Blue-eyed grass"),
    ("Brodiaea elegans", "Harvest brodiaea"),
    ("Dichelostemma capitatum", "Blue dicks"),
    ("Allium unifolium", "One-leaf onion"),
    ("Camassia quamash", "Common camas"),
    ("Camassia quamash 'Orion'", "Orion camas"),
    ("Chlorogalum pomeridianum", "Soap plant"),
    ("Odontostomum hartwegii", "Hartweg's odontostomum"),
    ("Salvia apiana", "White sage"),
    ("Quercus agrifolia", "Coast live oak"),
];

pub fn url_for(species: &str) -> String {
    format!("https://calscape.org/{}", species.replace(' ', "-").replace('\'', ""))
}

/// Write a workbook laid out like a Calscape export: banner rows, headers on row 6, data below.
pub fn write_calscape_xlsx(path: &Path, plants: &[(&str, &str)]) {
    write_calscape_xlsx_with_headers(path, plants, ["Botanical Name", "Common Name", "Plant Url"]);
}

pub fn write_calscape_xlsx_with_headers(path: &Path, plants: &[(&str, &str)], headers: [&str; 3]) {
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name("Plants").unwrap();

    ws.write_string(0, 0, "Calscape").unwrap();
    ws.write_string(1, 0, "Plant search results").unwrap();

    ws.write_string(5, 0, headers[0]).unwrap();
    ws.write_string(5, 1, headers[1]).unwrap();
    ws.write_string(5, 2, "Plant Type").unwrap();
    ws.write_string(5, URL_COL, headers[2]).unwrap();

    for (i, (species, common)) in plants.iter().enumerate() {
        let row = 6 + i as u32;
        ws.write_string(row, 0, *species).unwrap();
        ws.write_string(row, 1, *common).unwrap();
        ws.write_string(row, 2, "Perennial").unwrap();
        ws.write_string(row, URL_COL, url_for(species)).unwrap();
    }

    wb.save(path).unwrap();
}
