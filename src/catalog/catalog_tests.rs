use super::*;
use crate::error::RecomendarError;
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE_CSV: &str = r#"Poster_Link,Series_Title,Genre,Overview,Director,IMDB_Rating,Released_Year
https://img.example/shawshank.jpg,The Shawshank Redemption,"Drama","Two imprisoned men bond over a number of years, finding solace.",Frank Darabont,9.3,1994
https://img.example/dark-knight.jpg,  The Dark Knight ,"Action, Crime, Drama","Batman faces the Joker: a criminal mastermind!",Christopher Nolan,9.0,2008
\N,THE DARK KNIGHT,"Action","duplicate row that must be dropped",Nobody,1.0,2008
https://img.example/room.jpg,The Room,"Drama",\N,\N,\N,2003
"#;

fn write_sample() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file should be created");
    file.write_all(SAMPLE_CSV.as_bytes())
        .expect("sample csv should be written");
    file
}

#[test]
fn test_load_normalizes_and_dedups() -> crate::error::Result<()> {
    let file = write_sample();
    let catalog = Catalog::load_from_path(file.path())?;

    // 4 source rows, 1 duplicate dropped
    assert_eq!(catalog.len(), 3);

    let titles: Vec<&str> = catalog.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["the shawshank redemption", "the dark knight", "the room"]
    );

    // First occurrence wins
    let dark_knight = catalog.get(1).expect("row 1 should exist");
    assert_eq!(dark_knight.director, "Christopher Nolan");
    assert_eq!(dark_knight.rating, 9.0);
    Ok(())
}

#[test]
fn test_titles_unique_lowercase_trimmed() -> crate::error::Result<()> {
    let file = write_sample();
    let catalog = Catalog::load_from_path(file.path())?;

    let mut seen = std::collections::HashSet::new();
    for record in catalog.iter() {
        assert!(seen.insert(record.title.clone()), "duplicate title");
        assert_eq!(record.title, record.title.to_lowercase());
        assert_eq!(record.title, record.title.trim());
    }
    Ok(())
}

#[test]
fn test_description_punctuation_stripped() -> crate::error::Result<()> {
    let file = write_sample();
    let catalog = Catalog::load_from_path(file.path())?;

    let dark_knight = catalog.get(1).expect("row 1 should exist");
    assert_eq!(
        dark_knight.description,
        "batman faces the joker a criminal mastermind"
    );
    Ok(())
}

#[test]
fn test_genre_parsing() -> crate::error::Result<()> {
    let file = write_sample();
    let catalog = Catalog::load_from_path(file.path())?;

    let dark_knight = catalog.get(1).expect("row 1 should exist");
    assert_eq!(dark_knight.genres, vec!["Action", "Crime", "Drama"]);
    assert_eq!(dark_knight.genres_display(), "Action | Crime | Drama");
    Ok(())
}

#[test]
fn test_missing_sentinels_coerced() -> crate::error::Result<()> {
    let file = write_sample();
    let catalog = Catalog::load_from_path(file.path())?;

    let room = catalog.get(2).expect("row 2 should exist");
    assert_eq!(room.description, "");
    assert_eq!(room.director, "");
    assert_eq!(room.rating, 0.0);

    // First-occurrence-wins kept the row with the real poster URL
    let kept = catalog.get(1).expect("row 1 should exist");
    assert!(!kept.poster_url.is_empty());
    Ok(())
}

#[test]
fn test_combined_feature_shape() -> crate::error::Result<()> {
    let file = write_sample();
    let catalog = Catalog::load_from_path(file.path())?;

    let dark_knight = catalog.get(1).expect("row 1 should exist");
    assert_eq!(
        dark_knight.combined_feature(),
        "Action Crime Drama batman faces the joker a criminal mastermind Christopher Nolan"
    );
    Ok(())
}

#[test]
fn test_missing_file() {
    let err = Catalog::load_from_path("definitely/not/here.csv")
        .expect_err("missing file should fail");
    assert!(matches!(err, RecomendarError::MissingSource { .. }));
    assert!(err.is_fatal());
}

#[test]
fn test_missing_column() {
    let mut file = NamedTempFile::new().expect("temp file should be created");
    file.write_all(b"Series_Title,Genre,Overview,IMDB_Rating,Poster_Link\nHeat,Crime,score,8.3,url\n")
        .expect("csv should be written");

    let err = Catalog::load_from_path(file.path()).expect_err("missing column should fail");
    match err {
        RecomendarError::MissingColumn { column } => assert_eq!(column, "Director"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn test_listings_sorted_unique() -> crate::error::Result<()> {
    let file = write_sample();
    let catalog = Catalog::load_from_path(file.path())?;

    let genres = catalog.genres();
    assert_eq!(genres, vec!["Action", "Crime", "Drama"]);

    let directors = catalog.directors();
    assert_eq!(directors, vec!["Christopher Nolan", "Frank Darabont"]);

    let titles = catalog.titles();
    assert_eq!(
        titles,
        vec!["the dark knight", "the room", "the shawshank redemption"]
    );
    Ok(())
}

#[test]
fn test_from_records_rating_coercion() {
    let catalog = Catalog::from_records(vec![MovieRecord::new(
        "Broken",
        ["Drama"],
        "",
        "",
        f64::NAN,
        "",
    )]);

    assert_eq!(catalog.records()[0].rating, 0.0);
}

#[test]
fn test_from_records_empty_genres_dropped() {
    let catalog = Catalog::from_records(vec![MovieRecord::new(
        "Sparse",
        ["Drama", "  ", ""],
        "",
        "",
        7.0,
        "",
    )]);

    assert_eq!(catalog.records()[0].genres, vec!["Drama"]);
}

#[test]
fn test_empty_catalog() {
    let catalog = Catalog::from_records(Vec::new());
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
    assert!(catalog.titles().is_empty());
}
