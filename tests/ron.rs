mod utils;

use std::{fs, path::PathBuf};
use strutil::{remove_emojis, Pipeline};
use utils::read_sample_file_lines;

pub fn read_pipeline(filename: PathBuf) -> Pipeline {
    let content = fs::read_to_string(&filename).unwrap();
    ron::from_str::<Pipeline>(&content).expect(&format!("parsing pipeline {}", filename.display()))
}

#[test]
fn ron_pipelines_work() {
    let lines = read_sample_file_lines();

    let mut tested_at_least_one = false;

    for entry in fs::read_dir("pipelines").unwrap() {
        let path = entry.unwrap().path();

        if !path.is_file() {
            continue;
        }

        if !path.extension().is_some_and(|ext| ext == "ron") {
            continue;
        }

        println!("running {}", path.display());

        let pipeline = read_pipeline(path);
        for line in &lines {
            let _ = pipeline.apply(line);
        }
        tested_at_least_one = true;
    }

    assert!(tested_at_least_one);
}

#[test]
fn slug_output_is_ascii_kebab() {
    let pipeline = read_pipeline(PathBuf::from("pipelines/slug.ron"));

    for line in read_sample_file_lines() {
        let slug = pipeline.apply(&line);

        assert_eq!(remove_emojis(&slug), slug, "{line:?} -> {slug:?}");
        assert!(!slug.contains(char::is_whitespace), "{line:?} -> {slug:?}");
        assert!(!slug.contains(char::is_uppercase), "{line:?} -> {slug:?}");
        assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{line:?} -> {slug:?}");
    }

    assert_eq!(
        pipeline.apply("Crème brûlée, piñata and jalapeño"),
        "creme-brulee,-pinata-and-jalapeno"
    );
    assert_eq!(pipeline.apply("/usr/local/bin (copy)"), "usr-local-bin-copy");
}

#[test]
fn constant_pipeline() {
    let pipeline = read_pipeline(PathBuf::from("pipelines/constant.ron"));

    assert_eq!(pipeline.apply("max retry-count"), "MAX_RETRYCOUNT");
    assert_eq!(pipeline.apply("Время ожидания"), "ВРЕМЯ_ОЖИДАНИЯ");
}
