use std::fs;

use seqtag_core::TagSchema;
use seqtag_core::alphabet::{AlphabetConfig, UNKNOWN_ID};
use seqtag_corpus::{
    FieldAlphabets, InvalidPolicy, LoaderConfig, load_data, prepare_folder, save_all,
};
use tempfile::TempDir;

const IOBES_CORPUS: &str = "\
EU\tS-ORG
rejects\tO
German\tS-MISC
call\tO

Peter\tB-PER
Blackburn\tE-PER

BRUSSELS\tS-LOC
1996-08-22\tO

broken\tO
entity\tI-PER
";

fn temp_workspace() -> TempDir {
    tempfile::tempdir().expect("create tempdir")
}

#[test]
fn iobes_corpus_to_ids_and_back() {
    let workspace = temp_workspace();
    let input = workspace.path().join("train.iobes");
    fs::write(&input, IOBES_CORPUS).unwrap();

    let config = LoaderConfig::new()
        .with_schema(Some(TagSchema::Iobes))
        .with_invalid_policy(InvalidPolicy::Skip);
    let corpus = load_data(&input, &config).unwrap();
    assert_eq!(corpus.len(), 3);
    assert_eq!(corpus.report.skipped_invalid, 1);
    assert_eq!(corpus.sentences[1].labels, ["B-PER", "I-PER"]);

    // BIO output reloads as BIO without changes.
    let out_dir = workspace.path().join("out").join("bio");
    prepare_folder(&out_dir).unwrap();
    let bio_path = out_dir.join("train.bio");
    save_all(&bio_path, &corpus.sentences).unwrap();
    let reloaded = load_data(&bio_path, &LoaderConfig::default()).unwrap();
    assert_eq!(reloaded.sentences, corpus.sentences);

    let mut alphabets = FieldAlphabets::new();
    alphabets.fit(&corpus).unwrap();
    assert!(alphabets.save(&out_dir));

    let mut restored = FieldAlphabets::load(&out_dir, AlphabetConfig::default()).unwrap();
    restored.close();
    for sentence in &corpus {
        let a = alphabets.encode(sentence).unwrap();
        let b = restored.encode(sentence).unwrap();
        assert_eq!(a, b);
        assert!(!b.token_ids.contains(&UNKNOWN_ID));
    }
}

#[test]
fn invalid_sentence_aborts_whole_load() {
    let workspace = temp_workspace();
    let input = workspace.path().join("train.iobes");
    fs::write(&input, IOBES_CORPUS).unwrap();

    let config = LoaderConfig::new().with_schema(Some(TagSchema::Iobes));
    assert!(load_data(&input, &config).is_err());
}
