#![allow(missing_docs)]

use tagvocab::{
    VocabError,
    corpus::{Sentence, field_values, read_sentences},
    vocab::{
        AnyVocab,
        CharVocab,
        CompositeOptions,
        CompositeVocab,
        FeatureVocab,
        FlatVocab,
        MultiVocab,
        UnitCounter,
        VocabOptions,
        WordVocab,
        XposVocab,
        io::{load_multi_vocab_path, read_state_dict, save_multi_vocab_path},
        multi_vocab::KEY2CLASS,
        relations::RELATION_LABELS,
        specials::{EMPTY_ID, VOCAB_PREFIX},
    },
};

const CORPUS: &str = "\
# text = The dogs bark.
The\tDET\troot\tDefinite=Def|PronType=Art\tDT
dogs\tNOUN\targ0\tNumber=Plur\tNNS
bark\tVERB\troot\tMood=Ind|Tense=Pres\tVBP
.\tPUNCT\tmod\t_\t.

# text = A dog barks.
A\tDET\tmod\tDefinite=Ind|PronType=Art\tDT
dog\tNOUN\targ0\tNumber=Sing\tNN
barks\tVERB\troot\tMood=Ind|Number=Sing|Tense=Pres\tVBZ
.\tPUNCT\tmod\t_\t.

# text = Dogs bark loudly.
Dogs\tNOUN\targ0\tNumber=Plur\tNNS
bark\tVERB\troot\tMood=Ind|Tense=Pres\tVBP
loudly\tADV\tmanner\t_\tRB
.\tPUNCT\tmod\t_\t.
";

fn corpus() -> Vec<Sentence> {
    read_sentences(CORPUS.as_bytes()).unwrap()
}

fn build_vocabs(data: &[Sentence]) -> MultiVocab {
    let mut multi = MultiVocab::default();
    multi
        .insert("char", CharVocab::build(data, VocabOptions::default()))
        .unwrap();
    multi
        .insert(
            "word",
            WordVocab::build(
                data,
                VocabOptions::default().with_lower(true).with_cutoff(2),
                &["."],
            ),
        )
        .unwrap();
    multi
        .insert(
            "upos",
            WordVocab::build(data, VocabOptions::default().with_idx(1), &[] as &[&str]),
        )
        .unwrap();
    multi
        .insert(
            "deprel",
            WordVocab::build(data, VocabOptions::default().with_idx(2), &[] as &[&str]),
        )
        .unwrap();
    multi
        .insert(
            "feats",
            FeatureVocab::build(data, CompositeOptions::keyed_features().with_idx(3)),
        )
        .unwrap();
    multi
        .insert(
            "xpos",
            XposVocab::build(data, CompositeOptions::default().with_idx(4)),
        )
        .unwrap();
    multi
}

fn check_flat_roundtrip<V: FlatVocab>(vocab: &V) {
    for id in 0..vocab.len() {
        let unit = vocab.id2unit(id).unwrap();
        assert_eq!(vocab.unit2id(unit), id, "unit {unit:?}");
    }
}

fn check_flat_prefix<V: FlatVocab>(
    name: &str,
    vocab: &V,
) {
    for (id, unit) in VOCAB_PREFIX.iter().enumerate() {
        assert_eq!(vocab.unit2id(unit), id, "{name}: {unit:?}");
    }
}

fn check_composite_prefix(
    name: &str,
    vocab: &CompositeVocab,
) {
    for index in 0..vocab.len() {
        let part = vocab.part(index).unwrap();
        assert_eq!(&part.units()[..VOCAB_PREFIX.len()], &VOCAB_PREFIX, "{name}");
        for (id, unit) in VOCAB_PREFIX.iter().enumerate() {
            assert_eq!(part.unit2id(unit), id, "{name}[{}]: {unit:?}", part.key());
        }
    }
}

#[test]
fn test_reserved_prefix_everywhere() {
    let multi = build_vocabs(&corpus());
    for (name, vocab) in multi.iter() {
        match vocab {
            AnyVocab::Char(v) => check_flat_prefix(name, v),
            AnyVocab::Word(v) => check_flat_prefix(name, v),
            AnyVocab::Xpos(v) => check_composite_prefix(name, v),
            AnyVocab::Feature(v) => check_composite_prefix(name, v),
        }
    }

    let lower = CharVocab::build(&corpus(), VocabOptions::default().with_lower(true));
    check_flat_prefix("char (lower)", &lower);
    check_flat_roundtrip(&lower);
}

#[test]
fn test_cutoff_and_roundtrip() {
    let data = corpus();
    let multi = build_vocabs(&data);

    let word = multi.get("word").unwrap().as_word().unwrap();
    check_flat_roundtrip(word);

    let mut counter = UnitCounter::new();
    counter.update_from_units(field_values(&data, 0).map(str::to_lowercase));
    for unit in &word.unit_vocab().units()[VOCAB_PREFIX.len()..] {
        assert!(counter.count(unit) >= 2, "{unit:?} is below cutoff");
    }
    // bark:2, dogs:2
    assert_eq!(word.len(), VOCAB_PREFIX.len() + 2);
    assert_eq!(word.unit2id("."), EMPTY_ID);

    let chars = multi.get("char").unwrap().as_char().unwrap();
    check_flat_roundtrip(chars);

    for name in ["upos", "deprel"] {
        check_flat_roundtrip(multi.get(name).unwrap().as_word().unwrap());
    }
}

#[test]
fn test_relation_vocab_is_fixed() {
    let multi = build_vocabs(&corpus());
    let deprel = multi.get("deprel").unwrap().as_word().unwrap();
    assert_eq!(
        &deprel.unit_vocab().units()[VOCAB_PREFIX.len()..],
        &RELATION_LABELS
    );
}

#[test]
fn test_checkpoint_roundtrip() {
    let multi = build_vocabs(&corpus());

    let dir = tempdir::TempDir::new("tagvocab_checkpoint").unwrap();
    let path = dir.path().join("vocab.json");

    save_multi_vocab_path(&multi, &path).unwrap();
    let restored = load_multi_vocab_path(&path).unwrap();

    assert_eq!(restored, multi);
    for ((name, a), (_, b)) in multi.iter().zip(restored.iter()) {
        assert_eq!(a.sizes(), b.sizes(), "{name}");
    }

    let xpos = restored.get("xpos").unwrap().as_xpos().unwrap();
    for tag in ["DT", "NNS", "VBZ", "RB", "."] {
        assert_eq!(xpos.id2unit(&xpos.unit2id(tag)), tag);
    }
}

#[test]
fn test_checkpoint_without_registry() {
    let multi = build_vocabs(&corpus());

    let dir = tempdir::TempDir::new("tagvocab_checkpoint").unwrap();
    let path = dir.path().join("vocab.json");
    save_multi_vocab_path(&multi, &path).unwrap();

    let mut state = read_state_dict(std::io::BufReader::new(
        std::fs::File::open(&path).unwrap(),
    ))
    .unwrap();
    assert!(state.shift_remove(KEY2CLASS).is_some());

    let err = MultiVocab::load_state_dict(state).unwrap_err();
    assert!(matches!(err, VocabError::MissingClassRegistry));
    assert_eq!(
        err.to_string(),
        "cannot find class name mapping in state dict"
    );
}
