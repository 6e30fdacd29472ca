use log::LevelFilter;
use tagvocab::{
    corpus::Sentence,
    vocab::{
        CharVocab,
        CompositeOptions,
        FeatureVocab,
        MultiVocab,
        VocabOptions,
        WordVocab,
        XposVocab,
        io::write_multi_vocab,
        relations::RELATION_FIELD,
    },
};

use crate::{
    io_args::{CorpusArgs, StateOutputArgs},
    logging::LogArgs,
};

/// Args for the build command.
///
/// Builds the ``char``, ``word``, ``upos``, ``xpos``, ``feats``, and
/// ``deprel`` vocabs and writes their state dict.
#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    #[clap(flatten)]
    corpus: CorpusArgs,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// Language shorthand recorded in each vocab.
    #[arg(long, default_value = "")]
    lang: String,

    /// Word form field.
    #[arg(long, default_value_t = 0)]
    word_field: usize,

    /// Universal POS field.
    #[arg(long, default_value_t = 1)]
    upos_field: usize,

    /// Dependency relation field; field 2 selects the fixed relation labels.
    #[arg(long, default_value_t = RELATION_FIELD)]
    rel_field: usize,

    /// Morphological features field.
    #[arg(long, default_value_t = 3)]
    feats_field: usize,

    /// Language-specific POS field.
    #[arg(long, default_value_t = 4)]
    xpos_field: usize,

    /// Minimum count for a word form.
    #[arg(long, default_value_t = 7)]
    word_cutoff: usize,

    /// Minimum count for a character.
    #[arg(long, default_value_t = 0)]
    char_cutoff: usize,

    /// Keep word form case.
    #[arg(long)]
    no_lower: bool,

    /// Word forms to map to the empty sentinel.
    #[arg(long = "word-ignore")]
    word_ignore: Vec<String>,

    /// Separator for XPOS subfields; empty splits into characters.
    #[arg(long, default_value = "")]
    xpos_sep: String,

    /// Separator for ``Key=Value`` features.
    #[arg(long, default_value = "|")]
    feats_sep: String,

    #[command(flatten)]
    output: StateOutputArgs,
}

impl BuildArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(LevelFilter::Info)?;

        log::info!("Reading corpus:");
        let data = self.corpus.read_corpus()?;
        log::info!("{} sentences", data.len());

        let vocabs = self.build_vocabs(&data)?;
        for (name, vocab) in vocabs.iter() {
            log::info!("{name}: {} {:?}", vocab.class(), vocab.sizes());
        }

        if let Some(path) = &self.output.output {
            log::info!("output: {path}");
        }
        let mut writer = self.output.open_writer()?;
        write_multi_vocab(&vocabs, &mut writer)?;

        Ok(())
    }

    fn flat_options(
        &self,
        idx: usize,
    ) -> VocabOptions {
        VocabOptions::default()
            .with_lang(self.lang.as_str())
            .with_idx(idx)
    }

    fn build_vocabs(
        &self,
        data: &[Sentence],
    ) -> Result<MultiVocab, Box<dyn std::error::Error>> {
        let no_ignore: &[&str] = &[];
        let mut vocabs = MultiVocab::default();

        vocabs.insert(
            "char",
            CharVocab::build(
                data,
                self.flat_options(self.word_field)
                    .with_cutoff(self.char_cutoff),
            ),
        )?;
        vocabs.insert(
            "word",
            WordVocab::build(
                data,
                self.flat_options(self.word_field)
                    .with_cutoff(self.word_cutoff)
                    .with_lower(!self.no_lower),
                self.word_ignore.as_slice(),
            ),
        )?;
        vocabs.insert(
            "upos",
            WordVocab::build(data, self.flat_options(self.upos_field), no_ignore),
        )?;
        vocabs.insert(
            "xpos",
            XposVocab::build(
                data,
                CompositeOptions::default()
                    .with_lang(self.lang.as_str())
                    .with_idx(self.xpos_field)
                    .with_sep(self.xpos_sep.as_str()),
            ),
        )?;
        vocabs.insert(
            "feats",
            FeatureVocab::build(
                data,
                CompositeOptions::keyed_features()
                    .with_lang(self.lang.as_str())
                    .with_idx(self.feats_field)
                    .with_sep(self.feats_sep.as_str()),
            ),
        )?;
        vocabs.insert(
            "deprel",
            WordVocab::build(data, self.flat_options(self.rel_field), no_ignore),
        )?;

        Ok(vocabs)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tagvocab::{corpus::read_sentences, vocab::VocabClass};

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct TestArgs {
        #[clap(flatten)]
        build: BuildArgs,
    }

    const CORPUS: &str = "\
The\tDET\tdet\tDefinite=Def\tDT
dog\tNOUN\tnsubj\tNumber=Sing\tNN
runs\tVERB\troot\tNumber=Sing|Tense=Pres\tVBZ

The\tDET\tdet\tDefinite=Def\tDT
cat\tNOUN\tnsubj\tNumber=Sing\tNN
";

    #[test]
    fn test_build_vocabs() {
        let args = TestArgs::parse_from(["test", "--word-cutoff", "2", "--lang", "en"]);
        let data = read_sentences(CORPUS.as_bytes()).unwrap();

        let vocabs = args.build.build_vocabs(&data).unwrap();
        assert_eq!(
            vocabs.names().collect::<Vec<_>>(),
            vec!["char", "word", "upos", "xpos", "feats", "deprel"]
        );
        assert_eq!(vocabs.get("xpos").unwrap().class(), VocabClass::Xpos);

        // only "the" reaches the cutoff.
        assert_eq!(vocabs.get("word").unwrap().sizes(), vec![5]);
        assert_eq!(vocabs.get("upos").unwrap().sizes(), vec![7]);
        assert_eq!(vocabs.get("deprel").unwrap().sizes(), vec![51]);
    }
}
