use crate::parsers::TreeParseError;
use crate::parsers::bracketed::parse_bracketed;
use crate::syntax::node::Node;

use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// `wsj_0001.mrg`, the first file of the Penn Treebank WSJ sample.
pub const SAMPLE_WSJ_0001: &str = "( (S
    (NP-SBJ
      (NP (NNP Pierre) (NNP Vinken) )
      (, ,)
      (ADJP
        (NP (CD 61) (NNS years) )
        (JJ old) )
      (, ,) )
    (VP (MD will)
      (VP (VB join)
        (NP (DT the) (NN board) )
        (PP-CLR (IN as)
          (NP (DT a) (JJ nonexecutive) (NN director) ))
        (NP-TMP (NNP Nov.) (CD 29) )))
    (. .) ))
( (S
    (NP-SBJ (NNP Mr.) (NNP Vinken) )
    (VP (VBZ is)
      (NP-PRD
        (NP (NN chairman) )
        (PP (IN of)
          (NP
            (NP (NNP Elsevier) (NNP N.V.) )
            (, ,)
            (NP (DT the) (NNP Dutch) (VBG publishing) (NN group) )))))
    (. .) ))
";

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse corpus: {0}")]
    Parse(#[from] TreeParseError),
}

/// Parsed sentences of a bracketed treebank file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    sentences: Vec<Node>,
}

impl Corpus {
    pub fn from_text(text: &str) -> Result<Self, CorpusError> {
        Ok(Self { sentences: parse_bracketed(text)? })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        info!("Loading corpus from {}.", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    pub fn sample() -> Result<Self, CorpusError> {
        info!("Loading bundled sample corpus wsj_0001.");
        Self::from_text(SAMPLE_WSJ_0001)
    }

    pub fn parsed_sents(&self) -> &[Node] { &self.sentences }
    pub fn len(&self) -> usize { self.sentences.len() }
    pub fn is_empty(&self) -> bool { self.sentences.is_empty() }
}
