use awe_nlp::{Doc, DocBuilder, TokenSpec};

fn tok(text: &str, lemma: &str, pos: &str, tag: &str, dep: &str, head: usize) -> TokenSpec {
    TokenSpec::new(text, lemma, pos, tag, dep, head)
}

fn period(head: usize) -> TokenSpec {
    tok(".", ".", "PUNCT", ".", "punct", head)
}

/// "The cat sat."
pub fn the_cat_sat() -> Doc {
    DocBuilder::new()
        .sentence(vec![
            tok("The", "the", "DET", "DT", "det", 1).stop(true),
            tok("cat", "cat", "NOUN", "NN", "nsubj", 2).attr("concreteness", 4.9),
            tok("sat", "sit", "VERB", "VBD", "ROOT", 2)
                .attr("concreteness", 3.5)
                .ws(""),
            period(2).ws(""),
        ])
        .build()
        .unwrap()
}

/// "Two cats."
pub fn two_cats() -> Doc {
    DocBuilder::new()
        .sentence(vec![
            tok("Two", "two", "NUM", "CD", "nummod", 1),
            tok("cats", "cat", "NOUN", "NNS", "ROOT", 1).ws(""),
            period(1).ws(""),
        ])
        .build()
        .unwrap()
}

/// "Rain fell. Wind blew. Snow", the last sentence unterminated.
pub fn weather() -> Doc {
    DocBuilder::new()
        .sentence(vec![
            tok("Rain", "rain", "NOUN", "NN", "nsubj", 1),
            tok("fell", "fall", "VERB", "VBD", "ROOT", 1).ws(""),
            period(1),
        ])
        .sentence(vec![
            tok("Wind", "wind", "NOUN", "NN", "nsubj", 1),
            tok("blew", "blow", "VERB", "VBD", "ROOT", 1).ws(""),
            period(1),
        ])
        .sentence(vec![tok("Snow", "snow", "NOUN", "NN", "ROOT", 0).ws("")])
        .build()
        .unwrap()
}
