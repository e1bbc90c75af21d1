//! Reader for parser output in CoNLL-U format.
//!
//! Each token line carries ten tab-separated columns:
//! `ID FORM LEMMA UPOS XPOS FEATS HEAD DEPREL DEPS MISC`. Sentences are
//! separated by blank lines and `#` lines are comments. A `HEAD` of `0`
//! marks the sentence root, which becomes self-headed with the `ROOT` label.
//! `SpaceAfter=No` in `MISC` drops the trailing space.

use crate::doc::{Doc, DocBuilder, DocError, DocResult};
use crate::morph::Morph;
use crate::token::TokenSpec;

impl Doc {
    /// Build a document from CoNLL-U text.
    pub fn from_conllu(input: &str) -> DocResult<Doc> {
        let mut builder = DocBuilder::new();
        let mut current: Vec<TokenSpec> = Vec::new();

        for (line_idx, line) in input.lines().enumerate() {
            let line_num = line_idx + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                if !current.is_empty() {
                    builder = builder.sentence(std::mem::take(&mut current));
                }
                continue;
            }
            if trimmed.starts_with('#') {
                continue;
            }

            let cols: Vec<&str> = trimmed.split('\t').collect();
            if cols.len() != 10 {
                return Err(DocError::Parse {
                    line: line_num,
                    message: format!("expected 10 columns, found {}", cols.len()),
                });
            }

            // multiword tokens and empty nodes
            if cols[0].contains('-') || cols[0].contains('.') {
                continue;
            }

            let id: usize = parse_index(cols[0], line_num, "ID")?;
            if id != current.len() + 1 {
                return Err(DocError::Parse {
                    line: line_num,
                    message: format!("expected token id {}, found {}", current.len() + 1, id),
                });
            }
            let head: usize = parse_index(cols[6], line_num, "HEAD")?;

            let (head, dep) = if head == 0 {
                (id - 1, "ROOT".to_string())
            } else {
                (head - 1, cols[7].to_string())
            };

            let misc = cols[9];
            let space_after = !misc.split('|').any(|m| m == "SpaceAfter=No");

            let mut spec = TokenSpec::new(cols[1], cols[2], cols[3], cols[4], &dep, head);
            spec.morph = Morph::parse(cols[5]);
            spec.whitespace = if space_after { " ".to_string() } else { String::new() };
            if let Some(ent) = misc.split('|').find_map(|m| m.strip_prefix("Entity=")) {
                spec.ent_type = ent.to_string();
                spec.ent_iob = "I".to_string();
            }
            current.push(spec);
        }

        if !current.is_empty() {
            builder = builder.sentence(current);
        }
        builder.build()
    }
}

fn parse_index(field: &str, line: usize, column: &str) -> DocResult<usize> {
    field.parse().map_err(|_| DocError::Parse {
        line,
        message: format!("invalid {} '{}'", column, field),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARIA: &str = "\
# text = Maria lost her keys.
1\tMaria\tMaria\tPROPN\tNNP\tNumber=Sing\t2\tnsubj\t_\t_
2\tlost\tlose\tVERB\tVBD\tTense=Past|VerbForm=Fin\t0\troot\t_\t_
3\ther\ther\tPRON\tPRP$\tPoss=Yes\t4\tposs\t_\t_
4\tkeys\tkey\tNOUN\tNNS\tNumber=Plur\t2\tdobj\t_\tSpaceAfter=No
5\t.\t.\tPUNCT\t.\t_\t2\tpunct\t_\t_

1\tShe\tshe\tPRON\tPRP\tNumber=Sing\t3\tnsubj\t_\t_
2\twas\tbe\tAUX\tVBD\tTense=Past\t3\tauxpass\t_\t_
3\tupset\tupset\tADJ\tJJ\t_\t0\troot\t_\tSpaceAfter=No
4\t.\t.\tPUNCT\t.\t_\t3\tpunct\t_\tSpaceAfter=No
";

    #[test]
    fn reads_two_sentences() {
        let doc = Doc::from_conllu(MARIA).unwrap();
        assert_eq!(doc.len(), 9);
        assert_eq!(doc.text(), "Maria lost her keys. She was upset.");
        assert_eq!(doc.sentences(), &[0..5, 5..9]);

        let lost = doc.token(1).unwrap();
        assert_eq!(lost.dep(), "ROOT");
        assert!(lost.is_self_headed());
        assert_eq!(lost.morph().get("Tense"), Some("Past"));

        let she = doc.token(5).unwrap();
        assert_eq!(she.head().text(), "upset");
        assert_eq!(she.offset(), 21);
    }

    #[test]
    fn reports_malformed_lines() {
        let err = Doc::from_conllu("1\tMaria\tMaria\tPROPN\n").unwrap_err();
        assert_eq!(
            err,
            DocError::Parse {
                line: 1,
                message: "expected 10 columns, found 4".to_string()
            }
        );

        let err = Doc::from_conllu("1\tx\tx\tX\tX\t_\tnope\tdep\t_\t_\n").unwrap_err();
        assert!(matches!(err, DocError::Parse { line: 1, .. }));
    }
}
