use pest::error::{Error as PestError, LineColLocation};
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use crate::error::{Result, TristateError};
use crate::specialize::Signature;

#[derive(Parser)]
#[grammar = "specialize/descriptor.pest"]
struct DescriptorParser;

/// Parses a descriptor such as `Iterator of Pair of (String, Integer)`.
pub fn parse_signature(descriptor: &str) -> Result<Signature> {
    let mut parsed = DescriptorParser::parse(Rule::descriptor, descriptor)?;
    let signature = parsed
        .next()
        .and_then(|d| d.into_inner().find(|p| p.as_rule() == Rule::signature))
        .ok_or_else(|| TristateError::Parse {
            message: format!("no signature in '{}'", descriptor),
            line: None,
            col: None,
        })?;
    Ok(build(signature))
}

fn build(node: Pair<Rule>) -> Signature {
    let mut name = String::new();
    let mut args = Vec::new();
    for part in node.into_inner() {
        match part.as_rule() {
            Rule::name => name = part.as_str().to_string(),
            Rule::arguments => args.extend(part.into_inner().map(build)),
            _ => (),
        }
    }
    Signature::of(name, args)
}

impl From<PestError<Rule>> for TristateError {
    fn from(e: PestError<Rule>) -> Self {
        let (line, col) = match e.line_col {
            LineColLocation::Pos((l, c)) => (l, c),
            LineColLocation::Span((l, c), _) => (l, c),
        };
        Self::Parse {
            message: e.variant.message().to_string(),
            line: Some(line),
            col: Some(col),
        }
    }
}
