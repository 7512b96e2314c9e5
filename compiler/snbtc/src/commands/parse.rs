//! The `parse` command: print the input back as compact SNBT.

use snbt_diagnostic::SourceInfo;
use snbt_parse::ParseError;
use snbt_tag::Tag;

use super::{load, report_to_stderr, Options};

/// Parse `source` and render the value as compact SNBT.
pub fn parse_source(source: &SourceInfo, compound: bool) -> Result<String, ParseError> {
    let tag = if compound {
        Tag::Compound(snbt_parse::parse_compound(&source.content)?)
    } else {
        snbt_parse::parse(&source.content)?
    };
    Ok(tag.to_string())
}

/// Returns whether the input parsed.
pub fn parse_file(path: &str, options: Options) -> bool {
    let Some(source) = load(path) else {
        return false;
    };
    match parse_source(&source, options.compound) {
        Ok(rendered) => {
            println!("{rendered}");
            true
        }
        Err(error) => {
            report_to_stderr(&error, &source, options.color);
            false
        }
    }
}
