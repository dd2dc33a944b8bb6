use nom::{
    bytes::complete::{tag, take_until},
    combinator::map,
    sequence::preceded,
    IResult,
};

const INCLUDE_DIRECTIVE: &str = "#include";

fn include_directive(input: &[u8]) -> IResult<&[u8], bool> {
    map(
        preceded(take_until(INCLUDE_DIRECTIVE), tag(INCLUDE_DIRECTIVE)),
        |_| true,
    )(input)
}

/// Plain substring match, so `// #include` and `#include_next` both count.
pub fn contains_include(line: &[u8]) -> bool {
    matches!(include_directive(line), Ok((_, true)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_directive_at_start() {
        assert!(contains_include(b"#include <stdio.h>\n"));
    }

    #[test]
    fn matches_directive_anywhere_in_line() {
        assert!(contains_include(b"  // see #include \"grid.h\"\n"));
        assert!(contains_include(b"#include_next <limits.h>"));
    }

    #[test]
    fn ignores_lines_without_directive() {
        assert!(!contains_include(b"int x;\n"));
        assert!(!contains_include(b"# include <stdio.h>\n"));
        assert!(!contains_include(b"#includ"));
        assert!(!contains_include(b""));
    }

    #[test]
    fn handles_non_utf8_bytes() {
        assert!(contains_include(b"\xff\xfe#include \"x.h\""));
    }
}
