//! 소스 파일 한 줄을 key/value 항목으로 해석하는 규칙.

/// `KEY=value` 형태로 분리된 한 줄.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLine {
    pub key: String,
    pub value: String,
    pub raw: String,
}

/// 라인 해석 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// 빈 줄, 주석, `=`가 없는 줄. 아무 보고 없이 건너뛴다.
    Ignored,
    /// `=`는 있지만 key/value로 나눌 수 없는 줄.
    Malformed(String),
    Assignment(ConfigLine),
}

/// 한 줄을 trim한 뒤 첫 번째 `=` 기준으로 key/value를 분리한다.
pub fn parse_line(raw: &str) -> ParsedLine {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return ParsedLine::Ignored;
    }
    if !line.contains('=') {
        return ParsedLine::Ignored;
    }

    let Some((key, value)) = line.split_once('=') else {
        return ParsedLine::Malformed(line.to_string());
    };

    ParsedLine::Assignment(ConfigLine {
        key: key.trim().to_string(),
        value: value.trim().to_string(),
        raw: line.to_string(),
    })
}

/// 같은 종류의 따옴표 한 쌍으로 감싸진 값이면 바깥 한 겹만 벗긴다.
/// `"abc'`처럼 짝이 맞지 않거나 따옴표 한 글자뿐인 값은 그대로 둔다.
pub fn strip_matching_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(raw: &str) -> ConfigLine {
        match parse_line(raw) {
            ParsedLine::Assignment(line) => line,
            other => panic!("expected assignment for {raw:?}, got {other:?}"),
        }
    }

    #[test]
    fn blank_and_comment_lines_are_ignored() {
        assert_eq!(parse_line(""), ParsedLine::Ignored);
        assert_eq!(parse_line("   \t"), ParsedLine::Ignored);
        assert_eq!(parse_line("# STRIPE_KEY=abc"), ParsedLine::Ignored);
        assert_eq!(parse_line("   # indented comment"), ParsedLine::Ignored);
    }

    #[test]
    fn lines_without_delimiter_are_ignored() {
        assert_eq!(parse_line("export"), ParsedLine::Ignored);
        assert_eq!(parse_line("STRIPE_KEY"), ParsedLine::Ignored);
    }

    #[test]
    fn splits_on_first_equals_and_trims_both_sides() {
        let line = assignment("  SUPABASE_URL =  https://x.supabase.co?a=b  \n");
        assert_eq!(line.key, "SUPABASE_URL");
        assert_eq!(line.value, "https://x.supabase.co?a=b");
        assert_eq!(line.raw, "SUPABASE_URL =  https://x.supabase.co?a=b");
    }

    #[test]
    fn empty_value_is_still_an_assignment() {
        let line = assignment("SUPABASE_URL=");
        assert_eq!(line.key, "SUPABASE_URL");
        assert!(line.value.is_empty());
    }

    #[test]
    fn windows_line_endings_are_trimmed() {
        let line = assignment("STRIPE_KEY=sk_test\r");
        assert_eq!(line.value, "sk_test");
    }

    #[test]
    fn strips_one_layer_of_matching_quotes() {
        assert_eq!(strip_matching_quotes("\"abc\""), "abc");
        assert_eq!(strip_matching_quotes("'abc'"), "abc");
        assert_eq!(strip_matching_quotes("\"'abc'\""), "'abc'");
        assert_eq!(strip_matching_quotes("\"\""), "");
    }

    #[test]
    fn leaves_mismatched_or_unquoted_values_alone() {
        assert_eq!(strip_matching_quotes("\"abc'"), "\"abc'");
        assert_eq!(strip_matching_quotes("'abc\""), "'abc\"");
        assert_eq!(strip_matching_quotes("abc"), "abc");
        assert_eq!(strip_matching_quotes("\""), "\"");
        assert_eq!(strip_matching_quotes("ab\"c\""), "ab\"c\"");
    }
}
