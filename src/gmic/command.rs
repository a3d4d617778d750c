/// Join the positional CLI tokens into the single command script G'MIC runs.
///
/// Empty tokens contribute neither text nor a separator. Separator emission
/// is keyed to the token's index: every emitted token that is not at the last
/// index of the original list is followed by one space. Interior empty tokens
/// therefore vanish without leaving double spaces, while a trailing empty
/// token leaves the separator after the previous token in place.
pub fn build_command_string(commands: &[String]) -> String {
    let last_index = commands.len().saturating_sub(1);

    // First pass: size the buffer.
    let mut total_length = 0;
    for (index, command) in commands.iter().enumerate() {
        if command.is_empty() {
            continue;
        }

        total_length += command.len();
        if index < last_index {
            total_length += 1;
        }
    }

    let mut script = String::with_capacity(total_length);
    for (index, command) in commands.iter().enumerate() {
        if command.is_empty() {
            continue;
        }

        script.push_str(command);
        if index < last_index {
            script.push(' ');
        }
    }

    script
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_join_basic() {
        assert_eq!(build_command_string(&tokens(&[])), "");
        assert_eq!(build_command_string(&tokens(&["blur"])), "blur");
        assert_eq!(
            build_command_string(&tokens(&["blur", "2", "sharpen"])),
            "blur 2 sharpen"
        );
    }

    #[test]
    fn test_interior_empty_tokens_vanish() {
        assert_eq!(build_command_string(&tokens(&["blur", "", "2"])), "blur 2");
        assert_eq!(
            build_command_string(&tokens(&["blur", "", "", "2"])),
            "blur 2"
        );
    }

    #[test]
    fn test_leading_empty_token_contributes_nothing() {
        assert_eq!(build_command_string(&tokens(&["", "blur"])), "blur");
    }

    #[test]
    fn test_trailing_empty_token_keeps_the_previous_separator() {
        assert_eq!(build_command_string(&tokens(&["blur", ""])), "blur ");
    }

    #[test]
    fn test_all_empty_tokens_give_an_empty_script() {
        assert_eq!(build_command_string(&tokens(&["", "", ""])), "");
    }

    #[test]
    fn test_no_double_spaces_from_dropped_tokens() {
        let cases: [&[&str]; 4] = [
            &["a", "", "b"],
            &["", "a", "", "b", ""],
            &["a", "", "", "b", "c"],
            &["", "", "a"],
        ];
        for case in cases {
            let script = build_command_string(&tokens(case));
            assert!(!script.contains("  "), "double space in {script:?}");
            assert!(!script.starts_with(' '), "leading space in {script:?}");
        }
    }
}
