use shlog::{escape, message, Color, Config, Logger, Symbol};

fn capture(f: impl FnOnce(&mut Logger<Vec<u8>>)) -> String {
    let mut log = Logger::with_writer(Vec::new());
    f(&mut log);
    String::from_utf8(log.into_inner()).unwrap()
}

/// Spaces between the start of the status output and the left delimiter.
fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ').count()
}

#[test]
fn default_session_end_to_end() {
    let out = capture(|log| {
        message!(log, "Building {}", "app");
        log.ok();
    });

    assert!(out.contains("\x1b[32mok\x1b[0m"));
    let stripped = escape::strip(&out);
    let expected = format!(" ➯\tBuilding app{}[ok]\n", " ".repeat(57));
    assert_eq!(stripped, expected);

    // Message text plus the padded delimiter spans the configured column.
    let after_tab = stripped.split('\t').nth(1).unwrap();
    let up_to_delim = after_tab.split_inclusive('[').next().unwrap();
    assert_eq!(up_to_delim.chars().count(), 70);
}

#[test]
fn padding_tracks_visible_length_across_widths() {
    for padding in [0isize, 1, 5, 20, 70] {
        for len in [0usize, 1, 4, 19, 20, 21, 80] {
            let text = "x".repeat(len);
            let out = capture(|log| {
                log.config.padding = padding;
                message!(log, "{}{}{}", Color::Pink, text, Color::Reset);
                log.err();
            });

            let stripped = escape::strip(&out);
            let (_, after_tab) = stripped.split_once('\t').unwrap();
            let status = &after_tab[len..];
            let field = usize::try_from(padding - len as isize).unwrap_or(0);
            assert_eq!(
                leading_spaces(status),
                field.saturating_sub(1),
                "padding {padding}, len {len}"
            );
            assert!(status.trim_start().starts_with("[err]\n"));
        }
    }
}

#[test]
fn independent_loggers_keep_their_own_state() {
    let mut a = Logger::with_writer(Vec::new());
    let mut b = Logger::with_config(
        Config {
            padding: 30,
            ok_text: "done".to_string(),
            prefix_symbol: Symbol::from(">"),
            ..Config::default()
        },
        Vec::new(),
    );

    message!(a, "a fairly long message for logger a");
    message!(b, "b");
    a.ok();
    b.ok();

    assert_eq!(a.last_visible_len(), 34);
    assert_eq!(b.last_visible_len(), 1);

    let b = escape::strip(&String::from_utf8(b.into_inner()).unwrap()).into_owned();
    assert_eq!(b, format!(" >\tb{}[done]\n", " ".repeat(28)));
}

#[test]
fn done_banner_is_fixed() {
    let fresh = capture(|log| log.done());
    let after = capture(|log| {
        message!(log, "step");
        log.err();
        log.done();
    });
    assert_eq!(fresh, "\n 👍\tAll done\n\n");
    assert!(after.ends_with(&fresh));
}
