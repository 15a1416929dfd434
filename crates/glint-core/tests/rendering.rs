//! End-to-end rendering through the public API

use glint_core::{
    color, display_width, emoji, format, frame, frame_multi_line, list, strike, style, Color,
    Console, MemorySink, Message, Style,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn every_color_wraps_with_its_parameter() {
    init_logging();
    for c in Color::ALL {
        let expected = format!("\x1b[{}mtext\x1b[0m", c.sgr());
        assert_eq!(color("text", Some(c.name())), expected, "{}", c.name());
    }
}

#[test]
fn unknown_names_never_fail() {
    init_logging();
    assert_eq!(color("keep", Some("not-a-color")), "keep");
    assert_eq!(style("keep", Some("not-a-style")), "keep");
    assert_eq!(emoji("not-an-emoji"), "");
}

#[test]
fn format_nests_styles_in_order() {
    for (a, b) in [(Style::Bold, Style::Underline), (Style::Blink, Style::Dim)] {
        let expected = style(
            &style(&color("t", Some("purple")), Some(a.name())),
            Some(b.name()),
        );
        assert_eq!(format("t", Some("purple"), &[a.name(), b.name()]), expected);
    }
}

#[test]
fn frames_align_mixed_scripts() {
    let single = frame("你好");
    let rows: Vec<&str> = single.lines().collect();
    assert_eq!(rows, ["┏━━━━━━┓", "┃ 你好 ┃", "┗━━━━━━┛"]);

    let multi = frame_multi_line("a\nbb");
    let rows: Vec<&str> = multi.lines().collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], "┏━━━━┓");
    assert_eq!(rows[3], "┗━━━━┛");
    assert!(rows.iter().all(|r| display_width(r) == 6));

    let mixed = frame_multi_line("status: ok\n状态：正常\n✓");
    let widths: Vec<usize> = mixed.lines().map(display_width).collect();
    assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
}

#[test]
fn auxiliary_renderers() {
    assert_eq!(list(&["x", "y"]), "• x\n• y\n");
    assert_eq!(strike("old"), "\x1b[9mold\x1b[0m");
    assert_eq!(emoji("joy"), "😂");
}

#[test]
fn builder_emits_then_resets() {
    init_logging();
    let mut console = Console::new(MemorySink::new());

    let next = Message::new()
        .message("hi")
        .set_color("red")
        .set_style(["bold"])
        .send(&mut console)
        .unwrap();
    assert_eq!(next, Message::new());

    let framed = Message::new()
        .message("ab")
        .set_color("green")
        .set_frame();
    console.send(framed).unwrap();

    let lines = console.into_sink().take();
    assert_eq!(lines[0], format("hi", Some("red"), &["bold"]));
    assert_eq!(
        lines[1],
        "\x1b[32m┏━━━━┓\n┃ ab ┃\n┗━━━━┛\x1b[0m"
    );
}
