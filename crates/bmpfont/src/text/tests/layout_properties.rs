//! Layout invariants across the draw and measure paths

use super::{loaded_face, monospace_atlas, proportional_atlas};
use crate::render::{Blit, Color};
use crate::text::{Alignment, ClipRegion, WrappedLayout};

const SAMPLES: [&str; 8] = [
    "",
    "Hello",
    "Wide mmm and thin iii",
    "long-word breaks here",
    "line one\nline two\n\nfour",
    "  leading and  double  spaces",
    "trailing newline\n",
    "AVeryLongWordWithoutAnySpacesAtAll",
];

fn origins(blits: &[Blit]) -> Vec<(i32, i32)> {
    blits.iter().map(|blit| (blit.dest_x, blit.dest_y)).collect()
}

#[test]
fn test_wrap_matches_plain_line_when_it_fits() {
    for text in SAMPLES.iter().filter(|text| !text.contains('\n')) {
        let (face, mut backend) = loaded_face(&proportional_atlas());
        let width = face.canvas(&mut backend).draw_str(text, 5, 7, Color::WHITE);
        let line_blits = std::mem::take(&mut backend.blits);

        for wrap in [width, width + 10] {
            let height = face.canvas(&mut backend).draw_str_wrap(text, 5, 7, wrap, Color::WHITE);
            assert_eq!(height, 16, "{text:?} at {wrap}");
            assert_eq!(std::mem::take(&mut backend.blits), line_blits, "{text:?} at {wrap}");
            assert_eq!(face.measure_wrapped(text, wrap).width, width, "{text:?} at {wrap}");
        }
    }
}

#[test]
fn test_unwrapped_height_counts_newlines() {
    let (face, _backend) = loaded_face(&proportional_atlas());
    for text in SAMPLES {
        let lines = u32::try_from(text.matches('\n').count()).unwrap() + 1;
        assert_eq!(face.measure(text, 0).height, lines * face.cell_height(), "{text:?}");
    }
}

#[test]
fn test_unwrapped_measure_matches_draw() {
    let (face, mut backend) = loaded_face(&proportional_atlas());
    for text in SAMPLES {
        let drawn = face.canvas(&mut backend).draw_str(text, 0, 0, Color::WHITE);
        assert_eq!(face.measure(text, 0).width, drawn, "{text:?}");
    }
}

#[test]
fn test_word_wrap_measure_matches_draw() {
    let (face, mut backend) = loaded_face(&proportional_atlas());
    for text in SAMPLES {
        for wrap in [1, 7, 24, 40, 64, 100, 1000] {
            for alignment in [Alignment::Left, Alignment::Center, Alignment::Right] {
                let drawn = face
                    .canvas(&mut backend)
                    .with_alignment(alignment)
                    .draw_str_wrap(text, 0, 0, wrap, Color::WHITE);
                assert_eq!(face.measure_wrapped(text, wrap).height, drawn, "{text:?} at {wrap}");
            }
        }
    }
}

#[test]
fn test_char_wrap_measure_matches_draw() {
    let (face, mut backend) = loaded_face(&proportional_atlas());
    for text in SAMPLES {
        for wrap in [1, 7, 24, 40, 64, 100, 1000] {
            let drawn = face.canvas(&mut backend).draw_str_char_wrap(text, 0, 0, wrap, Color::WHITE);
            assert_eq!(face.measure(text, wrap).height, drawn, "{text:?} at {wrap}");

            let rows = backend.blits.iter().map(|blit| blit.dest_y).max().map_or(0, |y| y + 16);
            assert!(u32::try_from(rows).unwrap() <= drawn, "{text:?} at {wrap}");
            backend.blits.clear();
        }
    }
}

#[test]
fn test_out_of_range_codes_draw_nothing() {
    let (face, mut backend) = loaded_face(&monospace_atlas());
    let mut canvas = face.canvas(&mut backend);

    for code in (0..32u8).chain(128..=255u8) {
        assert_eq!(canvas.draw_char(code, 0, 0, Color::WHITE), 0, "code {code}");
    }
    assert_eq!(canvas.draw_str([0x80, b'A', 0xFF], 0, 0, Color::WHITE), 8);
    drop(canvas);

    assert_eq!(backend.blits.len(), 1);
}

#[test]
fn test_short_words_are_never_split() {
    let atlas = monospace_atlas();
    let layout = WrappedLayout::build(&atlas.metrics, b"aa bbbb cc", 56);
    let lines: Vec<Vec<&[u8]>> = layout
        .lines()
        .iter()
        .map(|line| line.words.iter().map(|word| word.text).collect())
        .collect();

    assert_eq!(lines, vec![vec![&b"aa "[..]], vec![&b"bbbb "[..], &b"cc"[..]]]);
}

#[test]
fn test_overlong_word_gets_lines_of_its_own() {
    let atlas = monospace_atlas();
    let layout = WrappedLayout::build(&atlas.metrics, b"abcdefghij", 32);
    let lines: Vec<Vec<&[u8]>> = layout
        .lines()
        .iter()
        .map(|line| line.words.iter().map(|word| word.text).collect())
        .collect();

    assert_eq!(lines, vec![vec![&b"abcd"[..]], vec![&b"efgh"[..]], vec![&b"ij"[..]]]);
    assert!(layout.lines().iter().all(|line| line.width <= 32));
}

#[test]
fn test_hyphen_break_point() {
    let atlas = monospace_atlas();

    let fits = WrappedLayout::build(&atlas.metrics, b"ab-cd", 100);
    assert_eq!(fits.line_count(), 1);
    assert_eq!(fits.lines()[0].words[1].x, 24);

    let split = WrappedLayout::build(&atlas.metrics, b"ab-cd", 32);
    assert_eq!(split.line_count(), 2);
    assert_eq!(split.lines()[0].words[0].text, b"ab-");
    assert_eq!(split.lines()[1].words[0].text, b"cd");
}

#[test]
fn test_overlong_run_with_space_scenario() {
    // 8x16 cells, every advance 8, wrap width 24
    let (face, mut backend) = loaded_face(&monospace_atlas());
    let height = face.canvas(&mut backend).draw_str_wrap("AAAA AAAA", 0, 0, 24, Color::WHITE);

    // "AAA" | "A " | "AAA" | "A": each unit overflows the line before it
    assert_eq!(height, 64);
    assert_eq!(
        origins(&backend.blits),
        vec![(0, 0), (8, 0), (16, 0), (0, 16), (8, 16), (0, 32), (8, 32), (16, 32), (0, 48)]
    );
    assert_eq!(face.measure_wrapped("AAAA AAAA", 24).height, 64);
}

#[test]
fn test_alignment_offsets_each_line() {
    let cases = [
        (Alignment::Left, vec![(0, 0), (8, 0), (16, 0), (0, 16), (8, 16)]),
        (Alignment::Center, vec![(4, 0), (12, 0), (20, 0), (4, 16), (12, 16)]),
        (Alignment::Right, vec![(8, 0), (16, 0), (24, 0), (8, 16), (16, 16)]),
    ];

    for (alignment, expected) in cases {
        let (face, mut backend) = loaded_face(&monospace_atlas());
        let height = face
            .canvas(&mut backend)
            .with_alignment(alignment)
            .draw_str_wrap("aa bb", 0, 0, 24, Color::WHITE);

        assert_eq!(height, 32);
        assert_eq!(origins(&backend.blits), expected, "{alignment:?}");
    }
}

#[test]
fn test_face_alignment_applies_to_wrapped_draws_only() {
    let (mut face, mut backend) = loaded_face(&monospace_atlas());
    face.set_alignment(Alignment::Right);

    face.canvas(&mut backend).draw_str("ab", 0, 0, Color::WHITE);
    assert_eq!(origins(&backend.blits), vec![(0, 0), (8, 0)]);
    backend.blits.clear();

    face.canvas(&mut backend).draw_str_wrap("ab", 0, 0, 40, Color::WHITE);
    assert_eq!(origins(&backend.blits), vec![(24, 0), (32, 0)]);
}

#[test]
fn test_zero_clip_sentinel_is_unclipped() {
    let text = "Clip me\nplease";
    let (mut face, mut backend) = loaded_face(&monospace_atlas());
    let unclipped_width = face.canvas(&mut backend).draw_str(text, -4, -4, Color::WHITE);
    let unclipped = std::mem::take(&mut backend.blits);

    face.set_clip(0, 0, 0, 0);
    assert!(!face.is_clipped());
    let width = face.canvas(&mut backend).draw_str(text, -4, -4, Color::WHITE);
    assert_eq!(width, unclipped_width);
    assert_eq!(std::mem::take(&mut backend.blits), unclipped);

    // An explicit empty region does clip everything
    let width = face
        .canvas(&mut backend)
        .with_clip(ClipRegion::new(0, 0, 0, 0))
        .draw_str(text, -4, -4, Color::WHITE);
    assert_eq!(width, unclipped_width);
    assert!(backend.blits.is_empty());
}

#[test]
fn test_clipped_wrap_stays_inside_clip() {
    let clip = ClipRegion::new(10, 5, 50, 30);
    let (mut face, mut backend) = loaded_face(&proportional_atlas());
    face.set_clip(clip.left(), clip.top(), clip.right(), clip.bottom());

    let height = face
        .canvas(&mut backend)
        .draw_str_wrap("Wide mmm and thin iii wrapped a few times", 0, 0, 60, Color::WHITE);
    assert_eq!(height, face.measure_wrapped("Wide mmm and thin iii wrapped a few times", 60).height);

    assert!(!backend.blits.is_empty());
    for blit in &backend.blits {
        let right = blit.dest_x + i32::try_from(blit.src.width).unwrap();
        let bottom = blit.dest_y + i32::try_from(blit.src.height).unwrap();
        assert!(blit.dest_x >= clip.left() && right <= clip.right(), "{blit:?}");
        assert!(blit.dest_y >= clip.top() && bottom <= clip.bottom(), "{blit:?}");
    }
}
