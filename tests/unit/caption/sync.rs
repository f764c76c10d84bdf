use super::*;

fn tagline() -> CaptionPhrase {
    CaptionPhrase::new("RATIO. See how far you can go.", 1310, 1480)
}

#[test]
fn tagline_midpoint_highlights_first_four_words() {
    let c = active_caption(&[tagline()], FrameIndex(1395)).unwrap();
    assert_eq!(c.progress, 0.5);
    assert_eq!(c.word_index, 3);
    let lit: Vec<&str> = c
        .words
        .iter()
        .filter(|w| w.highlighted)
        .map(|w| w.text.as_str())
        .collect();
    assert_eq!(lit, ["RATIO.", "See", "how", "far"]);
    assert!(c.words[4..].iter().all(|w| !w.highlighted));
    assert_eq!(c.opacity, 1.0);
}

#[test]
fn window_is_closed_on_both_ends() {
    let p = [tagline()];
    assert!(active_caption(&p, FrameIndex(1309)).is_none());
    assert!(active_caption(&p, FrameIndex(1481)).is_none());

    let first = active_caption(&p, FrameIndex(1310)).unwrap();
    assert_eq!(first.word_index, 0);
    assert_eq!(first.opacity, 0.0);

    let last = active_caption(&p, FrameIndex(1480)).unwrap();
    assert_eq!(last.word_index, last.words.len() - 1);
    assert_eq!(last.opacity, 0.0);
}

#[test]
fn word_index_stays_in_bounds() {
    let phrases = [
        tagline(),
        CaptionPhrase::new("Objection", 0, 3),
        CaptionPhrase::new("a b c d e f g h i j k l", 10, 12),
    ];
    for p in &phrases {
        for f in p.from..=p.to {
            let c = active_caption(&phrases, FrameIndex(f as u64)).unwrap();
            assert!(c.word_index < c.words.len());
            assert!((0.0..=1.0).contains(&c.opacity));
        }
    }
}

#[test]
fn fades_are_eased_ramps() {
    let p = [tagline()];
    let at = |f: u64| active_caption(&p, FrameIndex(f)).unwrap().opacity;
    assert!(at(1314) > 0.5 && at(1314) < 1.0);
    assert_eq!(at(1318), 1.0);
    assert_eq!(at(1472), 1.0);
    assert!(at(1476) > 0.0 && at(1476) < 1.0);
    for f in 1310..1318 {
        assert!(at(f + 1) >= at(f));
    }
}

#[test]
fn overlapping_windows_resolve_to_first_match() {
    let phrases = [
        CaptionPhrase::new("first", 0, 100),
        CaptionPhrase::new("second", 50, 150),
        CaptionPhrase::new("third", 151, 200),
    ];
    let c = active_caption(&phrases, FrameIndex(75)).unwrap();
    assert_eq!((c.index, c.text.as_str()), (0, "first"));
    assert_eq!(active_caption(&phrases, FrameIndex(120)).unwrap().index, 1);
    assert_eq!(caption_overlaps(&phrases), vec![(0, 1)]);

    let touching = [
        CaptionPhrase::new("a", 0, 10),
        CaptionPhrase::new("b", 10, 20),
    ];
    assert_eq!(caption_overlaps(&touching), vec![(0, 1)]);
}

#[test]
fn degenerate_phrases_do_not_panic() {
    let zero = [CaptionPhrase::new("Court is adjourned", 40, 40)];
    let c = active_caption(&zero, FrameIndex(40)).unwrap();
    assert_eq!(c.progress, 0.0);
    assert_eq!(c.word_index, 0);

    let blank = [CaptionPhrase::new("   ", 0, 10)];
    let c = active_caption(&blank, FrameIndex(5)).unwrap();
    assert!(c.words.is_empty());
    assert_eq!(c.word_index, 0);

    let inverted = [CaptionPhrase::new("never", 20, 10)];
    assert!(active_caption(&inverted, FrameIndex(15)).is_none());
    assert!(active_caption(&[], FrameIndex(0)).is_none());
}

#[test]
fn full_range_window_does_not_overflow() {
    let wide = [CaptionPhrase::new("a b", i64::MIN, i64::MAX)];
    let c = active_caption(&wide, FrameIndex(5)).unwrap();
    assert!((c.progress - 0.5).abs() < 1e-9);
    assert_eq!(c.word_index, 1);
    assert!((0.0..=1.0).contains(&c.opacity));

    let from_min = [CaptionPhrase::new("x", i64::MIN, 0)];
    assert!(active_caption(&from_min, FrameIndex(0)).is_some());
}
