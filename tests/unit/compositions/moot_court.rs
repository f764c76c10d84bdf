use super::*;
use crate::{foundation::core::FrameIndex, primitives::chat::ChatPhase};

#[test]
fn builds_clean() {
    let comp = build().unwrap();
    assert_eq!(comp.meta.id, ID);
    assert!(comp.check().warnings.is_empty(), "{:?}", comp.check().warnings);
}

#[test]
fn exchange_messages_do_not_overlap() {
    let msgs = exchange();
    for pair in msgs.windows(2) {
        assert!(pair[0].complete_frame() <= pair[1].typing_start);
    }
}

#[test]
fn bench_is_typing_before_it_speaks() {
    let msgs = exchange();
    let bench = &msgs[1];
    assert_eq!(bench.phase(100.0), ChatPhase::Typing);
    assert_eq!(bench.phase(130.0), ChatPhase::Revealing);

    let comp = build().unwrap();
    // Scene "session" starts at 100, so local 100 is absolute 200.
    let out = comp.render(FrameIndex(200));
    let session = out.nodes.iter().find(|n| n.name.as_deref() == Some("session")).unwrap();
    assert!(session.find("typing").is_some());
}

#[test]
fn verdict_ring_is_on_screen_at_the_end() {
    let comp = build().unwrap();
    let out = comp.render(FrameIndex(DURATION - 1));
    assert!(out.nodes.iter().any(|n| n.find("score-ring").is_some()));
}
