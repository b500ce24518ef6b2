// Copyright 2025 the Numberline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives the centering observer with a realistic keystroke sequence.

use core::time::Duration;

use numberline_core::input::{FieldId, RawInput};
use numberline_core::ruler::RulerConfig;
use numberline_scroll::{CenteringObserver, ScrollBehavior, ScrollViewport};

const FRAME: Duration = Duration::from_millis(16);

#[test]
fn typing_scrolls_once_per_effective_change() {
    let config = RulerConfig::default();
    let mut raw = RawInput::new();
    let mut observer = CenteringObserver::new();
    let mut viewport = ScrollViewport::new(1200.0, config.canvas_width());

    let mount = observer
        .observe_and_apply(&config, &raw.inputs(), &mut viewport)
        .expect("mount always scrolls");
    assert_eq!(mount.behavior, ScrollBehavior::Instant);

    let mut requests = Vec::new();
    let keys: &[(FieldId, char)] = &[
        (FieldId::Start, '4'),
        (FieldId::Start, 'x'), // refused, no change
        (FieldId::Start, '0'),
        (FieldId::Delta, '-'), // "-" parses to nothing, key unchanged
        (FieldId::Delta, '9'),
    ];
    for &(field, c) in keys {
        let _ = raw.field_mut(field).push_char(c);
        if let Some(request) = observer.observe_and_apply(&config, &raw.inputs(), &mut viewport) {
            requests.push(request);
        }
        viewport.advance(FRAME);
    }

    assert_eq!(requests.len(), 3);
    assert!(
        requests.iter().all(|r| r.behavior == ScrollBehavior::Smooth),
        "only the mount is instant"
    );

    // Rapid keystrokes: only the latest target is honored.
    while viewport.advance(FRAME) {}
    let expected = (config.to_coordinate(40) + config.to_coordinate(31)) / 2.0;
    assert_eq!(viewport.center(), expected);
}

#[test]
fn re_renders_without_changes_never_scroll() {
    let config = RulerConfig::default();
    let raw = RawInput::from_texts("12", "-3").unwrap();
    let mut observer = CenteringObserver::new();
    let mut viewport = ScrollViewport::new(1000.0, config.canvas_width());

    observer.observe_and_apply(&config, &raw.inputs(), &mut viewport);
    viewport.drag_by(300.0);
    let dragged = viewport.offset();

    for _ in 0..5 {
        assert!(
            observer
                .observe_and_apply(&config, &raw.inputs(), &mut viewport)
                .is_none()
        );
    }
    assert_eq!(viewport.offset(), dragged);
}
